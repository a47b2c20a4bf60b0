//! Canonical error type for structure decoding and parsing.
//!
//! Decoding failures (bytes that are not UTF-8 text) and grammar failures (text that is not a
//! well-formed structural record) are kept apart so callers can word "cannot process file"
//! and "malformed file" messages differently.

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while reading structural records.
#[derive(Debug, Error)]
pub enum Error {
    /// Wrapper around operating-system level I/O failures.
    #[error(
        "I/O error for {path_desc}: {source}",
        path_desc = PathDisplay(path)
    )]
    Io {
        /// Path to the file involved in the failed operation, if any.
        path: Option<PathBuf>,
        /// Underlying error emitted by the standard library.
        #[source]
        source: std::io::Error,
    },

    /// The input bytes are not valid UTF-8 text.
    #[error(
        "cannot decode {path_desc} as UTF-8 text: {source}",
        path_desc = PathDisplay(path)
    )]
    Decode {
        /// Path to the undecodable file, if known.
        path: Option<PathBuf>,
        /// Position of the first invalid byte sequence.
        #[source]
        source: std::str::Utf8Error,
    },

    /// An input line could not be parsed into the expected record.
    #[error(
        "failed to parse {format} {path_desc}: {details} (line {line_number})",
        path_desc = PathDisplay(path)
    )]
    Parse {
        /// Name of the textual format (e.g., `"PDB"`).
        format: &'static str,
        /// Path to the offending file, if known.
        path: Option<PathBuf>,
        /// One-based line number where parsing failed.
        line_number: usize,
        /// Human-readable description of what went wrong.
        details: String,
    },
}

impl Error {
    pub fn from_io(source: std::io::Error, path: Option<PathBuf>) -> Self {
        Self::Io { path, source }
    }

    pub fn decode(source: std::str::Utf8Error, path: Option<PathBuf>) -> Self {
        Self::Decode { path, source }
    }

    /// Builds an [`Error::Parse`] variant with consistent messaging.
    ///
    /// # Arguments
    ///
    /// * `format` - Name of the textual format being parsed.
    /// * `path` - Optional path pointing to the input file.
    /// * `line_number` - Line where the failure occurred (1-indexed).
    /// * `details` - Additional context about the parsing problem.
    pub fn parse(
        format: &'static str,
        path: Option<PathBuf>,
        line_number: usize,
        details: impl Into<String>,
    ) -> Self {
        Self::Parse {
            format,
            path,
            line_number,
            details: details.into(),
        }
    }

    /// Attaches a source path to errors created while reading an anonymous buffer.
    pub fn with_path(self, new_path: impl Into<PathBuf>) -> Self {
        let new_path = Some(new_path.into());
        match self {
            Self::Io { source, .. } => Self::Io {
                path: new_path,
                source,
            },
            Self::Decode { source, .. } => Self::Decode {
                path: new_path,
                source,
            },
            Self::Parse {
                format,
                line_number,
                details,
                ..
            } => Self::Parse {
                format,
                path: new_path,
                line_number,
                details,
            },
        }
    }

    /// Returns `true` when the input could not be decoded as text at all.
    pub fn is_decode(&self) -> bool {
        matches!(self, Self::Decode { .. })
    }
}

struct PathDisplay<'a>(&'a Option<PathBuf>);

impl fmt::Display for PathDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(p) => write!(f, "file '{}'", p.display()),
            None => write!(f, "stream source"),
        }
    }
}
