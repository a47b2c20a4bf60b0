use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Io(#[from] crate::io::Error),

    #[error("color range {start}-{end} lies outside a sequence of length {len}")]
    RangeIndex { start: usize, end: usize, len: usize },

    #[error("color range {start}-{end} {reason}")]
    RangeOverlap {
        start: usize,
        end: usize,
        reason: String,
    },

    #[error("invalid color range '{input}': {reason}")]
    InvalidRange { input: String, reason: String },

    #[error("unknown color '{name}' (expected one of: {expected})")]
    UnknownColor { name: String, expected: String },

    #[error("invalid residue code '{character}' at position {position}")]
    InvalidSequence { position: usize, character: char },
}

impl Error {
    pub fn range_overlap(start: usize, end: usize, reason: impl Into<String>) -> Self {
        Self::RangeOverlap {
            start,
            end,
            reason: reason.into(),
        }
    }

    /// Attaches the input path to decoding and parsing failures. Other variants pass through.
    pub fn with_path(self, path: impl Into<PathBuf>) -> Self {
        match self {
            Self::Io(inner) => Self::Io(inner.with_path(path)),
            other => other,
        }
    }

    pub fn invalid_range(input: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidRange {
            input: input.into(),
            reason: reason.into(),
        }
    }
}
