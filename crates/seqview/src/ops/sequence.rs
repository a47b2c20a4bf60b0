//! One-letter residue sequence shared by the text display and the 3D viewer.

use crate::ops::error::Error;
use std::fmt;
use std::str::FromStr;

/// Immutable sequence of one-letter residue codes.
///
/// Index `i` is the `i`-th qualifying residue of the source chain. Codes are ASCII letters
/// plus the `?`, `*`, and `-` placeholders, so every character is one byte and needs no
/// escaping inside HTML.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Sequence {
    codes: String,
}

impl Sequence {
    /// Wraps codes produced by the extractor, which only ever emits valid characters.
    pub(crate) fn from_codes(codes: String) -> Self {
        debug_assert!(codes.chars().all(is_residue_code));
        Self { codes }
    }

    pub fn as_str(&self) -> &str {
        &self.codes
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    pub fn chars(&self) -> std::str::Chars<'_> {
        self.codes.chars()
    }

    /// Half-open slice `[start, end)` that clamps to the sequence length.
    ///
    /// Inverted or out-of-range bounds produce an empty string instead of panicking, which is
    /// what the range annotator relies on for overlapping or backwards ranges.
    pub fn segment(&self, start: usize, end: usize) -> &str {
        let end = end.min(self.codes.len());
        if start >= end {
            return "";
        }
        &self.codes[start..end]
    }
}

fn is_residue_code(c: char) -> bool {
    c.is_ascii_alphabetic() || matches!(c, '?' | '*' | '-')
}

impl FromStr for Sequence {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Some((position, character)) = s.chars().enumerate().find(|(_, c)| !is_residue_code(*c)) {
            return Err(Error::InvalidSequence {
                position,
                character,
            });
        }
        Ok(Self {
            codes: s.to_string(),
        })
    }
}

impl fmt::Display for Sequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.codes)
    }
}

impl AsRef<str> for Sequence {
    fn as_ref(&self) -> &str {
        &self.codes
    }
}
