//! Per-range styling instructions for the 3D viewer.
//!
//! Sequence ranges are 0-based, while viewer residue selectors are 1-based. The conversion
//! happens in exactly one place, [`ResidueSpan::from_sequence_indices`].

use crate::ops::Color;
use serde::{Deserialize, Serialize, Serializer};
use serde_json::{Value, json};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Molecular drawing style understood by the viewer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Representation {
    #[default]
    Stick,
    Cartoon,
    Line,
    Cross,
    Sphere,
}

impl Representation {
    pub const ALL: [Representation; 5] = [
        Representation::Stick,
        Representation::Cartoon,
        Representation::Line,
        Representation::Cross,
        Representation::Sphere,
    ];

    /// Style key used in viewer style objects.
    pub fn key(&self) -> &'static str {
        match self {
            Representation::Stick => "stick",
            Representation::Cartoon => "cartoon",
            Representation::Line => "line",
            Representation::Cross => "cross",
            Representation::Sphere => "sphere",
        }
    }
}

impl fmt::Display for Representation {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// A representation name outside [`Representation::ALL`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown representation '{name}' (expected one of: {expected})")]
pub struct UnknownRepresentation {
    pub name: String,
    pub expected: String,
}

impl FromStr for Representation {
    type Err = UnknownRepresentation;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|representation| representation.key() == lower)
            .ok_or_else(|| UnknownRepresentation {
                name: s.trim().to_string(),
                expected: Self::ALL.map(|representation| representation.key()).join(", "),
            })
    }
}

/// Inclusive, 1-based residue span as written in viewer selectors (`"3-7"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ResidueSpan {
    first: usize,
    last: usize,
}

impl ResidueSpan {
    /// Converts inclusive 0-based sequence indices into a 1-based residue span.
    pub fn from_sequence_indices(start: usize, end: usize) -> Self {
        Self {
            first: start.saturating_add(1),
            last: end.saturating_add(1),
        }
    }
}

impl fmt::Display for ResidueSpan {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}-{}", self.first, self.last)
    }
}

impl Serialize for ResidueSpan {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Colors one residue span with one representation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StyleDirective {
    pub residues: ResidueSpan,
    pub representation: Representation,
    pub color: Color,
}

impl StyleDirective {
    pub fn new(residues: ResidueSpan, representation: Representation, color: Color) -> Self {
        Self {
            residues,
            representation,
            color,
        }
    }

    /// Atom selector object, e.g. `{"resi":"1-3"}`.
    pub fn selector(&self) -> Value {
        json!({ "resi": self.residues.to_string() })
    }

    /// Style object, e.g. `{"stick":{"color":"red"}}`.
    pub fn style(&self) -> Value {
        json!({ self.representation.key(): { "color": self.color.css_name() } })
    }
}

impl fmt::Display for StyleDirective {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "residues {} -> {} {}",
            self.residues, self.color, self.representation
        )
    }
}
