//! Atom records carried by parsed residues.
//!
//! Atoms keep the crystallographic label, element symbol, position, and occupancy read from
//! the coordinate section. The sequence pipeline never inspects coordinates directly, but the
//! structure summary and alternate-location filtering depend on them.

use super::types::Point;
use smol_str::SmolStr;
use std::fmt;

/// Labeled atom with its element symbol, Cartesian position, and occupancy.
#[derive(Debug, Clone, PartialEq)]
pub struct Atom {
    /// Atom name as it appears in the coordinate record (e.g., `CA`).
    pub name: SmolStr,
    /// Upper-case element symbol, empty when the record omits it and it cannot be inferred.
    pub element: SmolStr,
    /// Cartesian coordinates measured in ångströms.
    pub pos: Point,
    /// Fractional occupancy used to pick between alternate locations.
    pub occupancy: f64,
}

impl Atom {
    /// Creates a fully occupied atom.
    ///
    /// # Arguments
    ///
    /// * `name` - Atom label such as `"CA"` or `"OXT"`.
    /// * `element` - Element symbol such as `"C"` or `"SE"`.
    /// * `pos` - `Point` describing the Cartesian coordinates in ångströms.
    pub fn new(name: &str, element: &str, pos: Point) -> Self {
        Self {
            name: SmolStr::new(name),
            element: SmolStr::new(element.to_ascii_uppercase()),
            pos,
            occupancy: 1.0,
        }
    }

    /// Returns the same atom with a different occupancy.
    pub fn with_occupancy(mut self, occupancy: f64) -> Self {
        self.occupancy = occupancy;
        self
    }

    pub fn distance(&self, other: &Atom) -> f64 {
        nalgebra::distance(&self.pos, &other.pos)
    }
}

impl fmt::Display for Atom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Atom {{ name: \"{}\", element: {}, pos: [{:.3}, {:.3}, {:.3}] }}",
            self.name, self.element, self.pos.x, self.pos.y, self.pos.z
        )
    }
}
