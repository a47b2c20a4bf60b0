//! # seqview
//!
//! **seqview** reads PDB coordinate files, extracts the one-letter amino-acid sequence of the
//! first chain, and turns user-chosen color ranges into two consistent renderings: colored
//! HTML for the sequence and per-residue style directives for a 3D structure viewer.
//!
//! ## Features
//!
//! - **Strict decoding and parsing**: UTF-8 decoding and a fixed-column PDB reader report
//!   undecodable bytes and malformed records as distinct, line-numbered errors.
//! - **Deterministic extraction**: first model, first chain, file order. The twenty
//!   canonical amino acids by default, optionally modified residues via their parent code.
//! - **One source of truth for colors**: a single sorted [`ops::RangeSet`] drives both
//!   the HTML markup and the viewer directives, so the two never disagree on boundaries.
//! - **Display surfaces**: hoverable sequence markup, a 3Dmol.js viewer program, and a
//!   self-contained HTML page, configurable from TOML.
//!
//! ## Example
//!
//! ```
//! use seqview::ops::{Color, ColorRange, ExtractConfig, RangeSet, extract_sequence};
//! use seqview::render::Representation;
//!
//! let pdb = b"\
//! ATOM      1  CA  MET A   1       0.000   0.000   0.000  1.00 10.00           C
//! ATOM      2  CA  LYS A   2       1.000   0.000   0.000  1.00 10.00           C
//! ATOM      3  CA  THR A   3       2.000   0.000   0.000  1.00 10.00           C
//! ";
//!
//! let sequence = extract_sequence(pdb, &ExtractConfig::default()).unwrap();
//! assert_eq!(sequence.as_str(), "MKT");
//!
//! let ranges = RangeSet::checked([ColorRange::new(1, 2, Color::Red)], sequence.len()).unwrap();
//! assert_eq!(
//!     ranges.to_html(&sequence),
//!     r#"M<span style="color: red;">KT</span>"#
//! );
//!
//! let directives = ranges.to_style_directives(Representation::Stick);
//! assert_eq!(directives[0].residues.to_string(), "2-3");
//! ```

mod model;

pub mod io;
pub mod ops;
pub mod render;

pub use model::atom::Atom;
pub use model::chain::Chain;
pub use model::frame::Model;
pub use model::residue::Residue;
pub use model::structure::Structure;
pub use model::types::{Point, ResidueCategory, StandardResidue};
