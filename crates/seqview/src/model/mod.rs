//! Core data structures modeling a parsed structural record.
//!
//! A [`structure::Structure`] holds ordered models, each model holds ordered chains, and each
//! chain holds residues in the order they appear in the source file. That ordering is the
//! index space every downstream sequence and rendering step relies on.

pub mod atom;
pub mod chain;
pub mod frame;
pub mod residue;
pub mod structure;
pub mod types;
