//! Operations that turn parsed structures into sequences and colored annotations.
//!
//! Extraction reads the one-letter sequence of the first chain. Annotation sorts
//! user-defined color ranges once and derives both the HTML markup and the 3D style
//! directives from that single sorted list. Both share a common error type.

mod annotate;
mod error;
mod extract;
mod sequence;

pub use extract::{
    ExtractConfig, ResidueFilter, UNKNOWN_RESIDUE_CODE, extract_sequence, sequence_chain,
    sequence_from_chain, sequence_from_structure,
};

pub use annotate::{Color, ColorRange, RangeSet, annotate};

pub use sequence::Sequence;

pub use error::Error;
