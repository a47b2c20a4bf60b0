//! Sequence extraction from PDB coordinate files.
//!
//! The extractor decodes the raw bytes, parses them into a [`Structure`], and walks the
//! first chain of the first model. Every residue accepted by the configured
//! [`ResidueFilter`] contributes one one-letter code, in file order. Residues that pass the
//! filter but have no known code become [`UNKNOWN_RESIDUE_CODE`].

use crate::io::{IoContext, read_pdb_bytes};
use crate::model::chain::Chain;
use crate::model::residue::Residue;
use crate::model::structure::Structure;
use crate::ops::error::Error;
use crate::ops::sequence::Sequence;

/// Placeholder emitted for residues that qualify but map to no one-letter code.
pub const UNKNOWN_RESIDUE_CODE: char = '?';

/// Which residues of the chain contribute to the sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResidueFilter {
    /// Only the twenty canonical amino acids.
    #[default]
    Standard,
    /// Canonical amino acids plus known modified residues, which report their parent's code.
    Modified,
}

impl ResidueFilter {
    /// Returns the one-letter code for `residue`, or `None` when it does not qualify.
    pub fn code_for(&self, residue: &Residue) -> Option<char> {
        let qualifies = match self {
            ResidueFilter::Standard => residue.is_standard_amino_acid(),
            ResidueFilter::Modified => residue.category.is_amino_acid(),
        };
        qualifies.then(|| residue.one_letter().unwrap_or(UNKNOWN_RESIDUE_CODE))
    }
}

/// Options controlling sequence extraction.
#[derive(Debug, Clone, Default)]
pub struct ExtractConfig {
    pub residues: ResidueFilter,
    /// Residue vocabulary used while parsing.
    pub context: IoContext,
}

impl ExtractConfig {
    pub fn with_modified_residues() -> Self {
        Self {
            residues: ResidueFilter::Modified,
            ..Self::default()
        }
    }
}

/// Extracts the one-letter sequence of the first chain from raw PDB bytes.
///
/// # Errors
///
/// Returns [`Error::Io`] wrapping a decode error when the bytes are not UTF-8, or a parse
/// error when a coordinate record is malformed. A well-formed file without qualifying
/// residues yields an empty [`Sequence`], not an error.
pub fn extract_sequence(bytes: &[u8], config: &ExtractConfig) -> Result<Sequence, Error> {
    let structure = read_pdb_bytes(bytes, &config.context)?;
    let sequence = sequence_from_structure(&structure, config);

    if sequence.is_empty() {
        log::info!("no qualifying residues found in the first chain");
    } else {
        log::debug!("extracted {} residue codes", sequence.len());
    }
    Ok(sequence)
}

/// The chain a sequence is read from: the first chain of the first model that has one.
pub fn sequence_chain(structure: &Structure) -> Option<&Chain> {
    structure.iter_models().find_map(|model| model.first_chain())
}

pub fn sequence_from_structure(structure: &Structure, config: &ExtractConfig) -> Sequence {
    sequence_chain(structure)
        .map(|chain| sequence_from_chain(chain, config.residues))
        .unwrap_or_default()
}

pub fn sequence_from_chain(chain: &Chain, filter: ResidueFilter) -> Sequence {
    let codes: String = chain
        .iter_residues()
        .filter_map(|residue| filter.code_for(residue))
        .collect();
    Sequence::from_codes(codes)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extract(data: &str) -> Sequence {
        extract_sequence(data.as_bytes(), &ExtractConfig::default()).expect("extraction succeeds")
    }

    #[test]
    fn extract_reads_first_chain_in_file_order() {
        const PDB_DATA: &str = "\
            ATOM      1  N   MET A   1       0.000   0.000   0.000  1.00 10.00           N\n\
            ATOM      2  CA  MET A   1       1.000   0.000   0.000  1.00 10.00           C\n\
            ATOM      3  CA  LYS A   2       2.000   0.000   0.000  1.00 10.00           C\n\
            ATOM      4  CA  THR A   3       3.000   0.000   0.000  1.00 10.00           C\n\
            ATOM      5  CA  GLY B   1       4.000   0.000   0.000  1.00 10.00           C\n\
            ATOM      6  CA  TRP A   4       5.000   0.000   0.000  1.00 10.00           C\n";

        assert_eq!(extract(PDB_DATA).as_str(), "MKTW");
    }

    #[test]
    fn extract_skips_water_ligands_and_modified_residues_by_default() {
        const PDB_DATA: &str = "\
            ATOM      1  CA  ALA A   1       0.000   0.000   0.000  1.00 10.00           C\n\
            HETATM    2  CA  MSE A   2       1.000   0.000   0.000  1.00 10.00           C\n\
            ATOM      3  CA  CYS A   3       2.000   0.000   0.000  1.00 10.00           C\n\
            HETATM    4 FE   HEM A 101       3.000   0.000   0.000  1.00 10.00          FE\n\
            HETATM    5  O   HOH A 201       4.000   0.000   0.000  1.00 10.00           O\n";

        assert_eq!(extract(PDB_DATA).as_str(), "AC");
    }

    #[test]
    fn extract_with_modified_filter_uses_parent_codes() {
        const PDB_DATA: &str = "\
            ATOM      1  CA  ALA A   1       0.000   0.000   0.000  1.00 10.00           C\n\
            HETATM    2  CA  MSE A   2       1.000   0.000   0.000  1.00 10.00           C\n\
            HETATM    3  CA  UNK A   3       2.000   0.000   0.000  1.00 10.00           C\n\
            HETATM    4  O   HOH A 201       4.000   0.000   0.000  1.00 10.00           O\n";

        let sequence =
            extract_sequence(PDB_DATA.as_bytes(), &ExtractConfig::with_modified_residues())
                .unwrap();

        assert_eq!(sequence.as_str(), "AM?");
    }

    #[test]
    fn extract_honors_custom_aliases() {
        const PDB_DATA: &str = "\
            ATOM      1  CA  GLY A   1       0.000   0.000   0.000  1.00 10.00           C\n\
            HETATM    2  CA  XTR A   2       1.000   0.000   0.000  1.00 10.00           C\n";

        let mut config = ExtractConfig::with_modified_residues();
        config
            .context
            .add_alias("XTR", Some(crate::model::types::StandardResidue::TRP));

        let sequence = extract_sequence(PDB_DATA.as_bytes(), &config).unwrap();
        assert_eq!(sequence.as_str(), "GW");
    }

    #[test]
    fn extract_uses_only_the_first_model() {
        const PDB_DATA: &str = "\
            MODEL        1\n\
            ATOM      1  CA  ARG A   1       0.000   0.000   0.000  1.00 10.00           C\n\
            ATOM      2  CA  GLU A   2       1.000   0.000   0.000  1.00 10.00           C\n\
            ENDMDL\n\
            MODEL        2\n\
            ATOM      3  CA  PHE A   1       0.000   0.000   0.000  1.00 10.00           C\n\
            ENDMDL\n";

        assert_eq!(extract(PDB_DATA).as_str(), "RE");
    }

    #[test]
    fn extract_returns_empty_sequence_without_amino_acids() {
        const PDB_DATA: &str = "\
            ATOM      1  P    DA A   1       0.000   0.000   0.000  1.00 10.00           P\n\
            HETATM    2  O   HOH A 201       1.000   0.000   0.000  1.00 10.00           O\n";

        assert!(extract(PDB_DATA).is_empty());
        assert!(extract("").is_empty());
        assert!(extract("HEADER    NOTHING TO SEE\nEND\n").is_empty());
    }

    #[test]
    fn extract_is_deterministic_for_identical_bytes() {
        const PDB_DATA: &str = "\
            ATOM      1  CA  SER B   5       0.000   0.000   0.000  1.00 10.00           C\n\
            HETATM    2  CA  SEP B   6       1.000   0.000   0.000  1.00 10.00           C\n\
            ATOM      3  CA  HIS B   7       2.000   0.000   0.000  1.00 10.00           C\n\
            ATOM      4  CA  LEU C   1       3.000   0.000   0.000  1.00 10.00           C\n";

        let bytes = PDB_DATA.as_bytes().to_vec();
        for config in [ExtractConfig::default(), ExtractConfig::with_modified_residues()] {
            let first = extract_sequence(&bytes, &config).unwrap();
            let second = extract_sequence(&bytes, &config).unwrap();

            assert_eq!(first, second);
            assert!(!first.is_empty());
        }
    }

    #[test]
    fn extract_reports_decode_failures() {
        let err = extract_sequence(&[0x41, 0xff, 0xfe], &ExtractConfig::default()).unwrap_err();

        match err {
            Error::Io(inner) => assert!(inner.is_decode()),
            other => panic!("unexpected error variant: {other:?}"),
        }
    }

    #[test]
    fn extract_reports_malformed_records() {
        const PDB_DATA: &str = "\
            ATOM      1  CA  ALA A   1       0.000 abcdefg   0.000  1.00 10.00           C\n";

        let err = extract_sequence(PDB_DATA.as_bytes(), &ExtractConfig::default()).unwrap_err();

        match err {
            Error::Io(crate::io::Error::Parse { line_number, .. }) => assert_eq!(line_number, 1),
            other => panic!("unexpected error variant: {other:?}"),
        }
    }

    #[test]
    fn sequence_chain_skips_models_without_chains() {
        use crate::model::frame::Model;

        let first = Model::new(1);
        let mut second = Model::new(2);
        second.add_chain(Chain::new("C"));

        let structure: Structure = vec![first, second].into_iter().collect();

        assert_eq!(sequence_chain(&structure).map(|c| c.id.as_str()), Some("C"));
        assert!(sequence_from_structure(&structure, &ExtractConfig::default()).is_empty());
    }
}
