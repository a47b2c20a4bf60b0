use crate::model::types::{ResidueCategory, StandardResidue};
use std::collections::HashMap;
use std::str::FromStr;

/// Residue-name vocabulary used to classify residues while parsing.
///
/// The twenty canonical codes are resolved through [`StandardResidue`]. On top of that the
/// context knows common water names and a table of modified amino acids, each mapped to the
/// parent residue whose one-letter code it inherits (`None` for unidentified residues such
/// as `UNK`).
#[derive(Debug, Clone)]
pub struct IoContext {
    modified_map: HashMap<String, Option<StandardResidue>>,
    water_names: Vec<String>,
}

const WATER_NAMES: &[&str] = &["HOH", "WAT", "DOD", "H2O", "SOL", "TIP", "TIP3", "SPC"];

const MODIFIED_RESIDUES: &[(&str, Option<StandardResidue>)] = &[
    ("AIB", Some(StandardResidue::ALA)),
    ("DAL", Some(StandardResidue::ALA)),
    ("MAA", Some(StandardResidue::ALA)),
    ("AGM", Some(StandardResidue::ARG)),
    ("DAR", Some(StandardResidue::ARG)),
    ("HAR", Some(StandardResidue::ARG)),
    ("MEN", Some(StandardResidue::ASN)),
    ("DAS", Some(StandardResidue::ASP)),
    ("IAS", Some(StandardResidue::ASP)),
    ("CME", Some(StandardResidue::CYS)),
    ("CSO", Some(StandardResidue::CYS)),
    ("CSD", Some(StandardResidue::CYS)),
    ("CSS", Some(StandardResidue::CYS)),
    ("OCS", Some(StandardResidue::CYS)),
    ("SMC", Some(StandardResidue::CYS)),
    ("DGN", Some(StandardResidue::GLN)),
    ("CGU", Some(StandardResidue::GLU)),
    ("DGL", Some(StandardResidue::GLU)),
    ("PCA", Some(StandardResidue::GLU)),
    ("SAR", Some(StandardResidue::GLY)),
    ("GLZ", Some(StandardResidue::GLY)),
    ("HIC", Some(StandardResidue::HIS)),
    ("MHS", Some(StandardResidue::HIS)),
    ("NEP", Some(StandardResidue::HIS)),
    ("DIL", Some(StandardResidue::ILE)),
    ("DLE", Some(StandardResidue::LEU)),
    ("NLE", Some(StandardResidue::LEU)),
    ("ALY", Some(StandardResidue::LYS)),
    ("KCX", Some(StandardResidue::LYS)),
    ("LLP", Some(StandardResidue::LYS)),
    ("MLY", Some(StandardResidue::LYS)),
    ("M3L", Some(StandardResidue::LYS)),
    ("FME", Some(StandardResidue::MET)),
    ("MSE", Some(StandardResidue::MET)),
    ("CXM", Some(StandardResidue::MET)),
    ("DPN", Some(StandardResidue::PHE)),
    ("HYP", Some(StandardResidue::PRO)),
    ("SEP", Some(StandardResidue::SER)),
    ("TPO", Some(StandardResidue::THR)),
    ("TRO", Some(StandardResidue::TRP)),
    ("PTR", Some(StandardResidue::TYR)),
    ("TYS", Some(StandardResidue::TYR)),
    ("DVA", Some(StandardResidue::VAL)),
    ("UNK", None),
];

impl IoContext {
    pub fn new_default() -> Self {
        let modified_map = MODIFIED_RESIDUES
            .iter()
            .map(|(name, parent)| (name.to_string(), *parent))
            .collect();
        let water_names = WATER_NAMES.iter().map(|name| name.to_string()).collect();

        Self {
            modified_map,
            water_names,
        }
    }

    /// Registers an additional modified amino acid, optionally with its parent residue.
    pub fn add_alias(&mut self, name: impl Into<String>, parent: Option<StandardResidue>) {
        self.modified_map
            .insert(name.into().to_ascii_uppercase(), parent);
    }

    pub fn is_water(&self, name: &str) -> bool {
        self.water_names.iter().any(|w| w == name)
    }

    /// Looks up a modified amino acid. The outer `Option` reports whether the name is known,
    /// the inner one carries the parent residue.
    pub fn modified_parent(&self, name: &str) -> Option<Option<StandardResidue>> {
        self.modified_map.get(name).copied()
    }

    /// Classifies a raw residue name from an `ATOM` or `HETATM` record.
    ///
    /// # Returns
    ///
    /// The canonical residue (for the twenty standard amino acids), the category, and the
    /// parent amino acid of modified residues.
    pub fn classify_residue(
        &self,
        raw_name: &str,
        is_hetatm: bool,
    ) -> (
        Option<StandardResidue>,
        ResidueCategory,
        Option<StandardResidue>,
    ) {
        let name = raw_name.trim().to_ascii_uppercase();

        if let Ok(standard) = StandardResidue::from_str(&name) {
            return (Some(standard), ResidueCategory::Standard, None);
        }
        if self.is_water(&name) {
            return (None, ResidueCategory::Water, None);
        }
        if let Some(parent) = self.modified_parent(&name) {
            return (None, ResidueCategory::Modified, parent);
        }

        let category = if is_hetatm {
            ResidueCategory::Hetero
        } else {
            ResidueCategory::Polymer
        };
        (None, category, None)
    }
}

impl Default for IoContext {
    fn default() -> Self {
        Self::new_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn io_context_default_matches_new_default() {
        let a = IoContext::new_default();
        let b = IoContext::default();

        assert_eq!(a.modified_map, b.modified_map);
        assert_eq!(a.water_names, b.water_names);
    }

    #[test]
    fn classify_residue_recognizes_standard_names_case_insensitively() {
        let context = IoContext::new_default();

        assert_eq!(
            context.classify_residue("ALA", false),
            (Some(StandardResidue::ALA), ResidueCategory::Standard, None)
        );
        assert_eq!(
            context.classify_residue("gly", true),
            (Some(StandardResidue::GLY), ResidueCategory::Standard, None)
        );
    }

    #[test]
    fn classify_residue_recognizes_water_aliases() {
        let context = IoContext::new_default();

        for name in ["HOH", "WAT", "DOD", "TIP3"] {
            assert_eq!(
                context.classify_residue(name, true).1,
                ResidueCategory::Water,
                "{name} should be water"
            );
        }
    }

    #[test]
    fn classify_residue_maps_modified_residues_to_parent() {
        let context = IoContext::new_default();

        assert_eq!(
            context.classify_residue("MSE", true),
            (None, ResidueCategory::Modified, Some(StandardResidue::MET))
        );
        assert_eq!(
            context.classify_residue("SEP", false),
            (None, ResidueCategory::Modified, Some(StandardResidue::SER))
        );
        assert_eq!(
            context.classify_residue("UNK", false),
            (None, ResidueCategory::Modified, None)
        );
    }

    #[test]
    fn classify_residue_falls_back_on_record_kind() {
        let context = IoContext::new_default();

        assert_eq!(
            context.classify_residue("DA", false).1,
            ResidueCategory::Polymer
        );
        assert_eq!(
            context.classify_residue("HEM", true).1,
            ResidueCategory::Hetero
        );
        assert_eq!(context.classify_residue("NA", true).1, ResidueCategory::Hetero);
    }

    #[test]
    fn add_alias_registers_new_modified_residue() {
        let mut context = IoContext::new_default();
        assert_eq!(context.modified_parent("XYZ"), None);

        context.add_alias("xyz", Some(StandardResidue::TRP));

        assert_eq!(
            context.modified_parent("XYZ"),
            Some(Some(StandardResidue::TRP))
        );
        assert_eq!(
            context.classify_residue("XYZ", true).1,
            ResidueCategory::Modified
        );
    }
}
