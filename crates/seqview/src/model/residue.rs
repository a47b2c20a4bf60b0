use super::atom::Atom;
use super::types::{ResidueCategory, StandardResidue};
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub struct Residue {
    pub id: i32,
    pub insertion_code: Option<char>,
    pub name: String,
    pub standard_name: Option<StandardResidue>,
    pub category: ResidueCategory,
    /// Parent amino acid of a modified residue (`MSE` -> `MET`), `None` when unidentified.
    pub parent: Option<StandardResidue>,
    atoms: Vec<Atom>,
}

impl Residue {
    pub fn new(
        id: i32,
        insertion_code: Option<char>,
        name: &str,
        standard_name: Option<StandardResidue>,
        category: ResidueCategory,
    ) -> Self {
        Self {
            id,
            insertion_code,
            name: name.to_string(),
            standard_name,
            category,
            parent: None,
            atoms: Vec::new(),
        }
    }

    pub fn with_parent(mut self, parent: Option<StandardResidue>) -> Self {
        self.parent = parent;
        self
    }

    /// The standard-amino-acid predicate: `true` only for the twenty canonical residues.
    pub fn is_standard_amino_acid(&self) -> bool {
        self.category == ResidueCategory::Standard && self.standard_name.is_some()
    }

    pub fn is_water(&self) -> bool {
        self.category == ResidueCategory::Water
    }

    /// One-letter code of the residue, falling back to the parent of a modified residue.
    pub fn one_letter(&self) -> Option<char> {
        self.standard_name
            .or(self.parent)
            .map(|residue| residue.one_letter())
    }

    /// Adds an atom, keeping only the highest-occupancy copy of each atom name.
    ///
    /// Alternate locations share the atom name, so a later record replaces an earlier one
    /// only when its occupancy is strictly greater. The first-seen position in the atom list
    /// is preserved either way.
    pub fn add_atom(&mut self, atom: Atom) {
        match self.atoms.iter_mut().find(|a| a.name == atom.name) {
            Some(existing) => {
                if atom.occupancy > existing.occupancy {
                    *existing = atom;
                }
            }
            None => self.atoms.push(atom),
        }
    }

    pub fn atom(&self, name: &str) -> Option<&Atom> {
        self.atoms.iter().find(|a| a.name == name)
    }

    pub fn atoms(&self) -> &[Atom] {
        &self.atoms
    }

    pub fn atom_count(&self) -> usize {
        self.atoms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.atoms.is_empty()
    }

    pub fn iter_atoms(&self) -> std::slice::Iter<'_, Atom> {
        self.atoms.iter()
    }
}

impl fmt::Display for Residue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let icode = self.insertion_code.map(String::from).unwrap_or_default();
        write!(
            f,
            "Residue {{ id: {}{}, name: \"{}\", category: {}, atoms: {} }}",
            self.id,
            icode,
            self.name,
            self.category,
            self.atom_count()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::types::Point;

    fn alanine() -> Residue {
        Residue::new(
            1,
            None,
            "ALA",
            Some(StandardResidue::ALA),
            ResidueCategory::Standard,
        )
    }

    #[test]
    fn residue_new_creates_empty_residue() {
        let residue = alanine();

        assert_eq!(residue.id, 1);
        assert_eq!(residue.name, "ALA");
        assert!(residue.is_empty());
        assert!(residue.parent.is_none());
    }

    #[test]
    fn is_standard_amino_acid_only_accepts_canonical_residues() {
        let modified = Residue::new(2, None, "MSE", None, ResidueCategory::Modified)
            .with_parent(Some(StandardResidue::MET));
        let water = Residue::new(3, None, "HOH", None, ResidueCategory::Water);

        assert!(alanine().is_standard_amino_acid());
        assert!(!modified.is_standard_amino_acid());
        assert!(!water.is_standard_amino_acid());
        assert!(water.is_water());
    }

    #[test]
    fn one_letter_uses_parent_for_modified_residues() {
        let modified = Residue::new(2, None, "MSE", None, ResidueCategory::Modified)
            .with_parent(Some(StandardResidue::MET));
        let unknown = Residue::new(3, None, "UNK", None, ResidueCategory::Modified);

        assert_eq!(alanine().one_letter(), Some('A'));
        assert_eq!(modified.one_letter(), Some('M'));
        assert_eq!(unknown.one_letter(), None);
    }

    #[test]
    fn add_atom_keeps_highest_occupancy_alternate() {
        let mut residue = alanine();
        residue.add_atom(Atom::new("N", "N", Point::origin()));
        residue.add_atom(Atom::new("CA", "C", Point::new(1.0, 0.0, 0.0)).with_occupancy(0.4));
        residue.add_atom(Atom::new("CA", "C", Point::new(2.0, 0.0, 0.0)).with_occupancy(0.6));
        residue.add_atom(Atom::new("CA", "C", Point::new(3.0, 0.0, 0.0)).with_occupancy(0.6));

        assert_eq!(residue.atom_count(), 2);
        assert_eq!(residue.atoms()[1].name, "CA");
        assert!((residue.atom("CA").unwrap().pos.x - 2.0).abs() < 1e-12);
    }

    #[test]
    fn residue_display_formats_insertion_code() {
        let mut residue = Residue::new(
            52,
            Some('A'),
            "GLY",
            Some(StandardResidue::GLY),
            ResidueCategory::Standard,
        );
        residue.add_atom(Atom::new("CA", "C", Point::origin()));

        assert_eq!(
            format!("{}", residue),
            "Residue { id: 52A, name: \"GLY\", category: Standard, atoms: 1 }"
        );
    }
}
