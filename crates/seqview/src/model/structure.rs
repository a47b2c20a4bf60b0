use super::atom::Atom;
use super::frame::Model;
use super::types::Point;
use std::fmt;

/// Parsed structural record: an ordered list of coordinate models.
///
/// Models appear in file order. Files without `MODEL` records produce a single model, and
/// files without any coordinate records produce an empty structure.
#[derive(Debug, Clone, Default)]
pub struct Structure {
    models: Vec<Model>,
}

impl Structure {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_model(&mut self, model: Model) {
        self.models.push(model);
    }

    pub fn models(&self) -> &[Model] {
        &self.models
    }

    pub fn first_model(&self) -> Option<&Model> {
        self.models.first()
    }

    pub fn model_count(&self) -> usize {
        self.models.len()
    }

    pub fn chain_count(&self) -> usize {
        self.models.iter().map(|m| m.chain_count()).sum()
    }

    pub fn residue_count(&self) -> usize {
        self.models.iter().map(|m| m.residue_count()).sum()
    }

    pub fn atom_count(&self) -> usize {
        self.iter_atoms().count()
    }

    pub fn is_empty(&self) -> bool {
        self.models.iter().all(|m| m.is_empty())
    }

    pub fn iter_models(&self) -> std::slice::Iter<'_, Model> {
        self.models.iter()
    }

    pub fn iter_atoms(&self) -> impl Iterator<Item = &Atom> {
        self.models.iter().flat_map(|m| m.iter_atoms())
    }

    /// Mean position of every atom across all models, or the origin when empty.
    pub fn geometric_center(&self) -> Point {
        let mut sum = nalgebra::Vector3::zeros();
        let mut count = 0usize;

        for atom in self.iter_atoms() {
            sum += atom.pos.coords;
            count += 1;
        }

        if count == 0 {
            Point::origin()
        } else {
            Point::from(sum / count as f64)
        }
    }
}

impl FromIterator<Model> for Structure {
    fn from_iter<T: IntoIterator<Item = Model>>(iter: T) -> Self {
        Self {
            models: iter.into_iter().collect(),
        }
    }
}

impl fmt::Display for Structure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Structure {{ models: {}, chains: {}, residues: {}, atoms: {} }}",
            self.model_count(),
            self.chain_count(),
            self.residue_count(),
            self.atom_count()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::chain::Chain;
    use crate::model::residue::Residue;
    use crate::model::types::{ResidueCategory, StandardResidue};

    fn single_atom_model(serial: i32, x: f64) -> Model {
        let mut residue = Residue::new(
            1,
            None,
            "ALA",
            Some(StandardResidue::ALA),
            ResidueCategory::Standard,
        );
        residue.add_atom(Atom::new("CA", "C", Point::new(x, 0.0, 0.0)));
        let mut chain = Chain::new("A");
        chain.add_residue(residue);
        let mut model = Model::new(serial);
        model.add_chain(chain);
        model
    }

    #[test]
    fn structure_new_is_empty() {
        let structure = Structure::new();

        assert!(structure.is_empty());
        assert!(structure.first_model().is_none());
        assert_eq!(structure.model_count(), 0);
    }

    #[test]
    fn structure_with_only_empty_models_is_empty() {
        let mut structure = Structure::new();
        structure.add_model(Model::new(1));

        assert!(structure.is_empty());
        assert_eq!(structure.model_count(), 1);
    }

    #[test]
    fn structure_counts_span_all_models() {
        let structure: Structure = vec![single_atom_model(1, 0.0), single_atom_model(2, 2.0)]
            .into_iter()
            .collect();

        assert_eq!(structure.model_count(), 2);
        assert_eq!(structure.chain_count(), 2);
        assert_eq!(structure.residue_count(), 2);
        assert_eq!(structure.atom_count(), 2);
        assert_eq!(structure.first_model().unwrap().serial, 1);
    }

    #[test]
    fn structure_geometric_center_averages_atoms() {
        let structure: Structure = vec![single_atom_model(1, 0.0), single_atom_model(2, 2.0)]
            .into_iter()
            .collect();

        let center = structure.geometric_center();

        assert!((center.x - 1.0).abs() < 1e-10);
        assert!(center.y.abs() < 1e-10);
        assert!(center.z.abs() < 1e-10);
    }

    #[test]
    fn structure_geometric_center_returns_origin_for_empty_structure() {
        assert_eq!(Structure::new().geometric_center(), Point::origin());
    }

    #[test]
    fn structure_display_formats_correctly() {
        let structure: Structure = vec![single_atom_model(1, 0.0)].into_iter().collect();

        assert_eq!(
            format!("{}", structure),
            "Structure { models: 1, chains: 1, residues: 1, atoms: 1 }"
        );
    }
}
