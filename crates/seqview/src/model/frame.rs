//! One coordinate model of a structure, as delimited by `MODEL`/`ENDMDL` records.

use super::chain::Chain;
use std::fmt;

/// Chains belonging to a single `MODEL` block, in order of first appearance.
#[derive(Debug, Clone, PartialEq)]
pub struct Model {
    /// Serial number from the `MODEL` record, `1` for files without model records.
    pub serial: i32,
    chains: Vec<Chain>,
}

impl Model {
    pub fn new(serial: i32) -> Self {
        Self {
            serial,
            chains: Vec::new(),
        }
    }

    pub fn add_chain(&mut self, chain: Chain) {
        debug_assert!(
            self.chain(&chain.id).is_none(),
            "Attempted to add a duplicate chain ID '{}' to model {}",
            chain.id,
            self.serial
        );
        self.chains.push(chain);
    }

    pub fn chain(&self, id: &str) -> Option<&Chain> {
        self.chains.iter().find(|c| c.id == id)
    }

    /// The chain that sequence extraction reads from.
    pub fn first_chain(&self) -> Option<&Chain> {
        self.chains.first()
    }

    pub fn chains(&self) -> &[Chain] {
        &self.chains
    }

    pub fn chain_count(&self) -> usize {
        self.chains.len()
    }

    pub fn residue_count(&self) -> usize {
        self.chains.iter().map(|c| c.residue_count()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.chains.is_empty()
    }

    pub fn iter_chains(&self) -> std::slice::Iter<'_, Chain> {
        self.chains.iter()
    }

    pub fn iter_atoms(&self) -> impl Iterator<Item = &super::atom::Atom> {
        self.chains.iter().flat_map(|c| c.iter_atoms())
    }
}

impl fmt::Display for Model {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Model {{ serial: {}, chains: {}, residues: {} }}",
            self.serial,
            self.chain_count(),
            self.residue_count()
        )
    }
}
