//! Molecular species, the state variables of the network.
use crate::NbMolecules;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Species {
    name: String,
    /// Number of molecules at the start of each realization
    initial: NbMolecules,
}

impl Species {
    pub fn new(name: impl Into<String>, initial: NbMolecules) -> Self {
        Species { name: name.into(), initial }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn initial(&self) -> NbMolecules {
        self.initial
    }
}
