//! Gillespie simulator of mass-action reaction networks.
//!
//! [`Gillespie`] implements [`grn_model::Simulator`]: it samples the exact
//! stochastic dynamics of a [`grn_model::Model`] with either the
//! first-reaction method or the direct method (see Gillespie 2007) and
//! records the populations at the time points of the model.
pub mod algorithm;
pub mod event;
pub mod gillespie;
pub mod propensity;

use serde::Serialize;

#[doc(inline)]
pub use crate::algorithm::{Algorithm, Direct, FirstReaction, SelectReaction};
#[doc(inline)]
pub use crate::gillespie::Gillespie;

#[cfg(test)]
#[macro_use(quickcheck)]
extern crate quickcheck_macros;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Seed(u64);

impl Seed {
    pub fn new(seed: u64) -> Self {
        Seed(seed)
    }

    pub fn get_seed(&self) -> &u64 {
        &self.0
    }
}

impl Default for Seed {
    fn default() -> Self {
        Seed(26u64)
    }
}
