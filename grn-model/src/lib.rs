//! Stochastic model of a gene regulatory network (GRN) and the features
//! extracted from its simulated trajectories.
//!
//! The model is a closed mass-action reaction network declared with
//! [`ModelBuilder`]. Simulating it is delegated to any engine implementing
//! [`Simulator`], whose trajectories are then reduced by
//! [`extract_features`].
//!
//! # Example
//! ```no_run
//! use grn_model::{
//!     generate_simulation_data, grn_population, GrnRates, Simulator,
//! };
//! # fn engine() -> Box<dyn Simulator> { unimplemented!() }
//!
//! // the negative-feedback gene circuit with the default rates
//! let model = grn_population(&GrnRates::default()).unwrap();
//! let simulator = engine();
//! let (trajectories, features) =
//!     generate_simulation_data(&model, simulator.as_ref()).unwrap();
//! println!("{}", features);
//! ```
pub mod error;
pub mod features;
pub mod model;
pub mod network;
pub mod parameter;
pub mod reaction;
pub mod simulator;
pub mod species;
pub mod timespan;
pub mod trajectory;

#[doc(inline)]
pub use crate::error::{DefinitionError, Error, ReductionError, SimulationError};
#[doc(inline)]
pub use crate::features::{extract_features, FeatureKind, Features};
#[doc(inline)]
pub use crate::model::{Model, ModelBuilder};
#[doc(inline)]
pub use crate::network::{grn_population, GrnRates, GrnRatesBuilder};
pub use crate::parameter::Parameter;
pub use crate::reaction::{Channel, Coefficient, Reaction};
pub use crate::simulator::Simulator;
pub use crate::species::Species;
pub use crate::timespan::TimeSpan;
pub use crate::trajectory::Trajectory;

#[macro_use]
extern crate derive_builder;
#[cfg(test)]
#[macro_use(quickcheck)]
extern crate quickcheck_macros;

/// Number of molecules of a species.
pub type NbMolecules = u64;

pub fn generate_simulation_data<S: Simulator + ?Sized>(
    model: &Model,
    simulator: &S,
) -> Result<(Vec<Trajectory>, Features), Error> {
    //! Simulate `model` and extract the features of the species in the first
    //! realization.
    let trajectories = simulator.run(model)?;
    let first = trajectories.first().ok_or(SimulationError::NoTrajectory)?;
    let features = extract_features(first.species())?;
    Ok((trajectories, features))
}
