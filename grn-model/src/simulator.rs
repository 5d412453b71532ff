//! The capability required from a stochastic simulation engine.
use crate::error::SimulationError;
use crate::model::Model;
use crate::trajectory::Trajectory;

/// Simulate independent realizations of a [`Model`] over its time span.
///
/// Each returned [`Trajectory`] has one row per time point of
/// [`Model::time_span`] and one column per species after the time column,
/// in the declaration order of [`Model::species`].
pub trait Simulator {
    fn run(&self, model: &Model) -> Result<Vec<Trajectory>, SimulationError>;
}
