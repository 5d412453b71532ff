//! Errors raised while defining, simulating and reducing a reaction network.
use thiserror::Error;

/// The model is not well formed: raised by [`crate::ModelBuilder`] as soon
/// as the offending declaration is registered.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DefinitionError {
    #[error("reaction `{reaction}` references undeclared species `{species}`")]
    UndeclaredSpecies { reaction: String, species: String },
    #[error(
        "reaction `{reaction}` references undeclared parameter `{parameter}`"
    )]
    UndeclaredParameter { reaction: String, parameter: String },
    #[error("{kind} `{name}` is declared more than once")]
    DuplicateName { kind: &'static str, name: String },
    #[error("the model has no time span")]
    MissingTimeSpan,
    #[error("invalid time span: {0}")]
    InvalidTimeSpan(String),
}

/// Failures of a simulation engine, surfaced unmodified to the caller.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SimulationError {
    #[error(
        "reaction `{reaction}` has invalid propensity {propensity} at time {time}"
    )]
    InvalidPropensity { reaction: String, propensity: f64, time: f64 },
    #[error("reached the maximal number of reactions {iterations} at time {time}")]
    MaxIterations { iterations: usize, time: f64 },
    #[error("the model `{0}` has no species to simulate")]
    EmptyModel(String),
    #[error("the simulator returned no trajectory")]
    NoTrajectory,
    #[error("{0}")]
    Engine(String),
}

/// The trajectory handed to the feature extractor has a malformed shape.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReductionError {
    #[error("cannot reduce over an empty time axis")]
    EmptyTimeAxis,
    #[error("cannot reduce a trajectory without species columns")]
    NoSpecies,
    #[error("trajectory tensor must have a time column, found {0} columns")]
    MissingTimeColumn(usize),
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    #[error(transparent)]
    Definition(#[from] DefinitionError),
    #[error(transparent)]
    Simulation(#[from] SimulationError),
    #[error(transparent)]
    Reduction(#[from] ReductionError),
}
