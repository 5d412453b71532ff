//! Summary statistics of a trajectory, computed per species over the time
//! axis.
use std::fmt;

use ndarray::{Array1, ArrayView2, Axis};
use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::error::ReductionError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FeatureKind {
    Sum,
    Max,
    Min,
    Mean,
}

impl FeatureKind {
    pub const ALL: [FeatureKind; 4] =
        [FeatureKind::Sum, FeatureKind::Max, FeatureKind::Min, FeatureKind::Mean];

    pub fn key(&self) -> &'static str {
        match self {
            FeatureKind::Sum => "sum",
            FeatureKind::Max => "max",
            FeatureKind::Min => "min",
            FeatureKind::Mean => "mean",
        }
    }
}

impl fmt::Display for FeatureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

/// The sum, the maximum, the minimum and the mean of each species
/// population over time, one entry per species.
#[derive(Clone, Debug, PartialEq)]
pub struct Features {
    pub sum: Array1<f64>,
    pub max: Array1<f64>,
    pub min: Array1<f64>,
    pub mean: Array1<f64>,
}

impl Features {
    pub fn get(&self, kind: FeatureKind) -> &Array1<f64> {
        match kind {
            FeatureKind::Sum => &self.sum,
            FeatureKind::Max => &self.max,
            FeatureKind::Min => &self.min,
            FeatureKind::Mean => &self.mean,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (FeatureKind, &Array1<f64>)> {
        FeatureKind::ALL.into_iter().map(move |kind| (kind, self.get(kind)))
    }

    pub fn nb_species(&self) -> usize {
        self.sum.len()
    }
}

pub fn extract_features(
    trajectory: ArrayView2<f64>,
) -> Result<Features, ReductionError> {
    //! Reduce each column of `trajectory`, whose rows are the time samples
    //! and whose columns are the species (the time column must be excluded
    //! by the caller), to its sum, max, min and mean.
    if trajectory.ncols() == 0 {
        return Err(ReductionError::NoSpecies);
    }
    let mean = trajectory
        .mean_axis(Axis(0))
        .ok_or(ReductionError::EmptyTimeAxis)?;
    let sum = trajectory.sum_axis(Axis(0));
    let max = trajectory.fold_axis(Axis(0), f64::NEG_INFINITY, |&acc, &x| {
        acc.max(x)
    });
    let min =
        trajectory.fold_axis(Axis(0), f64::INFINITY, |&acc, &x| acc.min(x));
    Ok(Features { sum, max, min, mean })
}

impl fmt::Display for Features {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, (kind, values)) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "'{}': {}", kind, values)?;
        }
        write!(f, "}}")
    }
}

impl Serialize for Features {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(FeatureKind::ALL.len()))?;
        for (kind, values) in self.iter() {
            map.serialize_entry(kind.key(), &values.to_vec())?;
        }
        map.end()
    }
}
