//! A single realization of the stochastic process, sampled over the time
//! span of the model.
use ndarray::{s, Array2, ArrayView1, ArrayView2};

use crate::error::ReductionError;

/// Tensor indexed by `[time sample, column]`: column 0 stores the sample
/// times and column `i + 1` the population of the `i`-th species of the
/// model.
#[derive(Clone, Debug, PartialEq)]
pub struct Trajectory(Array2<f64>);

impl Trajectory {
    pub fn new(data: Array2<f64>) -> Result<Self, ReductionError> {
        if data.ncols() == 0 {
            return Err(ReductionError::MissingTimeColumn(0));
        }
        Ok(Trajectory(data))
    }

    pub fn times(&self) -> ArrayView1<'_, f64> {
        self.0.column(0)
    }

    /// The populations of all species, without the time column.
    pub fn species(&self) -> ArrayView2<'_, f64> {
        self.0.slice(s![.., 1..])
    }

    pub fn nb_samples(&self) -> usize {
        self.0.nrows()
    }

    pub fn nb_species(&self) -> usize {
        self.0.ncols() - 1
    }

    pub fn data(&self) -> &Array2<f64> {
        &self.0
    }

    pub fn into_inner(self) -> Array2<f64> {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn species_columns() {
        let trajectory =
            Trajectory::new(array![[0., 1., 0.], [1., 0., 2.], [2., 0., 3.]])
                .unwrap();
        assert_eq!(trajectory.times(), array![0., 1., 2.]);
        assert_eq!(trajectory.species(), array![[1., 0.], [0., 2.], [0., 3.]]);
        assert_eq!(trajectory.nb_samples(), 3);
        assert_eq!(trajectory.nb_species(), 2);
    }

    #[test]
    fn no_time_column() {
        assert_eq!(
            Trajectory::new(Array2::zeros((3, 0))),
            Err(ReductionError::MissingTimeColumn(0))
        );
    }
}
