//! The time points at which the state of the network is sampled.
use std::ops::Deref;

use crate::error::DefinitionError;

/// Non-empty, finite and non-decreasing sequence of sample times.
#[derive(Clone, Debug, PartialEq)]
pub struct TimeSpan(Vec<f64>);

impl TimeSpan {
    pub fn new(times: Vec<f64>) -> Result<Self, DefinitionError> {
        if times.is_empty() {
            return Err(DefinitionError::InvalidTimeSpan(
                "no time points".to_string(),
            ));
        }
        if let Some(t) = times.iter().find(|t| !t.is_finite()) {
            return Err(DefinitionError::InvalidTimeSpan(format!(
                "found non finite time point {}",
                t
            )));
        }
        if let Some(w) = times.windows(2).find(|w| w[1] < w[0]) {
            return Err(DefinitionError::InvalidTimeSpan(format!(
                "time points must be sorted, found {} after {}",
                w[1], w[0]
            )));
        }
        Ok(TimeSpan(times))
    }

    pub fn linspace(
        start: f64,
        stop: f64,
        nb_points: usize,
    ) -> Result<Self, DefinitionError> {
        //! `nb_points` evenly spaced samples over `[start, stop]`, both ends
        //! included. One point gives `[start]`.
        let times = match nb_points {
            0 => Vec::new(),
            1 => vec![start],
            n => {
                let step = (stop - start) / (n - 1) as f64;
                (0..n)
                    .map(|i| match i == n - 1 {
                        true => stop,
                        false => start + i as f64 * step,
                    })
                    .collect()
            }
        };
        TimeSpan::new(times)
    }

    pub fn start(&self) -> f64 {
        self.0[0]
    }

    pub fn end(&self) -> f64 {
        self.0[self.0.len() - 1]
    }
}

impl Deref for TimeSpan {
    type Target = [f64];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn linspace_endpoints() {
        let tspan = TimeSpan::linspace(0., 3600., 1000).unwrap();
        assert_eq!(tspan.len(), 1000);
        assert_eq!(tspan.start(), 0.);
        assert_eq!(tspan.end(), 3600.);
        assert!((tspan[1] - 3600. / 999.).abs() < 1e-9);
    }

    #[test]
    fn linspace_one_point() {
        let tspan = TimeSpan::linspace(2., 10., 1).unwrap();
        assert_eq!(&*tspan, &[2.]);
    }

    #[test]
    fn linspace_zero_points() {
        assert!(matches!(
            TimeSpan::linspace(0., 1., 0),
            Err(DefinitionError::InvalidTimeSpan(_))
        ));
    }

    #[test]
    fn unsorted_time_span() {
        assert!(TimeSpan::new(vec![0., 2., 1.]).is_err());
    }

    #[test]
    fn nan_time_span() {
        assert!(TimeSpan::new(vec![0., f64::NAN]).is_err());
    }

    #[quickcheck]
    fn linspace_is_sorted(start: u16, length: u16, nb_points: u8) -> bool {
        let start = start as f64;
        let stop = start + length as f64;
        let nb_points = nb_points as usize + 1;
        let tspan = TimeSpan::linspace(start, stop, nb_points).unwrap();
        tspan.len() == nb_points && tspan.windows(2).all(|w| w[0] <= w[1])
    }
}
