//! Exact stochastic simulation of a [`Model`] over its time span.
use chrono::Utc;
use grn_model::{
    Channel, Model, NbMolecules, SimulationError, Simulator, Trajectory,
};
use ndarray::Array2;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::algorithm::{Algorithm, SelectReaction};
use crate::propensity::{compute_propensities, GillespieRate};
use crate::Seed;

/// Simulate `trajectories` independent realizations of a model.
///
/// The `i`-th realization draws its random numbers from the stream
/// `stream + i` of a ChaCha8 generator seeded with `seed`, hence the
/// realizations are reproducible and can be simulated in any order.
#[derive(Clone, Debug)]
pub struct Gillespie {
    pub algorithm: Algorithm,
    /// Number of independent realizations returned by [`Simulator::run`]
    pub trajectories: usize,
    pub seed: Seed,
    /// Stream of the first realization
    pub stream: u64,
    /// Stop with an error after this number of reactions
    pub max_iter: Option<usize>,
    pub verbosity: u8,
}

impl Default for Gillespie {
    fn default() -> Self {
        Gillespie {
            algorithm: Algorithm::default(),
            trajectories: 1,
            seed: Seed::default(),
            stream: 0,
            max_iter: None,
            verbosity: 0,
        }
    }
}

impl Gillespie {
    pub fn new(algorithm: Algorithm, seed: Seed) -> Self {
        Gillespie { algorithm, seed, ..Default::default() }
    }

    pub fn rng(&self, idx: usize) -> ChaCha8Rng {
        //! The generator of the `idx`-th realization.
        let mut rng = ChaCha8Rng::seed_from_u64(*self.seed.get_seed());
        rng.set_stream(self.stream + idx as u64);
        rng
    }

    pub fn simulate(
        &self,
        model: &Model,
        rng: &mut ChaCha8Rng,
    ) -> Result<Trajectory, SimulationError> {
        //! Simulate one realization of `model`, starting from its initial
        //! populations at the first time point.
        //!
        //! The populations recorded at time `t` are those after the last
        //! reaction fired at or before `t`. Once no reaction can fire anymore
        //! the populations are held until the end of the time span.
        if model.species().is_empty() {
            return Err(SimulationError::EmptyModel(model.name().to_string()));
        }
        let time_span = model.time_span();
        let channels = model.channels();
        let nb_columns = model.species().len() + 1;
        let mut data = Array2::<f64>::zeros((time_span.len(), nb_columns));
        let mut state = model.initial_state();
        let mut propensities: Vec<GillespieRate> = vec![0.; channels.len()];
        let mut time = time_span.start();
        let mut sample = 0usize;
        let mut iterations = 0usize;

        loop {
            compute_propensities(channels, &state, &mut propensities);
            if let Some((idx, &propensity)) = propensities
                .iter()
                .enumerate()
                .find(|(_, p)| !(p.is_finite() && **p >= 0.))
            {
                return Err(SimulationError::InvalidPropensity {
                    reaction: model.reactions()[idx].name().to_string(),
                    propensity,
                    time,
                });
            }

            let event = self.algorithm.select(&propensities, rng);
            let next_time =
                event.map_or(f64::INFINITY, |event| time + event.time);
            while sample < time_span.len() && time_span[sample] < next_time {
                record(&mut data, sample, time_span[sample], &state);
                sample += 1;
            }
            let event = match event {
                Some(event) if sample < time_span.len() => event,
                _ => break,
            };

            if let Some(max_iter) = self.max_iter {
                if iterations >= max_iter {
                    return Err(SimulationError::MaxIterations {
                        iterations,
                        time,
                    });
                }
            }
            fire(model, &channels[event.channel], event.channel, &mut state)?;
            if self.verbosity > 2 {
                println!(
                    "time {}: {} fired, populations {:?}",
                    next_time,
                    model.reactions()[event.channel].name(),
                    state
                );
            }
            time = next_time;
            iterations += 1;
        }

        if self.verbosity > 1 {
            println!(
                "{} Simulated {} reactions up to time {} with final populations {:?}",
                Utc::now(),
                iterations,
                time,
                state
            );
        }
        Trajectory::new(data)
            .map_err(|err| SimulationError::Engine(err.to_string()))
    }
}

impl Simulator for Gillespie {
    fn run(&self, model: &Model) -> Result<Vec<Trajectory>, SimulationError> {
        if self.verbosity > 0 {
            println!(
                "{} Simulating {} trajectories of {} with {:?}",
                Utc::now(),
                self.trajectories,
                model.name(),
                self.algorithm
            );
        }
        (0..self.trajectories)
            .map(|idx| self.simulate(model, &mut self.rng(idx)))
            .collect()
    }
}

fn record(
    data: &mut Array2<f64>,
    sample: usize,
    time: f64,
    state: &[NbMolecules],
) {
    let mut row = data.row_mut(sample);
    row[0] = time;
    for (entry, &population) in row.iter_mut().skip(1).zip(state) {
        *entry = population as f64;
    }
}

fn fire(
    model: &Model,
    channel: &Channel,
    idx: usize,
    state: &mut [NbMolecules],
) -> Result<(), SimulationError> {
    //! Apply the net change of `channel` to the populations.
    for &(species, delta) in channel.change.iter() {
        state[species] = state[species].checked_add_signed(delta).ok_or_else(
            || {
                SimulationError::Engine(format!(
                    "reaction `{}` drives species `{}` out of bounds",
                    model.reactions()[idx].name(),
                    model.species()[species].name()
                ))
            },
        )?;
    }
    Ok(())
}
