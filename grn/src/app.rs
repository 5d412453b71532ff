use anyhow::Context;
use chrono::Utc;
use enum_dispatch::enum_dispatch;
use grn_model::{generate_simulation_data, Features, Model};
use grn_sim::{Gillespie, Seed};
use indicatif::ParallelProgressIterator;
use rayon::prelude::{IntoParallelIterator, ParallelIterator};
use serde::Serialize;

#[enum_dispatch]
pub trait Perform {
    fn run(&self) -> anyhow::Result<()>;
}

#[enum_dispatch(Perform)]
pub enum App {
    SimulateApp,
    ModelApp,
}

/// Simulate independent realizations of the GRN and print their features.
#[derive(Debug)]
pub struct SimulateApp {
    pub model: Model,
    /// The simulator of the first realization, the `idx`-th realization is
    /// simulated with the stream `idx`
    pub simulator: Gillespie,
    pub runs: usize,
    pub sequential: bool,
    pub json: bool,
    pub verbosity: u8,
}

impl SimulateApp {
    fn simulate(&self, idx: usize) -> anyhow::Result<Features> {
        let simulator = Gillespie {
            stream: self.simulator.stream
                + (idx * self.simulator.trajectories) as u64,
            ..self.simulator.clone()
        };
        let (_, features) = generate_simulation_data(&self.model, &simulator)
            .with_context(|| format!("Cannot simulate run {}", idx))?;
        Ok(features)
    }

    fn format(
        &self,
        idx: usize,
        features: &Features,
    ) -> anyhow::Result<String> {
        //! The line printed for the `idx`-th realization.
        if self.json {
            let line = RunFeatures {
                run: idx,
                seed: self.simulator.seed,
                features,
            };
            serde_json::to_string(&line)
                .with_context(|| "Cannot serialize the features")
        } else if self.runs == 1 {
            Ok(features.to_string())
        } else {
            Ok(format!("run {}: {}", idx, features))
        }
    }
}

#[derive(Serialize)]
struct RunFeatures<'a> {
    run: usize,
    seed: Seed,
    features: &'a Features,
}

impl Perform for SimulateApp {
    fn run(&self) -> anyhow::Result<()> {
        if self.verbosity > 0 {
            println!(
                "{} Simulating {} runs of {} with {} cores",
                Utc::now(),
                self.runs,
                self.model.name(),
                rayon::current_num_threads()
            );
        }
        if self.verbosity > 1 {
            println!("{}", self.model);
        }

        let features = if self.sequential || self.runs == 1 {
            (0..self.runs)
                .map(|idx| self.simulate(idx))
                .collect::<anyhow::Result<Vec<Features>>>()?
        } else {
            (0..self.runs)
                .into_par_iter()
                .progress_count(self.runs as u64)
                .map(|idx| self.simulate(idx))
                .collect::<anyhow::Result<Vec<Features>>>()?
        };

        if self.verbosity > 0 {
            println!("{} End simulating {} runs", Utc::now(), self.runs);
        }

        for (idx, features) in features.iter().enumerate() {
            println!("{}", self.format(idx, features)?);
        }
        Ok(())
    }
}

/// Print the reaction network.
#[derive(Debug)]
pub struct ModelApp {
    pub model: Model,
}

impl Perform for ModelApp {
    fn run(&self) -> anyhow::Result<()> {
        print!("{}", self.model);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use grn_model::{
        extract_features, Parameter, Reaction, Species, TimeSpan,
    };
    use ndarray::array;

    fn birth_death() -> Model {
        let mut builder = Model::builder("birth-death");
        builder
            .add_parameter(Parameter::new("b", 1.))
            .unwrap()
            .add_parameter(Parameter::new("d", 0.1))
            .unwrap()
            .add_species(Species::new("X", 5))
            .unwrap()
            .add_reaction(Reaction::new("birth", "b").product("X", 1))
            .unwrap()
            .add_reaction(Reaction::new("death", "d").reactant("X", 1))
            .unwrap()
            .time_span(TimeSpan::linspace(0., 10., 50).unwrap());
        builder.build().unwrap()
    }

    fn app(runs: usize, sequential: bool) -> SimulateApp {
        SimulateApp {
            model: birth_death(),
            simulator: Gillespie::default(),
            runs,
            sequential,
            json: false,
            verbosity: 0,
        }
    }

    #[test]
    fn runs_are_reproducible() {
        let app = app(4, true);
        let first = app.simulate(2).unwrap();
        let second = app.simulate(2).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn runs_use_different_streams() {
        let app = app(2, true);
        assert_ne!(app.simulate(0).unwrap(), app.simulate(1).unwrap());
    }

    #[test]
    fn run_matches_simulator_stream() {
        let app = app(3, true);
        let simulator =
            Gillespie { stream: 2, seed: Seed::default(), ..Default::default() };
        let (_, expected) =
            generate_simulation_data(&app.model, &simulator).unwrap();
        assert_eq!(app.simulate(2).unwrap(), expected);
    }

    fn features() -> Features {
        extract_features(array![[1., 0.], [3., 1.]].view()).unwrap()
    }

    #[test]
    fn format_single_run() {
        assert_eq!(
            app(1, true).format(0, &features()).unwrap(),
            "{'sum': [4, 1], 'max': [3, 1], 'min': [1, 0], 'mean': [2, 0.5]}"
        );
    }

    #[test]
    fn format_several_runs() {
        assert_eq!(
            app(3, true).format(2, &features()).unwrap(),
            "run 2: {'sum': [4, 1], 'max': [3, 1], 'min': [1, 0], 'mean': [2, 0.5]}"
        );
    }

    #[test]
    fn format_json() {
        let app = SimulateApp { json: true, ..app(3, true) };
        let expected = concat!(
            r#"{"run":1,"seed":26,"features":{"sum":[4.0,1.0],"max":[3.0,1.0],"#,
            r#""min":[1.0,0.0],"mean":[2.0,0.5]}}"#
        );
        assert_eq!(app.format(1, &features()).unwrap(), expected);
    }

    #[test]
    fn perform_sequential_and_parallel() {
        assert!(app(3, true).run().is_ok());
        assert!(app(3, false).run().is_ok());
    }

    #[test]
    fn perform_model() {
        assert!(ModelApp { model: birth_death() }.run().is_ok());
    }
}
