use crate::app::{App, ModelApp, SimulateApp};
use anyhow::Context;
use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};
use grn_model::{grn_population, GrnRates, GrnRatesBuilder};
use grn_sim::{Algorithm, Direct, FirstReaction, Gillespie, Seed};

#[derive(Debug, Parser)] // requires `derive` feature
#[command(name = "grn", version)]
#[command(
    about = "Stochastic simulation of a gene regulatory network",
    long_about = "Simulate a gene with negative feedback, whose promoter is repressed by the protein it encodes, using a stochastic simulation algorithm (SSA) aka Gillespie algorithm, and print the sum, max, min and mean over time of each species"
)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn build() -> anyhow::Result<App> {
        let args = Cli::parse();

        match args.command {
            Commands::Simulate {
                rates,
                runs,
                seed,
                algorithm,
                max_iter,
                sequential,
                json,
                verbose,
            } => {
                let rates = rates.build()?;
                if verbose > 1 {
                    println!("{:#?}", rates);
                }
                let model = grn_population(&rates)
                    .with_context(|| "Cannot define the GRN model")?;
                let simulator = Gillespie {
                    algorithm: algorithm.into(),
                    trajectories: 1,
                    seed: Seed::new(seed),
                    stream: 0,
                    max_iter,
                    verbosity: verbose,
                };
                Ok(SimulateApp {
                    model,
                    simulator,
                    runs,
                    sequential,
                    json,
                    verbosity: verbose,
                }
                .into())
            }
            Commands::Model { rates } => {
                let model = grn_population(&rates.build()?)
                    .with_context(|| "Cannot define the GRN model")?;
                Ok(ModelApp { model }.into())
            }
        }
    }
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Simulate the GRN and print the features of each realization
    Simulate {
        #[command(flatten)]
        rates: RatesArgs,
        /// Number of independent realizations of the stochastic process
        #[arg(short, long, default_value_t = 1, value_parser = at_least_one)]
        runs: usize,
        /// Seed for reproducibility
        #[arg(long, default_value_t = 26)]
        seed: u64,
        /// The algorithm sampling the next reaction
        #[arg(long, default_value_t = AlgorithmOptions::Direct)]
        algorithm: AlgorithmOptions,
        /// Stop a realization with an error after this number of reactions
        #[arg(long, value_name = "REACTIONS")]
        max_iter: Option<usize>,
        /// Run sequentially each run instead of using rayon for parallelisation
        #[arg(short, long, action = ArgAction::SetTrue, default_value_t = false)]
        sequential: bool,
        /// Print the features as JSON, one line per realization
        #[arg(long, action = ArgAction::SetTrue, default_value_t = false)]
        json: bool,
        #[arg(short, long, action = clap::ArgAction::Count, default_value_t = 0)]
        verbose: u8,
    },
    /// Print the species, the parameters and the reactions of the GRN
    Model {
        #[command(flatten)]
        rates: RatesArgs,
    },
}

/// Override the default rates of the GRN.
#[derive(Debug, Args, Clone, Copy)]
struct RatesArgs {
    /// Transcription rate [default: 10]
    #[arg(long, value_name = "RATE", value_parser = positive_rate)]
    mu: Option<f64>,
    /// Translation rate [default: 10]
    #[arg(long, value_name = "RATE", value_parser = positive_rate)]
    kappa: Option<f64>,
    /// Binding rate of the protein to the free promoter in 1/(M s), converted
    /// into a stochastic rate with the cell volume [default: 1e7]
    #[arg(long, value_name = "RATE", value_parser = positive_rate)]
    ka: Option<f64>,
    /// Unbinding rate of the protein from the occupied promoter
    /// [default: 0.01]
    #[arg(long, value_name = "RATE", value_parser = positive_rate)]
    kd: Option<f64>,
    /// mRNA degradation rate [default: 0.02]
    #[arg(long, value_name = "RATE", value_parser = positive_rate)]
    gamma_m: Option<f64>,
    /// Protein degradation rate [default: 0.02]
    #[arg(long, value_name = "RATE", value_parser = positive_rate)]
    gamma_p: Option<f64>,
}

impl RatesArgs {
    fn build(&self) -> anyhow::Result<GrnRates> {
        let mut builder = GrnRatesBuilder::default();
        if let Some(mu) = self.mu {
            builder.mu(mu);
        }
        if let Some(kappa) = self.kappa {
            builder.kappa(kappa);
        }
        if let Some(ka) = self.ka {
            builder.ka(ka);
        }
        if let Some(kd) = self.kd {
            builder.kd(kd);
        }
        if let Some(gamma_m) = self.gamma_m {
            builder.gamma_m(gamma_m);
        }
        if let Some(gamma_p) = self.gamma_p {
            builder.gamma_p(gamma_p);
        }
        builder.build().with_context(|| "Cannot build the rates of the GRN")
    }
}

fn positive_rate(rate: &str) -> Result<f64, String> {
    let rate: f64 = rate.parse().map_err(|e| format!("{}", e))?;
    if rate.is_finite() && rate > 0. {
        Ok(rate)
    } else {
        Err(format!("rate must be positive and finite, found {}", rate))
    }
}

fn at_least_one(runs: &str) -> Result<usize, String> {
    let runs: usize = runs.parse().map_err(|e| format!("{}", e))?;
    if runs > 0 {
        Ok(runs)
    } else {
        Err("at least one run is required".to_string())
    }
}

#[derive(ValueEnum, Copy, Clone, Debug, PartialEq, Eq)]
enum AlgorithmOptions {
    FirstReaction,
    Direct,
}

impl std::fmt::Display for AlgorithmOptions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.to_possible_value()
            .expect("no values are skipped")
            .get_name()
            .fmt(f)
    }
}

impl From<AlgorithmOptions> for Algorithm {
    fn from(algorithm: AlgorithmOptions) -> Self {
        match algorithm {
            AlgorithmOptions::FirstReaction => FirstReaction.into(),
            AlgorithmOptions::Direct => Direct.into(),
        }
    }
}
