//! Mass-action propensities and exponential waiting times.
use grn_model::{Channel, Coefficient, NbMolecules};
use rand::Rng;
use rand_chacha::ChaCha8Rng;
use rand_distr::Open01;

/// Gillespie rate
pub type GillespieRate = f64;

pub fn exprand(lambda: GillespieRate, rng: &mut ChaCha8Rng) -> f64 {
    //! Generates a random waiting time using the exponential waiting time with
    //! parameter `lambda` of Poisson StochasticProcess.
    if lambda == 0. {
        f64::INFINITY
    } else {
        // random number between (0, 1)
        let val: f64 = rng.sample(Open01);
        -(1. - val).ln() / lambda
    }
}

/// Number of distinct combinations of `k` molecules among `n`, that is the
/// binomial coefficient, 0 when there are less than `k` molecules.
fn combinations(n: NbMolecules, k: Coefficient) -> f64 {
    if n < k as NbMolecules {
        return 0.;
    }
    (0..k as NbMolecules)
        .fold(1., |acc, i| acc * (n - i) as f64 / (i + 1) as f64)
}

pub fn mass_action(channel: &Channel, state: &[NbMolecules]) -> GillespieRate {
    //! The propensity of `channel`: its rate times the number of distinct
    //! combinations of reactant molecules, e.g. `k * A * B` for `A + B`,
    //! `k * A * (A - 1) / 2` for `2 A`, `k` when there are no reactants.
    channel
        .reactants
        .iter()
        .fold(channel.rate, |acc, &(species, coefficient)| {
            acc * combinations(state[species], coefficient)
        })
}

pub fn compute_propensities(
    channels: &[Channel],
    state: &[NbMolecules],
    propensities: &mut [GillespieRate],
) {
    debug_assert_eq!(channels.len(), propensities.len());
    for (propensity, channel) in propensities.iter_mut().zip(channels) {
        *propensity = mass_action(channel, state);
    }
}
