//! Algorithms sampling the next reaction from the propensities.
//!
//! Both are exact: they sample the same stochastic process but consume
//! random numbers differently, hence the same seed gives different
//! trajectories with different algorithms.
use enum_dispatch::enum_dispatch;
use rand::Rng;
use rand_chacha::ChaCha8Rng;
use rand_distr::Open01;

use crate::event::Event;
use crate::propensity::{exprand, GillespieRate};

#[enum_dispatch(Algorithm)]
pub trait SelectReaction {
    /// Sample the next [`Event`], `None` when no reaction can fire anymore,
    /// i.e. all `propensities` are zero.
    fn select(
        &self,
        propensities: &[GillespieRate],
        rng: &mut ChaCha8Rng,
    ) -> Option<Event>;
}

/// Draw one waiting time per channel and fire the channel with the smallest
/// one.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FirstReaction;

/// Draw the waiting time from the total propensity and pick the channel
/// with a probability proportional to its propensity.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Direct;

#[enum_dispatch]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Algorithm {
    /// Gillespie's first-reaction method, costs one random number per
    /// channel per event.
    FirstReaction,
    /// Gillespie's direct method, costs two random numbers per event.
    Direct,
}

impl Default for Algorithm {
    fn default() -> Self {
        Direct.into()
    }
}

impl SelectReaction for FirstReaction {
    fn select(
        &self,
        propensities: &[GillespieRate],
        rng: &mut ChaCha8Rng,
    ) -> Option<Event> {
        let mut next: Option<Event> = None;
        for (channel, &propensity) in propensities.iter().enumerate() {
            if propensity <= 0. {
                continue;
            }
            let time = exprand(propensity, rng);
            if next.map_or(true, |event| time < event.time) {
                next = Some(Event { channel, time });
            }
        }
        next
    }
}

impl SelectReaction for Direct {
    fn select(
        &self,
        propensities: &[GillespieRate],
        rng: &mut ChaCha8Rng,
    ) -> Option<Event> {
        let total: GillespieRate = propensities.iter().sum();
        if total <= 0. {
            return None;
        }
        let time = exprand(total, rng);
        let threshold = rng.sample::<f64, _>(Open01) * total;

        let mut cumulative = 0.;
        let mut last_possible = 0;
        for (channel, &propensity) in propensities.iter().enumerate() {
            if propensity <= 0. {
                continue;
            }
            cumulative += propensity;
            last_possible = channel;
            if threshold < cumulative {
                return Some(Event { channel, time });
            }
        }
        // rounding errors in the cumulative sum
        Some(Event { channel: last_possible, time })
    }
}
