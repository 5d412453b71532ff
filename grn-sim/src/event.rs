//! Events simulated by the Gillespie algorithm, also known as reactions in
//! the chemical literature (see Gillespie 2007).

/// The time sampled from Gillespie for the next `Event`. This time does not
/// represent actual time but it is relative to the previous simulated `Event`.
pub type GillespieTime = f64;

/// The reaction that will fire next, determined by the Gillespie sampling
/// algorithm.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Event {
    /// Index of the channel in [`grn_model::Model::channels`]
    pub channel: usize,
    /// The waiting time before this event, relative to the previous
    /// simulated `Event`
    pub time: GillespieTime,
}
