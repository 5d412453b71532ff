//! Named rate constants of the reaction network.
use std::fmt;

/// A named scalar used as the rate of one or more reactions.
#[derive(Clone, Debug, PartialEq)]
pub struct Parameter {
    name: String,
    value: f64,
}

impl Parameter {
    pub fn new(name: impl Into<String>, value: f64) -> Self {
        Parameter { name: name.into(), value }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn value(&self) -> f64 {
        self.value
    }
}

impl fmt::Display for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} = {:e}", self.name, self.value)
    }
}
