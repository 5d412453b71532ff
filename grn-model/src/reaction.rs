//! Mass-action reaction channels, also known as events in the population
//! dynamics literature.
use std::fmt;

/// Stoichiometric coefficient of a species in a reaction.
pub type Coefficient = u32;

/// A reaction declared by names: the species it consumes and produces and
/// the parameter used as its rate constant.
///
/// Names are resolved against the species and the parameters of a model
/// when the reaction is registered with [`crate::ModelBuilder`].
#[derive(Clone, Debug, PartialEq)]
pub struct Reaction {
    name: String,
    reactants: Vec<(String, Coefficient)>,
    products: Vec<(String, Coefficient)>,
    rate: String,
}

impl Reaction {
    pub fn new(name: impl Into<String>, rate: impl Into<String>) -> Self {
        Reaction {
            name: name.into(),
            reactants: Vec::new(),
            products: Vec::new(),
            rate: rate.into(),
        }
    }

    pub fn reactant(
        mut self,
        species: impl Into<String>,
        coefficient: Coefficient,
    ) -> Self {
        //! Consume `coefficient` molecules of `species`. Declaring the same
        //! species twice adds up the coefficients.
        accumulate(&mut self.reactants, species.into(), coefficient);
        self
    }

    pub fn product(
        mut self,
        species: impl Into<String>,
        coefficient: Coefficient,
    ) -> Self {
        //! Produce `coefficient` molecules of `species`. Declaring the same
        //! species twice adds up the coefficients.
        accumulate(&mut self.products, species.into(), coefficient);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn rate(&self) -> &str {
        &self.rate
    }

    pub fn reactants(&self) -> &[(String, Coefficient)] {
        &self.reactants
    }

    pub fn products(&self) -> &[(String, Coefficient)] {
        &self.products
    }

    pub fn species(&self) -> impl Iterator<Item = &str> {
        self.reactants
            .iter()
            .chain(self.products.iter())
            .map(|(species, _)| species.as_str())
    }

    pub fn net_change(&self) -> Vec<(&str, i64)> {
        //! Products minus reactants for each species involved in the
        //! reaction, skipping the species whose population does not change
        //! (catalysts).
        let mut change: Vec<(&str, i64)> = Vec::new();
        let sides = self
            .reactants
            .iter()
            .map(|(s, c)| (s.as_str(), -(*c as i64)))
            .chain(
                self.products.iter().map(|(s, c)| (s.as_str(), *c as i64)),
            );
        for (species, delta) in sides {
            match change.iter_mut().find(|(name, _)| *name == species) {
                Some((_, d)) => *d += delta,
                None => change.push((species, delta)),
            }
        }
        change.retain(|(_, delta)| *delta != 0);
        change
    }
}

fn accumulate(
    side: &mut Vec<(String, Coefficient)>,
    species: String,
    coefficient: Coefficient,
) {
    match side.iter_mut().find(|(name, _)| *name == species) {
        Some((_, c)) => *c += coefficient,
        None => side.push((species, coefficient)),
    }
}

fn fmt_side(
    f: &mut fmt::Formatter<'_>,
    side: &[(String, Coefficient)],
) -> fmt::Result {
    if side.is_empty() {
        return write!(f, "0");
    }
    for (i, (species, coefficient)) in side.iter().enumerate() {
        if i > 0 {
            write!(f, " + ")?;
        }
        if *coefficient != 1 {
            write!(f, "{} ", coefficient)?;
        }
        write!(f, "{}", species)?;
    }
    Ok(())
}

impl fmt::Display for Reaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: ", self.name)?;
        fmt_side(f, &self.reactants)?;
        write!(f, " -> ")?;
        fmt_side(f, &self.products)?;
        write!(f, " [{}]", self.rate)
    }
}

/// A [`Reaction`] whose names have been resolved to indices into the
/// species of a [`crate::Model`] and to the value of its rate parameter.
///
/// This is the representation consumed by simulation engines.
#[derive(Clone, Debug, PartialEq)]
pub struct Channel {
    /// Species index and coefficient of each reactant, used to compute the
    /// propensity
    pub reactants: Vec<(usize, Coefficient)>,
    /// Net change in population applied when the channel fires
    pub change: Vec<(usize, i64)>,
    /// Rate constant
    pub rate: f64,
}
