//! The reaction network: parameters, species, reactions and the time span
//! over which it is simulated.
use std::fmt;

use crate::error::DefinitionError;
use crate::parameter::Parameter;
use crate::reaction::{Channel, Reaction};
use crate::species::Species;
use crate::timespan::TimeSpan;
use crate::NbMolecules;

/// A closed mass-action reaction network ready to be simulated.
///
/// A `Model` can only be obtained from [`ModelBuilder::build`], hence every
/// species and parameter referenced by its reactions is known to exist, and
/// it cannot be modified once built.
#[derive(Clone, Debug, PartialEq)]
pub struct Model {
    name: String,
    parameters: Vec<Parameter>,
    species: Vec<Species>,
    reactions: Vec<Reaction>,
    channels: Vec<Channel>,
    time_span: TimeSpan,
}

impl Model {
    pub fn builder(name: impl Into<String>) -> ModelBuilder {
        ModelBuilder::new(name)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn parameters(&self) -> &[Parameter] {
        &self.parameters
    }

    pub fn species(&self) -> &[Species] {
        &self.species
    }

    pub fn reactions(&self) -> &[Reaction] {
        &self.reactions
    }

    /// The reactions resolved against the species and the parameters, in
    /// declaration order: `channels()[i]` corresponds to `reactions()[i]`.
    pub fn channels(&self) -> &[Channel] {
        &self.channels
    }

    pub fn time_span(&self) -> &TimeSpan {
        &self.time_span
    }

    pub fn species_index(&self, name: &str) -> Option<usize> {
        self.species.iter().position(|s| s.name() == name)
    }

    pub fn parameter(&self, name: &str) -> Option<&Parameter> {
        self.parameters.iter().find(|p| p.name() == name)
    }

    pub fn initial_state(&self) -> Vec<NbMolecules> {
        self.species.iter().map(|s| s.initial()).collect()
    }
}

impl fmt::Display for Model {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{}: {} species, {} parameters, {} reactions, \
            {} time points over [{}, {}]",
            self.name,
            self.species.len(),
            self.parameters.len(),
            self.reactions.len(),
            self.time_span.len(),
            self.time_span.start(),
            self.time_span.end()
        )?;
        writeln!(f, "species:")?;
        for species in self.species.iter() {
            writeln!(f, "\t{} = {}", species.name(), species.initial())?;
        }
        writeln!(f, "parameters:")?;
        for parameter in self.parameters.iter() {
            writeln!(f, "\t{}", parameter)?;
        }
        writeln!(f, "reactions:")?;
        for reaction in self.reactions.iter() {
            writeln!(f, "\t{}", reaction)?;
        }
        Ok(())
    }
}

/// Registers the parameters, the species and the reactions of a [`Model`].
///
/// Each reaction is checked when added: all the species and the parameter
/// it names must have been registered before, otherwise the reaction is
/// rejected with a [`DefinitionError`].
#[derive(Clone, Debug, Default)]
pub struct ModelBuilder {
    name: String,
    parameters: Vec<Parameter>,
    species: Vec<Species>,
    reactions: Vec<Reaction>,
    channels: Vec<Channel>,
    time_span: Option<TimeSpan>,
}

impl ModelBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        ModelBuilder { name: name.into(), ..Default::default() }
    }

    pub fn add_parameter(
        &mut self,
        parameter: Parameter,
    ) -> Result<&mut Self, DefinitionError> {
        if self.parameters.iter().any(|p| p.name() == parameter.name()) {
            return Err(DefinitionError::DuplicateName {
                kind: "parameter",
                name: parameter.name().to_string(),
            });
        }
        self.parameters.push(parameter);
        Ok(self)
    }

    pub fn add_species(
        &mut self,
        species: Species,
    ) -> Result<&mut Self, DefinitionError> {
        if self.species.iter().any(|s| s.name() == species.name()) {
            return Err(DefinitionError::DuplicateName {
                kind: "species",
                name: species.name().to_string(),
            });
        }
        self.species.push(species);
        Ok(self)
    }

    pub fn add_reaction(
        &mut self,
        reaction: Reaction,
    ) -> Result<&mut Self, DefinitionError> {
        if self.reactions.iter().any(|r| r.name() == reaction.name()) {
            return Err(DefinitionError::DuplicateName {
                kind: "reaction",
                name: reaction.name().to_string(),
            });
        }
        let channel = self.resolve(&reaction)?;
        self.reactions.push(reaction);
        self.channels.push(channel);
        Ok(self)
    }

    pub fn time_span(&mut self, time_span: TimeSpan) -> &mut Self {
        self.time_span = Some(time_span);
        self
    }

    pub fn build(self) -> Result<Model, DefinitionError> {
        let time_span =
            self.time_span.ok_or(DefinitionError::MissingTimeSpan)?;
        debug_assert_eq!(self.reactions.len(), self.channels.len());
        Ok(Model {
            name: self.name,
            parameters: self.parameters,
            species: self.species,
            reactions: self.reactions,
            channels: self.channels,
            time_span,
        })
    }

    fn species_index(
        &self,
        reaction: &Reaction,
        species: &str,
    ) -> Result<usize, DefinitionError> {
        self.species.iter().position(|s| s.name() == species).ok_or_else(
            || DefinitionError::UndeclaredSpecies {
                reaction: reaction.name().to_string(),
                species: species.to_string(),
            },
        )
    }

    fn resolve(&self, reaction: &Reaction) -> Result<Channel, DefinitionError> {
        //! Map the names used by `reaction` to the indices of the species and
        //! to the value of the rate.
        for species in reaction.species() {
            self.species_index(reaction, species)?;
        }
        let rate = self
            .parameters
            .iter()
            .find(|p| p.name() == reaction.rate())
            .ok_or_else(|| DefinitionError::UndeclaredParameter {
                reaction: reaction.name().to_string(),
                parameter: reaction.rate().to_string(),
            })?
            .value();

        let reactants = reaction
            .reactants()
            .iter()
            .filter(|(_, coefficient)| *coefficient > 0)
            .map(|(species, coefficient)| {
                Ok((self.species_index(reaction, species)?, *coefficient))
            })
            .collect::<Result<Vec<_>, DefinitionError>>()?;
        let change = reaction
            .net_change()
            .into_iter()
            .map(|(species, delta)| {
                Ok((self.species_index(reaction, species)?, delta))
            })
            .collect::<Result<Vec<_>, DefinitionError>>()?;

        Ok(Channel { reactants, change, rate })
    }
}
