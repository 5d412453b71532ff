//! Two-state gene with negative feedback: the promoter is either free (`G_f`)
//! and transcribes mRNA, or occupied (`G_o`) by the protein `P` it encodes.
use crate::error::DefinitionError;
use crate::model::Model;
use crate::parameter::Parameter;
use crate::reaction::Reaction;
use crate::species::Species;
use crate::timespan::TimeSpan;

/// Avogadro's number (1/mol).
pub const AVOGADRO: f64 = 6.022e23;
/// Volume of the cell (L), used to convert the macroscopic binding rate into
/// a stochastic rate per pair of molecules.
pub const VOLUME: f64 = 37e-15;
/// The network is sampled over `[0, TIME_END]` seconds.
pub const TIME_END: f64 = 3600.;
pub const NB_TIMEPOINTS: usize = 1000;

/// The rate constants of the network. Fields not set on [`GrnRatesBuilder`]
/// take the default values.
#[derive(Builder, Clone, Copy, Debug, PartialEq)]
#[builder(default)]
pub struct GrnRates {
    /// Transcription rate
    pub mu: f64,
    /// Translation rate
    pub kappa: f64,
    /// Macroscopic binding rate of the protein to the free promoter
    /// (1/(M s)), rescaled by `AVOGADRO * VOLUME` in the model
    pub ka: f64,
    /// Unbinding rate of the protein from the occupied promoter
    pub kd: f64,
    /// mRNA degradation rate
    pub gamma_m: f64,
    /// Protein degradation rate
    pub gamma_p: f64,
}

impl Default for GrnRates {
    fn default() -> Self {
        GrnRates {
            mu: 10.,
            kappa: 10.,
            ka: 1e7,
            kd: 0.01,
            gamma_m: 0.02,
            gamma_p: 0.02,
        }
    }
}

pub fn grn_population(rates: &GrnRates) -> Result<Model, DefinitionError> {
    //! Build the gene regulatory network with six reactions:
    //!
    //! | reaction | reactants | products   | rate    |
    //! |----------|-----------|------------|---------|
    //! | R1       | G_f + P   | G_o        | ka      |
    //! | R2       | mRNA      | mRNA + P   | kappa   |
    //! | R3       | G_f       | G_f + mRNA | mu      |
    //! | R4       | mRNA      | 0          | gamma_m |
    //! | R5       | P         | 0          | gamma_p |
    //! | R6       | G_o       | G_f + P    | kd      |
    //!
    //! starting from one free promoter and no mRNA nor protein, sampled at
    //! `NB_TIMEPOINTS` evenly spaced times in `[0, TIME_END]`.
    let mut builder = Model::builder("GRN");

    for parameter in [
        Parameter::new("mu", rates.mu),
        Parameter::new("kappa", rates.kappa),
        Parameter::new("ka", rates.ka / (AVOGADRO * VOLUME)),
        Parameter::new("kd", rates.kd),
        Parameter::new("gamma_m", rates.gamma_m),
        Parameter::new("gamma_p", rates.gamma_p),
    ] {
        builder.add_parameter(parameter)?;
    }

    for species in [
        Species::new("G_f", 1),
        Species::new("G_o", 0),
        Species::new("mRNA", 0),
        Species::new("P", 0),
    ] {
        builder.add_species(species)?;
    }

    for reaction in [
        Reaction::new("R1", "ka")
            .reactant("G_f", 1)
            .reactant("P", 1)
            .product("G_o", 1),
        Reaction::new("R2", "kappa")
            .reactant("mRNA", 1)
            .product("mRNA", 1)
            .product("P", 1),
        Reaction::new("R3", "mu")
            .reactant("G_f", 1)
            .product("G_f", 1)
            .product("mRNA", 1),
        Reaction::new("R4", "gamma_m").reactant("mRNA", 1),
        Reaction::new("R5", "gamma_p").reactant("P", 1),
        Reaction::new("R6", "kd")
            .reactant("G_o", 1)
            .product("G_f", 1)
            .product("P", 1),
    ] {
        builder.add_reaction(reaction)?;
    }

    builder.time_span(TimeSpan::linspace(0., TIME_END, NB_TIMEPOINTS)?);
    builder.build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use quickcheck::{Arbitrary, Gen};

    #[derive(Clone, Debug)]
    struct PositiveRates(GrnRates);

    fn positive(g: &mut Gen) -> f64 {
        let rate = f64::arbitrary(g).abs();
        if rate.is_finite() && rate > 0. {
            rate
        } else {
            1.
        }
    }

    impl Arbitrary for PositiveRates {
        fn arbitrary(g: &mut Gen) -> Self {
            PositiveRates(GrnRates {
                mu: positive(g),
                kappa: positive(g),
                ka: positive(g),
                kd: positive(g),
                gamma_m: positive(g),
                gamma_p: positive(g),
            })
        }
    }

    #[quickcheck]
    fn grn_population_shape(rates: PositiveRates) -> bool {
        let model = grn_population(&rates.0).unwrap();
        model.species().len() == 4
            && model.parameters().len() == 6
            && model.reactions().len() == 6
            && model.time_span().len() == 1000
            && model.time_span().start() == 0.
            && model.time_span().end() == 3600.
    }

    #[test]
    fn grn_population_declaration_order() {
        let model = grn_population(&GrnRates::default()).unwrap();
        let species: Vec<&str> =
            model.species().iter().map(|s| s.name()).collect();
        assert_eq!(species, ["G_f", "G_o", "mRNA", "P"]);
        let parameters: Vec<&str> =
            model.parameters().iter().map(|p| p.name()).collect();
        assert_eq!(parameters, ["mu", "kappa", "ka", "kd", "gamma_m", "gamma_p"]);
        let reactions: Vec<&str> =
            model.reactions().iter().map(|r| r.name()).collect();
        assert_eq!(reactions, ["R1", "R2", "R3", "R4", "R5", "R6"]);
        assert_eq!(model.initial_state(), vec![1, 0, 0, 0]);
    }

    #[test]
    fn grn_population_reactions_use_declared_species() {
        let model = grn_population(&GrnRates::default()).unwrap();
        for reaction in model.reactions() {
            for species in reaction.species() {
                assert!(model.species_index(species).is_some());
            }
        }
    }

    #[test]
    fn ka_is_rescaled() {
        let rates = GrnRatesBuilder::default().ka(2e7).build().unwrap();
        let model = grn_population(&rates).unwrap();
        let ka = model.parameter("ka").unwrap().value();
        assert_eq!(ka, 2e7 / (6.022e23 * 37e-15));
        // the other rates are not rescaled
        assert_eq!(model.parameter("kd").unwrap().value(), 0.01);
    }

    #[test]
    fn builder_defaults() {
        let rates = GrnRatesBuilder::default().mu(5.).build().unwrap();
        assert_eq!(rates, GrnRates { mu: 5., ..GrnRates::default() });
    }

    #[test]
    fn display_grn() {
        let model = grn_population(&GrnRates::default()).unwrap();
        let ka =
            format!("\tka = {:e}", model.parameter("ka").unwrap().value());
        let expected = [
            "GRN: 4 species, 6 parameters, 6 reactions, 1000 time points over [0, 3600]",
            "species:",
            "\tG_f = 1",
            "\tG_o = 0",
            "\tmRNA = 0",
            "\tP = 0",
            "parameters:",
            "\tmu = 1e1",
            "\tkappa = 1e1",
            ka.as_str(),
            "\tkd = 1e-2",
            "\tgamma_m = 2e-2",
            "\tgamma_p = 2e-2",
            "reactions:",
            "\tR1: G_f + P -> G_o [ka]",
            "\tR2: mRNA -> mRNA + P [kappa]",
            "\tR3: G_f -> G_f + mRNA [mu]",
            "\tR4: mRNA -> 0 [gamma_m]",
            "\tR5: P -> 0 [gamma_p]",
            "\tR6: G_o -> G_f + P [kd]",
        ];
        assert_eq!(model.to_string(), expected.join("\n") + "\n");
    }

    #[test]
    fn grn_population_stoichiometry() {
        let model = grn_population(&GrnRates::default()).unwrap();
        // G_f, G_o, mRNA, P
        let changes: Vec<Vec<(usize, i64)>> =
            model.channels().iter().map(|c| c.change.clone()).collect();
        assert_eq!(
            changes,
            vec![
                vec![(0, -1), (3, -1), (1, 1)],
                vec![(3, 1)],
                vec![(2, 1)],
                vec![(2, -1)],
                vec![(3, -1)],
                vec![(1, -1), (0, 1), (3, 1)],
            ]
        );
    }
}
