/*!
Classification of a formula by a pair of tableaux.

A formula signed false roots the tautology test: every branch of the tableau
closes exactly when no valuation falsifies the formula. A formula signed
true roots the contradiction test, symmetrically. A formula passing neither
test is contingent, and the open branches of the two tableaux are exactly
its witnesses, which avoids rebuilding anything for the explanation.
*/

use crate::{
    config::Config,
    procedures::{
        causes::{self, Property},
        witnesses,
    },
    reports::Verdict,
    structures::{formula::Formula, signed::SignedFormula},
    tableau,
};

/// A classifier: the configuration a classification runs with.
#[derive(Clone, Debug, Default)]
pub struct Classifier {
    config: Config,
}

impl Classifier {
    /// A classifier with the given configuration.
    pub fn new(config: Config) -> Self {
        Classifier { config }
    }

    /// Classify a formula, with the explanation of the verdict.
    pub fn classify(&self, formula: &Formula) -> Verdict {
        let falsified = tableau::build(SignedFormula::new(formula.clone(), false));
        let satisfied = tableau::build(SignedFormula::new(formula.clone(), true));

        let tautology = falsified.all_closed();
        let contradiction = satisfied.all_closed();
        debug_assert!(
            !(tautology && contradiction),
            "no formula is both a tautology and a contradiction",
        );

        if tautology {
            Verdict::Tautology {
                causes: causes::minimal_causes(formula, Property::Tautology, &self.config),
            }
        } else if contradiction {
            Verdict::Contradiction {
                causes: causes::minimal_causes(formula, Property::Contradiction, &self.config),
            }
        } else {
            Verdict::Contingency {
                true_on: witnesses::from_tableau(formula, &satisfied, true, &self.config),
                false_on: witnesses::from_tableau(formula, &falsified, false, &self.config),
            }
        }
    }
}

/// Classify a formula with the default configuration.
pub fn classify(formula: &Formula) -> Verdict {
    Classifier::default().classify(formula)
}

/// Whether every valuation satisfies the formula.
pub fn is_tautology(formula: &Formula) -> bool {
    tableau::build(SignedFormula::new(formula.clone(), false)).all_closed()
}

/// Whether no valuation satisfies the formula.
pub fn is_contradiction(formula: &Formula) -> bool {
    tableau::build(SignedFormula::new(formula.clone(), true)).all_closed()
}
