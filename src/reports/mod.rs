/*!
Verdicts: the reports of a classification.
*/

use std::collections::BTreeSet;

use crate::structures::{atom::Atom, literal::Literal};

/// A minimal cause: a set of variables whose removal from the formula
/// destroys the verdict's property.
pub type Cause = BTreeSet<Atom>;

/// A witness clause: a conjunction of literals sufficient to force the
/// formula's value.
pub type Witness = Vec<Literal>;

/// The classification of a formula, with the explanation of the verdict.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Verdict {
    /// True on every valuation.
    Tautology {
        /// The minimal variable sets whose removal breaks the property.
        causes: Vec<Cause>,
    },

    /// False on every valuation.
    Contradiction {
        /// The minimal variable sets whose removal breaks the property.
        causes: Vec<Cause>,
    },

    /// True on some valuations, false on others.
    Contingency {
        /// Minimal sufficient conditions for the formula to be true.
        true_on: Vec<Witness>,

        /// Minimal sufficient conditions for the formula to be false.
        false_on: Vec<Witness>,
    },
}

impl Verdict {
    /// Whether the verdict is `Tautology`.
    pub fn is_tautology(&self) -> bool {
        matches!(self, Verdict::Tautology { .. })
    }

    /// Whether the verdict is `Contradiction`.
    pub fn is_contradiction(&self) -> bool {
        matches!(self, Verdict::Contradiction { .. })
    }

    /// Whether the verdict is `Contingency`.
    pub fn is_contingency(&self) -> bool {
        matches!(self, Verdict::Contingency { .. })
    }
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Verdict::Tautology { .. } => write!(f, "Tautology"),
            Verdict::Contradiction { .. } => write!(f, "Contradiction"),
            Verdict::Contingency { .. } => write!(f, "Contingency"),
        }
    }
}

/// Render a cause as `{a, b}`.
pub fn cause_string(cause: &Cause) -> String {
    let names = cause.iter().cloned().collect::<Vec<_>>().join(", ");
    format!("{{{names}}}")
}

/// Render a witness clause as `a ∧ ¬b`.
pub fn witness_string(witness: &Witness) -> String {
    witness
        .iter()
        .map(|literal| literal.to_string())
        .collect::<Vec<_>>()
        .join(" ∧ ")
}
