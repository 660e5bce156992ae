/*!
The minimal cause search.

A tautology (or a contradiction) is explained by the minimal sets of
variables whose removal (with the connectives that held them) destroys the
property. Candidates are swept by increasing size, so when a set first tests
destructive no strict subset can still be pending, and supersets of recorded
causes are skipped without testing. The sweep is a power set in the worst
case; [max_cause_width](crate::config::Config::max_cause_width) caps it.
*/

use std::collections::BTreeSet;

use crate::{
    config::Config,
    generic::combinations::Combinations,
    misc::log::targets,
    procedures::classify,
    reports::Cause,
    structures::formula::Formula,
};

/// The property a cause destroys.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Property {
    /// True on every valuation.
    Tautology,

    /// False on every valuation.
    Contradiction,
}

impl Property {
    fn holds_on(self, formula: &Formula) -> bool {
        match self {
            Property::Tautology => classify::is_tautology(formula),
            Property::Contradiction => classify::is_contradiction(formula),
        }
    }
}

/// The minimal variable sets whose removal destroys the property.
///
/// Every returned set is destructive and no strict subset of a returned set
/// is; all minimal causes of equal size are reported. The formula is assumed
/// to have the property; for any other formula the result is noise.
pub fn minimal_causes(formula: &Formula, property: Property, config: &Config) -> Vec<Cause> {
    let atoms: Vec<_> = formula.atoms().into_iter().collect();
    let widest = config.max_cause_width.unwrap_or(atoms.len()).min(atoms.len());

    let mut causes: Vec<Cause> = Vec::new();

    for size in 1..=widest {
        'candidates: for indices in Combinations::new(atoms.len(), size) {
            let candidate: BTreeSet<_> =
                indices.iter().map(|&index| atoms[index].clone()).collect();

            // A superset of a recorded cause cannot be minimal.
            if causes.iter().any(|cause| cause.is_subset(&candidate)) {
                continue 'candidates;
            }

            let destroyed = match formula.without(&candidate) {
                None => true,
                Some(reduced) => !property.holds_on(&reduced),
            };

            if destroyed {
                log::debug!(target: targets::CAUSES, "cause of size {size}: {candidate:?}");
                causes.push(candidate);
            }
        }
    }

    causes
}
