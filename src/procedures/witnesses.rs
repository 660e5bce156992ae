/*!
Witness extraction for contingent formulas.

Each open branch of a completed tableau collects literals which, taken
together, force the sign of the root: the branch is one conjunctive clause.
Clauses are minimized by evaluation (a literal is dropped when every total
valuation extending the remaining literals still gives the formula the
target value) and duplicated or subsumed clauses are pruned. Literal and
clause order is canonical, so the report is deterministic regardless of
expansion order.
*/

use std::collections::BTreeSet;

use crate::{
    config::Config,
    misc::log::targets,
    reports::Witness,
    structures::{
        formula::Formula,
        literal::Literal,
        valuation::{Assignments, Valuation},
    },
    tableau::Tableau,
};

/// The witness clauses of a completed tableau: one per open branch,
/// minimized and pruned per the configuration.
pub fn from_tableau(
    formula: &Formula,
    tableau: &Tableau,
    value: bool,
    config: &Config,
) -> Vec<Witness> {
    let mut clauses: Vec<Witness> = Vec::new();

    for branch in tableau.open_branches() {
        let mut literals = branch.literals().to_vec();
        literals.sort();
        if config.minimize_witnesses {
            minimize(formula, &mut literals, value);
        }
        clauses.push(literals);
    }

    clauses.sort();
    clauses.dedup();

    if config.minimize_witnesses {
        clauses = prune_subsumed(clauses);
    }

    clauses
}

/// Drop literals the remaining literals make redundant.
fn minimize(formula: &Formula, literals: &mut Vec<Literal>, value: bool) {
    let mut index = 0;
    while index < literals.len() {
        let dropped = literals.remove(index);
        if forces(formula, literals, value) {
            log::trace!(target: targets::WITNESSES, "dropped {dropped}");
        } else {
            literals.insert(index, dropped);
            index += 1;
        }
    }
}

/// Whether every total valuation extending the literals gives the formula
/// the target value.
fn forces(formula: &Formula, literals: &[Literal], value: bool) -> bool {
    let assigned: Valuation = literals
        .iter()
        .map(|literal| (literal.atom().clone(), literal.polarity()))
        .collect();
    let free: BTreeSet<_> = formula
        .atoms()
        .into_iter()
        .filter(|atom| !assigned.contains_key(atom))
        .collect();

    Assignments::over(&free).all(|completion| {
        let mut valuation = assigned.clone();
        valuation.extend(completion);
        formula.value_on(&valuation) == Some(value)
    })
}

/// Drop every clause another clause strictly subsumes.
fn prune_subsumed(clauses: Vec<Witness>) -> Vec<Witness> {
    let mut kept = Vec::new();
    'clauses: for clause in &clauses {
        for other in &clauses {
            if other.len() < clause.len() && other.iter().all(|literal| clause.contains(literal)) {
                continue 'clauses;
            }
        }
        kept.push(clause.clone());
    }
    kept
}
