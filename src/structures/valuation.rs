/*!
Valuations: assignments of truth values to atoms.

A valuation here is a map from atom names to values. Partial valuations are
meaningful, as [value_on](crate::structures::formula::Formula::value_on)
returns `None` when it reaches an unassigned atom, and [Assignments] sweeps
every total valuation of a set of atoms, for the exhaustive checks behind
witness minimization (and for brute-force oracles in tests).
*/

use std::collections::{BTreeMap, BTreeSet};

use crate::structures::{atom::Atom, formula::Formula};

/// An assignment of truth values to atoms, by name.
pub type Valuation = BTreeMap<Atom, bool>;

impl Formula {
    /// The value of the formula on the given valuation, or `None` if
    /// evaluation reaches an atom the valuation does not assign.
    pub fn value_on(&self, valuation: &Valuation) -> Option<bool> {
        match self {
            Formula::Atom(name) => valuation.get(name).copied(),
            Formula::Not(inner) => inner.value_on(valuation).map(|value| !value),
            Formula::And(l, r) => Some(l.value_on(valuation)? && r.value_on(valuation)?),
            Formula::Or(l, r) => Some(l.value_on(valuation)? || r.value_on(valuation)?),
            Formula::Implies(l, r) => Some(!l.value_on(valuation)? || r.value_on(valuation)?),
            Formula::Iff(l, r) => Some(l.value_on(valuation)? == r.value_on(valuation)?),
        }
    }
}

/// An iterator over every total valuation of a fixed set of atoms.
///
/// The sweep is in binary-counter order: 2ⁿ valuations for n atoms, with
/// the lexicographically first atom in the least significant position.
/// Supports up to 63 atoms, beyond which no exhaustive sweep completes
/// anyway.
pub struct Assignments {
    atoms: Vec<Atom>,
    next: u64,
}

impl Assignments {
    /// A sweep over every total valuation of the given atoms.
    pub fn over(atoms: &BTreeSet<Atom>) -> Self {
        debug_assert!(atoms.len() < 64);
        Assignments {
            atoms: atoms.iter().cloned().collect(),
            next: 0,
        }
    }
}

impl Iterator for Assignments {
    type Item = Valuation;

    fn next(&mut self) -> Option<Valuation> {
        if self.next >= 1 << self.atoms.len() {
            return None;
        }
        let valuation = self
            .atoms
            .iter()
            .enumerate()
            .map(|(index, atom)| (atom.clone(), (self.next >> index) & 1 == 1))
            .collect();
        self.next += 1;
        Some(valuation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sweep_counts() {
        let atoms: BTreeSet<Atom> = ["p", "q", "r"].iter().map(|a| a.to_string()).collect();
        assert_eq!(Assignments::over(&atoms).count(), 8);

        let none = BTreeSet::new();
        assert_eq!(Assignments::over(&none).count(), 1);
    }

    #[test]
    fn evaluation() {
        // (p → q) on p = true, q = false.
        let formula = Formula::implies(Formula::atom("p"), Formula::atom("q"));
        let valuation: Valuation =
            [("p".to_string(), true), ("q".to_string(), false)].into_iter().collect();
        assert_eq!(formula.value_on(&valuation), Some(false));

        let partial: Valuation = [("p".to_string(), true)].into_iter().collect();
        assert_eq!(formula.value_on(&partial), None);
    }
}
