//! Deletion of variables from a formula.

use std::collections::BTreeSet;

use super::Formula;
use crate::structures::atom::Atom;

impl Formula {
    /// The formula with every occurrence of the given variables removed,
    /// together with the connectives that held them in place.
    ///
    /// Deletion is bottom-up: a deleted operand of a binary connective
    /// collapses the connective to the surviving operand, a negation of a
    /// deleted operand is itself deleted, and `None` is returned when
    /// nothing of the formula survives.
    pub fn without(&self, atoms: &BTreeSet<Atom>) -> Option<Formula> {
        match self {
            Formula::Atom(name) => match atoms.contains(name) {
                true => None,
                false => Some(self.clone()),
            },

            Formula::Not(inner) => inner.without(atoms).map(Formula::not),

            Formula::And(l, r) => surviving(l.without(atoms), r.without(atoms), Formula::and),
            Formula::Or(l, r) => surviving(l.without(atoms), r.without(atoms), Formula::or),
            Formula::Implies(l, r) => {
                surviving(l.without(atoms), r.without(atoms), Formula::implies)
            }
            Formula::Iff(l, r) => surviving(l.without(atoms), r.without(atoms), Formula::iff),
        }
    }
}

fn surviving(
    left: Option<Formula>,
    right: Option<Formula>,
    join: fn(Formula, Formula) -> Formula,
) -> Option<Formula> {
    match (left, right) {
        (Some(l), Some(r)) => Some(join(l, r)),
        (Some(one), None) | (None, Some(one)) => Some(one),
        (None, None) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(list: &[&str]) -> BTreeSet<Atom> {
        list.iter().map(|name| name.to_string()).collect()
    }

    #[test]
    fn operand_collapse() {
        // ((¬a) ∨ b) without a is b.
        let formula = Formula::or(Formula::not(Formula::atom("a")), Formula::atom("b"));
        assert_eq!(formula.without(&names(&["a"])), Some(Formula::atom("b")));
    }

    #[test]
    fn full_removal() {
        let formula = Formula::and(Formula::atom("a"), Formula::not(Formula::atom("a")));
        assert_eq!(formula.without(&names(&["a"])), None);
    }

    #[test]
    fn untouched() {
        let formula = Formula::implies(Formula::atom("a"), Formula::atom("b"));
        assert_eq!(formula.without(&names(&["c"])), Some(formula));
    }
}
