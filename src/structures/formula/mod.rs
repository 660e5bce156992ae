/*!
Formulas of propositional logic.

A formula is an owned tree: a named variable at each leaf, a connective at
each interior node. The connective set is closed (negation, conjunction,
disjunction, implication, the biconditional) and dispatch throughout the
library is by exhaustive match.

Formulas are built by [parse](crate::builder::parse) or by the constructor
helpers, and are immutable afterwards: every downstream stage is a read-only
traversal.
*/

mod display;
mod without;

use std::collections::BTreeSet;

use crate::structures::atom::Atom;

/// A formula of propositional logic.
///
/// Equality is structural. Every node owns its subformulas exclusively, so a
/// formula is a tree: no sharing, no cycles.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Formula {
    /// A propositional variable.
    Atom(Atom),

    /// ¬A
    Not(Box<Formula>),

    /// A ∧ B
    And(Box<Formula>, Box<Formula>),

    /// A ∨ B
    Or(Box<Formula>, Box<Formula>),

    /// A → B
    Implies(Box<Formula>, Box<Formula>),

    /// A ↔ B
    Iff(Box<Formula>, Box<Formula>),
}

impl Formula {
    /// A variable, by name.
    pub fn atom(name: impl Into<Atom>) -> Self {
        Formula::Atom(name.into())
    }

    /// The negation of a formula.
    pub fn not(formula: Formula) -> Self {
        Formula::Not(Box::new(formula))
    }

    /// The conjunction of two formulas.
    pub fn and(left: Formula, right: Formula) -> Self {
        Formula::And(Box::new(left), Box::new(right))
    }

    /// The disjunction of two formulas.
    pub fn or(left: Formula, right: Formula) -> Self {
        Formula::Or(Box::new(left), Box::new(right))
    }

    /// An implication.
    pub fn implies(antecedent: Formula, consequent: Formula) -> Self {
        Formula::Implies(Box::new(antecedent), Box::new(consequent))
    }

    /// A biconditional.
    pub fn iff(left: Formula, right: Formula) -> Self {
        Formula::Iff(Box::new(left), Box::new(right))
    }

    /// The set of distinct variable names occurring in the formula.
    pub fn atoms(&self) -> BTreeSet<Atom> {
        let mut collected = BTreeSet::new();
        self.collect_atoms(&mut collected);
        collected
    }

    fn collect_atoms(&self, collected: &mut BTreeSet<Atom>) {
        match self {
            Formula::Atom(name) => {
                collected.insert(name.clone());
            }
            Formula::Not(inner) => inner.collect_atoms(collected),
            Formula::And(l, r)
            | Formula::Or(l, r)
            | Formula::Implies(l, r)
            | Formula::Iff(l, r) => {
                l.collect_atoms(collected);
                r.collect_atoms(collected);
            }
        }
    }
}

/// A binary connective tag, used where a connective is handled apart from
/// its operands, in particular by the tokenizer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Connective {
    /// ∧
    And,

    /// ∨
    Or,

    /// →
    Implies,

    /// ↔
    Iff,
}

impl Connective {
    /// The formula applying the connective to the given operands.
    pub fn apply(self, left: Formula, right: Formula) -> Formula {
        match self {
            Connective::And => Formula::and(left, right),
            Connective::Or => Formula::or(left, right),
            Connective::Implies => Formula::implies(left, right),
            Connective::Iff => Formula::iff(left, right),
        }
    }
}
