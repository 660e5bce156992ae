/*!
The tableau expansion rules.

A signed formula decomposes by the connective at its root and its sign:

| signed formula | expands to | kind |
|---|---|---|
| T ¬A | F A | non-branching |
| F ¬A | T A | non-branching |
| T A∧B | T A, T B | non-branching |
| F A∧B | F A \| F B | branching |
| T A∨B | T A \| T B | branching |
| F A∨B | F A, F B | non-branching |
| T A→B | F A \| T B | branching |
| F A→B | T A, F B | non-branching |
| T A↔B | (T A, T B) \| (F A, F B) | branching |
| F A↔B | (T A, F B) \| (F A, T B) | branching |

A non-branching expansion extends the branch; a branching expansion splits
it, one child branch per alternative. A signed atom is a literal and
terminal: nothing decomposes further.

Every rule replaces one connective with signed formulas of strictly smaller
size, so repeated expansion terminates.
*/

use crate::structures::{formula::Formula, literal::Literal, signed::SignedFormula};

/// The decomposition of a signed formula.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Expansion {
    /// A signed atom: a literal, nothing to decompose.
    Terminal(Literal),

    /// The branch extends with each of the signed formulas.
    NonBranching(Vec<SignedFormula>),

    /// The branch splits, one child per alternative, each child extending
    /// with the signed formulas of its alternative.
    Branching(Vec<Vec<SignedFormula>>),
}

fn signed(formula: &Formula, sign: bool) -> SignedFormula {
    SignedFormula::new(formula.clone(), sign)
}

/// Decompose a signed formula per the expansion table.
///
/// Total over the connective set; never fails.
pub fn expand(root: &SignedFormula) -> Expansion {
    let sign = root.sign;
    match &root.formula {
        Formula::Atom(name) => Expansion::Terminal(Literal::new(name.clone(), sign)),

        Formula::Not(inner) => Expansion::NonBranching(vec![signed(inner, !sign)]),

        Formula::And(l, r) => match sign {
            true => Expansion::NonBranching(vec![signed(l, true), signed(r, true)]),
            false => Expansion::Branching(vec![vec![signed(l, false)], vec![signed(r, false)]]),
        },

        Formula::Or(l, r) => match sign {
            true => Expansion::Branching(vec![vec![signed(l, true)], vec![signed(r, true)]]),
            false => Expansion::NonBranching(vec![signed(l, false), signed(r, false)]),
        },

        Formula::Implies(l, r) => match sign {
            true => Expansion::Branching(vec![vec![signed(l, false)], vec![signed(r, true)]]),
            false => Expansion::NonBranching(vec![signed(l, true), signed(r, false)]),
        },

        Formula::Iff(l, r) => match sign {
            true => Expansion::Branching(vec![
                vec![signed(l, true), signed(r, true)],
                vec![signed(l, false), signed(r, false)],
            ]),
            false => Expansion::Branching(vec![
                vec![signed(l, true), signed(r, false)],
                vec![signed(l, false), signed(r, true)],
            ]),
        },
    }
}

/// Whether expansion of the signed formula splits the branch.
///
/// Agrees with [expand]; used to take non-branching work first, which avoids
/// repeating shared expansions on both sides of a split.
pub fn branches(root: &SignedFormula) -> bool {
    matches!(
        (&root.formula, root.sign),
        (Formula::And(_, _), false)
            | (Formula::Or(_, _), true)
            | (Formula::Implies(_, _), true)
            | (Formula::Iff(_, _), _)
    )
}
