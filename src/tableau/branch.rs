//! A branch of a tableau.

use crate::{
    misc::log::targets,
    rules,
    structures::{literal::Literal, signed::SignedFormula},
};

/// One path of a tableau: the literals reached so far, the signed formulas
/// still awaiting expansion, and whether complementary literals have been
/// reached.
///
/// A branch owns its contents. Splitting clones the branch, so sibling
/// branches never share state.
#[derive(Clone, Debug)]
pub struct Branch {
    /// Literals reached on the branch, in arrival order, deduplicated.
    literals: Vec<Literal>,

    /// Signed formulas awaiting expansion.
    pending: Vec<SignedFormula>,

    /// Whether the branch holds complementary literals.
    closed: bool,
}

impl Branch {
    /// The root branch of a tableau: no literals, one pending formula.
    pub(super) fn root(root: SignedFormula) -> Self {
        Branch {
            literals: Vec::new(),
            pending: vec![root],
            closed: false,
        }
    }

    /// The literals reached on the branch.
    ///
    /// For an open, fully expanded branch these are a satisfying assignment
    /// of the root: each atom takes its asserted value, absent atoms are
    /// unconstrained.
    pub fn literals(&self) -> &[Literal] {
        &self.literals
    }

    /// Whether the branch holds complementary literals.
    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// Take the next pending formula, non-branching work first.
    pub(super) fn next_pending(&mut self) -> Option<SignedFormula> {
        let index = match self.pending.iter().position(|signed| !rules::branches(signed)) {
            Some(index) => index,
            None => self.pending.len().checked_sub(1)?,
        };
        Some(self.pending.remove(index))
    }

    /// Queue signed formulas for expansion.
    pub(super) fn extend_pending(&mut self, formulas: Vec<SignedFormula>) {
        self.pending.extend(formulas);
    }

    /// Record a literal, closing the branch when its complement is present.
    pub(super) fn add_literal(&mut self, literal: Literal) {
        if self.literals.iter().any(|reached| reached.complements(&literal)) {
            log::trace!(target: targets::CLOSURE, "closed on {literal}");
            self.closed = true;
            return;
        }
        if !self.literals.contains(&literal) {
            self.literals.push(literal);
        }
    }
}
