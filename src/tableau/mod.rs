/*!
Construction of tableaux.

A tableau is built from a signed root formula by exhaustively applying the
[expansion rules](crate::rules) along every branch:
- a terminal literal extends the branch, closing it when complemented;
- a non-branching expansion queues its conclusions on the same branch;
- a branching expansion clones the branch, one child per alternative.

A closed branch is never expanded further; an open branch is expanded until
only literals remain. The construction is exhaustive over open branches, so
the tautology and contradiction tests read off a completed tableau are sound
and complete.

The number of branches is worst-case exponential in the size of the root
formula, as every branching rule may double the count. This is inherent to the
method, not an implementation artefact.
*/

mod branch;
pub use branch::Branch;

use crate::{
    misc::log::targets,
    rules::{self, Expansion},
    structures::signed::SignedFormula,
};

/// The fully expanded branches of a signed root formula.
#[derive(Clone, Debug)]
pub struct Tableau {
    branches: Vec<Branch>,
}

impl Tableau {
    /// Every fully expanded branch, closed or open.
    pub fn branches(&self) -> &[Branch] {
        &self.branches
    }

    /// Whether every branch is closed.
    pub fn all_closed(&self) -> bool {
        self.branches.iter().all(Branch::is_closed)
    }

    /// The open branches: each is a satisfiability witness for the root.
    pub fn open_branches(&self) -> impl Iterator<Item = &Branch> {
        self.branches.iter().filter(|branch| !branch.is_closed())
    }
}

/// Build the complete tableau for a signed root formula.
///
/// Pure: the tableau is a function of the root alone.
pub fn build(root: SignedFormula) -> Tableau {
    log::trace!(target: targets::EXPANSION, "building a tableau for {root}");

    let mut complete = Vec::new();
    let mut work = vec![Branch::root(root)];

    'branches: while let Some(mut branch) = work.pop() {
        loop {
            if branch.is_closed() {
                complete.push(branch);
                continue 'branches;
            }

            let Some(next) = branch.next_pending() else {
                complete.push(branch);
                continue 'branches;
            };

            match rules::expand(&next) {
                Expansion::Terminal(literal) => branch.add_literal(literal),

                Expansion::NonBranching(conclusions) => branch.extend_pending(conclusions),

                Expansion::Branching(alternatives) => {
                    log::trace!(
                        target: targets::EXPANSION,
                        "splitting {} ways on {}",
                        alternatives.len(),
                        next.formula.prefix(),
                    );
                    for alternative in alternatives {
                        let mut child = branch.clone();
                        child.extend_pending(alternative);
                        work.push(child);
                    }
                    continue 'branches;
                }
            }
        }
    }

    Tableau { branches: complete }
}
