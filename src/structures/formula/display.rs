//! Rendering of formulas.
//!
//! The [Display](std::fmt::Display) rendering is fully parenthesised infix
//! over the canonical symbol spellings, and round-trips: parsing the
//! rendering of a formula yields a structurally equal formula.
//! The [prefix](Formula::prefix) rendering is Polish notation, compact and
//! parenthesis-free, used in logs.

use std::fmt;

use super::Formula;

impl Formula {
    /// The prefix (Polish) rendering of the formula.
    pub fn prefix(&self) -> String {
        match self {
            Formula::Atom(name) => name.clone(),
            Formula::Not(inner) => format!("¬{}", inner.prefix()),
            Formula::And(l, r) => format!("∧ {} {}", l.prefix(), r.prefix()),
            Formula::Or(l, r) => format!("∨ {} {}", l.prefix(), r.prefix()),
            Formula::Implies(l, r) => format!("→ {} {}", l.prefix(), r.prefix()),
            Formula::Iff(l, r) => format!("↔ {} {}", l.prefix(), r.prefix()),
        }
    }
}

impl fmt::Display for Formula {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Formula::Atom(name) => write!(f, "{name}"),
            Formula::Not(inner) => write!(f, "(¬{inner})"),
            Formula::And(l, r) => write!(f, "({l} ∧ {r})"),
            Formula::Or(l, r) => write!(f, "({l} ∨ {r})"),
            Formula::Implies(l, r) => write!(f, "({l} → {r})"),
            Formula::Iff(l, r) => write!(f, "({l} ↔ {r})"),
        }
    }
}
