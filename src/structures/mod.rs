//! The abstract elements of a classification: atoms, literals, formulas,
//! signed formulas, and valuations.

pub mod atom;
pub mod formula;
pub mod literal;
pub mod signed;
pub mod valuation;
