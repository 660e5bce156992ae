//! A library for classifying propositional logic formulas.
//!
//! tabula decides whether a formula is a tautology, a contradiction, or a
//! contingency by the method of analytic tableaux, and reports *why*:
//! - For a tautology or a contradiction, the minimal sets of variables whose
//!   removal from the formula destroys the property.
//! - For a contingency, the minimal assignment patterns under which the
//!   formula is true, and those under which it is false.
//!
//! # Orientation
//!
//! The library is designed around a handful of small structures and the
//! procedures which relate them:
//! - A [Formula](structures::formula::Formula) is an owned tree of
//!   connectives over named variables, built by [builder::parse] or by the
//!   constructor helpers.
//! - A [SignedFormula](structures::signed::SignedFormula) pairs a formula
//!   with an assumed truth value, and is the unit on which the
//!   [expansion rules](rules) operate.
//! - A [Tableau](tableau::Tableau) is the complete set of expanded
//!   [branches](tableau::Branch) of a signed root formula.
//! - A [Verdict](reports::Verdict) is derived from a pair of tableaux by the
//!   [classification procedures](procedures).
//!
//! Useful starting points:
//! - The high-level [classification procedure](procedures::classify) for the
//!   dynamics of a verdict.
//! - The [expansion rules](rules) the tableaux are built with.
//! - The [configuration](config) for the supported knobs.
//!
//! # Example
//!
//! ```rust
//! use tabula::{classify, parse, Verdict};
//!
//! let formula = parse("(a -> b) <-> (~b -> ~a)").unwrap();
//! let verdict = classify(&formula);
//! assert!(matches!(verdict, Verdict::Tautology { .. }));
//! ```
//!
//! # Logs
//!
//! Calls to [log!](log) are made at the points a classification takes a
//! decision, under the targets listed in [misc::log]. No log implementation
//! is provided by the library; the CLI initialises one.

pub mod builder;
pub mod config;
pub mod generic;
pub mod misc;
pub mod procedures;
pub mod reports;
pub mod rules;
pub mod structures;
pub mod tableau;
pub mod types;

pub use builder::parse;
pub use config::Config;
pub use procedures::classify::{classify, Classifier};
pub use reports::Verdict;
pub use structures::{formula::Formula, literal::Literal};
