//! The built-in formula catalog.
//!
//! An explicit immutable table the driver selects from by index. The entries
//! keep to the one-binary-connective-per-level discipline the parser
//! requires.

/// Catalogued formulas, classics first.
pub const CATALOG: [&str; 12] = [
    // law of the excluded middle
    "a | ~a",
    // the simplest contradiction
    "a & ~a",
    "a & (b | c)",
    "((~a) & b) | c",
    // modus ponens
    "((a -> b) & a) -> b",
    // modus tollens
    "((a -> b) & ~b) -> ~a",
    // contraposition
    "(a -> b) <-> (~b -> ~a)",
    // double negation, both directions
    "(a -> ~~a) & (~~a -> a)",
    // De Morgan
    "~(a & b) <-> (~a | ~b)",
    "~(a | b) <-> (~a & ~b)",
    // distribution of ∧ over ∨
    "(a & (b | c)) <-> ((a & b) | (a & c))",
    // a larger mix of every connective
    "(((a & b) | (c & d)) -> (x | y)) & (~(z | ((a & b) & (c & d))) <-> ((x <-> y) | ~z))",
];
