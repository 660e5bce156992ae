/*!
Literals are atoms paired with a (boolean) polarity.

A literal asserts the value of an atom on a branch: the literal is satisfied
by a valuation exactly when the valuation gives its atom its polarity.
Two literals complement each other when they assert opposite values of the
same atom, and a branch holding complementary literals is closed.

Literals are ordered by atom and then polarity, with 'false' (strictly) less
than 'true', and are hashable to allow straightforward use as map keys.
*/

use crate::structures::atom::Atom;

/// An atom paired with an asserted (boolean) value.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Literal {
    /// The atom of the literal.
    atom: Atom,

    /// The value asserted of the atom.
    polarity: bool,
}

impl Literal {
    /// A fresh literal, specified by pairing an atom with a value.
    pub fn new(atom: Atom, polarity: bool) -> Self {
        Literal { atom, polarity }
    }

    /// The atom of the literal.
    pub fn atom(&self) -> &Atom {
        &self.atom
    }

    /// The value the literal asserts.
    pub fn polarity(&self) -> bool {
        self.polarity
    }

    /// The negation of the literal.
    pub fn negate(&self) -> Self {
        Literal {
            atom: self.atom.clone(),
            polarity: !self.polarity,
        }
    }

    /// True exactly when `other` asserts the opposite value of the same atom.
    pub fn complements(&self, other: &Literal) -> bool {
        self.atom == other.atom && self.polarity != other.polarity
    }
}

impl std::fmt::Display for Literal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.polarity {
            true => write!(f, "{}", self.atom),
            false => write!(f, "¬{}", self.atom),
        }
    }
}
