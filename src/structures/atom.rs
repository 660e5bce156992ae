/*!
(The representation of) an atom, aka. a propositional variable.

Atoms are the things formulas are built over, and the things to which a truth
value is assigned.

An atom is identified with its name: an ASCII letter followed by ASCII
letters, digits, or underscores.
Examples: `p`, `q_1`, `rain`.

# Notes
- In the SAT literature these are often called 'variables' while in the logic
  literature these are often called 'atoms'.
- Names are owned strings. Formulas are small and classification clones
  freely; interning would be a representational revision, not an interface
  one.
*/

/// An atom, aka. a propositional variable, identified by name.
pub type Atom = String;
