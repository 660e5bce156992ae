/*!
Configuration of a classifier.
*/

/// The configuration of a
/// [Classifier](crate::procedures::classify::Classifier).
#[derive(Clone, Debug)]
pub struct Config {
    /// The widest cause tuple the minimal cause search examines, or `None`
    /// for no cap. The search sweeps variable subsets by increasing size,
    /// a power set in the worst case, and a cap bounds it without affecting
    /// the soundness or minimality of the causes reported within the cap.
    pub max_cause_width: Option<usize>,

    /// Minimize witness clauses, dropping literals the remaining literals
    /// make redundant, and prune duplicated or subsumed clauses. On by
    /// default; switched off, the raw branch literals are reported, which is
    /// useful when inspecting the tableau itself.
    pub minimize_witnesses: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            max_cause_width: None,
            minimize_witnesses: true,
        }
    }
}
