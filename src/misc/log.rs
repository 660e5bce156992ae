/*!
Miscellaneous items related to [logging](log).

Calls to the log macro are made at the points a classification takes a
decision. These are intended to help when extending the library and/or
fixing issues.

Note, no log implementation is provided.
For more details, see [log].
*/

/// Targets to be used within a [log]! macro.
pub mod targets {
    /// Logs related to [parsing](crate::builder).
    pub const PARSE: &str = "parse";

    /// Logs related to [tableau construction](crate::tableau).
    pub const EXPANSION: &str = "expansion";

    /// Logs related to branch closure.
    pub const CLOSURE: &str = "closure";

    /// Logs related to the [minimal cause search](crate::procedures::causes).
    pub const CAUSES: &str = "causes";

    /// Logs related to [witness extraction](crate::procedures::witnesses).
    pub const WITNESSES: &str = "witnesses";
}
