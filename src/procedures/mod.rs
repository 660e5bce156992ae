/*!
The classification procedures.

[classify] derives a verdict from a pair of tableaux; [causes] searches for
the minimal variable sets behind a tautology or a contradiction; [witnesses]
extracts and minimizes the assignment patterns behind a contingency.
*/

pub mod causes;
pub mod classify;
pub mod witnesses;
