//! Fuzzy matching core: edit distance, similarity scoring, term sets, and
//! the row-by-row match engine.

pub mod distance;
pub mod engine;
pub mod similarity;
pub mod terms;

pub use distance::distance;
pub use engine::{MatchEngine, MatchRun, RowMatches};
pub use similarity::similarity;
pub use terms::{SearchTerm, TermOrigin, TermSet};
