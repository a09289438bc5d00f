//! Match record emitted by the engine.

use serde::{Deserialize, Serialize};

use crate::term::TermIdentity;

/// One accepted (row, token, term) triple.
///
/// Records are immutable once emitted and live only inside a single run's
/// output sequence; persistence belongs to the result sink.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchRecord {
    /// Identifier value extracted from the row's id column.
    pub record_id: String,
    /// Levenshtein distance between token and search text.
    pub edits: usize,
    /// Length-normalized similarity in [0, 1].
    pub similarity: f64,
    /// The token from the target text that matched.
    pub matched_term: String,
    /// Which search term matched, with vocabulary attribution when present.
    #[serde(flatten)]
    pub term: TermIdentity,
}
