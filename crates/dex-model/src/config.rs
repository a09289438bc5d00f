//! Validated run configuration.

use serde::{Deserialize, Serialize};

/// Where the search terms come from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchMode {
    /// Plain words supplied directly by the user.
    #[default]
    Simple,
    /// Vocabulary entries fetched from the terminology service.
    Drug,
}

/// Acceptance policy for a token/term comparison.
///
/// Exactly one policy is active per run. `MaxEdits(0)` is a legitimate
/// value meaning exact-match-only.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Acceptance {
    /// Accept when the edit distance is at most this many edits.
    MaxEdits(usize),
    /// Accept when the similarity score is at least this threshold.
    MinSimilarity(f64),
}

impl Acceptance {
    /// Apply the policy to a computed distance/similarity pair.
    pub fn accepts(self, edits: usize, similarity: f64) -> bool {
        match self {
            Self::MaxEdits(limit) => edits <= limit,
            Self::MinSimilarity(threshold) => similarity >= threshold,
        }
    }
}

/// Configuration the engine trusts.
///
/// Built through [`RunOptions::validate`], never from raw user input.
///
/// [`RunOptions::validate`]: crate::options::RunOptions::validate
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MatchConfig {
    /// Index of the identifier column.
    pub id_column: usize,
    /// Index of the free-text target column.
    pub target_column: usize,
    /// The active acceptance policy.
    pub acceptance: Acceptance,
}
