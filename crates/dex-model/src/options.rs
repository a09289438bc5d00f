//! Raw run options and boundary validation.
//!
//! The wizard-style surfaces of the original tool accumulated options across
//! steps; here everything is merged into one serde-friendly struct and
//! validated once, before any row is processed.

use serde::{Deserialize, Serialize};

use crate::config::{Acceptance, MatchConfig, SearchMode};
use crate::error::{DexError, Result};

/// Unvalidated options as collected from the CLI (or any other frontend).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RunOptions {
    /// Simple word list or drug vocabulary.
    pub mode: SearchMode,
    /// Index of the identifier column, once resolved against the header.
    pub id_column: Option<usize>,
    /// Index of the free-text target column.
    pub target_column: Option<usize>,
    /// Maximum accepted edit distance.
    pub max_edits: Option<usize>,
    /// Minimum accepted similarity score.
    pub min_similarity: Option<f64>,
}

impl RunOptions {
    /// Validate against the header width and produce an engine config.
    ///
    /// Fails fast on: missing or out-of-range column selection, both or
    /// neither limiter supplied, or a similarity threshold outside [0, 1].
    pub fn validate(&self, column_count: usize) -> Result<MatchConfig> {
        let id_column = self
            .id_column
            .ok_or_else(|| DexError::Configuration("no identifier column selected".into()))?;
        let target_column = self
            .target_column
            .ok_or_else(|| DexError::Configuration("no target text column selected".into()))?;
        if id_column >= column_count {
            return Err(DexError::Configuration(format!(
                "identifier column {id_column} out of range (header has {column_count} columns)"
            )));
        }
        if target_column >= column_count {
            return Err(DexError::Configuration(format!(
                "target column {target_column} out of range (header has {column_count} columns)"
            )));
        }
        let acceptance = match (self.max_edits, self.min_similarity) {
            (Some(edits), None) => Acceptance::MaxEdits(edits),
            (None, Some(threshold)) => {
                if !threshold.is_finite() || !(0.0..=1.0).contains(&threshold) {
                    return Err(DexError::Configuration(format!(
                        "similarity threshold {threshold} must be within [0, 1]"
                    )));
                }
                Acceptance::MinSimilarity(threshold)
            }
            (Some(_), Some(_)) => {
                return Err(DexError::Configuration(
                    "max-edits and min-similarity are mutually exclusive".into(),
                ));
            }
            (None, None) => {
                return Err(DexError::Configuration(
                    "one of max-edits or min-similarity is required".into(),
                ));
            }
        };
        Ok(MatchConfig {
            id_column,
            target_column,
            acceptance,
        })
    }
}
