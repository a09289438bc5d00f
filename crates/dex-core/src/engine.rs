//! The matching engine.
//!
//! A run is a pure function over rows, a term set, and a validated config:
//! no state survives between calls. Every token × candidate pair is
//! evaluated independently; there is no first-match-wins shortcut, so the
//! comparison count per row is always `tokens * candidates`.

use tracing::{debug, info};

use dex_model::{DexError, MatchConfig, MatchRecord, Result, TermIdentity};

use crate::distance::distance;
use crate::similarity::similarity;
use crate::terms::{TermOrigin, TermSet};

/// Matches from a single row.
#[derive(Debug, Clone, Default)]
pub struct RowMatches {
    pub records: Vec<MatchRecord>,
    /// Token × candidate pairs evaluated for this row.
    pub comparisons: u64,
}

/// The ordered output of a full run.
#[derive(Debug, Clone, Default)]
pub struct MatchRun {
    /// Records in row order, then term order, then token order.
    pub records: Vec<MatchRecord>,
    pub rows: usize,
    pub comparisons: u64,
}

/// Fuzzy matcher over a shared, read-only term set.
pub struct MatchEngine<'a> {
    config: MatchConfig,
    terms: &'a TermSet,
}

impl<'a> MatchEngine<'a> {
    pub fn new(config: MatchConfig, terms: &'a TermSet) -> Self {
        Self { config, terms }
    }

    /// Match every row, preserving row order in the output.
    pub fn run(&self, rows: &[Vec<String>]) -> Result<MatchRun> {
        let mut run = MatchRun {
            rows: rows.len(),
            ..MatchRun::default()
        };
        for (index, row) in rows.iter().enumerate() {
            let matched = self.match_row(index, row)?;
            run.comparisons += matched.comparisons;
            run.records.extend(matched.records);
        }
        info!(
            rows = run.rows,
            terms = self.terms.len(),
            comparisons = run.comparisons,
            matches = run.records.len(),
            "matching complete"
        );
        Ok(run)
    }

    /// Match a single row.
    ///
    /// `row_index` is the 0-based data row position, used for error
    /// reporting only. Empty target text yields zero tokens and zero
    /// records; a missing column position is an error, not an empty match.
    pub fn match_row(&self, row_index: usize, row: &[String]) -> Result<RowMatches> {
        let id = field(row, row_index, self.config.id_column)?;
        let text = field(row, row_index, self.config.target_column)?;

        let tokens: Vec<Token> = text
            .split_whitespace()
            .map(Token::normalize)
            .collect();
        let mut matched = RowMatches::default();
        for term in self.terms {
            let term_len = term.text.chars().count();
            for token in &tokens {
                matched.comparisons += 1;
                let edits = distance(&token.text, &term.text);
                let score = similarity(edits, token.len, term_len);
                if !self.config.acceptance.accepts(edits, score) {
                    continue;
                }
                matched.records.push(MatchRecord {
                    record_id: id.to_string(),
                    edits,
                    similarity: score,
                    matched_term: token.text.clone(),
                    term: match &term.origin {
                        TermOrigin::Plain => TermIdentity::Plain {
                            search_term: term.text.clone(),
                        },
                        TermOrigin::Vocabulary { rx_id, class_id } => TermIdentity::Vocabulary {
                            drug_name: term.text.clone(),
                            rx_id: rx_id.clone(),
                            class_id: class_id.clone(),
                        },
                    },
                });
            }
        }
        debug!(
            row = row_index,
            tokens = tokens.len(),
            matches = matched.records.len(),
            "row matched"
        );
        Ok(matched)
    }
}

struct Token {
    text: String,
    len: usize,
}

impl Token {
    fn normalize(raw: &str) -> Self {
        let text = raw.trim().to_uppercase();
        let len = text.chars().count();
        Self { text, len }
    }
}

fn field<'r>(row: &'r [String], row_index: usize, column: usize) -> Result<&'r str> {
    row.get(column)
        .map(String::as_str)
        .ok_or(DexError::IndexOutOfRange {
            row: row_index,
            index: column,
            width: row.len(),
        })
}
