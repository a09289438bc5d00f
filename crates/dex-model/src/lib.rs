//! Shared data model for the drug-extract workspace.

pub mod config;
pub mod error;
pub mod options;
pub mod record;
pub mod term;

pub use config::{Acceptance, MatchConfig, SearchMode};
pub use error::{DexError, Result};
pub use options::RunOptions;
pub use record::MatchRecord;
pub use term::{TermIdentity, VocabularyEntry};

#[cfg(test)]
mod tests {
    use super::{MatchRecord, TermIdentity};

    #[test]
    fn record_serializes_flat() {
        let record = MatchRecord {
            record_id: "17".to_string(),
            edits: 1,
            similarity: 0.857,
            matched_term: "COCANE".to_string(),
            term: TermIdentity::Plain {
                search_term: "COCAINE".to_string(),
            },
        };
        let json = serde_json::to_string(&record).expect("serialize record");
        let round: MatchRecord = serde_json::from_str(&json).expect("deserialize record");
        assert_eq!(round, record);
        assert!(json.contains("\"search_term\":\"COCAINE\""));
    }

    #[test]
    fn vocabulary_identity_search_text() {
        let term = TermIdentity::Vocabulary {
            drug_name: "ACETAMINOPHEN".to_string(),
            rx_id: "161".to_string(),
            class_id: "N02BE".to_string(),
        };
        assert_eq!(term.search_text(), "ACETAMINOPHEN");
    }
}
