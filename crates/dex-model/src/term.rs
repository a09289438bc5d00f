//! Search term attribution types.

use serde::{Deserialize, Serialize};

/// One entry from the external drug vocabulary.
///
/// The display name may encode several synonyms separated by `/`
/// (e.g. `Tylenol/Acetaminophen`); splitting happens when the term set is
/// built, not here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VocabularyEntry {
    /// Display name as returned by the terminology service.
    pub name: String,
    /// External concept identifier (RxCUI).
    pub rx_id: String,
    /// Drug class the entry was fetched under.
    pub class_id: String,
}

/// Identity of the search term a match record attributes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TermIdentity {
    /// A plain search word.
    Plain { search_term: String },
    /// A vocabulary synonym with its external attribution.
    Vocabulary {
        drug_name: String,
        rx_id: String,
        class_id: String,
    },
}

impl TermIdentity {
    /// The normalized text that was compared against the token.
    pub fn search_text(&self) -> &str {
        match self {
            Self::Plain { search_term } => search_term,
            Self::Vocabulary { drug_name, .. } => drug_name,
        }
    }
}
