//! Search term collection.

use dex_model::VocabularyEntry;
use serde::{Deserialize, Serialize};

/// One normalized search candidate.
///
/// Plain terms carry just their text; vocabulary candidates also carry the
/// external attribution of the entry they were split from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchTerm {
    /// Uppercased, trimmed text compared against tokens.
    pub text: String,
    pub origin: TermOrigin,
}

/// Where a search candidate came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TermOrigin {
    Plain,
    Vocabulary { rx_id: String, class_id: String },
}

/// The full, immutable collection of search candidates for one run.
///
/// Candidates are flattened at construction time and iterated in insertion
/// order: entry order first, synonym order within an entry second. Iteration
/// is restartable and stable for the lifetime of the set.
#[derive(Debug, Clone, Default)]
pub struct TermSet {
    terms: Vec<SearchTerm>,
}

impl TermSet {
    /// Build from plain search words. No splitting: each word is one
    /// candidate. Blank words are dropped.
    pub fn plain<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let terms = words
            .into_iter()
            .filter_map(|word| {
                let text = normalize(word.as_ref());
                (!text.is_empty()).then_some(SearchTerm {
                    text,
                    origin: TermOrigin::Plain,
                })
            })
            .collect();
        Self { terms }
    }

    /// Build from vocabulary entries. Each entry's display name is split on
    /// `/` into independent synonyms, all attributing the entry's rx id and
    /// class id. Blank synonyms are dropped.
    pub fn vocabulary(entries: &[VocabularyEntry]) -> Self {
        let mut terms = Vec::new();
        for entry in entries {
            for synonym in entry.name.split('/') {
                let text = normalize(synonym);
                if text.is_empty() {
                    continue;
                }
                terms.push(SearchTerm {
                    text,
                    origin: TermOrigin::Vocabulary {
                        rx_id: entry.rx_id.clone(),
                        class_id: entry.class_id.clone(),
                    },
                });
            }
        }
        Self { terms }
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SearchTerm> {
        self.terms.iter()
    }

    /// Number of search candidates (synonyms count individually).
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }
}

impl<'a> IntoIterator for &'a TermSet {
    type Item = &'a SearchTerm;
    type IntoIter = std::slice::Iter<'a, SearchTerm>;

    fn into_iter(self) -> Self::IntoIter {
        self.terms.iter()
    }
}

fn normalize(raw: &str) -> String {
    raw.trim().to_uppercase()
}

#[cfg(test)]
mod tests {
    use super::{TermOrigin, TermSet};
    use dex_model::VocabularyEntry;

    #[test]
    fn plain_terms_are_normalized_not_split() {
        let set = TermSet::plain(["  cocaine ", "fentanyl/patch", ""]);
        let texts: Vec<&str> = set.iter().map(|term| term.text.as_str()).collect();
        assert_eq!(texts, vec!["COCAINE", "FENTANYL/PATCH"]);
        assert!(set.iter().all(|term| term.origin == TermOrigin::Plain));
    }

    #[test]
    fn vocabulary_names_split_into_synonyms() {
        let entries = vec![VocabularyEntry {
            name: "Tylenol/Acetaminophen".to_string(),
            rx_id: "161".to_string(),
            class_id: "N02BE".to_string(),
        }];
        let set = TermSet::vocabulary(&entries);
        assert_eq!(set.len(), 2);
        let texts: Vec<&str> = set.iter().map(|term| term.text.as_str()).collect();
        assert_eq!(texts, vec!["TYLENOL", "ACETAMINOPHEN"]);
        for term in &set {
            assert_eq!(
                term.origin,
                TermOrigin::Vocabulary {
                    rx_id: "161".to_string(),
                    class_id: "N02BE".to_string(),
                }
            );
        }
    }

    #[test]
    fn iteration_order_is_insertion_order_and_restartable() {
        let entries = vec![
            VocabularyEntry {
                name: "Heroin".to_string(),
                rx_id: "3304".to_string(),
                class_id: "N02A".to_string(),
            },
            VocabularyEntry {
                name: "Morphine/MS Contin".to_string(),
                rx_id: "7052".to_string(),
                class_id: "N02A".to_string(),
            },
        ];
        let set = TermSet::vocabulary(&entries);
        let first: Vec<&str> = set.iter().map(|term| term.text.as_str()).collect();
        let second: Vec<&str> = set.iter().map(|term| term.text.as_str()).collect();
        assert_eq!(first, vec!["HEROIN", "MORPHINE", "MS CONTIN"]);
        assert_eq!(first, second);
    }

    #[test]
    fn blank_synonyms_are_dropped() {
        let entries = vec![VocabularyEntry {
            name: "Codeine/ /".to_string(),
            rx_id: "2670".to_string(),
            class_id: "N02A".to_string(),
        }];
        let set = TermSet::vocabulary(&entries);
        assert_eq!(set.len(), 1);
    }
}
