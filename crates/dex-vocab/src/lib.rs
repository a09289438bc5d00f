//! Vocabulary lookup collaborator.
//!
//! Decodes the RxClass `classMembers` payload shape into vocabulary
//! entries. The network fetch itself lives outside this workspace: callers
//! hand over the payload text (usually saved to a file) together with the
//! class id it was queried for. Missing fields are reported, never
//! defaulted.

use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use dex_model::{DexError, Result, VocabularyEntry};

#[derive(Debug, Deserialize)]
struct ClassMembersPayload {
    #[serde(rename = "drugMemberGroup")]
    drug_member_group: Option<DrugMemberGroup>,
}

#[derive(Debug, Deserialize)]
struct DrugMemberGroup {
    #[serde(rename = "drugMember", default)]
    drug_member: Vec<DrugMember>,
}

#[derive(Debug, Deserialize)]
struct DrugMember {
    #[serde(rename = "minConcept")]
    min_concept: Option<MinConcept>,
}

#[derive(Debug, Deserialize)]
struct MinConcept {
    rxcui: Option<String>,
    name: Option<String>,
}

/// Decode a `classMembers` payload into vocabulary entries.
///
/// `class_id` is attribution from the query that produced the payload; it
/// is carried onto every entry. Entry order follows payload order.
pub fn parse_class_members(payload: &str, class_id: &str) -> Result<Vec<VocabularyEntry>> {
    let payload: ClassMembersPayload = serde_json::from_str(payload)
        .map_err(|error| DexError::MalformedVocabulary(error.to_string()))?;
    let group = payload.drug_member_group.ok_or_else(|| {
        DexError::MalformedVocabulary("payload has no drugMemberGroup".to_string())
    })?;
    let mut entries = Vec::with_capacity(group.drug_member.len());
    for (index, member) in group.drug_member.into_iter().enumerate() {
        let concept = member.min_concept.ok_or_else(|| {
            DexError::MalformedVocabulary(format!("drugMember {index} has no minConcept"))
        })?;
        let name = concept.name.filter(|name| !name.trim().is_empty()).ok_or_else(|| {
            DexError::MalformedVocabulary(format!("drugMember {index} has no name"))
        })?;
        let rx_id = concept.rxcui.filter(|id| !id.trim().is_empty()).ok_or_else(|| {
            DexError::MalformedVocabulary(format!("drugMember {index} has no rxcui"))
        })?;
        entries.push(VocabularyEntry {
            name,
            rx_id,
            class_id: class_id.to_string(),
        });
    }
    debug!(class_id, entries = entries.len(), "vocabulary decoded");
    Ok(entries)
}

/// Read and decode a saved `classMembers` payload file.
pub fn read_class_members_file(path: &Path, class_id: &str) -> Result<Vec<VocabularyEntry>> {
    let payload = std::fs::read_to_string(path)?;
    parse_class_members(&payload, class_id)
}

#[cfg(test)]
mod tests {
    use super::parse_class_members;
    use dex_model::DexError;

    const PAYLOAD: &str = r#"{
        "drugMemberGroup": {
            "drugMember": [
                {"minConcept": {"rxcui": "2670", "name": "Codeine", "tty": "IN"}},
                {"minConcept": {"rxcui": "161", "name": "Tylenol/Acetaminophen", "tty": "IN"}}
            ]
        }
    }"#;

    #[test]
    fn decodes_entries_in_payload_order() {
        let entries = parse_class_members(PAYLOAD, "N02A").expect("decode");
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].name, "Codeine");
        assert_eq!(entries[0].rx_id, "2670");
        assert_eq!(entries[0].class_id, "N02A");
        assert_eq!(entries[1].name, "Tylenol/Acetaminophen");
    }

    #[test]
    fn missing_group_is_malformed() {
        let error = parse_class_members("{}", "N02A").expect_err("must fail");
        assert!(matches!(error, DexError::MalformedVocabulary(_)));
    }

    #[test]
    fn missing_name_is_malformed() {
        let payload = r#"{"drugMemberGroup": {"drugMember": [
            {"minConcept": {"rxcui": "2670"}}
        ]}}"#;
        let error = parse_class_members(payload, "N02A").expect_err("must fail");
        match error {
            DexError::MalformedVocabulary(message) => assert!(message.contains("no name")),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn missing_rxcui_is_malformed() {
        let payload = r#"{"drugMemberGroup": {"drugMember": [
            {"minConcept": {"name": "Codeine", "rxcui": "  "}}
        ]}}"#;
        let error = parse_class_members(payload, "N02A").expect_err("must fail");
        assert!(matches!(error, DexError::MalformedVocabulary(_)));
    }

    #[test]
    fn invalid_json_is_malformed_not_a_panic() {
        let error = parse_class_members("not json", "N02A").expect_err("must fail");
        assert!(matches!(error, DexError::MalformedVocabulary(_)));
    }
}
