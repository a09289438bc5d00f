//! End-to-end pipeline: ingest -> validate -> match -> serialize.

use dex_core::{MatchEngine, TermSet};
use dex_ingest::{parse_csv, resolve_column};
use dex_model::{RunOptions, SearchMode};
use dex_output::write_records;
use dex_vocab::parse_class_members;

const INPUT: &str = "\
casenumber,primarycause
1001,acute cocaine intoxication
1002,mixed drug toxicity cocane and alcohol
1003,natural causes
";

#[test]
fn simple_mode_end_to_end() {
    let table = parse_csv(INPUT.as_bytes()).expect("parse input");
    let id_column = resolve_column(&table.headers, "casenumber").expect("id column");
    let target_column = resolve_column(&table.headers, "primarycause").expect("target column");

    let options = RunOptions {
        mode: SearchMode::Simple,
        id_column: Some(id_column),
        target_column: Some(target_column),
        max_edits: Some(1),
        min_similarity: None,
    };
    let config = options.validate(table.headers.len()).expect("valid options");
    let terms = TermSet::plain(["cocaine"]);
    let engine = MatchEngine::new(config, &terms);
    let run = engine.run(&table.rows).expect("run");

    let mut buffer = Vec::new();
    write_records(&mut buffer, SearchMode::Simple, &run.records).expect("write");
    let text = String::from_utf8(buffer).expect("utf8");
    assert_eq!(
        text,
        "record_id,edits,similarity,matched_term,search_term\n\
         1001,0,1.0000,COCAINE,COCAINE\n\
         1002,1,0.8571,COCANE,COCAINE\n"
    );
}

#[test]
fn drug_mode_end_to_end() {
    let payload = r#"{"drugMemberGroup": {"drugMember": [
        {"minConcept": {"rxcui": "161", "name": "Tylenol/Acetaminophen", "tty": "IN"}}
    ]}}"#;
    let entries = parse_class_members(payload, "N02BE").expect("decode payload");
    let terms = TermSet::vocabulary(&entries);

    let input = "id,notes\n7,chronic acetaminophen use\n";
    let table = parse_csv(input.as_bytes()).expect("parse input");
    let options = RunOptions {
        mode: SearchMode::Drug,
        id_column: Some(0),
        target_column: Some(1),
        max_edits: Some(0),
        min_similarity: None,
    };
    let config = options.validate(table.headers.len()).expect("valid options");
    let engine = MatchEngine::new(config, &terms);
    let run = engine.run(&table.rows).expect("run");

    let mut buffer = Vec::new();
    write_records(&mut buffer, SearchMode::Drug, &run.records).expect("write");
    let text = String::from_utf8(buffer).expect("utf8");
    assert_eq!(
        text,
        "record_id,edits,similarity,matched_term,drug_name,rx_id,class_id\n\
         7,0,1.0000,ACETAMINOPHEN,ACETAMINOPHEN,161,N02BE\n"
    );
}

#[test]
fn validation_fails_before_any_row_is_matched() {
    let table = parse_csv(INPUT.as_bytes()).expect("parse input");
    let options = RunOptions {
        mode: SearchMode::Simple,
        id_column: Some(0),
        target_column: Some(1),
        max_edits: Some(1),
        min_similarity: Some(0.9),
    };
    assert!(options.validate(table.headers.len()).is_err());
}
