//! Result sink collaborator: serializes match records to CSV.
//!
//! One header row naming each record field, one row per record, fields in
//! declaration order, record order preserved. Similarity is printed with
//! four decimals so repeated runs produce byte-identical files.

use std::io::Write;
use std::path::Path;

use tracing::info;

use dex_model::{DexError, MatchRecord, Result, SearchMode, TermIdentity};

const SIMPLE_HEADER: [&str; 5] = [
    "record_id",
    "edits",
    "similarity",
    "matched_term",
    "search_term",
];
const DRUG_HEADER: [&str; 7] = [
    "record_id",
    "edits",
    "similarity",
    "matched_term",
    "drug_name",
    "rx_id",
    "class_id",
];

/// Write records as CSV in input order.
///
/// Every record's term identity must agree with `mode`; a mixed or
/// mismatched sequence is a configuration error, reported before any row
/// of it is written.
pub fn write_records<W: Write>(
    writer: W,
    mode: SearchMode,
    records: &[MatchRecord],
) -> Result<()> {
    if let Some(position) = records.iter().position(|record| !matches_mode(record, mode)) {
        return Err(DexError::Configuration(format!(
            "record {position} does not belong to {mode:?} mode output"
        )));
    }
    let mut csv_writer = csv::Writer::from_writer(writer);
    match mode {
        SearchMode::Simple => csv_writer.write_record(SIMPLE_HEADER)?,
        SearchMode::Drug => csv_writer.write_record(DRUG_HEADER)?,
    }
    for record in records {
        let edits = record.edits.to_string();
        let similarity = format!("{:.4}", record.similarity);
        match &record.term {
            TermIdentity::Plain { search_term } => csv_writer.write_record([
                record.record_id.as_str(),
                edits.as_str(),
                similarity.as_str(),
                record.matched_term.as_str(),
                search_term.as_str(),
            ])?,
            TermIdentity::Vocabulary {
                drug_name,
                rx_id,
                class_id,
            } => csv_writer.write_record([
                record.record_id.as_str(),
                edits.as_str(),
                similarity.as_str(),
                record.matched_term.as_str(),
                drug_name.as_str(),
                rx_id.as_str(),
                class_id.as_str(),
            ])?,
        }
    }
    csv_writer.flush()?;
    Ok(())
}

/// Write records to a `.csv` file.
pub fn write_records_file(path: &Path, mode: SearchMode, records: &[MatchRecord]) -> Result<()> {
    let file = std::fs::File::create(path)?;
    write_records(file, mode, records)?;
    info!(path = %path.display(), records = records.len(), "results written");
    Ok(())
}

fn matches_mode(record: &MatchRecord, mode: SearchMode) -> bool {
    match (&record.term, mode) {
        (TermIdentity::Plain { .. }, SearchMode::Simple) => true,
        (TermIdentity::Vocabulary { .. }, SearchMode::Drug) => true,
        _ => false,
    }
}
