use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result, bail};
use csv::ReaderBuilder;
use tracing::debug;

/// A parsed tabular input: one header row plus data rows.
///
/// Rows keep the width they were parsed with; width validation against the
/// configured column indices happens downstream.
#[derive(Debug, Clone, Default)]
pub struct CsvTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

fn normalize_cell(raw: &str) -> String {
    raw.trim().trim_matches('\u{feff}').to_string()
}

/// Parse delimited text. The first record is the header; fully blank rows
/// are dropped.
pub fn parse_csv<R: Read>(reader: R) -> Result<CsvTable> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);
    let mut headers: Option<Vec<String>> = None;
    let mut rows: Vec<Vec<String>> = Vec::new();
    for record in reader.records() {
        let record = record.context("read csv record")?;
        let row: Vec<String> = record.iter().map(normalize_cell).collect();
        if row.iter().all(|value| value.is_empty()) {
            continue;
        }
        if headers.is_none() {
            headers = Some(row);
        } else {
            rows.push(row);
        }
    }
    let table = CsvTable {
        headers: headers.unwrap_or_default(),
        rows,
    };
    debug!(
        columns = table.headers.len(),
        rows = table.rows.len(),
        "csv table parsed"
    );
    Ok(table)
}

/// Read a CSV file into a table.
pub fn read_csv_table(path: &Path) -> Result<CsvTable> {
    let file = std::fs::File::open(path).with_context(|| format!("open {}", path.display()))?;
    parse_csv(file).with_context(|| format!("read csv: {}", path.display()))
}

/// Resolve a column selector against the header.
///
/// The selector is either a 0-based index or a case-insensitive header
/// name; names win so that numeric headers stay addressable.
pub fn resolve_column(headers: &[String], selector: &str) -> Result<usize> {
    let wanted = selector.trim();
    if let Some(index) = headers
        .iter()
        .position(|header| header.eq_ignore_ascii_case(wanted))
    {
        return Ok(index);
    }
    if let Ok(index) = wanted.parse::<usize>() {
        if index < headers.len() {
            return Ok(index);
        }
        bail!(
            "column index {index} out of range (header has {} columns)",
            headers.len()
        );
    }
    bail!("no column named {wanted:?} (headers: {})", headers.join(", "))
}
