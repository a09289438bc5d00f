use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use anyhow::{Context, Result};

/// Parse a plain term list: one search word or phrase per line.
///
/// Blank lines and `#` comment lines are skipped. No normalization happens
/// here; the term set uppercases and trims when it is built.
pub fn parse_term_list<R: Read>(reader: R) -> Result<Vec<String>> {
    let mut terms = Vec::new();
    for (number, line) in BufReader::new(reader).lines().enumerate() {
        let line = line.with_context(|| format!("read term list line {}", number + 1))?;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        terms.push(trimmed.to_string());
    }
    Ok(terms)
}

/// Read a term list file.
pub fn read_term_list(path: &Path) -> Result<Vec<String>> {
    let file = std::fs::File::open(path).with_context(|| format!("open {}", path.display()))?;
    parse_term_list(file).with_context(|| format!("read term list: {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::parse_term_list;

    #[test]
    fn skips_blanks_and_comments() {
        let input = "# drugs of interest\ncocaine\n\n  heroin  \nfentanyl patch\n";
        let terms = parse_term_list(input.as_bytes()).expect("parse");
        assert_eq!(terms, vec!["cocaine", "heroin", "fentanyl patch"]);
    }

    #[test]
    fn empty_file_yields_no_terms() {
        assert!(parse_term_list("".as_bytes()).expect("parse").is_empty());
    }
}
