//! Row source collaborators: CSV table reading and plain term lists.

pub mod csv_table;
pub mod terms_file;

pub use csv_table::{CsvTable, parse_csv, read_csv_table, resolve_column};
pub use terms_file::{parse_term_list, read_term_list};
