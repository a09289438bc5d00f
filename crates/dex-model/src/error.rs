use thiserror::Error;

#[derive(Debug, Error)]
pub enum DexError {
    #[error("invalid configuration: {0}")]
    Configuration(String),
    #[error("row {row}: column index {index} out of range (row has {width} fields)")]
    IndexOutOfRange {
        row: usize,
        index: usize,
        width: usize,
    },
    #[error("malformed vocabulary response: {0}")]
    MalformedVocabulary(String),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
}

pub type Result<T> = std::result::Result<T, DexError>;
