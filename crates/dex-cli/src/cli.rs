//! CLI argument definitions for drug-extract.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{InfoLevel, Verbosity};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "drug-extract",
    version,
    about = "Fuzzy search for drug terms in free-text dataset columns",
    long_about = "Run an approximate string-matching pass over a tabular dataset:\n\
                  pick an identifier column and a free-text column, supply plain\n\
                  search words or a fetched drug vocabulary, and get a CSV of every\n\
                  term that appears within the configured edit-distance or\n\
                  similarity tolerance."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<InfoLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Match search terms against a dataset and write a results CSV.
    Run(RunArgs),

    /// Decode a saved vocabulary payload and list its entries.
    Vocabulary(VocabularyArgs),
}

#[derive(Parser)]
pub struct RunArgs {
    /// Input dataset: CSV with a header row.
    #[arg(value_name = "INPUT_CSV")]
    pub input: PathBuf,

    /// Identifier column, by header name or 0-based index.
    #[arg(long = "id-column", value_name = "NAME_OR_INDEX")]
    pub id_column: String,

    /// Free-text target column, by header name or 0-based index.
    #[arg(long = "target-column", value_name = "NAME_OR_INDEX")]
    pub target_column: String,

    /// Search term source.
    #[arg(long = "mode", value_enum, default_value = "simple")]
    pub mode: ModeArg,

    /// Accept matches within this many edits (0 = exact matches only).
    #[arg(long = "max-edits", value_name = "N")]
    pub max_edits: Option<usize>,

    /// Accept matches at or above this similarity, in [0, 1].
    ///
    /// Mutually exclusive with --max-edits; exactly one limiter is required.
    #[arg(long = "min-similarity", value_name = "T")]
    pub min_similarity: Option<f64>,

    /// A search word (repeatable; simple mode).
    #[arg(long = "term", value_name = "WORD")]
    pub terms: Vec<String>,

    /// File of search words, one per line (simple mode).
    #[arg(long = "terms-file", value_name = "PATH")]
    pub terms_file: Option<PathBuf>,

    /// Saved RxClass classMembers payload (drug mode).
    #[arg(long = "vocabulary", value_name = "PAYLOAD_JSON")]
    pub vocabulary: Option<PathBuf>,

    /// Class id the vocabulary payload was fetched for (drug mode).
    #[arg(long = "class-id", value_name = "CLASS_ID")]
    pub class_id: Option<String>,

    /// Where to write the results CSV.
    #[arg(long = "output", value_name = "PATH", default_value = "results.csv")]
    pub output: PathBuf,

    /// Match and report without writing the results file.
    #[arg(long = "dry-run")]
    pub dry_run: bool,
}

#[derive(Parser)]
pub struct VocabularyArgs {
    /// Saved RxClass classMembers payload.
    #[arg(value_name = "PAYLOAD_JSON")]
    pub payload: PathBuf,

    /// Class id the payload was fetched for.
    #[arg(long = "class-id", value_name = "CLASS_ID")]
    pub class_id: String,
}

/// CLI search mode choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum ModeArg {
    Simple,
    Drug,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
