//! CLI library components for drug-extract.

pub mod logging;
