use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result, bail};
use comfy_table::Table;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{info, info_span};

use dex_core::{MatchEngine, MatchRun, TermSet};
use dex_ingest::{read_csv_table, read_term_list, resolve_column};
use dex_model::{RunOptions, SearchMode};
use dex_output::write_records_file;
use dex_vocab::read_class_members_file;

use crate::cli::{ModeArg, RunArgs, VocabularyArgs};
use crate::summary::apply_table_style;

/// Everything the summary needs about a completed run.
pub struct RunReport {
    pub input: PathBuf,
    pub output: Option<PathBuf>,
    pub rows: usize,
    pub terms: usize,
    pub comparisons: u64,
    pub matches: usize,
}

pub fn run_extract(args: &RunArgs) -> Result<RunReport> {
    let mode = search_mode(args.mode);
    let span = info_span!("run", input = %args.input.display(), mode = ?mode);
    let _guard = span.enter();

    let table = read_csv_table(&args.input)?;
    if table.headers.is_empty() {
        bail!("{}: no header row", args.input.display());
    }
    let id_column = resolve_column(&table.headers, &args.id_column)
        .context("resolve identifier column")?;
    let target_column = resolve_column(&table.headers, &args.target_column)
        .context("resolve target column")?;

    let options = RunOptions {
        mode,
        id_column: Some(id_column),
        target_column: Some(target_column),
        max_edits: args.max_edits,
        min_similarity: args.min_similarity,
    };
    let config = options.validate(table.headers.len())?;
    let terms = load_terms(args, mode)?;
    if terms.is_empty() {
        bail!("no search terms to match");
    }
    info!(
        rows = table.rows.len(),
        terms = terms.len(),
        "starting matching pass"
    );

    let engine = MatchEngine::new(config, &terms);
    let start = Instant::now();
    let bar = progress_bar(table.rows.len() as u64);
    let mut run = MatchRun {
        rows: table.rows.len(),
        ..MatchRun::default()
    };
    for (index, row) in table.rows.iter().enumerate() {
        let matched = engine.match_row(index, row)?;
        run.comparisons += matched.comparisons;
        run.records.extend(matched.records);
        bar.inc(1);
    }
    bar.finish_and_clear();
    info!(
        matches = run.records.len(),
        comparisons = run.comparisons,
        duration_ms = start.elapsed().as_millis(),
        "matching pass complete"
    );

    let output = if args.dry_run {
        None
    } else {
        write_records_file(&args.output, mode, &run.records)?;
        Some(args.output.clone())
    };
    Ok(RunReport {
        input: args.input.clone(),
        output,
        rows: run.rows,
        terms: terms.len(),
        comparisons: run.comparisons,
        matches: run.records.len(),
    })
}

pub fn run_vocabulary(args: &VocabularyArgs) -> Result<()> {
    let entries = read_class_members_file(&args.payload, &args.class_id)?;
    let mut table = Table::new();
    table.set_header(vec!["Name", "RxCUI", "Class", "Synonyms"]);
    apply_table_style(&mut table);
    for entry in &entries {
        let synonyms = entry.name.split('/').filter(|s| !s.trim().is_empty()).count();
        table.add_row(vec![
            entry.name.clone(),
            entry.rx_id.clone(),
            entry.class_id.clone(),
            synonyms.to_string(),
        ]);
    }
    println!("{table}");
    println!("{} entries", entries.len());
    Ok(())
}

fn search_mode(mode: ModeArg) -> SearchMode {
    match mode {
        ModeArg::Simple => SearchMode::Simple,
        ModeArg::Drug => SearchMode::Drug,
    }
}

fn load_terms(args: &RunArgs, mode: SearchMode) -> Result<TermSet> {
    match mode {
        SearchMode::Simple => {
            if args.vocabulary.is_some() || args.class_id.is_some() {
                bail!("--vocabulary/--class-id belong to drug mode");
            }
            let mut words = args.terms.clone();
            if let Some(path) = &args.terms_file {
                words.extend(read_term_list(path)?);
            }
            if words.is_empty() {
                bail!("simple mode needs --term or --terms-file");
            }
            Ok(TermSet::plain(words))
        }
        SearchMode::Drug => {
            if !args.terms.is_empty() || args.terms_file.is_some() {
                bail!("--term/--terms-file belong to simple mode");
            }
            let payload = args
                .vocabulary
                .as_ref()
                .context("drug mode needs --vocabulary")?;
            let class_id = args.class_id.as_ref().context("drug mode needs --class-id")?;
            let entries = read_class_members_file(payload, class_id)?;
            if entries.is_empty() {
                bail!("vocabulary payload has no entries");
            }
            Ok(TermSet::vocabulary(&entries))
        }
    }
}

fn progress_bar(len: u64) -> ProgressBar {
    let style = ProgressStyle::with_template(
        "{msg} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos:>7}/{len:7} ({eta})",
    )
    .unwrap_or_else(|_| ProgressStyle::default_bar())
    .progress_chars("##-");
    ProgressBar::new(len)
        .with_style(style)
        .with_message("Matching rows")
}
