//! Merge and append pipeline stages shared by the CLI commands and tests.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::{info, warn};

use evalkit_model::{MergeConfig, MergeError, Table, common_columns};
use evalkit_transform::{
    append, derive_term_column, join_with_stats, normalize_course_codes, rename_columns,
    validate_keys,
};

/// Label used for the student comments table in validation reports.
pub const COMMENTS_LABEL: &str = "student comments";
/// Label used for the instructor report table in validation reports.
pub const REPORT_LABEL: &str = "instructor report";

/// Result of one merge run.
#[derive(Debug)]
pub struct MergeOutcome {
    pub report_rows: usize,
    pub comments_rows: usize,
    pub output_rows: usize,
    /// Comment rows with at least one instructor-report match.
    pub matched_rows: usize,
    pub unmatched_rows: usize,
    /// Term cells that did not decode and passed through verbatim.
    pub unparsed_terms: usize,
    pub unparsed_samples: Vec<String>,
    pub output_path: Option<PathBuf>,
    pub table: Table,
}

/// Result of one append run.
#[derive(Debug)]
pub struct AppendOutcome {
    pub base_rows: usize,
    pub addition_rows: usize,
    pub output_rows: usize,
    pub output_path: Option<PathBuf>,
    pub table: Table,
}

/// Load a [`MergeConfig`] from a JSON file.
pub fn load_merge_config(path: &Path) -> Result<MergeConfig> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("read config: {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("parse config: {}", path.display()))
}

/// Run the merge pipeline over already-loaded tables.
///
/// Stages: rename both tables to the canonical schema, derive the term-key
/// columns where configured, normalize course codes, validate the join
/// keys (aggregate report), then left-join the comments against the report.
///
/// Undecodable term text degrades to passthrough and is only counted;
/// missing key columns abort with [`MergeError::MissingColumns`] before any
/// join work.
pub fn merge_tables(
    report: &Table,
    comments: &Table,
    config: &MergeConfig,
) -> Result<MergeOutcome, MergeError> {
    let report_rows = report.row_count();
    let comments_rows = comments.row_count();

    let mut report = rename_columns(report, &config.report_renames);
    let mut comments = rename_columns(comments, &config.comments_renames);

    let mut unparsed_terms = 0usize;
    let mut unparsed_samples = Vec::new();
    if let Some(derivation) = &config.report_term {
        let (derived, stats) = derive_term_column(&report, derivation, REPORT_LABEL)?;
        report = derived;
        unparsed_terms += stats.unparsed_rows;
        unparsed_samples.extend(stats.unparsed_samples);
    }
    if let Some(derivation) = &config.comments_term {
        let (derived, stats) = derive_term_column(&comments, derivation, COMMENTS_LABEL)?;
        comments = derived;
        unparsed_terms += stats.unparsed_rows;
        unparsed_samples.extend(stats.unparsed_samples);
    }
    if unparsed_terms > 0 {
        warn!(unparsed_terms, "some term values could not be decoded");
    }

    if let Some(column) = &config.course_code_column {
        report = normalize_course_codes(&report, column);
        comments = normalize_course_codes(&comments, column);
    }

    if config.join_keys.is_empty() {
        let shared = common_columns(&comments, &report);
        let message = if shared.is_empty() {
            "no join keys configured and the tables share no columns".to_string()
        } else {
            format!(
                "no join keys configured; shared columns: {}",
                shared.join(", ")
            )
        };
        return Err(MergeError::Message(message));
    }

    let missing = validate_keys(
        &comments,
        &report,
        &config.join_keys,
        COMMENTS_LABEL,
        REPORT_LABEL,
    );
    if !missing.is_empty() {
        return Err(MergeError::MissingColumns(missing));
    }

    let output = join_with_stats(&comments, &report, &config.join_keys)?;
    let matched_rows = output.matched_left_rows;
    let unmatched_rows = comments_rows - matched_rows;
    info!(
        comments_rows,
        report_rows,
        output_rows = output.table.row_count(),
        matched_rows,
        unmatched_rows,
        "merged tables"
    );
    Ok(MergeOutcome {
        report_rows,
        comments_rows,
        output_rows: output.table.row_count(),
        matched_rows,
        unmatched_rows,
        unparsed_terms,
        unparsed_samples,
        output_path: None,
        table: output.table,
    })
}

/// Run the append pipeline over already-loaded tables.
pub fn append_tables(base: &Table, additions: &Table) -> AppendOutcome {
    let table = append(base, additions);
    info!(
        base_rows = base.row_count(),
        addition_rows = additions.row_count(),
        output_rows = table.row_count(),
        "appended tables"
    );
    AppendOutcome {
        base_rows: base.row_count(),
        addition_rows: additions.row_count(),
        output_rows: table.row_count(),
        output_path: None,
        table,
    }
}
