//! Derived term-key column: free text in, compact keys out.

use tracing::debug;

use evalkit_model::{MergeError, MissingColumn, Result, Table, TermDerivation};
use evalkit_term::{DecodedTerm, decode, encode, infer_section};

/// Cap on undecodable examples carried in the stats.
const UNPARSED_SAMPLE_LIMIT: usize = 5;

/// Outcome counts for one derivation pass.
///
/// Unparsed rows are not errors: the original text passes through into the
/// target column and the caller surfaces the count as a warning.
#[derive(Debug, Clone, Default)]
pub struct TermDerivationStats {
    pub derived_rows: usize,
    pub unparsed_rows: usize,
    pub unparsed_samples: Vec<String>,
}

/// Write the compact term key for every row into the derivation target.
///
/// Each source cell is decoded, the section number inferred from the
/// auxiliary id column under the configured policy, and the key encoded.
/// Cells that do not decode keep their original text. The target column is
/// overwritten when present, appended otherwise.
///
/// Missing source columns are configuration errors and abort the pass with
/// the full aggregate list.
pub fn derive_term_column(
    table: &Table,
    derivation: &TermDerivation,
    table_name: &str,
) -> Result<(Table, TermDerivationStats)> {
    let source_idx = table.column_index(&derivation.source);
    let section_idx = table.column_index(&derivation.section_source);
    let (Some(source_idx), Some(section_idx)) = (source_idx, section_idx) else {
        let mut missing = Vec::new();
        if source_idx.is_none() {
            missing.push(MissingColumn {
                table: table_name.to_string(),
                column: derivation.source.clone(),
            });
        }
        if section_idx.is_none() {
            missing.push(MissingColumn {
                table: table_name.to_string(),
                column: derivation.section_source.clone(),
            });
        }
        return Err(MergeError::MissingColumns(missing));
    };

    let mut out = table.clone();
    let target_idx = match out.column_index(&derivation.target) {
        Some(idx) => idx,
        None => {
            out.columns.push(derivation.target.clone());
            for row in &mut out.rows {
                row.push(String::new());
            }
            out.columns.len() - 1
        }
    };

    let mut stats = TermDerivationStats::default();
    for row in &mut out.rows {
        let value = match decode(&row[source_idx]) {
            DecodedTerm::Decoded(descriptor) => {
                let section = infer_section(derivation.policy, &row[section_idx]);
                stats.derived_rows += 1;
                encode(&descriptor, section)
            }
            DecodedTerm::Unparsed(original) => {
                stats.unparsed_rows += 1;
                if stats.unparsed_samples.len() < UNPARSED_SAMPLE_LIMIT
                    && !original.trim().is_empty()
                {
                    stats.unparsed_samples.push(original.clone());
                }
                original
            }
        };
        row[target_idx] = value;
    }

    debug!(
        table = table_name,
        derived_rows = stats.derived_rows,
        unparsed_rows = stats.unparsed_rows,
        "derived term column"
    );
    Ok((out, stats))
}
