//! Left-outer table join on a configurable key set.

use std::collections::BTreeMap;

use tracing::debug;

use evalkit_model::{MergeError, MissingColumn, Result, Table};

/// Joined table plus the match bookkeeping the caller reports on.
#[derive(Debug)]
pub struct JoinOutput {
    pub table: Table,
    /// Left rows with at least one key match on the right.
    pub matched_left_rows: usize,
}

/// Check that every key column exists in both tables.
///
/// Returns all violations at once, never just the first; an empty vector
/// means the join may proceed.
pub fn validate_keys(
    left: &Table,
    right: &Table,
    keys: &[String],
    left_name: &str,
    right_name: &str,
) -> Vec<MissingColumn> {
    let mut missing = Vec::new();
    for key in keys {
        if !left.has_column(key) {
            missing.push(MissingColumn {
                table: left_name.to_string(),
                column: key.clone(),
            });
        }
        if !right.has_column(key) {
            missing.push(MissingColumn {
                table: right_name.to_string(),
                column: key.clone(),
            });
        }
    }
    missing
}

/// Left-outer join: every left row appears at least once.
///
/// Unmatched left rows get empty strings for the right-only columns. When k
/// right rows share a left row's key tuple, all k combinations are emitted;
/// duplicate keys multiply the row count. That is standard relational
/// behavior and the tests pin it.
///
/// Output columns are the left columns followed by the right-only columns
/// (right columns absent from the left schema) in the right table's order.
/// Key equality is case-sensitive string comparison.
pub fn join(left: &Table, right: &Table, keys: &[String]) -> Result<Table> {
    join_with_stats(left, right, keys).map(|output| output.table)
}

/// [`join`] with the match counts preserved.
pub fn join_with_stats(left: &Table, right: &Table, keys: &[String]) -> Result<JoinOutput> {
    let missing = validate_keys(left, right, keys, "left table", "right table");
    if !missing.is_empty() {
        return Err(MergeError::MissingColumns(missing));
    }

    let left_key_idx: Vec<usize> = keys
        .iter()
        .filter_map(|key| left.column_index(key))
        .collect();
    let right_key_idx: Vec<usize> = keys
        .iter()
        .filter_map(|key| right.column_index(key))
        .collect();
    let payload_idx: Vec<usize> = right
        .columns
        .iter()
        .enumerate()
        .filter(|(_, name)| !left.has_column(name))
        .map(|(idx, _)| idx)
        .collect();

    let mut index: BTreeMap<Vec<&str>, Vec<usize>> = BTreeMap::new();
    for (row_idx, row) in right.rows.iter().enumerate() {
        let key: Vec<&str> = right_key_idx.iter().map(|&idx| row[idx].as_str()).collect();
        index.entry(key).or_default().push(row_idx);
    }

    let mut columns = left.columns.clone();
    columns.extend(payload_idx.iter().map(|&idx| right.columns[idx].clone()));
    let mut table = Table::new(columns);
    let mut matched_left_rows = 0usize;
    for row in &left.rows {
        let key: Vec<&str> = left_key_idx.iter().map(|&idx| row[idx].as_str()).collect();
        match index.get(&key) {
            Some(matches) => {
                matched_left_rows += 1;
                for &right_row in matches {
                    let mut out_row = row.clone();
                    out_row.extend(
                        payload_idx
                            .iter()
                            .map(|&idx| right.rows[right_row][idx].clone()),
                    );
                    table.push_row(out_row);
                }
            }
            None => {
                let mut out_row = row.clone();
                out_row.extend(payload_idx.iter().map(|_| String::new()));
                table.push_row(out_row);
            }
        }
    }

    debug!(
        left_rows = left.row_count(),
        right_rows = right.row_count(),
        matched_left_rows,
        output_rows = table.row_count(),
        "joined tables"
    );
    Ok(JoinOutput {
        table,
        matched_left_rows,
    })
}
