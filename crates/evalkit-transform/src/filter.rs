//! Keyword row filtering for comment searches.

use evalkit_model::Table;

/// Keep rows whose `column` cell contains `keyword`, case-insensitively.
///
/// An empty keyword or a missing column leaves the table unchanged, so the
/// filter can sit unconditionally in a pipeline.
pub fn filter_contains(table: &Table, column: &str, keyword: &str) -> Table {
    if keyword.is_empty() {
        return table.clone();
    }
    let Some(idx) = table.column_index(column) else {
        return table.clone();
    };
    let needle = keyword.to_lowercase();
    let rows = table
        .rows
        .iter()
        .filter(|row| row[idx].to_lowercase().contains(&needle))
        .cloned()
        .collect();
    Table {
        columns: table.columns.clone(),
        rows,
    }
}
