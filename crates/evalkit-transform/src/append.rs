//! Row-wise table concatenation.

use evalkit_model::Table;

/// Append `additions` below `base`, reindexed to `base`'s column set.
///
/// Addition columns absent from `base` are dropped; `base` columns absent
/// from `additions` are filled with empty strings. Output order is `base`'s
/// rows first, then `additions`' rows, both in their original order. No
/// deduplication.
pub fn append(base: &Table, additions: &Table) -> Table {
    let mut out = base.clone();
    let indices: Vec<Option<usize>> = base
        .columns
        .iter()
        .map(|column| additions.column_index(column))
        .collect();
    for row in &additions.rows {
        let reindexed: Vec<String> = indices
            .iter()
            .map(|idx| idx.map_or_else(String::new, |i| row[i].clone()))
            .collect();
        out.push_row(reindexed);
    }
    out
}
