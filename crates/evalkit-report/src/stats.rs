//! Comment analytics: value counts and word frequencies.

use std::collections::BTreeMap;

use comfy_table::{CellAlignment, Table as DisplayTable};

use evalkit_model::Table;

use crate::preview::{apply_table_style, header_cell};

/// Count non-empty values of a column, most frequent first.
///
/// Ties break alphabetically so the output is stable.
pub fn value_counts(table: &Table, column: &str) -> Vec<(String, usize)> {
    let Some(idx) = table.column_index(column) else {
        return Vec::new();
    };
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for row in &table.rows {
        let value = row[idx].as_str();
        if value.is_empty() {
            continue;
        }
        *counts.entry(value).or_default() += 1;
    }
    sorted_counts(counts)
}

/// The `limit` most frequent words of a text column.
///
/// Tokens are lowercased and stripped of leading/trailing punctuation;
/// what remains empty is skipped.
pub fn top_words(table: &Table, column: &str, limit: usize) -> Vec<(String, usize)> {
    let Some(idx) = table.column_index(column) else {
        return Vec::new();
    };
    let mut counts: BTreeMap<String, usize> = BTreeMap::new();
    for row in &table.rows {
        for token in row[idx].split_whitespace() {
            let word = token
                .trim_matches(|ch: char| !ch.is_alphanumeric())
                .to_lowercase();
            if word.is_empty() {
                continue;
            }
            *counts.entry(word).or_default() += 1;
        }
    }
    let mut ranked = sorted_counts(counts);
    ranked.truncate(limit);
    ranked
}

fn sorted_counts<K: Into<String> + Ord>(counts: BTreeMap<K, usize>) -> Vec<(String, usize)> {
    let mut ranked: Vec<(String, usize)> = counts
        .into_iter()
        .map(|(value, count)| (value.into(), count))
        .collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    ranked
}

/// Render a ranked count list as a two-column terminal table.
pub fn render_counts(label: &str, counts: &[(String, usize)]) -> DisplayTable {
    let mut display = DisplayTable::new();
    display.set_header(vec![header_cell(label), header_cell("Count")]);
    apply_table_style(&mut display);
    if let Some(column) = display.column_mut(1) {
        column.set_cell_alignment(CellAlignment::Right);
    }
    for (value, count) in counts {
        display.add_row(vec![value.clone(), count.to_string()]);
    }
    display
}
