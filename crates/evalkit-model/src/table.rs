use std::collections::BTreeSet;

/// In-memory table: ordered columns, rows of verbatim string cells.
///
/// Every row is kept exactly as wide as `columns`; [`Table::push_row`] pads
/// short rows with empty strings and drops excess cells. Column order is
/// preserved through every operation downstream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(columns: Vec<String>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    /// A table with no columns and no rows, the loader's decode-failure value.
    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    /// True when the table holds no data rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|column| column == name)
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.column_index(name).is_some()
    }

    pub fn push_row(&mut self, mut row: Vec<String>) {
        row.resize(self.columns.len(), String::new());
        self.rows.push(row);
    }

    /// Cell by row index and column name; `None` for unknown columns or rows.
    pub fn cell(&self, row: usize, column: &str) -> Option<&str> {
        let idx = self.column_index(column)?;
        self.rows.get(row)?.get(idx).map(String::as_str)
    }
}

/// Column names present in both tables, in `left`'s column order.
///
/// Used to suggest join-key candidates when the caller supplied none.
pub fn common_columns(left: &Table, right: &Table) -> Vec<String> {
    let right_names: BTreeSet<&str> = right.columns.iter().map(String::as_str).collect();
    left.columns
        .iter()
        .filter(|column| right_names.contains(column.as_str()))
        .cloned()
        .collect()
}
