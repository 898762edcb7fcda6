//! Delimited-text loading into the in-memory table model.

use std::path::Path;

use csv::ReaderBuilder;
use tracing::{debug, warn};

use evalkit_model::Table;

use crate::Result;

/// Field delimiter of the source export.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Delimiter {
    #[default]
    Comma,
    Tab,
}

impl Delimiter {
    fn byte(self) -> u8 {
        match self {
            Self::Comma => b',',
            Self::Tab => b'\t',
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ReadOptions {
    pub delimiter: Delimiter,
}

fn normalize_header(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches('\u{feff}');
    let mut parts = trimmed.split_whitespace();
    let mut normalized = String::new();
    if let Some(first) = parts.next() {
        normalized.push_str(first);
        for part in parts {
            normalized.push(' ');
            normalized.push_str(part);
        }
    }
    normalized
}

fn normalize_cell(raw: &str) -> String {
    raw.trim().trim_matches('\u{feff}').to_string()
}

/// Read a comma-separated file into a [`Table`].
pub fn read_table(path: &Path) -> Result<Table> {
    read_table_with_options(path, ReadOptions::default())
}

/// Read a delimited-text file into a [`Table`].
///
/// The first non-blank row is the header; header names get BOM and
/// whitespace cleanup, cells get trimmed, all-blank rows are skipped, and
/// short records are padded to the header width. A file that is not valid
/// UTF-8 yields an empty table with a warning rather than an error, so
/// callers see "nothing to do" instead of a low-level decode failure.
pub fn read_table_with_options(path: &Path, options: ReadOptions) -> Result<Table> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .delimiter(options.delimiter.byte())
        .from_path(path)?;
    let mut raw_rows: Vec<Vec<String>> = Vec::new();
    for record in reader.records() {
        let record = match record {
            Ok(record) => record,
            Err(error) if matches!(error.kind(), csv::ErrorKind::Utf8 { .. }) => {
                warn!(
                    path = %path.display(),
                    "input is not valid UTF-8, treating as empty"
                );
                return Ok(Table::empty());
            }
            Err(error) => return Err(error.into()),
        };
        let row: Vec<String> = record.iter().map(normalize_cell).collect();
        if row.iter().all(|value| value.is_empty()) {
            continue;
        }
        raw_rows.push(row);
    }
    let mut raw = raw_rows.into_iter();
    let Some(header_row) = raw.next() else {
        return Ok(Table::empty());
    };
    let headers: Vec<String> = header_row
        .iter()
        .map(|value| normalize_header(value))
        .collect();
    let mut table = Table::new(headers);
    for row in raw {
        table.push_row(row);
    }
    debug!(
        path = %path.display(),
        columns = table.columns.len(),
        rows = table.row_count(),
        "read table"
    );
    Ok(table)
}
