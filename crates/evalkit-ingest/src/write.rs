//! CSV serialization of a table for download or archival.

use std::path::Path;

use tracing::info;

use evalkit_model::Table;

use crate::{IngestError, Result};

/// Write a table as UTF-8 comma-separated text: header row first, values
/// needing escaping quoted per standard CSV rules.
pub fn write_table(path: &Path, table: &Table) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)?;
    write_into(&mut writer, table)?;
    writer.flush()?;
    info!(
        path = %path.display(),
        rows = table.row_count(),
        "wrote table"
    );
    Ok(())
}

/// Serialize a table to an in-memory CSV string.
pub fn table_to_csv_string(table: &Table) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    write_into(&mut writer, table)?;
    let bytes = writer
        .into_inner()
        .map_err(|error| IngestError::Message(error.to_string()))?;
    String::from_utf8(bytes).map_err(|error| IngestError::Message(error.to_string()))
}

fn write_into<W: std::io::Write>(writer: &mut csv::Writer<W>, table: &Table) -> Result<()> {
    writer.write_record(&table.columns)?;
    for row in &table.rows {
        writer.write_record(row)?;
    }
    Ok(())
}
