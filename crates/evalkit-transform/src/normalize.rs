//! Column-name and cell-value normalization.

use evalkit_model::{ColumnMap, Table, schema};

/// Rename columns per the declarative map; unmapped columns pass through.
///
/// Idempotent: once a column carries its canonical name, re-applying the
/// same map leaves it alone (no rename chains).
pub fn rename_columns(table: &Table, map: &ColumnMap) -> Table {
    let columns = table
        .columns
        .iter()
        .map(|name| {
            map.target_for(name)
                .map_or_else(|| name.clone(), ToString::to_string)
        })
        .collect();
    Table {
        columns,
        rows: table.rows.clone(),
    }
}

/// Normalize one course code to the fixed-width uppercase prefix.
pub fn normalize_course_code(raw: &str) -> String {
    raw.trim()
        .chars()
        .take(schema::COURSE_CODE_WIDTH)
        .collect::<String>()
        .to_uppercase()
}

/// Normalize every cell of the named column; a missing column is a no-op.
pub fn normalize_course_codes(table: &Table, column: &str) -> Table {
    let Some(idx) = table.column_index(column) else {
        return table.clone();
    };
    let mut out = table.clone();
    for row in &mut out.rows {
        row[idx] = normalize_course_code(&row[idx]);
    }
    out
}
