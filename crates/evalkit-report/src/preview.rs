//! On-screen preview of a data table.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, Color, ContentArrangement, Table as DisplayTable};

use evalkit_model::Table;

/// Render the first `limit` rows as a styled terminal table.
pub fn render_preview(table: &Table, limit: usize) -> DisplayTable {
    let mut display = DisplayTable::new();
    display.set_header(
        table
            .columns
            .iter()
            .map(|name| header_cell(name))
            .collect::<Vec<_>>(),
    );
    apply_table_style(&mut display);
    for row in table.rows.iter().take(limit) {
        display.add_row(row.clone());
    }
    display
}

pub fn apply_table_style(table: &mut DisplayTable) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

pub fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}
