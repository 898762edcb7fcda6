use comfy_table::{Cell, CellAlignment, Table};

use evalkit_cli::pipeline::{AppendOutcome, MergeOutcome};
use evalkit_report::{apply_table_style, header_cell};

pub fn print_merge_summary(outcome: &MergeOutcome) {
    if outcome.comments_rows == 0 {
        println!("Student comments table is empty; nothing to do.");
        return;
    }
    if let Some(path) = &outcome.output_path {
        println!("Output: {}", path.display());
    }
    let mut table = Table::new();
    table.set_header(vec![header_cell("Stage"), header_cell("Rows")]);
    apply_table_style(&mut table);
    align_right(&mut table, 1);
    table.add_row(count_row("Student comments", outcome.comments_rows));
    table.add_row(count_row("Instructor report", outcome.report_rows));
    table.add_row(count_row("Merged", outcome.output_rows));
    table.add_row(count_row("Matched", outcome.matched_rows));
    table.add_row(count_row("Unmatched", outcome.unmatched_rows));
    println!("{table}");
    if outcome.unparsed_terms > 0 {
        let samples = outcome.unparsed_samples.join(", ");
        if samples.is_empty() {
            eprintln!(
                "warning: {} term value(s) could not be decoded",
                outcome.unparsed_terms
            );
        } else {
            eprintln!(
                "warning: {} term value(s) could not be decoded (e.g. {samples})",
                outcome.unparsed_terms
            );
        }
    }
}

pub fn print_append_summary(outcome: &AppendOutcome) {
    if let Some(path) = &outcome.output_path {
        println!("Output: {}", path.display());
    }
    let mut table = Table::new();
    table.set_header(vec![header_cell("Stage"), header_cell("Rows")]);
    apply_table_style(&mut table);
    align_right(&mut table, 1);
    table.add_row(count_row("Base", outcome.base_rows));
    table.add_row(count_row("Additions", outcome.addition_rows));
    table.add_row(count_row("Combined", outcome.output_rows));
    println!("{table}");
}

fn count_row(label: &str, count: usize) -> Vec<Cell> {
    vec![Cell::new(label), Cell::new(count)]
}

fn align_right(table: &mut Table, index: usize) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(CellAlignment::Right);
    }
}
