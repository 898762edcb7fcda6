//! Tests for key validation and the left-outer join.

use evalkit_model::{MergeError, Table};
use evalkit_transform::{join, join_with_stats, validate_keys};

fn table(columns: &[&str], rows: &[&[&str]]) -> Table {
    let mut table = Table::new(columns.iter().map(|name| (*name).to_string()).collect());
    for row in rows {
        table.push_row(row.iter().map(|cell| (*cell).to_string()).collect());
    }
    table
}

fn keys(names: &[&str]) -> Vec<String> {
    names.iter().map(|name| (*name).to_string()).collect()
}

#[test]
fn validate_keys_reports_every_violation() {
    // Left lacks Course_Name, right lacks Question; both must be reported.
    let left = table(&["Term", "Question"], &[]);
    let right = table(&["Term", "Course_Name"], &[]);
    let missing = validate_keys(
        &left,
        &right,
        &keys(&["Course_Name", "Question"]),
        "student comments",
        "instructor report",
    );
    assert_eq!(missing.len(), 2);
    assert_eq!(missing[0].column, "Course_Name");
    assert_eq!(missing[0].table, "student comments");
    assert_eq!(missing[1].column, "Question");
    assert_eq!(missing[1].table, "instructor report");
}

#[test]
fn join_aborts_on_missing_keys_before_any_row_work() {
    let left = table(&["Term"], &[&["2025_01_SU1"]]);
    let right = table(&["Course_Code"], &[&["ACC210"]]);
    let error = join(&left, &right, &keys(&["Term", "Course_Code"])).unwrap_err();
    match error {
        MergeError::MissingColumns(missing) => assert_eq!(missing.len(), 2),
        other => panic!("expected MissingColumns, got {other:?}"),
    }
}

#[test]
fn duplicate_right_keys_multiply_rows() {
    // One left row, two right rows under the same key tuple: two output
    // rows, each with a different right-side payload.
    let left = table(
        &["Term", "Course_Code", "Response"],
        &[&["2025_01_SU1", "ACC210", "Loved it"]],
    );
    let right = table(
        &["Term", "Course_Code", "Inst_LName"],
        &[
            &["2025_01_SU1", "ACC210", "Ngo"],
            &["2025_01_SU1", "ACC210", "Okafor"],
        ],
    );
    let joined = join(&left, &right, &keys(&["Term", "Course_Code"])).expect("join");
    assert_eq!(joined.row_count(), 2);
    assert_eq!(joined.cell(0, "Inst_LName"), Some("Ngo"));
    assert_eq!(joined.cell(1, "Inst_LName"), Some("Okafor"));
    assert_eq!(joined.cell(0, "Response"), Some("Loved it"));
    assert_eq!(joined.cell(1, "Response"), Some("Loved it"));
}

#[test]
fn unmatched_left_rows_survive_with_empty_payload() {
    let left = table(
        &["Term", "Response"],
        &[
            &["2025_01_SU1", "Good"],
            &["2025_02_FA3", "No instructor on file"],
        ],
    );
    let right = table(
        &["Term", "Inst_FName", "Inst_LName"],
        &[&["2025_01_SU1", "May", "Ngo"]],
    );
    let output = join_with_stats(&left, &right, &keys(&["Term"])).expect("join");
    assert_eq!(output.matched_left_rows, 1);
    assert_eq!(output.table.row_count(), 2);
    assert_eq!(output.table.cell(0, "Inst_FName"), Some("May"));
    assert_eq!(output.table.cell(1, "Inst_FName"), Some(""));
    assert_eq!(output.table.cell(1, "Inst_LName"), Some(""));
    assert_eq!(output.table.cell(1, "Response"), Some("No instructor on file"));
}

#[test]
fn join_cardinality_counts_matches_per_left_row() {
    // n = 3 left rows, m = 2 matched; key A matches 2 right rows, key B
    // matches 1, key C none: output = n - m + sum(k) = 3 - 2 + 3 = 4.
    let left = table(
        &["Term", "Response"],
        &[&["A", "r1"], &["B", "r2"], &["C", "r3"]],
    );
    let right = table(
        &["Term", "Question"],
        &[&["A", "q1"], &["A", "q2"], &["B", "q3"]],
    );
    let joined = join(&left, &right, &keys(&["Term"])).expect("join");
    assert_eq!(joined.row_count(), 4);
}

#[test]
fn output_columns_are_left_then_right_only() {
    let left = table(&["Term", "Course_Code", "Response"], &[]);
    let right = table(&["Inst_LName", "Term", "Course_Code", "Question"], &[]);
    let joined = join(&left, &right, &keys(&["Term", "Course_Code"])).expect("join");
    assert_eq!(
        joined.columns,
        vec!["Term", "Course_Code", "Response", "Inst_LName", "Question"]
    );
}

#[test]
fn key_comparison_is_case_sensitive() {
    let left = table(&["Course_Code"], &[&["ACC210"]]);
    let right = table(&["Course_Code", "Inst_LName"], &[&["acc210", "Ngo"]]);
    let joined = join(&left, &right, &keys(&["Course_Code"])).expect("join");
    assert_eq!(joined.row_count(), 1);
    assert_eq!(joined.cell(0, "Inst_LName"), Some(""));
}

#[test]
fn empty_left_table_joins_to_empty_output() {
    let left = table(&["Term"], &[]);
    let right = table(&["Term", "Question"], &[&["A", "q1"]]);
    let joined = join(&left, &right, &keys(&["Term"])).expect("join");
    assert!(joined.is_empty());
    assert_eq!(joined.columns, vec!["Term", "Question"]);
}
