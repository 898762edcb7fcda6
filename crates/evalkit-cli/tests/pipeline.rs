//! Integration tests for the merge pipeline.

use std::fs;

use tempfile::tempdir;

use evalkit_cli::pipeline::{load_merge_config, merge_tables};
use evalkit_model::{ColumnMap, MergeConfig, MergeError, SectionPolicy, Table, TermDerivation};

fn table(columns: &[&str], rows: &[&[&str]]) -> Table {
    let mut table = Table::new(columns.iter().map(|name| (*name).to_string()).collect());
    for row in rows {
        table.push_row(row.iter().map(|cell| (*cell).to_string()).collect());
    }
    table
}

fn config() -> MergeConfig {
    MergeConfig {
        report_renames: ColumnMap::from_pairs([
            ("Course Code", "Course_Code"),
            ("Last Name", "Inst_LName"),
        ]),
        comments_renames: ColumnMap::from_pairs([("Course_Co", "Course_Code")]),
        join_keys: vec!["Term".to_string(), "Course_Code".to_string()],
        report_term: Some(TermDerivation {
            source: "Project".to_string(),
            section_source: "Class_Nbr".to_string(),
            policy: SectionPolicy::LastDigit,
            target: "Term".to_string(),
        }),
        comments_term: None,
        course_code_column: Some("Course_Code".to_string()),
    }
}

#[test]
fn merge_pipeline_end_to_end() {
    let report = table(
        &["Project", "Class_Nbr", "Course Code", "Last Name"],
        &[
            &["2025 Summer Term I", "190", "acc210", "Ngo"],
            &["2025 Summer Term I", "191", "acc210", "Okafor"],
        ],
    );
    let comments = table(
        &["Term", "Course_Co", "Question", "Response"],
        &[
            &["2025_01_SU1", "ACC210", "Q1", "Great lectures"],
            &["2025_02_SU1", "acc210", "Q1", "Harder than expected"],
            &["2025_03_SU1", "ACC210", "Q2", "Never met the instructor"],
        ],
    );

    let outcome = merge_tables(&report, &comments, &config()).expect("merge");
    assert_eq!(outcome.comments_rows, 3);
    assert_eq!(outcome.report_rows, 2);
    assert_eq!(outcome.matched_rows, 2);
    assert_eq!(outcome.unmatched_rows, 1);
    assert_eq!(outcome.output_rows, 3);
    assert_eq!(outcome.unparsed_terms, 0);

    // Section 190 ends in 0 -> section 1; 191 ends in 1 -> section 2.
    assert_eq!(outcome.table.cell(0, "Inst_LName"), Some("Ngo"));
    assert_eq!(outcome.table.cell(1, "Inst_LName"), Some("Okafor"));
    assert_eq!(outcome.table.cell(2, "Inst_LName"), Some(""));
    // Comment-side cells pass through verbatim.
    assert_eq!(outcome.table.cell(0, "Response"), Some("Great lectures"));
    assert_eq!(outcome.table.cell(0, "Course_Code"), Some("ACC210"));
}

#[test]
fn merge_reports_missing_keys_in_aggregate() {
    let report = table(&["Course_Code"], &[&["ACC210"]]);
    let comments = table(&["Question"], &[&["Q1"]]);
    let mut config = config();
    config.report_term = None;
    config.course_code_column = None;

    let error = merge_tables(&report, &comments, &config).unwrap_err();
    match error {
        MergeError::MissingColumns(missing) => {
            // Term missing on both sides, Course_Code missing from comments.
            assert_eq!(missing.len(), 3);
            assert!(missing.iter().any(|m| {
                m.column == "Term" && m.table == "student comments"
            }));
            assert!(missing.iter().any(|m| {
                m.column == "Term" && m.table == "instructor report"
            }));
            assert!(missing.iter().any(|m| {
                m.column == "Course_Code" && m.table == "student comments"
            }));
        }
        other => panic!("expected MissingColumns, got {other:?}"),
    }
}

#[test]
fn undecodable_terms_are_counted_not_fatal() {
    let report = table(
        &["Project", "Class_Nbr", "Course Code", "Last Name"],
        &[&["Independent Study", "190", "ind499", "Ngo"]],
    );
    let comments = table(
        &["Term", "Course_Co", "Question", "Response"],
        &[&["Independent Study", "IND499", "Q1", "Fine"]],
    );

    let outcome = merge_tables(&report, &comments, &config()).expect("merge");
    assert_eq!(outcome.unparsed_terms, 1);
    assert_eq!(outcome.unparsed_samples, vec!["Independent Study"]);
    // The passthrough text still joins when both sides carry it verbatim.
    assert_eq!(outcome.matched_rows, 1);
}

#[test]
fn empty_key_list_suggests_shared_columns() {
    let report = table(&["Term", "Course_Code", "Inst_LName"], &[]);
    let comments = table(
        &["Term", "Course_Code", "Response"],
        &[&["2025_01_SU1", "ACC210", "Fine"]],
    );
    let mut config = config();
    config.report_renames = ColumnMap::default();
    config.report_term = None;
    config.join_keys = Vec::new();

    let error = merge_tables(&report, &comments, &config).unwrap_err();
    let message = error.to_string();
    assert!(message.contains("no join keys configured"));
    assert!(message.contains("Term"));
    assert!(message.contains("Course_Code"));
}

#[test]
fn load_merge_config_parses_json() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("merge.json");
    fs::write(
        &path,
        r#"{
            "report_renames": [
                {"source": "Course Code", "target": "Course_Code"}
            ],
            "join_keys": ["Term", "Course_Code"],
            "report_term": {
                "source": "Project",
                "section_source": "Class_Nbr",
                "policy": "last-digit"
            },
            "course_code_column": "Course_Code"
        }"#,
    )
    .expect("write config");

    let config = load_merge_config(&path).expect("load config");
    assert_eq!(config.join_keys, vec!["Term", "Course_Code"]);
    assert_eq!(
        config.report_renames.target_for("Course Code"),
        Some("Course_Code")
    );
    assert!(config.comments_renames.is_empty());
    assert_eq!(
        config.report_term.map(|t| t.policy),
        Some(SectionPolicy::LastDigit)
    );
}

#[test]
fn load_merge_config_rejects_malformed_json() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("broken.json");
    fs::write(&path, "{ not json").expect("write config");
    assert!(load_merge_config(&path).is_err());
}
