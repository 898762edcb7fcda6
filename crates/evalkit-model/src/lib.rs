pub mod config;
pub mod error;
pub mod schema;
pub mod table;

pub use config::{ColumnMap, ColumnRename, MergeConfig, SectionPolicy, TermDerivation};
pub use error::{MergeError, MissingColumn, Result};
pub use table::{Table, common_columns};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_columns_lists_every_violation() {
        let error = MergeError::MissingColumns(vec![
            MissingColumn {
                table: "student comments".to_string(),
                column: "Course_Name".to_string(),
            },
            MissingColumn {
                table: "instructor report".to_string(),
                column: "Question".to_string(),
            },
        ]);
        let rendered = error.to_string();
        assert!(rendered.contains("Course_Name"));
        assert!(rendered.contains("student comments"));
        assert!(rendered.contains("Question"));
        assert!(rendered.contains("instructor report"));
    }

    #[test]
    fn merge_config_round_trips() {
        let config = MergeConfig {
            report_renames: ColumnMap::from_pairs([("Course Code", "Course_Code")]),
            comments_renames: ColumnMap::default(),
            join_keys: vec!["Term".to_string(), "Course_Code".to_string()],
            report_term: Some(TermDerivation {
                source: "Project".to_string(),
                section_source: "Class_Nbr".to_string(),
                policy: SectionPolicy::LastDigit,
                target: schema::TERM.to_string(),
            }),
            comments_term: None,
            course_code_column: Some("Course_Code".to_string()),
        };
        let json = serde_json::to_string(&config).expect("serialize config");
        let round: MergeConfig = serde_json::from_str(&json).expect("deserialize config");
        assert_eq!(round.join_keys, config.join_keys);
        assert_eq!(
            round.report_renames.target_for("Course Code"),
            Some("Course_Code")
        );
        assert_eq!(
            round.report_term.as_ref().map(|t| t.policy),
            Some(SectionPolicy::LastDigit)
        );
    }

    #[test]
    fn term_derivation_target_defaults_to_term() {
        let json = r#"{
            "source": "Project",
            "section_source": "Class_Nbr",
            "policy": "modulo"
        }"#;
        let derivation: TermDerivation = serde_json::from_str(json).expect("deserialize");
        assert_eq!(derivation.target, schema::TERM);
        assert_eq!(derivation.policy, SectionPolicy::Modulo);
    }
}
