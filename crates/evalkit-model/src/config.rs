use serde::{Deserialize, Serialize};

use crate::schema;

/// One declarative header rename: source-export spelling to canonical name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnRename {
    pub source: String,
    pub target: String,
}

/// Ordered rename map applied to one table. First matching source wins.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ColumnMap {
    pub renames: Vec<ColumnRename>,
}

impl ColumnMap {
    pub fn from_pairs<I, S, T>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (S, T)>,
        S: Into<String>,
        T: Into<String>,
    {
        Self {
            renames: pairs
                .into_iter()
                .map(|(source, target)| ColumnRename {
                    source: source.into(),
                    target: target.into(),
                })
                .collect(),
        }
    }

    pub fn target_for(&self, source: &str) -> Option<&str> {
        self.renames
            .iter()
            .find(|rename| rename.source == source)
            .map(|rename| rename.target.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.renames.is_empty()
    }
}

/// Section-number inference policy.
///
/// The source systems encode section numbers into auxiliary class ids in two
/// incompatible ways. The policy is fixed per derivation block; datasets
/// never mix policies and the tool never guesses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SectionPolicy {
    /// Trailing digit of the id: `0` maps to section 1, `1` to section 2,
    /// anything else falls back to section 1.
    LastDigit,
    /// Numeric id modulo 100, minus the base offset of 90, plus 1,
    /// floored at section 1.
    Modulo,
}

/// Settings for deriving the compact term key column on one table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TermDerivation {
    /// Column holding the free-text term description, e.g. "Project".
    pub source: String,
    /// Column holding the auxiliary id the section number is inferred from.
    pub section_source: String,
    pub policy: SectionPolicy,
    /// Column the derived key is written to.
    #[serde(default = "default_term_target")]
    pub target: String,
}

fn default_term_target() -> String {
    schema::TERM.to_string()
}

/// Caller-supplied merge configuration, loaded from a JSON file.
///
/// Rename maps and the join-key list are data, not code: different source
/// exports spell the same concept differently, so each run supplies its own
/// mapping.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MergeConfig {
    /// Header renames for the instructor report table.
    #[serde(default)]
    pub report_renames: ColumnMap,
    /// Header renames for the student comments table.
    #[serde(default)]
    pub comments_renames: ColumnMap,
    /// Columns whose equality determines row correspondence in the join.
    pub join_keys: Vec<String>,
    /// Term-key derivation for the instructor report, when it carries
    /// free-text term descriptions.
    #[serde(default)]
    pub report_term: Option<TermDerivation>,
    /// Term-key derivation for the student comments table.
    #[serde(default)]
    pub comments_term: Option<TermDerivation>,
    /// Column to normalize to the fixed-width uppercase course-code prefix.
    #[serde(default)]
    pub course_code_column: Option<String>,
}
