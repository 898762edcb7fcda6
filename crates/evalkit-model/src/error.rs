use thiserror::Error;

/// A key column absent from one of the join inputs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("column `{column}` missing from {table}")]
pub struct MissingColumn {
    /// Human-readable table label, e.g. "student comments".
    pub table: String,
    pub column: String,
}

#[derive(Debug, Error)]
pub enum MergeError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    /// Every absent key column across both inputs, reported in one pass.
    #[error("missing key columns: {}", list_missing(.0))]
    MissingColumns(Vec<MissingColumn>),
    #[error("{0}")]
    Message(String),
}

fn list_missing(missing: &[MissingColumn]) -> String {
    missing
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

pub type Result<T> = std::result::Result<T, MergeError>;
