pub mod csv_table;
pub mod write;

pub use csv_table::{Delimiter, ReadOptions, read_table, read_table_with_options};
pub use write::{table_to_csv_string, write_table};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum IngestError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
    #[error("{0}")]
    Message(String),
}

pub type Result<T> = std::result::Result<T, IngestError>;
