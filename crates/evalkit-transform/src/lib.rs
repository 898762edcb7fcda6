//! Pure, stateless table transformations.
//!
//! Every function here maps immutable inputs to a fresh output table;
//! identical inputs always produce identical outputs, so hosting
//! applications may cache results keyed by a content hash of table and
//! configuration.

pub mod append;
pub mod filter;
pub mod join;
pub mod normalize;
pub mod term_column;

pub use append::append;
pub use filter::filter_contains;
pub use join::{JoinOutput, join, join_with_stats, validate_keys};
pub use normalize::{normalize_course_code, normalize_course_codes, rename_columns};
pub use term_column::{TermDerivationStats, derive_term_column};
