//! Canonical column names of the merged evaluation schema.
//!
//! Source exports spell these headers a dozen different ways; the per-run
//! rename map in [`crate::MergeConfig`] folds them onto this fixed set.
//! Columns outside the set pass through every operation untouched.

pub const TERM: &str = "Term";
pub const COURSE_CODE: &str = "Course_Code";
pub const COURSE_NAME: &str = "Course_Name";
pub const INST_FNAME: &str = "Inst_FName";
pub const INST_LNAME: &str = "Inst_LName";
pub const QUESTION: &str = "Question";
pub const RESPONSE: &str = "Response";

/// Course codes are normalized to this uppercase prefix length.
pub const COURSE_CODE_WIDTH: usize = 6;
