pub mod preview;
pub mod stats;

pub use preview::{apply_table_style, header_cell, render_preview};
pub use stats::{render_counts, top_words, value_counts};
