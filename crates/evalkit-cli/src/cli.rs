//! CLI argument definitions for evalkit.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "evalkit",
    version,
    about = "Merge instructor reports with student comment exports",
    long_about = "Normalize course-evaluation exports to a shared schema, derive compact\n\
                  term keys from free-text term descriptions, and join or append the\n\
                  tables on a configurable key set."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Merge an instructor report into a student comments export.
    Merge(MergeArgs),

    /// Append one export below another, reindexed to the base schema.
    Append(AppendArgs),

    /// Decode a free-text term description and print its compact key.
    Term(TermArgs),

    /// List the section-inference policies.
    Policies,
}

#[derive(Parser)]
pub struct MergeArgs {
    /// Instructor report export (delimited text).
    #[arg(value_name = "REPORT")]
    pub report: PathBuf,

    /// Student comments export (delimited text).
    #[arg(value_name = "COMMENTS")]
    pub comments: PathBuf,

    /// Merge configuration JSON: rename maps, join keys, term derivation.
    #[arg(long = "config", value_name = "JSON")]
    pub config: PathBuf,

    /// Write the merged table to this CSV file.
    #[arg(long = "output", value_name = "CSV")]
    pub output: Option<PathBuf>,

    /// Print the first N merged rows.
    #[arg(long = "preview", value_name = "N")]
    pub preview: Option<usize>,

    /// Keep only rows whose filter column contains this keyword.
    #[arg(long = "keyword", value_name = "WORD")]
    pub keyword: Option<String>,

    /// Column the keyword filter applies to.
    #[arg(long = "filter-column", value_name = "COL", default_value = "Response")]
    pub filter_column: String,

    /// Print comment analytics (rows per instructor, top words).
    #[arg(long = "stats")]
    pub stats: bool,

    /// Field delimiter of the instructor report export.
    #[arg(long = "report-delimiter", value_enum, default_value = "comma")]
    pub report_delimiter: DelimiterArg,

    /// Field delimiter of the student comments export.
    #[arg(long = "comments-delimiter", value_enum, default_value = "comma")]
    pub comments_delimiter: DelimiterArg,
}

#[derive(Parser)]
pub struct AppendArgs {
    /// Base export; its column set and order define the output schema.
    #[arg(value_name = "BASE")]
    pub base: PathBuf,

    /// Rows appended below the base, reindexed to its schema.
    #[arg(value_name = "ADDITIONS")]
    pub additions: PathBuf,

    /// Write the combined table to this CSV file.
    #[arg(long = "output", value_name = "CSV")]
    pub output: Option<PathBuf>,

    /// Print the first N combined rows.
    #[arg(long = "preview", value_name = "N")]
    pub preview: Option<usize>,
}

#[derive(Parser)]
pub struct TermArgs {
    /// Free-text term description, e.g. "2025 Summer Term I".
    #[arg(value_name = "TEXT")]
    pub text: String,

    /// Auxiliary id to infer the section number from (defaults to section 1).
    #[arg(long = "section-id", value_name = "ID")]
    pub section_id: Option<String>,

    /// Section-inference policy applied to the auxiliary id.
    #[arg(long = "policy", value_enum, default_value = "last-digit")]
    pub policy: PolicyArg,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum DelimiterArg {
    Comma,
    Tab,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum PolicyArg {
    LastDigit,
    Modulo,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
