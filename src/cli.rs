use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::output::OutputFormat;

/// Color output control
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum ColorChoice {
    /// Auto-detect terminal capability
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

#[derive(Parser, Debug)]
#[command(name = "size-gate")]
#[command(author, version, about = "Source size quality gate - enforce file and function length limits")]
#[command(long_about = "Scans a source tree for files and functions that exceed \
    configured line limits and counts raw eprintln! call sites.\n\n\
    Exit codes:\n  \
    0 - Gate passed\n  \
    1 - Violations found, pattern baseline exceeded, or strict-mode failure\n  \
    2 - Source root missing or configuration error")]
pub struct Cli {
    /// Source root to scan recursively (default: src)
    #[arg(long)]
    pub src: Option<PathBuf>,

    /// Maximum lines per file (overrides config)
    #[arg(long)]
    pub max_file_lines: Option<usize>,

    /// Maximum lines per function (overrides config)
    #[arg(long)]
    pub max_fn_lines: Option<usize>,

    /// Function names exempt from the length limit (repeatable)
    #[arg(long = "allow-fn")]
    pub allow_fn: Vec<String>,

    /// Fail when any raw eprintln! call is present
    #[arg(long)]
    pub strict_errors: bool,

    /// Fail when the raw eprintln! count exceeds this baseline
    #[arg(long)]
    pub max_raw_pattern_count: Option<usize>,

    /// File extensions to scan (comma-separated, e.g., rs)
    #[arg(long, value_delimiter = ',')]
    pub ext: Option<Vec<String>>,

    /// Exclude patterns (glob syntax, can be specified multiple times)
    #[arg(long, short = 'x')]
    pub exclude: Vec<String>,

    /// Path to configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Skip loading configuration file
    #[arg(long)]
    pub no_config: bool,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Write report to file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Suppress report output
    #[arg(short, long)]
    pub quiet: bool,

    /// Control color output
    #[arg(long, value_enum, default_value = "auto")]
    pub color: ColorChoice,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
