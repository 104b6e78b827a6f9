mod json;
mod text;

pub use json::JsonFormatter;
pub use text::{ColorMode, TextFormatter};

use clap::ValueEnum;

use crate::checker::GateReport;
use crate::config::GateConfig;
use crate::error::Result;

/// Trait for formatting a gate report into various output formats.
pub trait OutputFormatter {
    /// Format the report into a string.
    ///
    /// # Errors
    /// Returns an error if the formatting fails.
    fn format(&self, config: &GateConfig, report: &GateReport) -> Result<String>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}
