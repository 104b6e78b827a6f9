use std::path::{Path, PathBuf};

use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

use crate::cli::Cli;
use crate::error::{GateError, Result};

/// Built-in exemption, always present in the allow-list.
pub const DEFAULT_ALLOW_FN: &str = "execute_task";

/// Discouraged error-reporting token counted across the scanned tree.
pub const DISCOURAGED_PATTERN: &str = "eprintln!(";

const LOCAL_CONFIG_NAME: &str = ".size-gate.toml";

fn default_src() -> PathBuf {
    PathBuf::from("src")
}

const fn default_max_file_lines() -> usize {
    400
}

const fn default_max_fn_lines() -> usize {
    50
}

fn default_extensions() -> Vec<String> {
    vec!["rs".to_string()]
}

/// On-disk configuration (`.size-gate.toml`).
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct FileConfig {
    #[serde(default)]
    pub gate: GateSection,

    #[serde(default)]
    pub exclude: ExcludeSection,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GateSection {
    /// Source root to scan.
    #[serde(default = "default_src")]
    pub src: PathBuf,

    /// Maximum physical lines per file.
    #[serde(default = "default_max_file_lines")]
    pub max_file_lines: usize,

    /// Maximum lines per function span.
    #[serde(default = "default_max_fn_lines")]
    pub max_fn_lines: usize,

    /// Function names exempt from the length limit.
    #[serde(default)]
    pub allow_fn: Vec<String>,

    /// Fail on any discouraged-pattern occurrence.
    #[serde(default)]
    pub strict_errors: bool,

    /// Tolerated discouraged-pattern count.
    #[serde(default)]
    pub max_raw_pattern_count: Option<usize>,

    /// File extensions to scan.
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,
}

impl Default for GateSection {
    fn default() -> Self {
        Self {
            src: default_src(),
            max_file_lines: default_max_file_lines(),
            max_fn_lines: default_max_fn_lines(),
            allow_fn: Vec::new(),
            strict_errors: false,
            max_raw_pattern_count: None,
            extensions: default_extensions(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ExcludeSection {
    #[serde(default)]
    pub patterns: Vec<String>,
}

/// Trait for loading configuration from various sources.
pub trait ConfigLoader {
    /// Load configuration from the default location.
    ///
    /// A missing file at the default location is not an error; defaults apply.
    ///
    /// # Errors
    /// Returns an error if the config file cannot be read or parsed.
    fn load(&self) -> Result<FileConfig>;

    /// Load configuration from a specific path.
    ///
    /// # Errors
    /// Returns an error if the file does not exist or cannot be parsed.
    fn load_from_path(&self, path: &Path) -> Result<FileConfig>;
}

#[derive(Debug, Default)]
pub struct FileConfigLoader;

impl FileConfigLoader {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl ConfigLoader for FileConfigLoader {
    fn load(&self) -> Result<FileConfig> {
        let path = Path::new(LOCAL_CONFIG_NAME);
        if path.exists() {
            self.load_from_path(path)
        } else {
            Ok(FileConfig::default())
        }
    }

    fn load_from_path(&self, path: &Path) -> Result<FileConfig> {
        if !path.exists() {
            return Err(GateError::Config(format!(
                "Configuration file not found: {}",
                path.display()
            )));
        }
        let content = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }
}

/// Effective configuration for a single gate run.
///
/// Constructed once per invocation, read-only thereafter. Precedence:
/// CLI override > config file > built-in default.
#[derive(Debug, Clone)]
pub struct GateConfig {
    pub src: PathBuf,
    pub max_file_lines: usize,
    pub max_fn_lines: usize,
    pub allow_list: IndexSet<String>,
    pub strict_errors: bool,
    pub max_raw_pattern_count: Option<usize>,
    pub extensions: Vec<String>,
    pub exclude_patterns: Vec<String>,
}

impl GateConfig {
    #[must_use]
    pub fn from_sources(file: FileConfig, cli: &Cli) -> Self {
        let mut allow_list = IndexSet::new();
        allow_list.insert(DEFAULT_ALLOW_FN.to_string());
        allow_list.extend(file.gate.allow_fn.iter().cloned());
        allow_list.extend(cli.allow_fn.iter().cloned());

        let mut exclude_patterns = file.exclude.patterns;
        exclude_patterns.extend(cli.exclude.iter().cloned());

        Self {
            src: cli.src.clone().unwrap_or(file.gate.src),
            max_file_lines: cli.max_file_lines.unwrap_or(file.gate.max_file_lines),
            max_fn_lines: cli.max_fn_lines.unwrap_or(file.gate.max_fn_lines),
            allow_list,
            strict_errors: cli.strict_errors || file.gate.strict_errors,
            max_raw_pattern_count: cli
                .max_raw_pattern_count
                .or(file.gate.max_raw_pattern_count),
            extensions: cli.ext.clone().unwrap_or(file.gate.extensions),
            exclude_patterns,
        }
    }

    /// Allow-list entries in sorted order for stable echoing.
    #[must_use]
    pub fn sorted_allow(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.allow_list.iter().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

impl Default for GateConfig {
    fn default() -> Self {
        let mut allow_list = IndexSet::new();
        allow_list.insert(DEFAULT_ALLOW_FN.to_string());
        Self {
            src: default_src(),
            max_file_lines: default_max_file_lines(),
            max_fn_lines: default_max_fn_lines(),
            allow_list,
            strict_errors: false,
            max_raw_pattern_count: None,
            extensions: default_extensions(),
            exclude_patterns: Vec::new(),
        }
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
