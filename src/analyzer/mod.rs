mod parser;
mod types;

pub use parser::SignatureParser;
pub use types::{FileScan, FunctionSpan};

use std::fs;
use std::path::Path;

use crate::config::DISCOURAGED_PATTERN;
use crate::counter::PatternCounter;

/// Per-file scanner combining signature extraction and pattern counting.
pub struct SourceScanner {
    parser: SignatureParser,
    counter: PatternCounter,
}

impl Default for SourceScanner {
    fn default() -> Self {
        Self::new(DISCOURAGED_PATTERN)
    }
}

impl SourceScanner {
    #[must_use]
    pub fn new(pattern: &str) -> Self {
        Self {
            parser: SignatureParser::new(),
            counter: PatternCounter::new(pattern),
        }
    }

    /// Read and scan one file. Unreadable files yield `None` and are skipped.
    #[must_use]
    pub fn scan_file(&self, path: &Path) -> Option<FileScan> {
        let content = fs::read_to_string(path).ok()?;
        Some(self.scan_content(path, &content))
    }

    #[must_use]
    pub fn scan_content(&self, path: &Path, content: &str) -> FileScan {
        FileScan {
            path: path.to_path_buf(),
            line_count: content.lines().count(),
            functions: self.parser.scan(content),
            pattern_hits: self.counter.count(content),
        }
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
