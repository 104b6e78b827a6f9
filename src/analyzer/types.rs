use std::path::PathBuf;

/// A function body located by the signature scanner.
#[derive(Debug, Clone)]
pub struct FunctionSpan {
    /// Function name
    pub name: String,
    /// Signature line (1-indexed)
    pub start_line: usize,
    /// Line where the body's brace nesting closes (1-indexed)
    pub end_line: usize,
    /// Number of lines in the span
    pub line_count: usize,
}

impl FunctionSpan {
    #[must_use]
    pub const fn new(name: String, start_line: usize, end_line: usize) -> Self {
        Self {
            name,
            start_line,
            end_line,
            line_count: end_line.saturating_sub(start_line) + 1,
        }
    }
}

/// Scan result for a single source file.
#[derive(Debug, Clone)]
pub struct FileScan {
    pub path: PathBuf,
    /// Physical line count
    pub line_count: usize,
    /// Function spans in top-to-bottom order
    pub functions: Vec<FunctionSpan>,
    /// Occurrences of the discouraged pattern
    pub pattern_hits: usize,
}
