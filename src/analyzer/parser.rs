use regex::Regex;

use super::types::FunctionSpan;

/// Recognizes function-signature lines and delimits their bodies by
/// brace-depth counting.
pub struct SignatureParser {
    fn_pattern: Regex,
}

impl Default for SignatureParser {
    fn default() -> Self {
        Self::new()
    }
}

impl SignatureParser {
    #[must_use]
    pub fn new() -> Self {
        Self {
            fn_pattern: Regex::new(
                r"^[\t ]*(?:pub(?:\s*\([^)]*\))?\s+)?(?:async\s+)?(?:unsafe\s+)?(?:const\s+)?fn\s+([A-Za-z_][A-Za-z0-9_]*)\s*(?:<[^>]*>)?\s*\(",
            )
            .expect("Invalid regex"),
        }
    }

    /// Extract every function span in `content`, top to bottom.
    ///
    /// After a span closes the cursor jumps past it, so signatures nested
    /// inside an already-closed outer body are not reported separately. A
    /// signature whose body never closes before end of input yields no span;
    /// scanning resumes on the next line.
    #[must_use]
    pub fn scan(&self, content: &str) -> Vec<FunctionSpan> {
        let lines: Vec<&str> = content.lines().collect();
        let mut spans = Vec::new();
        let mut i = 0;

        while i < lines.len() {
            let Some(caps) = self.fn_pattern.captures(lines[i]) else {
                i += 1;
                continue;
            };
            let name = caps.get(1).map_or("", |m| m.as_str()).to_string();

            match find_block_end(&lines, i) {
                Some(j) => {
                    spans.push(FunctionSpan::new(name, i + 1, j + 1));
                    i = j + 1;
                }
                None => i += 1,
            }
        }

        spans
    }
}

/// Find the line index where a block starting at or after `start` closes.
///
/// Depth rises on `{` and falls on `}` once at least one opening brace has
/// been seen; the zero check runs after each whole line. Braces inside string
/// or comment literals are counted like any other (best-effort heuristic).
/// Returns `None` when the block never closes before end of input.
fn find_block_end(lines: &[&str], start: usize) -> Option<usize> {
    let mut depth: i64 = 0;
    let mut opened = false;

    for (i, line) in lines.iter().enumerate().skip(start) {
        for ch in line.chars() {
            match ch {
                '{' => {
                    depth += 1;
                    opened = true;
                }
                '}' if opened => depth -= 1,
                _ => {}
            }
        }
        if opened && depth == 0 {
            return Some(i);
        }
    }

    None
}

#[cfg(test)]
#[path = "parser_tests.rs"]
mod tests;
