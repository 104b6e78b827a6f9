/// Counts non-overlapping literal occurrences of a discouraged call token.
///
/// No deduplication and no location tracking; only a total per input.
pub struct PatternCounter {
    pattern: String,
}

impl PatternCounter {
    #[must_use]
    pub fn new(pattern: &str) -> Self {
        Self {
            pattern: pattern.to_string(),
        }
    }

    #[must_use]
    pub fn count(&self, content: &str) -> usize {
        if self.pattern.is_empty() {
            return 0;
        }
        content.matches(self.pattern.as_str()).count()
    }
}

#[cfg(test)]
#[path = "counter_tests.rs"]
mod tests;
