mod result;

pub use result::{FailReason, FileViolation, FunctionViolation, GateReport, Verdict};

use crate::analyzer::FileScan;
use crate::config::GateConfig;

/// Applies the configured thresholds to per-file scan results.
pub struct GateChecker {
    config: GateConfig,
}

impl GateChecker {
    #[must_use]
    pub const fn new(config: GateConfig) -> Self {
        Self { config }
    }

    /// Aggregate violations and the pattern total across scans.
    ///
    /// `scans` must already be in file-path sort order; violations are
    /// emitted in that order, top to bottom within each file. A line count
    /// equal to a limit never violates (strict greater-than).
    #[must_use]
    pub fn check(&self, scans: &[FileScan]) -> GateReport {
        let mut file_violations = Vec::new();
        let mut function_violations = Vec::new();
        let mut pattern_count = 0;

        for scan in scans {
            pattern_count += scan.pattern_hits;

            if scan.line_count > self.config.max_file_lines {
                file_violations.push(FileViolation {
                    path: scan.path.clone(),
                    line_count: scan.line_count,
                });
            }

            for func in &scan.functions {
                if func.line_count > self.config.max_fn_lines
                    && !self.config.allow_list.contains(func.name.as_str())
                {
                    function_violations.push(FunctionViolation {
                        path: scan.path.clone(),
                        name: func.name.clone(),
                        line_count: func.line_count,
                        start_line: func.start_line,
                        end_line: func.end_line,
                    });
                }
            }
        }

        let verdict = self.verdict(
            file_violations.is_empty() && function_violations.is_empty(),
            pattern_count,
        );

        GateReport {
            file_violations,
            function_violations,
            pattern_count,
            verdict,
        }
    }

    /// Precedence: threshold violations, then baseline, then strict mode.
    fn verdict(&self, clean: bool, pattern_count: usize) -> Verdict {
        if !clean {
            return Verdict::Fail(FailReason::Thresholds);
        }
        if let Some(baseline) = self.config.max_raw_pattern_count
            && pattern_count > baseline
        {
            return Verdict::Fail(FailReason::BaselineExceeded {
                count: pattern_count,
                baseline,
            });
        }
        if self.config.strict_errors && pattern_count > 0 {
            return Verdict::Fail(FailReason::StrictErrors {
                count: pattern_count,
            });
        }
        Verdict::Pass
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
