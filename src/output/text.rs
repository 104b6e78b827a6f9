use std::fmt::Write;

use crate::checker::{FailReason, GateReport, Verdict};
use crate::config::GateConfig;
use crate::error::Result;

use super::OutputFormatter;

/// Display cap for itemized function violations; counts always reflect the
/// full lists.
pub const FN_VIOLATION_DISPLAY_CAP: usize = 100;

/// Color output mode for terminal display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorMode {
    /// Auto-detect: use colors if stdout is a TTY and `NO_COLOR` is not set
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// ANSI color codes
mod ansi {
    pub const RED: &str = "\x1b[31m";
    pub const GREEN: &str = "\x1b[32m";
    pub const RESET: &str = "\x1b[0m";
}

pub struct TextFormatter {
    use_colors: bool,
}

impl TextFormatter {
    #[must_use]
    pub fn new(mode: ColorMode) -> Self {
        Self {
            use_colors: Self::should_use_colors(mode),
        }
    }

    fn should_use_colors(mode: ColorMode) -> bool {
        match mode {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => {
                if std::env::var("NO_COLOR").is_ok() {
                    return false;
                }
                std::io::IsTerminal::is_terminal(&std::io::stdout())
            }
        }
    }

    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.use_colors {
            return text.to_string();
        }
        format!("{color}{text}{}", ansi::RESET)
    }

    fn write_config(output: &mut String, config: &GateConfig) {
        let _ = writeln!(output, "src: {}", config.src.display());
        let _ = writeln!(output, "file_max_lines: {}", config.max_file_lines);
        let _ = writeln!(
            output,
            "fn_max_lines: {} (allow={:?})",
            config.max_fn_lines,
            config.sorted_allow()
        );
    }

    fn write_violations(output: &mut String, report: &GateReport) {
        let _ = writeln!(output, "file_violations: {}", report.file_violations.len());
        for v in &report.file_violations {
            let _ = writeln!(output, "  - {}: {}", v.path.display(), v.line_count);
        }

        let _ = writeln!(
            output,
            "function_violations: {}",
            report.function_violations.len()
        );
        for v in report
            .function_violations
            .iter()
            .take(FN_VIOLATION_DISPLAY_CAP)
        {
            let _ = writeln!(
                output,
                "  - {}:{}-{} {} ({})",
                v.path.display(),
                v.start_line,
                v.end_line,
                v.name,
                v.line_count
            );
        }
        if report.function_violations.len() > FN_VIOLATION_DISPLAY_CAP {
            let _ = writeln!(
                output,
                "  ... and {} more",
                report.function_violations.len() - FN_VIOLATION_DISPLAY_CAP
            );
        }
    }

    fn write_verdict(&self, output: &mut String, report: &GateReport) {
        if let Verdict::Fail(FailReason::BaselineExceeded { count, baseline }) = report.verdict {
            let _ = writeln!(
                output,
                "{}",
                self.colorize(
                    &format!("ERROR: raw_eprintln_count {count} exceeds baseline {baseline}"),
                    ansi::RED
                )
            );
        }

        let verdict = match report.verdict {
            Verdict::Pass => self.colorize("PASS", ansi::GREEN),
            Verdict::Fail(reason) => {
                let label = match reason {
                    FailReason::Thresholds => "size violations",
                    FailReason::BaselineExceeded { .. } => "pattern baseline exceeded",
                    FailReason::StrictErrors { .. } => "strict errors",
                };
                self.colorize(&format!("FAIL ({label})"), ansi::RED)
            }
        };
        let _ = writeln!(output, "verdict: {verdict}");
    }
}

impl OutputFormatter for TextFormatter {
    fn format(&self, config: &GateConfig, report: &GateReport) -> Result<String> {
        let mut output = String::new();

        let _ = writeln!(output, "== size-gate report ==");
        Self::write_config(&mut output, config);
        Self::write_violations(&mut output, report);
        let _ = writeln!(output, "raw_eprintln_count: {}", report.pattern_count);
        self.write_verdict(&mut output, report);

        Ok(output)
    }
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
