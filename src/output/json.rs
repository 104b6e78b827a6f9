use serde::Serialize;

use crate::checker::{FailReason, GateReport, Verdict};
use crate::config::GateConfig;
use crate::error::Result;

use super::OutputFormatter;

pub struct JsonFormatter;

#[derive(Serialize)]
struct JsonOutput {
    config: JsonConfig,
    summary: Summary,
    file_violations: Vec<JsonFileViolation>,
    function_violations: Vec<JsonFunctionViolation>,
    raw_eprintln_count: usize,
    verdict: JsonVerdict,
}

#[derive(Serialize)]
struct JsonConfig {
    src: String,
    max_file_lines: usize,
    max_fn_lines: usize,
    allow: Vec<String>,
    strict_errors: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_raw_pattern_count: Option<usize>,
}

#[derive(Serialize)]
struct Summary {
    file_violations: usize,
    function_violations: usize,
}

#[derive(Serialize)]
struct JsonFileViolation {
    path: String,
    line_count: usize,
}

#[derive(Serialize)]
struct JsonFunctionViolation {
    path: String,
    name: String,
    line_count: usize,
    start_line: usize,
    end_line: usize,
}

#[derive(Serialize)]
struct JsonVerdict {
    status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    reason: Option<&'static str>,
}

impl OutputFormatter for JsonFormatter {
    fn format(&self, config: &GateConfig, report: &GateReport) -> Result<String> {
        let output = JsonOutput {
            config: JsonConfig {
                src: config.src.display().to_string(),
                max_file_lines: config.max_file_lines,
                max_fn_lines: config.max_fn_lines,
                allow: config
                    .sorted_allow()
                    .into_iter()
                    .map(str::to_string)
                    .collect(),
                strict_errors: config.strict_errors,
                max_raw_pattern_count: config.max_raw_pattern_count,
            },
            summary: Summary {
                file_violations: report.file_violations.len(),
                function_violations: report.function_violations.len(),
            },
            file_violations: report
                .file_violations
                .iter()
                .map(|v| JsonFileViolation {
                    path: v.path.display().to_string(),
                    line_count: v.line_count,
                })
                .collect(),
            function_violations: report
                .function_violations
                .iter()
                .map(|v| JsonFunctionViolation {
                    path: v.path.display().to_string(),
                    name: v.name.clone(),
                    line_count: v.line_count,
                    start_line: v.start_line,
                    end_line: v.end_line,
                })
                .collect(),
            raw_eprintln_count: report.pattern_count,
            verdict: convert_verdict(report.verdict),
        };

        Ok(serde_json::to_string_pretty(&output)?)
    }
}

const fn convert_verdict(verdict: Verdict) -> JsonVerdict {
    match verdict {
        Verdict::Pass => JsonVerdict {
            status: "pass",
            reason: None,
        },
        Verdict::Fail(reason) => JsonVerdict {
            status: "fail",
            reason: Some(match reason {
                FailReason::Thresholds => "thresholds",
                FailReason::BaselineExceeded { .. } => "baseline_exceeded",
                FailReason::StrictErrors { .. } => "strict_errors",
            }),
        },
    }
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;
