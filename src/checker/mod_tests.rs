use std::path::PathBuf;

use super::*;
use crate::analyzer::{FileScan, FunctionSpan};
use crate::config::GateConfig;

fn config(max_file_lines: usize, max_fn_lines: usize) -> GateConfig {
    GateConfig {
        max_file_lines,
        max_fn_lines,
        ..GateConfig::default()
    }
}

fn scan(path: &str, line_count: usize, functions: Vec<FunctionSpan>) -> FileScan {
    FileScan {
        path: PathBuf::from(path),
        line_count,
        functions,
        pattern_hits: 0,
    }
}

fn span(name: &str, start_line: usize, end_line: usize) -> FunctionSpan {
    FunctionSpan::new(name.to_string(), start_line, end_line)
}

#[test]
fn file_at_limit_does_not_violate() {
    let checker = GateChecker::new(config(400, 50));
    let report = checker.check(&[scan("src/a.rs", 400, vec![])]);

    assert!(report.file_violations.is_empty());
    assert_eq!(report.verdict, Verdict::Pass);
}

#[test]
fn file_one_over_limit_violates() {
    let checker = GateChecker::new(config(400, 50));
    let report = checker.check(&[scan("src/a.rs", 401, vec![])]);

    assert_eq!(report.file_violations.len(), 1);
    assert_eq!(report.file_violations[0].path, PathBuf::from("src/a.rs"));
    assert_eq!(report.file_violations[0].line_count, 401);
    assert_eq!(report.verdict, Verdict::Fail(FailReason::Thresholds));
    assert_eq!(report.exit_code(), crate::EXIT_GATE_FAILED);
}

#[test]
fn function_at_limit_does_not_violate() {
    let checker = GateChecker::new(config(400, 50));
    let report = checker.check(&[scan("src/a.rs", 100, vec![span("handler", 1, 50)])]);

    assert!(report.function_violations.is_empty());
}

#[test]
fn function_one_over_limit_violates() {
    let checker = GateChecker::new(config(400, 50));
    let report = checker.check(&[scan("src/a.rs", 100, vec![span("handler", 1, 51)])]);

    assert_eq!(report.function_violations.len(), 1);
    let v = &report.function_violations[0];
    assert_eq!(v.name, "handler");
    assert_eq!(v.line_count, 51);
    assert_eq!(v.start_line, 1);
    assert_eq!(v.end_line, 51);
}

#[test]
fn allow_list_suppresses_regardless_of_length() {
    let checker = GateChecker::new(config(400, 50));
    let report = checker.check(&[scan("src/a.rs", 100, vec![span("execute_task", 1, 80)])]);

    assert!(report.function_violations.is_empty());
    assert_eq!(report.verdict, Verdict::Pass);
}

#[test]
fn file_without_functions_can_still_violate_file_rule() {
    let checker = GateChecker::new(config(10, 50));
    let report = checker.check(&[scan("src/a.rs", 11, vec![])]);

    assert_eq!(report.file_violations.len(), 1);
    assert!(report.function_violations.is_empty());
}

#[test]
fn violations_preserve_scan_order() {
    let checker = GateChecker::new(config(400, 5));
    let scans = [
        scan(
            "src/a.rs",
            100,
            vec![span("first", 1, 10), span("second", 20, 30)],
        ),
        scan("src/b.rs", 100, vec![span("third", 5, 15)]),
    ];
    let report = checker.check(&scans);

    let names: Vec<_> = report
        .function_violations
        .iter()
        .map(|v| v.name.as_str())
        .collect();
    assert_eq!(names, vec!["first", "second", "third"]);
}

#[test]
fn pattern_hits_sum_across_files() {
    let checker = GateChecker::new(config(400, 50));
    let mut a = scan("src/a.rs", 10, vec![]);
    a.pattern_hits = 2;
    let mut b = scan("src/b.rs", 10, vec![]);
    b.pattern_hits = 3;

    let report = checker.check(&[a, b]);
    assert_eq!(report.pattern_count, 5);
}

#[test]
fn baseline_within_limit_passes() {
    let mut cfg = config(400, 50);
    cfg.max_raw_pattern_count = Some(5);
    let checker = GateChecker::new(cfg);

    let mut s = scan("src/a.rs", 10, vec![]);
    s.pattern_hits = 5;
    let report = checker.check(&[s]);

    assert_eq!(report.verdict, Verdict::Pass);
}

#[test]
fn baseline_exceeded_fails_with_counts() {
    let mut cfg = config(400, 50);
    cfg.max_raw_pattern_count = Some(2);
    let checker = GateChecker::new(cfg);

    let mut s = scan("src/a.rs", 10, vec![]);
    s.pattern_hits = 5;
    let report = checker.check(&[s]);

    assert_eq!(
        report.verdict,
        Verdict::Fail(FailReason::BaselineExceeded {
            count: 5,
            baseline: 2
        })
    );
}

#[test]
fn strict_mode_fails_on_any_hit() {
    let mut cfg = config(400, 50);
    cfg.strict_errors = true;
    let checker = GateChecker::new(cfg);

    let mut s = scan("src/a.rs", 10, vec![]);
    s.pattern_hits = 3;
    let report = checker.check(&[s]);

    assert_eq!(
        report.verdict,
        Verdict::Fail(FailReason::StrictErrors { count: 3 })
    );
}

#[test]
fn strict_mode_passes_with_zero_hits() {
    let mut cfg = config(400, 50);
    cfg.strict_errors = true;
    let checker = GateChecker::new(cfg);

    let report = checker.check(&[scan("src/a.rs", 10, vec![])]);
    assert_eq!(report.verdict, Verdict::Pass);
}

#[test]
fn thresholds_take_precedence_over_baseline_and_strict() {
    let mut cfg = config(10, 50);
    cfg.strict_errors = true;
    cfg.max_raw_pattern_count = Some(0);
    let checker = GateChecker::new(cfg);

    let mut s = scan("src/a.rs", 11, vec![]);
    s.pattern_hits = 4;
    let report = checker.check(&[s]);

    assert_eq!(report.verdict, Verdict::Fail(FailReason::Thresholds));
    assert!(report.has_violations());
}

#[test]
fn baseline_takes_precedence_over_strict() {
    let mut cfg = config(400, 50);
    cfg.strict_errors = true;
    cfg.max_raw_pattern_count = Some(1);
    let checker = GateChecker::new(cfg);

    let mut s = scan("src/a.rs", 10, vec![]);
    s.pattern_hits = 2;
    let report = checker.check(&[s]);

    assert_eq!(
        report.verdict,
        Verdict::Fail(FailReason::BaselineExceeded {
            count: 2,
            baseline: 1
        })
    );
}

#[test]
fn empty_scan_set_passes() {
    let checker = GateChecker::new(config(400, 50));
    let report = checker.check(&[]);

    assert!(!report.is_failed());
    assert!(!report.has_violations());
    assert_eq!(report.exit_code(), crate::EXIT_SUCCESS);
}
