//! Shared helpers for the integration tests.

#![allow(dead_code)]

use std::fs;
use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};

use genorank::genomics::render_ranking;
use genorank::{parse_input, Screener, ScreeningConfig};

/// Parse `text`, screen it with `workers` threads, and render the report.
pub fn screen_report(text: &str, workers: usize) -> String {
    let input = parse_input(text).expect("input parses");
    let config = ScreeningConfig::with_workers(NonZeroUsize::new(workers).unwrap());
    let ranked = Screener::new(config)
        .expect("pool starts")
        .screen(&input)
        .expect("screening succeeds");
    render_ranking(&ranked).expect("rendering succeeds")
}

fn snapshot_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("snapshots")
}

/// Compare a rendered report against `tests/snapshots/<name>`.
///
/// `GENORANK_UPDATE_SNAPSHOTS=1` rewrites the stored report instead.
pub fn assert_report_snapshot(name: &str, actual: &str) {
    let path = snapshot_root().join(name);
    if std::env::var_os("GENORANK_UPDATE_SNAPSHOTS").is_some() {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("create snapshot directory");
        }
        fs::write(&path, actual).expect("write snapshot");
        return;
    }

    let expected = fs::read_to_string(&path)
        .unwrap_or_else(|_| panic!("report snapshot {} not found", path.display()));
    let expected_lines = report_lines(&expected);
    let actual_lines = report_lines(actual);
    if expected_lines != actual_lines {
        let first_diff = expected_lines
            .iter()
            .zip(&actual_lines)
            .position(|(e, a)| e != a)
            .unwrap_or(expected_lines.len().min(actual_lines.len()));
        panic!(
            "Report {} differs from line {} on. Set GENORANK_UPDATE_SNAPSHOTS=1 to regenerate.\nExpected:\n{}\nActual:\n{}",
            path.display(),
            first_diff + 1,
            expected,
            actual
        );
    }
}

/// Report lines with CRLF endings and trailing blank lines dropped.
fn report_lines(report: &str) -> Vec<&str> {
    let mut lines: Vec<&str> = report.lines().map(|line| line.trim_end_matches('\r')).collect();
    while lines.last().is_some_and(|line| line.is_empty()) {
        lines.pop();
    }
    lines
}
