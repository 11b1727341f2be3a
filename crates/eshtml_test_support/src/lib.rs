//! Shared helpers for the `eshtml` integration tests: golden fixture files and
//! readable line diffs.

pub mod fixtures;
pub mod perf;

use std::fmt::Write;

/// Line-oriented diff of two documents, showing a few lines around the first mismatch.
pub fn diff_lines(expected: &str, actual: &str) -> String {
    let expected: Vec<&str> = expected.split('\n').collect();
    let actual: Vec<&str> = actual.split('\n').collect();

    let max = expected.len().max(actual.len());
    let mut out = String::new();
    match (0..max).find(|&idx| line_at(&expected, idx) != line_at(&actual, idx)) {
        Some(first) => {
            let start = first.saturating_sub(2);
            let end = (first + 3).min(max);
            let _ = writeln!(out, "first mismatch at line {}:", first + 1);
            for idx in start..end {
                let marker = if idx == first { ">" } else { " " };
                let _ = writeln!(out, "{marker} {:>4}  expected: {}", idx + 1, line_at(&expected, idx));
                let _ = writeln!(out, "{marker} {:>4}    actual: {}", idx + 1, line_at(&actual, idx));
            }
        }
        None => {
            let _ = writeln!(out, "documents are identical");
        }
    }
    let _ = writeln!(
        out,
        "expected {} lines, actual {} lines",
        expected.len(),
        actual.len()
    );
    out
}

fn line_at<'a>(lines: &[&'a str], idx: usize) -> &'a str {
    lines.get(idx).copied().unwrap_or("<missing>")
}

#[cfg(test)]
mod tests {
    use super::diff_lines;

    #[test]
    fn diff_points_at_first_mismatch() {
        let diff = diff_lines("a\nb\nc", "a\nx\nc");
        assert!(diff.starts_with("first mismatch at line 2:"));
        assert!(diff.contains(">    2  expected: b"));
        assert!(diff.contains(">    2    actual: x"));
    }

    #[test]
    fn diff_reports_missing_lines() {
        let diff = diff_lines("a\nb", "a");
        assert!(diff.contains("actual: <missing>"));
        assert!(diff.ends_with("expected 2 lines, actual 1 lines\n"));
    }
}
