//! Console summary formatting.
//!
//! Formats a [`RunStats`] plus the run's elapsed time into the end-of-run
//! summary, as plain text or JSON. The report file itself is written by the
//! engine; this module only renders the aggregate view.

use crate::types::RunStats;
use serde::Serialize;
use std::time::Duration;

/// Supported summary formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SummaryFormat {
    Text,
    Json,
}

/// The JSON summary payload.
#[derive(Debug, Serialize)]
struct SummaryRecord<'a> {
    elapsed_seconds: f64,
    stats: &'a RunStats,
}

/// Formats the end-of-run summary into a string.
pub fn format_summary(
    stats: &RunStats,
    elapsed: Duration,
    format: SummaryFormat,
    pretty: bool,
) -> String {
    match format {
        SummaryFormat::Text => format_text(stats, elapsed),
        SummaryFormat::Json => format_json(stats, elapsed, pretty),
    }
}

// ----------------------- Internal formatting -----------------------

fn format_text(stats: &RunStats, elapsed: Duration) -> String {
    let mut out = String::with_capacity(512);
    out.push_str("\n--- Processing Summary ---\n");
    out.push_str(&format!(
        "  Total time taken: {:.2} seconds\n",
        elapsed.as_secs_f64()
    ));
    out.push_str(&format!("  Directories processed: {}\n", stats.directories));
    out.push_str(&format!("  Files processed: {}\n", stats.files));
    out.push_str(&format!("    - Text files read: {}\n", stats.text_files));
    out.push_str(&format!(
        "    - Binary files skipped: {}\n",
        stats.binary_files
    ));
    out.push_str(&format!("  Symlinks skipped: {}\n", stats.symlinks));
    out.push_str(&format!("  Ignored items: {}\n", stats.ignored));
    out.push_str(&format!(
        "  Unknown types skipped: {}\n",
        stats.unknown_types
    ));
    if stats.has_errors() {
        out.push_str("\n--- Errors ---\n");
        out.push_str(&format!(
            "  Unicode decode errors: {}\n",
            stats.unicode_errors
        ));
        out.push_str(&format!("  File read errors: {}\n", stats.read_errors));
        out.push_str(&format!(
            "  Item processing errors: {}\n",
            stats.item_errors
        ));
        out.push_str(&format!(
            "  Directory access errors: {}\n",
            stats.directory_errors
        ));
    } else {
        out.push_str("\n--- No Errors ---\n");
    }
    out.push_str("-----------------------\n\n");
    out
}

fn format_json(stats: &RunStats, elapsed: Duration, pretty: bool) -> String {
    let record = SummaryRecord {
        elapsed_seconds: elapsed.as_secs_f64(),
        stats,
    };
    if pretty {
        serde_json::to_string_pretty(&record).expect("JSON serialization failed")
    } else {
        serde_json::to_string(&record).expect("JSON serialization failed")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_summary_without_errors() {
        let stats = RunStats {
            directories: 2,
            files: 5,
            text_files: 4,
            binary_files: 1,
            symlinks: 1,
            ..Default::default()
        };
        let out = format_summary(&stats, Duration::from_millis(1250), SummaryFormat::Text, false);
        assert!(out.contains("--- Processing Summary ---"));
        assert!(out.contains("  Total time taken: 1.25 seconds\n"));
        assert!(out.contains("  Directories processed: 2\n"));
        assert!(out.contains("    - Text files read: 4\n"));
        assert!(out.contains("--- No Errors ---"));
        assert!(!out.contains("--- Errors ---\n"));
    }

    #[test]
    fn text_summary_with_errors() {
        let stats = RunStats {
            files: 3,
            unicode_errors: 2,
            read_errors: 1,
            ..Default::default()
        };
        let out = format_summary(&stats, Duration::from_secs(3), SummaryFormat::Text, false);
        assert!(out.contains("--- Errors ---"));
        assert!(out.contains("  Unicode decode errors: 2\n"));
        assert!(out.contains("  File read errors: 1\n"));
        assert!(!out.contains("--- No Errors ---"));
    }

    #[test]
    fn json_summary_round_trips() {
        let stats = RunStats {
            directories: 1,
            files: 2,
            text_files: 2,
            ..Default::default()
        };
        let out = format_summary(&stats, Duration::from_millis(500), SummaryFormat::Json, false);
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["elapsed_seconds"], 0.5);
        assert_eq!(value["stats"]["files"], 2);
        assert_eq!(value["stats"]["directories"], 1);
    }
}
