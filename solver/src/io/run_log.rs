//! Run log persistence: one CSV row per day plus a meta stamp.
//!
//! The CSV is the product artifact described by the log header below; it is
//! truncated and rewritten on every run, never appended across runs. The
//! `meta.json` beside it records when the run happened.

use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::debug;

use crate::harness::{RunReport, millis};

/// Header row of the tabular run log.
pub const LOG_HEADER: &str = "day,total_time,result1,time1,result2,time2";

/// Run-level metadata persisted beside the CSV.
#[derive(Debug, Clone, Serialize)]
pub struct RunMeta {
    pub started_at: String,
    pub finished_at: String,
    pub duration_ms: f64,
    pub days: usize,
}

impl RunMeta {
    pub fn from_report(report: &RunReport) -> Self {
        Self {
            started_at: report.started_at.to_rfc3339(),
            finished_at: report.finished_at.to_rfc3339(),
            duration_ms: report.total_ms(),
            days: report.days.len(),
        }
    }
}

/// Write the CSV log at `log_path` and a `meta.json` beside it.
pub fn persist(log_path: &Path, report: &RunReport) -> Result<()> {
    write_csv(log_path, report)?;
    let meta_path = log_path.with_file_name("meta.json");
    write_meta(&meta_path, &RunMeta::from_report(report))?;
    debug!(log = %log_path.display(), days = report.days.len(), "run log written");
    Ok(())
}

fn write_csv(path: &Path, report: &RunReport) -> Result<()> {
    let mut buf = String::from(LOG_HEADER);
    buf.push('\n');
    for record in &report.days {
        // Values never contain commas: day ids are fixed and times/answers
        // are numeric.
        let _ = writeln!(
            buf,
            "{},{:.3},{},{:.3},{},{:.3}",
            record.day,
            millis(record.total()),
            record.part1.value,
            millis(record.part1.duration),
            record.part2.value,
            millis(record.part2.duration),
        );
    }
    fs::write(path, buf).with_context(|| format!("write run log {}", path.display()))
}

fn write_meta(path: &Path, meta: &RunMeta) -> Result<()> {
    let mut buf = serde_json::to_string_pretty(meta).context("serialize run meta")?;
    buf.push('\n');
    fs::write(path, buf).with_context(|| format!("write meta {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    use chrono::Utc;

    use crate::days::Answer;
    use crate::harness::{DayRecord, TimedAnswer};

    fn report(days: Vec<DayRecord>) -> RunReport {
        let now = Utc::now();
        RunReport {
            started_at: now,
            finished_at: now,
            days,
        }
    }

    fn record(day: &'static str, part1: i64, part2: i64) -> DayRecord {
        DayRecord {
            day,
            part1: TimedAnswer {
                value: Answer::Int(part1),
                duration: Duration::from_micros(1500),
            },
            part2: TimedAnswer {
                value: Answer::Int(part2),
                duration: Duration::from_micros(500),
            },
        }
    }

    #[test]
    fn writes_header_and_one_row_per_day() {
        let temp = tempfile::tempdir().expect("tempdir");
        let log_path = temp.path().join("results.csv");

        persist(&log_path, &report(vec![record("day1", 514_579, 241_861_950)]))
            .expect("persist");

        let contents = fs::read_to_string(&log_path).expect("read");
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], LOG_HEADER);
        assert_eq!(lines[1], "day1,2.000,514579,1.500,241861950,0.500");
    }

    #[test]
    fn rewriting_truncates_the_previous_run() {
        let temp = tempfile::tempdir().expect("tempdir");
        let log_path = temp.path().join("results.csv");

        persist(
            &log_path,
            &report(vec![record("day1", 1, 2), record("day2", 3, 4)]),
        )
        .expect("first run");
        persist(&log_path, &report(vec![record("day1", 1, 2)])).expect("second run");

        let contents = fs::read_to_string(&log_path).expect("read");
        assert_eq!(contents.lines().count(), 2);
    }

    #[test]
    fn meta_stamp_lands_beside_the_log() {
        let temp = tempfile::tempdir().expect("tempdir");
        let log_path = temp.path().join("results.csv");

        persist(&log_path, &report(vec![record("day1", 1, 2)])).expect("persist");

        let meta = fs::read_to_string(temp.path().join("meta.json")).expect("meta");
        assert!(meta.contains("\"days\": 1"));
        assert!(meta.contains("started_at"));
    }
}
