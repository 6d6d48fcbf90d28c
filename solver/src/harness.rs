//! Sequential timing harness over the day catalogue.
//!
//! Timing is observational only: wall-clock measurement wraps each part call
//! and never affects control flow. The first error from any part aborts the
//! whole run; there are no retries and no partial reports.

use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};

use crate::days::{Answer, Solver};

/// One part's answer with its elapsed wall time.
#[derive(Debug, Clone)]
pub struct TimedAnswer {
    pub value: Answer,
    pub duration: Duration,
}

/// One day's row in the run log.
#[derive(Debug, Clone)]
pub struct DayRecord {
    pub day: &'static str,
    pub part1: TimedAnswer,
    pub part2: TimedAnswer,
}

impl DayRecord {
    pub fn total(&self) -> Duration {
        self.part1.duration + self.part2.duration
    }

    /// Per-day console line, e.g. `day8: part1[0.120ms](5) | part2[0.480ms](8)`.
    pub fn console_line(&self) -> String {
        format!(
            "{}: part1[{:.3}ms]({}) | part2[{:.3}ms]({})",
            self.day,
            millis(self.part1.duration),
            self.part1.value,
            millis(self.part2.duration),
            self.part2.value,
        )
    }
}

/// Outcome of a whole catalogue run.
#[derive(Debug, Clone)]
pub struct RunReport {
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
    pub days: Vec<DayRecord>,
}

impl RunReport {
    pub fn total(&self) -> Duration {
        self.days.iter().map(DayRecord::total).sum()
    }

    pub fn total_ms(&self) -> f64 {
        millis(self.total())
    }
}

/// A duration in fractional milliseconds, the unit all output uses.
pub fn millis(duration: Duration) -> f64 {
    duration.as_secs_f64() * 1000.0
}

/// Run every solver in order, invoking `on_day` with each finished record.
pub fn run_catalogue<F: FnMut(&DayRecord)>(
    solvers: &[Box<dyn Solver>],
    mut on_day: F,
) -> Result<RunReport> {
    let started_at = Utc::now();
    let mut days = Vec::with_capacity(solvers.len());
    for solver in solvers {
        let record =
            run_day(solver.as_ref()).with_context(|| format!("run {}", solver.name()))?;
        on_day(&record);
        days.push(record);
    }
    Ok(RunReport {
        started_at,
        finished_at: Utc::now(),
        days,
    })
}

fn run_day(solver: &dyn Solver) -> Result<DayRecord> {
    let part1 = timed(|| solver.part1()).context("part1")?;
    let part2 = timed(|| solver.part2()).context("part2")?;
    Ok(DayRecord {
        day: solver.name(),
        part1,
        part2,
    })
}

fn timed<F: FnOnce() -> Result<Answer>>(part: F) -> Result<TimedAnswer> {
    let started = Instant::now();
    let value = part()?;
    Ok(TimedAnswer {
        value,
        duration: started.elapsed(),
    })
}
