//! Per-day puzzle solvers.
//!
//! Each day owns an immutable structure parsed once from its input document;
//! `part1`/`part2` are pure read-only queries over it. Days never share
//! state, so any subset of the catalogue can be constructed and run in
//! isolation. Parsing failures surface from the constructors and abort the
//! run before any timing starts.

mod day1;
mod day2;
mod day3;
mod day4;
mod day5;
mod day6;
mod day7;
mod day8;

use std::fmt;
use std::path::Path;

use anyhow::{Result, bail};

/// Number of days in the catalogue.
pub const DAY_COUNT: usize = 8;

/// A single puzzle answer. Every part of every day produces one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Answer {
    Int(i64),
    Text(String),
}

impl fmt::Display for Answer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Answer::Int(value) => write!(f, "{value}"),
            Answer::Text(value) => write!(f, "{value}"),
        }
    }
}

impl From<i64> for Answer {
    fn from(value: i64) -> Self {
        Answer::Int(value)
    }
}

impl From<&str> for Answer {
    fn from(value: &str) -> Self {
        Answer::Text(value.to_string())
    }
}

/// One day of the catalogue: a parsed input plus two pure queries.
pub trait Solver: fmt::Debug {
    /// Stable day identifier, e.g. `day3`.
    fn name(&self) -> &'static str;
    fn part1(&self) -> Result<Answer>;
    fn part2(&self) -> Result<Answer>;
}

/// Day identifiers in catalogue order.
pub fn day_names() -> impl Iterator<Item = String> {
    (1..=DAY_COUNT).map(|day| format!("day{day}"))
}

/// Construct one day's solver, reading its input from `inputs_dir`.
pub fn build_day(day: usize, inputs_dir: &Path) -> Result<Box<dyn Solver>> {
    let solver: Box<dyn Solver> = match day {
        1 => Box::new(day1::Day1::load(inputs_dir)?),
        2 => Box::new(day2::Day2::load(inputs_dir)?),
        3 => Box::new(day3::Day3::load(inputs_dir)?),
        4 => Box::new(day4::Day4::load(inputs_dir)?),
        5 => Box::new(day5::Day5::load(inputs_dir)?),
        6 => Box::new(day6::Day6::load(inputs_dir)?),
        7 => Box::new(day7::Day7::load(inputs_dir)?),
        8 => Box::new(day8::Day8::load(inputs_dir)?),
        other => bail!("unknown day: day{other}"),
    };
    Ok(solver)
}

/// Construct the full catalogue in day order.
pub fn catalogue(inputs_dir: &Path) -> Result<Vec<Box<dyn Solver>>> {
    (1..=DAY_COUNT).map(|day| build_day(day, inputs_dir)).collect()
}
