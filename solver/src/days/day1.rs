//! Day 1: find entries in an expense report that sum to 2020.

use std::collections::HashSet;
use std::path::Path;

use anyhow::{Context, Result, bail};

use crate::days::{Answer, Solver};
use crate::io::input;

const TARGET: i64 = 2020;

#[derive(Debug)]
pub struct Day1 {
    entries: Vec<i64>,
    seen: HashSet<i64>,
}

impl Day1 {
    pub fn load(inputs_dir: &Path) -> Result<Self> {
        let lines = input::read_lines(&input::day_input_path(inputs_dir, 1))?;
        Self::from_lines(&lines)
    }

    pub fn from_lines(lines: &[String]) -> Result<Self> {
        let entries: Vec<i64> = lines
            .iter()
            .filter(|line| !line.is_empty())
            .map(|line| {
                line.parse()
                    .with_context(|| format!("expense entry {line:?}"))
            })
            .collect::<Result<_>>()?;
        let seen = entries.iter().copied().collect();
        Ok(Self { entries, seen })
    }
}

impl Solver for Day1 {
    fn name(&self) -> &'static str {
        "day1"
    }

    fn part1(&self) -> Result<Answer> {
        for &entry in &self.entries {
            let rest = TARGET - entry;
            if self.seen.contains(&rest) {
                return Ok(Answer::Int(entry * rest));
            }
        }
        bail!("no pair of entries sums to {TARGET}");
    }

    fn part2(&self) -> Result<Answer> {
        for &first in &self.entries {
            for &second in &self.entries {
                let rest = TARGET - first - second;
                if self.seen.contains(&rest) {
                    return Ok(Answer::Int(first * second * rest));
                }
            }
        }
        bail!("no triple of entries sums to {TARGET}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::sample_lines;

    fn day() -> Day1 {
        Day1::from_lines(&sample_lines(1)).expect("parse")
    }

    #[test]
    fn part1_multiplies_the_matching_pair() {
        assert_eq!(day().part1().expect("part1"), Answer::Int(514_579));
    }

    #[test]
    fn part2_multiplies_the_matching_triple() {
        assert_eq!(day().part2().expect("part2"), Answer::Int(241_861_950));
    }

    #[test]
    fn non_numeric_entry_is_rejected() {
        let lines = vec!["12".to_string(), "abc".to_string()];
        let err = Day1::from_lines(&lines).expect_err("must fail");
        assert!(format!("{err:#}").contains("abc"));
    }

    #[test]
    fn missing_pair_is_an_error() {
        let lines = vec!["1".to_string(), "2".to_string()];
        let day = Day1::from_lines(&lines).expect("parse");
        assert!(day.part1().is_err());
    }
}
