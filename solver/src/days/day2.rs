//! Day 2: count passwords satisfying their declared policies.

use std::path::Path;

use anyhow::{Context, Result, anyhow, bail};
use regex::Regex;

use crate::days::{Answer, Solver};
use crate::io::input;

/// One `N-M c: password` row.
#[derive(Debug)]
struct Policy {
    min: usize,
    max: usize,
    letter: char,
    password: String,
}

#[derive(Debug)]
pub struct Day2 {
    policies: Vec<Policy>,
}

impl Day2 {
    pub fn load(inputs_dir: &Path) -> Result<Self> {
        let lines = input::read_lines(&input::day_input_path(inputs_dir, 2))?;
        Self::from_lines(&lines)
    }

    pub fn from_lines(lines: &[String]) -> Result<Self> {
        let pattern =
            Regex::new(r"^(\d+)-(\d+) (\w): (\w+)$").context("compile policy pattern")?;
        let policies = lines
            .iter()
            .filter(|line| !line.is_empty())
            .map(|line| parse_policy(&pattern, line))
            .collect::<Result<_>>()?;
        Ok(Self { policies })
    }
}

fn parse_policy(pattern: &Regex, line: &str) -> Result<Policy> {
    let caps = pattern
        .captures(line)
        .ok_or_else(|| anyhow!("malformed policy line {line:?}"))?;
    let min: usize = caps[1].parse().with_context(|| format!("min in {line:?}"))?;
    let max: usize = caps[2].parse().with_context(|| format!("max in {line:?}"))?;
    // Positions are 1-indexed in the second interpretation; zero is nonsense
    // under both.
    if min == 0 || max < min {
        bail!("policy range {min}-{max} is invalid in {line:?}");
    }
    let letter = caps[3]
        .chars()
        .next()
        .ok_or_else(|| anyhow!("missing letter in {line:?}"))?;
    Ok(Policy {
        min,
        max,
        letter,
        password: caps[4].to_string(),
    })
}

impl Solver for Day2 {
    fn name(&self) -> &'static str {
        "day2"
    }

    /// Policies read as an occurrence range for the letter.
    fn part1(&self) -> Result<Answer> {
        let count = self
            .policies
            .iter()
            .filter(|policy| {
                let occurrences = policy
                    .password
                    .chars()
                    .filter(|&c| c == policy.letter)
                    .count();
                (policy.min..=policy.max).contains(&occurrences)
            })
            .count();
        Ok(Answer::Int(count as i64))
    }

    /// Policies read as two 1-indexed positions, exactly one holding the letter.
    fn part2(&self) -> Result<Answer> {
        let mut count = 0;
        for policy in &self.policies {
            let chars: Vec<char> = policy.password.chars().collect();
            let first = chars
                .get(policy.min - 1)
                .ok_or_else(|| anyhow!("position {} out of range", policy.min))?;
            let second = chars
                .get(policy.max - 1)
                .ok_or_else(|| anyhow!("position {} out of range", policy.max))?;
            if (*first == policy.letter) != (*second == policy.letter) {
                count += 1;
            }
        }
        Ok(Answer::Int(count))
    }
}
