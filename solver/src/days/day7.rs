//! Day 7: containment queries over a directed graph of bag rules.

use std::collections::HashMap;
use std::path::Path;

use anyhow::{Context, Result, anyhow};
use regex::Regex;

use crate::days::{Answer, Solver};
use crate::io::input;

const TARGET_BAG: &str = "shiny gold";

#[derive(Debug)]
pub struct Day7 {
    /// Bag color to its direct contents as (count, color) pairs. A bag that
    /// contains no other bags maps to an empty list.
    rules: HashMap<String, Vec<(i64, String)>>,
}

impl Day7 {
    pub fn load(inputs_dir: &Path) -> Result<Self> {
        let lines = input::read_lines(&input::day_input_path(inputs_dir, 7))?;
        Self::from_lines(&lines)
    }

    pub fn from_lines(lines: &[String]) -> Result<Self> {
        let subject = Regex::new(r"^([a-z]+ [a-z]+) bags contain")
            .context("compile subject pattern")?;
        let content =
            Regex::new(r"(\d+) ([a-z]+ [a-z]+) bags?").context("compile content pattern")?;

        let mut rules = HashMap::new();
        for line in lines.iter().filter(|line| !line.is_empty()) {
            let caps = subject
                .captures(line)
                .ok_or_else(|| anyhow!("malformed bag rule {line:?}"))?;
            let color = caps[1].to_string();
            let contents = content
                .captures_iter(line)
                .map(|caps| {
                    let count: i64 = caps[1]
                        .parse()
                        .with_context(|| format!("bag count in {line:?}"))?;
                    Ok((count, caps[2].to_string()))
                })
                .collect::<Result<Vec<_>>>()?;
            rules.insert(color, contents);
        }
        Ok(Self { rules })
    }

    fn contents_of(&self, color: &str) -> Result<&[(i64, String)]> {
        self.rules
            .get(color)
            .map(Vec::as_slice)
            .ok_or_else(|| anyhow!("unknown bag color {color:?}"))
    }

    /// Whether `color` transitively contains the target bag.
    fn contains_target(&self, color: &str) -> Result<bool> {
        for (_, inner) in self.contents_of(color)? {
            if inner == TARGET_BAG || self.contains_target(inner)? {
                return Ok(true);
            }
        }
        Ok(false)
    }

    /// Total number of bags inside one bag of `color`.
    fn count_inside(&self, color: &str) -> Result<i64> {
        let mut total = 0;
        for (count, inner) in self.contents_of(color)? {
            total += count + count * self.count_inside(inner)?;
        }
        Ok(total)
    }
}

impl Solver for Day7 {
    fn name(&self) -> &'static str {
        "day7"
    }

    fn part1(&self) -> Result<Answer> {
        let mut count = 0;
        for color in self.rules.keys() {
            if self.contains_target(color)? {
                count += 1;
            }
        }
        Ok(Answer::Int(count))
    }

    fn part2(&self) -> Result<Answer> {
        Ok(Answer::Int(self.count_inside(TARGET_BAG)?))
    }
}
