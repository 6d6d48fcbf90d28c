//! Day 6: tally declaration answers per blank-line-separated group.

use std::collections::HashSet;
use std::path::Path;

use anyhow::Result;

use crate::days::{Answer, Solver};
use crate::io::input;

#[derive(Debug)]
pub struct Day6 {
    /// One entry per group; each member's answers as one string.
    groups: Vec<Vec<String>>,
}

impl Day6 {
    pub fn load(inputs_dir: &Path) -> Result<Self> {
        let lines = input::read_lines(&input::day_input_path(inputs_dir, 6))?;
        Self::from_lines(&lines)
    }

    pub fn from_lines(lines: &[String]) -> Result<Self> {
        let groups = lines
            .split(|line| line.is_empty())
            .filter(|group| !group.is_empty())
            .map(<[String]>::to_vec)
            .collect();
        Ok(Self { groups })
    }
}

impl Solver for Day6 {
    fn name(&self) -> &'static str {
        "day6"
    }

    /// Sum of per-group counts of questions anyone answered.
    fn part1(&self) -> Result<Answer> {
        let total: usize = self
            .groups
            .iter()
            .map(|group| {
                let union: HashSet<char> =
                    group.iter().flat_map(|member| member.chars()).collect();
                union.len()
            })
            .sum();
        Ok(Answer::Int(total as i64))
    }

    /// Sum of per-group counts of questions everyone answered.
    fn part2(&self) -> Result<Answer> {
        let mut total = 0i64;
        for group in &self.groups {
            let Some((first, rest)) = group.split_first() else {
                continue;
            };
            let mut common: HashSet<char> = first.chars().collect();
            for member in rest {
                let answers: HashSet<char> = member.chars().collect();
                common.retain(|c| answers.contains(c));
            }
            total += common.len() as i64;
        }
        Ok(Answer::Int(total))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::sample_lines;

    fn day() -> Day6 {
        Day6::from_lines(&sample_lines(6)).expect("parse")
    }

    #[test]
    fn part1_sums_group_unions() {
        assert_eq!(day().part1().expect("part1"), Answer::Int(11));
    }

    #[test]
    fn part2_sums_group_intersections() {
        assert_eq!(day().part2().expect("part2"), Answer::Int(6));
    }

    #[test]
    fn duplicate_answers_within_one_member_count_once() {
        let lines = vec!["aab".to_string()];
        let day = Day6::from_lines(&lines).expect("parse");
        assert_eq!(day.part1().expect("part1"), Answer::Int(2));
        assert_eq!(day.part2().expect("part2"), Answer::Int(2));
    }

    #[test]
    fn empty_input_sums_to_zero() {
        let day = Day6::from_lines(&[]).expect("parse");
        assert_eq!(day.part1().expect("part1"), Answer::Int(0));
        assert_eq!(day.part2().expect("part2"), Answer::Int(0));
    }
}
