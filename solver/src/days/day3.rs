//! Day 3: count trees hit while descending a repeating grid.

use std::path::Path;

use anyhow::{Result, bail};

use crate::days::{Answer, Solver};
use crate::io::input;

/// Slopes surveyed by part 2, as (right, down).
const SLOPES: [(usize, usize); 5] = [(1, 1), (3, 1), (5, 1), (7, 1), (1, 2)];

#[derive(Debug)]
pub struct Day3 {
    rows: Vec<Vec<bool>>,
    width: usize,
}

impl Day3 {
    pub fn load(inputs_dir: &Path) -> Result<Self> {
        let lines = input::read_lines(&input::day_input_path(inputs_dir, 3))?;
        Self::from_lines(&lines)
    }

    pub fn from_lines(lines: &[String]) -> Result<Self> {
        let mut rows = Vec::new();
        let mut width = 0;
        for (idx, line) in lines.iter().enumerate() {
            if line.is_empty() {
                continue;
            }
            let mut row = Vec::with_capacity(line.len());
            for c in line.chars() {
                match c {
                    '#' => row.push(true),
                    '.' => row.push(false),
                    other => bail!("unexpected character {other:?} at line {}", idx + 1),
                }
            }
            if width == 0 {
                width = row.len();
            } else if row.len() != width {
                bail!("ragged grid line {} (expected width {width})", idx + 1);
            }
            rows.push(row);
        }
        if rows.is_empty() {
            bail!("empty grid");
        }
        Ok(Self { rows, width })
    }

    /// Trees hit descending from the top-left corner, wrapping horizontally.
    fn trees_on_slope(&self, right: usize, down: usize) -> i64 {
        let mut x = 0;
        let mut count = 0;
        for row in self.rows.iter().step_by(down) {
            if row[x % self.width] {
                count += 1;
            }
            x += right;
        }
        count
    }
}

impl Solver for Day3 {
    fn name(&self) -> &'static str {
        "day3"
    }

    fn part1(&self) -> Result<Answer> {
        Ok(Answer::Int(self.trees_on_slope(3, 1)))
    }

    fn part2(&self) -> Result<Answer> {
        let product = SLOPES
            .iter()
            .map(|&(right, down)| self.trees_on_slope(right, down))
            .product();
        Ok(Answer::Int(product))
    }
}
