//! Day 5: decode binary-partition seat codes and find the one empty seat.

use std::path::Path;

use anyhow::{Result, bail};

use crate::days::{Answer, Solver};
use crate::io::input;

#[derive(Debug)]
pub struct Day5 {
    /// Seat ids sorted ascending.
    seat_ids: Vec<i64>,
}

impl Day5 {
    pub fn load(inputs_dir: &Path) -> Result<Self> {
        let lines = input::read_lines(&input::day_input_path(inputs_dir, 5))?;
        Self::from_lines(&lines)
    }

    pub fn from_lines(lines: &[String]) -> Result<Self> {
        let mut seat_ids = lines
            .iter()
            .filter(|line| !line.is_empty())
            .map(|line| decode_seat_id(line))
            .collect::<Result<Vec<i64>>>()?;
        seat_ids.sort_unstable();
        Ok(Self { seat_ids })
    }
}

/// Seat id = row * 8 + column, with `F`/`L` as 0 and `B`/`R` as 1 over a
/// seven-bit row and three-bit column.
fn decode_seat_id(code: &str) -> Result<i64> {
    if code.len() != 10 {
        bail!("seat code {code:?} must be 10 characters");
    }
    let mut row = 0i64;
    let mut col = 0i64;
    for (idx, c) in code.chars().enumerate() {
        let bit = match c {
            'F' | 'L' => 0,
            'B' | 'R' => 1,
            other => bail!("unexpected character {other:?} in seat code {code:?}"),
        };
        if idx < 7 {
            row = row * 2 + bit;
        } else {
            col = col * 2 + bit;
        }
    }
    Ok(row * 8 + col)
}

impl Solver for Day5 {
    fn name(&self) -> &'static str {
        "day5"
    }

    fn part1(&self) -> Result<Answer> {
        match self.seat_ids.last() {
            Some(&id) => Ok(Answer::Int(id)),
            None => bail!("no seat codes in input"),
        }
    }

    /// The one id missing from the otherwise contiguous occupied run.
    fn part2(&self) -> Result<Answer> {
        let mut last_seat = 0;
        for &id in &self.seat_ids {
            if last_seat > 0 && id != last_seat + 1 {
                return Ok(Answer::Int(id - 1));
            }
            last_seat = id;
        }
        bail!("no gap in the seat id sequence");
    }
}
