//! Day 8: boot-code diagnostics via the [`machine`](crate::machine).

use std::path::Path;

use anyhow::{Result, anyhow};

use crate::days::{Answer, Solver};
use crate::io::input;
use crate::machine::{self, Instruction};

#[derive(Debug)]
pub struct Day8 {
    program: Vec<Instruction>,
}

impl Day8 {
    pub fn load(inputs_dir: &Path) -> Result<Self> {
        let lines = input::read_lines(&input::day_input_path(inputs_dir, 8))?;
        Self::from_lines(&lines)
    }

    pub fn from_lines(lines: &[String]) -> Result<Self> {
        let program = machine::parse_program(lines)?;
        Ok(Self { program })
    }
}

impl Solver for Day8 {
    fn name(&self) -> &'static str {
        "day8"
    }

    /// Accumulator value when the unmodified program halts (for the real
    /// input, at cycle detection).
    fn part1(&self) -> Result<Answer> {
        Ok(Answer::Int(machine::run(&self.program).accumulator))
    }

    /// Accumulator after the single jmp/nop repair that lets the program
    /// terminate normally.
    fn part2(&self) -> Result<Answer> {
        machine::find_fix(&self.program)
            .map(Answer::Int)
            .ok_or_else(|| anyhow!("no single jmp/nop flip terminates normally"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::sample_lines;

    fn day() -> Day8 {
        Day8::from_lines(&sample_lines(8)).expect("parse")
    }

    #[test]
    fn part1_is_the_accumulator_at_cycle_detection() {
        assert_eq!(day().part1().expect("part1"), Answer::Int(5));
    }

    #[test]
    fn part2_is_the_repaired_accumulator() {
        assert_eq!(day().part2().expect("part2"), Answer::Int(8));
    }

    #[test]
    fn unfixable_program_is_an_error() {
        let lines: Vec<String> = ["jmp +2", "jmp +2", "jmp -2", "jmp -2"]
            .iter()
            .map(|s| (*s).to_string())
            .collect();
        let day = Day8::from_lines(&lines).expect("parse");
        assert!(day.part2().is_err());
    }

    #[test]
    fn malformed_instruction_is_rejected_at_construction() {
        let lines = vec!["acc +1".to_string(), "hlt +0".to_string()];
        assert!(Day8::from_lines(&lines).is_err());
    }
}
