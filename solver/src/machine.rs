//! Boot-code machine: a three-op instruction set executed until the program
//! falls off either end or revisits an instruction.
//!
//! The machine is pure and I/O-free. [`run`] executes a program to a [`Halt`]
//! and never fails; malformed programs are rejected earlier by
//! [`parse_program`]. [`find_fix`] searches for the single `jmp`/`nop` flip
//! that turns a cyclic program into a normally terminating one.

use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use anyhow::{Context, Error, Result, anyhow, bail};

/// Operation kind for one instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpKind {
    /// Add the operand to the accumulator, advance by one.
    Acc,
    /// Advance by the operand.
    Jmp,
    /// Advance by one; the operand is carried but ignored.
    Nop,
}

impl OpKind {
    fn mnemonic(self) -> &'static str {
        match self {
            OpKind::Acc => "acc",
            OpKind::Jmp => "jmp",
            OpKind::Nop => "nop",
        }
    }
}

/// One parsed instruction: `<mnemonic> <signed operand>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Instruction {
    pub kind: OpKind,
    pub operand: i64,
}

impl FromStr for Instruction {
    type Err = Error;

    fn from_str(text: &str) -> Result<Self> {
        let (mnemonic, operand) = text
            .split_once(' ')
            .ok_or_else(|| anyhow!("missing operand in {text:?}"))?;
        let kind = match mnemonic {
            "acc" => OpKind::Acc,
            "jmp" => OpKind::Jmp,
            "nop" => OpKind::Nop,
            other => bail!("unknown operation {other:?}"),
        };
        // Operands always carry an explicit sign so parse/display round-trips.
        if !operand.starts_with(['+', '-']) {
            bail!("operand must be signed in {text:?}");
        }
        let operand: i64 = operand
            .parse()
            .with_context(|| format!("parse operand in {text:?}"))?;
        Ok(Self { kind, operand })
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {:+}", self.kind.mnemonic(), self.operand)
    }
}

/// Parse one instruction per line. Line numbers in errors are 1-indexed.
pub fn parse_program(lines: &[String]) -> Result<Vec<Instruction>> {
    lines
        .iter()
        .enumerate()
        .map(|(idx, line)| {
            line.parse()
                .with_context(|| format!("instruction at line {}", idx + 1))
        })
        .collect()
}

/// How a run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Termination {
    /// The instruction pointer left `[0, len)`.
    Normal,
    /// An instruction pointer was about to execute a second time.
    Cycle,
}

/// Final machine state of one run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Halt {
    pub accumulator: i64,
    pub termination: Termination,
}

impl Halt {
    pub fn terminated_normally(&self) -> bool {
        self.termination == Termination::Normal
    }
}

/// Execute `program` from a fresh state until it halts.
///
/// The cycle check happens before the candidate instruction executes, so a
/// `jmp +0` is detected on its second visit, not its first. A pointer outside
/// `[0, len)` in either direction is a normal termination; the empty program
/// terminates normally at once with accumulator 0.
pub fn run(program: &[Instruction]) -> Halt {
    let mut pointer: i64 = 0;
    let mut accumulator: i64 = 0;
    let mut visited: HashSet<i64> = HashSet::new();

    loop {
        if pointer < 0 || pointer >= program.len() as i64 {
            return Halt {
                accumulator,
                termination: Termination::Normal,
            };
        }
        if !visited.insert(pointer) {
            return Halt {
                accumulator,
                termination: Termination::Cycle,
            };
        }
        let instruction = program[pointer as usize];
        match instruction.kind {
            OpKind::Acc => {
                accumulator += instruction.operand;
                pointer += 1;
            }
            OpKind::Jmp => pointer += instruction.operand,
            OpKind::Nop => pointer += 1,
        }
    }
}

/// Search for the single `jmp`/`nop` flip that makes `program` terminate
/// normally, and return that run's accumulator.
///
/// Indices are tried in ascending order and the first normal termination
/// wins. `acc` instructions are never flipped. Each trial runs an independent
/// copy of the program. Returns `None` when no flip terminates normally;
/// callers must not conflate that with a genuine zero accumulator.
pub fn find_fix(program: &[Instruction]) -> Option<i64> {
    for (index, instruction) in program.iter().enumerate() {
        let flipped = match instruction.kind {
            OpKind::Acc => continue,
            OpKind::Jmp => OpKind::Nop,
            OpKind::Nop => OpKind::Jmp,
        };
        let mut trial = program.to_vec();
        trial[index].kind = flipped;
        let halt = run(&trial);
        if halt.terminated_normally() {
            return Some(halt.accumulator);
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn program(text: &[&str]) -> Vec<Instruction> {
        let lines: Vec<String> = text.iter().map(|line| (*line).to_string()).collect();
        parse_program(&lines).expect("parse program")
    }

    /// The worked example shared by `run` and `find_fix` tests.
    fn worked_example() -> Vec<Instruction> {
        program(&[
            "nop +0", "acc +1", "jmp +4", "acc +3", "jmp -3", "acc -99", "acc +1", "jmp -4",
            "acc +6",
        ])
    }

    #[test]
    fn all_acc_program_terminates_with_operand_sum() {
        let halt = run(&program(&["acc +1", "acc +2", "acc -4"]));
        assert_eq!(
            halt,
            Halt {
                accumulator: -1,
                termination: Termination::Normal,
            }
        );
    }

    #[test]
    fn empty_program_terminates_normally() {
        let halt = run(&[]);
        assert_eq!(
            halt,
            Halt {
                accumulator: 0,
                termination: Termination::Normal,
            }
        );
    }

    #[test]
    fn self_jump_cycles_on_second_visit() {
        let halt = run(&program(&["jmp +0"]));
        assert_eq!(halt.termination, Termination::Cycle);
        assert_eq!(halt.accumulator, 0);
    }

    #[test]
    fn backward_jump_past_start_terminates_normally() {
        let halt = run(&program(&["acc +7", "jmp -5"]));
        assert_eq!(
            halt,
            Halt {
                accumulator: 7,
                termination: Termination::Normal,
            }
        );
    }

    #[test]
    fn worked_example_cycles_with_accumulator_five() {
        let halt = run(&worked_example());
        assert_eq!(
            halt,
            Halt {
                accumulator: 5,
                termination: Termination::Cycle,
            }
        );
    }

    #[test]
    fn worked_example_fix_flips_index_seven() {
        assert_eq!(find_fix(&worked_example()), Some(8));
    }

    #[test]
    fn find_fix_is_idempotent() {
        let example = worked_example();
        assert_eq!(find_fix(&example), find_fix(&example));
    }

    #[test]
    fn find_fix_breaks_ties_by_lowest_index() {
        // Flipping index 1, 3, or 5 each terminates normally, with
        // accumulators 1, 11, and 111. The lowest index must win.
        let example = program(&[
            "acc +1", "nop +5", "acc +10", "nop +3", "acc +100", "jmp -5",
        ]);
        assert_eq!(find_fix(&example), Some(1));
    }

    #[test]
    fn find_fix_returns_none_when_no_flip_terminates() {
        // Every single flip still revisits an instruction: flipping either
        // reachable jmp lands inside the two-instruction loop formed by the
        // others, and the rest are unreachable.
        let example = program(&["jmp +2", "jmp +2", "jmp -2", "jmp -2"]);
        assert_eq!(find_fix(&example), None);
    }

    #[test]
    fn find_fix_skips_acc_instructions() {
        // Nothing is eligible in an all-acc program, so no fix exists even
        // though the unmodified program terminates normally.
        let example = program(&["acc +1", "acc +2"]);
        assert_eq!(find_fix(&example), None);
    }

    #[test]
    fn instruction_text_round_trips() {
        for text in ["acc +1", "jmp -4", "nop +0", "acc -99", "jmp +2147483647"] {
            let instruction: Instruction = text.parse().expect("parse");
            assert_eq!(instruction.to_string(), text);
        }
    }

    #[test]
    fn parse_rejects_unknown_operation() {
        let err = "hlt +1".parse::<Instruction>().expect_err("must fail");
        assert!(err.to_string().contains("unknown operation"));
    }

    #[test]
    fn parse_rejects_unsigned_operand() {
        let err = "acc 1".parse::<Instruction>().expect_err("must fail");
        assert!(err.to_string().contains("signed"));
    }

    #[test]
    fn parse_program_reports_line_number() {
        let lines = vec!["acc +1".to_string(), "bogus".to_string()];
        let err = parse_program(&lines).expect_err("must fail");
        assert!(format!("{err:#}").contains("line 2"));
    }
}
