//! Day 4: validate blank-line-separated field records.
//!
//! Records are `key:value` tokens spread over one or more lines. Part 1 only
//! checks which fields are present; part 2 additionally validates each value.
//! Field kinds are a closed enum so the validation rules are resolved by
//! exhaustive matching.

use std::collections::HashMap;
use std::path::Path;

use anyhow::{Context, Result, anyhow};
use regex::Regex;

use crate::days::{Answer, Solver};
use crate::io::input;

/// The known record fields. `Cid` is the only optional one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum Field {
    Byr,
    Iyr,
    Eyr,
    Hgt,
    Hcl,
    Ecl,
    Pid,
    Cid,
}

impl Field {
    const REQUIRED: [Field; 7] = [
        Field::Byr,
        Field::Iyr,
        Field::Eyr,
        Field::Hgt,
        Field::Hcl,
        Field::Ecl,
        Field::Pid,
    ];

    fn from_key(key: &str) -> Option<Self> {
        match key {
            "byr" => Some(Field::Byr),
            "iyr" => Some(Field::Iyr),
            "eyr" => Some(Field::Eyr),
            "hgt" => Some(Field::Hgt),
            "hcl" => Some(Field::Hcl),
            "ecl" => Some(Field::Ecl),
            "pid" => Some(Field::Pid),
            "cid" => Some(Field::Cid),
            _ => None,
        }
    }

    fn value_is_valid(self, value: &str, rules: &Rules) -> bool {
        match self {
            Field::Byr => year_in_range(value, 1920, 2002),
            Field::Iyr => year_in_range(value, 2010, 2020),
            Field::Eyr => year_in_range(value, 2020, 2030),
            Field::Hgt => height_is_valid(value),
            Field::Hcl => rules.hair_color.is_match(value),
            Field::Ecl => matches!(value, "amb" | "blu" | "brn" | "gry" | "grn" | "hzl" | "oth"),
            Field::Pid => rules.passport_id.is_match(value),
            Field::Cid => true,
        }
    }
}

fn year_in_range(value: &str, min: u32, max: u32) -> bool {
    value.len() == 4
        && value
            .parse::<u32>()
            .is_ok_and(|year| (min..=max).contains(&year))
}

fn height_is_valid(value: &str) -> bool {
    if let Some(cm) = value.strip_suffix("cm") {
        return cm.parse::<u32>().is_ok_and(|h| (150..=193).contains(&h));
    }
    if let Some(inches) = value.strip_suffix("in") {
        return inches.parse::<u32>().is_ok_and(|h| (59..=76).contains(&h));
    }
    false
}

/// Compiled patterns for the fields whose grammar warrants a regex.
#[derive(Debug)]
struct Rules {
    hair_color: Regex,
    passport_id: Regex,
}

#[derive(Debug)]
pub struct Day4 {
    records: Vec<HashMap<Field, String>>,
    rules: Rules,
}

impl Day4 {
    pub fn load(inputs_dir: &Path) -> Result<Self> {
        let lines = input::read_lines(&input::day_input_path(inputs_dir, 4))?;
        Self::from_lines(&lines)
    }

    pub fn from_lines(lines: &[String]) -> Result<Self> {
        let rules = Rules {
            hair_color: Regex::new(r"^#[0-9a-f]{6}$").context("compile hair color pattern")?,
            passport_id: Regex::new(r"^[0-9]{9}$").context("compile id pattern")?,
        };
        let records = lines
            .split(|line| line.is_empty())
            .filter(|record| !record.is_empty())
            .map(parse_record)
            .collect::<Result<_>>()?;
        Ok(Self { records, rules })
    }
}

/// Parse one record's lines into its known fields.
///
/// Unrecognized keys are skipped; a token without `:` is malformed.
fn parse_record(lines: &[String]) -> Result<HashMap<Field, String>> {
    let mut fields = HashMap::new();
    for token in lines.iter().flat_map(|line| line.split_whitespace()) {
        let (key, value) = token
            .split_once(':')
            .ok_or_else(|| anyhow!("malformed field {token:?}"))?;
        if let Some(field) = Field::from_key(key) {
            fields.insert(field, value.to_string());
        }
    }
    Ok(fields)
}

fn has_required_fields(record: &HashMap<Field, String>) -> bool {
    Field::REQUIRED
        .iter()
        .all(|field| record.contains_key(field))
}

impl Solver for Day4 {
    fn name(&self) -> &'static str {
        "day4"
    }

    fn part1(&self) -> Result<Answer> {
        let count = self.records.iter().filter(|r| has_required_fields(r)).count();
        Ok(Answer::Int(count as i64))
    }

    fn part2(&self) -> Result<Answer> {
        let count = self
            .records
            .iter()
            .filter(|record| {
                has_required_fields(record)
                    && record
                        .iter()
                        .all(|(field, value)| field.value_is_valid(value, &self.rules))
            })
            .count();
        Ok(Answer::Int(count as i64))
    }
}
