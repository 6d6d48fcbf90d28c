//! Test-only sample inputs: the published worked example for each day.
//!
//! These are the same documents shipped under `inputs/`, kept here so unit
//! tests can parse them without touching the filesystem and integration
//! tests can materialize a complete workspace in a temp dir.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

const DAY1: &str = "1721\n979\n366\n299\n675\n1456\n";

const DAY2: &str = "1-3 a: abcde\n1-3 b: cdefg\n2-9 c: ccccccccc\n";

const DAY3: &str = "..##.......\n#...#...#..\n.#....#..#.\n..#.#...#.#\n.#...##..#.\n\
                    ..#.##.....\n.#.#.#....#\n.#........#\n#.##...#...\n#...##....#\n\
                    .#..#...#.#\n";

const DAY4: &str = "ecl:gry pid:860033327 eyr:2020 hcl:#fffffd\n\
                    byr:1937 iyr:2017 cid:147 hgt:183cm\n\
                    \n\
                    iyr:2013 ecl:amb cid:350 eyr:2023 pid:028048884\n\
                    hcl:#cfa07d byr:1929\n\
                    \n\
                    hcl:#ae17e1 iyr:2013\n\
                    eyr:2024\n\
                    ecl:brn pid:760753108 byr:1931\n\
                    hgt:179cm\n\
                    \n\
                    hcl:#cfa07d eyr:2025 pid:166559648\n\
                    iyr:2011 ecl:brn hgt:59in\n";

const DAY5: &str = "FBFBBFFRLR\nBFFFBBFRRR\nFFFBBBFRRR\nBBFFBBFRLL\n";

const DAY6: &str = "abc\n\na\nb\nc\n\nab\nac\n\na\na\na\na\n\nb\n";

const DAY7: &str = "light red bags contain 1 bright white bag, 2 muted yellow bags.\n\
                    dark orange bags contain 3 bright white bags, 4 muted yellow bags.\n\
                    bright white bags contain 1 shiny gold bag.\n\
                    muted yellow bags contain 2 shiny gold bags, 9 faded blue bags.\n\
                    shiny gold bags contain 1 dark olive bag, 2 vibrant plum bags.\n\
                    dark olive bags contain 3 faded blue bags, 4 dotted black bags.\n\
                    vibrant plum bags contain 5 faded blue bags, 6 dotted black bags.\n\
                    faded blue bags contain no other bags.\n\
                    dotted black bags contain no other bags.\n";

const DAY8: &str = "nop +0\nacc +1\njmp +4\nacc +3\njmp -3\nacc -99\nacc +1\njmp -4\nacc +6\n";

const SAMPLES: [&str; 8] = [DAY1, DAY2, DAY3, DAY4, DAY5, DAY6, DAY7, DAY8];

/// The sample input for `day` as trimmed lines, as the input loader would
/// produce them.
pub fn sample_lines(day: usize) -> Vec<String> {
    SAMPLES[day - 1]
        .lines()
        .map(|line| line.trim().to_string())
        .collect()
}

/// Write all eight sample documents as `dayN.txt` under `dir`.
pub fn write_sample_inputs(dir: &Path) -> Result<()> {
    fs::create_dir_all(dir).with_context(|| format!("create inputs dir {}", dir.display()))?;
    for (idx, sample) in SAMPLES.iter().enumerate() {
        let path = dir.join(format!("day{}.txt", idx + 1));
        fs::write(&path, sample).with_context(|| format!("write {}", path.display()))?;
    }
    Ok(())
}

/// Create a temp workspace with an `inputs/` directory holding every sample.
#[cfg(feature = "test-support")]
pub fn sample_workspace() -> Result<tempfile::TempDir> {
    let temp = tempfile::tempdir().context("tempdir")?;
    write_sample_inputs(&temp.path().join("inputs"))?;
    Ok(temp)
}
