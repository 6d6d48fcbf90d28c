//! Input document loading.
//!
//! Every day reads one newline-delimited UTF-8 file. Lines are trimmed on
//! load; interior blank lines are preserved because several day grammars use
//! them as record separators.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

/// Path of the input document for `day` under `inputs_dir`.
pub fn day_input_path(inputs_dir: &Path, day: usize) -> PathBuf {
    inputs_dir.join(format!("day{day}.txt"))
}

/// Read a whole input document into trimmed lines.
pub fn read_lines(path: &Path) -> Result<Vec<String>> {
    let contents =
        fs::read_to_string(path).with_context(|| format!("read input {}", path.display()))?;
    Ok(contents.lines().map(|line| line.trim().to_string()).collect())
}
