//! Solver configuration stored in `solver.toml` next to the inputs.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};
use serde::{Deserialize, Serialize};

/// Name of the optional config file looked up in the working directory.
pub const CONFIG_FILE: &str = "solver.toml";

/// Solver configuration (TOML).
///
/// Intended to be edited by humans. Missing fields default to the layout the
/// repository ships with.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct SolverConfig {
    /// Directory holding `dayN.txt` input documents.
    pub inputs_dir: PathBuf,

    /// Where the tabular run log is written. Truncated each run.
    pub log_path: PathBuf,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            inputs_dir: PathBuf::from("inputs"),
            log_path: PathBuf::from("results.csv"),
        }
    }
}

impl SolverConfig {
    pub fn validate(&self) -> Result<()> {
        if self.inputs_dir.as_os_str().is_empty() {
            return Err(anyhow!("inputs_dir must not be empty"));
        }
        if self.log_path.file_name().is_none() {
            return Err(anyhow!("log_path must name a file"));
        }
        Ok(())
    }
}

/// Load config from a TOML file.
///
/// If the file is missing, returns `SolverConfig::default()`.
pub fn load_config(path: &Path) -> Result<SolverConfig> {
    if !path.exists() {
        let cfg = SolverConfig::default();
        cfg.validate()?;
        return Ok(cfg);
    }
    let contents = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg: SolverConfig =
        toml::from_str(&contents).with_context(|| format!("parse {}", path.display()))?;
    cfg.validate()?;
    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_missing_returns_default() {
        let temp = tempfile::tempdir().expect("tempdir");
        let cfg = load_config(&temp.path().join("missing.toml")).expect("load");
        assert_eq!(cfg, SolverConfig::default());
    }

    #[test]
    fn load_reads_overrides() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join(CONFIG_FILE);
        fs::write(&path, "inputs_dir = \"puzzles\"\nlog_path = \"out/run.csv\"\n")
            .expect("write");

        let cfg = load_config(&path).expect("load");
        assert_eq!(cfg.inputs_dir, PathBuf::from("puzzles"));
        assert_eq!(cfg.log_path, PathBuf::from("out/run.csv"));
    }

    #[test]
    fn partial_file_keeps_defaults_for_missing_fields() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join(CONFIG_FILE);
        fs::write(&path, "inputs_dir = \"puzzles\"\n").expect("write");

        let cfg = load_config(&path).expect("load");
        assert_eq!(cfg.inputs_dir, PathBuf::from("puzzles"));
        assert_eq!(cfg.log_path, SolverConfig::default().log_path);
    }

    #[test]
    fn empty_inputs_dir_is_rejected() {
        let cfg = SolverConfig {
            inputs_dir: PathBuf::new(),
            ..SolverConfig::default()
        };
        assert!(cfg.validate().is_err());
    }
}
