//! Timed runner for the per-day puzzle catalogue.
//!
//! `solver` with no arguments runs every day against `inputs/`, prints one
//! line per day, and rewrites the tabular run log. `run --day N` limits the
//! run to a single day; `list` prints the catalogue.

use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::debug;

use solver::days;
use solver::exit_codes;
use solver::harness::run_catalogue;
use solver::io::config::{self, SolverConfig};
use solver::io::run_log;
use solver::logging;

#[derive(Parser)]
#[command(
    name = "solver",
    version,
    about = "Timed runner for the per-day puzzle catalogue"
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Run the full catalogue, or a single day.
    Run {
        /// Run only this day number.
        #[arg(long)]
        day: Option<usize>,
        /// Directory holding `dayN.txt` inputs (overrides solver.toml).
        #[arg(long)]
        inputs: Option<PathBuf>,
        /// Run log path (overrides solver.toml).
        #[arg(long)]
        log: Option<PathBuf>,
    },
    /// Print day identifiers in catalogue order.
    List,
}

fn main() {
    logging::init();
    match dispatch(Cli::parse()) {
        Ok(code) => std::process::exit(code),
        Err(err) => {
            eprintln!("{:#}", err);
            std::process::exit(exit_codes::INVALID);
        }
    }
}

fn dispatch(cli: Cli) -> Result<i32> {
    let command = cli.command.unwrap_or(Command::Run {
        day: None,
        inputs: None,
        log: None,
    });
    match command {
        Command::Run { day, inputs, log } => cmd_run(day, inputs, log),
        Command::List => cmd_list(),
    }
}

fn cmd_list() -> Result<i32> {
    for name in days::day_names() {
        println!("{name}");
    }
    Ok(exit_codes::OK)
}

fn cmd_run(day: Option<usize>, inputs: Option<PathBuf>, log: Option<PathBuf>) -> Result<i32> {
    let cfg = load_effective_config(inputs, log)?;

    let solvers = match day {
        Some(n) if !(1..=days::DAY_COUNT).contains(&n) => {
            eprintln!("unknown day: day{n} (catalogue has day1..day{})", days::DAY_COUNT);
            return Ok(exit_codes::UNKNOWN_DAY);
        }
        Some(n) => vec![days::build_day(n, &cfg.inputs_dir)?],
        None => days::catalogue(&cfg.inputs_dir)?,
    };
    debug!(days = solvers.len(), inputs = %cfg.inputs_dir.display(), "catalogue built");

    let report = run_catalogue(&solvers, |record| println!("{}", record.console_line()))?;
    run_log::persist(&cfg.log_path, &report)?;
    println!("run done! total time: {:.3}ms", report.total_ms());
    Ok(exit_codes::OK)
}

fn load_effective_config(
    inputs: Option<PathBuf>,
    log: Option<PathBuf>,
) -> Result<SolverConfig> {
    let mut cfg = config::load_config(Path::new(config::CONFIG_FILE))?;
    if let Some(dir) = inputs {
        cfg.inputs_dir = dir;
    }
    if let Some(path) = log {
        cfg.log_path = path;
    }
    cfg.validate()?;
    Ok(cfg)
}
