//! CLI entry point for the sliding-tile solver.
//!
//! Usage:
//!   slider-solver solve <board.txt> [options]
//!   slider-solver solve --stdin [options]
//!
//! Options:
//!   --heuristic <name>      manhattan (default) or hamming
//!   --closed-set            Skip boards already expanded
//!   --max-expansions <n>    Give up after n expansions
//!   --json                  Print the result as JSON
//!
//! Logging is controlled with `RUST_LOG` (e.g. `RUST_LOG=debug`).

use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand, ValueEnum};
use log::{debug, error};
use serde::{Deserialize, Serialize};

use slider_solver::{parse_any, Heuristic, Solver, SolverConfig, Verdict};

#[derive(Parser)]
#[command(name = "slider-solver")]
#[command(about = "Dual-track A* solver for N×N sliding-tile puzzles")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Solve a board, or report that no solution exists
    Solve {
        /// Path to the board file (use --stdin to read from stdin)
        #[arg(value_name = "FILE")]
        file: Option<PathBuf>,

        /// Read the board from stdin instead of a file
        #[arg(long)]
        stdin: bool,

        /// Frontier ordering
        #[arg(long, value_enum, default_value = "manhattan")]
        heuristic: HeuristicArg,

        /// Skip boards already expanded on the same track
        #[arg(long)]
        closed_set: bool,

        /// Maximum expansions before giving up
        #[arg(long)]
        max_expansions: Option<usize>,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum HeuristicArg {
    Manhattan,
    Hamming,
}

impl From<HeuristicArg> for Heuristic {
    fn from(arg: HeuristicArg) -> Self {
        match arg {
            HeuristicArg::Manhattan => Heuristic::Manhattan,
            HeuristicArg::Hamming => Heuristic::Hamming,
        }
    }
}

/// Output format for a solve result
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SolveOutput {
    verdict: Verdict,
    solvable: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    moves: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    solution: Option<Vec<Vec<Vec<u32>>>>,
    expanded: usize,
    enqueued: u64,
    time_elapsed_ms: u64,
    config: SolverConfig,
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Solve {
            file,
            stdin,
            heuristic,
            closed_set,
            max_expansions,
            json,
        } => {
            let config = SolverConfig {
                heuristic: heuristic.into(),
                closed_set,
                max_expansions,
            };
            match run_solve(file, stdin, &config, json) {
                Ok(()) => ExitCode::SUCCESS,
                Err(message) => {
                    error!("{message}");
                    eprintln!("Error: {message}");
                    ExitCode::FAILURE
                }
            }
        }
    }
}

fn run_solve(
    file: Option<PathBuf>,
    stdin: bool,
    config: &SolverConfig,
    json: bool,
) -> Result<(), String> {
    let content = if stdin {
        let mut buffer = String::new();
        io::stdin()
            .read_to_string(&mut buffer)
            .map_err(|e| format!("Failed to read from stdin: {e}"))?;
        buffer
    } else if let Some(path) = file {
        debug!("Reading board from {}", path.display());
        fs::read_to_string(&path)
            .map_err(|e| format!("Failed to read file {}: {e}", path.display()))?
    } else {
        return Err("Must provide either a file path or --stdin".to_string());
    };

    let initial = parse_any(&content).map_err(|e| e.to_string())?;
    let solver = Solver::with_config(initial, config).map_err(|e| e.to_string())?;

    if json {
        let output = format_result(&solver, config);
        let text = serde_json::to_string_pretty(&output).map_err(|e| e.to_string())?;
        println!("{text}");
        return Ok(());
    }

    match solver.solution() {
        None => println!("No solution possible"),
        Some(boards) => {
            println!("Minimum number of moves = {}", boards.len() - 1);
            for board in boards {
                println!("{board}");
            }
        }
    }
    Ok(())
}

fn format_result(solver: &Solver, config: &SolverConfig) -> SolveOutput {
    let stats = solver.stats();
    SolveOutput {
        verdict: solver.verdict(),
        solvable: solver.is_solvable(),
        moves: solver.moves(),
        solution: solver
            .solution()
            .map(|boards| boards.iter().map(|b| b.rows()).collect()),
        expanded: stats.expanded,
        enqueued: stats.enqueued,
        time_elapsed_ms: stats.time_elapsed_ms,
        config: config.clone(),
    }
}
