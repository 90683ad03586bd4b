use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use log::{info, warn};

use crate::solver::EquationSolver;
use crate::template::WILDCARD;

/// Log level for the application
#[derive(Debug, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn to_log_level_filter(&self) -> log::LevelFilter {
        match self {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Mathdle - Solve numeric equation guessing puzzles
#[derive(Parser, Debug)]
#[command(name = "mathdle")]
#[command(about = "Find every valid 8-character equation that completes a puzzle template")]
#[command(version)]
pub struct CliArgs {
    /// The equation guesses so far, use _ for empty spots
    #[arg(short, long)]
    pub equation: Option<String>,

    /// The tiles that are grayed out and cannot be played again
    #[arg(short, long, default_value = "")]
    pub blacklist: String,

    /// The tiles that are yellow and must appear in the empty spots
    #[arg(short, long, default_value = "")]
    pub whitelist: String,

    /// Log level (default: warn)
    #[arg(short, long, value_enum, default_value = "warn")]
    pub log_level: LogLevel,
}

/// Initialize logging based on the provided log level
pub fn init_logging(log_level: &LogLevel) -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log_level.to_log_level_filter())
        .init();
    Ok(())
}

fn is_all_wildcards(equation: &str) -> bool {
    equation.chars().all(|c| c == WILDCARD)
}

/// Run the main application logic
pub fn run() -> Result<()> {
    let args = CliArgs::parse();

    init_logging(&args.log_level)?;

    let Some(equation) = args.equation.filter(|equation| !is_all_wildcards(equation)) else {
        println!(
            "All blanks provided, try a solution like \"12+46=58\" to get some guesses on the board"
        );
        return Ok(());
    };

    let solver = EquationSolver::new(&args.blacklist, &args.whitelist);

    info!(
        "Searching completions of '{}' with blacklist '{}' and whitelist '{}'",
        equation, args.blacklist, args.whitelist
    );

    let solutions = solver
        .solve(&equation)
        .context("Equation template is not playable")?;

    if solutions.is_empty() {
        warn!("No matching equation found");
        return Ok(());
    }

    for (solution_number, solution) in solutions.iter().enumerate() {
        println!("{:3}: {}", solution_number, solution);
    }
    Ok(())
}
