//! Daily puzzle solver CLI.
//!
//! Reads a day's input text file and prints one integer answer per part.
//! Diagnostics go to stderr via `RUST_LOG`; answers go to stdout.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use solver::run::{InputSource, RunOutcome, render_json, render_text, solve_all, solve_day};
use solver::{exit_codes, logging};

#[derive(Parser)]
#[command(name = "solver", version, about = "Daily puzzle solver")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Solve one day and print its part answers.
    Run {
        /// Day to solve.
        #[arg(short, long, value_parser = clap::value_parser!(u8).range(1..=6))]
        day: u8,
        /// Input file; defaults to `<inputs_dir>/day<NN>.txt`.
        #[arg(short, long)]
        input: Option<PathBuf>,
        /// Print answers as JSON instead of text.
        #[arg(long)]
        json: bool,
    },
    /// Solve every day whose input file exists.
    All {
        /// Print answers as JSON instead of text.
        #[arg(long)]
        json: bool,
    },
}

fn main() {
    logging::init();
    let cli = Cli::parse();
    let code = match run(cli) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("{:#}", err);
            exit_codes::INVALID
        }
    };
    std::process::exit(code);
}

fn run(cli: Cli) -> Result<i32> {
    let root = std::env::current_dir().context("resolve working directory")?;
    match cli.command {
        Command::Run { day, input, json } => {
            let source = match input {
                Some(path) => InputSource::Explicit(path),
                None => InputSource::Configured,
            };
            match solve_day(&root, day, &source)? {
                RunOutcome::Solved(answers) => {
                    if json {
                        println!("{}", render_json(&answers)?);
                    } else {
                        println!("{}", render_text(&answers));
                    }
                    Ok(exit_codes::OK)
                }
                RunOutcome::MissingInput => {
                    eprintln!("no input file for day {day}");
                    Ok(exit_codes::MISSING_INPUT)
                }
            }
        }
        Command::All { json } => {
            for answers in solve_all(&root)? {
                if json {
                    println!("{}", render_json(&answers)?);
                } else {
                    println!("day {}", answers.day);
                    println!("{}", render_text(&answers));
                }
            }
            Ok(exit_codes::OK)
        }
    }
}
