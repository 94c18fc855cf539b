//! A command line interface to the tour optimizer.
//!

mod commands;

use crate::commands::solve::{get_solve_command, run_solve};
use clap::Command;
use std::process;

fn main() {
    let matches = Command::new("Tour Optimizer")
        .version("0.1")
        .about("Computes a visiting order over named locations, minimizing total travel distance")
        .subcommand(get_solve_command())
        .get_matches();

    match matches.subcommand() {
        Some(("solve", solve_matches)) => {
            if let Err(err) = run_solve(solve_matches) {
                eprintln!("{err}");
                process::exit(1);
            }
        }
        _ => {
            eprintln!("No subcommand was used. Use -h to print help information.");
            process::exit(1);
        }
    }
}
