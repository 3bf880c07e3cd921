use std::io;
use std::process::ExitCode;

use colored::Colorize;
use polygons::{logging, LineupConfig, Result};

fn run() -> Result<()> {
    let lineup = LineupConfig::default().lineup();
    tracing::debug!(?lineup, "starting lineup");

    let stdout = io::stdout();
    lineup.run(&mut stdout.lock())
}

fn main() -> ExitCode {
    logging::init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{} {err}", "error:".red().bold());
            ExitCode::FAILURE
        }
    }
}
