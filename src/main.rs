mod aspects_cmd;
mod cli;
mod logging;
mod moon_cmd;
mod positions_cmd;
mod setup;

use std::process;

use anyhow::Result;
use clap::Parser;

use crate::cli::{Cli, Command};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli.command) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(command: Command) -> Result<()> {
    match command {
        Command::Positions(args) => positions_cmd::run(args),
        Command::Moon(args) => moon_cmd::run(args),
        Command::Aspects(args) => aspects_cmd::run(args),
    }
}
