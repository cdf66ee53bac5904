mod cli;
mod config;
mod daily_cmd;
mod fetch;
mod friend_cmd;
mod logging;

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
        Command::Daily(args) => daily_cmd::run(args),
        Command::Friend(args) => friend_cmd::run(args),
    }
}
