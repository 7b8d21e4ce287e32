mod cli;
mod commands;
mod logging;

use anyhow::Result;
use clap::Parser;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    logging::initialize(cli.log.into(), logging::level(cli.verbose));
    commands::dispatch(cli.command)
}
