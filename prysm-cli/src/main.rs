//! Prysm CLI - Command-line interface for the Prysm schema builder.

use clap::Parser;

use prysm_cli::cli::{Cli, Command};
use prysm_cli::commands;
use prysm_cli::error::CliResult;
use prysm_cli::{config, logging, output};

fn main() {
    // Run the CLI and handle errors
    if let Err(e) = run() {
        output::error(&e.to_string());
        std::process::exit(1);
    }
}

fn run() -> CliResult<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    let config = config::load(cli.config.as_deref())?;
    logging::init(&config.logging);

    // Run the appropriate command
    match cli.command {
        Command::Generate(args) => commands::generate::run(args, &config),
        Command::Print(args) => commands::print::run(args),
        Command::Validate(args) => commands::validate::run(args),
        Command::Version => commands::version::run(),
    }
}
