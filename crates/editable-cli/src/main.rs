//! reorder-editable CLI
//!
//! Check and reorder the entries of a Python `easy-install.pth`.

mod cli;
mod commands;
mod error;
mod logging;

use std::io;

use clap::Parser;
use colored::Colorize;
use editable_core::Locator;

use cli::{Cli, Commands};
use error::Result;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = logging::init(cli.verbose) {
        eprintln!("{}: failed to initialize logging: {}", "warning".yellow().bold(), e);
    }

    if let Err(e) = run(cli) {
        eprintln!("{}: {}", "error".red().bold(), e);
        if let Some(hint) = e.hint() {
            eprintln!("{}: {}", "hint".cyan().bold(), hint);
        }
        if let Some(contents) = e.manifest_contents() {
            eprint!("{}", contents);
        }
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    tracing::debug!(command = ?cli.command, "Starting");
    let locator = Locator::from_environment(cli.python.as_deref());
    let mut stdout = io::stdout().lock();

    match cli.command {
        Commands::Cat { location } => commands::run_cat(&locator, &location, &mut stdout),
        Commands::Locate { location } => commands::run_locate(&locator, &location, &mut stdout),
        Commands::Check {
            location,
            directories,
        } => commands::run_check(&locator, &location, &directories),
        Commands::Reorder {
            location,
            dry_run,
            directories,
        } => commands::run_reorder(&locator, &location, &directories, dry_run, &mut stdout),
    }
}
