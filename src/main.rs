//! folio - a personal developer portfolio that lives in your terminal.
//!
//! This is the main entry point for the folio binary.

use std::process::ExitCode;

use clap::Parser;
use folio::cli::{commands, Cli, Commands};

fn main() -> ExitCode {
    let cli = Cli::parse();
    let content = cli.content.as_deref();

    let result: anyhow::Result<()> = match cli.command {
        // No subcommand opens the portfolio view with default timing.
        None => commands::view::view(&Default::default(), content).map_err(Into::into),
        Some(cmd) => match cmd {
            Commands::View(c) => commands::view::view(&c, content).map_err(Into::into),
            Commands::Intro(c) => commands::intro::intro(&c, content).map_err(Into::into),
            Commands::Content(c) => commands::content::content(&c, content).map_err(Into::into),
            Commands::Completions(c) => commands::completions::completions(&c.shell).map_err(Into::into),
        },
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("\x1b[31merror:\x1b[0m {e}");
            ExitCode::FAILURE
        }
    }
}
