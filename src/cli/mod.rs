//! CLI commands and argument handling.
//!
//! This module contains the clap CLI definitions and command implementations.

pub mod commands;
pub mod output;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// A personal developer portfolio that lives in your terminal.
///
/// Running `folio` with no subcommand opens the interactive portfolio view.
#[derive(Parser, Debug)]
#[command(name = "folio")]
#[command(author, version = crate::VERSION, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to a TOML file overriding the built-in profile content.
    #[arg(short = 'C', long, global = true, value_name = "PATH")]
    pub content: Option<PathBuf>,

    /// Subcommand to run; the view opens when omitted.
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Top-level commands for folio.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Open the interactive portfolio view (the default).
    ///
    /// Sections: About, Skills, Projects, Achievements. Navigate with
    /// tab or 1-4, select projects with j/k, copy the current link with c.
    View(ViewCommand),

    /// Play the typewriter intro inline, without the full-screen view.
    ///
    /// Types the hero phrases out in place for a fixed number of cycles.
    /// Useful in shell rc files or asciinema recordings.
    Intro(IntroCommand),

    /// Print the portfolio content as JSON.
    ///
    /// For piping into other tools, or checking what a --content override
    /// actually loaded.
    Content(ContentCommand),

    /// Generate shell completions.
    ///
    /// Supports bash, zsh, and fish.
    Completions(CompletionsCommand),
}

/// Arguments for the view command.
#[derive(Args, Debug)]
pub struct ViewCommand {
    /// Typing interval in milliseconds; deleting runs at twice this speed.
    #[arg(long, default_value_t = 150, value_parser = clap::value_parser!(u64).range(1..))]
    pub speed: u64,

    /// Hold time in milliseconds once a phrase is fully typed.
    #[arg(long, default_value_t = 2000)]
    pub pause: u64,
}

impl Default for ViewCommand {
    // Matches the clap default values above; used by the bare `folio` path.
    fn default() -> Self {
        Self {
            speed: 150,
            pause: 2000,
        }
    }
}

/// Arguments for the intro command.
#[derive(Args, Debug)]
pub struct IntroCommand {
    /// How many full cycles over the phrase list to play.
    #[arg(short = 'n', long, default_value_t = 1)]
    pub cycles: usize,

    /// Typing interval in milliseconds; deleting runs at twice this speed.
    #[arg(long, default_value_t = 150, value_parser = clap::value_parser!(u64).range(1..))]
    pub speed: u64,

    /// Hold time in milliseconds once a phrase is fully typed.
    #[arg(long, default_value_t = 2000)]
    pub pause: u64,
}

/// Arguments for the content command.
#[derive(Args, Debug)]
pub struct ContentCommand {
    /// Pretty-print the JSON.
    #[arg(short, long)]
    pub pretty: bool,

    /// Copy the JSON to the clipboard instead of printing it.
    #[arg(long)]
    pub copy: bool,
}

/// Arguments for the completions command.
#[derive(Args, Debug)]
pub struct CompletionsCommand {
    /// Shell to generate completions for (bash, zsh, fish).
    pub shell: String,
}
