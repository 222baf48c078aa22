//! Command-line interface definition and dispatch for sayer.
//!
//! Uses [`clap`] for argument parsing with derive macros. The handlers for
//! each subcommand live in the [`settings`] submodule.

mod settings;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use sayer::constants::{DEFAULT_SECTION, DEFAULT_UNIT};

/// Top-level CLI structure for sayer.
#[derive(Parser)]
#[command(name = "sayer", about = "Inspect and edit type-scoped settings")]
pub struct Cli {
    /// Settings file (defaults to $SAYER_SETTINGS, then ~/.config/sayer/settings.toml)
    #[arg(short, long, global = true)]
    pub file: Option<PathBuf>,

    /// Section to read from and write to
    #[arg(short, long, global = true, default_value = DEFAULT_SECTION)]
    pub section: String,

    #[command(subcommand)]
    pub command: Commands,
}

/// Type binding shared by `get` and `set`.
#[derive(clap::Args)]
pub struct TypeArgs {
    /// Type chain, outermost first (e.g. `Service.Worker`)
    #[arg(short = 't', long = "type")]
    pub type_chain: Option<String>,

    /// Code unit every level of the type chain belongs to
    #[arg(short, long, default_value = DEFAULT_UNIT)]
    pub unit: String,
}

/// Available subcommands for the sayer CLI.
#[derive(Subcommand)]
pub enum Commands {
    /// Resolve a setting and print its value
    Get {
        name: String,
        #[command(flatten)]
        binding: TypeArgs,
        /// Show every candidate name and which one matched
        #[arg(long)]
        explain: bool,
    },
    /// Write a setting under the most specific name for the type
    Set {
        name: String,
        value: String,
        #[command(flatten)]
        binding: TypeArgs,
    },
    /// List every field in the section
    List {
        /// Print fields as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show the settings file path
    Path,
}

/// Parses command-line arguments into a [`Cli`] struct.
///
/// Delegates to [`clap::Parser::parse`], which exits the process on invalid input.
pub fn parse() -> Cli {
    Cli::parse()
}

/// Dispatches the parsed CLI command to its handler.
pub fn run(cli: Cli) -> Result<()> {
    let path = settings::settings_path(cli.file)?;
    match cli.command {
        Commands::Get {
            name,
            binding,
            explain,
        } => settings::get(&path, &cli.section, &binding, &name, explain),
        Commands::Set {
            name,
            value,
            binding,
        } => settings::set(&path, &cli.section, &binding, &name, value),
        Commands::List { json } => settings::list(&path, &cli.section, json),
        Commands::Path => {
            println!("{}", path.display());
            Ok(())
        }
    }
}
