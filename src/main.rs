//! Entry point for the sayer settings tool.
//!
//! This binary loads environment variables, parses CLI arguments via [`cli`],
//! and dispatches to the appropriate subcommand handler.

mod cli;

use anyhow::Result;

/// Runs the sayer CLI.
///
/// Loads `.env` files (silently ignored if absent), initialises logging from
/// `RUST_LOG`, parses command-line arguments into a [`cli::Cli`] struct, and
/// dispatches the chosen subcommand via [`cli::run`].
fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = cli::parse();
    cli::run(cli)
}
