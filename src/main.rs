//! Entry point for toolconf.
//!
//! Loads environment variables, installs logging, parses CLI arguments via
//! [`cli`], and dispatches the chosen subcommand.

use anyhow::Result;
use std::process::ExitCode;

use toolconf::{cli, logging};

/// Runs the toolconf CLI.
///
/// `.env` files are loaded first (silently ignored if absent) so the switch
/// fallback variable can come from one.
fn main() -> Result<ExitCode> {
    dotenvy::dotenv().ok();
    logging::init_logging();

    let argv0 = std::env::args_os().next().unwrap_or_default();
    let main_addr = main as fn() -> Result<ExitCode> as usize;
    let cli = cli::parse();
    cli::run(cli, &argv0, main_addr)
}
