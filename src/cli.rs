//! Command-line interface definition and dispatch for toolconf.
//!
//! Uses [`clap`] for argument parsing with derive macros. `switches` prints
//! what a consuming tool would prepend to its command line; `paths` shows
//! where the file is searched for.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use serde::Serialize;
use std::ffi::OsStr;
use std::path::Path;
use std::process::ExitCode;

use crate::config::{switches_from_env, ConfigFile, PathResolver};
use crate::constants::{APP_NAME, DEFAULT_CONFIG_FILENAME, FALLBACK_SWITCHES_ENV};
use crate::output::{Reporter, StderrReporter};
use crate::platform::{NativePaths, PlatformPaths};

/// Top-level CLI structure for toolconf.
#[derive(Parser)]
#[command(name = APP_NAME, version, about = "Locate a tool's configuration file and print its default switches")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands for the toolconf CLI.
///
/// The `///` doc comments on variants double as `--help` text rendered by clap.
#[derive(Subcommand)]
pub enum Commands {
    /// Print the default switches from the configuration file
    Switches {
        /// Configuration filename to search for
        #[arg(short, long = "conf", default_value = DEFAULT_CONFIG_FILENAME)]
        conf: String,
        /// Emit JSON instead of one switch per line
        #[arg(long)]
        json: bool,
        /// Also print which configuration file was used
        #[arg(short, long)]
        verbose: bool,
    },
    /// List configuration file candidates in search order
    Paths {
        /// Configuration filename to search for
        #[arg(short, long = "conf", default_value = DEFAULT_CONFIG_FILENAME)]
        conf: String,
    },
}

/// Where the printed switches came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
enum SwitchSource {
    File,
    Environment,
}

#[derive(Serialize)]
struct SwitchReport<'a> {
    source: SwitchSource,
    config: Option<&'a Path>,
    switches: &'a [String],
}

/// Parses command-line arguments into a [`Cli`] struct.
pub fn parse() -> Cli {
    Cli::parse()
}

/// Dispatches the parsed CLI command to its handler.
///
/// `argv0` and `main_addr` are forwarded to the executable lookup.
pub fn run(cli: Cli, argv0: &OsStr, main_addr: usize) -> Result<ExitCode> {
    let platform = NativePaths::default();
    match cli.command {
        Commands::Switches {
            conf,
            json,
            verbose,
        } => print_switches(&platform, argv0, main_addr, &conf, json, verbose),
        Commands::Paths { conf } => {
            print_candidates(&platform, argv0, main_addr, &conf);
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn print_switches<P: PlatformPaths>(
    platform: &P,
    argv0: &OsStr,
    main_addr: usize,
    conf: &str,
    json: bool,
    verbose: bool,
) -> Result<ExitCode> {
    let mut config = ConfigFile::new();
    let (source, switches) = match config.load_with(platform, argv0, main_addr, conf) {
        Ok(switches) => (SwitchSource::File, switches.to_vec()),
        Err(e) => {
            StderrReporter.report(&e);
            if !e.is_recoverable() {
                return Ok(ExitCode::FAILURE);
            }
            match switches_from_env() {
                Some(switches) => (SwitchSource::Environment, switches),
                None => {
                    eprintln!(
                        "{} {} is not set either",
                        "error:".red().bold(),
                        FALLBACK_SWITCHES_ENV
                    );
                    return Ok(ExitCode::FAILURE);
                }
            }
        }
    };

    if verbose {
        match (source, config.path()) {
            (SwitchSource::File, Some(path)) => eprintln!("config    {}", path.display()),
            _ => eprintln!("config    (from {})", FALLBACK_SWITCHES_ENV),
        }
    }

    if json {
        let report = SwitchReport {
            source,
            config: config.path(),
            switches: &switches,
        };
        let out = serde_json::to_string_pretty(&report).context("Failed to serialize switches")?;
        println!("{}", out);
    } else {
        for switch in &switches {
            println!("{}", switch);
        }
    }
    Ok(ExitCode::SUCCESS)
}

fn print_candidates<P: PlatformPaths>(platform: &P, argv0: &OsStr, main_addr: usize, conf: &str) {
    let resolver = PathResolver::new(platform);
    let mut hit = false;
    for candidate in resolver.candidates(argv0, main_addr, conf) {
        let exists = platform.exists(&candidate);
        let marker = match (exists, hit) {
            (true, false) => format!("{:<8}", "using").green().bold(),
            (true, true) => format!("{:<8}", "shadowed").yellow(),
            (false, _) => format!("{:<8}", "missing").dimmed(),
        };
        hit |= exists;
        println!("{}  {}", marker, candidate.display());
    }
}
