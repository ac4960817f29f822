//! Locates a command-line tool's configuration file and reads its default
//! switches.
//!
//! The file is searched for in a fixed order of locations (working directory,
//! next to the executable, the user's home, then system `etc` directories),
//! parsed as TOML, and `default.switches` is returned with
//! `%%toolbinarypath%%` replaced by the executable's directory.
//!
//! ```no_run
//! use toolconf::ConfigFile;
//!
//! let argv0 = std::env::args_os().next().unwrap_or_default();
//! let mut config = ConfigFile::new();
//! if config.read(&argv0, 0, "tool.conf") {
//!     for switch in config.switches() {
//!         println!("{}", switch);
//!     }
//! }
//! ```

pub mod cli;
pub mod config;
pub mod constants;
pub mod logging;
pub mod output;
pub mod platform;

pub use config::{ConfigError, ConfigFile, PathResolver};
pub use platform::{NativePaths, PlatformFlavor, PlatformPaths};
