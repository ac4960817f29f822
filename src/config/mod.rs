//! Configuration file search and default switch loading.
//!
//! The file is looked up through a fixed list of locations (see [`paths`]),
//! parsed as TOML, and its `default.switches` array is returned with
//! `%%toolbinarypath%%` replaced by the directory of the running executable.

mod document;
mod errors;
mod loader;
pub mod paths;
mod resolve;
mod types;


pub use document::{Document, DocumentError, Setting};
pub use errors::{ConfigError, SchemaProblem};
pub use paths::{search_probes, PathResolver, ProbeBase, SearchProbe};
pub use resolve::{substitute_binary_path, switches_from_env};
pub use types::ConfigFile;
