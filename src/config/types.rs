//! The loaded configuration state.

use std::path::{Path, PathBuf};

/// A located configuration file and the default switches read from it.
///
/// `path` is set as soon as the search succeeds, before parsing, so it is
/// available for diagnostics even when the file turns out to be invalid.
/// `switches` is only filled by a fully successful load.
#[derive(Debug, Clone, Default)]
pub struct ConfigFile {
    pub(super) path: Option<PathBuf>,
    pub(super) switches: Vec<String>,
}

impl ConfigFile {
    pub fn new() -> Self {
        Self::default()
    }

    /// Path of the located configuration file, if the search succeeded.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Switches in the order they appear in the file.
    pub fn switches(&self) -> &[String] {
        &self.switches
    }

    pub fn into_switches(self) -> Vec<String> {
        self.switches
    }
}
