use std::path::PathBuf;

use super::{PlatformFlavor, PlatformPaths};

/// Platform queries for Unix-like hosts.
#[derive(Debug, Clone, Copy, Default)]
pub struct PosixPaths;

impl PlatformPaths for PosixPaths {
    fn flavor(&self) -> PlatformFlavor {
        PlatformFlavor::Posix
    }

    /// `$HOME`, then the password database, then `/`.
    fn home_dir(&self) -> PathBuf {
        dirs::home_dir().unwrap_or_else(|| PathBuf::from("/"))
    }
}
