//! Platform queries needed by the configuration search.
//!
//! [`PlatformPaths`] is the single seam between the search and the host: the
//! current directory, the running executable, the user's home, the install
//! prefix and (on Windows) the registry. Both implementations compile on every
//! host; [`NativePaths`] picks the one matching the build target.

mod posix;
pub mod registry;
mod windows;

pub use posix::PosixPaths;
pub use windows::WindowsPaths;

use std::ffi::OsStr;
use std::path::{Path, PathBuf};

/// Which probe order applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlatformFlavor {
    Posix,
    Windows,
}

/// Host capabilities consulted while searching for the configuration file.
///
/// No method panics. A query that cannot be answered returns `None` and the
/// probe depending on it is skipped.
pub trait PlatformPaths {
    /// Probe order to use on this platform.
    fn flavor(&self) -> PlatformFlavor;

    /// The process's current working directory.
    fn current_dir(&self) -> Option<PathBuf> {
        std::env::current_dir().ok()
    }

    /// Full path of the running executable.
    ///
    /// `argv0` and `main_addr` are hints for platforms that cannot answer
    /// without them.
    fn main_executable(&self, argv0: &OsStr, main_addr: usize) -> Option<PathBuf> {
        resolve_executable(argv0, main_addr)
    }

    /// The user's home directory. Never fails.
    fn home_dir(&self) -> PathBuf;

    /// Base directory searched for `etc/` on POSIX hosts.
    fn install_prefix(&self) -> PathBuf {
        PathBuf::from(crate::constants::INSTALL_PREFIX)
    }

    /// Install path recorded by the Windows installer.
    fn registry_install_path(&self) -> Option<PathBuf> {
        None
    }

    /// Whether a candidate file exists.
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }
}

#[cfg(windows)]
pub type NativePaths = WindowsPaths;

#[cfg(not(windows))]
pub type NativePaths = PosixPaths;

/// Resolves the running executable via the standard library, falling back to
/// `argv0` when the platform query fails.
fn resolve_executable(argv0: &OsStr, main_addr: usize) -> Option<PathBuf> {
    match std::env::current_exe() {
        Ok(path) => return Some(path),
        Err(e) => {
            tracing::debug!(error = %e, main_addr, "current_exe failed, falling back to argv0");
        }
    }

    if argv0.is_empty() {
        return None;
    }
    let candidate = Path::new(argv0);
    if candidate.components().count() > 1 {
        std::fs::canonicalize(candidate).ok()
    } else {
        which::which(argv0).ok()
    }
}
