//! Reading the located file into a switch list.

use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use super::document::{Document, DocumentError};
use super::errors::{ConfigError, SchemaProblem};
use super::paths::PathResolver;
use super::resolve::substitute_binary_path;
use super::types::ConfigFile;
use crate::constants::{DEFAULT_GROUP, SWITCHES_KEY};
use crate::output::{Reporter, StderrReporter};
use crate::platform::{NativePaths, PlatformPaths};

impl ConfigFile {
    /// Locates, parses and extracts switches using the host platform, reporting
    /// any failure to standard error.
    ///
    /// Returns `false` on failure; the switch list is then empty. The caller
    /// decides whether that is fatal.
    pub fn read(&mut self, argv0: &OsStr, main_addr: usize, filename: &str) -> bool {
        self.read_with(&NativePaths::default(), &mut StderrReporter, argv0, main_addr, filename)
    }

    /// Like [`ConfigFile::read`], with explicit platform and reporter.
    pub fn read_with<P, R>(
        &mut self,
        platform: &P,
        reporter: &mut R,
        argv0: &OsStr,
        main_addr: usize,
        filename: &str,
    ) -> bool
    where
        P: PlatformPaths + ?Sized,
        R: Reporter + ?Sized,
    {
        match self.load_with(platform, argv0, main_addr, filename) {
            Ok(_) => true,
            Err(e) => {
                reporter.report(&e);
                false
            }
        }
    }

    /// Loads switches using the host platform.
    pub fn load(
        &mut self,
        argv0: &OsStr,
        main_addr: usize,
        filename: &str,
    ) -> Result<&[String], ConfigError> {
        self.load_with(&NativePaths::default(), argv0, main_addr, filename)
    }

    /// Locates `filename` through `platform`, then parses it and extracts
    /// `default.switches`.
    pub fn load_with<P: PlatformPaths + ?Sized>(
        &mut self,
        platform: &P,
        argv0: &OsStr,
        main_addr: usize,
        filename: &str,
    ) -> Result<&[String], ConfigError> {
        self.path = None;
        self.switches.clear();

        let path = PathResolver::new(platform)
            .locate(argv0, main_addr, filename)
            .ok_or_else(|| ConfigError::NotFound {
                filename: filename.to_string(),
            })?;
        self.path = Some(path.clone());

        let doc = Document::read_file(&path).map_err(|e| match e {
            DocumentError::Io(source) => ConfigError::Io {
                path: path.clone(),
                source,
            },
            DocumentError::Syntax { line, message } => ConfigError::Syntax {
                path: path.clone(),
                line,
                message,
            },
        })?;

        let switches = extract_switches(&doc, &path, || {
            binary_dir(platform.main_executable(argv0, main_addr))
        })?;
        tracing::info!(path = %path.display(), count = switches.len(), "loaded default switches");
        self.switches = switches;
        Ok(&self.switches)
    }
}

/// Validates the `default` group and collects its switches with the binary
/// path substituted. `binpath` is only evaluated when switches are present.
fn extract_switches(
    doc: &Document,
    path: &Path,
    binpath: impl FnOnce() -> String,
) -> Result<Vec<String>, ConfigError> {
    let schema_error = |problem| ConfigError::Schema {
        path: path.to_path_buf(),
        problem,
    };
    let root = doc
        .lookup(DEFAULT_GROUP)
        .ok_or_else(|| schema_error(SchemaProblem::MissingDefault))?;
    if !root.is_group() {
        return Err(schema_error(SchemaProblem::DefaultNotGroup));
    }
    if !root.exists(SWITCHES_KEY) {
        return Ok(Vec::new());
    }

    let key = format!("{}.{}", DEFAULT_GROUP, SWITCHES_KEY);
    let arr = doc.lookup(&key).ok_or_else(|| ConfigError::Unknown {
        message: format!("{} vanished during lookup", key),
    })?;

    // Scalars have no elements; group values are taken in file order.
    let binpath = binpath();
    (0..arr.len())
        .map(|i| {
            arr.string_at(i)
                .map(|v| substitute_binary_path(v, &binpath))
                .ok_or_else(|| ConfigError::Unknown {
                    message: format!("{}[{}] is not a string", key, i),
                })
        })
        .collect()
}

/// Directory of the executable as a string, empty when unknown.
fn binary_dir(executable: Option<PathBuf>) -> String {
    executable
        .as_deref()
        .and_then(Path::parent)
        .map(|dir| dir.to_string_lossy().into_owned())
        .unwrap_or_default()
}
