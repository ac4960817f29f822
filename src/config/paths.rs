//! Ordered search for the configuration file.
//!
//! The search is a fixed list of [`SearchProbe`]s evaluated by one loop in
//! [`PathResolver::locate`]; the first candidate that exists wins. The order
//! is a compatibility contract with existing installs and must not change.

use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use crate::constants::{ETC_DIR, PRODUCT_DIR, SYSTEM_ETC_DIR, USER_CONFIG_DIR};
use crate::platform::{PlatformFlavor, PlatformPaths};

/// Where a probe's directory comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProbeBase {
    /// The current working directory.
    CurrentDir,
    /// The directory containing the running executable.
    ExecutableDir,
    /// The user's home directory.
    UserHome,
    /// Two levels above the executable file, i.e. the parent of its directory.
    ExecutableGrandparent,
    /// The install path recorded in the Windows registry.
    RegistryInstallPath,
    /// The compile-time install prefix.
    InstallPrefix,
    /// A fixed absolute directory.
    Fixed(&'static str),
}

/// One step of the configuration search: a base directory, optional
/// subdirectories, then the filename.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchProbe {
    pub base: ProbeBase,
    pub subdirs: &'static [&'static str],
}

impl SearchProbe {
    const fn new(base: ProbeBase, subdirs: &'static [&'static str]) -> Self {
        Self { base, subdirs }
    }

    /// Builds this probe's candidate path, or `None` when its base directory
    /// cannot be determined.
    fn candidate<P: PlatformPaths + ?Sized>(
        &self,
        platform: &P,
        executable: Option<&Path>,
        filename: &str,
    ) -> Option<PathBuf> {
        let mut path = match &self.base {
            ProbeBase::CurrentDir => platform.current_dir()?,
            ProbeBase::ExecutableDir => executable?.parent()?.to_path_buf(),
            ProbeBase::UserHome => platform.home_dir(),
            // Parent components are removed structurally; `..` never appears
            // in the candidate.
            ProbeBase::ExecutableGrandparent => {
                let dir = executable?.parent()?.parent()?;
                if dir.as_os_str().is_empty() {
                    return None;
                }
                dir.to_path_buf()
            }
            ProbeBase::RegistryInstallPath => platform.registry_install_path()?,
            ProbeBase::InstallPrefix => platform.install_prefix(),
            ProbeBase::Fixed(dir) => PathBuf::from(dir),
        };
        for sub in self.subdirs {
            path.push(sub);
        }
        path.push(filename);
        Some(path)
    }
}

/// The probe order for a platform.
pub fn search_probes(flavor: PlatformFlavor) -> Vec<SearchProbe> {
    let mut probes = vec![
        SearchProbe::new(ProbeBase::CurrentDir, &[]),
        SearchProbe::new(ProbeBase::ExecutableDir, &[]),
        SearchProbe::new(ProbeBase::UserHome, &[USER_CONFIG_DIR]),
    ];
    if flavor == PlatformFlavor::Windows {
        probes.push(SearchProbe::new(ProbeBase::UserHome, &[]));
    }

    probes.push(SearchProbe::new(ProbeBase::ExecutableGrandparent, &[ETC_DIR]));
    match flavor {
        PlatformFlavor::Windows => {
            probes.push(SearchProbe::new(ProbeBase::RegistryInstallPath, &[ETC_DIR]));
        }
        PlatformFlavor::Posix => {
            probes.extend([
                SearchProbe::new(ProbeBase::InstallPrefix, &[ETC_DIR]),
                SearchProbe::new(ProbeBase::InstallPrefix, &[ETC_DIR, PRODUCT_DIR]),
                SearchProbe::new(ProbeBase::Fixed(SYSTEM_ETC_DIR), &[]),
                SearchProbe::new(ProbeBase::Fixed(SYSTEM_ETC_DIR), &[PRODUCT_DIR]),
            ]);
        }
    }
    probes
}

/// Finds the configuration file by walking [`search_probes`] in order.
pub struct PathResolver<'a, P: PlatformPaths + ?Sized> {
    platform: &'a P,
}

impl<'a, P: PlatformPaths + ?Sized> PathResolver<'a, P> {
    pub fn new(platform: &'a P) -> Self {
        Self { platform }
    }

    /// Returns the first candidate for `filename` that exists.
    pub fn locate(&self, argv0: &OsStr, main_addr: usize, filename: &str) -> Option<PathBuf> {
        let executable = self.platform.main_executable(argv0, main_addr);
        for probe in search_probes(self.platform.flavor()) {
            let Some(candidate) = probe.candidate(self.platform, executable.as_deref(), filename)
            else {
                tracing::debug!(base = ?probe.base, "probe skipped, base directory unavailable");
                continue;
            };
            if self.platform.exists(&candidate) {
                tracing::debug!(path = %candidate.display(), "configuration file found");
                return Some(candidate);
            }
            tracing::debug!(path = %candidate.display(), "no configuration file");
        }
        None
    }

    /// Every candidate path in probe order, whether or not it exists.
    pub fn candidates(&self, argv0: &OsStr, main_addr: usize, filename: &str) -> Vec<PathBuf> {
        let executable = self.platform.main_executable(argv0, main_addr);
        search_probes(self.platform.flavor())
            .iter()
            .filter_map(|probe| probe.candidate(self.platform, executable.as_deref(), filename))
            .collect()
    }
}
