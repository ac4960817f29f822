use std::path::PathBuf;

use super::{registry, PlatformFlavor, PlatformPaths};
use crate::constants::{
    REGISTRY_HIVE, REGISTRY_PATH_VALUE, REGISTRY_PRODUCT, REGISTRY_VENDOR, REGISTRY_VERSION,
};

/// Platform queries for Windows hosts.
#[derive(Debug, Clone, Copy, Default)]
pub struct WindowsPaths;

impl PlatformPaths for WindowsPaths {
    fn flavor(&self) -> PlatformFlavor {
        PlatformFlavor::Windows
    }

    /// The roaming application-data shell folder, which is where per-user
    /// settings live on Windows.
    fn home_dir(&self) -> PathBuf {
        dirs::config_dir()
            .or_else(dirs::home_dir)
            .unwrap_or_else(|| PathBuf::from("/"))
    }

    fn registry_install_path(&self) -> Option<PathBuf> {
        let subkey = format!(
            r"SOFTWARE\{}\{}\{}",
            REGISTRY_VENDOR, REGISTRY_PRODUCT, REGISTRY_VERSION
        );
        registry::read_reg_string(REGISTRY_HIVE, &subkey, REGISTRY_PATH_VALUE).map(PathBuf::from)
    }
}
