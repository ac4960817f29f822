//! Centralized constants for toolconf.
//!
//! Every name that takes part in the configuration search lives here so the
//! search order and the substitution rule can be audited in one place.

/// Application name used in CLI output.
pub const APP_NAME: &str = "toolconf";

/// Configuration filename searched for when the caller does not pass one.
pub const DEFAULT_CONFIG_FILENAME: &str = "tool.conf";

/// Per-user dot-directory under the home directory.
pub const USER_CONFIG_DIR: &str = ".toolrc-dir";

/// Product name, used for `etc/<product>` probes.
pub const PRODUCT_DIR: &str = "tool";

/// System configuration directory name, joined under prefixes.
pub const ETC_DIR: &str = "etc";

/// Absolute system configuration directory on POSIX hosts.
pub const SYSTEM_ETC_DIR: &str = "/etc";

/// Base directory whose `etc/` is searched on POSIX hosts.
///
/// Fixed at compile time through the `TOOLCONF_INSTALL_PREFIX` environment
/// variable, falling back to `/usr/local`.
pub const INSTALL_PREFIX: &str = match option_env!("TOOLCONF_INSTALL_PREFIX") {
    Some(prefix) => prefix,
    None => "/usr/local",
};

// --- Windows registry ---

/// Registry hive holding the install path.
pub const REGISTRY_HIVE: &str = "HKLM";

/// Registry vendor key under `SOFTWARE`.
pub const REGISTRY_VENDOR: &str = "tool-developers";

/// Registry product key under the vendor.
pub const REGISTRY_PRODUCT: &str = "Tool";

/// Registry version key under the product.
pub const REGISTRY_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Registry value carrying the install path.
pub const REGISTRY_PATH_VALUE: &str = "Path";

// --- Document schema ---

/// Top-level group that must be present in every configuration file.
pub const DEFAULT_GROUP: &str = "default";

/// Array of switches under [`DEFAULT_GROUP`].
pub const SWITCHES_KEY: &str = "switches";

/// Placeholder replaced with the directory of the running executable.
pub const BINARY_PATH_TOKEN: &str = "%%toolbinarypath%%";

// --- Environment ---

/// Whitespace-separated switches used when no configuration file is found.
pub const FALLBACK_SWITCHES_ENV: &str = "TOOL_FLAGS";

/// Filter directive for developer tracing (e.g. `TOOLCONF_LOG=debug`).
pub const LOG_ENV: &str = "TOOLCONF_LOG";

/// Filter used when [`LOG_ENV`] is unset.
pub const DEFAULT_LOG_FILTER: &str = "warn";
