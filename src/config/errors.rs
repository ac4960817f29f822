use std::path::PathBuf;

use thiserror::Error;

use crate::constants::FALLBACK_SWITCHES_ENV;

/// Why a configuration file could not be turned into switches.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to locate the configuration file: {filename} (falling back to {})", FALLBACK_SWITCHES_ENV)]
    NotFound { filename: String },

    #[error("failed reading configuration file: {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed parsing configuration file: {}({line}): {message}", path.display())]
    Syntax {
        path: PathBuf,
        line: usize,
        message: String,
    },

    #[error("{problem} in configuration file: {}", path.display())]
    Schema { path: PathBuf, problem: SchemaProblem },

    #[error("unknown failure: {message}")]
    Unknown { message: String },
}

/// Required structure missing from an otherwise valid document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SchemaProblem {
    #[error("no default settings")]
    MissingDefault,

    #[error("default is not a group")]
    DefaultNotGroup,
}

impl ConfigError {
    /// Error code for programmatic handling.
    pub fn error_code(&self) -> &'static str {
        match self {
            ConfigError::NotFound { .. } => "CONFIG_NOT_FOUND",
            ConfigError::Io { .. } => "CONFIG_IO_FAILURE",
            ConfigError::Syntax { .. } => "CONFIG_SYNTAX_FAILURE",
            ConfigError::Schema { .. } => "CONFIG_SCHEMA_FAILURE",
            ConfigError::Unknown { .. } => "CONFIG_UNKNOWN_FAILURE",
        }
    }

    /// Whether the caller can fall back to another configuration source.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, ConfigError::NotFound { .. })
    }
}
