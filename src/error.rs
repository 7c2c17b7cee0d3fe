//! Error types for game configuration.
//!
//! The simulation itself cannot fail; only loading and validating a
//! [`GameConfig`](crate::GameConfig) can.

use std::fmt;

/// Errors that can occur while loading or validating configuration.
#[derive(Debug)]
pub enum ConfigError {
    /// Failed to read or write the config file.
    Io(std::io::Error),
    /// The config file is not valid JSON for [`GameConfig`](crate::GameConfig).
    Parse(serde_json::Error),
    /// A value parsed but is outside its usable range.
    Invalid {
        field: &'static str,
        reason: &'static str,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "Failed to access config file: {}", e),
            ConfigError::Parse(e) => write!(f, "Failed to parse config: {}", e),
            ConfigError::Invalid { field, reason } => {
                write!(f, "Invalid config value `{}`: {}", field, reason)
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io(e) => Some(e),
            ConfigError::Parse(e) => Some(e),
            ConfigError::Invalid { .. } => None,
        }
    }
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::Io(e)
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(e: serde_json::Error) -> Self {
        ConfigError::Parse(e)
    }
}
