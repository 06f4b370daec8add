//! Error types.
//!
//! Analysis itself cannot fail; errors only come from loading and validating
//! configuration.

use crate::factors::Factor;
use std::path::PathBuf;
use thiserror::Error;

/// Configuration loading and validation errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse TOML config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Empty trigger phrase configured for factor '{factor}' (it would match every input)")]
    EmptyPattern { factor: Factor },

    #[error("Invalid trigger configuration: {message}")]
    InvalidTrigger { message: String },
}

pub type ConfigResult<T> = Result<T, ConfigError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_pattern_message_names_factor() {
        let error = ConfigError::EmptyPattern {
            factor: Factor::HasDataProcessing,
        };
        assert!(error.to_string().contains("hasDataProcessing"));
    }

    #[test]
    fn test_read_error_keeps_source() {
        let error = ConfigError::Read {
            path: PathBuf::from("/missing/flowpilot.toml"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "no such file"),
        };
        assert!(error.to_string().contains("/missing/flowpilot.toml"));
        assert!(std::error::Error::source(&error).is_some());
    }
}
