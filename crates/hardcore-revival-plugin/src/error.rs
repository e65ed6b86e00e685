//! Plugin error types.

use std::path::PathBuf;

use hardcore_revival_core::config::ConfigError;
use hardcore_revival_core::error::DomainError;
use thiserror::Error;

/// Lifecycle and dispatch errors.
#[derive(Debug, Error)]
pub enum PluginError {
    /// The configuration file could not be read or parsed.
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// A plugin file could not be written.
    #[error("failed to write {path}: {source}")]
    Io {
        /// The file being written.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// A handler failed.
    #[error(transparent)]
    Domain(#[from] DomainError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_domain_errors_display_unchanged() {
        let err = PluginError::from(DomainError::Infrastructure("disk full".into()));

        assert_eq!(err.to_string(), "infrastructure error: disk full");
    }
}
