//! Error types for devboot operations.
//!
//! This module defines [`DevbootError`], the primary error type used throughout
//! the application, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Use `DevbootError` for domain-specific errors that need distinct handling
//! - Use `anyhow::Error` (via `DevbootError::Other`) for unexpected errors
//! - All errors should provide actionable messages for users

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for devboot operations.
#[derive(Debug, Error)]
pub enum DevbootError {
    /// Failed to parse configuration file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// Invalid configuration structure or values.
    #[error("Invalid configuration: {message}")]
    ConfigValidationError { message: String },

    /// Shell command failed.
    #[error("Command failed with exit code {code:?}: {command}")]
    CommandFailed { command: String, code: Option<i32> },

    /// A required tool is missing and cannot be auto-installed.
    #[error("Missing requirement '{requirement}': {message}")]
    RequirementMissing {
        requirement: String,
        message: String,
    },

    /// The project's dependency manifest is not in the project root.
    #[error("Dependency manifest not found: {path}")]
    ManifestNotFound { path: PathBuf },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for devboot operations.
pub type Result<T> = std::result::Result<T, DevbootError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_parse_error_displays_path_and_message() {
        let err = DevbootError::ConfigParseError {
            path: PathBuf::from("/config.yml"),
            message: "invalid syntax".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("/config.yml"));
        assert!(msg.contains("invalid syntax"));
    }

    #[test]
    fn config_validation_error_displays_message() {
        let err = DevbootError::ConfigValidationError {
            message: "port must be non-zero".into(),
        };
        assert!(err.to_string().contains("port must be non-zero"));
    }

    #[test]
    fn command_failed_displays_command_and_code() {
        let err = DevbootError::CommandFailed {
            command: "npm install".into(),
            code: Some(1),
        };
        let msg = err.to_string();
        assert!(msg.contains("npm install"));
        assert!(msg.contains("1"));
    }

    #[test]
    fn requirement_missing_displays_requirement_and_message() {
        let err = DevbootError::RequirementMissing {
            requirement: "node".into(),
            message: "Not found on PATH".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("node"));
        assert!(msg.contains("Not found on PATH"));
    }

    #[test]
    fn manifest_not_found_displays_path() {
        let err = DevbootError::ManifestNotFound {
            path: PathBuf::from("/app/package.json"),
        };
        assert!(err.to_string().contains("/app/package.json"));
    }

    #[test]
    fn io_error_converts_from_std() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let err: DevbootError = io_err.into();
        assert!(matches!(err, DevbootError::Io(_)));
    }

    #[test]
    fn anyhow_error_converts() {
        let err: DevbootError = anyhow::anyhow!("boom").into();
        assert!(matches!(err, DevbootError::Other(_)));
        assert_eq!(err.to_string(), "boom");
    }
}
