//! Error types and handling for the CLI
//!
//! This module provides error types and utilities for handling
//! various failure modes in the CLI application.

use std::io;
use std::path::PathBuf;

/// Result type alias for CLI operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for CLI operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// IO error (file operations, etc.)
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Error from the schemadoc-core library
    #[error("Schema error: {0}")]
    Schema(#[from] schemadoc_core::SchemaError),

    /// File not found
    #[error("File not found: {}", path.display())]
    FileNotFound { path: PathBuf },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML serialization/deserialization error
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Generic error with context
    #[error("{message}")]
    Other { message: String },
}

impl Error {
    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Create a generic error with message
    pub fn other(message: impl Into<String>) -> Self {
        Self::Other {
            message: message.into(),
        }
    }

    /// Get the exit code for this error
    ///
    /// IO failures map to 74 (EX_IOERR from sysexits).
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Other { .. } => 1,
            Self::FileNotFound { .. } => 2,
            Self::Schema(_) => 3,
            Self::Config(_) | Self::Json(_) | Self::Yaml(_) => 4,
            Self::Io(_) => 74,
        }
    }
}

/// Format an error for display to the user
pub fn format_error(error: &Error, use_color: bool) -> String {
    if use_color {
        use colored::Colorize;
        format!("{} {}", "Error:".red().bold(), error)
    } else {
        format!("Error: {}", error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        assert_eq!(Error::other("boom").exit_code(), 1);
        assert_eq!(
            Error::FileNotFound {
                path: PathBuf::from("missing.json"),
            }
            .exit_code(),
            2
        );
        assert_eq!(
            Error::Schema(schemadoc_core::SchemaError::missing_marker("schema")).exit_code(),
            3
        );
        assert_eq!(Error::config("bad config").exit_code(), 4);
        assert_eq!(
            Error::Io(io::Error::new(io::ErrorKind::Other, "disk gone")).exit_code(),
            74
        );
    }

    #[test]
    fn test_format_error_plain() {
        let error = Error::other("something went wrong");
        assert_eq!(
            format_error(&error, false),
            "Error: something went wrong"
        );
    }

    #[test]
    fn test_schema_error_display_keeps_context() {
        let error = Error::Schema(schemadoc_core::SchemaError::unresolved_reference(
            "#/definitions/missing",
            "#/properties/pet",
        ));
        let message = format_error(&error, false);
        assert!(message.contains("#/definitions/missing"));
        assert!(message.contains("#/properties/pet"));
    }
}
