//! Error types for schema loading, building, and rendering
//!
//! Copyright (c) 2025 Schemadoc Team
//! Licensed under the Apache-2.0 license

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Result type for schemadoc operations
pub type Result<T> = std::result::Result<T, SchemaError>;

/// Error types for every stage of the schema-to-Markdown pipeline
#[derive(Error, Debug)]
pub enum SchemaError {
    /// File I/O errors
    #[error("Failed to read file '{path}': {source}")]
    IoError {
        path: PathBuf,
        source: std::io::Error,
    },

    /// JSON parsing errors
    #[error("Failed to parse JSON file '{path}': {source}")]
    JsonParseError {
        path: PathBuf,
        source: serde_json::Error,
    },

    /// YAML parsing errors
    #[error("Failed to parse YAML file '{path}': {source}")]
    YamlParseError {
        path: PathBuf,
        source: serde_yaml::Error,
    },

    /// Unsupported file format
    #[error("Unsupported file format for '{path}'. Expected .json, .yaml, or .yml")]
    UnsupportedFormat { path: PathBuf },

    /// A non-schema value where a subschema is required
    #[error("Invalid schema value at '{pointer}': {reason}")]
    InvalidSchema { pointer: String, reason: String },

    /// A `$ref` that does not resolve inside the definition arena
    #[error("Unresolved reference '{reference}' at '{pointer}'")]
    UnresolvedReference { reference: String, pointer: String },

    /// A dependencies entry that reduces to neither an enum choice nor a oneOf
    #[error("Malformed dependency at '{pointer}': {reason}")]
    MalformedDependency { pointer: String, reason: String },

    /// Injection markers for the given token are absent or out of order
    #[error("No injection markers found for token '{token}'")]
    MissingMarker { token: String },
}

impl SchemaError {
    /// Create an I/O error with path context
    pub fn io_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::IoError {
            path: path.into(),
            source,
        }
    }

    /// Create a JSON parsing error with path context
    pub fn json_parse_error(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        Self::JsonParseError {
            path: path.into(),
            source,
        }
    }

    /// Create a YAML parsing error with path context
    pub fn yaml_parse_error(path: impl Into<PathBuf>, source: serde_yaml::Error) -> Self {
        Self::YamlParseError {
            path: path.into(),
            source,
        }
    }

    /// Create an unsupported format error
    pub fn unsupported_format(path: impl Into<PathBuf>) -> Self {
        Self::UnsupportedFormat { path: path.into() }
    }

    /// Create an invalid schema error at a JSON pointer
    pub fn invalid_schema(pointer: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidSchema {
            pointer: pointer.into(),
            reason: reason.into(),
        }
    }

    /// Create an unresolved reference error
    pub fn unresolved_reference(reference: impl Into<String>, pointer: impl Into<String>) -> Self {
        Self::UnresolvedReference {
            reference: reference.into(),
            pointer: pointer.into(),
        }
    }

    /// Create a malformed dependency error at a JSON pointer
    pub fn malformed_dependency(pointer: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::MalformedDependency {
            pointer: pointer.into(),
            reason: reason.into(),
        }
    }

    /// Create a missing marker error
    pub fn missing_marker(token: impl Into<String>) -> Self {
        Self::MissingMarker {
            token: token.into(),
        }
    }

    /// The JSON pointer of the offending schema location, if any
    pub fn pointer(&self) -> Option<&str> {
        match self {
            Self::InvalidSchema { pointer, .. }
            | Self::UnresolvedReference { pointer, .. }
            | Self::MalformedDependency { pointer, .. } => Some(pointer),
            _ => None,
        }
    }

    /// The file this error originated from, if any
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::IoError { path, .. }
            | Self::JsonParseError { path, .. }
            | Self::YamlParseError { path, .. }
            | Self::UnsupportedFormat { path } => Some(path),
            _ => None,
        }
    }
}
