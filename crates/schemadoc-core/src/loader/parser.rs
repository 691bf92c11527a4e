//! Schema parsing for YAML and JSON source files
//!
//! Copyright (c) 2025 Schemadoc Team
//! Licensed under the Apache-2.0 license

use crate::error::{Result, SchemaError};
use serde_json::Value;
use std::path::Path;
use tracing::debug;

/// Supported file formats for schema parsing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// YAML format (.yaml, .yml)
    Yaml,
    /// JSON format (.json)
    Json,
}

impl Format {
    /// Detect format from file extension
    pub fn from_path(path: &Path) -> Result<Self> {
        if let Some(extension) = path.extension().and_then(|ext| ext.to_str()) {
            match extension.to_lowercase().as_str() {
                "yaml" | "yml" => Ok(Format::Yaml),
                "json" => Ok(Format::Json),
                _ => Err(SchemaError::unsupported_format(path)),
            }
        } else {
            Err(SchemaError::unsupported_format(path))
        }
    }

    /// Get file extensions for this format
    pub fn extensions(&self) -> &'static [&'static str] {
        match self {
            Format::Yaml => &["yaml", "yml"],
            Format::Json => &["json"],
        }
    }
}

/// Parser that turns schema text into a JSON value
///
/// YAML input is parsed with `serde_yaml` and converted to a JSON value so
/// the rest of the pipeline handles one representation. Mapping order
/// survives both routes; `serde_json` is built with `preserve_order`.
#[derive(Debug)]
pub struct SchemaParser;

impl SchemaParser {
    /// Create a new schema parser
    pub fn new() -> Self {
        Self
    }

    /// Parse a schema file, detecting format from extension
    pub fn parse_file(&self, path: &Path) -> Result<Value> {
        let format = Format::from_path(path)?;
        debug!(path = %path.display(), ?format, "parsing schema file");
        let content =
            std::fs::read_to_string(path).map_err(|e| SchemaError::io_error(path, e))?;

        self.parse_content(&content, format, path)
    }

    /// Parse schema content with explicit format
    pub fn parse_content(&self, content: &str, format: Format, path: &Path) -> Result<Value> {
        match format {
            Format::Yaml => self.parse_yaml(content, path),
            Format::Json => self.parse_json(content, path),
        }
    }

    /// Parse YAML content
    pub fn parse_yaml(&self, content: &str, path: &Path) -> Result<Value> {
        // Parse as a YAML value first to surface YAML-specific errors.
        let yaml_value: serde_yaml::Value = serde_yaml::from_str(content)
            .map_err(|e| SchemaError::yaml_parse_error(path, e))?;

        serde_json::to_value(yaml_value).map_err(|e| SchemaError::json_parse_error(path, e))
    }

    /// Parse JSON content
    pub fn parse_json(&self, content: &str, path: &Path) -> Result<Value> {
        serde_json::from_str(content).map_err(|e| SchemaError::json_parse_error(path, e))
    }
}

impl Default for SchemaParser {
    fn default() -> Self {
        Self::new()
    }
}
