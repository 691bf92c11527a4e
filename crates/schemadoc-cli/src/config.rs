//! Configuration management for the CLI
//!
//! This module handles loading configuration from:
//! - Default values
//! - Configuration files (YAML/JSON)
//! - Command-line arguments (applied by the handlers)

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Rendering defaults
    pub render: RenderConfig,

    /// Output settings
    pub output: OutputConfig,
}

/// Rendering defaults applied when the command line leaves them unset
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Default document title override
    pub title: Option<String>,

    /// Skip the title and description header
    pub omit_header: bool,

    /// Render example blocks as YAML instead of JSON
    pub examples_as_yaml: bool,
}

/// Output configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Use colored output by default
    pub color: bool,

    /// Default verbosity level
    pub verbosity: u8,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            render: RenderConfig::default(),
            output: OutputConfig::default(),
        }
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            title: None,
            omit_header: false,
            examples_as_yaml: false,
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            color: true,
            verbosity: 0,
        }
    }
}

impl Config {
    /// Load configuration from a file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;

        let config = if path.extension().and_then(|s| s.to_str()) == Some("yaml")
            || path.extension().and_then(|s| s.to_str()) == Some("yml")
        {
            serde_yaml::from_str(&content)?
        } else {
            serde_json::from_str(&content)?
        };

        Ok(config)
    }

    /// Load configuration from default locations
    pub fn load() -> Result<Self> {
        let config_paths = Self::default_config_paths();

        for path in &config_paths {
            if path.exists() {
                match Self::from_file(path) {
                    Ok(config) => return Ok(config),
                    Err(e) => {
                        eprintln!("Warning: Failed to load config from {:?}: {}", path, e);
                    }
                }
            }
        }

        // Return default config if no config file found
        Ok(Self::default())
    }

    /// Load configuration from a specific file or default locations
    pub fn load_with_file(file: Option<&Path>) -> Result<Self> {
        match file {
            Some(path) if !path.exists() => Err(Error::config(format!(
                "config file not found: {}",
                path.display()
            ))),
            Some(path) => Self::from_file(path),
            None => Self::load(),
        }
    }

    /// Get default configuration file paths to check
    fn default_config_paths() -> Vec<PathBuf> {
        let mut paths = Vec::new();

        // Current directory
        paths.push(PathBuf::from(".schemadoc.yaml"));
        paths.push(PathBuf::from(".schemadoc.json"));
        paths.push(PathBuf::from("schemadoc.yaml"));
        paths.push(PathBuf::from("schemadoc.json"));

        // User config directory
        if let Some(config_dir) = dirs::config_dir() {
            let schemadoc_dir = config_dir.join("schemadoc");
            paths.push(schemadoc_dir.join("config.yaml"));
            paths.push(schemadoc_dir.join("config.json"));
        }

        // Home directory
        if let Some(home_dir) = dirs::home_dir() {
            paths.push(home_dir.join(".schemadoc.yaml"));
            paths.push(home_dir.join(".schemadoc.json"));
        }

        paths
    }
}
