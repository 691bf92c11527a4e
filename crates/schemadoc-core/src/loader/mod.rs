//! Schema loading
//!
//! Reading YAML or JSON from disk is separated from building the typed
//! document model: [`parser`] turns bytes into `serde_json::Value` with key
//! order intact, [`builder`] turns that value into a [`SchemaDocument`].
//! The functions here combine the two for the common cases.
//!
//! Copyright (c) 2025 Schemadoc Team
//! Licensed under the Apache-2.0 license

pub mod builder;
pub mod parser;

pub use builder::{build_document, build_node};
pub use parser::{Format, SchemaParser};

use crate::error::Result;
use crate::types::SchemaDocument;
use serde_json::Value;
use std::path::Path;
use tracing::debug;

/// Load a schema document from a `.json`, `.yaml`, or `.yml` file.
pub fn load_schema_file(path: impl AsRef<Path>) -> Result<SchemaDocument> {
    let path = path.as_ref();
    debug!(path = %path.display(), "loading schema file");
    let value = SchemaParser::new().parse_file(path)?;
    build_document(&value)
}

/// Build a schema document from an already parsed JSON value.
pub fn from_value(value: &Value) -> Result<SchemaDocument> {
    build_document(value)
}

/// Build a schema document from schema text in the given format.
pub fn from_str(content: &str, format: Format) -> Result<SchemaDocument> {
    let value = SchemaParser::new().parse_content(content, format, Path::new("<input>"))?;
    build_document(&value)
}
