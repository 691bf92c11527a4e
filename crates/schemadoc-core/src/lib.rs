//! Schemadoc - JSON Schema to Markdown documentation
//!
//! This crate turns JSON Schema documents (draft-07 style) into deterministic,
//! human-readable Markdown:
//! - **Loader**: JSON/YAML schema files parsed into a typed document model,
//!   with fail-fast structural validation and insertion order preserved
//!   end-to-end
//! - **Renderer**: pure schema-to-Markdown transform with a fixed section
//!   order, byte-identical output for identical input
//! - **Injection**: splicing generated sections between markers in existing
//!   Markdown files
//!
//! ## Quick Start
//!
//! ```rust
//! use schemadoc_core::{loader, render_markdown};
//! use serde_json::json;
//!
//! let schema = json!({
//!     "title": "Pet",
//!     "type": "object",
//!     "properties": {
//!         "name": {"type": "string", "description": "The pet's name."},
//!         "age": {"type": "integer", "minimum": 0}
//!     }
//! });
//!
//! let doc = loader::from_value(&schema).unwrap();
//! let markdown = render_markdown(&doc).unwrap();
//!
//! assert!(markdown.starts_with("# Pet\n"));
//! assert!(markdown.contains("- **`name`** *(string)*: The pet's name.\n"));
//! assert!(markdown.contains("- **`age`** *(integer)*: Minimum: `0`.\n"));
//! ```
//!
//! ## Guarantees
//!
//! - Properties, definitions, dependencies, enum literals, and example keys
//!   appear in schema authoring order; nothing is sorted
//! - `$ref` targets are cross-referenced, never inlined, so cyclic schemas
//!   render without recursion issues and each definition body appears once
//! - Structural problems (malformed dependencies, non-schema values) fail
//!   before any output is produced
//!
//! Copyright (c) 2025 Schemadoc Team
//! Licensed under the Apache-2.0 license

pub mod error;
pub mod inject;
pub mod loader;
pub mod render;
pub mod types;

// Re-export commonly used types for convenience
pub use error::{Result, SchemaError};
pub use inject::{replace_between_markers, write_lines_between_markers};
pub use loader::{build_document, from_str, from_value, load_schema_file, Format, SchemaParser};
pub use render::{render_markdown, RenderOptions, Renderer, DEFAULT_TITLE};
pub use types::{
    Additional, Combinator, DependencyConstraint, SchemaDocument, SchemaKind, SchemaNode,
};

/// Library version from the crate manifest.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
