//! Marker-based injection into existing Markdown files
//!
//! Generated documentation is spliced between HTML-comment markers so that
//! hand-written content around the region survives regeneration:
//!
//! ```markdown
//! <!-- schemadoc: begin schema -->
//! ...generated lines...
//! <!-- schemadoc: end schema -->
//! ```
//!
//! Copyright (c) 2025 Schemadoc Team
//! Licensed under the Apache-2.0 license

use crate::error::{Result, SchemaError};
use std::fs;
use std::path::Path;
use tracing::debug;

/// The opening marker for a token.
pub fn begin_marker(token: &str) -> String {
    format!("<!-- schemadoc: begin {token} -->")
}

/// The closing marker for a token.
pub fn end_marker(token: &str) -> String {
    format!("<!-- schemadoc: end {token} -->")
}

/// Replace the region between the token's markers with the given lines.
///
/// The markers themselves are kept. Fails with `MissingMarker` when either
/// marker is absent or the closing marker precedes the opening one.
pub fn replace_between_markers(content: &str, lines: &[String], token: &str) -> Result<String> {
    let begin = begin_marker(token);
    let end = end_marker(token);

    let begin_at = content
        .find(&begin)
        .ok_or_else(|| SchemaError::missing_marker(token))?;
    let after_begin = begin_at + begin.len();
    let end_at = content[after_begin..]
        .find(&end)
        .map(|offset| after_begin + offset)
        .ok_or_else(|| SchemaError::missing_marker(token))?;

    let mut result = String::with_capacity(content.len());
    result.push_str(&content[..after_begin]);
    result.push('\n');
    for line in lines {
        result.push_str(line);
    }
    if !result.ends_with('\n') {
        result.push('\n');
    }
    result.push_str(&content[end_at..]);
    Ok(result)
}

/// Rewrite the marked region of a Markdown file in place.
///
/// The file is left untouched when the markers are missing or any I/O step
/// fails.
pub fn write_lines_between_markers(
    path: impl AsRef<Path>,
    lines: &[String],
    token: &str,
) -> Result<()> {
    let path = path.as_ref();
    debug!(path = %path.display(), token, "injecting generated lines");

    let content = fs::read_to_string(path).map_err(|e| SchemaError::io_error(path, e))?;
    let updated = replace_between_markers(&content, lines, token)?;
    fs::write(path, updated).map_err(|e| SchemaError::io_error(path, e))?;
    Ok(())
}
