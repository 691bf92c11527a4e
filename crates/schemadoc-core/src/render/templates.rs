//! Markdown fragments for rendered schema documentation
//!
//! Copyright (c) 2025 Schemadoc Team
//! Licensed under the Apache-2.0 license

use crate::types::{Additional, SchemaKind, SchemaNode};
use serde::Serialize;
use serde_json::Value;

/// Line-level builders for the generated Markdown.
///
/// Everything here is a pure string transform. The fragment grammar is part
/// of the observable contract: downstream documents embed the output, so any
/// change to these shapes is a breaking change.
pub struct Template;

impl Template {
    /// Generate the document header: title plus optional italic description.
    pub fn header(title: &str, description: Option<&str>) -> String {
        let mut result = format!("# {title}\n\n");
        if let Some(description) = description {
            result.push_str(&format!("*{description}*\n\n"));
        }
        result
    }

    /// Generate a section heading line.
    pub fn section(title: &str) -> String {
        format!("## {title}\n\n")
    }

    /// Generate one bullet line at the given nesting depth.
    pub fn bullet(indent: usize, body: &str) -> String {
        format!("{}- {body}\n", "  ".repeat(indent))
    }

    /// Label for a named property, pattern, or definition.
    pub fn property_label(name: &str) -> String {
        format!("**`{name}`**")
    }

    /// Label for a synthetic node such as **Items** or **One of**.
    pub fn synthetic_label(name: &str) -> String {
        format!("**{name}**")
    }

    /// Render a literal value as inline code. Strings appear bare inside the
    /// backticks; everything else is compact JSON.
    pub fn literal(value: &Value) -> String {
        match value {
            Value::String(text) => format!("`{text}`"),
            other => format!("`{other}`"),
        }
    }

    /// Generate the enum listing fragment.
    pub fn enum_values(values: &[Value]) -> String {
        let listed: Vec<String> = values.iter().map(Self::literal).collect();
        format!("Must be one of: {}.", listed.join(", "))
    }

    /// Generate the cross-reference fragment for a `$ref` target.
    pub fn refer_to(pointer: &str) -> String {
        format!("Refer to *{pointer}*.")
    }

    /// Collect the sentence fragments of a node's description line, in their
    /// fixed order: description, bounds, additional-properties note, literal
    /// constraints, cross-reference, default.
    pub fn description_parts(node: &SchemaNode) -> Vec<String> {
        let mut parts = Vec::new();

        if let Some(description) = &node.description {
            parts.push(Self::sentence(description));
        }
        if let Some(minimum) = &node.minimum {
            parts.push(format!("Minimum: `{minimum}`."));
        }
        if let Some(maximum) = &node.maximum {
            parts.push(format!("Maximum: `{maximum}`."));
        }
        if let Some(Additional::Allowed(allowed)) = &node.additional {
            parts.push(if *allowed {
                "Can contain additional properties.".to_string()
            } else {
                "Cannot contain additional properties.".to_string()
            });
        }
        if let Some(values) = &node.enum_values {
            parts.push(Self::enum_values(values));
        } else if let Some(value) = &node.const_value {
            parts.push(format!("Must be: {}.", Self::literal(value)));
        }
        if let SchemaKind::Reference { pointer } = &node.kind {
            parts.push(Self::refer_to(pointer));
        }
        if let Some(default) = &node.default {
            parts.push(format!("Default: {}.", Self::literal(default)));
        }

        parts
    }

    /// Generate the `: ...` tail of a bullet, or an empty string when the
    /// node carries no annotations.
    pub fn description_line(node: &SchemaNode) -> String {
        let parts = Self::description_parts(node);
        if parts.is_empty() {
            String::new()
        } else {
            format!(": {}", parts.join(" "))
        }
    }

    /// Generate an indented fenced JSON block with four-space nesting.
    pub fn json_block(value: &Value, indent: usize) -> String {
        Self::fenced(&Self::pretty_json(value), "json", indent)
    }

    /// Generate an indented fenced YAML block.
    pub fn yaml_block(value: &Value, indent: usize) -> String {
        let body = serde_yaml::to_string(value).unwrap_or_default();
        Self::fenced(body.trim_end(), "yaml", indent)
    }

    fn sentence(text: &str) -> String {
        let trimmed = text.trim_end();
        if trimmed.ends_with(['.', '!', '?', ':', ';']) {
            trimmed.to_string()
        } else {
            format!("{trimmed}.")
        }
    }

    fn fenced(body: &str, language: &str, indent: usize) -> String {
        let pad = "  ".repeat(indent);
        let mut result = format!("{pad}```{language}\n");
        for line in body.lines() {
            if line.is_empty() {
                result.push('\n');
            } else {
                result.push_str(&pad);
                result.push_str(line);
                result.push('\n');
            }
        }
        result.push_str(&format!("{pad}```\n\n"));
        result
    }

    fn pretty_json(value: &Value) -> String {
        let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
        let mut buffer = Vec::new();
        let mut serializer = serde_json::Serializer::with_formatter(&mut buffer, formatter);
        match value.serialize(&mut serializer) {
            Ok(()) => String::from_utf8(buffer).unwrap_or_else(|_| value.to_string()),
            Err(_) => value.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Number};

    #[test]
    fn test_header_generation() {
        assert_eq!(
            Template::header("Vegetables", Some("Vegetable preferences")),
            "# Vegetables\n\n*Vegetable preferences*\n\n"
        );
        assert_eq!(Template::header("Vegetables", None), "# Vegetables\n\n");
    }

    #[test]
    fn test_bullet_indentation() {
        assert_eq!(Template::bullet(0, "**`a`**"), "- **`a`**\n");
        assert_eq!(Template::bullet(2, "x"), "    - x\n");
    }

    #[test]
    fn test_literal_forms() {
        assert_eq!(Template::literal(&json!("apple")), "`apple`");
        assert_eq!(Template::literal(&json!(42)), "`42`");
        assert_eq!(Template::literal(&json!(true)), "`true`");
        assert_eq!(Template::literal(&json!([1, 2, 3])), "`[1,2,3]`");
        assert_eq!(Template::literal(&json!(null)), "`null`");
    }

    #[test]
    fn test_enum_values_generation() {
        let fragment = Template::enum_values(&[json!("peanut butter"), json!("caramel")]);
        assert_eq!(fragment, "Must be one of: `peanut butter`, `caramel`.");
    }

    #[test]
    fn test_sentence_termination() {
        assert_eq!(Template::sentence("The name"), "The name.");
        assert_eq!(Template::sentence("The name."), "The name.");
        assert_eq!(
            Template::sentence("Do I like this vegetable?"),
            "Do I like this vegetable?"
        );
    }

    #[test]
    fn test_description_line_order() {
        let node = SchemaNode {
            description: Some("Number of vegetables".to_string()),
            minimum: Some(Number::from(0)),
            maximum: Some(Number::from(999)),
            additional: Some(Additional::Allowed(true)),
            default: Some(json!(0)),
            kind: SchemaKind::Number,
            ..Default::default()
        };

        assert_eq!(
            Template::description_line(&node),
            ": Number of vegetables. Minimum: `0`. Maximum: `999`. \
             Can contain additional properties. Default: `0`."
        );
    }

    #[test]
    fn test_description_line_empty() {
        assert_eq!(Template::description_line(&SchemaNode::default()), "");
    }

    #[test]
    fn test_reference_description_line() {
        let node = SchemaNode {
            kind: SchemaKind::Reference {
                pointer: "#/definitions/veggie".to_string(),
            },
            ..Default::default()
        };
        assert_eq!(
            Template::description_line(&node),
            ": Refer to *#/definitions/veggie*."
        );
    }

    #[test]
    fn test_json_block() {
        let block = Template::json_block(&json!({"fruits": ["apple", "orange"]}), 1);
        assert_eq!(
            block,
            "  ```json\n  {\n      \"fruits\": [\n          \"apple\",\n          \"orange\"\n      ]\n  }\n  ```\n\n"
        );
    }

    #[test]
    fn test_yaml_block() {
        let block = Template::yaml_block(&json!({"fruits": ["apple", "orange"]}), 1);
        assert_eq!(block, "  ```yaml\n  fruits:\n  - apple\n  - orange\n  ```\n\n");
    }
}
