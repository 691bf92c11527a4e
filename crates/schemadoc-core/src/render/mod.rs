//! Markdown rendering
//!
//! [`Renderer`] walks a [`SchemaDocument`] and emits Markdown with a fixed
//! section order: header, Additional Properties, Pattern Properties,
//! Properties, Items, Definitions, Dependencies, Examples. Sections without
//! content are omitted. Rendering is pure; identical input and options yield
//! byte-identical output.
//!
//! References are rendered as cross-reference text and resolved against the
//! document's definition arena only to verify they exist. Targets are never
//! inlined, so cyclic schemas terminate by construction.
//!
//! Copyright (c) 2025 Schemadoc Team
//! Licensed under the Apache-2.0 license

pub mod templates;

pub use templates::Template;

use crate::error::{Result, SchemaError};
use crate::types::{
    Additional, DependencyConstraint, SchemaDocument, SchemaKind, SchemaNode,
};
use serde_json::Value;
use tracing::debug;

/// Header title used when neither the options nor the schema provide one.
pub const DEFAULT_TITLE: &str = "JSON Schema";

/// Options controlling document-level rendering behavior.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RenderOptions {
    /// Header title override. Falls back to the schema's own `title`, then
    /// to [`DEFAULT_TITLE`].
    pub title: Option<String>,
    /// Skip the title/description header, for embedding into larger files.
    pub omit_header: bool,
    /// Render example blocks as YAML instead of JSON.
    pub examples_as_yaml: bool,
}

/// Renders schema documents to Markdown.
#[derive(Debug, Clone, Default)]
pub struct Renderer {
    options: RenderOptions,
}

impl Renderer {
    /// Create a renderer with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a renderer with the given options.
    pub fn with_options(options: RenderOptions) -> Self {
        Self { options }
    }

    /// Render a document to a single Markdown string.
    pub fn render(&self, doc: &SchemaDocument) -> Result<String> {
        Ok(self.render_lines(doc)?.concat())
    }

    /// Render a document as the sequence of lines that [`Self::render`]
    /// concatenates. This granularity feeds marker-based injection.
    pub fn render_lines(&self, doc: &SchemaDocument) -> Result<Vec<String>> {
        debug!(
            definitions = doc.definitions.len(),
            dependencies = doc.dependencies.len(),
            examples = doc.examples.len(),
            "rendering schema document"
        );

        let mut lines = Vec::new();

        if !self.options.omit_header {
            let title = self
                .options
                .title
                .as_deref()
                .or(doc.root.title.as_deref())
                .unwrap_or(DEFAULT_TITLE);
            lines.push(Template::header(title, doc.root.description.as_deref()));
        }

        self.render_additional_section(doc, &mut lines)?;
        self.render_pattern_section(doc, &mut lines)?;
        self.render_properties_section(doc, &mut lines)?;
        self.render_items_section(doc, &mut lines)?;
        self.render_definitions_section(doc, &mut lines)?;
        self.render_dependencies_section(doc, &mut lines);
        self.render_examples_section(doc, &mut lines);

        Ok(lines)
    }

    fn render_additional_section(
        &self,
        doc: &SchemaDocument,
        lines: &mut Vec<String>,
    ) -> Result<()> {
        let Some(Additional::Schema(node)) = &doc.root.additional else {
            return Ok(());
        };
        lines.push(Template::section("Additional Properties"));
        self.render_node(
            &Template::synthetic_label("Additional Properties"),
            node,
            0,
            "#/additionalProperties",
            doc,
            lines,
        )
    }

    fn render_pattern_section(&self, doc: &SchemaDocument, lines: &mut Vec<String>) -> Result<()> {
        let SchemaKind::Object {
            pattern_properties, ..
        } = &doc.root.kind
        else {
            return Ok(());
        };
        if pattern_properties.is_empty() {
            return Ok(());
        }
        lines.push(Template::section("Pattern Properties"));
        for (pattern, node) in pattern_properties {
            self.render_node(
                &Template::property_label(pattern),
                node,
                0,
                &format!("#/patternProperties/{pattern}"),
                doc,
                lines,
            )?;
        }
        Ok(())
    }

    fn render_properties_section(
        &self,
        doc: &SchemaDocument,
        lines: &mut Vec<String>,
    ) -> Result<()> {
        let SchemaKind::Object { properties, .. } = &doc.root.kind else {
            return Ok(());
        };
        if properties.is_empty() {
            return Ok(());
        }
        lines.push(Template::section("Properties"));
        for (name, node) in properties {
            self.render_node(
                &Template::property_label(name),
                node,
                0,
                &format!("#/properties/{name}"),
                doc,
                lines,
            )?;
        }
        Ok(())
    }

    fn render_items_section(&self, doc: &SchemaDocument, lines: &mut Vec<String>) -> Result<()> {
        let SchemaKind::Array { items: Some(items) } = &doc.root.kind else {
            return Ok(());
        };
        lines.push(Template::section("Items"));
        self.render_node(
            &Template::synthetic_label("Items"),
            items,
            0,
            "#/items",
            doc,
            lines,
        )
    }

    fn render_definitions_section(
        &self,
        doc: &SchemaDocument,
        lines: &mut Vec<String>,
    ) -> Result<()> {
        if doc.definitions.is_empty() {
            return Ok(());
        }
        lines.push(Template::section("Definitions"));
        for (name, node) in &doc.definitions {
            self.render_node(
                &Template::property_label(name),
                node,
                0,
                &format!("#/definitions/{name}"),
                doc,
                lines,
            )?;
        }
        Ok(())
    }

    fn render_dependencies_section(&self, doc: &SchemaDocument, lines: &mut Vec<String>) {
        if doc.dependencies.is_empty() {
            return;
        }
        lines.push(Template::section("Dependencies"));
        for (name, constraint) in &doc.dependencies {
            lines.push(Template::bullet(0, &Template::property_label(name)));
            Self::render_constraint(constraint, 1, lines);
        }
    }

    fn render_examples_section(&self, doc: &SchemaDocument, lines: &mut Vec<String>) {
        if doc.examples.is_empty() {
            return;
        }
        lines.push(Template::section("Examples"));
        for example in &doc.examples {
            lines.push(if self.options.examples_as_yaml {
                Template::yaml_block(example, 1)
            } else {
                Template::json_block(example, 1)
            });
        }
    }

    /// Render one labeled node bullet and recurse into its children.
    ///
    /// `path` is the JSON pointer of the render position, threaded through
    /// the recursion so reference errors point at the referencing site.
    fn render_node(
        &self,
        label: &str,
        node: &SchemaNode,
        indent: usize,
        path: &str,
        doc: &SchemaDocument,
        lines: &mut Vec<String>,
    ) -> Result<()> {
        if let SchemaKind::Reference { pointer } = &node.kind {
            if doc.resolve(pointer).is_none() {
                return Err(SchemaError::unresolved_reference(pointer, path));
            }
        }

        let mut body = label.to_string();
        if let Some(type_name) = node.kind.type_name() {
            body.push_str(&format!(" *({type_name})*"));
        }
        body.push_str(&Template::description_line(node));
        lines.push(Template::bullet(indent, &body));

        self.render_children(node, indent + 1, path, doc, lines)
    }

    fn render_children(
        &self,
        node: &SchemaNode,
        indent: usize,
        path: &str,
        doc: &SchemaDocument,
        lines: &mut Vec<String>,
    ) -> Result<()> {
        match &node.kind {
            SchemaKind::Object {
                properties,
                pattern_properties,
            } => {
                for (name, child) in properties {
                    self.render_node(
                        &Template::property_label(name),
                        child,
                        indent,
                        &format!("{path}/properties/{name}"),
                        doc,
                        lines,
                    )?;
                }
                for (pattern, child) in pattern_properties {
                    self.render_node(
                        &Template::property_label(pattern),
                        child,
                        indent,
                        &format!("{path}/patternProperties/{pattern}"),
                        doc,
                        lines,
                    )?;
                }
            }
            SchemaKind::Array { items: Some(items) } => {
                self.render_node(
                    &Template::synthetic_label("Items"),
                    items,
                    indent,
                    &format!("{path}/items"),
                    doc,
                    lines,
                )?;
            }
            SchemaKind::Combinator {
                combinator,
                branches,
            } => {
                lines.push(Template::bullet(
                    indent,
                    &Template::synthetic_label(combinator.label()),
                ));
                for (index, branch) in branches.iter().enumerate() {
                    self.render_branch(
                        branch,
                        indent + 1,
                        &format!("{path}/{}/{index}", combinator.keyword()),
                        doc,
                        lines,
                    )?;
                }
            }
            _ => {}
        }

        if let Some(Additional::Schema(additional)) = &node.additional {
            self.render_node(
                &Template::synthetic_label("Additional Properties"),
                additional,
                indent,
                &format!("{path}/additionalProperties"),
                doc,
                lines,
            )?;
        }

        Ok(())
    }

    /// Combinator branches carry no property name; the bullet leads with the
    /// branch type in italics when one is known.
    fn render_branch(
        &self,
        branch: &SchemaNode,
        indent: usize,
        path: &str,
        doc: &SchemaDocument,
        lines: &mut Vec<String>,
    ) -> Result<()> {
        if let SchemaKind::Reference { pointer } = &branch.kind {
            if doc.resolve(pointer).is_none() {
                return Err(SchemaError::unresolved_reference(pointer, path));
            }
        }

        let body = match branch.kind.type_name() {
            Some(type_name) => format!("*{type_name}*{}", Template::description_line(branch)),
            None => {
                let parts = Template::description_parts(branch);
                if parts.is_empty() {
                    "*untyped*".to_string()
                } else {
                    parts.join(" ")
                }
            }
        };
        lines.push(Template::bullet(indent, &body));

        self.render_children(branch, indent + 1, path, doc, lines)
    }

    fn render_constraint(
        constraint: &DependencyConstraint,
        indent: usize,
        lines: &mut Vec<String>,
    ) {
        match constraint {
            DependencyConstraint::OneOf(branches) => {
                lines.push(Template::bullet(indent, &Template::synthetic_label("One of")));
                for branch in branches {
                    Self::render_constraint(branch, indent + 1, lines);
                }
            }
            DependencyConstraint::EnumChoice {
                values,
                annotations,
            } => {
                lines.push(Template::bullet(indent, &Self::choice_label(values)));
                for (name, literals) in annotations {
                    let body = format!(
                        "{}: {}",
                        Template::property_label(name),
                        Self::choice_label(literals)
                    );
                    lines.push(Template::bullet(indent + 1, &body));
                }
            }
        }
    }

    /// A single permitted value renders as bare inline code; several render
    /// as an enum listing.
    fn choice_label(values: &[Value]) -> String {
        match values {
            [single] => Template::literal(single),
            many => Template::enum_values(many),
        }
    }
}

/// Render a document with default options.
pub fn render_markdown(doc: &SchemaDocument) -> Result<String> {
    Renderer::new().render(doc)
}
