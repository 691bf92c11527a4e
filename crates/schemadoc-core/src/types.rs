//! Core data model for parsed JSON Schema documents
//!
//! A schema file is parsed into a [`SchemaDocument`]: a root [`SchemaNode`]
//! tree, an arena of named definitions, dependency constraints, and top-level
//! examples. All maps preserve the insertion order of the source document;
//! nothing in the pipeline reorders what the schema author wrote.
//!
//! Copyright (c) 2025 Schemadoc Team
//! Licensed under the Apache-2.0 license

use indexmap::IndexMap;
use serde_json::{Number, Value};

/// A fully built schema document, ready for rendering
#[derive(Debug, Clone, PartialEq)]
pub struct SchemaDocument {
    /// The schema object itself; its title and description feed the header
    pub root: SchemaNode,

    /// Named definitions collected from `definitions` and `$defs`,
    /// in encounter order
    pub definitions: IndexMap<String, SchemaNode>,

    /// Conditional constraints keyed by the triggering property name
    pub dependencies: IndexMap<String, DependencyConstraint>,

    /// Top-level illustrative instances, order preserved
    pub examples: Vec<Value>,
}

impl SchemaDocument {
    /// Look up the definition a `$ref` pointer targets.
    ///
    /// Returns `None` for pointer shapes that are not plain
    /// `#/definitions/{name}` or `#/$defs/{name}` lookups, and for names
    /// absent from the arena.
    pub fn resolve(&self, pointer: &str) -> Option<&SchemaNode> {
        definition_name(pointer).and_then(|name| self.definitions.get(name))
    }
}

/// Extract the definition name from a supported `$ref` pointer
pub fn definition_name(pointer: &str) -> Option<&str> {
    pointer
        .strip_prefix("#/definitions/")
        .or_else(|| pointer.strip_prefix("#/$defs/"))
        .filter(|name| !name.is_empty() && !name.contains('/'))
}

/// One node of the schema tree: common annotations plus a structural variant
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SchemaNode {
    /// The `title` keyword
    pub title: Option<String>,

    /// The `description` keyword
    pub description: Option<String>,

    /// Structural shape; drives the type annotation and recursion
    pub kind: SchemaKind,

    /// Permitted literals from `enum`, order preserved
    pub enum_values: Option<Vec<Value>>,

    /// The single permitted literal from `const`
    pub const_value: Option<Value>,

    /// The `default` keyword
    pub default: Option<Value>,

    /// Numeric lower bound from `minimum`
    pub minimum: Option<Number>,

    /// Numeric upper bound from `maximum`
    pub maximum: Option<Number>,

    /// The `additionalProperties` keyword, boolean or schema-valued
    pub additional: Option<Additional>,
}

impl SchemaNode {
    /// Create a node of the given kind with no annotations
    pub fn new(kind: SchemaKind) -> Self {
        Self {
            kind,
            ..Self::default()
        }
    }
}

/// Structural variants of a schema node
#[derive(Debug, Clone, Default, PartialEq)]
pub enum SchemaKind {
    /// An object schema with named and pattern-keyed properties
    Object {
        properties: IndexMap<String, SchemaNode>,
        pattern_properties: IndexMap<String, SchemaNode>,
    },

    /// An array schema and its item schema, if declared
    Array { items: Option<Box<SchemaNode>> },

    /// Scalar leaves
    String,
    Integer,
    Number,
    Boolean,
    Null,

    /// A `$ref`; rendered as the pointer text, never resolved inline
    Reference { pointer: String },

    /// An `allOf` / `anyOf` / `oneOf` with its ordered branches
    Combinator {
        combinator: Combinator,
        branches: Vec<SchemaNode>,
    },

    /// No `type` keyword and no inferable shape; the type annotation
    /// is omitted from the output
    #[default]
    Untyped,
}

impl SchemaKind {
    /// The human-readable type name, if this kind names one
    pub fn type_name(&self) -> Option<&'static str> {
        match self {
            Self::Object { .. } => Some("object"),
            Self::Array { .. } => Some("array"),
            Self::String => Some("string"),
            Self::Integer => Some("integer"),
            Self::Number => Some("number"),
            Self::Boolean => Some("boolean"),
            Self::Null => Some("null"),
            Self::Reference { .. } | Self::Combinator { .. } | Self::Untyped => None,
        }
    }
}

/// Combinator keywords
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Combinator {
    AllOf,
    AnyOf,
    OneOf,
}

impl Combinator {
    /// The schema keyword this combinator parses from
    pub fn keyword(&self) -> &'static str {
        match self {
            Self::AllOf => "allOf",
            Self::AnyOf => "anyOf",
            Self::OneOf => "oneOf",
        }
    }

    /// The section label used in rendered output
    pub fn label(&self) -> &'static str {
        match self {
            Self::AllOf => "All of",
            Self::AnyOf => "Any of",
            Self::OneOf => "One of",
        }
    }
}

/// The `additionalProperties` keyword
#[derive(Debug, Clone, PartialEq)]
pub enum Additional {
    /// Boolean form: additional properties allowed or forbidden
    Allowed(bool),

    /// Schema form: additional properties must match this schema
    Schema(Box<SchemaNode>),
}

/// A parsed `dependencies` entry
#[derive(Debug, Clone, PartialEq)]
pub enum DependencyConstraint {
    /// The triggering property is restricted to `values`; each annotation
    /// is a side property with its own permitted literal list
    EnumChoice {
        values: Vec<Value>,
        annotations: IndexMap<String, Vec<Value>>,
    },

    /// Ordered alternatives, each a constraint of its own
    OneOf(Vec<DependencyConstraint>),
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_definition_name() {
        assert_eq!(definition_name("#/definitions/veggie"), Some("veggie"));
        assert_eq!(definition_name("#/$defs/veggie"), Some("veggie"));
        assert_eq!(definition_name("#/definitions/a/b"), None);
        assert_eq!(definition_name("#/definitions/"), None);
        assert_eq!(definition_name("#/properties/x"), None);
        assert_eq!(definition_name("http://example.com/schema.json"), None);
    }

    #[test]
    fn test_resolve() {
        let mut definitions = IndexMap::new();
        definitions.insert("veggie".to_string(), SchemaNode::new(SchemaKind::String));
        let doc = SchemaDocument {
            root: SchemaNode::default(),
            definitions,
            dependencies: IndexMap::new(),
            examples: vec![json!({"veggie": "potato"})],
        };

        assert!(doc.resolve("#/definitions/veggie").is_some());
        assert!(doc.resolve("#/$defs/veggie").is_some());
        assert!(doc.resolve("#/definitions/fruit").is_none());
    }

    #[test]
    fn test_type_names() {
        assert_eq!(SchemaKind::String.type_name(), Some("string"));
        assert_eq!(
            SchemaKind::Array { items: None }.type_name(),
            Some("array")
        );
        assert_eq!(SchemaKind::Untyped.type_name(), None);
        assert_eq!(
            SchemaKind::Reference {
                pointer: "#/definitions/x".to_string()
            }
            .type_name(),
            None
        );
    }

    #[test]
    fn test_combinator_labels() {
        assert_eq!(Combinator::AllOf.keyword(), "allOf");
        assert_eq!(Combinator::AnyOf.label(), "Any of");
        assert_eq!(Combinator::OneOf.label(), "One of");
    }
}
