//! Building typed schema documents from parsed JSON values
//!
//! The builder walks a `serde_json::Value` and produces the typed model in
//! [`crate::types`], failing fast on structurally invalid input. Errors carry
//! the JSON pointer of the offending location, fragment style (`#`,
//! `#/properties/fruits`).
//!
//! Copyright (c) 2025 Schemadoc Team
//! Licensed under the Apache-2.0 license

use crate::error::{Result, SchemaError};
use crate::types::{
    Additional, Combinator, DependencyConstraint, SchemaDocument, SchemaKind, SchemaNode,
};
use indexmap::IndexMap;
use serde_json::{Map, Number, Value};
use tracing::debug;

/// Build a schema document from a parsed JSON value.
///
/// Dependencies that reduce to neither an enum choice nor a `oneOf` are
/// rejected here, before any rendering can begin.
pub fn build_document(value: &Value) -> Result<SchemaDocument> {
    let obj = match value {
        Value::Object(obj) => obj,
        _ => {
            return Err(SchemaError::invalid_schema(
                "#",
                "schema root must be a JSON object",
            ))
        }
    };

    let root = build_node(value, "#")?;

    let mut definitions = IndexMap::new();
    for key in ["definitions", "$defs"] {
        if let Some(defs) = obj.get(key) {
            let map = defs.as_object().ok_or_else(|| {
                SchemaError::invalid_schema(
                    format!("#/{key}"),
                    format!("'{key}' must be an object of named schemas"),
                )
            })?;
            for (name, sub) in map {
                let node = build_node(sub, &format!("#/{key}/{name}"))?;
                definitions.insert(name.clone(), node);
            }
        }
    }

    let mut dependencies = IndexMap::new();
    if let Some(deps) = obj.get("dependencies") {
        let map = deps.as_object().ok_or_else(|| {
            SchemaError::malformed_dependency(
                "#/dependencies",
                "'dependencies' must be an object keyed by property name",
            )
        })?;
        for (name, entry) in map {
            let pointer = format!("#/dependencies/{name}");
            let constraint = build_dependency(name, entry, &pointer)?;
            dependencies.insert(name.clone(), constraint);
        }
    }

    let examples = array_field(obj, "examples", "#")?.unwrap_or_default();

    debug!(
        definitions = definitions.len(),
        dependencies = dependencies.len(),
        examples = examples.len(),
        "built schema document"
    );

    Ok(SchemaDocument {
        root,
        definitions,
        dependencies,
        examples,
    })
}

/// Build a single schema node from a JSON value.
pub fn build_node(value: &Value, pointer: &str) -> Result<SchemaNode> {
    let obj = match value {
        Value::Object(obj) => obj,
        // Boolean schemas ("anything" / "nothing") carry no renderable detail.
        Value::Bool(_) => return Ok(SchemaNode::default()),
        _ => {
            return Err(SchemaError::invalid_schema(
                pointer,
                "expected a schema object",
            ))
        }
    };

    let enum_values = array_field(obj, "enum", pointer)?;
    if let Some(values) = &enum_values {
        if values.is_empty() {
            return Err(SchemaError::invalid_schema(
                join(pointer, "enum"),
                "'enum' must list at least one value",
            ));
        }
    }

    Ok(SchemaNode {
        title: string_field(obj, "title", pointer)?,
        description: string_field(obj, "description", pointer)?,
        kind: build_kind(obj, pointer)?,
        enum_values,
        const_value: obj.get("const").cloned(),
        default: obj.get("default").cloned(),
        minimum: number_field(obj, "minimum", pointer)?,
        maximum: number_field(obj, "maximum", pointer)?,
        additional: build_additional(obj.get("additionalProperties"), pointer)?,
    })
}

/// Decide the structural kind of a node.
///
/// Precedence when keywords coexist: `$ref`, then combinators, then an
/// explicit `type`, then inference from shape. Unknown type names and type
/// arrays fall back to `Untyped`; the annotation is omitted, never guessed.
fn build_kind(obj: &Map<String, Value>, pointer: &str) -> Result<SchemaKind> {
    if let Some(reference) = obj.get("$ref") {
        let target = reference.as_str().ok_or_else(|| {
            SchemaError::invalid_schema(join(pointer, "$ref"), "'$ref' must be a string")
        })?;
        return Ok(SchemaKind::Reference {
            pointer: target.to_string(),
        });
    }

    for combinator in [Combinator::AllOf, Combinator::AnyOf, Combinator::OneOf] {
        let keyword = combinator.keyword();
        if let Some(value) = obj.get(keyword) {
            let raw = value.as_array().ok_or_else(|| {
                SchemaError::invalid_schema(
                    join(pointer, keyword),
                    format!("'{keyword}' must be an array of schemas"),
                )
            })?;
            let mut branches = Vec::with_capacity(raw.len());
            for (index, branch) in raw.iter().enumerate() {
                branches.push(build_node(branch, &format!("{pointer}/{keyword}/{index}"))?);
            }
            return Ok(SchemaKind::Combinator {
                combinator,
                branches,
            });
        }
    }

    if let Some(type_value) = obj.get("type") {
        return match type_value.as_str() {
            Some("object") => object_kind(obj, pointer),
            Some("array") => array_kind(obj, pointer),
            Some("string") => Ok(SchemaKind::String),
            Some("integer") => Ok(SchemaKind::Integer),
            Some("number") => Ok(SchemaKind::Number),
            Some("boolean") => Ok(SchemaKind::Boolean),
            Some("null") => Ok(SchemaKind::Null),
            // Unknown names and type arrays have no single renderable type.
            _ => Ok(SchemaKind::Untyped),
        };
    }

    if obj.contains_key("properties") || obj.contains_key("patternProperties") {
        return object_kind(obj, pointer);
    }
    if obj.contains_key("items") {
        return array_kind(obj, pointer);
    }
    if let Some(kind) = infer_scalar(obj) {
        return Ok(kind);
    }

    Ok(SchemaKind::Untyped)
}

fn object_kind(obj: &Map<String, Value>, pointer: &str) -> Result<SchemaKind> {
    let mut properties = IndexMap::new();
    if let Some(value) = obj.get("properties") {
        let map = value.as_object().ok_or_else(|| {
            SchemaError::invalid_schema(
                join(pointer, "properties"),
                "'properties' must be an object",
            )
        })?;
        for (name, sub) in map {
            let node = build_node(sub, &format!("{pointer}/properties/{name}"))?;
            properties.insert(name.clone(), node);
        }
    }

    let mut pattern_properties = IndexMap::new();
    if let Some(value) = obj.get("patternProperties") {
        let map = value.as_object().ok_or_else(|| {
            SchemaError::invalid_schema(
                join(pointer, "patternProperties"),
                "'patternProperties' must be an object",
            )
        })?;
        for (pattern, sub) in map {
            let node = build_node(sub, &format!("{pointer}/patternProperties/{pattern}"))?;
            pattern_properties.insert(pattern.clone(), node);
        }
    }

    Ok(SchemaKind::Object {
        properties,
        pattern_properties,
    })
}

fn array_kind(obj: &Map<String, Value>, pointer: &str) -> Result<SchemaKind> {
    let items = match obj.get("items") {
        None => None,
        Some(value) => Some(Box::new(build_node(value, &join(pointer, "items"))?)),
    };
    Ok(SchemaKind::Array { items })
}

/// Infer a scalar kind from `enum` / `const` literals when every literal
/// shares one JSON scalar type. Mixed integer and float literals widen
/// to `number`.
fn infer_scalar(obj: &Map<String, Value>) -> Option<SchemaKind> {
    let literals: Vec<&Value> = match (obj.get("enum"), obj.get("const")) {
        (Some(Value::Array(values)), _) if !values.is_empty() => values.iter().collect(),
        (None, Some(value)) => vec![value],
        _ => return None,
    };

    let mut result = literal_kind(literals[0])?;
    for literal in &literals[1..] {
        let kind = literal_kind(literal)?;
        result = match (result, kind) {
            (a, b) if a == b => a,
            (SchemaKind::Integer, SchemaKind::Number)
            | (SchemaKind::Number, SchemaKind::Integer) => SchemaKind::Number,
            _ => return None,
        };
    }
    Some(result)
}

fn literal_kind(value: &Value) -> Option<SchemaKind> {
    match value {
        Value::String(_) => Some(SchemaKind::String),
        Value::Bool(_) => Some(SchemaKind::Boolean),
        Value::Null => Some(SchemaKind::Null),
        Value::Number(n) if n.is_i64() || n.is_u64() => Some(SchemaKind::Integer),
        Value::Number(_) => Some(SchemaKind::Number),
        Value::Array(_) | Value::Object(_) => None,
    }
}

fn build_additional(value: Option<&Value>, pointer: &str) -> Result<Option<Additional>> {
    match value {
        None => Ok(None),
        Some(Value::Bool(allowed)) => Ok(Some(Additional::Allowed(*allowed))),
        Some(value @ Value::Object(_)) => {
            let node = build_node(value, &join(pointer, "additionalProperties"))?;
            Ok(Some(Additional::Schema(Box::new(node))))
        }
        Some(_) => Err(SchemaError::invalid_schema(
            join(pointer, "additionalProperties"),
            "'additionalProperties' must be a boolean or a schema object",
        )),
    }
}

/// Parse one `dependencies` entry into a constraint.
///
/// Accepted encodings: an object with `oneOf` (recursive alternatives),
/// a direct `enum` list or `const`, or a `properties` object that constrains
/// the triggering property with `enum`/`const` and lists side properties as
/// annotations. Everything else is malformed.
fn build_dependency(name: &str, value: &Value, pointer: &str) -> Result<DependencyConstraint> {
    let obj = value.as_object().ok_or_else(|| {
        SchemaError::malformed_dependency(
            pointer,
            "entry must be an object with 'oneOf', 'enum', 'const', or 'properties'",
        )
    })?;

    if let Some(one_of) = obj.get("oneOf") {
        let raw = one_of.as_array().ok_or_else(|| {
            SchemaError::malformed_dependency(join(pointer, "oneOf"), "'oneOf' must be an array")
        })?;
        if raw.is_empty() {
            return Err(SchemaError::malformed_dependency(
                join(pointer, "oneOf"),
                "'oneOf' must list at least one alternative",
            ));
        }
        let mut branches = Vec::with_capacity(raw.len());
        for (index, branch) in raw.iter().enumerate() {
            branches.push(build_dependency(
                name,
                branch,
                &format!("{pointer}/oneOf/{index}"),
            )?);
        }
        return Ok(DependencyConstraint::OneOf(branches));
    }

    if let Some(values) = obj.get("enum") {
        return Ok(DependencyConstraint::EnumChoice {
            values: enum_literals(values, &join(pointer, "enum"))?,
            annotations: IndexMap::new(),
        });
    }

    if let Some(value) = obj.get("const") {
        return Ok(DependencyConstraint::EnumChoice {
            values: vec![value.clone()],
            annotations: IndexMap::new(),
        });
    }

    if let Some(props) = obj.get("properties") {
        let map = props.as_object().ok_or_else(|| {
            SchemaError::malformed_dependency(
                join(pointer, "properties"),
                "'properties' must be an object",
            )
        })?;

        let mut values = None;
        let mut annotations = IndexMap::new();
        for (prop, sub) in map {
            let literals = literal_values(sub, &format!("{pointer}/properties/{prop}"))?;
            if prop == name {
                values = Some(literals);
            } else {
                annotations.insert(prop.clone(), literals);
            }
        }

        let values = values.ok_or_else(|| {
            SchemaError::malformed_dependency(
                pointer,
                format!("branch does not constrain '{name}'"),
            )
        })?;
        return Ok(DependencyConstraint::EnumChoice {
            values,
            annotations,
        });
    }

    Err(SchemaError::malformed_dependency(
        pointer,
        "entry must provide 'oneOf', 'enum', 'const', or 'properties'",
    ))
}

/// Extract the permitted literals of a dependency property subschema.
fn literal_values(value: &Value, pointer: &str) -> Result<Vec<Value>> {
    let obj = value.as_object().ok_or_else(|| {
        SchemaError::malformed_dependency(pointer, "expected a schema object with 'enum' or 'const'")
    })?;

    if let Some(values) = obj.get("enum") {
        return enum_literals(values, &join(pointer, "enum"));
    }
    if let Some(value) = obj.get("const") {
        return Ok(vec![value.clone()]);
    }

    Err(SchemaError::malformed_dependency(
        pointer,
        "expected 'enum' or 'const'",
    ))
}

fn enum_literals(value: &Value, pointer: &str) -> Result<Vec<Value>> {
    let values = value.as_array().ok_or_else(|| {
        SchemaError::malformed_dependency(pointer, "'enum' must be an array")
    })?;
    if values.is_empty() {
        return Err(SchemaError::malformed_dependency(
            pointer,
            "'enum' must list at least one value",
        ));
    }
    Ok(values.clone())
}

fn string_field(obj: &Map<String, Value>, key: &str, pointer: &str) -> Result<Option<String>> {
    match obj.get(key) {
        None => Ok(None),
        Some(Value::String(text)) => Ok(Some(text.clone())),
        Some(_) => Err(SchemaError::invalid_schema(
            join(pointer, key),
            format!("'{key}' must be a string"),
        )),
    }
}

fn number_field(obj: &Map<String, Value>, key: &str, pointer: &str) -> Result<Option<Number>> {
    match obj.get(key) {
        None => Ok(None),
        Some(Value::Number(number)) => Ok(Some(number.clone())),
        Some(_) => Err(SchemaError::invalid_schema(
            join(pointer, key),
            format!("'{key}' must be a number"),
        )),
    }
}

fn array_field(obj: &Map<String, Value>, key: &str, pointer: &str) -> Result<Option<Vec<Value>>> {
    match obj.get(key) {
        None => Ok(None),
        Some(Value::Array(values)) => Ok(Some(values.clone())),
        Some(_) => Err(SchemaError::invalid_schema(
            join(pointer, key),
            format!("'{key}' must be an array"),
        )),
    }
}

fn join(pointer: &str, segment: &str) -> String {
    format!("{pointer}/{segment}")
}
