//! Unit tests for Markdown rendering
//!
//! These tests pin the output grammar section by section and end to end.
//! The rendered shapes are part of the observable contract, so most
//! assertions compare full strings rather than fragments.

use schemadoc_core::{loader, render_markdown, RenderOptions, Renderer, SchemaError};
use serde_json::{json, Value};

fn render(schema: Value) -> String {
    let doc = loader::from_value(&schema).unwrap();
    render_markdown(&doc).unwrap()
}

fn render_with(schema: Value, options: RenderOptions) -> String {
    let doc = loader::from_value(&schema).unwrap();
    Renderer::with_options(options).render(&doc).unwrap()
}

#[cfg(test)]
mod full_documents {
    use super::*;
    use pretty_assertions::assert_eq;

    /// The vegetables schema exercises every section at once: properties,
    /// references, definitions, a two-branch dependency, and an example.
    fn vegetables_schema() -> Value {
        json!({
            "$id": "https://example.com/vegetables.schema.json",
            "$schema": "http://json-schema.org/draft-07/schema#",
            "title": "Vegetables",
            "description": "Vegetable preferences.",
            "type": "object",
            "properties": {
                "fruits": {"type": "array", "items": {"type": "string"}},
                "vegetables": {"type": "array", "items": {"$ref": "#/definitions/veggie"}}
            },
            "dependencies": {
                "fruits": {
                    "oneOf": [
                        {
                            "properties": {
                                "fruits": {"type": "string", "enum": ["apple", "banana"]},
                                "toppings": {
                                    "type": "string",
                                    "enum": ["peanut butter", "caramel", "honey"]
                                }
                            }
                        },
                        {
                            "properties": {
                                "fruits": {"const": "orange"},
                                "toppings": {"type": "string", "enum": ["peanut butter", "caramel"]}
                            }
                        }
                    ]
                }
            },
            "definitions": {
                "veggie": {
                    "type": "object",
                    "required": ["veggieName", "veggieLike"],
                    "properties": {
                        "veggieName": {
                            "type": "string",
                            "description": "The name of the vegetable."
                        },
                        "veggieLike": {
                            "type": "boolean",
                            "description": "Do I like this vegetable?"
                        }
                    }
                }
            },
            "examples": [
                {
                    "fruits": ["apple", "orange"],
                    "vegetables": [{"veggieName": "cabbage", "veggieLike": true}]
                }
            ]
        })
    }

    #[test]
    fn test_vegetables_schema() {
        let expected = [
            "# Vegetables\n\n",
            "*Vegetable preferences.*\n\n",
            "## Properties\n\n",
            "- **`fruits`** *(array)*\n",
            "  - **Items** *(string)*\n",
            "- **`vegetables`** *(array)*\n",
            "  - **Items**: Refer to *#/definitions/veggie*.\n",
            "## Definitions\n\n",
            "- **`veggie`** *(object)*\n",
            "  - **`veggieName`** *(string)*: The name of the vegetable.\n",
            "  - **`veggieLike`** *(boolean)*: Do I like this vegetable?\n",
            "## Dependencies\n\n",
            "- **`fruits`**\n",
            "  - **One of**\n",
            "    - Must be one of: `apple`, `banana`.\n",
            "      - **`toppings`**: Must be one of: `peanut butter`, `caramel`, `honey`.\n",
            "    - `orange`\n",
            "      - **`toppings`**: Must be one of: `peanut butter`, `caramel`.\n",
            "## Examples\n\n",
            "  ```json\n",
            "  {\n",
            "      \"fruits\": [\n",
            "          \"apple\",\n",
            "          \"orange\"\n",
            "      ],\n",
            "      \"vegetables\": [\n",
            "          {\n",
            "              \"veggieName\": \"cabbage\",\n",
            "              \"veggieLike\": true\n",
            "          }\n",
            "      ]\n",
            "  }\n",
            "  ```\n\n",
        ]
        .concat();

        assert_eq!(expected, render(vegetables_schema()));
    }

    #[test]
    fn test_vegetables_examples_as_yaml() {
        let output = render_with(
            vegetables_schema(),
            RenderOptions {
                examples_as_yaml: true,
                ..Default::default()
            },
        );

        let expected_block = [
            "## Examples\n\n",
            "  ```yaml\n",
            "  fruits:\n",
            "  - apple\n",
            "  - orange\n",
            "  vegetables:\n",
            "  - veggieName: cabbage\n",
            "    veggieLike: true\n",
            "  ```\n\n",
        ]
        .concat();

        assert!(output.ends_with(&expected_block), "got:\n{output}");
        assert!(!output.contains("```json"));
    }

    #[test]
    fn test_rendering_is_repeatable() {
        let doc = loader::from_value(&vegetables_schema()).unwrap();
        assert_eq!(render_markdown(&doc).unwrap(), render_markdown(&doc).unwrap());
    }
}

#[cfg(test)]
mod sections {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_additional_properties_section() {
        let output = render(json!({
            "description": "Vegetable preferences",
            "type": "object",
            "additionalProperties": {
                "description": "Additional info about foods you may like",
                "type": "object",
                "patternProperties": {
                    "^iLike(Meat|Drinks)$": {"type": "boolean", "description": "Do I like it?"}
                }
            }
        }));

        let expected = [
            "# JSON Schema\n\n",
            "*Vegetable preferences*\n\n",
            "## Additional Properties\n\n",
            "- **Additional Properties** *(object)*: Additional info about foods you may like.\n",
            "  - **`^iLike(Meat|Drinks)$`** *(boolean)*: Do I like it?\n",
        ]
        .concat();

        assert_eq!(expected, output);
    }

    #[test]
    fn test_pattern_properties_section() {
        let output = render(json!({
            "description": "Diet preferences",
            "type": "object",
            "additionalProperties": false,
            "patternProperties": {
                "^iLike(Meat|Drinks)$": {"type": "boolean", "description": "Do I like it?"}
            }
        }));

        let expected = [
            "# JSON Schema\n\n",
            "*Diet preferences*\n\n",
            "## Pattern Properties\n\n",
            "- **`^iLike(Meat|Drinks)$`** *(boolean)*: Do I like it?\n",
        ]
        .concat();

        assert_eq!(expected, output);
    }

    #[test]
    fn test_root_array_items_section() {
        let output = render(json!({
            "title": "Fruits",
            "description": "Fruits I like",
            "type": "array",
            "items": {
                "description": "A list of fruits",
                "type": "object",
                "properties": {
                    "name": {"description": "The name of the fruit", "type": "string"},
                    "sweet": {"description": "Whether it is sweet or not", "type": "boolean"}
                }
            }
        }));

        let expected = [
            "# Fruits\n\n",
            "*Fruits I like*\n\n",
            "## Items\n\n",
            "- **Items** *(object)*: A list of fruits.\n",
            "  - **`name`** *(string)*: The name of the fruit.\n",
            "  - **`sweet`** *(boolean)*: Whether it is sweet or not.\n",
        ]
        .concat();

        assert_eq!(expected, output);
    }

    #[test]
    fn test_empty_sections_are_omitted() {
        let output = render(json!({"title": "Empty", "type": "object"}));
        assert_eq!(output, "# Empty\n\n");
    }

    #[test]
    fn test_omit_header_for_embedding() {
        let output = render_with(
            json!({
                "title": "Fruits",
                "description": "Fruits I like",
                "type": "object",
                "properties": {"name": {"type": "string"}}
            }),
            RenderOptions {
                omit_header: true,
                ..Default::default()
            },
        );

        assert_eq!(output, "## Properties\n\n- **`name`** *(string)*\n");
    }

    #[test]
    fn test_definitions_render_before_dependencies() {
        let output = render(json!({
            "type": "object",
            "properties": {"a": {"type": "string"}},
            "dependencies": {"a": {"enum": ["x"]}},
            "definitions": {"thing": {"type": "string"}}
        }));

        let definitions_at = output.find("## Definitions").unwrap();
        let dependencies_at = output.find("## Dependencies").unwrap();
        assert!(definitions_at < dependencies_at);
    }
}

#[cfg(test)]
mod node_bullets {
    use super::*;

    #[test]
    fn test_annotation_order_on_one_line() {
        let output = render(json!({
            "type": "object",
            "properties": {
                "count": {
                    "type": "number",
                    "description": "Number of vegetables",
                    "minimum": 0,
                    "maximum": 999,
                    "additionalProperties": true,
                    "default": 0
                }
            }
        }));

        assert!(output.contains(
            "- **`count`** *(number)*: Number of vegetables. Minimum: `0`. Maximum: `999`. \
             Can contain additional properties. Default: `0`.\n"
        ));
    }

    #[test]
    fn test_boolean_additional_properties_note() {
        let output = render(json!({
            "type": "object",
            "properties": {
                "strict": {"type": "object", "additionalProperties": false}
            }
        }));
        assert!(output.contains("- **`strict`** *(object)*: Cannot contain additional properties.\n"));
    }

    #[test]
    fn test_nested_additional_properties_bullet() {
        let output = render(json!({
            "type": "object",
            "properties": {
                "scores": {
                    "type": "object",
                    "additionalProperties": {"type": "integer"}
                }
            }
        }));

        assert!(output.contains(
            "- **`scores`** *(object)*\n  - **Additional Properties** *(integer)*\n"
        ));
    }

    #[test]
    fn test_const_note() {
        let output = render(json!({
            "type": "object",
            "properties": {
                "version": {"type": "string", "const": "v1"}
            }
        }));
        assert!(output.contains("- **`version`** *(string)*: Must be: `v1`.\n"));
    }

    #[test]
    fn test_enum_beats_const_in_description() {
        let output = render(json!({
            "type": "object",
            "properties": {
                "pick": {"enum": ["a", "b"], "const": "a"}
            }
        }));
        assert!(output.contains("Must be one of: `a`, `b`."));
        assert!(!output.contains("Must be: `a`."));
    }

    #[test]
    fn test_untyped_property_omits_annotation() {
        let output = render(json!({
            "type": "object",
            "properties": {
                "anything": {"description": "No type here"}
            }
        }));
        assert!(output.contains("- **`anything`**: No type here.\n"));
        assert!(!output.contains("anything`** *("));
    }

    #[test]
    fn test_default_list_renders_compact() {
        let output = render(json!({
            "type": "object",
            "properties": {
                "ids": {"type": "array", "default": [1, 2, 3]}
            }
        }));
        assert!(output.contains("- **`ids`** *(array)*: Default: `[1,2,3]`.\n"));
    }
}

#[cfg(test)]
mod combinators {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_schema_composition_keywords() {
        let output = render(json!({
            "description": "Schema composition test case",
            "type": "object",
            "properties": {
                "all_of_example": {
                    "allOf": [{"type": "number"}, {"type": "integer"}]
                },
                "any_of_example": {
                    "anyOf": [{"type": "string"}, {"type": "number", "minimum": 0}]
                },
                "one_of_example": {
                    "default": [1, 2, 3],
                    "oneOf": [
                        {"type": "null"},
                        {"type": "array", "items": {"type": "number"}}
                    ]
                }
            }
        }));

        let expected = [
            "# JSON Schema\n\n",
            "*Schema composition test case*\n\n",
            "## Properties\n\n",
            "- **`all_of_example`**\n",
            "  - **All of**\n",
            "    - *number*\n",
            "    - *integer*\n",
            "- **`any_of_example`**\n",
            "  - **Any of**\n",
            "    - *string*\n",
            "    - *number*: Minimum: `0`.\n",
            "- **`one_of_example`**: Default: `[1,2,3]`.\n",
            "  - **One of**\n",
            "    - *null*\n",
            "    - *array*\n",
            "      - **Items** *(number)*\n",
        ]
        .concat();

        assert_eq!(expected, output);
    }

    #[test]
    fn test_branch_without_type_uses_description() {
        let output = render(json!({
            "type": "object",
            "properties": {
                "choice": {
                    "oneOf": [
                        {"description": "A described branch"},
                        {}
                    ]
                }
            }
        }));

        assert!(output.contains("    - A described branch.\n"));
        assert!(output.contains("    - *untyped*\n"));
    }

    #[test]
    fn test_reference_branch() {
        let output = render(json!({
            "type": "object",
            "properties": {
                "choice": {
                    "oneOf": [{"type": "null"}, {"$ref": "#/definitions/thing"}]
                }
            },
            "definitions": {"thing": {"type": "string"}}
        }));

        assert!(output.contains("    - Refer to *#/definitions/thing*.\n"));
    }
}

#[cfg(test)]
mod references {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_shared_reference_rendered_once() {
        let output = render(json!({
            "type": "object",
            "properties": {
                "home": {"$ref": "#/definitions/address"},
                "work": {"$ref": "#/definitions/address"}
            },
            "definitions": {
                "address": {
                    "type": "object",
                    "properties": {"street": {"type": "string"}}
                }
            }
        }));

        assert!(output.contains("- **`home`**: Refer to *#/definitions/address*.\n"));
        assert!(output.contains("- **`work`**: Refer to *#/definitions/address*.\n"));
        // The definition body appears exactly once, in the Definitions section.
        assert_eq!(output.matches("**`street`**").count(), 1);
        assert_eq!(output.matches("- **`address`** *(object)*\n").count(), 1);
    }

    #[test]
    fn test_cyclic_references_terminate() {
        let output = render(json!({
            "type": "object",
            "properties": {"start": {"$ref": "#/definitions/a"}},
            "definitions": {
                "a": {
                    "type": "object",
                    "properties": {"next": {"$ref": "#/definitions/b"}}
                },
                "b": {
                    "type": "object",
                    "properties": {"prev": {"$ref": "#/definitions/a"}}
                }
            }
        }));

        assert_eq!(output.matches("- **`a`** *(object)*\n").count(), 1);
        assert_eq!(output.matches("- **`b`** *(object)*\n").count(), 1);
        assert!(output.contains("  - **`next`**: Refer to *#/definitions/b*.\n"));
        assert!(output.contains("  - **`prev`**: Refer to *#/definitions/a*.\n"));
    }

    #[test]
    fn test_self_reference_terminates() {
        let output = render(json!({
            "type": "object",
            "properties": {"tree": {"$ref": "#/definitions/node"}},
            "definitions": {
                "node": {
                    "type": "object",
                    "properties": {
                        "value": {"type": "integer"},
                        "children": {"type": "array", "items": {"$ref": "#/definitions/node"}}
                    }
                }
            }
        }));

        assert_eq!(output.matches("- **`node`** *(object)*\n").count(), 1);
        assert!(output.contains("    - **Items**: Refer to *#/definitions/node*.\n"));
    }

    #[test]
    fn test_defs_keyword_resolves() {
        let output = render(json!({
            "type": "object",
            "properties": {"pet": {"$ref": "#/$defs/pet"}},
            "$defs": {"pet": {"type": "string"}}
        }));

        assert!(output.contains("- **`pet`**: Refer to *#/$defs/pet*.\n"));
        assert!(output.contains("## Definitions\n\n- **`pet`** *(string)*\n"));
    }

    #[test]
    fn test_unresolved_reference_fails_without_output() {
        let doc = loader::from_value(&json!({
            "type": "object",
            "properties": {
                "outer": {
                    "type": "object",
                    "properties": {"inner": {"$ref": "#/definitions/ghost"}}
                }
            }
        }))
        .unwrap();

        let err = render_markdown(&doc).unwrap_err();
        match &err {
            SchemaError::UnresolvedReference { reference, pointer } => {
                assert_eq!(reference, "#/definitions/ghost");
                assert_eq!(pointer, "#/properties/outer/properties/inner");
            }
            other => panic!("expected unresolved reference, got {other:?}"),
        }
    }

    #[test]
    fn test_external_pointer_shape_is_unresolved() {
        let doc = loader::from_value(&json!({
            "type": "object",
            "properties": {"x": {"$ref": "https://example.com/other.json#/definitions/x"}}
        }))
        .unwrap();

        assert!(matches!(
            render_markdown(&doc).unwrap_err(),
            SchemaError::UnresolvedReference { .. }
        ));
    }
}

#[cfg(test)]
mod dependencies_section {
    use super::*;

    #[test]
    fn test_direct_enum_choice() {
        let output = render(json!({
            "type": "object",
            "properties": {"size": {"type": "string"}},
            "dependencies": {"size": {"enum": ["s", "m", "l"]}}
        }));

        assert!(output.contains(
            "## Dependencies\n\n- **`size`**\n  - Must be one of: `s`, `m`, `l`.\n"
        ));
    }

    #[test]
    fn test_single_value_renders_as_inline_code() {
        let output = render(json!({
            "type": "object",
            "dependencies": {"color": {"const": "red"}}
        }));

        assert!(output.contains("- **`color`**\n  - `red`\n"));
    }

    #[test]
    fn test_single_value_annotation() {
        let output = render(json!({
            "type": "object",
            "dependencies": {
                "fruits": {
                    "properties": {
                        "fruits": {"const": "orange"},
                        "toppings": {"const": "honey"}
                    }
                }
            }
        }));

        assert!(output.contains("- **`fruits`**\n  - `orange`\n    - **`toppings`**: `honey`\n"));
    }

    #[test]
    fn test_nested_one_of_branches() {
        let output = render(json!({
            "type": "object",
            "dependencies": {
                "a": {
                    "oneOf": [
                        {"oneOf": [{"const": 1}, {"const": 2}]},
                        {"const": 3}
                    ]
                }
            }
        }));

        let expected = [
            "## Dependencies\n\n",
            "- **`a`**\n",
            "  - **One of**\n",
            "    - **One of**\n",
            "      - `1`\n",
            "      - `2`\n",
            "    - `3`\n",
        ]
        .concat();
        assert!(output.ends_with(&expected), "got:\n{output}");
    }
}
