//! Swagger definition to catalog schema mapping
//!
//! Structural keywords (`type`, `properties`, `items`, `required`,
//! `additionalProperties`) are kept along with `format`, `description`,
//! `enum` and the validation constraints `minimum`, `maximum`,
//! `multipleOf`, `minLength`, `maxLength` and `pattern`. Swagger-only
//! keywords such as `example` or `readOnly` are dropped.
//!
//! Local references (`#/definitions/Name`) are inlined. A reference that
//! cycles back to a definition already being expanded, or that nests deeper
//! than [`MAX_REF_DEPTH`], becomes the empty schema `{}`.

use super::types::{AdditionalProperties, JsonType, JsonTypeOrArray, Schema, SchemaCatalog};
use crate::types::JsonValue;
use std::collections::BTreeMap;
use tracing::warn;

/// Maximum nesting of inlined references
pub const MAX_REF_DEPTH: usize = 16;

const DEFINITIONS_PREFIX: &str = "#/definitions/";

/// Map a named definition into a catalog schema
///
/// Returns `None` if the catalog has no definition called `name`.
pub fn map_definition(catalog: &SchemaCatalog, name: &str) -> Option<Schema> {
    let fragment = catalog.get(name)?;
    let mut expanding = vec![name.to_string()];
    Some(map_fragment(catalog, fragment, &mut expanding))
}

fn map_fragment(catalog: &SchemaCatalog, fragment: &JsonValue, expanding: &mut Vec<String>) -> Schema {
    let Some(object) = fragment.as_object() else {
        return Schema::default();
    };

    if let Some(reference) = object.get("$ref").and_then(JsonValue::as_str) {
        return resolve_reference(catalog, reference, expanding);
    }

    let mut schema = Schema {
        json_type: object.get("type").and_then(map_type),
        format: string_field(fragment, "format"),
        description: string_field(fragment, "description"),
        enum_values: object.get("enum").and_then(JsonValue::as_array).cloned(),
        minimum: number_field(fragment, "minimum"),
        maximum: number_field(fragment, "maximum"),
        multiple_of: number_field(fragment, "multipleOf"),
        min_length: fragment.get("minLength").and_then(JsonValue::as_u64),
        max_length: fragment.get("maxLength").and_then(JsonValue::as_u64),
        pattern: string_field(fragment, "pattern"),
        ..Default::default()
    };

    if let Some(properties) = object.get("properties").and_then(JsonValue::as_object) {
        let mapped: BTreeMap<String, Schema> = properties
            .iter()
            .map(|(name, property)| (name.clone(), map_fragment(catalog, property, expanding)))
            .collect();
        schema.properties = Some(mapped);
    }

    if let Some(items) = object.get("items").filter(|items| items.is_object()) {
        schema.items = Some(Box::new(map_fragment(catalog, items, expanding)));
    }

    if let Some(required) = object.get("required").and_then(JsonValue::as_array) {
        schema.required = Some(
            required
                .iter()
                .filter_map(JsonValue::as_str)
                .map(ToString::to_string)
                .collect(),
        );
    }

    schema.additional_properties = match object.get("additionalProperties") {
        Some(JsonValue::Bool(allowed)) => Some(AdditionalProperties::Allowed(*allowed)),
        Some(value @ JsonValue::Object(_)) => Some(AdditionalProperties::Schema(Box::new(
            map_fragment(catalog, value, expanding),
        ))),
        _ => None,
    };

    schema
}

fn resolve_reference(catalog: &SchemaCatalog, reference: &str, expanding: &mut Vec<String>) -> Schema {
    let Some(name) = reference.strip_prefix(DEFINITIONS_PREFIX) else {
        warn!("Ignoring non-local schema reference {reference}");
        return Schema::default();
    };

    if expanding.iter().any(|n| n == name) || expanding.len() >= MAX_REF_DEPTH {
        return Schema::default();
    }

    let Some(target) = catalog.get(name) else {
        warn!("Schema reference {reference} does not resolve to a definition");
        return Schema::default();
    };

    expanding.push(name.to_string());
    let schema = map_fragment(catalog, target, expanding);
    expanding.pop();
    schema
}

fn map_type(value: &JsonValue) -> Option<JsonTypeOrArray> {
    match value {
        JsonValue::String(name) => JsonType::parse(name).map(JsonTypeOrArray::Single),
        JsonValue::Array(names) => {
            let types: Vec<JsonType> = names
                .iter()
                .filter_map(JsonValue::as_str)
                .filter_map(JsonType::parse)
                .collect();
            (!types.is_empty()).then_some(JsonTypeOrArray::Multiple(types))
        }
        _ => None,
    }
}

fn string_field(value: &JsonValue, key: &str) -> Option<String> {
    value.get(key).and_then(JsonValue::as_str).map(ToString::to_string)
}

fn number_field(value: &JsonValue, key: &str) -> Option<serde_json::Number> {
    match value.get(key) {
        Some(JsonValue::Number(number)) => Some(number.clone()),
        _ => None,
    }
}
