//! Schema type name to target type name mapping.
//!
//! Generated classes are Java, so every schema type resolves to a JVM
//! reference type. Values arrive as JSON and may be absent, which is why the
//! boxed forms are used throughout.
//!
//! # Type Mappings
//!
//! | Schema | Target |
//! |--------|--------|
//! | `string` | `String` |
//! | `integer` | `Integer` |
//! | `number` | `Double` |
//! | `boolean` | `Boolean` |
//! | `date` | `java.util.Date` |
//! | `array` | `java.util.List<Object>` |
//! | `object`, `any` | `Object` |
//! | registered model schema | `<package>.model.<Schema>` |
//! | anything else | `Object` |

use crate::naming::{capitalize, to_field_name};
use crate::{FieldMeta, GenError, GenResult, MODEL_PACKAGE};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// The generic object type used when no mapping exists.
pub const GENERIC_TYPE: &str = "Object";

/// Lookup table from schema type names to target type names.
#[derive(Debug, Clone)]
pub struct TypeResolver {
    table: BTreeMap<String, String>,
    fallback: String,
}

impl TypeResolver {
    /// Create a resolver holding the built-in primitive table.
    pub fn new() -> Self {
        let table = [
            ("string", "String"),
            ("integer", "Integer"),
            ("number", "Double"),
            ("boolean", "Boolean"),
            ("date", "java.util.Date"),
            ("array", "java.util.List<Object>"),
            ("object", GENERIC_TYPE),
            ("any", GENERIC_TYPE),
        ]
        .into_iter()
        .map(|(schema, target)| (schema.to_string(), target.to_string()))
        .collect();

        Self {
            table,
            fallback: GENERIC_TYPE.to_string(),
        }
    }

    /// Create a resolver with `overrides` applied over the built-in table.
    pub fn with_overrides(overrides: &BTreeMap<String, String>) -> Self {
        let mut resolver = Self::new();
        for (schema, target) in overrides {
            resolver.insert(schema, target);
        }
        resolver
    }

    /// Add or replace a mapping.
    pub fn insert(&mut self, schema: impl Into<String>, target: impl Into<String>) {
        self.table.insert(schema.into(), target.into());
    }

    /// Map a schema name to the model class generated for it.
    ///
    /// Returns the registered target type name.
    pub fn register_model(&mut self, base_package: &str, schema: &str) -> String {
        let target = format!("{base_package}.{MODEL_PACKAGE}.{}", capitalize(schema));
        self.insert(schema, target.clone());
        target
    }

    pub fn lookup(&self, schema: &str) -> Option<&str> {
        self.table.get(schema).map(String::as_str)
    }

    /// Resolve a schema type name, falling back to the generic type.
    pub fn resolve(&self, schema: &str) -> String {
        self.lookup(schema).unwrap_or(&self.fallback).to_string()
    }

    /// Type of a collection holding `element` values.
    pub fn collection_of(&self, element: &str) -> String {
        format!("java.util.List<{element}>")
    }

    pub fn fallback(&self) -> &str {
        &self.fallback
    }

    /// Turn one schema property into a typed field.
    ///
    /// The field name is the camelCase identifier of `name`; the original
    /// name is kept as the serialized name when the two differ. `entity`
    /// only labels errors.
    pub fn property_field(&self, entity: &str, name: &str, property: &Value) -> GenResult<FieldMeta> {
        let object = property
            .as_object()
            .ok_or_else(|| invalid(entity, format!("property '{name}' is not an object")))?;

        let field_name = to_field_name(name);
        if field_name.is_empty() {
            return Err(invalid(entity, format!("property '{name}' has no usable identifier")));
        }

        let (ty, collection) = match declared_type(object) {
            Some("array") => {
                let element = object
                    .get("items")
                    .and_then(Value::as_object)
                    .and_then(declared_type)
                    .map(|t| self.resolve(t))
                    .unwrap_or_else(|| self.fallback.clone());
                (self.collection_of(&element), true)
            }
            Some(t) => (self.resolve(t), false),
            None => (self.fallback.clone(), false),
        };

        let description = object
            .get("description")
            .and_then(Value::as_str)
            .map(str::to_string);

        Ok(FieldMeta::new(field_name, ty)
            .with_collection(collection)
            .with_serialized_name(name)
            .with_description(description))
    }
}

/// `$ref` first, then `type`; a type list uses its first non-null entry.
fn declared_type(object: &Map<String, Value>) -> Option<&str> {
    if let Some(reference) = object.get("$ref").and_then(Value::as_str) {
        return Some(reference);
    }
    match object.get("type")? {
        Value::String(t) => Some(t.as_str()),
        Value::Array(types) => types
            .iter()
            .filter_map(Value::as_str)
            .find(|t| *t != "null"),
        _ => None,
    }
}

fn invalid(entity: &str, reason: String) -> GenError {
    GenError::InvalidSchema {
        entity: entity.to_string(),
        reason,
    }
}

impl Default for TypeResolver {
    fn default() -> Self {
        Self::new()
    }
}
