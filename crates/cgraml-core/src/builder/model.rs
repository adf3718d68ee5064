//! Model class builder.
//!
//! Reads a resource description of the form
//!
//! ```json
//! {
//!   "description": "A customer",
//!   "properties": {
//!     "id": { "type": "string" },
//!     "tags": { "type": "array", "items": { "type": "string" } },
//!     "address": { "$ref": "address" }
//!   },
//!   "$linkedData": { "orders": ["Customers", "Orders"] }
//! }
//! ```
//!
//! and produces `<package>.model.<Entity>` with a field, getter, setter and
//! fluent builder method per property plus two navigation methods per
//! linked-data relation.

use super::{ClassBuilder, fluent_method, getter_method, setter_method};
use crate::naming::capitalize;
use crate::{
    ClassMeta, GenError, GenResult, GenerationSession, LinkedDataSynthesizer, MODEL_PACKAGE,
};
use serde_json::{Map, Value};

/// Builds data classes from resource property maps.
#[derive(Debug)]
pub struct ModelBuilder {
    base_package: String,
    class: ClassMeta,
}

impl ModelBuilder {
    /// Parse a resource description given as JSON text.
    pub fn parse_str(
        session: &mut GenerationSession<'_>,
        package: &str,
        entity: &str,
        raw: &str,
    ) -> GenResult<Self> {
        let value: Value = serde_json::from_str(raw).map_err(|e| invalid(entity, e.to_string()))?;
        Self::parse(session, package, entity, &value)
    }

    /// Package the model package was derived from.
    pub fn base_package(&self) -> &str {
        &self.base_package
    }
}

impl ClassBuilder for ModelBuilder {
    type Resource = Value;

    fn parse(
        session: &mut GenerationSession<'_>,
        package: &str,
        entity: &str,
        resource: &Value,
    ) -> GenResult<Self> {
        let schema = ModelSchema::read(entity, resource)?;

        let mut documentation = session.config().doc_header.clone();
        if let Some(description) = schema.description {
            documentation.push_str("\n\n");
            documentation.push_str(description);
        }

        let mut class = ClassMeta::new(format!("{package}.{MODEL_PACKAGE}"), capitalize(entity))
            .with_documentation(documentation);
        for interface in &session.config().model_interfaces {
            class.add_interface(interface.clone());
        }

        let canonical = class.canonical_class_name();
        session.ensure_not_generated(&canonical)?;

        for (name, property) in schema.properties.into_iter().flatten() {
            let field = session.types().property_field(entity, name, property)?;
            if class.find_field(&field.name).is_some() {
                tracing::warn!(
                    "Property '{}' of {} maps to existing field '{}'; skipping",
                    name,
                    canonical,
                    field.name
                );
                continue;
            }

            let getter = getter_method(&field);
            let setter = setter_method(&field);
            let fluent = fluent_method(class.class_name(), &field);

            class.add_field(field);
            class.add_method(getter);
            class.add_method(setter);
            class.add_method(fluent);
        }

        for (relation, services) in schema.linked_data.into_iter().flatten() {
            let services = linked_services(&canonical, relation, services)?;
            let methods =
                LinkedDataSynthesizer::new(session, &class, package).synthesize(relation, &services)?;
            let [derived, explicit] = methods.into_pair();
            if class.methods_named(&derived.name).any(|m| m.arity() == 0) {
                tracing::warn!(
                    "Relation '{}' of {} clashes with existing method {}(); both are kept",
                    relation,
                    canonical,
                    derived.name
                );
            }
            class.add_method(derived);
            class.add_method(explicit);
        }

        session.registry_mut().register(canonical.clone())?;
        tracing::info!(
            "Parsed model class {} ({} fields, {} methods)",
            canonical,
            class.fields().len(),
            class.methods().len()
        );

        Ok(Self {
            base_package: package.to_string(),
            class,
        })
    }

    fn class_meta(&self) -> &ClassMeta {
        &self.class
    }

    fn into_class_meta(self) -> ClassMeta {
        self.class
    }
}

/// The parts of a resource description the model builder reads.
struct ModelSchema<'a> {
    description: Option<&'a str>,
    properties: Option<&'a Map<String, Value>>,
    linked_data: Option<&'a Map<String, Value>>,
}

impl<'a> ModelSchema<'a> {
    fn read(entity: &str, resource: &'a Value) -> GenResult<Self> {
        let object = resource
            .as_object()
            .ok_or_else(|| invalid(entity, "resource description is not a JSON object"))?;

        Ok(Self {
            description: object.get("description").and_then(Value::as_str),
            properties: optional_object(entity, object, "properties")?,
            linked_data: optional_object(entity, object, "$linkedData")?,
        })
    }
}

fn optional_object<'a>(
    entity: &str,
    object: &'a Map<String, Value>,
    key: &str,
) -> GenResult<Option<&'a Map<String, Value>>> {
    match object.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Object(map)) => Ok(Some(map)),
        Some(_) => Err(invalid(entity, format!("'{key}' is not an object"))),
    }
}

/// Read the ordered service list of one relation.
fn linked_services(class: &str, relation: &str, services: &Value) -> GenResult<Vec<String>> {
    let malformed = || GenError::MalformedLinkedData {
        class: class.to_string(),
        relation: relation.to_string(),
    };

    let items = services.as_array().filter(|items| !items.is_empty()).ok_or_else(malformed)?;
    items
        .iter()
        .map(|item| {
            item.as_str()
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .ok_or_else(malformed)
        })
        .collect()
}

fn invalid(entity: &str, reason: impl Into<String>) -> GenError {
    GenError::InvalidSchema {
        entity: entity.to_string(),
        reason: reason.into(),
    }
}
