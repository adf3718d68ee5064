//! API document loading and validation
//!
//! The document is JSON:
//!
//! ```json
//! {
//!   "title": "Shop API",
//!   "baseUri": "https://api.example.com/v1",
//!   "schemas": {
//!     "customer": { "properties": { "id": { "type": "string" } } }
//!   },
//!   "resources": [
//!     {
//!       "uri": "/customers",
//!       "actions": {
//!         "get": {
//!           "queryParameters": { "page": { "type": "integer" } },
//!           "responses": { "collectionSchema": "customer" }
//!         }
//!       }
//!     }
//!   ]
//! }
//! ```

use anyhow::{Context, Result};
use cgraml_core::naming::sanitize_type_name;
use cgraml_core::{
    ActionMeta, GeneratorConfig, HttpMethod, ResponseType, SchemaLoader, ServiceMeta, TypeResolver,
};
use serde::Deserialize;
use serde_json::{Map, Value};
use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;

/// Raw API document
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiDocument {
    #[serde(default)]
    pub title: Option<String>,

    #[serde(default)]
    pub base_uri: Option<String>,

    /// Model schemas by name, in document order
    #[serde(default)]
    pub schemas: Map<String, Value>,

    #[serde(default)]
    pub resources: Vec<ResourceDefinition>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ResourceDefinition {
    pub uri: String,

    #[serde(default)]
    pub description: Option<String>,

    /// Actions keyed by HTTP verb
    #[serde(default)]
    pub actions: BTreeMap<String, ActionDefinition>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionDefinition {
    #[serde(default)]
    pub query_parameters: Map<String, Value>,

    #[serde(default)]
    pub responses: Option<ResponseDefinition>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseDefinition {
    #[serde(default)]
    pub schema: Option<String>,

    #[serde(default)]
    pub collection_schema: Option<String>,
}

impl ApiDocument {
    /// Load a document from a file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read(path.as_ref())
            .with_context(|| format!("Failed to read API document: {:?}", path.as_ref()))?;

        Self::from_slice(&content)
            .with_context(|| format!("Invalid API document: {:?}", path.as_ref()))
    }

    /// Parse a document from JSON bytes
    pub fn from_slice(content: &[u8]) -> Result<Self> {
        serde_json::from_slice(content).context("Failed to parse API document")
    }

    /// Validate the document
    pub fn validate(&self) -> Result<()> {
        for name in self.schemas.keys() {
            if sanitize_type_name(name).is_empty() {
                anyhow::bail!("Schema name '{}' has no usable identifier", name);
            }
        }

        let mut seen = BTreeSet::new();
        for resource in &self.resources {
            if resource.uri.trim().is_empty() {
                anyhow::bail!("Resource URI cannot be empty");
            }
            if sanitize_type_name(&resource.uri).is_empty() {
                anyhow::bail!("Resource URI '{}' has no usable identifier", resource.uri);
            }
            if !seen.insert(resource.uri.as_str()) {
                anyhow::bail!("Duplicate resource URI: {}", resource.uri);
            }
        }

        Ok(())
    }

    /// Number of `$linkedData` relations across all schemas
    pub fn linked_data_count(&self) -> usize {
        self.schemas
            .values()
            .filter_map(|schema| schema.get("$linkedData"))
            .filter_map(Value::as_object)
            .map(Map::len)
            .sum()
    }
}

/// A validated document converted into core service descriptions
#[derive(Debug)]
pub struct LoadedDocument {
    document: ApiDocument,
    services: Vec<ServiceMeta>,
    types: TypeResolver,
}

impl LoadedDocument {
    /// Convert `document`, resolving parameter types against the config's
    /// overrides and the model class generated for every schema.
    pub fn new(document: ApiDocument, config: &GeneratorConfig, base_package: &str) -> Result<Self> {
        document.validate()?;

        let mut types = TypeResolver::with_overrides(&config.type_overrides);
        for name in document.schemas.keys() {
            types.register_model(base_package, name);
        }

        let services = document
            .resources
            .iter()
            .map(|resource| service_meta(resource, &types))
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            document,
            services,
            types,
        })
    }

    pub fn document(&self) -> &ApiDocument {
        &self.document
    }

    pub fn services(&self) -> &[ServiceMeta] {
        &self.services
    }

    /// Resolver knowing every model schema of the document
    pub fn types(&self) -> &TypeResolver {
        &self.types
    }
}

impl SchemaLoader for LoadedDocument {
    fn response_type(&self, path: &[String]) -> Option<ResponseType> {
        self.services.response_type(path)
    }
}

fn service_meta(resource: &ResourceDefinition, types: &TypeResolver) -> Result<ServiceMeta> {
    let mut service = ServiceMeta::new(resource.uri.clone());
    service.description = resource.description.clone();

    for (verb, definition) in &resource.actions {
        let Some(method) = HttpMethod::parse(verb) else {
            tracing::warn!("Unknown HTTP verb '{}' on {}; skipping", verb, resource.uri);
            continue;
        };

        let mut action = ActionMeta::new(method);
        for (name, property) in &definition.query_parameters {
            let parameter = types
                .property_field(&resource.uri, name, property)
                .with_context(|| format!("Invalid query parameter '{name}' on {verb} {}", resource.uri))?;
            action = action.with_parameter(parameter);
        }

        if let Some(response) = definition.responses.as_ref().and_then(|r| {
            ResponseType::from_declared(r.schema.as_deref(), r.collection_schema.as_deref())
        }) {
            action = action.with_response(response);
        }

        service = service.with_action(action);
    }

    Ok(service)
}

/// Check command implementation
pub fn check(source: &Path, config: &GeneratorConfig, base_package: &str) -> Result<()> {
    println!("Checking API document: {}", source.display());

    let loaded = LoadedDocument::new(ApiDocument::from_file(source)?, config, base_package)?;
    let document = loaded.document();

    let parameter_classes = loaded
        .services()
        .iter()
        .filter(|s| s.action(HttpMethod::Get).is_some_and(|a| !a.parameters.is_empty()))
        .count();

    if let Some(title) = &document.title {
        println!("✓ Title: {}", title);
    }
    if let Some(base_uri) = &document.base_uri {
        println!("✓ Base URI: {}", base_uri);
    }
    println!("✓ Schemas: {}", document.schemas.len());
    println!("✓ Resources: {}", loaded.services().len());
    println!("✓ Parameters classes: {}", parameter_classes);
    println!("✓ Linked-data relations: {}", document.linked_data_count());
    println!("\nAPI document is valid!");

    Ok(())
}
