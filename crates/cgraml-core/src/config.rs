//! Generator configuration types

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Settings that shape the generated classes
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// First paragraph of every generated class's documentation
    #[serde(default = "default_doc_header")]
    pub doc_header: String,

    /// Simple name of the API map service class navigation methods start from
    ///
    /// Resolved in the `<base package>.service` package.
    #[serde(default = "default_api_map_class")]
    pub api_map_class: String,

    /// Static accessor returning the API map service instance
    #[serde(default = "default_api_map_accessor")]
    pub api_map_accessor: String,

    /// Method passing a parameters object to a service call
    #[serde(default = "default_parameters_method")]
    pub parameters_method: String,

    /// Method performing the request at the end of a navigation chain
    #[serde(default = "default_invoke_method")]
    pub invoke_method: String,

    /// Interfaces every model class declares
    #[serde(default)]
    pub model_interfaces: Vec<String>,

    /// Interfaces every parameters class declares
    #[serde(default)]
    pub parameters_interfaces: Vec<String>,

    /// Schema type name to target type name, applied over the built-in table
    #[serde(default)]
    pub type_overrides: BTreeMap<String, String>,
}

fn default_doc_header() -> String {
    "Generated by cgraml.".to_string()
}

fn default_api_map_class() -> String {
    "ApiMapService".to_string()
}

fn default_api_map_accessor() -> String {
    "instance".to_string()
}

fn default_parameters_method() -> String {
    "withParameters".to_string()
}

fn default_invoke_method() -> String {
    "httpGet".to_string()
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            doc_header: default_doc_header(),
            api_map_class: default_api_map_class(),
            api_map_accessor: default_api_map_accessor(),
            parameters_method: default_parameters_method(),
            invoke_method: default_invoke_method(),
            model_interfaces: Vec::new(),
            parameters_interfaces: Vec::new(),
            type_overrides: BTreeMap::new(),
        }
    }
}

impl GeneratorConfig {
    /// Create a configuration with every default applied
    pub fn new() -> Self {
        Self::default()
    }

    /// Create configuration from JSON bytes
    pub fn from_json(bytes: &[u8]) -> Result<Self, serde_json::Error> {
        if bytes.is_empty() {
            return Ok(Self::default());
        }
        serde_json::from_slice(bytes)
    }
}
