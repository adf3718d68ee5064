//! Service and action descriptions produced by a schema loader.

use crate::FieldMeta;
use crate::naming::sanitize_type_name;
use serde::{Deserialize, Serialize};

/// HTTP verb of an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Patch,
    Delete,
    Head,
    Options,
}

impl HttpMethod {
    /// Parse a verb, case-insensitively.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "get" => Some(HttpMethod::Get),
            "post" => Some(HttpMethod::Post),
            "put" => Some(HttpMethod::Put),
            "patch" => Some(HttpMethod::Patch),
            "delete" => Some(HttpMethod::Delete),
            "head" => Some(HttpMethod::Head),
            "options" => Some(HttpMethod::Options),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Patch => "PATCH",
            HttpMethod::Delete => "DELETE",
            HttpMethod::Head => "HEAD",
            HttpMethod::Options => "OPTIONS",
        }
    }
}

impl std::fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Declared response type of an action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResponseType {
    /// The response is a single `schema` value.
    Scalar(String),
    /// The response is a collection whose elements follow this schema.
    Collection(String),
}

impl ResponseType {
    /// Build from the `schema`/`collectionSchema` pair of a response declaration.
    ///
    /// A non-empty collection schema wins; an empty or missing pair yields `None`.
    pub fn from_declared(schema: Option<&str>, collection_schema: Option<&str>) -> Option<Self> {
        match (schema, collection_schema) {
            (_, Some(element)) if !element.is_empty() => {
                Some(ResponseType::Collection(element.to_string()))
            }
            (Some(schema), _) if !schema.is_empty() => Some(ResponseType::Scalar(schema.to_string())),
            _ => None,
        }
    }

    /// Schema type name the generated method returns.
    pub fn type_name(&self) -> &str {
        match self {
            ResponseType::Scalar(name) | ResponseType::Collection(name) => name,
        }
    }
}

/// One HTTP action on a resource.
#[derive(Debug, Clone, Serialize)]
pub struct ActionMeta {
    pub method: HttpMethod,

    /// Declared query parameters, in declaration order.
    pub parameters: Vec<FieldMeta>,

    pub response: Option<ResponseType>,
}

impl ActionMeta {
    pub fn new(method: HttpMethod) -> Self {
        Self {
            method,
            parameters: Vec::new(),
            response: None,
        }
    }

    #[must_use]
    pub fn with_parameter(mut self, parameter: FieldMeta) -> Self {
        self.parameters.push(parameter);
        self
    }

    #[must_use]
    pub fn with_response(mut self, response: ResponseType) -> Self {
        self.response = Some(response);
        self
    }
}

/// A REST resource identified by its URI.
#[derive(Debug, Clone, Serialize)]
pub struct ServiceMeta {
    pub uri: String,

    pub description: Option<String>,

    pub actions: Vec<ActionMeta>,
}

impl ServiceMeta {
    pub fn new(uri: impl Into<String>) -> Self {
        Self {
            uri: uri.into(),
            description: None,
            actions: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_action(mut self, action: ActionMeta) -> Self {
        self.actions.push(action);
        self
    }

    /// The first action using `method`.
    pub fn action(&self, method: HttpMethod) -> Option<&ActionMeta> {
        self.actions.iter().find(|a| a.method == method)
    }

    /// Identifier-safe type name derived from the URI.
    pub fn type_name(&self) -> String {
        sanitize_type_name(&self.uri)
    }
}

/// Source of response-type information for linked-data navigation.
pub trait SchemaLoader {
    /// Declared GET response type of the final service in `path`.
    ///
    /// Returns `None` when the service is unknown or declares no response type.
    fn response_type(&self, path: &[String]) -> Option<ResponseType>;
}

/// Resolve a path against loaded services by sanitized type name.
///
/// The whole traversal path is matched first, so `["Customers/{id}", "Orders"]`
/// finds `/customers/{id}/orders`. Only when no resource has that URI is the
/// final segment matched on its own.
impl SchemaLoader for Vec<ServiceMeta> {
    fn response_type(&self, path: &[String]) -> Option<ResponseType> {
        let full = sanitize_type_name(&path.join("/"));
        let last = sanitize_type_name(path.last()?);

        let service = self
            .iter()
            .find(|service| service.type_name() == full)
            .or_else(|| self.iter().find(|service| service.type_name() == last))?;

        service.action(HttpMethod::Get)?.response.clone()
    }
}

#[cfg(test)]
mod tests {
    #![allow(non_snake_case)]

    use super::*;
    use test_case::test_case;

    fn services() -> Vec<ServiceMeta> {
        vec![
            ServiceMeta::new("/customers").with_action(
                ActionMeta::new(HttpMethod::Get)
                    .with_response(ResponseType::Collection("customer".into())),
            ),
            ServiceMeta::new("/orders/{orderId}").with_action(
                ActionMeta::new(HttpMethod::Get).with_response(ResponseType::Scalar("order".into())),
            ),
            ServiceMeta::new("/audit").with_action(ActionMeta::new(HttpMethod::Post)),
        ]
    }

    #[test_case("get", Some(HttpMethod::Get))]
    #[test_case("GET", Some(HttpMethod::Get))]
    #[test_case("Delete", Some(HttpMethod::Delete))]
    #[test_case("fetch", None)]
    fn HttpMethod___parse___is_case_insensitive(input: &str, expected: Option<HttpMethod>) {
        assert_eq!(HttpMethod::parse(input), expected);
    }

    #[test_case(Some("order"), None, Some(ResponseType::Scalar("order".into())))]
    #[test_case(Some("orders"), Some("order"), Some(ResponseType::Collection("order".into())))]
    #[test_case(Some("orders"), Some(""), Some(ResponseType::Scalar("orders".into())))]
    #[test_case(None, None, None)]
    #[test_case(Some(""), None, None)]
    fn ResponseType___from_declared___prefers_collection(
        schema: Option<&str>,
        collection: Option<&str>,
        expected: Option<ResponseType>,
    ) {
        assert_eq!(ResponseType::from_declared(schema, collection), expected);
    }

    #[test]
    fn ServiceMeta___action___finds_get() {
        let service = ServiceMeta::new("/x")
            .with_action(ActionMeta::new(HttpMethod::Post))
            .with_action(ActionMeta::new(HttpMethod::Get));

        assert_eq!(service.action(HttpMethod::Get).map(|a| a.method), Some(HttpMethod::Get));
        assert!(service.action(HttpMethod::Delete).is_none());
    }

    #[test]
    fn SchemaLoader___services___resolves_final_path_segment() {
        let path = vec!["Customers".to_string(), "Orders/{orderId}".to_string()];

        let response = services().response_type(&path);

        assert_eq!(response, Some(ResponseType::Scalar("order".into())));
    }

    #[test]
    fn SchemaLoader___services___nested_resource_wins_over_same_named_top_level() {
        let loader = vec![
            ServiceMeta::new("/orders").with_action(
                ActionMeta::new(HttpMethod::Get).with_response(ResponseType::Scalar("summary".into())),
            ),
            ServiceMeta::new("/customers/{customerId}/orders").with_action(
                ActionMeta::new(HttpMethod::Get)
                    .with_response(ResponseType::Collection("order".into())),
            ),
        ];
        let path = vec!["Customers/{customerId}".to_string(), "Orders".to_string()];

        assert_eq!(
            loader.response_type(&path),
            Some(ResponseType::Collection("order".into()))
        );
        assert_eq!(
            loader.response_type(&["Orders".to_string()]),
            Some(ResponseType::Scalar("summary".into()))
        );
    }

    #[test]
    fn SchemaLoader___services___unknown_or_responseless_is_none() {
        let loader = services();

        assert_eq!(loader.response_type(&["Invoices".to_string()]), None);
        assert_eq!(loader.response_type(&["Audit".to_string()]), None);
        assert_eq!(loader.response_type(&[]), None);
    }
}
