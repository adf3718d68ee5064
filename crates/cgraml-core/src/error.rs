//! Error types for class generation

use crate::EmitError;
use thiserror::Error;

/// Result type alias for generation operations
pub type GenResult<T> = Result<T, GenError>;

/// Stage of generation an error was raised in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenStage {
    /// Building the class metamodel from a schema fragment
    Parse,
    /// Handing the finished metamodel to the code emitter
    Build,
}

/// Error type for generation operations
///
/// Every variant is fatal to the one class being generated and none of them
/// affect sibling resources. A class whose parse failed is never registered.
#[derive(Error, Debug)]
pub enum GenError {
    /// The canonical class name was already generated in this session
    #[error("class {class} was already generated before")]
    DuplicateClass { class: String },

    /// A `$linkedData` relation has no associated services
    #[error("malformed $linkedData schema in {class}: relation '{relation}' has no services")]
    MalformedLinkedData { class: String, relation: String },

    /// The service has no GET action
    #[error("service {service} does not have a GET method (class {class})")]
    MissingGetAction { class: String, service: String },

    /// The GET action declares no parameters
    #[error("GET method of service {service} does not have any parameters (class {class})")]
    EmptyParameters { class: String, service: String },

    /// The raw resource description cannot be read as a schema
    #[error("invalid schema for {entity}: {reason}")]
    InvalidSchema { entity: String, reason: String },

    /// The code emitter failed to render the class
    #[error("failed to emit {class}: {source}")]
    Emission {
        class: String,
        #[source]
        source: EmitError,
    },
}

impl GenError {
    /// Returns the stage the error belongs to
    pub fn stage(&self) -> GenStage {
        match self {
            GenError::Emission { .. } => GenStage::Build,
            _ => GenStage::Parse,
        }
    }

    /// Returns a stable numeric code for the error kind
    pub fn error_code(&self) -> u32 {
        match self {
            GenError::DuplicateClass { .. } => 1,
            GenError::MalformedLinkedData { .. } => 2,
            GenError::MissingGetAction { .. } => 3,
            GenError::EmptyParameters { .. } => 4,
            GenError::InvalidSchema { .. } => 5,
            GenError::Emission { .. } => 6,
        }
    }

    /// Canonical class name (or entity, for unreadable schemas) the error concerns
    pub fn subject(&self) -> &str {
        match self {
            GenError::DuplicateClass { class }
            | GenError::MalformedLinkedData { class, .. }
            | GenError::MissingGetAction { class, .. }
            | GenError::EmptyParameters { class, .. }
            | GenError::Emission { class, .. } => class,
            GenError::InvalidSchema { entity, .. } => entity,
        }
    }
}

#[cfg(test)]
#[path = "error/error_tests.rs"]
mod error_tests;
