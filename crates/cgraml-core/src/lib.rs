//! cgraml-core - Class metamodel construction and linked-data method synthesis
//!
//! This crate turns declarative REST resource descriptions into a typed
//! client-class metamodel:
//! - [`ClassMeta`], [`FieldMeta`] and [`MethodMeta`] describe the classes to generate
//! - [`ModelBuilder`] turns a resource's property map into a data class
//! - [`ParametersBuilder`] turns a GET action's query parameters into a parameter holder
//! - [`LinkedDataSynthesizer`] derives navigation methods from `$linkedData` relations
//! - [`GenerationSession`] carries the registry of already generated classes
//!
//! Loading schema documents and rendering source text live outside this crate,
//! behind the [`SchemaLoader`] and [`CodeEmitter`] traits.
//!
//! # Example
//!
//! ```
//! use cgraml_core::prelude::*;
//! use serde_json::json;
//!
//! let services: Vec<ServiceMeta> = Vec::new();
//! let mut session = GenerationSession::new(GeneratorConfig::default(), &services);
//!
//! let schema = json!({
//!     "properties": {
//!         "id": { "type": "string" },
//!         "name": { "type": "string" }
//!     }
//! });
//!
//! let builder = ModelBuilder::parse(&mut session, "com.acme", "user", &schema)?;
//! assert_eq!(builder.class_meta().canonical_class_name(), "com.acme.model.User");
//! assert_eq!(builder.class_meta().methods().len(), 6);
//!
//! let mut emitter = CollectingEmitter::new();
//! builder.build(&mut emitter)?;
//! assert_eq!(emitter.classes().len(), 1);
//! # Ok::<(), cgraml_core::GenError>(())
//! ```

mod config;
mod emitter;
mod error;
mod meta;
mod registry;
mod service;

pub mod builder;
pub mod linked_data;
pub mod naming;
pub mod types;

pub use builder::{ClassBuilder, ModelBuilder, ParametersBuilder};
pub use config::GeneratorConfig;
pub use emitter::{CodeEmitter, CollectingEmitter, EmitError};
pub use error::{GenError, GenResult, GenStage};
pub use linked_data::{LinkedDataMethods, LinkedDataSynthesizer};
pub use meta::{ClassMeta, Expr, FieldMeta, FieldSet, MethodMeta, Statement, Visibility};
pub use registry::{GenerationRegistry, GenerationSession};
pub use service::{ActionMeta, HttpMethod, ResponseType, SchemaLoader, ServiceMeta};
pub use types::TypeResolver;

/// Package segment appended to the base package for model classes.
pub const MODEL_PACKAGE: &str = "model";

/// Package segment appended to the base package for parameter classes.
pub const PARAMETERS_PACKAGE: &str = "parameters";

/// Package segment holding the API map service used by navigation methods.
pub const SERVICE_PACKAGE: &str = "service";

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        ActionMeta, ClassBuilder, ClassMeta, CodeEmitter, CollectingEmitter, FieldMeta,
        GenError, GenResult, GenerationSession, GeneratorConfig, HttpMethod, MethodMeta,
        ModelBuilder, ParametersBuilder, ResponseType, SchemaLoader, ServiceMeta, Visibility,
    };
}

#[cfg(test)]
mod lib_tests;
