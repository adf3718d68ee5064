//! Generation registry and session state.
//!
//! A [`GenerationSession`] is passed explicitly to every builder call. It owns
//! the registry of canonical class names generated so far, the type resolver
//! and the configuration, and borrows the schema loader.
//!
//! The session is plain mutable state. Builders need `&mut` access to
//! register a class, so running builders in parallel over one session
//! requires wrapping it in a single lock.

use crate::{GenError, GenResult, GeneratorConfig, SchemaLoader, TypeResolver};
use std::collections::BTreeSet;

/// Canonical class names generated in one run.
#[derive(Debug, Clone, Default)]
pub struct GenerationRegistry {
    classes: BTreeSet<String>,
}

impl GenerationRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, canonical_name: &str) -> bool {
        self.classes.contains(canonical_name)
    }

    /// Record a class. A name may be registered at most once.
    pub fn register(&mut self, canonical_name: impl Into<String>) -> GenResult<()> {
        let canonical_name = canonical_name.into();
        if self.classes.contains(&canonical_name) {
            return Err(GenError::DuplicateClass {
                class: canonical_name,
            });
        }
        self.classes.insert(canonical_name);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    /// Registered names in sorted order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.classes.iter().map(String::as_str)
    }

    pub fn clear(&mut self) {
        self.classes.clear();
    }
}

/// State shared by every builder call of one generation run.
pub struct GenerationSession<'a> {
    registry: GenerationRegistry,
    types: TypeResolver,
    config: GeneratorConfig,
    loader: &'a dyn SchemaLoader,
}

impl<'a> GenerationSession<'a> {
    /// Create a session with an empty registry.
    ///
    /// The type resolver starts from the built-in table with the config's
    /// `type_overrides` applied.
    pub fn new(config: GeneratorConfig, loader: &'a dyn SchemaLoader) -> Self {
        Self {
            registry: GenerationRegistry::new(),
            types: TypeResolver::with_overrides(&config.type_overrides),
            config,
            loader,
        }
    }

    /// Replace the type resolver, e.g. with one that already knows the model schemas.
    #[must_use]
    pub fn with_types(mut self, types: TypeResolver) -> Self {
        self.types = types;
        self
    }

    pub fn registry(&self) -> &GenerationRegistry {
        &self.registry
    }

    pub fn registry_mut(&mut self) -> &mut GenerationRegistry {
        &mut self.registry
    }

    pub fn types(&self) -> &TypeResolver {
        &self.types
    }

    pub fn types_mut(&mut self) -> &mut TypeResolver {
        &mut self.types
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    pub fn loader(&self) -> &'a dyn SchemaLoader {
        self.loader
    }

    /// Forget every generated class so the session can serve another run.
    pub fn reset_registry(&mut self) {
        tracing::debug!("Resetting registry of {} classes", self.registry.len());
        self.registry.clear();
    }

    /// Fail when `canonical_name` was already generated.
    pub(crate) fn ensure_not_generated(&self, canonical_name: &str) -> GenResult<()> {
        if self.registry.contains(canonical_name) {
            return Err(GenError::DuplicateClass {
                class: canonical_name.to_string(),
            });
        }
        Ok(())
    }
}
