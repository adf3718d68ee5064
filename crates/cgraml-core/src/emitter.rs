//! Code emitter boundary.
//!
//! The core never renders source text. A [`CodeEmitter`] receives each
//! finished [`ClassMeta`] and is responsible for producing output.

use crate::ClassMeta;
use thiserror::Error;

/// Errors raised by code emitters.
#[derive(Debug, Error)]
pub enum EmitError {
    /// I/O error while writing output.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The metamodel cannot be rendered by this emitter.
    #[error("render error: {0}")]
    Render(String),
}

/// Consumer of finished class metamodels.
pub trait CodeEmitter {
    /// Render one class.
    fn emit(&mut self, class: &ClassMeta) -> Result<(), EmitError>;
}

/// Emitter that keeps every class in memory.
///
/// Used for dry runs and tests.
#[derive(Debug, Default)]
pub struct CollectingEmitter {
    classes: Vec<ClassMeta>,
}

impl CollectingEmitter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn classes(&self) -> &[ClassMeta] {
        &self.classes
    }

    pub fn into_classes(self) -> Vec<ClassMeta> {
        self.classes
    }
}

impl CodeEmitter for CollectingEmitter {
    fn emit(&mut self, class: &ClassMeta) -> Result<(), EmitError> {
        self.classes.push(class.clone());
        Ok(())
    }
}
