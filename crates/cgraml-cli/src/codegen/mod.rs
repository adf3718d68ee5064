//! Source emitters for generated classes.
//!
//! The core hands every finished [`ClassMeta`](cgraml_core::ClassMeta) to a
//! [`CodeEmitter`]. Two emitters are available:
//!
//! - **Java**: one `.java` source file per class, laid out by package
//! - **JSON**: the metamodel itself, one pretty-printed document per class
//!
//! ```text
//! API document
//!     ↓
//!  [Loader] → ServiceMeta + model schemas
//!     ↓
//!  [Builders] → ClassMeta
//!     ↓
//!  ├─→ [JavaEmitter] → com/acme/model/User.java
//!  └─→ [JsonEmitter] → com.acme.model.User.json
//! ```

pub mod java;
pub mod json;

pub use java::JavaEmitter;
pub use json::JsonEmitter;

use cgraml_core::CodeEmitter;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Output format of `cgraml generate`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Java,
    Json,
}

impl OutputFormat {
    /// Create the emitter writing this format below `output_dir`
    pub fn emitter(self, output_dir: &Path) -> Box<dyn CodeEmitter> {
        match self {
            OutputFormat::Java => Box::new(JavaEmitter::new(output_dir)),
            OutputFormat::Json => Box::new(JsonEmitter::new(output_dir)),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Java => write!(f, "java"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}
