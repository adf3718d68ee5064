//! Metamodel dump as JSON.

use cgraml_core::{ClassMeta, CodeEmitter, EmitError};
use std::fs;
use std::path::{Path, PathBuf};

/// Writes each class as `<canonical name>.json` into one directory.
#[derive(Debug)]
pub struct JsonEmitter {
    output_dir: PathBuf,
}

impl JsonEmitter {
    pub fn new(output_dir: impl AsRef<Path>) -> Self {
        Self {
            output_dir: output_dir.as_ref().to_path_buf(),
        }
    }
}

impl CodeEmitter for JsonEmitter {
    fn emit(&mut self, class: &ClassMeta) -> Result<(), EmitError> {
        fs::create_dir_all(&self.output_dir)?;

        let mut json = serde_json::to_vec_pretty(class)?;
        json.push(b'\n');

        let path = self
            .output_dir
            .join(format!("{}.json", class.canonical_class_name()));
        fs::write(path, json)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    #![allow(non_snake_case)]

    use super::*;
    use cgraml_core::FieldMeta;

    #[test]
    fn JsonEmitter___emit___writes_canonical_named_file() {
        let dir = tempfile::tempdir().unwrap();
        let mut emitter = JsonEmitter::new(dir.path());
        let mut class = ClassMeta::new("com.acme.model", "User");
        class.add_field(FieldMeta::new("createdAt", "java.util.Date").with_serialized_name("created_at"));

        emitter.emit(&class).unwrap();

        let path = dir.path().join("com.acme.model.User.json");
        let value: serde_json::Value =
            serde_json::from_slice(&fs::read(&path).unwrap()).unwrap();
        assert_eq!(value["class_name"], "User");
        assert_eq!(value["fields"][0]["type"], "java.util.Date");
        assert_eq!(value["fields"][0]["serialized_name"], "created_at");
    }
}
