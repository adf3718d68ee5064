//! Project configuration (`cgraml.toml`) parsing and validation

use crate::codegen::OutputFormat;
use anyhow::{Context, Result};
use cgraml_core::GeneratorConfig;
use cgraml_logging::LogLevel;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Config file picked up from the working directory when no path is given
pub const DEFAULT_CONFIG_FILE: &str = "cgraml.toml";

/// cgraml.toml structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProjectConfig {
    #[serde(default)]
    pub project: ProjectSection,

    #[serde(default)]
    pub generator: GeneratorConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProjectSection {
    /// API document path
    #[serde(default)]
    pub source: Option<String>,

    /// Output directory
    #[serde(default)]
    pub output: Option<String>,

    #[serde(default)]
    pub base_package: Option<String>,

    #[serde(default)]
    pub format: Option<OutputFormat>,

    #[serde(default)]
    pub log_level: Option<String>,
}

/// Settings given on the command line; each one wins over the file
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub source: Option<String>,
    pub output: Option<String>,
    pub base_package: Option<String>,
    pub format: Option<OutputFormat>,
}

/// Fully resolved project settings
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedProject {
    pub source: PathBuf,
    pub output: PathBuf,
    pub base_package: String,
    pub format: OutputFormat,
}

impl ProjectConfig {
    /// Load configuration from a file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config: {:?}", path.as_ref()))?;

        Self::from_str(&content)
    }

    /// Parse configuration from string
    pub fn from_str(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse config")
    }

    /// Load `path`, or `cgraml.toml` from the working directory when it exists
    pub fn load(path: Option<&str>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None if Path::new(DEFAULT_CONFIG_FILE).exists() => Self::from_file(DEFAULT_CONFIG_FILE),
            None => Ok(Self::default()),
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if let Some(package) = &self.project.base_package {
            if !is_valid_package(package) {
                anyhow::bail!("Invalid base package: {}", package);
            }
        }

        self.log_level()?;

        let generator = &self.generator;
        for (what, value) in [
            ("api_map_class", &generator.api_map_class),
            ("api_map_accessor", &generator.api_map_accessor),
            ("parameters_method", &generator.parameters_method),
            ("invoke_method", &generator.invoke_method),
        ] {
            if !is_valid_identifier(value) {
                anyhow::bail!("generator.{} is not a valid identifier: '{}'", what, value);
            }
        }

        for (schema, target) in &generator.type_overrides {
            if target.trim().is_empty() {
                anyhow::bail!("Type override for '{}' cannot be empty", schema);
            }
        }

        Ok(())
    }

    /// Log level from the `[project]` table, if set
    pub fn log_level(&self) -> Result<Option<LogLevel>> {
        self.project
            .log_level
            .as_deref()
            .map(|level| level.parse::<LogLevel>().map_err(anyhow::Error::msg))
            .transpose()
    }

    /// Merge command-line overrides over the file; source and package are required
    pub fn resolve(&self, overrides: Overrides) -> Result<ResolvedProject> {
        let source = overrides
            .source
            .or_else(|| self.project.source.clone())
            .context("No API document given (use --source or [project] source)")?;

        let base_package = overrides
            .base_package
            .or_else(|| self.project.base_package.clone())
            .context("No base package given (use --package or [project] base_package)")?;
        if !is_valid_package(&base_package) {
            anyhow::bail!("Invalid base package: {}", base_package);
        }

        let output = overrides
            .output
            .or_else(|| self.project.output.clone())
            .unwrap_or_else(|| "generated".to_string());

        Ok(ResolvedProject {
            source: PathBuf::from(source),
            output: PathBuf::from(output),
            base_package,
            format: overrides.format.or(self.project.format).unwrap_or_default(),
        })
    }
}

/// Check that every dot-separated segment is a Java identifier
fn is_valid_package(package: &str) -> bool {
    !package.is_empty() && package.split('.').all(is_valid_identifier)
}

fn is_valid_identifier(segment: &str) -> bool {
    let mut chars = segment.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() || first == '_' || first == '$' => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
        }
        _ => false,
    }
}
