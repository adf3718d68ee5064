//! `cgraml generate`: run every builder over an API document

use crate::loader::{ApiDocument, LoadedDocument};
use crate::project::ResolvedProject;
use anyhow::Result;
use cgraml_core::{
    ClassBuilder, CodeEmitter, CollectingEmitter, GenError, GenResult, GenerationSession,
    GeneratorConfig, ModelBuilder, ParametersBuilder,
};
use cgraml_logging::{Diagnostic, DiagnosticsCollector, LogLevel};

/// A class that could not be generated
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Failure {
    /// Canonical class name, or the schema name when it could not be read
    pub subject: String,
    pub code: u32,
    pub message: String,
}

/// Outcome of one generation run
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct GenerationSummary {
    /// Canonical names of emitted classes, in emission order
    pub generated: Vec<String>,

    /// Resources without a parameters class
    pub skipped: Vec<String>,

    pub failed: Vec<Failure>,
}

impl GenerationSummary {
    pub fn is_clean(&self) -> bool {
        self.failed.is_empty()
    }

    fn record(&mut self, entity: &str, outcome: GenResult<String>) {
        match outcome {
            Ok(class) => self.generated.push(class),
            Err(GenError::MissingGetAction { service, .. } | GenError::EmptyParameters { service, .. }) => {
                tracing::info!("Resource {} has no GET parameters; no parameters class", service);
                self.skipped.push(service);
            }
            Err(err) => {
                tracing::error!("Failed to generate {} ({}): {}", err.subject(), entity, err);
                self.failed.push(Failure {
                    subject: err.subject().to_string(),
                    code: err.error_code(),
                    message: err.to_string(),
                });
            }
        }
    }
}

/// Build and emit every parameters class, then every model class.
///
/// Failures are recorded and the remaining classes still run.
pub fn generate_all(
    loaded: &LoadedDocument,
    config: GeneratorConfig,
    base_package: &str,
    emitter: &mut dyn CodeEmitter,
) -> GenerationSummary {
    let mut session = GenerationSession::new(config, loaded).with_types(loaded.types().clone());
    let mut summary = GenerationSummary::default();

    for service in loaded.services() {
        let outcome = ParametersBuilder::parse(&mut session, base_package, &service.uri, service)
            .and_then(|builder| builder.build(&mut *emitter))
            .map(|builder| builder.class_meta().canonical_class_name());
        summary.record(&service.uri, outcome);
    }

    for (name, schema) in &loaded.document().schemas {
        let outcome = ModelBuilder::parse(&mut session, base_package, name, schema)
            .and_then(|builder| builder.build(&mut *emitter))
            .map(|builder| builder.class_meta().canonical_class_name());
        summary.record(name, outcome);
    }

    summary
}

/// Generate command implementation
pub fn run(
    project: &ResolvedProject,
    config: GeneratorConfig,
    strict: bool,
    dry_run: bool,
) -> Result<GenerationSummary> {
    let document = ApiDocument::from_file(&project.source)?;
    let loaded = LoadedDocument::new(document, &config, &project.base_package)?;

    let mut emitter: Box<dyn CodeEmitter> = if dry_run {
        Box::new(CollectingEmitter::new())
    } else {
        project.format.emitter(&project.output)
    };

    tracing::info!(
        "Generating {} classes from {} into {}",
        project.format,
        project.source.display(),
        project.output.display()
    );
    let summary = generate_all(&loaded, config, &project.base_package, emitter.as_mut());

    let diagnostics = DiagnosticsCollector::global().drain();
    for line in summary_lines(&summary, dry_run, &diagnostics) {
        println!("{line}");
    }

    if strict && !summary.is_clean() {
        anyhow::bail!(
            "{} class(es) failed to generate (strict mode)",
            summary.failed.len()
        );
    }

    Ok(summary)
}

/// Lines of the end-of-run report, including the warnings drained from the
/// diagnostics collector. Errors already appear as failures.
fn summary_lines(
    summary: &GenerationSummary,
    dry_run: bool,
    diagnostics: &[Diagnostic],
) -> Vec<String> {
    let verb = if dry_run { "Built" } else { "Generated" };
    let mut lines = vec![format!("✓ {} {} classes", verb, summary.generated.len())];

    if !summary.skipped.is_empty() {
        lines.push(format!(
            "  Skipped {} resources without GET parameters",
            summary.skipped.len()
        ));
    }
    for failure in &summary.failed {
        lines.push(format!(
            "✗ {} [E{:03}]: {}",
            failure.subject, failure.code, failure.message
        ));
    }

    let warnings: Vec<&Diagnostic> = diagnostics
        .iter()
        .filter(|d| d.level == LogLevel::Warn)
        .collect();
    if !warnings.is_empty() {
        lines.push(format!("  {} warning(s):", warnings.len()));
        lines.extend(warnings.iter().map(|d| format!("  ! {}", d.message)));
    }

    lines
}
