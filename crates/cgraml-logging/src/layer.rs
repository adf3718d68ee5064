//! Tracing layer that feeds the diagnostics collector

use crate::LogLevel;
use crate::collector::DiagnosticsCollector;
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::Layer;
use tracing_subscriber::layer::Context;
use tracing_subscriber::registry::LookupSpan;

/// Tracing layer that records events into a [`DiagnosticsCollector`]
pub struct DiagnosticsLayer {
    collector: &'static DiagnosticsCollector,
}

impl DiagnosticsLayer {
    /// Create a layer using the global collector
    pub fn new() -> Self {
        Self::with_collector(DiagnosticsCollector::global())
    }

    /// Create a layer with a specific collector
    pub fn with_collector(collector: &'static DiagnosticsCollector) -> Self {
        Self { collector }
    }

    fn convert_level(level: &Level) -> LogLevel {
        match *level {
            Level::TRACE => LogLevel::Trace,
            Level::DEBUG => LogLevel::Debug,
            Level::INFO => LogLevel::Info,
            Level::WARN => LogLevel::Warn,
            Level::ERROR => LogLevel::Error,
        }
    }
}

impl Default for DiagnosticsLayer {
    fn default() -> Self {
        Self::new()
    }
}

impl<S> Layer<S> for DiagnosticsLayer
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let metadata = event.metadata();
        let level = Self::convert_level(metadata.level());

        if !self.collector.is_recorded(level) {
            return;
        }

        let mut visitor = MessageVisitor::default();
        event.record(&mut visitor);

        let message = visitor.message.unwrap_or_default();
        self.collector.record(level, metadata.target(), &message);
    }
}

/// Visitor to extract the message field from tracing events
#[derive(Default)]
struct MessageVisitor {
    message: Option<String>,
}

impl Visit for MessageVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        // Fall back to the first field when there is no "message"
        if field.name() == "message" || self.message.is_none() {
            self.message = Some(format!("{:?}", value));
        }
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "message" || self.message.is_none() {
            self.message = Some(value.to_string());
        }
    }
}

/// Install the global subscriber: compact stderr output plus diagnostics
///
/// `RUST_LOG` takes precedence over `level` for the stderr output. The
/// diagnostics layer ignores both filters and keeps warnings and errors,
/// or only errors at `LogLevel::Error`, or nothing at `LogLevel::Off`.
/// Returns `false` if a global subscriber was already installed.
pub fn init_logging(level: LogLevel) -> bool {
    use tracing_subscriber::EnvFilter;
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;

    let filter = match std::env::var("RUST_LOG") {
        Ok(directives) => EnvFilter::try_new(&directives)
            .unwrap_or_else(|_| EnvFilter::new(level.as_directive())),
        Err(_) => EnvFilter::new(level.as_directive()),
    };

    let console = fmt::layer()
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .with_filter(filter);

    let diagnostics = DiagnosticsLayer::new();
    diagnostics.collector.set_threshold(collection_threshold(level));

    let subscriber = tracing_subscriber::registry()
        .with(console)
        .with(diagnostics);

    tracing::subscriber::set_global_default(subscriber).is_ok()
}

/// Lowest level the collector keeps for a given console level
fn collection_threshold(console: LogLevel) -> LogLevel {
    console.max(LogLevel::Warn)
}

#[cfg(test)]
#[path = "layer/layer_tests.rs"]
mod layer_tests;
