#![allow(non_snake_case)]

use super::*;
use test_case::test_case;
use tracing_subscriber::prelude::*;

fn leaked_collector() -> &'static DiagnosticsCollector {
    Box::leak(Box::new(DiagnosticsCollector::new()))
}

// DiagnosticsLayer tests

#[test_case(Level::TRACE, LogLevel::Trace)]
#[test_case(Level::DEBUG, LogLevel::Debug)]
#[test_case(Level::INFO, LogLevel::Info)]
#[test_case(Level::WARN, LogLevel::Warn)]
#[test_case(Level::ERROR, LogLevel::Error)]
fn DiagnosticsLayer___convert_level___maps_tracing_level(level: Level, expected: LogLevel) {
    assert_eq!(DiagnosticsLayer::convert_level(&level), expected);
}

#[test]
fn DiagnosticsLayer___warn_event___is_recorded_with_message() {
    let collector = leaked_collector();
    let subscriber =
        tracing_subscriber::registry().with(DiagnosticsLayer::with_collector(collector));

    tracing::subscriber::with_default(subscriber, || {
        tracing::warn!("Duplicate property 'id' in User; keeping the first");
    });

    let entries = collector.drain();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].level, LogLevel::Warn);
    assert_eq!(
        entries[0].message,
        "Duplicate property 'id' in User; keeping the first"
    );
}

#[test]
fn DiagnosticsLayer___info_event___is_below_default_threshold() {
    let collector = leaked_collector();
    let subscriber =
        tracing_subscriber::registry().with(DiagnosticsLayer::with_collector(collector));

    tracing::subscriber::with_default(subscriber, || {
        tracing::info!("Parsed model class com.acme.model.User");
    });

    assert!(collector.drain().is_empty());
}

#[test]
fn DiagnosticsLayer___event_without_message___uses_first_field() {
    let collector = leaked_collector();
    let subscriber =
        tracing_subscriber::registry().with(DiagnosticsLayer::with_collector(collector));

    tracing::subscriber::with_default(subscriber, || {
        tracing::error!(class = "com.acme.model.User");
    });

    let entries = collector.drain();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].message, "com.acme.model.User");
}

#[test]
fn DiagnosticsLayer___records_event_target() {
    let collector = leaked_collector();
    let subscriber =
        tracing_subscriber::registry().with(DiagnosticsLayer::with_collector(collector));

    tracing::subscriber::with_default(subscriber, || {
        tracing::error!(target: "cgraml_cli::generate", "failed");
    });

    assert_eq!(collector.drain()[0].target, "cgraml_cli::generate");
}

#[test]
fn DiagnosticsLayer___default___uses_global_collector() {
    let layer = DiagnosticsLayer::default();

    assert!(std::ptr::eq(layer.collector, DiagnosticsCollector::global()));
}

#[test_case(LogLevel::Trace, LogLevel::Warn)]
#[test_case(LogLevel::Info, LogLevel::Warn)]
#[test_case(LogLevel::Warn, LogLevel::Warn)]
#[test_case(LogLevel::Error, LogLevel::Error)]
#[test_case(LogLevel::Off, LogLevel::Off)]
fn collection_threshold___never_below_warn(console: LogLevel, expected: LogLevel) {
    assert_eq!(collection_threshold(console), expected);
}
