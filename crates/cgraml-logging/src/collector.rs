//! Diagnostics collection for the end-of-run summary

use crate::LogLevel;
use once_cell::sync::OnceCell;
use parking_lot::Mutex;
use std::sync::atomic::{AtomicU8, Ordering};

/// Global diagnostics collector
static COLLECTOR: OnceCell<DiagnosticsCollector> = OnceCell::new();

/// A recorded log event
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub level: LogLevel,
    pub target: String,
    pub message: String,
}

/// Keeps every event at or above a threshold (warnings by default)
pub struct DiagnosticsCollector {
    entries: Mutex<Vec<Diagnostic>>,
    threshold: AtomicU8,
}

impl DiagnosticsCollector {
    /// Create a new, empty collector
    pub fn new() -> Self {
        Self {
            entries: Mutex::new(Vec::new()),
            threshold: AtomicU8::new(LogLevel::Warn as u8),
        }
    }

    /// Get the global collector instance
    pub fn global() -> &'static DiagnosticsCollector {
        COLLECTOR.get_or_init(DiagnosticsCollector::new)
    }

    /// Keep events at `level` and above from now on
    pub fn set_threshold(&self, level: LogLevel) {
        self.threshold.store(level as u8, Ordering::SeqCst);
    }

    pub fn threshold(&self) -> LogLevel {
        LogLevel::from_u8(self.threshold.load(Ordering::SeqCst))
    }

    /// Check if events at `level` are kept
    pub fn is_recorded(&self, level: LogLevel) -> bool {
        level != LogLevel::Off && level >= self.threshold()
    }

    /// Record an event if its level passes the threshold
    pub fn record(&self, level: LogLevel, target: &str, message: &str) {
        if !self.is_recorded(level) {
            return;
        }
        self.entries.lock().push(Diagnostic {
            level,
            target: target.to_string(),
            message: message.to_string(),
        });
    }

    /// Take the recorded events in arrival order, leaving the collector empty
    pub fn drain(&self) -> Vec<Diagnostic> {
        std::mem::take(&mut *self.entries.lock())
    }

    /// Number of recorded events at exactly `level`
    pub fn count(&self, level: LogLevel) -> usize {
        self.entries.lock().iter().filter(|d| d.level == level).count()
    }
}

impl Default for DiagnosticsCollector {
    fn default() -> Self {
        Self::new()
    }
}
