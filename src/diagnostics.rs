// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Diagnostics sink abstraction.
//!
//! Recoverable conditions (a missing tonic, a spelling that cannot honour a
//! letter preference, an off-octave keyboard span) are reported through a
//! [`Diagnostics`] implementation instead of failing the operation. The
//! default sink forwards to `tracing`; [`DiagnosticLog`] keeps the messages so
//! callers can inspect them.

use std::fmt;
use std::sync::{Arc, Mutex};

/// Severity of a diagnostic
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Level {
    /// A default was substituted and work continued
    Warning,
    /// Something could not be honoured (mismatch, unimplemented path)
    Error,
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Level::Warning => write!(f, "warning"),
            Level::Error => write!(f, "error"),
        }
    }
}

/// A single recorded diagnostic
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub level: Level,
    pub message: String,
}

/// Trait for diagnostics sinks.
///
/// Implementations must never terminate the process; they only receive
/// leveled messages.
pub trait Diagnostics: Send + Sync {
    /// Report a recoverable default
    fn warn(&self, message: &str);

    /// Report a mismatch or an unimplemented path
    fn error(&self, message: &str);
}

/// Shared handle to a diagnostics sink
pub type DiagnosticsRef = Arc<dyn Diagnostics>;

/// Sink that forwards to the `tracing` macros
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingDiagnostics;

impl Diagnostics for TracingDiagnostics {
    fn warn(&self, message: &str) {
        tracing::warn!(target: "pitchboard", "{}", message);
    }

    fn error(&self, message: &str) {
        tracing::error!(target: "pitchboard", "{}", message);
    }
}

/// The default sink (tracing-backed)
pub fn default_diagnostics() -> DiagnosticsRef {
    Arc::new(TracingDiagnostics)
}

/// Sink that records every message, also forwarding it to tracing
#[derive(Debug, Clone, Default)]
pub struct DiagnosticLog {
    entries: Arc<Mutex<Vec<Diagnostic>>>,
}

impl DiagnosticLog {
    /// Create an empty log
    pub fn new() -> Self {
        Self::default()
    }

    /// Get a shareable handle for injecting into pitches and renderers
    pub fn handle(&self) -> DiagnosticsRef {
        Arc::new(self.clone())
    }

    /// Snapshot of all recorded diagnostics
    pub fn entries(&self) -> Vec<Diagnostic> {
        match self.entries.lock() {
            Ok(entries) => entries.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    /// Number of recorded diagnostics at a given level
    pub fn count(&self, level: Level) -> usize {
        self.entries().iter().filter(|d| d.level == level).count()
    }

    /// Check if nothing has been recorded
    pub fn is_empty(&self) -> bool {
        self.entries().is_empty()
    }

    /// Drop all recorded diagnostics
    pub fn clear(&self) {
        match self.entries.lock() {
            Ok(mut entries) => entries.clear(),
            Err(poisoned) => poisoned.into_inner().clear(),
        }
    }

    fn push(&self, level: Level, message: &str) {
        let entry = Diagnostic {
            level,
            message: message.to_string(),
        };
        match self.entries.lock() {
            Ok(mut entries) => entries.push(entry),
            Err(poisoned) => poisoned.into_inner().push(entry),
        }
    }
}

impl Diagnostics for DiagnosticLog {
    fn warn(&self, message: &str) {
        TracingDiagnostics.warn(message);
        self.push(Level::Warning, message);
    }

    fn error(&self, message: &str) {
        TracingDiagnostics.error(message);
        self.push(Level::Error, message);
    }
}
