//! Port for structured invocation logging.
//!
//! Defines the [`InvocationLogger`] trait for recording one machine-readable
//! record per tool invocation (command, redacted command line, exit code,
//! duration).
//!
//! This is separate from `tracing`-based operation logs: tracing handles
//! human-readable diagnostics, while this port produces an audit trail
//! (JSONL) that other tools can consume.

use serde_json::Value;

/// A structured invocation event for logging.
#[derive(Debug, Clone, PartialEq)]
pub struct InvocationEvent {
    /// Event type identifier ("command_completed", "command_failed").
    pub event_type: &'static str,
    /// JSON payload with event-specific data.
    pub payload: Value,
}

impl InvocationEvent {
    pub fn new(event_type: &'static str, payload: Value) -> Self {
        Self {
            event_type,
            payload,
        }
    }
}

/// Port for logging invocation events to a structured log.
///
/// `log` is synchronous and infallible: a broken log must not change a
/// command's outcome, so implementations report write failures through
/// `tracing` and carry on.
pub trait InvocationLogger: Send + Sync {
    /// Record an invocation event.
    fn log(&self, event: InvocationEvent);
}

/// No-op implementation for tests and when logging is disabled.
pub struct NoInvocationLogger;

impl InvocationLogger for NoInvocationLogger {
    fn log(&self, _event: InvocationEvent) {}
}
