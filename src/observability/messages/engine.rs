// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for engine calls forwarded through a handle.
//!
//! This module contains message types for logging events related to:
//! * Action execution and event handling
//! * Bodies the boundary could not decode
//! * Engine errors and caught panics
//! * Strings handed back to the caller

use crate::observability::messages::StructuredLog;
use std::fmt::{Display, Formatter};
use std::time::Duration;
use tracing::Span;

/// An action was executed and its response stored.
///
/// # Log Level
/// `debug!` - Per-call detail
pub struct ActionExecuted<'a> {
    pub engine: &'a str,
    pub body_size: usize,
    pub shutdown_required: bool,
    pub duration: Duration,
}

impl Display for ActionExecuted<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Engine '{}' executed action: body={} bytes, shutdown_required={}, duration={:?}",
            self.engine, self.body_size, self.shutdown_required, self.duration
        )
    }
}

impl StructuredLog for ActionExecuted<'_> {
    fn log(&self) {
        tracing::debug!(
            engine = self.engine,
            body_size = self.body_size,
            shutdown_required = self.shutdown_required,
            duration_us = self.duration.as_micros() as u64,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::debug_span!(
            "execute",
            span_name = name,
            engine = self.engine,
            body_size = self.body_size,
        )
    }
}

/// An event was handled and its response stored.
///
/// # Log Level
/// `debug!` - Per-call detail
pub struct EventHandled<'a> {
    pub engine: &'a str,
    pub event: &'a str,
    pub shutdown_required: bool,
    pub duration: Duration,
}

impl Display for EventHandled<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Engine '{}' handled event {}: shutdown_required={}, duration={:?}",
            self.engine, self.event, self.shutdown_required, self.duration
        )
    }
}

impl StructuredLog for EventHandled<'_> {
    fn log(&self) {
        tracing::debug!(
            engine = self.engine,
            event = self.event,
            shutdown_required = self.shutdown_required,
            duration_us = self.duration.as_micros() as u64,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::debug_span!(
            "handle_event",
            span_name = name,
            engine = self.engine,
            event = self.event,
        )
    }
}

/// A body could not be decoded; the last response is left untouched.
///
/// # Log Level
/// `warn!` - Caller sent something the engine does not understand
///
/// # Example
/// ```
/// use engine_bridge::observability::messages::engine::BodyRejected;
///
/// let error = std::io::Error::new(std::io::ErrorKind::InvalidData, "expected value");
/// let msg = BodyRejected {
///     operation: "execute",
///     error: &error,
/// };
///
/// tracing::warn!("{}", msg);
/// ```
pub struct BodyRejected<'a> {
    pub operation: &'a str,
    pub error: &'a dyn std::error::Error,
}

impl Display for BodyRejected<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Ignoring {} body: {}", self.operation, self.error)
    }
}

impl StructuredLog for BodyRejected<'_> {
    fn log(&self) {
        tracing::warn!(
            operation = self.operation,
            error = %self.error,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::warn_span!("body_rejected", span_name = name, operation = self.operation)
    }
}

/// An engine entry point failed or panicked.
///
/// # Log Level
/// `error!` - Failure requiring attention
pub struct EngineCallFailed<'a> {
    pub engine: &'a str,
    pub operation: &'a str,
    pub error: &'a dyn std::error::Error,
}

impl Display for EngineCallFailed<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Engine '{}' failed during {}: {}",
            self.engine, self.operation, self.error
        )
    }
}

impl StructuredLog for EngineCallFailed<'_> {
    fn log(&self) {
        tracing::error!(
            engine = self.engine,
            operation = self.operation,
            error = %self.error,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::error_span!(
            "engine_call_failed",
            span_name = name,
            engine = self.engine,
            operation = self.operation,
        )
    }
}

/// A string was placed in the session's string slot for the caller.
///
/// # Log Level
/// `trace!` - High-volume detail
pub struct StringProduced<'a> {
    pub operation: &'a str,
    pub length: usize,
    pub reused: bool,
}

impl Display for StringProduced<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "{} produced {} bytes (buffer reused: {})",
            self.operation, self.length, self.reused
        )
    }
}

impl StructuredLog for StringProduced<'_> {
    fn log(&self) {
        tracing::trace!(
            operation = self.operation,
            length = self.length,
            reused = self.reused,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::trace_span!("string_produced", span_name = name, operation = self.operation)
    }
}
