// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for handle lifecycle events.
//!
//! This module contains message types for logging events related to:
//! * Engine construction behind a new handle
//! * Handle deletion
//! * Pointers rejected by the live-handle registry

use crate::observability::messages::StructuredLog;
use crate::traits::InterfaceType;
use std::fmt::{Display, Formatter};
use tracing::Span;

/// A new engine handle was created and registered.
///
/// # Log Level
/// `info!` - Important operational event
///
/// # Example
/// ```
/// use engine_bridge::observability::messages::handle::HandleCreated;
/// use engine_bridge::traits::InterfaceType;
///
/// let msg = HandleCreated {
///     handle: 0x7f00_1000,
///     engine: "reference",
///     interface_type: InterfaceType::Android,
///     live_handles: 1,
/// };
///
/// tracing::info!("{}", msg);
/// ```
pub struct HandleCreated<'a> {
    pub handle: usize,
    pub engine: &'a str,
    pub interface_type: InterfaceType,
    pub live_handles: usize,
}

impl Display for HandleCreated<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Created engine '{}' for {} host at handle {:#x} ({} live)",
            self.engine, self.interface_type, self.handle, self.live_handles
        )
    }
}

impl StructuredLog for HandleCreated<'_> {
    fn log(&self) {
        tracing::info!(
            handle = self.handle,
            engine = self.engine,
            interface_type = %self.interface_type,
            live_handles = self.live_handles,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!(
            "handle_created",
            span_name = name,
            handle = self.handle,
            engine = self.engine,
        )
    }
}

/// Engine construction failed; `new_engine` returns null.
///
/// # Log Level
/// `error!` - Failure requiring attention
pub struct HandleCreationFailed<'a> {
    pub engine: &'a str,
    pub error: &'a dyn std::error::Error,
}

impl Display for HandleCreationFailed<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Failed to create engine '{}': {}; returning null handle",
            self.engine, self.error
        )
    }
}

impl StructuredLog for HandleCreationFailed<'_> {
    fn log(&self) {
        tracing::error!(
            engine = self.engine,
            error = %self.error,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::error_span!(
            "handle_creation_failed",
            span_name = name,
            engine = self.engine,
        )
    }
}

/// A handle was deleted and its engine dropped.
///
/// # Log Level
/// `info!` - Important operational event
pub struct HandleDeleted {
    pub handle: usize,
    pub live_handles: usize,
}

impl Display for HandleDeleted {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Deleted engine handle {:#x} ({} live)",
            self.handle, self.live_handles
        )
    }
}

impl StructuredLog for HandleDeleted {
    fn log(&self) {
        tracing::info!(
            handle = self.handle,
            live_handles = self.live_handles,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!("handle_deleted", span_name = name, handle = self.handle)
    }
}

/// A call arrived with a null, unknown or already deleted handle and was
/// answered with the operation's sentinel.
///
/// # Log Level
/// `warn!` - Caller contract violation
///
/// # Example
/// ```
/// use engine_bridge::observability::messages::handle::HandleRejected;
///
/// let msg = HandleRejected {
///     operation: "execute",
///     handle: 0,
///     reason: "null handle",
/// };
///
/// tracing::warn!("{}", msg);
/// ```
pub struct HandleRejected<'a> {
    pub operation: &'a str,
    pub handle: usize,
    pub reason: &'a str,
}

impl Display for HandleRejected<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Rejected {} on handle {:#x}: {}",
            self.operation, self.handle, self.reason
        )
    }
}

impl StructuredLog for HandleRejected<'_> {
    fn log(&self) {
        tracing::warn!(
            operation = self.operation,
            handle = self.handle,
            reason = self.reason,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::warn_span!(
            "handle_rejected",
            span_name = name,
            operation = self.operation,
            handle = self.handle,
        )
    }
}
