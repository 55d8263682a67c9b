// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Centralized message types for structured logging.
//!
//! Each message type implements `Display` for the human-readable line and
//! [`StructuredLog`] to emit it with typed `tracing` fields at its own level.
//!
//! # Organization
//!
//! * `handle` - handle lifecycle events
//! * `engine` - engine call forwarding events
//!
//! # Usage Pattern
//!
//! ```rust
//! use engine_bridge::observability::messages::engine::ActionExecuted;
//! use engine_bridge::observability::messages::StructuredLog;
//! use std::time::Duration;
//!
//! let msg = ActionExecuted {
//!     engine: "reference",
//!     body_size: 12,
//!     shutdown_required: false,
//!     duration: Duration::from_micros(40),
//! };
//!
//! msg.log();
//! ```

use tracing::Span;

pub mod engine;
pub mod handle;

/// Emit a message as a structured `tracing` event, or open a span carrying
/// the message's fields.
pub trait StructuredLog {
    fn log(&self);

    fn span(&self, name: &str) -> Span;
}
