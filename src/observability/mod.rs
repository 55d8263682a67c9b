// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Structured logging for the handle boundary.
//!
//! Every log line the boundary emits is a message struct: its `Display` impl
//! holds the wording and its `StructuredLog` impl picks the level and the
//! typed fields. Call sites build the struct and call `log()`.
//!
//! # Layout
//!
//! * `messages::handle` - handle lifecycle (create, delete, rejected pointers)
//! * `messages::engine` - forwarded engine calls (actions, events, renders)
//!
//! # Usage
//!
//! ```rust
//! use engine_bridge::observability::messages::handle::HandleDeleted;
//! use engine_bridge::observability::messages::StructuredLog;
//!
//! let msg = HandleDeleted {
//!     handle: 0x1000,
//!     live_handles: 0,
//! };
//!
//! msg.log();
//! ```

pub mod messages;
