// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! C ABI for driving an application engine through an opaque handle.
//!
//! A foreign host (a C program, or Java through SWIG) creates an engine with
//! `new_engine`, forwards actions and lifecycle events to it, reads back HTML
//! and JSON strings, and deletes it with `delete_engine`. See
//! `include/engine_bridge.h` for the exported functions.

pub mod config;      // boundary settings + logging
pub mod engines;     // bundled engines
pub mod errors;      // error handling
#[cfg(feature = "default-exports")]
pub mod exports;     // exported C symbols
pub mod handle;      // opaque handle boundary
pub mod observability;
pub mod traits;      // engine abstractions
