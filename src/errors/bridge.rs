// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Error types for the handle boundary.
//!
//! None of these errors ever cross the C ABI. The exported functions map them
//! onto the boundary's sentinel conventions (null handle, `false`, empty
//! string, unchanged last response) after logging them.

use thiserror::Error;

/// Every failure the boundary can observe while forwarding a call.
#[derive(Error, Debug)]
pub enum BridgeError {
    /// A required pointer argument was null.
    #[error("Null pointer passed for '{0}'")]
    NullPointer(&'static str),

    /// The caller passed bytes that are not valid UTF-8 where UTF-8 is required.
    #[error("Invalid UTF-8 in '{argument}': {source}")]
    InvalidUtf8 {
        argument: &'static str,
        #[source]
        source: std::str::Utf8Error,
    },

    /// The engine rejected its configuration string.
    #[error("Invalid engine config: {0}")]
    InvalidConfig(String),

    /// The action body could not be decoded into the engine's action type.
    #[error("Invalid action '{body}': {reason}")]
    InvalidAction { body: String, reason: String },

    /// The event body could not be decoded into an [`Event`](crate::traits::Event).
    #[error("Invalid event '{body}': {reason}")]
    InvalidEvent { body: String, reason: String },

    /// The engine constructor returned an error.
    #[error("Engine creation failed: {0}")]
    EngineCreation(#[source] anyhow::Error),

    /// An engine entry point returned an error.
    #[error("Engine {operation} failed: {source}")]
    Engine {
        operation: &'static str,
        #[source]
        source: anyhow::Error,
    },

    /// Engine code panicked; the panic was caught at the boundary.
    #[error("Engine panicked during {operation}: {message}")]
    Panic {
        operation: &'static str,
        message: String,
    },

    /// A string produced for the caller contained an interior NUL byte.
    #[error("String for {operation} contains an interior NUL byte")]
    InteriorNul {
        operation: &'static str,
        #[source]
        source: std::ffi::NulError,
    },

    /// The last response could not be encoded as JSON.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The pointer does not refer to a handle created by this library, or the
    /// handle has already been deleted.
    #[error("Unknown or deleted engine handle {0:#x}")]
    UnknownHandle(usize),

    /// Boundary settings could not be loaded.
    #[error("Settings error: {0}")]
    Settings(String),
}

/// Result type alias for boundary operations.
pub type BridgeResult<T> = Result<T, BridgeError>;

impl BridgeError {
    /// Build a [`BridgeError::Panic`] from a payload returned by `catch_unwind`.
    pub fn from_panic(operation: &'static str, payload: Box<dyn std::any::Any + Send>) -> Self {
        let message = if let Some(s) = payload.downcast_ref::<&str>() {
            (*s).to_string()
        } else if let Some(s) = payload.downcast_ref::<String>() {
            s.clone()
        } else {
            "non-string panic payload".to_string()
        };
        BridgeError::Panic { operation, message }
    }
}
