// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! The handle boundary between a foreign caller and a native engine.
//!
//! # Architecture
//!
//! ```text
//! C caller → export_engine! symbols → abi::* → EngineHandle → Session → Engine
//! ```
//!
//! - **`EngineFactory`**: the application's choice of engine
//! - **`EngineHandle`**: the boxed value behind the opaque pointer
//! - **`Session`**: engine plus last response and last string
//! - **`registry`**: live handle addresses, checked before every dereference
//! - **`abi`**: generic `unsafe` implementations of the exported functions
//!
//! # Lifecycle
//!
//! A handle is created by `new_engine`, used by every other call and
//! invalidated exactly once by `delete_engine`. Using it after deletion is
//! undefined behaviour by contract; the registry turns most such calls into
//! logged no-ops but cannot rule out address reuse.

pub mod abi;
mod factory;
mod macros;
mod opaque;
pub mod registry;
mod session;


pub use factory::{DefaultEngineFactory, EngineFactory};
pub use opaque::EngineHandle;
pub use session::Session;
