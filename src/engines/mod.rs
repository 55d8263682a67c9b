// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Engines bundled with the bridge.
//!
//! ## Reference Engine
//! A message-log engine bound to the exported C symbols by default. Real
//! applications disable the `default-exports` feature and export their own
//! engine with `export_engine!`.
//!
//! ## Stub Engines (Test-Only)
//! - **FailingEngine**: constructor always fails
//! - **ErrorEngine**: entry points return errors
//! - **PanickingEngine**: entry points panic
//! - **CountingEngine**: counts its drops
//! - **Note**: NOT available in production builds

mod reference;
#[cfg(test)]
pub mod stub;

pub use reference::{ReferenceAction, ReferenceConfig, ReferenceEngine, ReferenceResponse};
