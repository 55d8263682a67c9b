// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! The C symbols of this library, bound to the bundled reference engine.
//!
//! **This is the line an application changes**: to ship a different engine,
//! disable the `default-exports` feature and invoke `export_engine!` with the
//! application's own factory.

use crate::engines::ReferenceEngine;
use crate::handle::DefaultEngineFactory;

crate::export_engine!(DefaultEngineFactory<ReferenceEngine>);
