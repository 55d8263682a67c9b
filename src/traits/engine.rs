// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use serde::Serialize;

use crate::errors::BridgeResult;
use crate::traits::event::{Event, InterfaceType};

/// Configuration consumed by [`Engine::new`]. The boundary passes the raw
/// config string through and never looks inside it.
pub trait EngineConfig: Sized {
    fn from_json(json_str: &str) -> BridgeResult<Self>;
}

/// A user command decoded from an `execute` body.
pub trait EngineAction: Sized {
    fn from_json(json_str: &str) -> BridgeResult<Self>;
}

/// What an engine returns from `execute` and `handle_event`.
///
/// `Default` is the "empty" response the boundary holds before the first call
/// and falls back to when an engine call fails.
pub trait EngineResponse: Default + Serialize {
    /// Whether the host application should shut down.
    fn shutdown_required(&self) -> bool;
}

/// The stateful object behind a handle. All real work happens here; the
/// boundary only forwards calls and keeps the last response.
pub trait Engine: Sized {
    type Config: EngineConfig;
    type Action: EngineAction;
    type Response: EngineResponse;

    fn new(config: &Self::Config, interface_type: InterfaceType) -> anyhow::Result<Self>;

    /// Bootstrap rendering shown by the host before any action is executed.
    fn initial_html(&mut self) -> anyhow::Result<String>;

    fn execute(&mut self, action: Self::Action) -> anyhow::Result<Self::Response>;

    fn handle_event(&mut self, event: &Event) -> anyhow::Result<Self::Response>;

    fn interface_type(&self) -> InterfaceType;

    /// Name used in log output.
    fn name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }
}
