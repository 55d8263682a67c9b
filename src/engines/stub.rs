// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::sync::atomic::{AtomicUsize, Ordering};

use anyhow::{anyhow, bail};
use serde::{Deserialize, Serialize};

use crate::errors::{BridgeError, BridgeResult};
use crate::traits::{Engine, EngineAction, EngineConfig, EngineResponse, Event, InterfaceType};

/// Accepts any config string
pub struct StubConfig;

impl EngineConfig for StubConfig {
    fn from_json(_json_str: &str) -> BridgeResult<Self> {
        Ok(StubConfig)
    }
}

/// A bare JSON string such as `"Quit"`
#[derive(Debug, Deserialize)]
pub struct StubAction(pub String);

impl EngineAction for StubAction {
    fn from_json(json_str: &str) -> BridgeResult<Self> {
        serde_json::from_str(json_str).map_err(|e| BridgeError::InvalidAction {
            body: json_str.to_string(),
            reason: e.to_string(),
        })
    }
}

#[derive(Debug, Default, Serialize)]
pub struct StubResponse {
    pub shutdown_required: bool,
}

impl EngineResponse for StubResponse {
    fn shutdown_required(&self) -> bool {
        self.shutdown_required
    }
}

/// An engine whose constructor always fails
pub struct FailingEngine;

impl Engine for FailingEngine {
    type Config = StubConfig;
    type Action = StubAction;
    type Response = StubResponse;

    fn new(_config: &StubConfig, _interface_type: InterfaceType) -> anyhow::Result<Self> {
        Err(anyhow!("failing engine refuses to start"))
    }

    fn initial_html(&mut self) -> anyhow::Result<String> {
        Ok(String::new())
    }

    fn execute(&mut self, _action: StubAction) -> anyhow::Result<StubResponse> {
        Ok(StubResponse::default())
    }

    fn handle_event(&mut self, _event: &Event) -> anyhow::Result<StubResponse> {
        Ok(StubResponse::default())
    }

    fn interface_type(&self) -> InterfaceType {
        InterfaceType::default()
    }
}

/// An engine whose calls return errors: `"Quit"` succeeds with a shutdown
/// response, every other action, every event and `initial_html` fail.
#[derive(Default)]
pub struct ErrorEngine;

impl Engine for ErrorEngine {
    type Config = StubConfig;
    type Action = StubAction;
    type Response = StubResponse;

    fn new(_config: &StubConfig, _interface_type: InterfaceType) -> anyhow::Result<Self> {
        Ok(ErrorEngine)
    }

    fn initial_html(&mut self) -> anyhow::Result<String> {
        bail!("no template")
    }

    fn execute(&mut self, action: StubAction) -> anyhow::Result<StubResponse> {
        if action.0 == "Quit" {
            return Ok(StubResponse {
                shutdown_required: true,
            });
        }
        bail!("cannot execute {}", action.0)
    }

    fn handle_event(&mut self, event: &Event) -> anyhow::Result<StubResponse> {
        bail!("cannot handle {}", event.name())
    }

    fn interface_type(&self) -> InterfaceType {
        InterfaceType::default()
    }

    fn name(&self) -> &'static str {
        "error"
    }
}

/// An engine that panics on every action and render
pub struct PanickingEngine;

impl Engine for PanickingEngine {
    type Config = StubConfig;
    type Action = StubAction;
    type Response = StubResponse;

    fn new(_config: &StubConfig, _interface_type: InterfaceType) -> anyhow::Result<Self> {
        Ok(PanickingEngine)
    }

    fn initial_html(&mut self) -> anyhow::Result<String> {
        panic!("engine exploded while rendering")
    }

    fn execute(&mut self, action: StubAction) -> anyhow::Result<StubResponse> {
        panic!("engine exploded on {}", action.0)
    }

    fn handle_event(&mut self, _event: &Event) -> anyhow::Result<StubResponse> {
        Ok(StubResponse::default())
    }

    fn interface_type(&self) -> InterfaceType {
        InterfaceType::default()
    }

    fn name(&self) -> &'static str {
        "panicking"
    }
}

/// Number of [`CountingEngine`] values dropped so far
pub static COUNTING_DROPS: AtomicUsize = AtomicUsize::new(0);

/// An engine that records its own drop, for ownership checks
pub struct CountingEngine;

impl Drop for CountingEngine {
    fn drop(&mut self) {
        COUNTING_DROPS.fetch_add(1, Ordering::SeqCst);
    }
}

impl Engine for CountingEngine {
    type Config = StubConfig;
    type Action = StubAction;
    type Response = StubResponse;

    fn new(_config: &StubConfig, _interface_type: InterfaceType) -> anyhow::Result<Self> {
        Ok(CountingEngine)
    }

    fn initial_html(&mut self) -> anyhow::Result<String> {
        Ok("<p>counting</p>".to_string())
    }

    fn execute(&mut self, _action: StubAction) -> anyhow::Result<StubResponse> {
        Ok(StubResponse::default())
    }

    fn handle_event(&mut self, _event: &Event) -> anyhow::Result<StubResponse> {
        Ok(StubResponse::default())
    }

    fn interface_type(&self) -> InterfaceType {
        InterfaceType::default()
    }
}
