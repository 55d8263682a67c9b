// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::config::consts::{
    DEFAULT_APP_NAME, DEFAULT_LOG_FILTER, INTERFACE_ENV, LOG_FILTER_ENV, SETTINGS_PATH_ENV,
};
use crate::errors::{BridgeError, BridgeResult};
use crate::traits::InterfaceType;
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Process-wide settings of the handle boundary itself.
///
/// These never reach the engine except for `interface_type`, which is passed
/// to `Engine::new`. The engine's own configuration is the string given to
/// `new_engine` and is opaque to the boundary.
///
/// # Example
/// ```yaml
/// app_name: wumpus
/// interface_type: Android
/// log_filter: "engine_bridge=debug"
/// log_target: true
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct BridgeSettings {
    pub app_name: String,
    pub interface_type: InterfaceType,
    pub log_filter: String,
    pub log_target: bool,
}

impl Default for BridgeSettings {
    fn default() -> Self {
        Self {
            app_name: DEFAULT_APP_NAME.to_string(),
            interface_type: InterfaceType::default(),
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            log_target: false,
        }
    }
}

impl BridgeSettings {
    /// Load settings from the process environment.
    pub fn from_env() -> BridgeResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load settings using `lookup` in place of the process environment.
    ///
    /// The file named by `ENGINE_BRIDGE_CONFIG` is read first, then
    /// `ENGINE_BRIDGE_INTERFACE` and `ENGINE_BRIDGE_LOG` override single fields.
    pub fn from_lookup<F>(lookup: F) -> BridgeResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut settings = match lookup(SETTINGS_PATH_ENV) {
            Some(path) if !path.trim().is_empty() => load_settings_file(path.trim())?,
            _ => BridgeSettings::default(),
        };

        if let Some(interface) = lookup(INTERFACE_ENV).filter(|v| !v.trim().is_empty()) {
            settings.interface_type = interface.trim().parse()?;
        }
        if let Some(filter) = lookup(LOG_FILTER_ENV) {
            if !filter.trim().is_empty() {
                settings.log_filter = filter.trim().to_string();
            }
        }

        Ok(settings)
    }
}

/// Read settings from a file. `.toml` files are parsed as TOML, everything
/// else as YAML.
pub fn load_settings_file<P: AsRef<Path>>(path: P) -> BridgeResult<BridgeSettings> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|e| {
        BridgeError::Settings(format!("cannot read '{}': {}", path.display(), e))
    })?;

    let is_toml = path
        .extension()
        .map(|ext| ext.eq_ignore_ascii_case("toml"))
        .unwrap_or(false);

    if is_toml {
        toml::from_str(&content).map_err(|e| {
            BridgeError::Settings(format!("invalid TOML in '{}': {}", path.display(), e))
        })
    } else if content.trim().is_empty() {
        Ok(BridgeSettings::default())
    } else {
        serde_yaml::from_str(&content).map_err(|e| {
            BridgeError::Settings(format!("invalid YAML in '{}': {}", path.display(), e))
        })
    }
}
