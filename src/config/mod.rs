// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

pub mod consts;
mod loader;
mod logging;

pub use loader::{load_settings_file, BridgeSettings};
pub use logging::{build_filter, init_logging};

use std::sync::OnceLock;

static SETTINGS: OnceLock<BridgeSettings> = OnceLock::new();

/// Settings for this process, loaded on first use.
///
/// The first call also installs logging, so everything after it is traced
/// with the configured filter. A broken settings source falls back to
/// defaults and is reported once logging is up.
pub fn bridge_settings() -> &'static BridgeSettings {
    SETTINGS.get_or_init(|| {
        let (settings, load_error) = match BridgeSettings::from_env() {
            Ok(settings) => (settings, None),
            Err(e) => (BridgeSettings::default(), Some(e)),
        };

        let installed = init_logging(&settings);
        if let Some(e) = load_error {
            tracing::warn!(error = %e, "Falling back to default bridge settings: {}", e);
        }
        tracing::debug!(
            app_name = %settings.app_name,
            interface_type = %settings.interface_type,
            subscriber_installed = installed,
            "Bridge settings loaded"
        );
        settings
    })
}
