// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::config::consts::DEFAULT_LOG_FILTER;
use crate::config::BridgeSettings;
use tracing_subscriber::EnvFilter;

/// Build the log filter: `RUST_LOG` first, then the settings' filter, then
/// the default if the configured directives do not parse.
pub fn build_filter(settings: &BridgeSettings) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&settings.log_filter))
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER))
}

/// Install the global `fmt` subscriber.
///
/// Returns `false` when the host process already installed a global
/// subscriber; that subscriber is kept.
pub fn init_logging(settings: &BridgeSettings) -> bool {
    tracing_subscriber::fmt()
        .with_env_filter(build_filter(settings))
        .with_target(settings.log_target)
        .try_init()
        .is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings_with_filter(filter: &str) -> BridgeSettings {
        BridgeSettings {
            log_filter: filter.to_string(),
            ..BridgeSettings::default()
        }
    }

    #[test]
    fn test_settings_filter_is_used() {
        if std::env::var("RUST_LOG").is_ok() {
            return;
        }
        let filter = build_filter(&settings_with_filter("engine_bridge=debug"));
        assert_eq!(filter.to_string(), "engine_bridge=debug");
    }

    #[test]
    fn test_invalid_filter_falls_back_to_default() {
        if std::env::var("RUST_LOG").is_ok() {
            return;
        }
        let filter = build_filter(&settings_with_filter("engine_bridge=loudest"));
        assert_eq!(filter.to_string(), DEFAULT_LOG_FILTER);
    }

    #[test]
    fn test_second_init_keeps_existing_subscriber() {
        let settings = BridgeSettings::default();
        let _ = init_logging(&settings);
        assert!(!init_logging(&settings));
    }
}
