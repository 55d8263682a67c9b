/// Environment variable naming a YAML or TOML settings file
pub const SETTINGS_PATH_ENV: &str = "ENGINE_BRIDGE_CONFIG";
/// Environment variable overriding the host interface type ("PC" or "Android")
pub const INTERFACE_ENV: &str = "ENGINE_BRIDGE_INTERFACE";
/// Environment variable overriding the log filter (`RUST_LOG` still wins)
pub const LOG_FILTER_ENV: &str = "ENGINE_BRIDGE_LOG";
/// Log filter used when neither `RUST_LOG` nor settings provide one
pub const DEFAULT_LOG_FILTER: &str = "info";
/// Application name reported in the startup log line
pub const DEFAULT_APP_NAME: &str = "engine-bridge";
