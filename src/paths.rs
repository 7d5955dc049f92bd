//! Centralized path definitions for plugreq
//!
//! ## Storage Layout
//!
//! ```text
//! ~/.config/plugreq/
//! └── config.toml               # Endpoints, docs URL, defaults
//! ```
//!
//! `PLUGREQ_CONFIG` overrides the config file location.

use std::path::PathBuf;

/// Environment variable overriding the config file path
pub const CONFIG_ENV: &str = "PLUGREQ_CONFIG";

/// Config directory name under the user config dir
const APP_DIR: &str = "plugreq";

/// Config filename
const CONFIG_FILE: &str = "config.toml";

/// Get the global config directory (`~/.config/plugreq`)
#[must_use]
pub fn global_config_dir() -> PathBuf {
    dirs::config_dir().unwrap_or_else(|| PathBuf::from(".")).join(APP_DIR)
}

/// Get the config file path, honoring `PLUGREQ_CONFIG`
#[must_use]
pub fn global_config() -> PathBuf {
    std::env::var_os(CONFIG_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(|| global_config_dir().join(CONFIG_FILE))
}
