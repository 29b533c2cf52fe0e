//! Client configuration loaded from environment variables.
//!
//! Every setting has a default so the client starts with zero configuration
//! against a local backend.

use std::fmt::Display;
use std::path::PathBuf;
use std::str::FromStr;

use yafue_shared::constants::DEFAULT_API_URL;
use yafue_shared::{Appearance, ThemePreference};

#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    /// Backend base URL.
    /// Env: `YAFUE_API_URL`
    /// Default: `http://localhost:3000`
    pub api_base_url: String,

    /// Directory holding the secure store and device key.
    /// Env: `YAFUE_DATA_DIR`
    /// Default: `None` (platform data directory).
    pub data_dir: Option<PathBuf>,

    /// Theme forced at startup, overriding the saved preference.
    /// Env: `YAFUE_THEME` (`light` / `dark` / `auto`)
    /// Default: `None` (use the saved preference).
    pub theme: Option<ThemePreference>,

    /// Appearance reported by the host until it tells us otherwise.
    /// Env: `YAFUE_SYSTEM_APPEARANCE` (`light` / `dark`)
    /// Default: `light`
    pub system_appearance: Appearance,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_URL.to_string(),
            data_dir: None,
            theme: None,
            system_appearance: Appearance::Light,
        }
    }
}

impl ClientConfig {
    /// Load configuration from environment variables, falling back to defaults.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(url) = std::env::var("YAFUE_API_URL") {
            let url = url.trim();
            if !url.is_empty() {
                config.api_base_url = url.to_string();
            }
        }

        if let Ok(dir) = std::env::var("YAFUE_DATA_DIR") {
            if !dir.is_empty() {
                config.data_dir = Some(PathBuf::from(dir));
            }
        }

        if let Ok(raw) = std::env::var("YAFUE_THEME") {
            config.theme = parse_setting("YAFUE_THEME", &raw).or(config.theme);
        }

        if let Ok(raw) = std::env::var("YAFUE_SYSTEM_APPEARANCE") {
            if let Some(appearance) = parse_setting("YAFUE_SYSTEM_APPEARANCE", &raw) {
                config.system_appearance = appearance;
            }
        }

        // RUST_LOG is handled directly by tracing-subscriber's EnvFilter.

        config
    }
}

fn parse_setting<T>(name: &str, raw: &str) -> Option<T>
where
    T: FromStr,
    T::Err: Display,
{
    match raw.parse() {
        Ok(value) => Some(value),
        Err(e) => {
            tracing::warn!(var = name, value = %raw, error = %e, "Invalid setting, using default");
            None
        }
    }
}
