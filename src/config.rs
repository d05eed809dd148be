//! Panel configuration.
//!
//! Defaults match the backend's fixed routes. A deployment may override them
//! by defining `window.VISIOSENSE_CONFIG` before the bundle loads, e.g.
//! `{ "logLevel": "debug" }`; unknown keys are ignored and missing keys keep
//! their defaults.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::time::Duration;

use serde::Deserialize;

pub const DEFAULT_STATUS_PATH: &str = "/ws";
pub const DEFAULT_RECONNECT_DELAY_MS: u32 = 1000;
pub const DEFAULT_LOG_LEVEL: &str = "info";

#[cfg(feature = "csr")]
const WINDOW_CONFIG_KEY: &str = "VISIOSENSE_CONFIG";

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid panel config: {0}")]
    Invalid(String),
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PanelConfig {
    /// Path of the status socket on the page's host.
    pub status_path: String,
    pub reconnect_delay_ms: u32,
    pub log_level: String,
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            status_path: DEFAULT_STATUS_PATH.to_owned(),
            reconnect_delay_ms: DEFAULT_RECONNECT_DELAY_MS,
            log_level: DEFAULT_LOG_LEVEL.to_owned(),
        }
    }
}

impl PanelConfig {
    /// Parse a JSON config object.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] if `text` is not a JSON object with
    /// fields of the expected types.
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(text).map_err(|e| ConfigError::Invalid(e.to_string()))
    }

    /// Read `window.VISIOSENSE_CONFIG`, or defaults if it is not defined.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] if the object exists but cannot be decoded.
    pub fn from_window() -> Result<Self, ConfigError> {
        #[cfg(feature = "csr")]
        {
            let Some(window) = web_sys::window() else {
                return Ok(Self::default());
            };
            let value = js_sys::Reflect::get(&window, &WINDOW_CONFIG_KEY.into())
                .map_err(|e| ConfigError::Invalid(format!("{e:?}")))?;
            if value.is_undefined() || value.is_null() {
                return Ok(Self::default());
            }
            let text: String = js_sys::JSON::stringify(&value)
                .map_err(|e| ConfigError::Invalid(format!("{e:?}")))?
                .into();
            Self::from_json(&text)
        }
        #[cfg(not(feature = "csr"))]
        {
            Ok(Self::default())
        }
    }

    pub fn reconnect_delay(&self) -> Duration {
        Duration::from_millis(u64::from(self.reconnect_delay_ms))
    }

    /// Configured log level, falling back to `Info` for unknown names.
    pub fn log_level(&self) -> log::Level {
        self.log_level.parse().unwrap_or(log::Level::Info)
    }
}
