//! Chat API server configuration.

use serde::Deserialize;

use crate::state::DEFAULT_MAX_CHATS;

/// Top-level API server configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    /// Listen address (e.g., "0.0.0.0").
    #[serde(default = "default_host")]
    pub host: String,
    /// Listen port.
    #[serde(default = "default_port")]
    pub port: u16,
    /// JSON file holding the car listing. None serves the built-in sample.
    #[serde(default)]
    pub cars_path: Option<String>,
    /// TOML file with interpreter vocabularies. None uses the defaults.
    #[serde(default)]
    pub interpreter_config_path: Option<String>,
    /// Pause before answering a chat message, in milliseconds (cosmetic).
    #[serde(default)]
    pub think_delay_ms: u64,
    /// Chat exchanges kept in memory before the oldest are dropped.
    #[serde(default = "default_max_chats")]
    pub max_chats: usize,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_max_chats() -> usize {
    DEFAULT_MAX_CHATS
}

impl ApiConfig {
    /// Load config from environment variables (`CQ_HOST`, `CQ_PORT`,
    /// `CARS_PATH`, `INTERPRETER_CONFIG`, `THINK_DELAY_MS`, `MAX_CHATS`).
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build config from an arbitrary key lookup. Unparseable numbers fall
    /// back to their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            host: lookup("CQ_HOST").unwrap_or(defaults.host),
            port: lookup("CQ_PORT")
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.port),
            cars_path: lookup("CARS_PATH").filter(|v| !v.is_empty()),
            interpreter_config_path: lookup("INTERPRETER_CONFIG").filter(|v| !v.is_empty()),
            think_delay_ms: lookup("THINK_DELAY_MS")
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.think_delay_ms),
            max_chats: lookup("MAX_CHATS")
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.max_chats),
        }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            cars_path: None,
            interpreter_config_path: None,
            think_delay_ms: 0,
            max_chats: default_max_chats(),
        }
    }
}
