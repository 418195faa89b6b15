//! Configuration schema definitions.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Key under which the remote backend URL is read from secrets and extension config.
pub const BACKEND_URL_KEY: &str = "backendUrl";

/// Root configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub backend: BackendConfig,

    /// Secrets handed to every action invocation.
    #[serde(default)]
    pub secrets: HashMap<String, String>,

    /// Per-extension configuration tables, keyed by extension ID.
    #[serde(default)]
    pub extensions: HashMap<String, serde_json::Value>,

    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Configuration for one extension.
    ///
    /// `backend.url` is supplied as `backendUrl` unless the extension table
    /// sets its own.
    pub fn extension_config(&self, id: &str) -> serde_json::Value {
        let mut config = self
            .extensions
            .get(id)
            .cloned()
            .unwrap_or_else(|| serde_json::Value::Object(serde_json::Map::new()));

        if let (Some(url), Some(table)) = (&self.backend.url, config.as_object_mut()) {
            table
                .entry(BACKEND_URL_KEY)
                .or_insert_with(|| serde_json::Value::String(url.clone()));
        }

        config
    }
}

/// Remote scaffolder backend.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BackendConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Default filter directive when `RUST_LOG` is unset.
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Directory for daily-rolling log files. Console only when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dir: Option<String>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            dir: None,
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}
