//! Extension context for initialization.

use std::sync::Arc;

use super::ActionRegistryAccess;

/// Context passed to extensions during initialization.
///
/// Capabilities the host can supply are optional here; an extension that
/// needs one and finds it absent must fail its initialization.
#[derive(Clone)]
pub struct ExtensionContext {
    /// Configuration for this extension.
    pub config: serde_json::Value,

    /// Registry for adding actions.
    pub action_registry: Option<Arc<dyn ActionRegistryAccess>>,
}

impl ExtensionContext {
    /// Create a new extension context without any capabilities.
    pub fn new(config: serde_json::Value) -> Self {
        Self {
            config,
            action_registry: None,
        }
    }

    /// Supply the actions registry capability.
    pub fn with_action_registry(mut self, registry: Arc<dyn ActionRegistryAccess>) -> Self {
        self.action_registry = Some(registry);
        self
    }

    /// Get a configuration value.
    pub fn get_config<T: serde::de::DeserializeOwned>(&self, key: &str) -> Option<T> {
        self.config
            .get(key)
            .and_then(|v| serde_json::from_value(v.clone()).ok())
    }
}
