//! Extension manifest types.

use serde::{Deserialize, Serialize};

use crate::types::Version;

/// Extension manifest containing metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtensionManifest {
    /// Module identifier, unique within the host.
    pub id: String,
    /// Identifier of the plugin this module extends.
    pub plugin_id: String,
    pub name: String,
    pub version: Version,
    pub description: String,
    #[serde(default)]
    pub dependencies: Dependencies,
    #[serde(default)]
    pub provides: Provides,
    /// JSON Schema the host checks the extension's config against before
    /// initialization.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub config_schema: Option<serde_json::Value>,
}

impl ExtensionManifest {
    /// Create a new extension manifest.
    pub fn new(
        id: impl Into<String>,
        plugin_id: impl Into<String>,
        name: impl Into<String>,
        version: Version,
    ) -> Self {
        Self {
            id: id.into(),
            plugin_id: plugin_id.into(),
            name: name.into(),
            version,
            description: String::new(),
            dependencies: Dependencies::default(),
            provides: Provides::default(),
            config_schema: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_config_schema(mut self, schema: serde_json::Value) -> Self {
        self.config_schema = Some(schema);
        self
    }

    /// Declare a capability or module that must be available before initialization.
    pub fn requires(mut self, id: impl Into<String>) -> Self {
        self.dependencies.required.push(DependencySpec { id: id.into() });
        self
    }
}

/// Dependencies on capabilities or other extensions.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Dependencies {
    #[serde(default)]
    pub required: Vec<DependencySpec>,
}

/// Specification for a dependency.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DependencySpec {
    pub id: String,
}

/// What an extension provides.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Provides {
    #[serde(default)]
    pub actions: Vec<String>,
}

#[cfg(test)]
#[path = "manifest_tests.rs"]
mod tests;
