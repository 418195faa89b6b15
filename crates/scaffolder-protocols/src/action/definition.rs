//! Action definition types.

use serde::{Deserialize, Serialize};

/// Declarative description of an action: identity plus input/output schemas.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActionDefinition {
    /// Unique identifier used to list and invoke the action.
    pub id: String,

    /// Human-readable description.
    pub description: String,

    /// JSON Schema for the input.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input_schema: Option<serde_json::Value>,

    /// JSON Schema for the outputs.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_schema: Option<serde_json::Value>,

    /// Extension ID that provides this action.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension_id: Option<String>,
}

impl ActionDefinition {
    /// Create a new action definition.
    pub fn new(id: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            description: description.into(),
            input_schema: None,
            output_schema: None,
            extension_id: None,
        }
    }

    /// Set the input schema.
    pub fn with_input_schema(mut self, schema: serde_json::Value) -> Self {
        self.input_schema = Some(schema);
        self
    }

    /// Set the output schema.
    pub fn with_output_schema(mut self, schema: serde_json::Value) -> Self {
        self.output_schema = Some(schema);
        self
    }

    /// Set the providing extension.
    pub fn with_extension_id(mut self, extension_id: impl Into<String>) -> Self {
        self.extension_id = Some(extension_id.into());
        self
    }

    /// Names of the outputs declared by the output schema.
    pub fn output_names(&self) -> Vec<String> {
        self.output_schema
            .as_ref()
            .and_then(|schema| schema.get("properties"))
            .and_then(|props| props.as_object())
            .map(|props| props.keys().cloned().collect())
            .unwrap_or_default()
    }
}

#[cfg(test)]
#[path = "definition_tests.rs"]
mod tests;
