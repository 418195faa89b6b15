//! Action execution context.

use parking_lot::RwLock;
use serde::Serialize;
use std::collections::HashMap;
use std::sync::Arc;

/// Outputs emitted by one action invocation.
pub type ActionOutputs = HashMap<String, serde_json::Value>;

/// Per-invocation context handed to [`Action::handle`](super::Action::handle).
#[derive(Clone)]
pub struct ActionContext {
    /// Scaffolder task this step belongs to.
    pub task_id: String,

    /// Step within the task.
    pub step_id: String,

    /// Validated input.
    pub input: serde_json::Value,

    /// Secrets made available to the task.
    pub secrets: HashMap<String, String>,

    outputs: Arc<RwLock<ActionOutputs>>,
}

impl ActionContext {
    /// Create a new action context.
    pub fn new(
        task_id: impl Into<String>,
        step_id: impl Into<String>,
        input: serde_json::Value,
    ) -> Self {
        Self {
            task_id: task_id.into(),
            step_id: step_id.into(),
            input,
            secrets: HashMap::new(),
            outputs: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Attach task secrets.
    pub fn with_secrets(mut self, secrets: HashMap<String, String>) -> Self {
        self.secrets = secrets;
        self
    }

    /// Look up a secret by name.
    pub fn secret(&self, key: &str) -> Option<&str> {
        self.secrets.get(key).map(String::as_str)
    }

    /// Emit an output value.
    ///
    /// Nothing is recorded when the value cannot be represented as JSON.
    pub fn output<T: Serialize>(
        &self,
        key: impl Into<String>,
        value: T,
    ) -> Result<(), serde_json::Error> {
        let value = serde_json::to_value(value)?;
        self.outputs.write().insert(key.into(), value);
        Ok(())
    }

    /// Snapshot of the outputs emitted so far.
    pub fn outputs(&self) -> ActionOutputs {
        self.outputs.read().clone()
    }
}

#[cfg(test)]
#[path = "context_tests.rs"]
mod tests;
