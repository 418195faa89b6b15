//! Host composition root.
//!
//! Supplies capabilities to extensions, loads them, and runs actions on
//! behalf of the task engine.

use std::sync::Arc;

use tracing::{Instrument, debug, info, info_span, warn};

use scaffolder_protocols::action::{ActionContext, ActionDefinition, ActionOutputs};
use scaffolder_protocols::error::{ActionError, ExtensionError};
use scaffolder_protocols::extension::{
    ACTIONS_REGISTRY, Extension, ExtensionContext, ExtensionManifest,
};

use crate::registry::{ActionRegistry, ExtensionRegistry};

/// The scaffolder backend host.
pub struct Host {
    extension_registry: Arc<ExtensionRegistry>,
    action_registry: Arc<ActionRegistry>,
}

impl Host {
    /// Create a new host.
    pub fn new() -> Self {
        Self {
            extension_registry: Arc::new(ExtensionRegistry::new()),
            action_registry: Arc::new(ActionRegistry::new()),
        }
    }

    /// Get the action registry.
    pub fn action_registry(&self) -> &Arc<ActionRegistry> {
        &self.action_registry
    }

    /// Get the extension registry.
    pub fn extension_registry(&self) -> &Arc<ExtensionRegistry> {
        &self.extension_registry
    }

    /// List registered action definitions.
    pub fn list_actions(&self) -> Vec<ActionDefinition> {
        self.action_registry.list()
    }

    /// Load and initialize an extension.
    ///
    /// Nothing is recorded as loaded when a dependency is missing, the config
    /// does not match the manifest's config schema, or initialization fails.
    pub async fn load_extension(
        &self,
        mut extension: Box<dyn Extension>,
        config: serde_json::Value,
    ) -> Result<(), ExtensionError> {
        let manifest = extension.manifest();
        let id = manifest.id.clone();

        info!(
            "Loading extension: {} v{} ({}/{})",
            manifest.name, manifest.version, manifest.plugin_id, manifest.id
        );

        self.check_dependencies(manifest)?;
        validate_config(manifest, &config)?;

        let ctx = ExtensionContext::new(config)
            .with_action_registry(self.action_registry.clone());

        extension.initialize(ctx).await?;

        self.extension_registry.register(Arc::from(extension))?;

        info!("Extension loaded: {}", id);
        Ok(())
    }

    /// Shut down and unload an extension, removing the actions it provides.
    pub async fn unload_extension(&self, id: &str) -> Result<(), ExtensionError> {
        let extension = self
            .extension_registry
            .get(id)
            .ok_or_else(|| ExtensionError::NotFound(id.to_string()))?;

        info!("Unloading extension: {}", id);
        extension.shutdown().await?;

        for action_id in &extension.manifest().provides.actions {
            if self.action_registry.unregister(action_id).is_err() {
                debug!("Action {} was not registered", action_id);
            }
        }

        self.extension_registry.unregister(id)
    }

    /// Unload every extension.
    pub async fn shutdown(&self) {
        for manifest in self.extension_registry.list() {
            if let Err(e) = self.unload_extension(&manifest.id).await {
                warn!("Failed to unload {}: {}", manifest.id, e);
            }
        }
    }

    /// Run one action step.
    ///
    /// The input is validated against the action's input schema before the
    /// handler runs. Outputs are returned only when the handler succeeds.
    pub async fn invoke(
        &self,
        action_id: &str,
        ctx: ActionContext,
    ) -> Result<ActionOutputs, ActionError> {
        let action = self
            .action_registry
            .get(action_id)
            .ok_or_else(|| ActionError::NotFound(action_id.to_string()))?;

        validate_input(action.definition(), &ctx.input)?;

        let span = info_span!(
            "action",
            id = %action_id,
            task_id = %ctx.task_id,
            step_id = %ctx.step_id
        );

        match action.handle(&ctx).instrument(span).await {
            Ok(()) => {
                let outputs = ctx.outputs();
                debug!("Action {} completed with {} outputs", action_id, outputs.len());
                Ok(outputs)
            }
            Err(e) => {
                debug!("Action {} failed for task {}", action_id, ctx.task_id);
                Err(e)
            }
        }
    }

    /// Capabilities this host can hand to extensions.
    fn provides_capability(&self, id: &str) -> bool {
        id == ACTIONS_REGISTRY
    }

    fn check_dependencies(&self, manifest: &ExtensionManifest) -> Result<(), ExtensionError> {
        for dep in &manifest.dependencies.required {
            if !self.provides_capability(&dep.id) && !self.extension_registry.contains(&dep.id) {
                return Err(ExtensionError::DependencyNotSatisfied {
                    extension: manifest.id.clone(),
                    dependency: dep.id.clone(),
                });
            }
        }
        Ok(())
    }
}

impl Default for Host {
    fn default() -> Self {
        Self::new()
    }
}

/// Validate an extension's config against its manifest's config schema.
pub fn validate_config(
    manifest: &ExtensionManifest,
    config: &serde_json::Value,
) -> Result<(), ExtensionError> {
    let Some(schema) = &manifest.config_schema else {
        return Ok(());
    };

    let validator = jsonschema::validator_for(schema).map_err(|e| {
        ExtensionError::InitializationFailed(format!("{}: invalid config schema: {}", manifest.id, e))
    })?;

    let errors: Vec<String> = validator
        .iter_errors(config)
        .map(|e| format!("{}: {}", e.instance_path, e))
        .collect();

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ExtensionError::InitializationFailed(format!(
            "{}: {}",
            manifest.id,
            errors.join("; ")
        )))
    }
}

/// Validate an action input against the definition's input schema.
pub fn validate_input(
    definition: &ActionDefinition,
    input: &serde_json::Value,
) -> Result<(), ActionError> {
    let Some(schema) = &definition.input_schema else {
        return Ok(());
    };

    let validator = jsonschema::validator_for(schema).map_err(|e| {
        ActionError::InvalidInput(format!("Invalid input schema for {}: {}", definition.id, e))
    })?;

    let errors: Vec<String> = validator
        .iter_errors(input)
        .map(|e| format!("{}: {}", e.instance_path, e))
        .collect();

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ActionError::ValidationFailed(errors))
    }
}

#[cfg(test)]
#[path = "host_tests.rs"]
mod tests;
