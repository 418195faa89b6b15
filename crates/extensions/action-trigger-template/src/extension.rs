//! Trigger-template module definition.

use std::sync::Arc;

use async_trait::async_trait;

use scaffolder_protocols::error::ExtensionError;
use scaffolder_protocols::extension::{
    ACTIONS_REGISTRY, Extension, ExtensionContext, ExtensionManifest, Provides,
};
use scaffolder_protocols::types::Version;

use crate::actions::{ACTION_ID, TriggerTemplateAction};

/// Plugin this module extends.
pub const PLUGIN_ID: &str = "scaffolder";

/// Module identifier.
pub const MODULE_ID: &str = "trigger-template";

/// Backend module registering the `trigger:template` action.
pub struct TriggerTemplateExtension {
    manifest: ExtensionManifest,
}

impl TriggerTemplateExtension {
    pub fn new() -> Self {
        let mut manifest = ExtensionManifest::new(
            MODULE_ID,
            PLUGIN_ID,
            "Trigger Template",
            Version::new(0, 1, 0),
        )
        .with_description("Scaffolder action that triggers another template")
        .with_config_schema(serde_json::json!({
            "type": ["object", "null"],
            "properties": {
                "backendUrl": {
                    "type": "string",
                    "description": "Scaffolder backend used when a task does not supply the backendUrl secret"
                }
            }
        }))
        .requires(ACTIONS_REGISTRY);
        manifest.provides = Provides {
            actions: vec![ACTION_ID.to_string()],
        };

        Self { manifest }
    }
}

impl Default for TriggerTemplateExtension {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Extension for TriggerTemplateExtension {
    fn manifest(&self) -> &ExtensionManifest {
        &self.manifest
    }

    async fn initialize(&mut self, ctx: ExtensionContext) -> Result<(), ExtensionError> {
        let registry = ctx.action_registry.clone().ok_or_else(|| {
            ExtensionError::DependencyNotSatisfied {
                extension: MODULE_ID.to_string(),
                dependency: ACTIONS_REGISTRY.to_string(),
            }
        })?;

        let mut action = TriggerTemplateAction::new();
        if let Some(url) = ctx.get_config::<String>("backendUrl") {
            action = action.with_backend_url(url);
        }

        registry.add_action(Arc::new(action))
    }
}
