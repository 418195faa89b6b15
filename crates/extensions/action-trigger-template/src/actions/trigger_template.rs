//! The `trigger:template` action.

use async_trait::async_trait;
use reqwest::Client;
use reqwest::header::CONTENT_TYPE;
use serde::{Deserialize, Serialize};
use tracing::{debug, error, info};

use scaffolder_protocols::action::{Action, ActionContext, ActionDefinition};
use scaffolder_protocols::error::ActionError;

use super::TemplateRefParts;
use crate::error::TriggerError;
use crate::extension::MODULE_ID;

/// Identifier under which the action is registered.
pub const ACTION_ID: &str = "trigger:template";

/// Backend used when neither the task secrets nor the module config name one.
pub const DEFAULT_BACKEND_URL: &str = "http://localhost:7007";

/// Task-creation endpoint, relative to the backend URL.
pub const TASKS_PATH: &str = "/api/scaffolder/v2/tasks";

const BACKEND_URL_SECRET: &str = "backendUrl";

/// Input accepted by the action.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TriggerTemplateInput {
    template_ref: String,
    values: serde_json::Map<String, serde_json::Value>,
    #[serde(default)]
    token: Option<String>,
}

/// Body of the task-creation request.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct TriggerPayload<'a> {
    template_ref: &'a str,
    values: &'a serde_json::Map<String, serde_json::Value>,
}

#[derive(Debug, Deserialize)]
struct TaskCreated {
    id: String,
}

/// A task created by the remote scaffolder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TriggeredTask {
    pub task_id: String,
    pub task_url: String,
}

/// Action that starts another scaffolder template.
pub struct TriggerTemplateAction {
    definition: ActionDefinition,
    client: Client,
    backend_url: Option<String>,
}

impl TriggerTemplateAction {
    /// Create the action with a default HTTP client.
    pub fn new() -> Self {
        Self::with_client(Client::new())
    }

    /// Create the action with a caller-supplied HTTP client.
    pub fn with_client(client: Client) -> Self {
        let definition = ActionDefinition::new(
            ACTION_ID,
            "Triggers another scaffolder template with provided values",
        )
        .with_input_schema(serde_json::json!({
            "type": "object",
            "required": ["templateRef", "values"],
            "properties": {
                "templateRef": {
                    "type": "string",
                    "minLength": 1,
                    "title": "Template Reference",
                    "description": "The entity reference of the template to trigger (e.g., template:default/my-template)"
                },
                "values": {
                    "type": "object",
                    "title": "Template Values",
                    "description": "Input values to pass to the triggered template"
                },
                "token": {
                    "type": "string",
                    "title": "Authentication Token",
                    "description": "Optional authentication token for API calls"
                }
            }
        }))
        .with_output_schema(serde_json::json!({
            "type": "object",
            "properties": {
                "taskId": {
                    "type": "string",
                    "title": "Task ID",
                    "description": "The ID of the triggered scaffolder task"
                },
                "taskUrl": {
                    "type": "string",
                    "title": "Task URL",
                    "description": "URL to monitor the triggered task"
                }
            }
        }))
        .with_extension_id(MODULE_ID);

        Self {
            definition,
            client,
            backend_url: None,
        }
    }

    /// Backend URL used when the task secrets do not provide `backendUrl`.
    pub fn with_backend_url(mut self, url: impl Into<String>) -> Self {
        self.backend_url = Some(url.into());
        self
    }

    /// Pick the backend URL for one invocation: task secret, then module
    /// config, then [`DEFAULT_BACKEND_URL`]. Empty values count as absent.
    pub fn resolve_backend_url(&self, ctx: &ActionContext) -> String {
        ctx.secret(BACKEND_URL_SECRET)
            .filter(|url| !url.is_empty())
            .or_else(|| self.backend_url.as_deref().filter(|url| !url.is_empty()))
            .unwrap_or(DEFAULT_BACKEND_URL)
            .trim_end_matches('/')
            .to_string()
    }

    async fn trigger(
        &self,
        input: &TriggerTemplateInput,
        backend_url: &str,
    ) -> Result<TriggeredTask, TriggerError> {
        let parts = TemplateRefParts::split(&input.template_ref);
        debug!(
            kind = ?parts.kind,
            namespace = ?parts.namespace,
            name = ?parts.name,
            "Parsed template reference"
        );

        let tasks_url = format!("{}{}", backend_url, TASKS_PATH);
        let payload = TriggerPayload {
            template_ref: &input.template_ref,
            values: &input.values,
        };

        info!("Calling scaffolder API: {}", tasks_url);

        let mut request = self
            .client
            .post(&tasks_url)
            .header(CONTENT_TYPE, "application/json")
            .json(&payload);

        if let Some(token) = input.token.as_deref().filter(|t| !t.is_empty()) {
            request = request.bearer_auth(token);
        }

        let response = request.send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await?;
            return Err(TriggerError::Rejected {
                status: status.as_u16(),
                reason: status.canonical_reason().unwrap_or_default().to_string(),
                body,
            });
        }

        let body = response.text().await?;
        let created: TaskCreated = serde_json::from_str(&body)?;
        let task_url = format!("{}/{}", tasks_url, created.id);

        Ok(TriggeredTask {
            task_id: created.id,
            task_url,
        })
    }
}

impl Default for TriggerTemplateAction {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Action for TriggerTemplateAction {
    fn definition(&self) -> &ActionDefinition {
        &self.definition
    }

    async fn handle(&self, ctx: &ActionContext) -> Result<(), ActionError> {
        let input: TriggerTemplateInput = serde_json::from_value(ctx.input.clone())
            .map_err(|e| ActionError::InvalidInput(e.to_string()))?;

        info!("Triggering template: {}", input.template_ref);
        info!(
            "Input values: {}",
            serde_json::to_string_pretty(&input.values).unwrap_or_default()
        );

        let backend_url = self.resolve_backend_url(ctx);

        match self.trigger(&input, &backend_url).await {
            Ok(task) => {
                info!("Template triggered successfully! Task ID: {}", task.task_id);
                info!("Task URL: {}", task.task_url);

                ctx.output("taskId", &task.task_id)
                    .map_err(ActionError::execution)?;
                ctx.output("taskUrl", &task.task_url)
                    .map_err(ActionError::execution)?;
                Ok(())
            }
            Err(e) => {
                error!("Error triggering template: {}", e);
                Err(ActionError::execution(e))
            }
        }
    }
}

#[cfg(test)]
#[path = "trigger_template_tests.rs"]
mod tests;
