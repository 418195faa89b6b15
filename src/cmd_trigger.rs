//! Trigger command handler.

use std::collections::BTreeMap;
use std::path::Path;

use serde_json::{Value, json};
use tracing::info;
use uuid::Uuid;

use scaffolder_action_trigger_template::ACTION_ID;
use scaffolder_config::{BACKEND_URL_KEY, Config};
use scaffolder_core::Host;
use scaffolder_protocols::action::ActionContext;

/// Arguments of one `trigger` run.
pub(crate) struct TriggerRequest {
    pub template_ref: String,
    pub values: String,
    pub token: Option<String>,
    pub backend_url: Option<String>,
}

/// Run `trigger:template` once and print its outputs as JSON.
pub(crate) async fn handle_trigger_command(
    host: &Host,
    config: &Config,
    request: TriggerRequest,
) -> Result<(), Box<dyn std::error::Error>> {
    let values = parse_values(&request.values)?;

    let mut input = json!({
        "templateRef": request.template_ref,
        "values": values,
    });
    if let Some(token) = request.token {
        input["token"] = Value::String(token);
    }

    let mut secrets = config.secrets.clone();
    if let Some(url) = request.backend_url {
        secrets.insert(BACKEND_URL_KEY.to_string(), url);
    }

    let task_id = Uuid::new_v4().to_string();
    info!("Running {} as task {}", ACTION_ID, task_id);

    let ctx = ActionContext::new(task_id, "trigger", input).with_secrets(secrets);
    let outputs = host.invoke(ACTION_ID, ctx).await?;

    let sorted: BTreeMap<_, _> = outputs.into_iter().collect();
    println!("{}", serde_json::to_string_pretty(&sorted)?);

    Ok(())
}

/// Parse `--values`: inline JSON, or `@path` naming a JSON file.
fn parse_values(raw: &str) -> Result<Value, Box<dyn std::error::Error>> {
    let content = match raw.strip_prefix('@') {
        Some(path) => std::fs::read_to_string(Path::new(path))?,
        None => raw.to_string(),
    };
    Ok(serde_json::from_str(&content)?)
}
