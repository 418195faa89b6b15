//! Module registration for the scaffolder host.

use tracing::{error, info};

use scaffolder_action_trigger_template::{MODULE_ID, TriggerTemplateExtension};
use scaffolder_config::Config;
use scaffolder_core::Host;
use scaffolder_protocols::error::ExtensionError;

/// Load every built-in module into the host.
pub(crate) async fn register_modules(host: &Host, config: &Config) -> Result<(), ExtensionError> {
    let extension = Box::new(TriggerTemplateExtension::new());

    if let Err(e) = host
        .load_extension(extension, config.extension_config(MODULE_ID))
        .await
    {
        error!("Failed to initialize {} module: {}", MODULE_ID, e);
        return Err(e);
    }

    let ids: Vec<String> = host.list_actions().into_iter().map(|d| d.id).collect();
    info!("Registered {} actions: {:?}", ids.len(), ids);
    Ok(())
}
