//! Actions command handler.

use scaffolder_core::Host;

use crate::cli::OutputFormat;

/// Print the registered action definitions.
pub(crate) fn handle_actions_command(
    host: &Host,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let actions = host.list_actions();

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&actions)?);
        }
        OutputFormat::Table => {
            if actions.is_empty() {
                println!("No actions registered.");
                return Ok(());
            }

            println!("{:<20} {:<20} {:<20} DESCRIPTION", "ID", "MODULE", "OUTPUTS");
            println!("{}", "-".repeat(100));
            for action in &actions {
                println!(
                    "{:<20} {:<20} {:<20} {}",
                    action.id,
                    action.extension_id.as_deref().unwrap_or("-"),
                    action.output_names().join(","),
                    action.description
                );
            }
            println!();
            println!("Total: {} action(s)", actions.len());
        }
    }

    Ok(())
}
