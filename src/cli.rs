//! CLI definitions for the scaffolder host.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// Scaffolder backend host.
#[derive(Parser)]
#[command(name = "scaffolder")]
#[command(about = "Scaffolder backend host with the trigger-template action")]
#[command(version)]
pub(crate) struct Cli {
    /// Configuration file path
    #[arg(short, long, default_value = "config/default.toml", global = true)]
    pub config: PathBuf,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// List registered actions
    Actions {
        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,
    },

    /// Run the trigger:template action once
    Trigger {
        /// Entity reference of the template (e.g. template:default/my-template)
        #[arg(long)]
        template_ref: String,

        /// Template values as a JSON object, or @path to a JSON file
        #[arg(long, default_value = "{}")]
        values: String,

        /// Bearer token for the scaffolder API
        #[arg(long, env = "SCAFFOLDER_TOKEN", hide_env_values = true)]
        token: Option<String>,

        /// Scaffolder backend URL (overrides the backendUrl secret)
        #[arg(long)]
        backend_url: Option<String>,
    },
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
    Table,
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_trigger() {
        let cli = Cli::parse_from([
            "scaffolder",
            "trigger",
            "--template-ref",
            "template:default/service",
            "--values",
            r#"{"name":"svc"}"#,
            "--backend-url",
            "http://backstage:7007",
        ]);
        match cli.command {
            Commands::Trigger {
                template_ref,
                values,
                backend_url,
                ..
            } => {
                assert_eq!(template_ref, "template:default/service");
                assert_eq!(values, r#"{"name":"svc"}"#);
                assert_eq!(backend_url.as_deref(), Some("http://backstage:7007"));
            }
            _ => panic!("Expected trigger command"),
        }
    }

    #[test]
    fn test_parse_actions_json() {
        let cli = Cli::parse_from(["scaffolder", "actions", "--format", "json"]);
        assert!(matches!(
            cli.command,
            Commands::Actions { format: OutputFormat::Json }
        ));
        assert_eq!(cli.config, PathBuf::from("config/default.toml"));
    }
}
