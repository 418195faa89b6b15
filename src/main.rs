//! Scaffolder backend host.

mod cli;
mod cmd_actions;
mod cmd_trigger;
mod register;

use std::process::ExitCode;

use clap::Parser;
use tracing::{info, warn};
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use scaffolder_config::{ConfigLoader, ConfigValidator, LoggingConfig};
use scaffolder_core::Host;

use cli::{Cli, Commands};

/// Initialize tracing with console output on stderr and an optional
/// daily-rolling file log.
fn init_tracing(logging: &LoggingConfig) -> Result<(), Box<dyn std::error::Error>> {
    let file_layer = match &logging.dir {
        Some(dir) => {
            let log_dir = ConfigLoader::expand_path(dir);
            std::fs::create_dir_all(&log_dir)?;

            let file_appender = RollingFileAppender::builder()
                .rotation(Rotation::DAILY)
                .filename_prefix("scaffolder")
                .filename_suffix("log")
                .build(&log_dir)?;
            let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

            // Keep the writer alive for the program duration
            static GUARD: std::sync::OnceLock<tracing_appender::non_blocking::WorkerGuard> =
                std::sync::OnceLock::new();
            let _ = GUARD.set(guard);

            Some(fmt::layer().with_writer(non_blocking).with_ansi(false))
        }
        None => None,
    };

    let env_filter =
        EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(&logging.level))?;

    // stdout is reserved for command output
    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
        .with(file_layer)
        .init();

    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    match run(Cli::parse()).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", error_report(e.as_ref()));
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = ConfigLoader::load_or_default(&cli.config)?;
    let warnings = ConfigValidator::validate(&config).into_result()?;

    init_tracing(&config.logging)?;
    for warning in &warnings {
        warn!("Config {}: {}", warning.path, warning.message);
    }

    info!("Starting scaffolder v{}", env!("CARGO_PKG_VERSION"));

    let host = Host::new();
    register::register_modules(&host, &config).await?;

    let result = match cli.command {
        Commands::Actions { format } => cmd_actions::handle_actions_command(&host, format),
        Commands::Trigger {
            template_ref,
            values,
            token,
            backend_url,
        } => {
            let request = cmd_trigger::TriggerRequest {
                template_ref,
                values,
                token,
                backend_url,
            };
            cmd_trigger::handle_trigger_command(&host, &config, request).await
        }
    };

    host.shutdown().await;
    result
}

/// One-line error message: the error's Display text followed by any source
/// text it does not already include.
fn error_report(err: &(dyn std::error::Error + 'static)) -> String {
    let mut report = format!("Error: {}", err);
    let mut source = err.source();
    while let Some(cause) = source {
        let cause_text = cause.to_string();
        if !report.contains(&cause_text) {
            report.push_str(": ");
            report.push_str(&cause_text);
        }
        source = cause.source();
    }
    report
}
