//! Configuration management CLI commands.

use clap::{Args, Subcommand};

use bloodlink_core::error::AppError;

use crate::output::{self, OutputFormat};

/// Arguments for config commands
#[derive(Debug, Args)]
pub struct ConfigArgs {
    /// Config subcommand
    #[command(subcommand)]
    pub command: ConfigCommand,
}

/// Config subcommands
#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Show the effective configuration
    Show,
    /// Validate the configuration sources
    Validate,
}

/// Execute config commands
pub fn execute(
    args: &ConfigArgs,
    base: &str,
    env: &str,
    format: OutputFormat,
) -> Result<(), AppError> {
    match &args.command {
        ConfigCommand::Show => {
            let config = super::load_config(base, env)?;
            output::print_item(&config, format);
        }
        ConfigCommand::Validate => match super::load_config(base, env) {
            Ok(config) => {
                output::print_success(&format!("Configuration '{}' ({}) is valid", base, env));
                output::print_kv(
                    "Tick interval",
                    &format!("{} ms", config.scheduler.tick_interval_ms),
                );
                output::print_kv(
                    "Donor age",
                    &format!("{}-{}", config.eligibility.min_age, config.eligibility.max_age),
                );
                output::print_kv(
                    "Donation interval",
                    &format!("{} days", config.eligibility.min_days_between_donations),
                );
                output::print_kv("Log level", &config.logging.level);
            }
            Err(e) => {
                output::print_error(&format!("Configuration invalid: {}", e));
                return Err(e);
            }
        },
    }

    Ok(())
}
