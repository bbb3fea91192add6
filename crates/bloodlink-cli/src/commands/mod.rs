//! CLI command definitions and dispatch.

pub mod compat;
pub mod config;
pub mod eligibility;
pub mod matching;
pub mod simulate;
pub mod triage;

use std::sync::Arc;

use clap::{Parser, Subcommand};

use bloodlink_core::config::AppConfig;
use bloodlink_core::error::AppError;
use bloodlink_realtime::EventBus;
use bloodlink_service::{BloodLinkService, Scenario};

use crate::output::OutputFormat;

/// BloodLink: blood donation coordination core
#[derive(Debug, Parser)]
#[command(name = "bloodlink", version, about, long_about = None)]
pub struct Cli {
    /// Base configuration file, without extension
    #[arg(short, long, default_value = "config/default")]
    pub config: String,

    /// Environment overlay loaded from `config/<env>`
    #[arg(short, long, default_value = "development")]
    pub env: String,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// List donor types compatible with a recipient type
    Compat(compat::CompatArgs),
    /// Screen a prospective donor
    Eligibility(eligibility::EligibilityArgs),
    /// Classify a request and show its initial countdown
    Triage(triage::TriageArgs),
    /// Run a scenario through the countdown minute by minute
    Simulate(simulate::SimulateArgs),
    /// Match a scenario's active requests against donors and stock
    Match(matching::MatchArgs),
    /// Configuration management
    Config(config::ConfigArgs),
}

impl Cli {
    /// Execute the CLI command
    pub async fn execute(&self) -> Result<(), AppError> {
        match &self.command {
            Commands::Compat(args) => compat::execute(args, self.format),
            Commands::Eligibility(args) => {
                eligibility::execute(args, &self.load_config()?, self.format)
            }
            Commands::Triage(args) => triage::execute(args, &self.load_config()?, self.format),
            Commands::Simulate(args) => {
                simulate::execute(args, &self.load_config()?, self.format).await
            }
            Commands::Match(args) => {
                matching::execute(args, &self.load_config()?, self.format).await
            }
            Commands::Config(args) => config::execute(args, &self.config, &self.env, self.format),
        }
    }

    fn load_config(&self) -> Result<AppConfig, AppError> {
        load_config(&self.config, &self.env)
    }
}

/// Helper: load configuration from files and environment
pub fn load_config(base: &str, env: &str) -> Result<AppConfig, AppError> {
    AppConfig::load_from(base, env)
}

/// Helper: build a service and replay a scenario into it.
///
/// Without a path the built-in demo scenario is used.
pub async fn seeded_service(
    config: &AppConfig,
    scenario: Option<&str>,
) -> Result<BloodLinkService, AppError> {
    let scenario = match scenario {
        Some(path) => Scenario::from_path(path)?,
        None => Scenario::demo(),
    };
    let bus = EventBus::new(config.notifications.event_buffer_size);
    let service = BloodLinkService::new(config, Arc::new(bus));
    let summary = scenario.apply(&service).await?;
    tracing::debug!(
        requests = summary.requests,
        donors = summary.donors,
        banks = summary.banks,
        "Scenario seeded"
    );
    Ok(service)
}
