//! Request triage command.

use clap::Args;
use serde::Serialize;

use bloodlink_core::config::AppConfig;
use bloodlink_core::error::AppError;
use bloodlink_entity::request::{Criticality, RequestKind};
use bloodlink_realtime::notification::formatter::format_window;
use bloodlink_service::triage::{self, TriageInput};
use bloodlink_service::TriagePolicy;

use crate::output::{self, OutputFormat};

/// Arguments for the triage command
#[derive(Debug, Args)]
pub struct TriageArgs {
    /// Units of blood needed
    #[arg(long, default_value_t = 1)]
    pub units: u32,

    /// Submit in emergency mode
    #[arg(long)]
    pub emergency: bool,

    /// Emergency cause: accident, surgery, hemorrhage, other
    #[arg(long)]
    pub emergency_type: Option<String>,

    /// Emergency window: immediate, 30min, 1hour, 2hours
    #[arg(long)]
    pub window: Option<String>,

    /// Standard urgency: immediate, urgent, scheduled
    #[arg(long)]
    pub urgency: Option<String>,

    /// Explicit tier: urgent, severe, critical
    #[arg(long)]
    pub criticality: Option<String>,

    /// Explicit countdown length in minutes
    #[arg(long)]
    pub minutes: Option<u32>,
}

#[derive(Debug, Serialize)]
struct TriageResult {
    criticality: Criticality,
    remaining_minutes: u32,
    window: String,
    time_band: Criticality,
}

/// Execute the triage command
pub fn execute(args: &TriageArgs, config: &AppConfig, format: OutputFormat) -> Result<(), AppError> {
    let kind = if args.emergency {
        RequestKind::Emergency {
            emergency_type: args.emergency_type.as_deref().map(str::parse).transpose()?,
            window: args.window.as_deref().map(str::parse).transpose()?,
        }
    } else {
        RequestKind::Standard {
            urgency: args.urgency.as_deref().map(str::parse).transpose()?,
        }
    };
    let explicit = args.criticality.as_deref().map(str::parse).transpose()?;

    let policy = TriagePolicy::from_config(&config.triage);
    let criticality = policy.classify(&TriageInput {
        explicit,
        kind,
        units_needed: args.units,
    });
    let remaining_minutes = policy.initial_minutes(&kind, args.minutes);
    let result = TriageResult {
        criticality,
        remaining_minutes,
        window: format_window(remaining_minutes),
        time_band: triage::time_urgency_band(remaining_minutes),
    };

    match format {
        OutputFormat::Json => output::print_item(&result, format),
        OutputFormat::Table => {
            output::print_kv("Criticality", &result.criticality.to_string());
            output::print_kv("Countdown", &result.window);
            output::print_kv("Time band", &result.time_band.to_string());
            if remaining_minutes == 0 {
                output::print_warning("A request with no time remaining is not posted");
            }
        }
    }
    Ok(())
}
