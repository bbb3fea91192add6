//! Request matching command.

use clap::Args;
use serde::Serialize;
use tabled::Tabled;

use bloodlink_core::config::AppConfig;
use bloodlink_core::error::AppError;

use crate::output::{self, OutputFormat};

/// Arguments for the match command
#[derive(Debug, Args)]
pub struct MatchArgs {
    /// Scenario JSON file; the built-in demo is used when omitted
    #[arg(short, long)]
    pub scenario: Option<String>,
}

#[derive(Debug, Serialize, Tabled)]
struct MatchRow {
    #[tabled(rename = "Patient")]
    patient: String,
    #[tabled(rename = "Needs")]
    blood_type: String,
    #[tabled(rename = "Units")]
    units_needed: u32,
    #[tabled(rename = "Donors")]
    donors: String,
    #[tabled(rename = "Stock")]
    stock_units: u64,
    #[tabled(rename = "Banks")]
    banks: String,
}

/// Execute the match command
pub async fn execute(
    args: &MatchArgs,
    config: &AppConfig,
    format: OutputFormat,
) -> Result<(), AppError> {
    let service = super::seeded_service(config, args.scenario.as_deref()).await?;

    let mut rows = Vec::new();
    for request in service.list_active_requests().await {
        let report = service.match_request(request.id).await?;
        let donors: Vec<String> = report
            .donors
            .iter()
            .map(|d| format!("{} ({})", d.name, d.blood_type))
            .collect();
        let banks: Vec<String> = report
            .stock
            .iter()
            .map(|s| format!("{} {}x{}", s.bank_name, s.blood_type, s.units_available))
            .collect();
        rows.push(MatchRow {
            patient: request.patient_name,
            blood_type: report.blood_type.to_string(),
            units_needed: request.units_needed,
            donors: if donors.is_empty() { "-".to_string() } else { donors.join(", ") },
            stock_units: report.stock_units(),
            banks: if banks.is_empty() { "-".to_string() } else { banks.join(", ") },
        });
    }

    output::print_list(&rows, format);
    Ok(())
}
