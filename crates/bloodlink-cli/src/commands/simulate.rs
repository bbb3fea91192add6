//! Countdown simulation command.

use clap::Args;
use serde::Serialize;
use tabled::Tabled;

use bloodlink_core::config::AppConfig;
use bloodlink_core::error::AppError;
use bloodlink_entity::notification::EmergencyNotification;
use bloodlink_entity::request::BloodRequest;
use bloodlink_realtime::notification::formatter::format_window;

use crate::output::{self, OutputFormat};

/// Arguments for the simulate command
#[derive(Debug, Args)]
pub struct SimulateArgs {
    /// Minutes (ticks) to simulate
    #[arg(short, long, default_value_t = 60)]
    pub minutes: u32,

    /// Scenario JSON file; the built-in demo is used when omitted
    #[arg(short, long)]
    pub scenario: Option<String>,
}

/// An active request as shown after the run.
#[derive(Debug, Serialize, Tabled)]
pub struct RequestRow {
    #[tabled(rename = "Patient")]
    patient: String,
    #[tabled(rename = "Type")]
    blood_type: String,
    #[tabled(rename = "Units")]
    units: u32,
    #[tabled(rename = "Hospital")]
    hospital: String,
    #[tabled(rename = "Tier")]
    criticality: String,
    #[tabled(rename = "Remaining")]
    remaining: String,
}

impl From<&BloodRequest> for RequestRow {
    fn from(r: &BloodRequest) -> Self {
        Self {
            patient: r.patient_name.clone(),
            blood_type: r.blood_type.to_string(),
            units: r.units_needed,
            hospital: r.hospital_name.clone(),
            criticality: r.criticality.to_string(),
            remaining: format_window(r.remaining_minutes),
        }
    }
}

#[derive(Debug, Serialize, Tabled)]
struct NotificationRow {
    #[tabled(rename = "Severity")]
    severity: String,
    #[tabled(rename = "Title")]
    title: String,
    #[tabled(rename = "Message")]
    message: String,
}

impl From<&EmergencyNotification> for NotificationRow {
    fn from(n: &EmergencyNotification) -> Self {
        Self {
            severity: n.severity.to_string(),
            title: n.title.clone(),
            message: n.message.clone(),
        }
    }
}

#[derive(Debug, Serialize)]
struct SimulationReport {
    minutes: u32,
    expired: Vec<RequestRow>,
    active: Vec<RequestRow>,
    alerts: Vec<String>,
}

/// Execute the simulate command
pub async fn execute(
    args: &SimulateArgs,
    config: &AppConfig,
    format: OutputFormat,
) -> Result<(), AppError> {
    let service = super::seeded_service(config, args.scenario.as_deref()).await?;

    let mut expired = Vec::new();
    let mut alerts = Vec::new();
    for _ in 0..args.minutes {
        let outcome = service.tick().await;
        for request in &outcome.expired {
            if format == OutputFormat::Table {
                output::print_warning(&format!(
                    "minute {}: request for {} expired",
                    outcome.tick, request.patient_name
                ));
            }
            expired.push(RequestRow::from(request));
        }
        if let Some(alert) = outcome.critical_alert {
            if format == OutputFormat::Table {
                output::print_warning(&format!("minute {}: {}", outcome.tick, alert.message));
            }
            alerts.push(alert.message);
        }
    }

    let active: Vec<RequestRow> = service
        .list_active_requests()
        .await
        .iter()
        .map(RequestRow::from)
        .collect();

    match format {
        OutputFormat::Json => output::print_item(
            &SimulationReport {
                minutes: args.minutes,
                expired,
                active,
                alerts,
            },
            format,
        ),
        OutputFormat::Table => {
            output::print_heading(&format!("Active requests after {} minutes:", args.minutes));
            output::print_list(&active, format);

            let notifications: Vec<NotificationRow> = service
                .list_notifications_by_priority()
                .await
                .iter()
                .map(NotificationRow::from)
                .collect();
            output::print_heading("Notifications:");
            output::print_list(&notifications, format);

            if let Some(summary) = service.critical_summary().await {
                output::print_warning(&summary);
            }
        }
    }
    Ok(())
}
