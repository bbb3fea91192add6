//! Donor screening command.

use chrono::{Duration, Utc};
use clap::Args;
use serde::Serialize;

use bloodlink_core::config::AppConfig;
use bloodlink_core::error::AppError;
use bloodlink_core::types::id::DonorId;
use bloodlink_entity::donor::{Donor, EligibilityVerdict};
use bloodlink_entity::BloodType;
use bloodlink_service::EligibilityPolicy;

use crate::output::{self, OutputFormat};

/// Arguments for the eligibility command
#[derive(Debug, Args)]
pub struct EligibilityArgs {
    /// Age in years
    #[arg(long)]
    pub age: Option<u32>,

    /// Weight in kilograms
    #[arg(long)]
    pub weight: Option<f64>,

    /// Days since the last donation; omit if never donated
    #[arg(long)]
    pub last_donation_days: Option<i64>,

    /// Free-text medical conditions
    #[arg(long, default_value = "")]
    pub conditions: String,
}

#[derive(Debug, Serialize)]
struct Screening {
    verdict: EligibilityVerdict,
    message: &'static str,
    days_since_last_donation: i64,
}

/// Execute the eligibility command
pub fn execute(
    args: &EligibilityArgs,
    config: &AppConfig,
    format: OutputFormat,
) -> Result<(), AppError> {
    let now = Utc::now();
    let donor = Donor {
        id: DonorId::new(),
        name: String::new(),
        blood_type: BloodType::O_NEGATIVE,
        phone: String::new(),
        address: String::new(),
        pincode: None,
        last_donation: args.last_donation_days.map(|d| now - Duration::days(d)),
        available: true,
        age: args.age.unwrap_or(0),
        weight_kg: args.weight.unwrap_or(0.0),
        medical_conditions: args.conditions.clone(),
        registered_at: now,
    };

    let verdict = EligibilityPolicy::from_config(&config.eligibility).evaluate(&donor, now);
    let screening = Screening {
        verdict,
        message: verdict.message(),
        days_since_last_donation: donor.days_since_last_donation(now),
    };

    match format {
        OutputFormat::Json => output::print_item(&screening, format),
        OutputFormat::Table => {
            if verdict.eligible {
                output::print_success(screening.message);
            } else {
                output::print_warning(screening.message);
            }
            output::print_kv("Age", &donor.age.to_string());
            output::print_kv("Weight (kg)", &donor.weight_kg.to_string());
            output::print_kv(
                "Days since donation",
                &screening.days_since_last_donation.to_string(),
            );
        }
    }
    Ok(())
}
