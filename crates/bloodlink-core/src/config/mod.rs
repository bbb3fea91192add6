//! Application configuration schemas.
//!
//! All configuration structs are deserialized via the `config` crate from
//! optional TOML files plus `BLOODLINK__*` environment variables. Each
//! sub-module represents a logical configuration section, and every
//! section carries serde defaults so an empty source set is valid.

pub mod eligibility;
pub mod inventory;
pub mod logging;
pub mod notifications;
pub mod scheduler;
pub mod triage;

use serde::{Deserialize, Serialize};

pub use self::eligibility::EligibilityConfig;
pub use self::inventory::InventoryConfig;
pub use self::logging::LoggingConfig;
pub use self::notifications::NotificationsConfig;
pub use self::scheduler::SchedulerConfig;
pub use self::triage::TriageConfig;

use crate::error::AppError;

/// Root application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Countdown timer settings.
    #[serde(default)]
    pub scheduler: SchedulerConfig,
    /// Donor screening thresholds and disqualifying terms.
    #[serde(default)]
    pub eligibility: EligibilityConfig,
    /// Triage escalation settings.
    #[serde(default)]
    pub triage: TriageConfig,
    /// Blood bank inventory settings.
    #[serde(default)]
    pub inventory: InventoryConfig,
    /// Notification and event bus settings.
    #[serde(default)]
    pub notifications: NotificationsConfig,
    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from TOML files.
    ///
    /// Merges the default configuration with an environment-specific overlay
    /// and environment variables prefixed with `BLOODLINK__`. Missing files
    /// are not an error.
    pub fn load(env: &str) -> Result<Self, AppError> {
        Self::load_from("config/default", env)
    }

    /// Load configuration with an explicit base file path (without extension).
    pub fn load_from(base: &str, env: &str) -> Result<Self, AppError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name(base).required(false))
            .add_source(config::File::with_name(&format!("config/{env}")).required(false))
            .add_source(
                config::Environment::with_prefix("BLOODLINK")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .map_err(|e| AppError::configuration(format!("Failed to build config: {e}")))?;

        let loaded: Self = config
            .try_deserialize()
            .map_err(|e| AppError::configuration(format!("Failed to deserialize config: {e}")))?;

        loaded.validate()?;
        Ok(loaded)
    }

    /// Check cross-field invariants that serde cannot express.
    pub fn validate(&self) -> Result<(), AppError> {
        if self.scheduler.tick_interval_ms == 0 {
            return Err(AppError::configuration(
                "scheduler.tick_interval_ms must be greater than zero",
            ));
        }
        if self.eligibility.min_age > self.eligibility.max_age {
            return Err(AppError::configuration(format!(
                "eligibility.min_age ({}) exceeds eligibility.max_age ({})",
                self.eligibility.min_age, self.eligibility.max_age
            )));
        }
        if self.inventory.expiry_urgent_days > self.inventory.expiry_warning_days {
            return Err(AppError::configuration(
                "inventory.expiry_urgent_days must not exceed inventory.expiry_warning_days",
            ));
        }
        if self.notifications.event_buffer_size == 0 {
            return Err(AppError::configuration(
                "notifications.event_buffer_size must be greater than zero",
            ));
        }
        Ok(())
    }
}
