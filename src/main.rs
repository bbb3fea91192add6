//! BloodLink server: runs the coordination core with its countdown.
//!
//! Main entry point that wires the crates together, optionally seeds a
//! scenario, and ticks until interrupted.

use std::sync::Arc;

use tokio::sync::broadcast::error::RecvError;
use tokio::sync::watch;
use tracing;
use tracing_subscriber::{EnvFilter, fmt};

use bloodlink_core::config::AppConfig;
use bloodlink_core::error::AppError;
use bloodlink_realtime::EventBus;
use bloodlink_service::{BloodLinkService, Scenario};
use bloodlink_worker::CountdownScheduler;

#[tokio::main]
async fn main() {
    let config = match load_configuration() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    init_logging(&config);

    if let Err(e) = run(config).await {
        tracing::error!(error = %e, "Server error");
        std::process::exit(1);
    }
}

/// Load configuration from files and environment
fn load_configuration() -> Result<AppConfig, AppError> {
    let base = std::env::var("BLOODLINK_CONFIG").unwrap_or_else(|_| "config/default".to_string());
    let env = std::env::var("BLOODLINK_ENV").unwrap_or_else(|_| "development".to_string());
    AppConfig::load_from(&base, &env)
}

/// Initialize tracing/logging
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .with_thread_ids(true)
                .init();
        }
        _ => {
            fmt()
                .pretty()
                .with_env_filter(filter)
                .with_target(true)
                .init();
        }
    }
}

/// Main server run function
async fn run(config: AppConfig) -> Result<(), AppError> {
    tracing::info!(version = env!("CARGO_PKG_VERSION"), "Starting BloodLink");

    // ── Step 1: Event bus and service ────────────────────────────
    let bus = EventBus::new(config.notifications.event_buffer_size);
    let service = BloodLinkService::new(&config, Arc::new(bus.clone()));

    // ── Step 2: Event log ────────────────────────────────────────
    let (shutdown_tx, shutdown_rx) = watch::channel(false);
    let log_handle = tokio::spawn(log_events(bus.clone(), shutdown_rx));

    // ── Step 3: Optional scenario ────────────────────────────────
    if let Some(scenario) = load_scenario()? {
        let summary = scenario.apply(&service).await?;
        tracing::info!(
            banks = summary.banks,
            donors = summary.donors,
            requests = summary.requests,
            "Scenario loaded"
        );
    }

    // ── Step 4: Countdown ────────────────────────────────────────
    let mut scheduler = if config.scheduler.enabled {
        let mut scheduler =
            CountdownScheduler::from_config(Arc::new(service.clone()), &config.scheduler);
        scheduler.start()?;
        Some(scheduler)
    } else {
        tracing::info!("Countdown disabled");
        None
    };

    // ── Step 5: Graceful shutdown ────────────────────────────────
    shutdown_signal().await;
    tracing::info!("Shutdown signal received, starting graceful shutdown...");

    if let Some(scheduler) = scheduler.as_mut() {
        scheduler.stop().await?;
    }
    let _ = shutdown_tx.send(true);
    let _ = tokio::time::timeout(std::time::Duration::from_secs(5), log_handle).await;

    let snapshot = service.snapshot().await;
    tracing::info!(
        active = snapshot.requests.len(),
        fulfilled = snapshot.fulfilled.len(),
        notifications = snapshot.notifications.len(),
        ticks = snapshot.ticks,
        "BloodLink shut down gracefully"
    );
    Ok(())
}

/// Scenario named by `BLOODLINK_SCENARIO`: `demo` or a JSON file path
fn load_scenario() -> Result<Option<Scenario>, AppError> {
    match std::env::var("BLOODLINK_SCENARIO") {
        Ok(name) if name == "demo" => Ok(Some(Scenario::demo())),
        Ok(path) => {
            tracing::info!(path = %path, "Loading scenario file");
            Scenario::from_path(&path).map(Some)
        }
        Err(_) => Ok(None),
    }
}

/// Write every domain event to the log until shutdown
async fn log_events(bus: EventBus, mut cancel: watch::Receiver<bool>) {
    let mut rx = bus.subscribe();
    loop {
        tokio::select! {
            _ = cancel.changed() => break,
            received = rx.recv() => match received {
                Ok(event) => tracing::info!(
                    event = event.label(),
                    event_id = %event.id,
                    "Domain event"
                ),
                Err(RecvError::Lagged(skipped)) => {
                    tracing::warn!(skipped, "Event log lagged behind the bus");
                }
                Err(RecvError::Closed) => break,
            },
        }
    }
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
