//! `netmon-agent` -- periodic network monitor.
//!
//! Evaluates each configured network against latency and packet loss
//! thresholds every cycle and applies a multiplicative correction to the
//! sluggish ones. Runs until SIGINT or SIGTERM.
//!
//! See [`netmon_agent::config`] for the environment variables it reads.

use netmon_agent::config::{self, LogFormat};
use netmon_agent::monitor::NetworkMonitor;
use netmon_agent::shutdown;
use netmon_core::optimizer::factor_in_unit_range;

use tokio_util::sync::CancellationToken;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    dotenvy::dotenv().ok();

    let registry = tracing_subscriber::registry().with(
        tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| "netmon_agent=info,netmon_core=info".into()),
    );
    let log_format = LogFormat::from_env();
    match log_format.as_ref().copied().unwrap_or_default() {
        LogFormat::Json => registry
            .with(tracing_subscriber::fmt::layer().json())
            .init(),
        LogFormat::Text => registry.with(tracing_subscriber::fmt::layer()).init(),
    }
    if let Err(e) = log_format {
        tracing::warn!(error = %e, "Falling back to text log format");
    }

    let monitor_config = config::from_env().unwrap_or_else(|e| {
        tracing::error!(error = %e, "Invalid configuration");
        std::process::exit(1);
    });

    if !factor_in_unit_range(monitor_config.improvement_factor) {
        tracing::warn!(
            improvement_factor = monitor_config.improvement_factor,
            "Improvement factor is outside [0, 1); metrics may grow or drop to zero",
        );
    }

    tracing::info!(
        networks = monitor_config.entities.len(),
        latency_threshold_ms = monitor_config.thresholds.latency_ms,
        packet_loss_threshold_percent = monitor_config.thresholds.packet_loss_percent,
        improvement_factor = monitor_config.improvement_factor,
        interval_secs = monitor_config.cycle_interval.as_secs(),
        "Starting netmon-agent",
    );

    let cancel = CancellationToken::new();
    let signal_handle = shutdown::cancel_on_signal(cancel.clone());

    let mut monitor = NetworkMonitor::new(monitor_config);
    let cycles = monitor.run(cancel).await;

    signal_handle.abort();
    tracing::info!(cycles, "Shutdown complete");
}
