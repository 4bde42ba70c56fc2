//! Monitor / analyze / optimize loop.
//!
//! [`NetworkMonitor`] owns the monitored networks together with one
//! [`NetworkAnalyzer`] and one [`NetworkOptimizer`]. Each cycle walks the
//! networks in configuration order, optimizes the sluggish ones in place,
//! then sleeps for the configured interval. Everything runs on the
//! caller's task: networks are never evaluated concurrently, so the
//! optimizer's `&mut` borrow of one network is the only access during
//! the call.

use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tokio_util::sync::CancellationToken;

use netmon_core::analyzer::NetworkAnalyzer;
use netmon_core::config::MonitorConfig;
use netmon_core::network::NetworkEntity;
use netmon_core::optimizer::NetworkOptimizer;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityStatus {
    /// Within thresholds; left untouched.
    Healthy,
    /// Sluggish; the optimizer was applied.
    Optimized,
}

/// Outcome for one network in one cycle. Metrics are post-cycle values.
#[derive(Debug, Clone, Serialize)]
pub struct EntityOutcome {
    pub name: String,
    pub status: EntityStatus,
    pub latency_ms: f64,
    pub packet_loss_percent: f64,
}

/// Summary of a single monitoring cycle.
#[derive(Debug, Clone, Serialize)]
pub struct CycleReport {
    /// 1-based cycle number since the monitor was created.
    pub cycle: u64,
    pub outcomes: Vec<EntityOutcome>,
    pub completed_at: DateTime<Utc>,
}

impl CycleReport {
    pub fn optimized_count(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| o.status == EntityStatus::Optimized)
            .count()
    }
}

pub struct NetworkMonitor {
    networks: Vec<NetworkEntity>,
    analyzer: NetworkAnalyzer,
    optimizer: NetworkOptimizer,
    cycle_interval: Duration,
    cycles: u64,
}

impl NetworkMonitor {
    pub fn new(config: MonitorConfig) -> Self {
        Self {
            networks: config.entities,
            analyzer: NetworkAnalyzer::new(config.thresholds),
            optimizer: NetworkOptimizer::new(config.improvement_factor),
            cycle_interval: config.cycle_interval,
            cycles: 0,
        }
    }

    /// Current state of the monitored networks, in evaluation order.
    pub fn entities(&self) -> &[NetworkEntity] {
        &self.networks
    }

    pub fn cycle_interval(&self) -> Duration {
        self.cycle_interval
    }

    /// Run one full pass over every network.
    pub fn run_cycle(&mut self) -> CycleReport {
        self.cycles += 1;
        tracing::info!(
            cycle = self.cycles,
            networks = self.networks.len(),
            "Monitoring networks",
        );

        let mut outcomes = Vec::with_capacity(self.networks.len());

        for network in &mut self.networks {
            let status = if self.analyzer.evaluate(network) {
                tracing::warn!(
                    network = %network.name,
                    latency_ms = network.latency_ms,
                    packet_loss_percent = network.packet_loss_percent,
                    "Network is sluggish, optimizing",
                );
                self.optimizer.apply(network);
                EntityStatus::Optimized
            } else {
                tracing::info!(network = %network.name, "Network is performing well");
                EntityStatus::Healthy
            };

            outcomes.push(EntityOutcome {
                name: network.name.clone(),
                status,
                latency_ms: network.latency_ms,
                packet_loss_percent: network.packet_loss_percent,
            });
        }

        CycleReport {
            cycle: self.cycles,
            outcomes,
            completed_at: Utc::now(),
        }
    }

    /// Run monitoring cycles until `cancel` is triggered.
    ///
    /// Cancellation is checked before every cycle and raced against the
    /// inter-cycle sleep, so shutdown never waits out a full interval.
    /// Returns the number of cycles completed by this call.
    pub async fn run(&mut self, cancel: CancellationToken) -> u64 {
        let thresholds = self.analyzer.thresholds();
        tracing::info!(
            networks = self.networks.len(),
            latency_threshold_ms = thresholds.latency_ms,
            packet_loss_threshold_percent = thresholds.packet_loss_percent,
            improvement_factor = self.optimizer.improvement_factor(),
            interval_secs = self.cycle_interval().as_secs_f64(),
            "Network monitor started",
        );

        let mut completed = 0;

        loop {
            if cancel.is_cancelled() {
                break;
            }

            let report = self.run_cycle();
            completed += 1;
            tracing::debug!(
                cycle = report.cycle,
                optimized = report.optimized_count(),
                "Cycle complete",
            );

            tokio::select! {
                _ = cancel.cancelled() => break,
                _ = tokio::time::sleep(self.cycle_interval) => {}
            }
        }

        tracing::info!(cycles = completed, "Network monitor stopping");
        completed
    }
}
