//! Threshold evaluation for network metrics.
//!
//! Pure logic: the analyzer never mutates the entity it inspects.

use serde::{Deserialize, Serialize};

use crate::network::NetworkEntity;

/// Default latency threshold in milliseconds.
pub const DEFAULT_LATENCY_THRESHOLD_MS: f64 = 100.0;

/// Default packet loss threshold in percent.
pub const DEFAULT_PACKET_LOSS_THRESHOLD_PERCENT: f64 = 1.0;

/// Upper bounds a healthy network must not exceed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Thresholds {
    pub latency_ms: f64,
    pub packet_loss_percent: f64,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            latency_ms: DEFAULT_LATENCY_THRESHOLD_MS,
            packet_loss_percent: DEFAULT_PACKET_LOSS_THRESHOLD_PERCENT,
        }
    }
}

/// Flags sluggish networks against a fixed set of [`Thresholds`].
#[derive(Debug, Clone)]
pub struct NetworkAnalyzer {
    thresholds: Thresholds,
}

impl NetworkAnalyzer {
    pub fn new(thresholds: Thresholds) -> Self {
        Self { thresholds }
    }

    pub fn thresholds(&self) -> &Thresholds {
        &self.thresholds
    }

    /// Returns `true` if the network is sluggish.
    ///
    /// A network is sluggish when either metric is strictly greater than
    /// its threshold. NaN compares false against everything, so a NaN
    /// metric never flags a network on its own.
    pub fn evaluate(&self, network: &NetworkEntity) -> bool {
        network.latency_ms > self.thresholds.latency_ms
            || network.packet_loss_percent > self.thresholds.packet_loss_percent
    }
}
