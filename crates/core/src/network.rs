//! Network entity model.

use serde::{Deserialize, Serialize};

/// A monitored network and its latest performance metrics.
///
/// Plain data: nothing here validates the values. The zero clamp is
/// enforced by [`NetworkOptimizer`](crate::optimizer::NetworkOptimizer).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetworkEntity {
    pub name: String,
    pub latency_ms: f64,
    pub packet_loss_percent: f64,
    /// Recorded but never read by the analyzer or optimizer.
    #[serde(default)]
    pub bandwidth_mbps: f64,
}

impl NetworkEntity {
    pub fn new(
        name: impl Into<String>,
        latency_ms: f64,
        packet_loss_percent: f64,
        bandwidth_mbps: f64,
    ) -> Self {
        Self {
            name: name.into(),
            latency_ms,
            packet_loss_percent,
            bandwidth_mbps,
        }
    }
}

/// Seed networks used when no networks file is configured.
pub fn sample_networks() -> Vec<NetworkEntity> {
    vec![
        NetworkEntity::new("Office LAN", 120.0, 2.0, 100.0),
        NetworkEntity::new("Home WiFi", 300.0, 5.0, 50.0),
    ]
}
