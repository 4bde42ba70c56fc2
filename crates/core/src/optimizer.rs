//! Multiplicative metric correction.
//!
//! [`NetworkOptimizer`] shrinks a network's latency and packet loss by a
//! fixed fraction and clamps both at zero. The factor is not validated:
//! a negative factor grows the metrics and a factor above one drives them
//! to zero in a single step.

use crate::network::NetworkEntity;

/// Default fraction removed from each metric per optimization.
pub const DEFAULT_IMPROVEMENT_FACTOR: f64 = 0.2;

/// Returns `true` if `factor` lies in `[0, 1)`.
///
/// Informational only; [`NetworkOptimizer`] accepts any factor.
pub fn factor_in_unit_range(factor: f64) -> bool {
    (0.0..1.0).contains(&factor)
}

#[derive(Debug, Clone)]
pub struct NetworkOptimizer {
    improvement_factor: f64,
}

impl NetworkOptimizer {
    pub fn new(improvement_factor: f64) -> Self {
        Self { improvement_factor }
    }

    pub fn improvement_factor(&self) -> f64 {
        self.improvement_factor
    }

    /// Reduce latency and packet loss in place, then log the result.
    ///
    /// After this call both metrics are `>= 0` (unless the input was NaN).
    pub fn apply(&self, network: &mut NetworkEntity) {
        network.latency_ms = reduce(network.latency_ms, self.improvement_factor);
        network.packet_loss_percent =
            reduce(network.packet_loss_percent, self.improvement_factor);

        let latency = format!("{:.2}", network.latency_ms);
        let packet_loss = format!("{:.2}", network.packet_loss_percent);
        tracing::info!(
            network = %network.name,
            latency_ms = %latency,
            packet_loss_percent = %packet_loss,
            "Network optimized",
        );
    }
}

fn reduce(value: f64, factor: f64) -> f64 {
    let reduced = value - value * factor;
    if reduced < 0.0 {
        0.0
    } else {
        reduced
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < EPSILON,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn office_lan_scenario() {
        let mut net = NetworkEntity::new("Office LAN", 120.0, 2.0, 100.0);
        NetworkOptimizer::new(0.2).apply(&mut net);
        assert_close(net.latency_ms, 96.0);
        assert_close(net.packet_loss_percent, 1.6);
        assert_eq!(format!("{:.2}", net.latency_ms), "96.00");
        assert_eq!(format!("{:.2}", net.packet_loss_percent), "1.60");
    }

    #[test]
    fn home_wifi_scenario() {
        let mut net = NetworkEntity::new("Home WiFi", 300.0, 5.0, 50.0);
        NetworkOptimizer::new(0.2).apply(&mut net);
        assert_close(net.latency_ms, 240.0);
        assert_close(net.packet_loss_percent, 4.0);
    }

    #[test]
    fn matches_scaled_value_for_unit_range_factors() {
        for factor in [0.0, 0.1, 0.25, 0.5, 0.9, 0.999] {
            let mut net = NetworkEntity::new("n", 250.0, 7.5, 10.0);
            NetworkOptimizer::new(factor).apply(&mut net);
            assert_close(net.latency_ms, 250.0 * (1.0 - factor));
            assert_close(net.packet_loss_percent, 7.5 * (1.0 - factor));
        }
    }

    #[test]
    fn bandwidth_untouched() {
        let mut net = NetworkEntity::new("n", 250.0, 7.5, 42.0);
        NetworkOptimizer::new(0.5).apply(&mut net);
        assert_eq!(net.bandwidth_mbps, 42.0);
    }

    #[test]
    fn repeated_application_converges_without_going_negative() {
        let optimizer = NetworkOptimizer::new(0.2);
        let mut net = NetworkEntity::new("n", 300.0, 5.0, 0.0);
        let mut prev = (net.latency_ms, net.packet_loss_percent);

        for _ in 0..200 {
            optimizer.apply(&mut net);
            assert!(net.latency_ms >= 0.0 && net.packet_loss_percent >= 0.0);
            assert!(net.latency_ms <= prev.0);
            assert!(net.packet_loss_percent <= prev.1);
            prev = (net.latency_ms, net.packet_loss_percent);
        }

        assert!(net.latency_ms < 1e-15);
        assert!(net.packet_loss_percent < 1e-15);
    }

    #[test]
    fn negative_starting_value_clamps_to_zero() {
        let mut net = NetworkEntity::new("n", -10.0, -1.0, 0.0);
        NetworkOptimizer::new(0.2).apply(&mut net);
        assert_eq!(net.latency_ms, 0.0);
        assert_eq!(net.packet_loss_percent, 0.0);
    }

    #[test]
    fn factor_of_one_zeroes_metrics() {
        let mut net = NetworkEntity::new("n", 120.0, 2.0, 0.0);
        NetworkOptimizer::new(1.0).apply(&mut net);
        assert_eq!(net.latency_ms, 0.0);
        assert_eq!(net.packet_loss_percent, 0.0);
    }

    #[test]
    fn factor_above_one_clamps_to_zero() {
        let mut net = NetworkEntity::new("n", 120.0, 2.0, 0.0);
        NetworkOptimizer::new(1.5).apply(&mut net);
        assert_eq!(net.latency_ms, 0.0);
        assert_eq!(net.packet_loss_percent, 0.0);
    }

    /// Negative factors are not guarded against: metrics grow.
    #[test]
    fn negative_factor_increases_metrics() {
        let mut net = NetworkEntity::new("n", 100.0, 2.0, 0.0);
        NetworkOptimizer::new(-0.1).apply(&mut net);
        assert_eq!(format!("{:.2}", net.latency_ms), "110.00");
        assert_eq!(format!("{:.2}", net.packet_loss_percent), "2.20");
    }

    #[test]
    fn factor_is_stored_unvalidated() {
        assert_eq!(NetworkOptimizer::new(0.2).improvement_factor(), 0.2);
        assert_eq!(NetworkOptimizer::new(-0.1).improvement_factor(), -0.1);
    }

    #[test]
    fn unit_range_check() {
        assert!(factor_in_unit_range(0.0));
        assert!(factor_in_unit_range(0.2));
        assert!(!factor_in_unit_range(1.0));
        assert!(!factor_in_unit_range(-0.1));
        assert!(!factor_in_unit_range(f64::NAN));
    }
}
