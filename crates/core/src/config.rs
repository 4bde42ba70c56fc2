//! Monitor configuration.
//!
//! Built once at startup and handed to the monitor by value. Loading from
//! the environment lives in `netmon-agent`; this module only holds the
//! shape, the defaults, and the structural checks.

use std::time::Duration;

use crate::analyzer::Thresholds;
use crate::error::CoreError;
use crate::network::{sample_networks, NetworkEntity};
use crate::optimizer::DEFAULT_IMPROVEMENT_FACTOR;

/// Default delay between monitoring cycles.
pub const DEFAULT_CYCLE_INTERVAL: Duration = Duration::from_secs(5);

#[derive(Debug, Clone)]
pub struct MonitorConfig {
    /// Networks to monitor, evaluated in this order every cycle.
    pub entities: Vec<NetworkEntity>,
    pub thresholds: Thresholds,
    /// Not range-checked; see [`crate::optimizer`].
    pub improvement_factor: f64,
    pub cycle_interval: Duration,
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self {
            entities: sample_networks(),
            thresholds: Thresholds::default(),
            improvement_factor: DEFAULT_IMPROVEMENT_FACTOR,
            cycle_interval: DEFAULT_CYCLE_INTERVAL,
        }
    }
}

impl MonitorConfig {
    /// Check the structural requirements the monitor relies on.
    ///
    /// The entity list must be non-empty and the cycle interval non-zero.
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.entities.is_empty() {
            return Err(CoreError::Validation(
                "at least one network must be configured".to_string(),
            ));
        }
        if self.cycle_interval.is_zero() {
            return Err(CoreError::Validation(
                "cycle interval must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}
