//! Agent configuration loaded from environment variables.
//!
//! | Env Var                                | Default             |
//! |----------------------------------------|---------------------|
//! | `NETMON_NETWORKS_FILE`                 | built-in samples    |
//! | `NETMON_LATENCY_THRESHOLD_MS`          | `100`               |
//! | `NETMON_PACKET_LOSS_THRESHOLD_PERCENT` | `1`                 |
//! | `NETMON_IMPROVEMENT_FACTOR`            | `0.2`               |
//! | `NETMON_CYCLE_INTERVAL_SECS`           | `5`                 |
//! | `NETMON_LOG_FORMAT`                    | `text`              |
//!
//! The networks file is a JSON array of
//! [`NetworkEntity`](netmon_core::network::NetworkEntity) objects.

use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;

use netmon_core::analyzer::Thresholds;
use netmon_core::config::MonitorConfig;
use netmon_core::error::CoreError;
use netmon_core::network::{sample_networks, NetworkEntity};

pub const ENV_NETWORKS_FILE: &str = "NETMON_NETWORKS_FILE";
pub const ENV_LATENCY_THRESHOLD: &str = "NETMON_LATENCY_THRESHOLD_MS";
pub const ENV_PACKET_LOSS_THRESHOLD: &str = "NETMON_PACKET_LOSS_THRESHOLD_PERCENT";
pub const ENV_IMPROVEMENT_FACTOR: &str = "NETMON_IMPROVEMENT_FACTOR";
pub const ENV_CYCLE_INTERVAL_SECS: &str = "NETMON_CYCLE_INTERVAL_SECS";
pub const ENV_LOG_FORMAT: &str = "NETMON_LOG_FORMAT";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{var} has invalid value '{value}'")]
    InvalidValue { var: &'static str, value: String },

    #[error("Failed to read networks file {}: {source}", path.display())]
    NetworksFile {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Malformed networks file {}: {source}", path.display())]
    NetworksJson {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error(transparent)]
    Core(#[from] CoreError),
}

/// Output format for the stdout log layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for LogFormat {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(()),
        }
    }
}

impl LogFormat {
    /// Read `NETMON_LOG_FORMAT`. Unset means text.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Resolve the log format using `lookup`. An unrecognised value is an
    /// error; the binary reports it once logging is up and falls back to
    /// text.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        match lookup(ENV_LOG_FORMAT) {
            Some(value) => value.parse().map_err(|_| ConfigError::InvalidValue {
                var: ENV_LOG_FORMAT,
                value,
            }),
            None => Ok(Self::default()),
        }
    }
}

/// Load and validate the monitor configuration from the process
/// environment.
pub fn from_env() -> Result<MonitorConfig, ConfigError> {
    from_lookup(|key| std::env::var(key).ok())
}

/// Load and validate the monitor configuration using `lookup` to resolve
/// variables. Unset variables take their defaults.
pub fn from_lookup<F>(lookup: F) -> Result<MonitorConfig, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let defaults = MonitorConfig::default();

    let entities = match lookup(ENV_NETWORKS_FILE) {
        Some(path) => load_networks(Path::new(&path))?,
        None => sample_networks(),
    };

    let thresholds = Thresholds {
        latency_ms: parse_var(
            &lookup,
            ENV_LATENCY_THRESHOLD,
            defaults.thresholds.latency_ms,
        )?,
        packet_loss_percent: parse_var(
            &lookup,
            ENV_PACKET_LOSS_THRESHOLD,
            defaults.thresholds.packet_loss_percent,
        )?,
    };

    let improvement_factor =
        parse_var(&lookup, ENV_IMPROVEMENT_FACTOR, defaults.improvement_factor)?;

    let interval_secs: u64 = parse_var(
        &lookup,
        ENV_CYCLE_INTERVAL_SECS,
        defaults.cycle_interval.as_secs(),
    )?;

    let config = MonitorConfig {
        entities,
        thresholds,
        improvement_factor,
        cycle_interval: Duration::from_secs(interval_secs),
    };
    config.validate()?;
    Ok(config)
}

/// Read a JSON array of networks from `path`.
pub fn load_networks(path: &Path) -> Result<Vec<NetworkEntity>, ConfigError> {
    let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::NetworksFile {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&raw).map_err(|source| ConfigError::NetworksJson {
        path: path.to_path_buf(),
        source,
    })
}

fn parse_var<F, T>(lookup: &F, var: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(var) {
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidValue { var, value }),
        None => Ok(default),
    }
}
