//! Engine configuration

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration validation errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("machine roster must not be empty")]
    EmptyRoster,
    #[error("{0} must be greater than zero")]
    ZeroWindow(&'static str),
    #[error("reference machine {0} is not in the roster")]
    UnknownReferenceMachine(String),
}

/// Analytics engine configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Trailing synthetic history window in hours (7 days of hourly data)
    #[serde(default = "default_history_hours")]
    pub history_hours: u32,

    /// Lookback window for the efficiency trend in hours
    #[serde(default = "default_efficiency_window")]
    pub efficiency_window_hours: u32,

    /// Lookback window for maintenance trends in hours
    #[serde(default = "default_maintenance_window")]
    pub maintenance_window_hours: u32,

    /// Base daily demand in units
    #[serde(default = "default_base_demand")]
    pub base_demand: f64,

    /// Machine whose history backs the dashboard-level metrics
    #[serde(default = "default_reference_machine")]
    pub reference_machine: String,

    /// Machine watched by the maintenance insight
    #[serde(default = "default_watch_machine")]
    pub watch_machine: String,

    /// Machine roster reported by machine status queries
    #[serde(default = "default_machines")]
    pub machines: Vec<String>,
}

fn default_history_hours() -> u32 {
    168
}

fn default_efficiency_window() -> u32 {
    48
}

fn default_maintenance_window() -> u32 {
    72
}

fn default_base_demand() -> f64 {
    100.0
}

fn default_reference_machine() -> String {
    "CNC-001".to_string()
}

fn default_watch_machine() -> String {
    "LAT-002".to_string()
}

fn default_machines() -> Vec<String> {
    ["CNC-001", "CNC-002", "WLD-001", "WLD-002", "LAT-001", "LAT-002"]
        .into_iter()
        .map(str::to_string)
        .collect()
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            history_hours: default_history_hours(),
            efficiency_window_hours: default_efficiency_window(),
            maintenance_window_hours: default_maintenance_window(),
            base_demand: default_base_demand(),
            reference_machine: default_reference_machine(),
            watch_machine: default_watch_machine(),
            machines: default_machines(),
        }
    }
}

impl EngineConfig {
    /// Validate window sizes and roster consistency
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.machines.is_empty() {
            return Err(ConfigError::EmptyRoster);
        }
        if self.history_hours == 0 {
            return Err(ConfigError::ZeroWindow("history_hours"));
        }
        if self.efficiency_window_hours == 0 {
            return Err(ConfigError::ZeroWindow("efficiency_window_hours"));
        }
        if self.maintenance_window_hours == 0 {
            return Err(ConfigError::ZeroWindow("maintenance_window_hours"));
        }
        if !self.machines.contains(&self.reference_machine) {
            return Err(ConfigError::UnknownReferenceMachine(
                self.reference_machine.clone(),
            ));
        }
        Ok(())
    }
}
