//! Live meter readings.

use serde::{Deserialize, Serialize};

use crate::power::Watts;

/// Payload of the current-power endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CurrentPower {
    pub current_power: Watts,
}

/// Most recent raw sample reported by the meter's sensor.
///
/// The sensor columns are nullable on the backend and arrive as `null` when a
/// sample is incomplete.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SensorReading {
    pub voltage: Option<f64>,
    pub current: Option<f64>,
    pub power: Option<f64>,
    /// Formatted by the backend (`%Y-%m-%d %H:%M:%S`); shown verbatim.
    pub reading_time: String,
}

fn sample_text(value: Option<f64>) -> String {
    value.map_or_else(|| "null".to_string(), |v| v.to_string())
}

impl SensorReading {
    /// One-line summary for the reading panel. Missing values render as `null`.
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "Voltage: {} V, Current: {} A, Power: {} W (at {})",
            sample_text(self.voltage),
            sample_text(self.current),
            sample_text(self.power),
            self.reading_time
        )
    }
}
