//! Dashboard behaviour settings shared by every front end.

use std::time::Duration;

use sensordash_domain::liveness::PRIMARY_DEVICE;
use sensordash_domain::reading::ValidityRule;
use serde::Deserialize;

/// Settings for the controller and its scheduler.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// Seconds between automatic re-fetches of the selected day.
    pub refresh_interval_secs: u64,
    /// Seconds between chart redraws.
    pub render_interval_secs: u64,
    /// Sensor id used in the readings path.
    pub sensor: String,
    /// Name of the single chart series.
    pub series_name: String,
    /// Device whose ping status drives the status indicator.
    pub primary_device: String,
    /// Which readings count as sensor error codes.
    pub validity: ValidityRule,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            refresh_interval_secs: 50,
            render_interval_secs: 10,
            sensor: "temperature".to_string(),
            series_name: "Temperature".to_string(),
            primary_device: PRIMARY_DEVICE.to_string(),
            validity: ValidityRule::default(),
        }
    }
}

impl DashboardConfig {
    #[must_use]
    pub fn refresh_interval(&self) -> Duration {
        Duration::from_secs(self.refresh_interval_secs)
    }

    #[must_use]
    pub fn render_interval(&self) -> Duration {
        Duration::from_secs(self.render_interval_secs)
    }

    /// Check the settings can drive a scheduler.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidConfig`] when an interval is zero or a name is empty.
    pub fn validate(&self) -> Result<(), InvalidConfig> {
        if self.refresh_interval_secs == 0 {
            return Err(InvalidConfig::ZeroInterval("refresh_interval_secs"));
        }
        if self.render_interval_secs == 0 {
            return Err(InvalidConfig::ZeroInterval("render_interval_secs"));
        }
        if self.sensor.trim().is_empty() {
            return Err(InvalidConfig::Empty("sensor"));
        }
        if self.series_name.trim().is_empty() {
            return Err(InvalidConfig::Empty("series_name"));
        }
        Ok(())
    }
}

/// Semantic validation failure of a [`DashboardConfig`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidConfig {
    #[error("{0} must be non-zero")]
    ZeroInterval(&'static str),
    #[error("{0} must not be empty")]
    Empty(&'static str),
}
