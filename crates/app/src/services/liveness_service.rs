//! Liveness service — interprets the ping report.

use sensordash_domain::error::DashboardError;
use sensordash_domain::liveness::{PingReport, ServiceStatus};

use crate::ports::SensorApi;

/// Checks whether the monitored devices are reachable.
pub struct LivenessService<A> {
    api: A,
    primary_device: String,
}

impl<A: SensorApi> LivenessService<A> {
    pub fn new(api: A, primary_device: impl Into<String>) -> Self {
        Self {
            api,
            primary_device: primary_device.into(),
        }
    }

    /// Ping every device and return the primary device's status with the full report.
    ///
    /// # Errors
    ///
    /// Returns the [`DashboardError`] reported by the API.
    #[tracing::instrument(skip(self), fields(device = %self.primary_device))]
    pub async fn check(&self) -> Result<(ServiceStatus, PingReport), DashboardError> {
        let report = self.api.ping_all().await?;
        let status = report.status_of(&self.primary_device);
        for (device, device_status) in report.statuses() {
            tracing::debug!(device, status = %device_status, "ping result");
        }
        tracing::info!(%status, "liveness checked");
        Ok((status, report))
    }
}
