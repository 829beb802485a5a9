//! Sensor API port — the HTTP endpoints the dashboard consumes.

use std::future::Future;
use std::sync::Arc;

use sensordash_domain::action::DeviceAction;
use sensordash_domain::error::DashboardError;
use sensordash_domain::filter::SelectedDate;
use sensordash_domain::liveness::PingReport;
use sensordash_domain::reading::Reading;

/// Read/command access to the sensor server.
///
/// Implementations map transport and decoding failures onto
/// [`DashboardError::NetworkFailure`] and [`DashboardError::ParseFailure`].
pub trait SensorApi {
    /// Trigger a device action and return the raw response text.
    fn trigger_action(
        &self,
        action: DeviceAction,
    ) -> impl Future<Output = Result<String, DashboardError>>;

    /// Raw timestamps of every day for which readings exist.
    fn available_dates(&self) -> impl Future<Output = Result<Vec<String>, DashboardError>>;

    /// All readings of `sensor` recorded on `date`.
    fn readings(
        &self,
        sensor: &str,
        date: SelectedDate,
    ) -> impl Future<Output = Result<Vec<Reading>, DashboardError>>;

    /// Reachability of every device.
    fn ping_all(&self) -> impl Future<Output = Result<PingReport, DashboardError>>;
}

impl<T: SensorApi> SensorApi for Arc<T> {
    fn trigger_action(
        &self,
        action: DeviceAction,
    ) -> impl Future<Output = Result<String, DashboardError>> {
        (**self).trigger_action(action)
    }

    fn available_dates(&self) -> impl Future<Output = Result<Vec<String>, DashboardError>> {
        (**self).available_dates()
    }

    fn readings(
        &self,
        sensor: &str,
        date: SelectedDate,
    ) -> impl Future<Output = Result<Vec<Reading>, DashboardError>> {
        (**self).readings(sensor, date)
    }

    fn ping_all(&self) -> impl Future<Output = Result<PingReport, DashboardError>> {
        (**self).ping_all()
    }
}
