//! Reading service — fetches one day of readings and reshapes them for the chart.

use sensordash_domain::error::DashboardError;
use sensordash_domain::filter::SelectedDate;
use sensordash_domain::reading::{Reading, Reshaped, ValidityRule, reshape};

use crate::ports::SensorApi;

pub struct ReadingService<A> {
    api: A,
    sensor: String,
    rule: ValidityRule,
}

impl<A: SensorApi> ReadingService<A> {
    pub fn new(api: A, sensor: impl Into<String>, rule: ValidityRule) -> Self {
        Self {
            api,
            sensor: sensor.into(),
            rule,
        }
    }

    /// Fetch every reading of the configured sensor on `date`.
    ///
    /// # Errors
    ///
    /// Returns the [`DashboardError`] reported by the API.
    #[tracing::instrument(skip(self), fields(sensor = %self.sensor))]
    pub async fn fetch(&self, date: SelectedDate) -> Result<Vec<Reading>, DashboardError> {
        let readings = self.api.readings(&self.sensor, date).await?;
        tracing::debug!(count = readings.len(), "readings fetched");
        Ok(readings)
    }

    /// Drop invalid readings and convert the rest to chart points.
    #[must_use]
    pub fn reshape(&self, readings: &[Reading]) -> Reshaped {
        let out = reshape(readings, &self.rule);
        if out.unparseable > 0 {
            tracing::warn!(
                unparseable = out.unparseable,
                "dropped readings with invalid timestamps"
            );
        }
        tracing::debug!(
            points = out.points.len(),
            rejected = out.rejected,
            "readings reshaped"
        );
        out
    }
}
