//! Date filter service — builds the selector options from available dates.

use sensordash_domain::date_options::DateOptions;
use sensordash_domain::error::DashboardError;

use crate::ports::SensorApi;

pub struct DateFilterService<A> {
    api: A,
}

impl<A: SensorApi> DateFilterService<A> {
    pub fn new(api: A) -> Self {
        Self { api }
    }

    /// Fetch the available dates and build deduplicated selector options.
    ///
    /// Dates that do not parse are skipped and logged.
    ///
    /// # Errors
    ///
    /// Returns the [`DashboardError`] reported by the API.
    #[tracing::instrument(skip(self))]
    pub async fn load(&self) -> Result<DateOptions, DashboardError> {
        let dates = self.api.available_dates().await?;
        let options = DateOptions::from_raw(&dates);
        if options.skipped > 0 {
            tracing::warn!(
                skipped = options.skipped,
                total = dates.len(),
                "ignored unparseable dates"
            );
        }
        tracing::debug!(
            days = options.days.len(),
            months = options.months.len(),
            years = options.years.len(),
            "date filter options built"
        );
        Ok(options)
    }
}
