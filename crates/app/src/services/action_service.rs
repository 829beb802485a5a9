//! Action service — fire-and-forget device commands.

use sensordash_domain::action::DeviceAction;
use sensordash_domain::error::DashboardError;

use crate::ports::SensorApi;

/// Sends device actions and logs the server's answer.
pub struct ActionService<A> {
    api: A,
}

impl<A: SensorApi> ActionService<A> {
    pub fn new(api: A) -> Self {
        Self { api }
    }

    /// Trigger `action` and return the raw response text.
    ///
    /// # Errors
    ///
    /// Returns the [`DashboardError`] reported by the API.
    #[tracing::instrument(skip(self))]
    pub async fn trigger(&self, action: DeviceAction) -> Result<String, DashboardError> {
        match self.api.trigger_action(action).await {
            Ok(text) => {
                tracing::info!(%action, response = %text, "device action sent");
                Ok(text)
            }
            Err(err) => {
                tracing::warn!(%action, error = %err, "device action failed");
                Err(err)
            }
        }
    }
}
