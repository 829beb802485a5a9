//! View port — the page elements the controller writes to.
//!
//! Every method is synchronous and infallible from the controller's point of
//! view; a view that cannot find its element logs
//! [`DashboardError::ElementNotFound`] itself.

use sensordash_domain::action::DeviceAction;
use sensordash_domain::date_options::DateOptions;
use sensordash_domain::error::DashboardError;
use sensordash_domain::liveness::{PingReport, ServiceStatus};
use sensordash_domain::reading::ChartPoint;

/// Output surface of the dashboard.
pub trait DashboardView {
    /// Replace the text of the entry-count / progress line. Empty clears it.
    fn set_entry_status(&self, text: &str);

    /// Enable or disable the filter apply button.
    fn set_apply_enabled(&self, enabled: bool);

    /// Append the options for the three date selectors.
    fn set_date_options(&self, options: &DateOptions);

    /// Unhide the chart and replace its single series.
    fn render_series(&self, name: &str, points: &[ChartPoint]);

    /// Show the status of the primary device; `report` carries every device.
    fn set_service_status(&self, status: ServiceStatus, report: &PingReport);

    /// Show an error on the service status element.
    fn set_service_error(&self, err: &DashboardError);

    /// Show the outcome of a device action.
    fn set_action_result(&self, action: DeviceAction, result: Result<&str, &DashboardError>);
}
