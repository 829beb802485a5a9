//! Signal-backed implementation of the view port.

use leptos::prelude::*;
use sensordash_app::ports::DashboardView;
use sensordash_domain::action::DeviceAction;
use sensordash_domain::date_options::DateOptions;
use sensordash_domain::error::DashboardError;
use sensordash_domain::liveness::{PingReport, ServiceStatus};
use sensordash_domain::reading::ChartPoint;

/// What the service status element shows.
#[derive(Debug, Clone, PartialEq)]
pub enum ServiceState {
    Unchecked,
    Checked(ServiceStatus),
    Failed(String),
}

/// Reactive state the components render. Copy, so every closure can hold one.
#[derive(Clone, Copy)]
pub struct SignalView {
    pub entry_status: RwSignal<String>,
    pub apply_enabled: RwSignal<bool>,
    pub options: RwSignal<DateOptions>,
    pub chart_visible: RwSignal<bool>,
    pub series_name: RwSignal<String>,
    pub series: RwSignal<Vec<ChartPoint>>,
    pub service: RwSignal<ServiceState>,
    pub action_status: RwSignal<Option<String>>,
}

impl SignalView {
    pub fn new(series_name: &str) -> Self {
        Self {
            entry_status: RwSignal::new(String::new()),
            apply_enabled: RwSignal::new(false),
            options: RwSignal::new(DateOptions::default()),
            chart_visible: RwSignal::new(false),
            series_name: RwSignal::new(series_name.to_string()),
            series: RwSignal::new(Vec::new()),
            service: RwSignal::new(ServiceState::Unchecked),
            action_status: RwSignal::new(None),
        }
    }
}

impl DashboardView for SignalView {
    fn set_entry_status(&self, text: &str) {
        self.entry_status.set(text.to_string());
    }

    fn set_apply_enabled(&self, enabled: bool) {
        self.apply_enabled.set(enabled);
    }

    fn set_date_options(&self, options: &DateOptions) {
        self.options.set(options.clone());
    }

    fn render_series(&self, name: &str, points: &[ChartPoint]) {
        self.chart_visible.set(true);
        self.series_name.set(name.to_string());
        self.series.set(points.to_vec());
    }

    fn set_service_status(&self, status: ServiceStatus, report: &PingReport) {
        for (device, device_status) in report.statuses() {
            leptos::logging::log!("{device}: {device_status}");
        }
        self.service.set(ServiceState::Checked(status));
    }

    fn set_service_error(&self, err: &DashboardError) {
        leptos::logging::warn!("{err}");
        self.service
            .set(ServiceState::Failed(format!("{}: {err}", err.kind())));
    }

    fn set_action_result(&self, action: DeviceAction, result: Result<&str, &DashboardError>) {
        let text = match result {
            Ok(text) => {
                leptos::logging::log!("{text}");
                format!("{}: {text}", action.label())
            }
            Err(err) => {
                leptos::logging::warn!("{err}");
                format!("{}: {}", action.label(), err.kind())
            }
        };
        self.action_status.set(Some(text));
    }
}
