//! In-memory fakes of the ports, shared by the unit tests.

use std::future::Future;
use std::sync::{Arc, Mutex};

use sensordash_domain::action::DeviceAction;
use sensordash_domain::date_options::DateOptions;
use sensordash_domain::endpoint;
use sensordash_domain::error::DashboardError;
use sensordash_domain::filter::SelectedDate;
use sensordash_domain::liveness::{PingReport, ServiceStatus};
use sensordash_domain::reading::{ChartPoint, Reading};
use tokio::sync::Notify;

use crate::ports::{DashboardView, SensorApi};

/// Scripted [`SensorApi`]. Every call is recorded by path.
pub struct FakeApi {
    action_response: Mutex<String>,
    dates: Mutex<Vec<String>>,
    readings: Mutex<Vec<Reading>>,
    ping: Mutex<PingReport>,
    failure: Mutex<Option<DashboardError>>,
    gate: Mutex<Option<Arc<Notify>>>,
    calls: Mutex<Vec<String>>,
}

impl FakeApi {
    pub fn new() -> Self {
        Self {
            action_response: Mutex::new("Executed".to_string()),
            dates: Mutex::new(Vec::new()),
            readings: Mutex::new(Vec::new()),
            ping: Mutex::new(PingReport::default()),
            failure: Mutex::new(None),
            gate: Mutex::new(None),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn set_action_response(&self, text: &str) {
        *self.action_response.lock().unwrap() = text.to_string();
    }

    pub fn set_dates(&self, dates: &[&str]) {
        *self.dates.lock().unwrap() = dates.iter().map(ToString::to_string).collect();
    }

    pub fn set_readings(&self, readings: Vec<Reading>) {
        *self.readings.lock().unwrap() = readings;
    }

    pub fn set_ping(&self, report: PingReport) {
        *self.ping.lock().unwrap() = report;
    }

    /// Make every following call fail with `err`.
    pub fn fail_with(&self, err: DashboardError) {
        *self.failure.lock().unwrap() = Some(err);
    }

    pub fn recover(&self) {
        *self.failure.lock().unwrap() = None;
    }

    /// Hold every following readings call until the returned [`Notify`] fires.
    pub fn gate_readings(&self) -> Arc<Notify> {
        let notify = Arc::new(Notify::new());
        *self.gate.lock().unwrap() = Some(notify.clone());
        notify
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn respond<T>(&self, path: String, value: T) -> Result<T, DashboardError> {
        self.calls.lock().unwrap().push(path);
        match self.failure.lock().unwrap().clone() {
            Some(err) => Err(err),
            None => Ok(value),
        }
    }
}

impl SensorApi for FakeApi {
    fn trigger_action(
        &self,
        action: DeviceAction,
    ) -> impl Future<Output = Result<String, DashboardError>> {
        let text = self.action_response.lock().unwrap().clone();
        let result = self.respond(action.path().to_string(), text);
        async move { result }
    }

    fn available_dates(&self) -> impl Future<Output = Result<Vec<String>, DashboardError>> {
        let dates = self.dates.lock().unwrap().clone();
        let result = self.respond(endpoint::DATES.to_string(), dates);
        async move { result }
    }

    fn readings(
        &self,
        sensor: &str,
        date: SelectedDate,
    ) -> impl Future<Output = Result<Vec<Reading>, DashboardError>> {
        let readings = self.readings.lock().unwrap().clone();
        let result = self.respond(endpoint::readings(sensor, date), readings);
        let gate = self.gate.lock().unwrap().clone();
        async move {
            if let Some(gate) = gate {
                gate.notified().await;
            }
            result
        }
    }

    fn ping_all(&self) -> impl Future<Output = Result<PingReport, DashboardError>> {
        let report = self.ping.lock().unwrap().clone();
        let result = self.respond(endpoint::PING_ALL.to_string(), report);
        async move { result }
    }
}

/// One call made on the [`RecordingView`].
#[derive(Debug, Clone, PartialEq)]
pub enum ViewCall {
    EntryStatus(String),
    ApplyEnabled(bool),
    DateOptions(DateOptions),
    Series(String, Vec<ChartPoint>),
    ServiceStatus(ServiceStatus),
    ServiceError(DashboardError),
    ActionResult(DeviceAction, Result<String, DashboardError>),
}

/// [`DashboardView`] that records every call in order.
#[derive(Default)]
pub struct RecordingView {
    calls: Mutex<Vec<ViewCall>>,
}

impl RecordingView {
    pub fn calls(&self) -> Vec<ViewCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn entry_statuses(&self) -> Vec<String> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                ViewCall::EntryStatus(text) => Some(text),
                _ => None,
            })
            .collect()
    }

    /// Last value written to the apply button, if any.
    pub fn apply_enabled(&self) -> Option<bool> {
        self.calls().into_iter().rev().find_map(|call| match call {
            ViewCall::ApplyEnabled(enabled) => Some(enabled),
            _ => None,
        })
    }

    pub fn series(&self) -> Vec<(String, Vec<ChartPoint>)> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                ViewCall::Series(name, points) => Some((name, points)),
                _ => None,
            })
            .collect()
    }

    fn push(&self, call: ViewCall) {
        self.calls.lock().unwrap().push(call);
    }
}

impl DashboardView for RecordingView {
    fn set_entry_status(&self, text: &str) {
        self.push(ViewCall::EntryStatus(text.to_string()));
    }

    fn set_apply_enabled(&self, enabled: bool) {
        self.push(ViewCall::ApplyEnabled(enabled));
    }

    fn set_date_options(&self, options: &DateOptions) {
        self.push(ViewCall::DateOptions(options.clone()));
    }

    fn render_series(&self, name: &str, points: &[ChartPoint]) {
        self.push(ViewCall::Series(name.to_string(), points.to_vec()));
    }

    fn set_service_status(&self, status: ServiceStatus, _report: &PingReport) {
        self.push(ViewCall::ServiceStatus(status));
    }

    fn set_service_error(&self, err: &DashboardError) {
        self.push(ViewCall::ServiceError(err.clone()));
    }

    fn set_action_result(&self, action: DeviceAction, result: Result<&str, &DashboardError>) {
        self.push(ViewCall::ActionResult(
            action,
            result.map(ToString::to_string).map_err(Clone::clone),
        ));
    }
}
