//! HTTP API client wrapping `gloo-net` for calls to the sensor server.

use std::future::Future;
use std::time::Duration;

use gloo_net::http::{Request, Response};
use sensordash_app::ports::{SensorApi, Sleeper};
use sensordash_domain::action::DeviceAction;
use sensordash_domain::endpoint;
use sensordash_domain::error::DashboardError;
use sensordash_domain::filter::SelectedDate;
use sensordash_domain::liveness::PingReport;
use sensordash_domain::reading::Reading;
use serde::de::DeserializeOwned;

/// [`SensorApi`] for the browser.
///
/// With an empty base, paths are requested exactly as given, so relative
/// paths resolve against the page URL.
#[derive(Debug, Clone, Default)]
pub struct GlooSensorApi {
    base: String,
}

impl GlooSensorApi {
    pub fn new(base: impl Into<String>) -> Self {
        let base: String = base.into();
        Self {
            base: base.trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        if self.base.is_empty() {
            path.to_string()
        } else {
            format!("{}/{}", self.base, path.trim_start_matches('/'))
        }
    }

    async fn get_text(&self, path: &str) -> Result<String, DashboardError> {
        let resp = Request::get(&self.url(path))
            .send()
            .await
            .map_err(|err| DashboardError::network(path, err))?;
        let resp = check_response(path, resp).await?;
        resp.text()
            .await
            .map_err(|err| DashboardError::network(path, err))
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, DashboardError> {
        let body = self.get_text(path).await?;
        serde_json::from_str(&body).map_err(|err| DashboardError::parse(path, err))
    }
}

/// Check the HTTP response status and extract an error if non-2xx.
async fn check_response(path: &str, resp: Response) -> Result<Response, DashboardError> {
    if resp.ok() {
        return Ok(resp);
    }
    let status = resp.status();
    let body = resp.text().await.unwrap_or_default();
    Err(DashboardError::network(path, format!("HTTP {status}: {body}")))
}

impl SensorApi for GlooSensorApi {
    fn trigger_action(
        &self,
        action: DeviceAction,
    ) -> impl Future<Output = Result<String, DashboardError>> {
        self.get_text(action.path())
    }

    fn available_dates(&self) -> impl Future<Output = Result<Vec<String>, DashboardError>> {
        self.get_json(endpoint::DATES)
    }

    fn readings(
        &self,
        sensor: &str,
        date: SelectedDate,
    ) -> impl Future<Output = Result<Vec<Reading>, DashboardError>> {
        let path = endpoint::readings(sensor, date);
        async move { self.get_json(&path).await }
    }

    fn ping_all(&self) -> impl Future<Output = Result<PingReport, DashboardError>> {
        self.get_json(endpoint::PING_ALL)
    }
}

/// [`Sleeper`] backed by `setTimeout`.
pub struct GlooSleeper;

impl Sleeper for GlooSleeper {
    fn sleep(&self, duration: Duration) -> impl Future<Output = ()> {
        let millis = u32::try_from(duration.as_millis()).unwrap_or(u32::MAX);
        gloo_timers::future::TimeoutFuture::new(millis)
    }
}
