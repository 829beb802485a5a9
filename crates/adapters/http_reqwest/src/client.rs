//! `SensorApi` over `reqwest`.

use std::future::Future;

use reqwest::Client;
use sensordash_app::ports::SensorApi;
use sensordash_domain::action::DeviceAction;
use sensordash_domain::endpoint;
use sensordash_domain::error::DashboardError;
use sensordash_domain::filter::SelectedDate;
use sensordash_domain::liveness::PingReport;
use sensordash_domain::reading::Reading;
use serde::de::DeserializeOwned;

use crate::config::HttpConfig;
use crate::error::HttpError;

/// Cheap to clone; clones share the connection pool.
#[derive(Debug, Clone)]
pub struct HttpSensorApi {
    client: Client,
    base_url: String,
}

impl HttpSensorApi {
    /// Build a client for the server at `config.base_url`.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::InvalidBaseUrl`] if the base URL is not `http(s)`,
    /// or [`HttpError::Build`] if the TLS backend cannot be initialised.
    pub fn new(config: &HttpConfig) -> Result<Self, HttpError> {
        let base_url = config.base_url.trim_end_matches('/').to_string();
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(HttpError::InvalidBaseUrl(config.base_url.clone()));
        }
        let client = Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(HttpError::Build)?;
        Ok(Self { client, base_url })
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    async fn get_text(&self, path: &str) -> Result<String, HttpError> {
        let url = self.url(path);
        tracing::debug!(%url, "GET");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(HttpError::Request)?;

        let status = response.status();
        if !status.is_success() {
            return Err(HttpError::Status {
                status: status.as_u16(),
                body: response.text().await.unwrap_or_default(),
            });
        }

        response.text().await.map_err(HttpError::Request)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, DashboardError> {
        let body = self
            .get_text(path)
            .await
            .map_err(|err| err.into_domain(path))?;
        serde_json::from_str(&body).map_err(|err| HttpError::Decode(err).into_domain(path))
    }
}

impl SensorApi for HttpSensorApi {
    fn trigger_action(
        &self,
        action: DeviceAction,
    ) -> impl Future<Output = Result<String, DashboardError>> {
        let path = action.path();
        async move {
            self.get_text(path)
                .await
                .map_err(|err| err.into_domain(path))
        }
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
