//! HTTP adapter error types.

use sensordash_domain::error::DashboardError;

/// Errors specific to the reqwest adapter.
#[derive(Debug, thiserror::Error)]
pub enum HttpError {
    /// The client could not be built.
    #[error("failed to build HTTP client")]
    Build(#[source] reqwest::Error),

    /// The base URL is not an absolute `http(s)` URL.
    #[error("invalid base url {0:?}")]
    InvalidBaseUrl(String),

    /// Transport failure or timeout.
    #[error("request failed")]
    Request(#[source] reqwest::Error),

    /// The server answered with a non-2xx status.
    #[error("HTTP {status}: {body}")]
    Status { status: u16, body: String },

    /// The body was not the expected JSON.
    #[error("unexpected response body")]
    Decode(#[source] serde_json::Error),
}

impl HttpError {
    /// Convert into a [`DashboardError`] for the request on `path`.
    pub fn into_domain(self, path: &str) -> DashboardError {
        match self {
            Self::Decode(err) => DashboardError::parse(path, err),
            Self::Request(err) if err.is_timeout() => DashboardError::network(path, "timed out"),
            Self::Request(err) => DashboardError::network(path, error_chain(&err)),
            other => DashboardError::network(path, other),
        }
    }
}

/// Render an error with its sources, `reqwest` hides the useful part in them.
fn error_chain(err: &dyn std::error::Error) -> String {
    let mut text = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        text.push_str(": ");
        text.push_str(&cause.to_string());
        source = cause.source();
    }
    text
}
