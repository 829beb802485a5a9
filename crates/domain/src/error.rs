//! Common error types used across the workspace.

/// Error kinds surfaced by the dashboard.
///
/// Each variant maps to a status-text element on the page; adapters convert
/// their transport-specific errors into one of these.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DashboardError {
    /// The request never produced a successful response (transport error,
    /// timeout, or non-2xx status).
    #[error("network failure on {path}: {reason}")]
    NetworkFailure { path: String, reason: String },

    /// The response body did not have the expected shape.
    #[error("failed to parse response from {path}: {reason}")]
    ParseFailure { path: String, reason: String },

    /// A host element the dashboard depends on is missing.
    #[error("element #{id} not found")]
    ElementNotFound { id: String },

    /// A data fetch was requested while the date filter is incomplete.
    #[error("date filter is incomplete")]
    InvalidSelection,
}

impl DashboardError {
    /// Build a [`NetworkFailure`](Self::NetworkFailure).
    pub fn network(path: impl Into<String>, reason: impl ToString) -> Self {
        Self::NetworkFailure {
            path: path.into(),
            reason: reason.to_string(),
        }
    }

    /// Build a [`ParseFailure`](Self::ParseFailure).
    pub fn parse(path: impl Into<String>, reason: impl ToString) -> Self {
        Self::ParseFailure {
            path: path.into(),
            reason: reason.to_string(),
        }
    }

    /// Build an [`ElementNotFound`](Self::ElementNotFound).
    pub fn element_not_found(id: impl Into<String>) -> Self {
        Self::ElementNotFound { id: id.into() }
    }

    /// Short label shown in front of the message on status lines.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::NetworkFailure { .. } => "Network error",
            Self::ParseFailure { .. } => "Invalid response",
            Self::ElementNotFound { .. } => "Page error",
            Self::InvalidSelection => "Selection error",
        }
    }
}
