//! Liveness report returned by the ping endpoint.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Device whose status drives the dashboard's status indicator.
pub const PRIMARY_DEVICE: &str = "Temperature";

/// HTTP-status-like code meaning "reachable".
pub const UP_CODE: i32 = 200;

/// Device name → status code, as returned by `ping_all`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PingReport(BTreeMap<String, i32>);

impl PingReport {
    /// Status of `device`. Devices missing from the report are down.
    #[must_use]
    pub fn status_of(&self, device: &str) -> ServiceStatus {
        ServiceStatus::from_code(self.0.get(device).copied())
    }

    /// Every device in the report with its status, sorted by name.
    pub fn statuses(&self) -> impl Iterator<Item = (&str, ServiceStatus)> {
        self.0
            .iter()
            .map(|(name, code)| (name.as_str(), ServiceStatus::from_code(Some(*code))))
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(String, i32)> for PingReport {
    fn from_iter<T: IntoIterator<Item = (String, i32)>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Whether a device answered its ping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ServiceStatus {
    Up,
    #[default]
    Down,
}

impl ServiceStatus {
    #[must_use]
    pub fn from_code(code: Option<i32>) -> Self {
        if code == Some(UP_CODE) {
            Self::Up
        } else {
            Self::Down
        }
    }

    #[must_use]
    pub fn is_up(self) -> bool {
        matches!(self, Self::Up)
    }

    /// Text written to the status element.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Up => "Up",
            Self::Down => "Down",
        }
    }

    /// CSS class of the status text.
    #[must_use]
    pub fn text_class(self) -> &'static str {
        match self {
            Self::Up => "text-green",
            Self::Down => "text-red",
        }
    }

    /// CSS class of the animated indicator.
    #[must_use]
    pub fn indicator_class(self) -> &'static str {
        match self {
            Self::Up => "status-green",
            Self::Down => "status-red",
        }
    }
}

impl std::fmt::Display for ServiceStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
