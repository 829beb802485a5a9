//! Device actions triggered from the dashboard buttons.

use std::fmt;
use std::str::FromStr;

/// A fire-and-forget command sent to a device through the server.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeviceAction {
    /// Sound the buzzer on the air-quality device.
    Buzzer,
    /// Blink the LED on the temperature device.
    Led,
}

impl DeviceAction {
    pub const ALL: [Self; 2] = [Self::Buzzer, Self::Led];

    /// Server path that triggers this action.
    #[must_use]
    pub fn path(self) -> &'static str {
        match self {
            Self::Buzzer => "/device_actions/airquality",
            Self::Led => "/device_actions/temperature",
        }
    }

    /// Id of the button bound to this action.
    #[must_use]
    pub fn element_id(self) -> &'static str {
        match self {
            Self::Buzzer => "action-buzzer",
            Self::Led => "action-led",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Buzzer => "Buzzer",
            Self::Led => "LED",
        }
    }
}

impl fmt::Display for DeviceAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Buzzer => f.write_str("buzzer"),
            Self::Led => f.write_str("led"),
        }
    }
}

/// Returned when parsing an unknown action name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown device action {0:?} (expected \"buzzer\" or \"led\")")]
pub struct UnknownAction(pub String);

impl FromStr for DeviceAction {
    type Err = UnknownAction;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "buzzer" | "airquality" => Ok(Self::Buzzer),
            "led" | "temperature" => Ok(Self::Led),
            _ => Err(UnknownAction(s.to_string())),
        }
    }
}
