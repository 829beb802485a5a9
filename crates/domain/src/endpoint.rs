//! Paths of the server endpoints the dashboard reads from.

use crate::filter::SelectedDate;

/// Distinct dates for which readings exist.
pub const DATES: &str = "device_data_vars/date";

/// Reachability of every device.
pub const PING_ALL: &str = "ping_all";

/// Readings of `sensor` on the given calendar day.
#[must_use]
pub fn readings(sensor: &str, date: SelectedDate) -> String {
    format!(
        "device_data/{sensor}/{}/{}/{}",
        date.year, date.month, date.day
    )
}
