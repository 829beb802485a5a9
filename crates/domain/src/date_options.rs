//! Option lists for the day / month / year selectors.
//!
//! Built from the list of dates for which the server holds readings. Each
//! calendar field is deduplicated on its own and keeps the order in which
//! values first appear.

use std::collections::HashSet;

use chrono::Datelike;
use serde::Serialize;

use crate::time::{Timestamp, parse_timestamp};

/// English month names, indexed by `month - 1`.
pub const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// A single `<option>` entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

impl SelectOption {
    fn same(text: String) -> Self {
        Self {
            value: text.clone(),
            label: text,
        }
    }
}

/// Deduplicated options for the three date selectors.
///
/// The placeholder option is not included; it belongs to the page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DateOptions {
    pub days: Vec<SelectOption>,
    pub months: Vec<SelectOption>,
    pub years: Vec<SelectOption>,
    /// Input entries that were not valid timestamps.
    #[serde(skip)]
    pub skipped: usize,
}

impl DateOptions {
    /// Build options from parsed timestamps, using UTC calendar fields.
    #[must_use]
    pub fn from_dates<'a>(dates: impl IntoIterator<Item = &'a Timestamp>) -> Self {
        let mut out = Self::default();
        let mut seen_days = HashSet::new();
        let mut seen_months = HashSet::new();
        let mut seen_years = HashSet::new();

        for date in dates {
            let day = date.day();
            if seen_days.insert(day) {
                out.days.push(SelectOption::same(day.to_string()));
            }
            let month = date.month();
            if seen_months.insert(month) {
                out.months.push(SelectOption {
                    value: month.to_string(),
                    label: MONTH_NAMES[month as usize - 1].to_string(),
                });
            }
            let year = date.year();
            if seen_years.insert(year) {
                out.years.push(SelectOption::same(year.to_string()));
            }
        }
        out
    }

    /// Build options from the raw strings returned by the dates endpoint.
    ///
    /// Entries that do not parse are counted in [`skipped`](Self::skipped).
    #[must_use]
    pub fn from_raw<S: AsRef<str>>(dates: &[S]) -> Self {
        let parsed: Vec<Timestamp> = dates
            .iter()
            .filter_map(|raw| parse_timestamp(raw.as_ref()))
            .collect();
        let mut out = Self::from_dates(&parsed);
        out.skipped = dates.len() - parsed.len();
        out
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.days.is_empty() && self.months.is_empty() && self.years.is_empty()
    }
}
