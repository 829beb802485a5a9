//! Date filter selection and its complete/incomplete state machine.

use std::fmt;

use serde::{Deserialize, Serialize};

/// One of the three date selectors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Day,
    Month,
    Year,
}

impl Field {
    /// Sentinel value carried by the selector's placeholder option.
    #[must_use]
    pub fn placeholder(self) -> &'static str {
        match self {
            Self::Day => "day",
            Self::Month => "month",
            Self::Year => "year",
        }
    }

    /// Id of the `<select>` element bound to this field.
    #[must_use]
    pub fn element_id(self) -> &'static str {
        match self {
            Self::Day => "sel-day",
            Self::Month => "sel-month",
            Self::Year => "sel-year",
        }
    }
}

/// Whether the filter names a full calendar date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FilterState {
    /// At least one selector still shows its placeholder.
    #[default]
    Incomplete,
    /// Day, month and year are all set.
    Complete,
}

impl FilterState {
    #[must_use]
    pub fn is_complete(self) -> bool {
        matches!(self, Self::Complete)
    }
}

/// A fully specified calendar date chosen through the filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectedDate {
    pub year: i32,
    pub month: u32,
    pub day: u32,
}

impl fmt::Display for SelectedDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

/// Current value of the three selectors. `None` means the placeholder is selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FilterSelection {
    pub day: Option<u32>,
    pub month: Option<u32>,
    pub year: Option<i32>,
}

impl FilterSelection {
    /// Build a selection from the raw `<select>` values.
    #[must_use]
    pub fn from_raw(day: &str, month: &str, year: &str) -> Self {
        let mut selection = Self::default();
        selection.set(Field::Day, day);
        selection.set(Field::Month, month);
        selection.set(Field::Year, year);
        selection
    }

    /// Update one selector from its raw value.
    ///
    /// The placeholder sentinel, an empty string, or anything that is not a
    /// number in the field's range resets the field to unset.
    pub fn set(&mut self, field: Field, raw: &str) {
        let raw = raw.trim();
        let parsed = if raw == field.placeholder() {
            None
        } else {
            Some(raw)
        };
        match field {
            Field::Day => {
                self.day = parsed
                    .and_then(|v| v.parse().ok())
                    .filter(|d| (1..=31).contains(d));
            }
            Field::Month => {
                self.month = parsed
                    .and_then(|v| v.parse().ok())
                    .filter(|m| (1..=12).contains(m));
            }
            Field::Year => self.year = parsed.and_then(|v| v.parse().ok()),
        }
    }

    /// Raw value a selector should display for this selection.
    #[must_use]
    pub fn raw(&self, field: Field) -> String {
        let value = match field {
            Field::Day => self.day.map(|v| v.to_string()),
            Field::Month => self.month.map(|v| v.to_string()),
            Field::Year => self.year.map(|v| v.to_string()),
        };
        value.unwrap_or_else(|| field.placeholder().to_string())
    }

    #[must_use]
    pub fn state(&self) -> FilterState {
        if self.date().is_some() {
            FilterState::Complete
        } else {
            FilterState::Incomplete
        }
    }

    /// The chosen date, when all three selectors are set.
    #[must_use]
    pub fn date(&self) -> Option<SelectedDate> {
        Some(SelectedDate {
            year: self.year?,
            month: self.month?,
            day: self.day?,
        })
    }
}
