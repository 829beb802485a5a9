//! Sensor readings and the chart points derived from them.

use serde::{Deserialize, Serialize};

use crate::time::parse_epoch_millis;

/// A single sensor observation as served by the data endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reading {
    /// RFC 3339 timestamp of the observation.
    pub date_time: String,
    pub value: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub device: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sensor: Option<String>,
}

impl Reading {
    /// Create a reading with no device or sensor tag.
    pub fn new(date_time: impl Into<String>, value: f64) -> Self {
        Self {
            date_time: date_time.into(),
            value,
            device: None,
            sensor: None,
        }
    }
}

/// A `{x, y}` pair consumed by the chart, `x` in epoch milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartPoint {
    pub x: i64,
    pub y: f64,
}

/// Rule deciding which readings are sensor error codes rather than data.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidityRule {
    /// Readings strictly above this value are dropped.
    pub max_valid_value: f64,
    /// Readings exactly equal to this value are dropped.
    pub error_code: f64,
}

impl Default for ValidityRule {
    fn default() -> Self {
        Self {
            max_valid_value: 2000.0,
            error_code: 1023.0,
        }
    }
}

impl ValidityRule {
    /// Whether `value` is a real measurement.
    #[must_use]
    #[allow(clippy::float_cmp)]
    pub fn accepts(&self, value: f64) -> bool {
        !(value > self.max_valid_value || value == self.error_code)
    }
}

/// Outcome of turning a batch of readings into chart points.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Reshaped {
    /// Points in the order the readings arrived.
    pub points: Vec<ChartPoint>,
    /// Readings dropped by the [`ValidityRule`].
    pub rejected: usize,
    /// Readings whose timestamp could not be parsed.
    pub unparseable: usize,
}

impl Reshaped {
    /// Total number of readings that were looked at.
    #[must_use]
    pub fn total(&self) -> usize {
        self.points.len() + self.rejected + self.unparseable
    }
}

/// Filter out invalid readings and map the rest to [`ChartPoint`]s.
#[must_use]
pub fn reshape(readings: &[Reading], rule: &ValidityRule) -> Reshaped {
    let mut out = Reshaped {
        points: Vec::with_capacity(readings.len()),
        ..Reshaped::default()
    };
    for reading in readings {
        if !rule.accepts(reading.value) {
            out.rejected += 1;
            continue;
        }
        match parse_epoch_millis(&reading.date_time) {
            Some(x) => out.points.push(ChartPoint { x, y: reading.value }),
            None => out.unparseable += 1,
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    const JAN_1_MS: i64 = 1_672_531_200_000;

    #[test]
    fn should_drop_values_above_threshold() {
        let rule = ValidityRule::default();
        assert!(rule.accepts(2000.0));
        assert!(!rule.accepts(2000.5));
        assert!(!rule.accepts(65535.0));
    }

    #[test]
    fn should_drop_error_code() {
        let rule = ValidityRule::default();
        assert!(!rule.accepts(1023.0));
        assert!(rule.accepts(1022.0));
        assert!(rule.accepts(1023.5));
    }

    #[test]
    fn should_keep_single_valid_point_from_mixed_batch() {
        let readings = vec![
            Reading::new("2023-01-01T00:00:00Z", 25.0),
            Reading::new("2023-01-01T01:00:00Z", 1023.0),
        ];

        let out = reshape(&readings, &ValidityRule::default());

        assert_eq!(
            out.points,
            vec![ChartPoint {
                x: JAN_1_MS,
                y: 25.0
            }]
        );
        assert_eq!(out.rejected, 1);
        assert_eq!(out.total(), 2);
    }

    #[test]
    fn should_never_emit_rejected_values() {
        let values = [-5.0, 0.0, 21.5, 1023.0, 1999.9, 2000.0, 2000.1, 4096.0];
        let readings: Vec<Reading> = values
            .iter()
            .map(|v| Reading::new("2023-01-01T00:00:00Z", *v))
            .collect();

        let out = reshape(&readings, &ValidityRule::default());

        assert!(
            out.points
                .iter()
                .all(|p| p.y <= 2000.0 && (p.y - 1023.0).abs() > f64::EPSILON)
        );
        assert_eq!(out.points.len(), 5);
        assert_eq!(out.rejected, 3);
    }

    #[test]
    fn should_preserve_value_and_timestamp() {
        let readings = vec![Reading::new("2023-01-01T00:00:01.500Z", 19.25)];
        let out = reshape(&readings, &ValidityRule::default());
        assert_eq!(out.points[0].x, JAN_1_MS + 1500);
        assert!((out.points[0].y - 19.25).abs() < f64::EPSILON);
    }

    #[test]
    fn should_count_unparseable_timestamps_separately() {
        let readings = vec![
            Reading::new("not a date", 20.0),
            Reading::new("2023-01-01T00:00:00Z", 21.0),
        ];
        let out = reshape(&readings, &ValidityRule::default());
        assert_eq!(out.points.len(), 1);
        assert_eq!(out.unparseable, 1);
        assert_eq!(out.rejected, 0);
    }

    #[test]
    fn should_honour_custom_rule() {
        let rule = ValidityRule {
            max_valid_value: 100.0,
            error_code: -1.0,
        };
        let readings = vec![
            Reading::new("2023-01-01T00:00:00Z", 150.0),
            Reading::new("2023-01-01T00:00:00Z", -1.0),
            Reading::new("2023-01-01T00:00:00Z", 1023.0),
        ];
        let out = reshape(&readings, &rule);
        assert!(out.points.is_empty());
        assert_eq!(out.rejected, 3);
    }

    #[test]
    fn should_deserialize_server_payload() {
        let json = r#"[
            {"device": "temperature", "sensor": "temperature", "date_time": "2023-01-01T00:00:00Z", "value": 25},
            {"date_time": "2023-01-01T01:00:00Z", "value": 1023.0}
        ]"#;
        let readings: Vec<Reading> = serde_json::from_str(json).unwrap();
        assert_eq!(readings.len(), 2);
        assert_eq!(readings[0].device.as_deref(), Some("temperature"));
        assert!(readings[1].sensor.is_none());
    }

    #[test]
    fn should_serialize_chart_point_as_xy() {
        let json = serde_json::to_string(&ChartPoint { x: 1, y: 2.5 }).unwrap();
        assert_eq!(json, r#"{"x":1,"y":2.5}"#);
    }
}
