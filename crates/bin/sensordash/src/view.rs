//! Terminal rendering of the dashboard.
//!
//! Results a user asked for (options, chart, statuses) go to stdout; progress
//! and errors go through `tracing`.

use std::fmt::Write as _;

use chrono::DateTime;
use sensordash_app::ports::DashboardView;
use sensordash_domain::action::DeviceAction;
use sensordash_domain::date_options::{DateOptions, SelectOption};
use sensordash_domain::error::DashboardError;
use sensordash_domain::liveness::{PingReport, ServiceStatus};
use sensordash_domain::reading::ChartPoint;

const SPARK: [char; 8] = ['▁', '▂', '▃', '▄', '▅', '▆', '▇', '█'];

/// Widest sparkline printed; longer series are bucket-averaged.
const SPARK_WIDTH: usize = 60;

#[derive(Debug, Default)]
pub struct TerminalView;

impl DashboardView for TerminalView {
    fn set_entry_status(&self, text: &str) {
        if !text.is_empty() {
            tracing::info!("{text}");
        }
    }

    fn set_apply_enabled(&self, enabled: bool) {
        tracing::trace!(enabled, "apply button");
    }

    fn set_date_options(&self, options: &DateOptions) {
        println!("days:   {}", labels(&options.days));
        println!("months: {}", labels(&options.months));
        println!("years:  {}", labels(&options.years));
    }

    fn render_series(&self, name: &str, points: &[ChartPoint]) {
        println!("{}", summarize(name, points));
    }

    fn set_service_status(&self, status: ServiceStatus, report: &PingReport) {
        println!("service: {status}");
        for (device, device_status) in report.statuses() {
            println!("  {device:<12} {device_status}");
        }
    }

    fn set_service_error(&self, err: &DashboardError) {
        tracing::error!(error = %err, "{}", err.kind());
    }

    fn set_action_result(&self, action: DeviceAction, result: Result<&str, &DashboardError>) {
        match result {
            Ok(text) => println!("{}: {text}", action.label()),
            Err(err) => tracing::error!(%action, error = %err, "{}", err.kind()),
        }
    }
}

fn labels(options: &[SelectOption]) -> String {
    if options.is_empty() {
        return "-".to_string();
    }
    options
        .iter()
        .map(|o| o.label.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

/// One-paragraph description of a series: range, extremes, last value and a sparkline.
fn summarize(name: &str, points: &[ChartPoint]) -> String {
    let (Some(first), Some(last)) = (points.first(), points.last()) else {
        return format!("{name}: no data");
    };
    let (min, max) = points.iter().fold((f64::MAX, f64::MIN), |(lo, hi), p| {
        (lo.min(p.y), hi.max(p.y))
    });

    let mut out = String::new();
    let _ = writeln!(
        out,
        "{name}: {} points, {} → {}",
        points.len(),
        format_ms(first.x),
        format_ms(last.x)
    );
    let _ = write!(
        out,
        "  min {min:.1}  max {max:.1}  last {:.1}\n  {}",
        last.y,
        sparkline(points, SPARK_WIDTH)
    );
    out
}

fn format_ms(ms: i64) -> String {
    DateTime::from_timestamp_millis(ms)
        .map_or_else(|| ms.to_string(), |dt| dt.format("%Y-%m-%d %H:%M").to_string())
}

#[allow(
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss
)]
fn sparkline(points: &[ChartPoint], width: usize) -> String {
    if points.is_empty() || width == 0 {
        return String::new();
    }
    let bucket = points.len().div_ceil(width);
    let values: Vec<f64> = points
        .chunks(bucket)
        .map(|chunk| chunk.iter().map(|p| p.y).sum::<f64>() / chunk.len() as f64)
        .collect();
    let min = values.iter().copied().fold(f64::MAX, f64::min);
    let max = values.iter().copied().fold(f64::MIN, f64::max);
    let span = max - min;
    values
        .iter()
        .map(|v| {
            if span <= f64::EPSILON {
                return SPARK[SPARK.len() / 2];
            }
            let level = ((v - min) / span * (SPARK.len() - 1) as f64).round() as usize;
            SPARK[level.min(SPARK.len() - 1)]
        })
        .collect()
}
