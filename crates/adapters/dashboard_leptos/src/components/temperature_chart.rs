//! Temperature chart rendered with `leptos-chartistry`.

use chrono::{DateTime, Utc};
use leptos::prelude::*;
use leptos_chartistry::*;
use sensordash_domain::reading::ChartPoint;

use crate::use_dashboard;

#[derive(Clone)]
struct Sample {
    timestamp: DateTime<Utc>,
    value: f64,
}

fn to_samples(points: &[ChartPoint]) -> Vec<Sample> {
    points
        .iter()
        .filter_map(|point| {
            Some(Sample {
                timestamp: DateTime::from_timestamp_millis(point.x)?,
                value: point.y,
            })
        })
        .collect()
}

/// Line sharing `name` with the view, so a renamed series reaches the legend.
fn temperature_line(name: RwSignal<String>) -> Line<Sample, f64> {
    let mut line = Line::new(|s: &Sample| s.value);
    line.name = name;
    line
}

/// Extracted to avoid a turbofish inside `view!`.
fn timestamp_ticks() -> TickLabels<DateTime<Utc>> {
    TickLabels::timestamps()
}

/// `temp-chart` container, hidden until the first render tick.
#[component]
pub fn TemperatureChart() -> impl IntoView {
    let view = use_dashboard().view();
    let data = Signal::derive(move || view.series.with(|points| to_samples(points)));
    let series = Series::new(|s: &Sample| s.timestamp).line(temperature_line(view.series_name));
    let inner = vec![
        AxisMarker::left_edge().into_inner(),
        AxisMarker::bottom_edge().into_inner(),
        XGridLine::default().into_inner(),
        YGridLine::default().into_inner(),
        XGuideLine::over_data().into_inner(),
        YGuideLine::over_mouse().into_inner(),
    ];

    view! {
        <div id="temp-chart" class="temperature-chart" hidden=move || !view.chart_visible.get()>
            <Chart
                aspect_ratio=AspectRatio::from_env_width_apply_ratio(3.0)
                left=TickLabels::aligned_floats()
                bottom=timestamp_ticks()
                inner=inner
                tooltip=Tooltip::left_cursor()
                series=series
                data=data
            />
        </div>
    }
}
