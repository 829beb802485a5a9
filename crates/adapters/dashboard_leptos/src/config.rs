//! Settings read from `data-*` attributes on `<html>`.
//!
//! Recognised attributes: `data-api-base`, `data-refresh-secs`,
//! `data-render-secs`, `data-sensor`, `data-series-name`,
//! `data-primary-device`. Missing or invalid values keep their defaults.

use sensordash_app::config::DashboardConfig;
use wasm_bindgen::JsCast;

pub struct Settings {
    /// Prefix for every endpoint path; empty means same origin.
    pub api_base: String,
    pub dashboard: DashboardConfig,
}

/// Read settings from the current document.
pub fn from_document() -> Settings {
    let dataset = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|doc| doc.document_element())
        .map(|el| el.unchecked_into::<web_sys::HtmlElement>().dataset());
    let get = |key: &str| dataset.as_ref().and_then(|d| d.get(key));
    from_lookup(get)
}

fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Settings {
    let mut dashboard = DashboardConfig::default();
    if let Some(secs) = get("refreshSecs").and_then(|v| v.parse().ok()) {
        dashboard.refresh_interval_secs = secs;
    }
    if let Some(secs) = get("renderSecs").and_then(|v| v.parse().ok()) {
        dashboard.render_interval_secs = secs;
    }
    if let Some(sensor) = get("sensor") {
        dashboard.sensor = sensor;
    }
    if let Some(name) = get("seriesName") {
        dashboard.series_name = name;
    }
    if let Some(device) = get("primaryDevice") {
        dashboard.primary_device = device;
    }
    if let Err(err) = dashboard.validate() {
        leptos::logging::warn!("ignoring page settings: {err}");
        dashboard = DashboardConfig::default();
    }

    Settings {
        api_base: get("apiBase").unwrap_or_default(),
        dashboard,
    }
}
