//! # sensordash-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement:
//!   - `SensorApi` — the HTTP endpoints (actions, dates, readings, ping)
//!   - `DashboardView` — the page elements the dashboard writes to
//!   - `Sleeper` — the timer driving the scheduler loop
//! - Define the use-case services (`ActionService`, `DateFilterService`,
//!   `ReadingService`, `LivenessService`)
//! - Own the dashboard state (`ChartCache`, filter selection) in a single
//!   `DashboardController` driven by one scheduler loop
//!
//! ## Dependency rule
//! Depends on `sensordash-domain` only. Never imports adapter crates and never
//! assumes a particular async runtime, so it runs unchanged in the browser.

pub mod chart_cache;
pub mod config;
pub mod controller;
pub mod ports;
pub mod scheduler;
pub mod services;

#[cfg(test)]
pub(crate) mod testing;
