//! # sensordash-adapter-http-reqwest
//!
//! Implements the [`SensorApi`](sensordash_app::ports::SensorApi) port for
//! native front ends using a shared `reqwest::Client`.
//!
//! Every request carries a timeout, so a hung server surfaces as
//! [`DashboardError::NetworkFailure`](sensordash_domain::error::DashboardError)
//! instead of stalling the scheduler.

mod client;
mod config;
mod error;

pub use client::HttpSensorApi;
pub use config::HttpConfig;
pub use error::HttpError;
