//! Application services — use-case implementations.
//!
//! Each service struct accepts a [`SensorApi`](crate::ports::SensorApi)
//! implementation via a generic parameter (constructor injection), keeping
//! this layer decoupled from concrete adapters.

pub mod action_service;
pub mod date_filter_service;
pub mod liveness_service;
pub mod reading_service;
