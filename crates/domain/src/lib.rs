//! # sensordash-domain
//!
//! Pure domain model for the sensordash home monitoring dashboard.
//!
//! ## Responsibilities
//! - Foundational types: error kinds, timestamps
//! - Define **Readings** (raw sensor observations) and **Chart points**
//!   (the `{x, y}` pairs a chart consumes), plus the validity rule between them
//! - Define the **date filter**: selector values, the complete/incomplete
//!   state machine, and the option lists built from available dates
//! - Define **liveness** reports returned by the ping endpoint
//! - Define **device actions** and the endpoint paths the client calls
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod time;

pub mod action;
pub mod date_options;
pub mod endpoint;
pub mod filter;
pub mod liveness;
pub mod reading;
