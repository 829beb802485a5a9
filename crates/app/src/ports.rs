//! Port definitions — traits that adapters implement.
//!
//! Ports are the boundaries between the application core and the outside world.
//! None of them require `Send`: the browser adapter runs on a single thread and
//! its futures are not thread-safe.

pub mod clock;
pub mod sensor_api;
pub mod view;

pub use clock::Sleeper;
pub use sensor_api::SensorApi;
pub use view::DashboardView;
