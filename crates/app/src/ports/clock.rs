//! Clock port — the timer behind the scheduler loop.

use std::future::Future;
use std::time::Duration;

/// Suspends the caller for a duration.
///
/// Adapters back this with `gloo-timers` in the browser and `tokio::time`
/// natively.
pub trait Sleeper {
    fn sleep(&self, duration: Duration) -> impl Future<Output = ()>;
}
