//! Single scheduler loop replacing independent refresh and render timers.
//!
//! The loop wakes every [`Schedule::tick_period`] and asks the schedule which
//! steps are due. A due refresh always runs before a due render in the same
//! tick, so the render sees the data that refresh just stored.

use std::time::Duration;

/// What the controller is doing right now.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    Refreshing,
    Rendering,
}

/// Steps due on a given tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Due {
    pub refresh: bool,
    pub render: bool,
}

/// Tracks elapsed time per step and decides which ones are due.
#[derive(Debug, Clone)]
pub struct Schedule {
    tick: Duration,
    refresh_every: Duration,
    render_every: Duration,
    since_refresh: Duration,
    since_render: Duration,
}

impl Schedule {
    /// Build a schedule whose tick is the largest period dividing both intervals.
    ///
    /// Zero intervals are clamped to one millisecond.
    #[must_use]
    pub fn new(refresh_every: Duration, render_every: Duration) -> Self {
        let refresh_every = refresh_every.max(Duration::from_millis(1));
        let render_every = render_every.max(Duration::from_millis(1));
        let tick_ms = gcd(millis(refresh_every), millis(render_every));
        Self {
            tick: Duration::from_millis(tick_ms),
            refresh_every,
            render_every,
            since_refresh: Duration::ZERO,
            since_render: Duration::ZERO,
        }
    }

    #[must_use]
    pub fn tick_period(&self) -> Duration {
        self.tick
    }

    /// Advance by one tick and report which steps are due.
    pub fn advance(&mut self) -> Due {
        self.since_refresh += self.tick;
        self.since_render += self.tick;
        let mut due = Due::default();
        if self.since_refresh >= self.refresh_every {
            self.since_refresh = Duration::ZERO;
            due.refresh = true;
        }
        if self.since_render >= self.render_every {
            self.since_render = Duration::ZERO;
            due.render = true;
        }
        due
    }
}

fn millis(duration: Duration) -> u64 {
    u64::try_from(duration.as_millis()).unwrap_or(u64::MAX)
}

fn gcd(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a.max(1)
}
