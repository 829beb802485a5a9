//! Dashboard controller — owns the dashboard state and drives the view.
//!
//! The controller is the only owner of the [`ChartCache`] and the filter
//! selection. Front ends call its methods from their event handlers and run
//! [`DashboardController::run`] once for the periodic work.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use sensordash_domain::action::DeviceAction;
use sensordash_domain::date_options::DateOptions;
use sensordash_domain::error::DashboardError;
use sensordash_domain::filter::{Field, FilterSelection, FilterState, SelectedDate};
use sensordash_domain::liveness::ServiceStatus;
use sensordash_domain::reading::ChartPoint;

use crate::chart_cache::ChartCache;
use crate::config::DashboardConfig;
use crate::ports::{DashboardView, SensorApi, Sleeper};
use crate::scheduler::{Phase, Schedule};
use crate::services::action_service::ActionService;
use crate::services::date_filter_service::DateFilterService;
use crate::services::liveness_service::LivenessService;
use crate::services::reading_service::ReadingService;

/// Result of a refresh request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshOutcome {
    /// The cache now holds `plotted` points out of `found` readings.
    Updated { found: usize, plotted: usize },
    /// Another refresh was running; nothing was fetched.
    AlreadyInFlight,
}

/// What one scheduler tick did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TickReport {
    pub refreshed: bool,
    pub rendered: bool,
}

pub struct DashboardController<A, V> {
    actions: ActionService<A>,
    dates: DateFilterService<A>,
    readings: ReadingService<A>,
    liveness: LivenessService<A>,
    view: V,
    series_name: String,
    cache: ChartCache,
    selection: Mutex<FilterSelection>,
    schedule: Mutex<Schedule>,
    phase: Mutex<Phase>,
    in_flight: AtomicBool,
    /// Set while the entry status line shows a data error.
    data_error: AtomicBool,
}

impl<A: SensorApi + Clone, V: DashboardView> DashboardController<A, V> {
    /// Create a controller with an empty cache and an incomplete filter.
    pub fn new(api: A, view: V, config: &DashboardConfig) -> Self {
        Self {
            actions: ActionService::new(api.clone()),
            dates: DateFilterService::new(api.clone()),
            readings: ReadingService::new(api.clone(), config.sensor.clone(), config.validity),
            liveness: LivenessService::new(api, config.primary_device.clone()),
            view,
            series_name: config.series_name.clone(),
            cache: ChartCache::new(),
            selection: Mutex::new(FilterSelection::default()),
            schedule: Mutex::new(Schedule::new(
                config.refresh_interval(),
                config.render_interval(),
            )),
            phase: Mutex::new(Phase::Idle),
            in_flight: AtomicBool::new(false),
            data_error: AtomicBool::new(false),
        }
    }
}

impl<A: SensorApi, V: DashboardView> DashboardController<A, V> {
    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn cache(&self) -> &ChartCache {
        &self.cache
    }

    pub fn phase(&self) -> Phase {
        *lock(&self.phase)
    }

    pub fn selection(&self) -> FilterSelection {
        *lock(&self.selection)
    }

    pub fn filter_state(&self) -> FilterState {
        self.selection().state()
    }

    /// Whether the periodic refresh may re-fetch the selected day.
    pub fn live_allowed(&self) -> bool {
        self.filter_state().is_complete()
    }

    /// Period of the scheduler loop.
    pub fn tick_period(&self) -> Duration {
        lock(&self.schedule).tick_period()
    }

    /// Page-load setup: disable apply and populate the date filter.
    ///
    /// # Errors
    ///
    /// Returns the error from [`load_date_filter`](Self::load_date_filter).
    pub async fn initialise(&self) -> Result<DateOptions, DashboardError> {
        self.view.set_apply_enabled(false);
        self.load_date_filter().await
    }

    /// Fetch available dates and hand the selector options to the view.
    ///
    /// # Errors
    ///
    /// Returns the API error, after showing it on the entry status line.
    pub async fn load_date_filter(&self) -> Result<DateOptions, DashboardError> {
        match self.dates.load().await {
            Ok(options) => {
                self.view.set_date_options(&options);
                Ok(options)
            }
            Err(err) => {
                self.report_data_error(&err);
                Err(err)
            }
        }
    }

    /// Record a selector change and update the apply button.
    pub fn select(&self, field: Field, raw: &str) -> FilterState {
        let state = {
            let mut selection = lock(&self.selection);
            selection.set(field, raw);
            selection.state()
        };
        tracing::debug!(?field, raw, ?state, "filter changed");
        self.view.set_apply_enabled(state.is_complete());
        state
    }

    /// Fetch the day chosen in the filter (apply button).
    ///
    /// # Errors
    ///
    /// Returns [`DashboardError::InvalidSelection`] when the filter is
    /// incomplete, or the error from [`refresh`](Self::refresh).
    pub async fn apply(&self) -> Result<RefreshOutcome, DashboardError> {
        let Some(date) = self.selection().date() else {
            let err = DashboardError::InvalidSelection;
            self.report_data_error(&err);
            return Err(err);
        };
        self.refresh(date).await
    }

    /// Fetch `date`, reshape the readings and replace the cache.
    ///
    /// At most one refresh runs at a time; a second request while one is in
    /// flight returns [`RefreshOutcome::AlreadyInFlight`] without fetching.
    /// The apply button is disabled for the duration and re-enabled afterwards
    /// whatever the outcome, if the filter is still complete.
    ///
    /// # Errors
    ///
    /// Returns the API error, after showing it on the entry status line.
    #[tracing::instrument(skip(self))]
    pub async fn refresh(&self, date: SelectedDate) -> Result<RefreshOutcome, DashboardError> {
        let Some(_guard) = RefreshGuard::acquire(&self.in_flight, &self.phase) else {
            tracing::debug!("refresh already in flight, skipping");
            return Ok(RefreshOutcome::AlreadyInFlight);
        };

        self.view.set_entry_status("Loading...");
        self.view.set_apply_enabled(false);
        let fetched = self.readings.fetch(date).await;
        self.view.set_apply_enabled(self.live_allowed());

        let readings = match fetched {
            Ok(readings) => readings,
            Err(err) => {
                self.report_data_error(&err);
                return Err(err);
            }
        };

        let found = readings.len();
        self.view
            .set_entry_status(&format!("{found} found. Structuring data..."));
        let reshaped = self.readings.reshape(&readings);
        let plotted = reshaped.points.len();
        let generation = self.cache.replace(reshaped.points);
        self.data_error.store(false, Ordering::Release);
        self.view.set_entry_status(&format!("{found} found. Plotting..."));

        tracing::info!(found, plotted, generation, "chart data refreshed");
        Ok(RefreshOutcome::Updated { found, plotted })
    }

    /// Re-fetch the selected day if data is cached and the filter is complete.
    ///
    /// Returns `None` when the refresh was not attempted.
    pub async fn refresh_if_live(&self) -> Option<Result<RefreshOutcome, DashboardError>> {
        if self.cache.is_empty() {
            return None;
        }
        let date = self.selection().date()?;
        Some(self.refresh(date).await)
    }

    /// Push the cached series to the chart. Returns `false` when the cache is empty.
    ///
    /// The status line is left alone while it shows a data error, until the
    /// next successful refresh.
    pub fn render(&self) -> bool {
        if self.cache.is_empty() {
            return false;
        }
        let previous = std::mem::replace(&mut *lock(&self.phase), Phase::Rendering);

        let points: Arc<[ChartPoint]> = self.cache.snapshot();
        if self.data_error.load(Ordering::Acquire) {
            self.view.render_series(&self.series_name, &points);
        } else {
            self.view.set_entry_status("Plotting data");
            self.view.render_series(&self.series_name, &points);
            self.view.set_entry_status("");
        }
        tracing::trace!(points = points.len(), "chart rendered");

        *lock(&self.phase) = previous;
        true
    }

    /// Run the steps due on the next tick: refresh first, then render.
    pub async fn tick(&self) -> TickReport {
        let due = lock(&self.schedule).advance();
        let mut report = TickReport::default();
        if due.refresh {
            report.refreshed = matches!(
                self.refresh_if_live().await,
                Some(Ok(RefreshOutcome::Updated { .. }))
            );
        }
        if due.render {
            report.rendered = self.render();
        }
        report
    }

    /// Scheduler loop. Runs for as long as the returned future is polled.
    pub async fn run<S: Sleeper>(&self, sleeper: &S) {
        let period = self.tick_period();
        tracing::info!(?period, "scheduler started");
        loop {
            sleeper.sleep(period).await;
            self.tick().await;
        }
    }

    /// Ping the devices and show the primary device's status.
    ///
    /// # Errors
    ///
    /// Returns the API error, after showing it on the service status element.
    pub async fn check_liveness(&self) -> Result<ServiceStatus, DashboardError> {
        match self.liveness.check().await {
            Ok((status, report)) => {
                self.view.set_service_status(status, &report);
                Ok(status)
            }
            Err(err) => {
                tracing::warn!(error = %err, "liveness check failed");
                self.view.set_service_error(&err);
                Err(err)
            }
        }
    }

    /// Send a device action and show the server's answer.
    ///
    /// # Errors
    ///
    /// Returns the API error, after showing it next to the action.
    pub async fn trigger_action(&self, action: DeviceAction) -> Result<String, DashboardError> {
        let result = self.actions.trigger(action).await;
        self.view.set_action_result(action, result.as_deref());
        result
    }

    fn report_data_error(&self, err: &DashboardError) {
        tracing::warn!(error = %err, "dashboard data error");
        self.data_error.store(true, Ordering::Release);
        self.view.set_entry_status(&format!("{}: {err}", err.kind()));
    }
}

/// Marks a refresh as in flight until dropped.
struct RefreshGuard<'a> {
    in_flight: &'a AtomicBool,
    phase: &'a Mutex<Phase>,
}

impl<'a> RefreshGuard<'a> {
    fn acquire(in_flight: &'a AtomicBool, phase: &'a Mutex<Phase>) -> Option<Self> {
        if in_flight.swap(true, Ordering::AcqRel) {
            return None;
        }
        *lock(phase) = Phase::Refreshing;
        Some(Self { in_flight, phase })
    }
}

impl Drop for RefreshGuard<'_> {
    fn drop(&mut self) {
        *lock(self.phase) = Phase::Idle;
        self.in_flight.store(false, Ordering::Release);
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}
