//! # sensordash — terminal dashboard
//!
//! Composition root that wires the HTTP adapter into the dashboard controller.
//!
//! ## Responsibilities
//! - Parse the command line and load configuration (file + env vars)
//! - Initialise `tracing`
//! - Construct the `reqwest` adapter and the terminal view
//! - Run one of the dashboard use-cases: watch a day, list dates, ping
//!   devices, or trigger a device action
//!
//! ## Dependency rule
//! This is the **only** crate that depends on every other crate.
//! It is the wiring layer — no dashboard logic belongs here.

mod config;
mod view;

use std::future::Future;
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

use chrono::Datelike;
use clap::{Args, Parser, Subcommand};
use sensordash_adapter_http_reqwest::HttpSensorApi;
use sensordash_app::controller::{DashboardController, RefreshOutcome};
use sensordash_app::ports::Sleeper;
use sensordash_domain::action::DeviceAction;
use sensordash_domain::filter::Field;
use sensordash_domain::time;
use tracing_subscriber::EnvFilter;

use crate::config::{Config, FilterConfig};
use crate::view::TerminalView;

type Controller = DashboardController<HttpSensorApi, TerminalView>;

#[derive(Parser, Debug)]
#[command(author, version, about = "Home sensor dashboard in the terminal", long_about = None)]
struct Cli {
    /// Configuration file
    #[arg(short, long, default_value = config::DEFAULT_PATH)]
    config: PathBuf,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Plot one day of readings and keep it up to date (default)
    Watch(WatchArgs),
    /// List the days for which readings exist
    Dates,
    /// Check which devices are reachable
    Ping,
    /// Trigger a device action (`buzzer` or `led`)
    Action {
        action: DeviceAction,
    },
}

#[derive(Args, Debug, Default)]
struct WatchArgs {
    /// Day of month (defaults to the config file, then today)
    #[arg(long)]
    day: Option<u32>,
    /// Month number
    #[arg(long)]
    month: Option<u32>,
    /// Year
    #[arg(long)]
    year: Option<i32>,
    /// Fetch and plot once, then exit
    #[arg(long)]
    once: bool,
}

/// [`Sleeper`] backed by the tokio timer.
struct TokioSleeper;

impl Sleeper for TokioSleeper {
    fn sleep(&self, duration: Duration) -> impl Future<Output = ()> {
        tokio::time::sleep(duration)
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match Config::load(&cli.config) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("sensordash: {}", error_chain(&err));
            return ExitCode::FAILURE;
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_new(&config.logging.filter).unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let api = match HttpSensorApi::new(&config.server) {
        Ok(api) => api,
        Err(err) => {
            tracing::error!(error = %error_chain(&err), "cannot create HTTP client");
            return ExitCode::FAILURE;
        }
    };
    tracing::debug!(base_url = api.base_url(), "sensor server");

    let controller = DashboardController::new(api, TerminalView, &config.dashboard);

    let ok = match cli.command.unwrap_or(Command::Watch(WatchArgs::default())) {
        Command::Watch(args) => watch(&controller, &args, config.filter).await,
        Command::Dates => controller.load_date_filter().await.is_ok(),
        Command::Ping => controller.check_liveness().await.is_ok(),
        Command::Action { action } => controller.trigger_action(action).await.is_ok(),
    };

    if ok {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

async fn watch(controller: &Controller, args: &WatchArgs, preset: FilterConfig) -> bool {
    let today = time::now().date_naive();
    let day = args.day.or(preset.day).unwrap_or_else(|| today.day());
    let month = args.month.or(preset.month).unwrap_or_else(|| today.month());
    let year = args.year.or(preset.year).unwrap_or_else(|| today.year());

    controller.select(Field::Day, &day.to_string());
    controller.select(Field::Month, &month.to_string());
    if !controller
        .select(Field::Year, &year.to_string())
        .is_complete()
    {
        tracing::error!(day, month, year, "not a valid date");
        return false;
    }

    match controller.apply().await {
        Ok(RefreshOutcome::Updated { found, plotted }) => {
            tracing::info!(found, plotted, "initial data loaded");
        }
        Ok(RefreshOutcome::AlreadyInFlight) => {}
        Err(_) => return false,
    }
    if !controller.render() {
        tracing::warn!("no valid readings for {year}-{month:02}-{day:02}; live refresh stays off");
    }
    if args.once {
        return true;
    }

    tokio::select! {
        () = controller.run(&TokioSleeper) => true,
        result = tokio::signal::ctrl_c() => {
            if let Err(err) = result {
                tracing::error!(error = %err, "cannot listen for ctrl-c");
            }
            tracing::info!("shutting down");
            true
        }
    }
}

fn error_chain(err: &dyn std::error::Error) -> String {
    let mut text = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        text.push_str(": ");
        text.push_str(&cause.to_string());
        source = cause.source();
    }
    text
}
