//! End-to-end tests for the native dashboard stack.
//!
//! Each test serves the sensor endpoints from an axum stub bound to an
//! ephemeral port and drives the real `reqwest` adapter through the
//! dashboard controller.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::Router;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use sensordash_adapter_http_reqwest::{HttpConfig, HttpSensorApi};
use sensordash_app::config::DashboardConfig;
use sensordash_app::controller::{DashboardController, RefreshOutcome};
use sensordash_app::ports::DashboardView;
use sensordash_domain::action::DeviceAction;
use sensordash_domain::date_options::DateOptions;
use sensordash_domain::error::DashboardError;
use sensordash_domain::filter::Field;
use sensordash_domain::liveness::{PingReport, ServiceStatus};
use sensordash_domain::reading::ChartPoint;

// ---------------------------------------------------------------------------
// Stub server
// ---------------------------------------------------------------------------

#[derive(Clone)]
struct Stub {
    readings_status: StatusCode,
    readings_body: String,
    ping_body: String,
    delay: Duration,
    requests: Arc<Mutex<Vec<String>>>,
}

impl Default for Stub {
    fn default() -> Self {
        Self {
            readings_status: StatusCode::OK,
            readings_body: serde_json::json!([
                {"device": "temperature", "sensor": "temperature", "date_time": "2023-01-01T00:00:00Z", "value": 25.0},
                {"device": "temperature", "sensor": "temperature", "date_time": "2023-01-01T01:00:00Z", "value": 1023.0},
                {"device": "temperature", "sensor": "temperature", "date_time": "2023-01-01T02:00:00Z", "value": 4000.0},
            ])
            .to_string(),
            ping_body: r#"{"Airquality": 503, "Temperature": 200}"#.to_string(),
            delay: Duration::ZERO,
            requests: Arc::default(),
        }
    }
}

impl Stub {
    fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }

    fn record(&self, path: String) {
        self.requests.lock().unwrap().push(path);
    }
}

async fn action(State(stub): State<Stub>, Path(device): Path<String>) -> String {
    stub.record(format!("/device_actions/{device}"));
    "Executed".to_string()
}

async fn dates(State(stub): State<Stub>) -> impl IntoResponse {
    stub.record("/device_data_vars/date".to_string());
    axum::Json(vec![
        "2023-01-05T00:00:00Z",
        "2023-01-05T00:00:00Z",
        "2023-02-10T00:00:00Z",
    ])
}

async fn readings(
    State(stub): State<Stub>,
    Path((sensor, year, month, day)): Path<(String, i32, u32, u32)>,
) -> impl IntoResponse {
    stub.record(format!("/device_data/{sensor}/{year}/{month}/{day}"));
    tokio::time::sleep(stub.delay).await;
    (stub.readings_status, stub.readings_body.clone())
}

async fn ping(State(stub): State<Stub>) -> String {
    stub.record("/ping_all".to_string());
    stub.ping_body.clone()
}

/// Serve `stub` on an ephemeral port and return its base URL.
async fn serve(stub: Stub) -> String {
    let app = Router::new()
        .route("/device_actions/{device}", get(action))
        .route("/device_data_vars/date", get(dates))
        .route("/device_data/{sensor}/{year}/{month}/{day}", get(readings))
        .route("/ping_all", get(ping))
        .with_state(stub);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("ephemeral port should bind");
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}

// ---------------------------------------------------------------------------
// Recording view
// ---------------------------------------------------------------------------

#[derive(Default)]
struct Recorder {
    statuses: Mutex<Vec<String>>,
    apply_enabled: Mutex<Option<bool>>,
    options: Mutex<Option<DateOptions>>,
    series: Mutex<Vec<(String, Vec<ChartPoint>)>>,
    service: Mutex<Option<Result<ServiceStatus, DashboardError>>>,
    action: Mutex<Option<Result<String, DashboardError>>>,
}

impl DashboardView for Recorder {
    fn set_entry_status(&self, text: &str) {
        self.statuses.lock().unwrap().push(text.to_string());
    }

    fn set_apply_enabled(&self, enabled: bool) {
        *self.apply_enabled.lock().unwrap() = Some(enabled);
    }

    fn set_date_options(&self, options: &DateOptions) {
        *self.options.lock().unwrap() = Some(options.clone());
    }

    fn render_series(&self, name: &str, points: &[ChartPoint]) {
        self.series
            .lock()
            .unwrap()
            .push((name.to_string(), points.to_vec()));
    }

    fn set_service_status(&self, status: ServiceStatus, _report: &PingReport) {
        *self.service.lock().unwrap() = Some(Ok(status));
    }

    fn set_service_error(&self, err: &DashboardError) {
        *self.service.lock().unwrap() = Some(Err(err.clone()));
    }

    fn set_action_result(&self, _action: DeviceAction, result: Result<&str, &DashboardError>) {
        *self.action.lock().unwrap() = Some(result.map(ToString::to_string).map_err(Clone::clone));
    }
}

type Controller = DashboardController<HttpSensorApi, Recorder>;

fn controller(base_url: String, timeout_secs: u64) -> Controller {
    let api = HttpSensorApi::new(&HttpConfig {
        base_url,
        timeout_secs,
    })
    .expect("client should build");
    DashboardController::new(api, Recorder::default(), &DashboardConfig::default())
}

fn select_jan_1(controller: &Controller) {
    controller.select(Field::Day, "1");
    controller.select(Field::Month, "1");
    controller.select(Field::Year, "2023");
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_fill_date_filter_from_server() {
    let controller = controller(serve(Stub::default()).await, 5);

    let options = controller.initialise().await.unwrap();

    let days: Vec<&str> = options.days.iter().map(|o| o.value.as_str()).collect();
    let months: Vec<&str> = options.months.iter().map(|o| o.label.as_str()).collect();
    assert_eq!(days, vec!["5", "10"]);
    assert_eq!(months, vec!["January", "February"]);
    assert_eq!(*controller.view().apply_enabled.lock().unwrap(), Some(false));
    assert!(controller.view().options.lock().unwrap().is_some());
}

#[tokio::test]
async fn should_fetch_filter_and_render_selected_day() {
    let stub = Stub::default();
    let controller = controller(serve(stub.clone()).await, 5);
    select_jan_1(&controller);

    let outcome = controller.apply().await.unwrap();
    assert!(controller.render());

    assert_eq!(
        outcome,
        RefreshOutcome::Updated {
            found: 3,
            plotted: 1
        }
    );
    assert_eq!(stub.requests(), vec!["/device_data/temperature/2023/1/1"]);
    let series = controller.view().series.lock().unwrap().clone();
    assert_eq!(
        series,
        vec![(
            "Temperature".to_string(),
            vec![ChartPoint {
                x: 1_672_531_200_000,
                y: 25.0
            }]
        )]
    );
}

#[tokio::test]
async fn should_report_liveness_of_primary_device() {
    let controller = controller(serve(Stub::default()).await, 5);

    let status = controller.check_liveness().await.unwrap();

    assert_eq!(status, ServiceStatus::Up);
}

#[tokio::test]
async fn should_report_down_when_primary_device_unreachable() {
    let stub = Stub {
        ping_body: r#"{"Temperature": 503}"#.to_string(),
        ..Stub::default()
    };
    let controller = controller(serve(stub).await, 5);

    let status = controller.check_liveness().await.unwrap();

    assert_eq!(status, ServiceStatus::Down);
}

#[tokio::test]
async fn should_trigger_device_action() {
    let stub = Stub::default();
    let controller = controller(serve(stub.clone()).await, 5);

    let text = controller.trigger_action(DeviceAction::Buzzer).await.unwrap();

    assert_eq!(text, "Executed");
    assert_eq!(stub.requests(), vec!["/device_actions/airquality"]);
    assert_eq!(
        *controller.view().action.lock().unwrap(),
        Some(Ok("Executed".to_string()))
    );
}

#[tokio::test]
async fn should_surface_parse_failure_and_reenable_apply() {
    let stub = Stub {
        readings_body: "<html>oops</html>".to_string(),
        ..Stub::default()
    };
    let controller = controller(serve(stub).await, 5);
    select_jan_1(&controller);

    let err = controller.apply().await.unwrap_err();

    assert!(matches!(err, DashboardError::ParseFailure { .. }), "{err}");
    assert_eq!(*controller.view().apply_enabled.lock().unwrap(), Some(true));
    let last = controller.view().statuses.lock().unwrap().last().cloned();
    assert!(last.unwrap().starts_with("Invalid response"));
    assert!(controller.cache().is_empty());
}

#[tokio::test]
async fn should_surface_server_error_as_network_failure() {
    let stub = Stub {
        readings_status: StatusCode::INTERNAL_SERVER_ERROR,
        readings_body: "storage unavailable".to_string(),
        ..Stub::default()
    };
    let controller = controller(serve(stub).await, 5);
    select_jan_1(&controller);

    let err = controller.apply().await.unwrap_err();

    assert_eq!(
        err,
        DashboardError::NetworkFailure {
            path: "device_data/temperature/2023/1/1".to_string(),
            reason: "HTTP 500: storage unavailable".to_string(),
        }
    );
}

#[tokio::test]
async fn should_time_out_hung_requests() {
    let stub = Stub {
        delay: Duration::from_secs(5),
        ..Stub::default()
    };
    let controller = controller(serve(stub).await, 1);
    select_jan_1(&controller);

    let err = controller.apply().await.unwrap_err();

    assert!(
        matches!(err, DashboardError::NetworkFailure { ref reason, .. } if reason == "timed out"),
        "{err}"
    );
}

#[tokio::test]
async fn should_report_network_failure_when_server_is_down() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    let controller = controller(format!("http://{addr}"), 5);

    let err = controller.check_liveness().await.unwrap_err();

    assert!(matches!(err, DashboardError::NetworkFailure { .. }));
    assert!(matches!(
        *controller.view().service.lock().unwrap(),
        Some(Err(DashboardError::NetworkFailure { .. }))
    ));
}
