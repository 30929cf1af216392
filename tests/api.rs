//! API integration tests

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use std::io::Write;
use std::sync::Arc;
use tower::util::ServiceExt;

use health_probe::api;
use health_probe::config::EnvConfig;
use health_probe::domain::{CoreTimeSnapshot, ProjectMetadata};
use health_probe::error::HealthError;
use health_probe::infra::ProcStatReader;
use health_probe::services::{Clock, CpuTimesSource, HealthService};
use health_probe::state::AppState;

struct FixedCpuTimes(Vec<CoreTimeSnapshot>);

impl CpuTimesSource for FixedCpuTimes {
    fn snapshot(&self) -> Result<Vec<CoreTimeSnapshot>, HealthError> {
        Ok(self.0.clone())
    }
}

struct FixedClock;

impl Clock for FixedClock {
    fn uptime_secs(&self) -> f64 {
        42.25
    }

    fn now_millis(&self) -> i64 {
        1_700_000_000_000
    }
}

fn reference_cores() -> Vec<CoreTimeSnapshot> {
    vec![
        CoreTimeSnapshot::from_ticks(8285130, 0, 5109250, 45425440, 0),
        CoreTimeSnapshot::from_ticks(7834230, 0, 4626940, 46354800, 0),
    ]
}

fn create_test_router(cpu: impl CpuTimesSource + 'static) -> Router {
    let health = HealthService::new(
        ProjectMetadata::new("health-probe", vec!["Ryan".to_string()]),
        Arc::new(cpu),
        Arc::new(FixedClock),
    );
    let state = AppState::with_health(EnvConfig::default(), health);
    api::router(Arc::new(state))
}

/// Helper to make GET requests
async fn get_json(app: &Router, uri: &str) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();

    let status = response.status();
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();

    let body: Value = if body_bytes.is_empty() {
        json!({})
    } else {
        serde_json::from_slice(&body_bytes).unwrap()
    };

    (status, body)
}

#[tokio::test]
async fn test_health_report() {
    let app = create_test_router(FixedCpuTimes(reference_cores()));

    let (status, body) = get_json(&app, "/").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "project": "health-probe",
            "authors": ["Ryan"],
            "usage": 13.7,
            "uptime": 42.25,
            "time": 1_700_000_000_000i64,
        })
    );
}

#[tokio::test]
async fn test_health_report_empty_snapshot_is_500() {
    let app = create_test_router(FixedCpuTimes(vec![]));

    let (status, body) = get_json(&app, "/").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "internal_error");
    assert_eq!(body["message"], "invalid input: no cpu snapshots");
}

#[tokio::test]
async fn test_health_report_zero_ticks_is_500() {
    let app = create_test_router(FixedCpuTimes(vec![CoreTimeSnapshot::from_ticks(
        0, 0, 0, 0, 0,
    )]));

    let (status, body) = get_json(&app, "/").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "internal_error");
}

#[tokio::test]
async fn test_health_report_from_proc_stat_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "cpu  16119360 0 9736190 91780240 0 0 0 0 0 0").unwrap();
    writeln!(file, "cpu0 8285130 0 5109250 45425440 0 0 0 0 0 0").unwrap();
    writeln!(file, "cpu1 7834230 0 4626940 46354800 0 0 0 0 0 0").unwrap();
    writeln!(file, "ctxt 12345").unwrap();

    let app = create_test_router(ProcStatReader::new(file.path()));

    let (status, body) = get_json(&app, "/").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["usage"], 13.7);
}

#[tokio::test]
async fn test_health_report_missing_proc_stat_is_500() {
    let app = create_test_router(ProcStatReader::new("/nonexistent/proc/stat"));

    let (status, body) = get_json(&app, "/").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body["message"]
        .as_str()
        .unwrap()
        .contains("failed to collect cpu times"));
}

#[tokio::test]
async fn test_unknown_route_is_404() {
    let app = create_test_router(FixedCpuTimes(reference_cores()));

    let (status, body) = get_json(&app, "/health").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "not_found");
    assert_eq!(body["message"], "route /health not found");
}
