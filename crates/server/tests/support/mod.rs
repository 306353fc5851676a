#![allow(dead_code)]

use std::sync::Arc;

use axum::{
    body::Body,
    http::{Method, Request, StatusCode},
    Router,
};
use common::clock::{Clock, FixedClock};
use configs::{AppConfig, DatabaseConfig};
use serde_json::Value;
use server::{startup, state::ServerState};
use service::timesheet::{SeaOrmTimesheetRepository, TimesheetService};
use tower::ServiceExt;

pub const TODAY: &str = "2024-05-14";

pub fn clock() -> FixedClock {
    FixedClock::ymd(2024, 5, 14).expect("valid date")
}

pub fn test_config(legacy_prefix: Option<&str>) -> AppConfig {
    let mut cfg = AppConfig::default();
    cfg.database = DatabaseConfig::in_memory();
    cfg.server.legacy_api_prefix = legacy_prefix.map(str::to_string);
    cfg
}

/// Router over a fresh in-memory database, "today" pinned to `TODAY`.
pub async fn app() -> Router {
    app_with(test_config(None)).await
}

pub async fn app_with(cfg: AppConfig) -> Router {
    let state = startup::build_state(&cfg, Arc::new(clock())).await.expect("build state");
    startup::build_app(&cfg, state)
}

/// Routers over one shared database, each with its own clock.
pub async fn apps_on_days(clocks: Vec<FixedClock>) -> Vec<Router> {
    let cfg = test_config(None);
    let db = models::db::connect_and_migrate(&cfg.database).await.expect("db");
    clocks
        .into_iter()
        .map(|c| {
            let repo = Arc::new(SeaOrmTimesheetRepository { db: db.clone() });
            let clock: Arc<dyn Clock> = Arc::new(c);
            let state = ServerState::new(TimesheetService::new(repo, clock));
            startup::build_app(&cfg, state)
        })
        .collect()
}

pub fn json_request(method: Method, uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .expect("request")
}

pub fn raw_request(method: Method, uri: &str, content_type: Option<&str>, body: &'static str) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(ct) = content_type {
        builder = builder.header("content-type", ct);
    }
    builder.body(Body::from(body)).expect("request")
}

pub fn empty_request(method: Method, uri: &str) -> Request<Body> {
    Request::builder().method(method).uri(uri).body(Body::empty()).expect("request")
}

/// Send one request; the body is parsed as JSON (`Null` when empty or not JSON).
pub async fn send(app: &Router, req: Request<Body>) -> (StatusCode, Value) {
    let res = app.clone().oneshot(req).await.expect("infallible");
    let status = res.status();
    let bytes = axum::body::to_bytes(res.into_body(), usize::MAX).await.expect("body");
    let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, value)
}

pub fn report() -> Value {
    serde_json::json!({
        "task": "Write report",
        "project": "Alpha",
        "time_started": "09:00",
        "duration": 3600
    })
}

pub async fn create(app: &Router, body: &Value) -> Value {
    let (status, created) = send(app, json_request(Method::POST, "/timesheet/daily", body)).await;
    assert_eq!(status, StatusCode::CREATED, "create failed: {created}");
    created
}
