pub mod timesheet;

use axum::{
    routing::{get, put},
    Json, Router,
};
use tower_http::{
    cors::CorsLayer,
    trace::{TraceLayer, DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, DefaultOnFailure},
};
use tracing::Level;
use utoipa::OpenApi;

use common::types::Health;

use crate::openapi::ApiDoc;
use crate::state::ServerState;

pub const TIMESHEET_PATH: &str = "/timesheet/daily";

#[utoipa::path(
    get, path = "/health", tag = "health",
    responses((status = 200, description = "Service is up", body = crate::openapi::HealthResponse))
)]
pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

/// Timesheet routes relative to whatever prefix they are mounted under.
fn timesheet_routes() -> Router<ServerState> {
    Router::new()
        .route(TIMESHEET_PATH, get(timesheet::list).post(timesheet::create))
        .route(&format!("{TIMESHEET_PATH}/:id"), put(timesheet::update).delete(timesheet::delete))
}

/// Build the full application router.
///
/// `legacy_prefix` additionally mounts the timesheet routes under that prefix
/// (e.g. `/api/timesheet/daily`).
pub fn build_router(state: ServerState, cors: CorsLayer, legacy_prefix: Option<&str>) -> Router {
    let mut app = Router::new()
        .route("/health", get(health))
        .route("/api-docs/openapi.json", get(openapi_json))
        .merge(timesheet_routes());
    if let Some(prefix) = legacy_prefix {
        app = app.nest(prefix, timesheet_routes());
    }

    app.with_state(state)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(
                    DefaultMakeSpan::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                .on_request(
                    DefaultOnRequest::new()
                        .level(Level::INFO),
                )
                // status code and latency
                .on_response(
                    DefaultOnResponse::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                // 5xx and transport errors
                .on_failure(
                    DefaultOnFailure::new()
                        .level(Level::ERROR),
                )
        )
}
