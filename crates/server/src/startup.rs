use std::{future::Future, net::SocketAddr, sync::Arc};

use axum::Router;
use common::clock::{Clock, SystemClock};
use configs::AppConfig;
use service::timesheet::{SeaOrmTimesheetRepository, TimesheetService};
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tracing::info;

use crate::errors::StartupError;
use crate::routes;
use crate::state::ServerState;

/// Any origin, any method, any header: the front-end is hosted elsewhere.
pub fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

/// Prepare storage and wire the timesheet service around it.
pub async fn build_state(cfg: &AppConfig, clock: Arc<dyn Clock>) -> Result<ServerState, StartupError> {
    service::runtime::ensure_env(&cfg.database.url)
        .await
        .map_err(|e| StartupError::Runtime(e.to_string()))?;
    let db = models::db::connect_and_migrate(&cfg.database).await?;
    let repo = Arc::new(SeaOrmTimesheetRepository { db });
    Ok(ServerState::new(TimesheetService::new(repo, clock)))
}

pub fn build_app(cfg: &AppConfig, state: ServerState) -> Router {
    routes::build_router(state, build_cors(), cfg.server.legacy_api_prefix.as_deref())
}

/// Serve `app` on an already bound listener until `shutdown` resolves.
pub async fn serve<F>(listener: TcpListener, app: Router, shutdown: F) -> anyhow::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    axum::serve(listener, app).with_graceful_shutdown(shutdown).await?;
    Ok(())
}

/// Public entry: build the app from `cfg` and run the HTTP server until `shutdown`.
pub async fn run<F>(cfg: AppConfig, shutdown: F) -> anyhow::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let state = build_state(&cfg, Arc::new(SystemClock)).await?;
    let app = build_app(&cfg, state);

    let addr: SocketAddr = cfg
        .server
        .bind_addr()
        .parse()
        .map_err(|e| StartupError::InvalidConfig(format!("bind address: {e}")))?;
    let listener = TcpListener::bind(addr).await?;
    info!(%addr, legacy_prefix = ?cfg.server.legacy_api_prefix, "timesheet server listening");
    serve(listener, app, shutdown).await
}
