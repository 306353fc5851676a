use dotenvy::dotenv;
use tracing::{error, info, warn};
use uuid::Uuid;

fn init_logging() {
    // load .env first so RUST_LOG / LOG_FORMAT apply
    dotenv().ok();
    common::utils::logging::init_logging_from_env();
    info!(service = "timesheet", event = "logger_init", "tracing subscriber initialized");
}

async fn shutdown_signal(service_id: Uuid) {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(service = "timesheet", event = "signal_error", error = %e, "cannot listen for Ctrl+C");
        std::future::pending::<()>().await;
    }
    info!(service = "timesheet", event = "shutdown_signal", %service_id, "received Ctrl+C, shutting down");
}

fn main() -> std::process::ExitCode {
    init_logging();

    // service context, nothing sensitive
    let service_id = Uuid::new_v4();
    let pid = std::process::id();
    let version = env!("CARGO_PKG_VERSION");

    std::panic::set_hook(Box::new({
        let service_id = service_id;
        move |info| {
            error!(
                service = "timesheet",
                event = "panic",
                %service_id,
                pid,
                message = %info,
                "unhandled panic occurred"
            );
        }
    }));

    // config.toml first, then SERVER_HOST / SERVER_PORT / DATABASE_URL / TOKIO_WORKER_THREADS
    let cfg = match configs::AppConfig::load_or_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            error!(service = "timesheet", event = "config_invalid", error = %e, "invalid configuration");
            return std::process::ExitCode::FAILURE;
        }
    };
    let worker_threads = cfg.server.worker_threads;

    let mut builder = tokio::runtime::Builder::new_multi_thread();
    builder.enable_all();
    if let Some(w) = worker_threads { builder.worker_threads(w); }

    let rt = match builder.build() {
        Ok(rt) => rt,
        Err(e) => {
            error!(service = "timesheet", event = "runtime_build_failed", error = %e, "failed to build tokio runtime");
            return std::process::ExitCode::FAILURE;
        }
    };

    info!(
        service = "timesheet",
        event = "start",
        %service_id,
        pid,
        version,
        threads = worker_threads.unwrap_or_default(),
        "timesheet service starting"
    );

    rt.block_on(async move {
        match server::run(cfg, shutdown_signal(service_id)).await {
            Ok(()) => {
                info!(service = "timesheet", event = "stop", %service_id, pid, "server stopped normally");
                std::process::ExitCode::SUCCESS
            }
            Err(e) => {
                error!(service = "timesheet", event = "run_failed", error = %e, "server::run returned error");
                std::process::ExitCode::FAILURE
            }
        }
    })
}
