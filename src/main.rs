//! hawaii-climate - a read-only HTTP API over Hawaii weather-station data
//!
//! This is the main entry point for the hawaii-climate application.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Instant;
use tokio::signal;
use tracing::{error, info};

use hawaii_climate::handlers::heartbeat::record_start_time;
use hawaii_climate::{
    init_tracing, log_dataset_stats, log_error, log_operation_end, log_operation_start, router,
    AppState, ClimateError, Config, Database, Result,
};

fn main() -> Result<()> {
    let (config, database_path) = Config::load()?;

    init_tracing(&config.log_level);
    info!("Starting hawaii-climate v{}", env!("CARGO_PKG_VERSION"));

    config.validate().map_err(|e| {
        error!("Invalid configuration: {}", e);
        e
    })?;

    let mut runtime = tokio::runtime::Builder::new_multi_thread();
    runtime.enable_all();
    if let Some(workers) = config.server.workers {
        runtime.worker_threads(workers);
    }
    let runtime = runtime.build()?;

    runtime.block_on(serve(config, database_path))
}

async fn serve(config: Config, database_path: std::path::PathBuf) -> Result<()> {
    record_start_time();

    let open_started = Instant::now();
    log_operation_start("database_open", Some(&database_path.display().to_string()));

    let db = Database::open(&database_path, &config.database)
        .await
        .map_err(|e| {
            log_error(&e, "opening database");
            e
        })?;

    let state = match AppState::initialize(config.clone(), db.clone()).await {
        Ok(state) => state,
        Err(e) => {
            log_error(&e, "verifying database schema");
            log_operation_end("database_open", open_started, false);
            db.close().await;
            return Err(e);
        }
    };
    log_operation_end("database_open", open_started, true);
    log_dataset_stats(&database_path.display().to_string(), &state.dataset);

    let app = router(Arc::new(state));

    let addr = SocketAddr::from((
        config
            .server
            .host
            .parse::<std::net::IpAddr>()
            .map_err(|e| ClimateError::Config {
                message: format!("Invalid host address: {}", e),
            })?,
        config.server.port,
    ));

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|e| ClimateError::Server {
            message: format!("Failed to bind to address: {}", e),
        })?;

    info!("Server listening on http://{}", addr);

    let served = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| ClimateError::Server {
            message: format!("Server error: {}", e),
        });

    db.close().await;
    served?;

    info!("Server has been gracefully shut down");
    Ok(())
}

/// Wait for a shutdown signal
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, starting graceful shutdown");
        },
        _ = terminate => {
            info!("Received SIGTERM, starting graceful shutdown");
        },
    }
}
