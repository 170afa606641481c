//! # GeoTrace Server
//!
//! Main entry point. Wires configuration, the database pool, the
//! geolocation client, services, and the REST router together.

use geotrace_config::ConfigLoader;
use geotrace_core::{GeotraceError, GeotraceResult, RequestCounter};
use geotrace_geoip::IpApiClient;
use geotrace_repository::{create_pool, PgLocationRepository, PgUserRepository};
use geotrace_rest::{create_router, AppState};
use geotrace_service::{CacheManager, LocationServiceImpl, UserServiceImpl};
use std::sync::Arc;
use tokio::signal;
use tracing::{error, info};

#[tokio::main]
async fn main() {
    init_logging();

    info!("Starting GeoTrace server...");
    info!("Version: {}", env!("CARGO_PKG_VERSION"));

    if let Err(e) = run().await {
        error!("Application error: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> GeotraceResult<()> {
    let config_loader = ConfigLoader::from_default_location()?;
    let config = config_loader.get();

    info!("Environment: {}", config.app.environment);

    let db_pool = create_pool(&config.database).await?;
    db_pool.run_migrations().await?;

    let user_repository = Arc::new(PgUserRepository::new(db_pool.clone()));
    let location_repository = Arc::new(PgLocationRepository::new(db_pool.clone()));

    let geo_client = Arc::new(
        IpApiClient::new(&config.geoip)
            .map_err(|e| GeotraceError::Configuration(e.to_string()))?,
    );

    // One cache and one counter shared by both services.
    let cache = Arc::new(CacheManager::new());
    let counter = Arc::new(RequestCounter::new());

    let user_service = Arc::new(UserServiceImpl::new(
        user_repository.clone(),
        cache.clone(),
        counter.clone(),
    ));
    let location_service = Arc::new(LocationServiceImpl::new(
        location_repository,
        user_repository,
        geo_client,
        cache,
        counter.clone(),
    ));

    let app_state = AppState::new(user_service, location_service, counter);
    let router = create_router(app_state, &config.server);

    let rest_addr = config.server.rest_addr();
    info!("Starting REST server on http://{}", rest_addr);

    let listener = tokio::net::TcpListener::bind(&rest_addr)
        .await
        .map_err(|e| GeotraceError::Internal(format!("Failed to bind REST: {}", e)))?;

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| GeotraceError::Internal(format!("REST server error: {}", e)))?;

    db_pool.close().await;
    info!("Server shutdown complete");
    Ok(())
}

fn init_logging() {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,geotrace=debug,tower_http=debug"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(true))
        .init();
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, initiating graceful shutdown...");
        }
        _ = terminate => {
            info!("Received terminate signal, initiating graceful shutdown...");
        }
    }
}
