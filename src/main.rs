use std::net::SocketAddr;
use std::sync::Arc;

use agri_assist::{
    auth::PasswordService, config::AppConfig, create_router, store::MemoryStore, AppState,
};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    // Load environment variables from .env file
    dotenv::dotenv().ok();

    // Initialize tracing subscriber for logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("agri_assist=debug,tower_http=info")),
        )
        .with_target(false)
        .with_level(true)
        .init();

    tracing::info!("Agri-Assist API - Starting...");

    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Invalid configuration: {}", e);
            std::process::exit(1);
        }
    };

    if config.weather_api_key.is_none() {
        tracing::warn!("WEATHER_API_KEY is not set, weather proxy endpoints will fail");
    }

    let store = Arc::new(MemoryStore::seeded());
    let stats = store.stats().await;
    tracing::info!(
        "In-memory store seeded: {} schemes, {} market prices, {} weather readings",
        stats.schemes,
        stats.market_prices,
        stats.weather_readings
    );

    let state = AppState::new(&config, store, PasswordService::default());
    let app = create_router(state, &config);

    let addr = config.bind_address();
    tracing::info!("Starting server on {}", addr);

    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(listener) => listener,
        Err(e) => {
            tracing::error!("Failed to bind to {}: {}", addr, e);
            std::process::exit(1);
        }
    };

    tracing::info!("Agri-Assist API is running on http://{} ({})", addr, config.environment);
    tracing::info!("Swagger UI available at http://{}/swagger-ui", addr);

    if let Err(e) = axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await
    {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }

    tracing::info!("Server stopped");
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received, draining connections");
}
