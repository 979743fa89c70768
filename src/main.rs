//! Tripdesk server entry point.

use std::sync::Arc;
use std::time::Duration;

use axum::http::HeaderValue;
use sqlx::postgres::PgPoolOptions;
use tower_http::cors::{Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use tripdesk::adapters::ai::{GeminiConfig, GeminiGateway};
use tripdesk::adapters::auth::JwtSessionValidator;
use tripdesk::adapters::http::{api_router, AppState};
use tripdesk::adapters::postgres::{
    PostgresClientRepository, PostgresConversationLog, PostgresInvoiceRepository,
    PostgresItineraryRepository, PostgresSupplierRepository,
};
use tripdesk::config::AppConfig;
use tripdesk::ports::{ModelGateway, SessionValidator};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    config.validate()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.server.log_level)),
        )
        .init();

    let pool = PgPoolOptions::new()
        .min_connections(config.database.min_connections)
        .max_connections(config.database.max_connections)
        .acquire_timeout(config.database.acquire_timeout())
        .connect(&config.database.url)
        .await?;

    if config.database.run_migrations {
        sqlx::migrate!("./migrations").run(&pool).await?;
        tracing::info!("migrations applied");
    }

    let gateway = Arc::new(GeminiGateway::new(GeminiConfig::from(&config.ai)));
    tracing::info!(model = gateway.model_name(), "model gateway ready");

    let state = AppState::new(
        gateway,
        Arc::new(PostgresClientRepository::new(pool.clone())),
        Arc::new(PostgresItineraryRepository::new(pool.clone())),
        Arc::new(PostgresInvoiceRepository::new(pool.clone())),
        Arc::new(PostgresSupplierRepository::new(pool.clone())),
        Arc::new(PostgresConversationLog::new(pool)),
    );
    let validator: Arc<dyn SessionValidator> = Arc::new(JwtSessionValidator::new(&config.auth));

    let cors = if config.server.is_production() {
        let origins: Vec<HeaderValue> = config
            .server
            .cors_origins_list()
            .iter()
            .filter_map(|origin| origin.parse().ok())
            .collect();
        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        CorsLayer::permissive()
    };

    let app = api_router(state, validator)
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::new(Duration::from_secs(
            config.server.request_timeout_secs,
        )))
        .layer(cors);

    let addr = config.server.socket_addr();
    tracing::info!(%addr, "tripdesk listening");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
