mod catalog;
mod config;
mod db;
mod error;
mod extractors;
mod handlers;
mod middleware;
mod models;
mod openapi;
mod startup;

use std::sync::Arc;
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

pub use config::AppConfig;
pub use error::{AppError, AppResult};
pub use handlers::MetricsState;

#[derive(Clone)]
pub struct AppState {
    pub db: sqlx::PgPool,
    pub config: AppConfig,
    pub metrics: Arc<MetricsState>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Before RUST_LOG / LOG_FORMAT are read
    dotenvy::dotenv().ok();

    let use_json = std::env::var("LOG_FORMAT")
        .unwrap_or_else(|_| "text".to_string()) == "json";

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "info,laburantes_api=debug,tower_http=debug".into());

    if use_json {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }

    handlers::debug::mark_started();

    let config = AppConfig::from_env().map_err(|e| {
        tracing::error!("Configuration error: {}", e);
        e
    })?;

    let pool = db::create_pool(&config.database_url, config.database_max_connections)
        .await
        .map_err(|e| {
            tracing::error!("Failed to create database pool: {}", e);
            e
        })?;

    tracing::info!("Database pool created successfully");

    // Non-destructive: only creates what is missing
    {
        let mut conn = pool.acquire().await?;
        db::initialize_schema(&mut conn).await?;

        if config.seed_services_on_startup {
            let inserted = db::services::seed_services(&mut conn, catalog::SERVICE_CATALOG).await?;
            tracing::info!(inserted, "Service catalog seeded on startup");
        }
    }

    let metrics_state = Arc::new(handlers::setup_metrics_recorder()?);
    tracing::info!("Metrics recorder initialized");

    let bind_addr = config.bind_addr.clone();

    let state = Arc::new(AppState {
        db: pool,
        config,
        metrics: metrics_state,
    });

    let app = startup::build_router(state);
    let listener = TcpListener::bind(&bind_addr).await?;
    tracing::info!("Server listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;

    Ok(())
}
