use axum::{extract::State, Json};
use serde::Serialize;
use std::sync::Arc;
use std::time::SystemTime;
use utoipa::ToSchema;

use crate::AppState;

#[derive(Serialize, ToSchema)]
pub struct DebugInfo {
    pub version: String,
    pub environment: String,
    pub uptime_seconds: u64,
    pub database_status: String,
    pub database_connections: u32,
    pub database_idle_connections: usize,
    pub timestamp: u64,
}

static START_TIME: once_cell::sync::Lazy<SystemTime> =
    once_cell::sync::Lazy::new(SystemTime::now);

/// Touches the start time so uptime counts from boot rather than the first /admin/debug call.
pub fn mark_started() {
    once_cell::sync::Lazy::force(&START_TIME);
}

/// GET /admin/debug
#[utoipa::path(
    get,
    path = "/admin/debug",
    responses(
        (status = 200, description = "Build, uptime and database pool status", body = DebugInfo),
        (status = 401, description = "Missing or wrong X-Admin-Key")
    ),
    tag = "admin",
    security(("admin_key" = []))
)]
pub async fn debug_handler(State(state): State<Arc<AppState>>) -> Json<DebugInfo> {
    let db_status = match sqlx::query("SELECT 1").fetch_one(&state.db).await {
        Ok(_) => "connected".to_string(),
        Err(e) => format!("error: {}", e),
    };

    let uptime = START_TIME.elapsed().unwrap_or_default().as_secs();

    let info = DebugInfo {
        version: env!("CARGO_PKG_VERSION").to_string(),
        environment: std::env::var("ENVIRONMENT")
            .unwrap_or_else(|_| "development".to_string()),
        uptime_seconds: uptime,
        database_status: db_status,
        database_connections: state.db.size(),
        database_idle_connections: state.db.num_idle(),
        timestamp: SystemTime::now()
            .duration_since(SystemTime::UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs(),
    };

    Json(info)
}
