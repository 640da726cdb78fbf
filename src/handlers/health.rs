use axum::Json;
use serde_json::{json, Value};

/// Liveness only; the database is checked by /admin/debug.
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Process is up")
    ),
    tag = "health"
)]
pub async fn health_check() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "service": env!("CARGO_PKG_NAME"),
    }))
}
