use axum::{extract::State, Json};
use std::sync::Arc;

use crate::{db, models::MessageResponse, AppResult, AppState};

/// POST /admin/reset-schema - Drop every table and recreate the schema empty
#[utoipa::path(
    post,
    path = "/admin/reset-schema",
    responses(
        (status = 200, description = "All tables dropped and recreated", body = MessageResponse),
        (status = 401, description = "Missing or wrong X-Admin-Key")
    ),
    tag = "admin",
    security(("admin_key" = []))
)]
pub async fn reset_schema(State(state): State<Arc<AppState>>) -> AppResult<Json<MessageResponse>> {
    let mut conn = state.db.acquire().await?;
    db::reset_schema(&mut conn).await?;

    Ok(Json(MessageResponse {
        message: "Schema reset: all tables dropped and recreated".to_string(),
    }))
}
