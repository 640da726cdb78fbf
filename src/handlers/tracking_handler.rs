use axum::{extract::State, http::StatusCode, Json};
use std::sync::Arc;

use crate::{
    db,
    extractors::AppJson,
    models::{TrackingAck, TrackingPingInput},
    AppResult, AppState,
};

/// POST /tracking
#[utoipa::path(
    post,
    path = "/tracking",
    request_body = TrackingPingInput,
    responses(
        (status = 201, description = "Ping recorded", body = TrackingAck),
        (status = 400, description = "Missing fields")
    ),
    tag = "tracking"
)]
pub async fn record_ping(
    State(state): State<Arc<AppState>>,
    AppJson(ping): AppJson<TrackingPingInput>,
) -> AppResult<(StatusCode, Json<TrackingAck>)> {
    ping.validate()?;

    let mut conn = state.db.acquire().await?;
    let id = db::tracking::insert_ping(&mut conn, &ping).await?;

    tracing::debug!(ping_id = id, device = %ping.device_identifier, "Tracking ping recorded");
    Ok((StatusCode::CREATED, Json(TrackingAck { ok: true })))
}
