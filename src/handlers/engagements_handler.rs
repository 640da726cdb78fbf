use axum::{extract::State, http::StatusCode, Json};
use std::sync::Arc;

use crate::{
    db,
    extractors::AppJson,
    models::{CreateEngagementInput, CreatedResponse, Engagement},
    AppResult, AppState,
};

/// POST /engagements - A worker starts offering a service
#[utoipa::path(
    post,
    path = "/engagements",
    request_body = CreateEngagementInput,
    responses(
        (status = 201, description = "Engagement created", body = CreatedResponse),
        (status = 400, description = "Missing fields or negative hourly_rate"),
        (status = 404, description = "Service or worker not found"),
        (status = 409, description = "The worker already offers this service")
    ),
    tag = "engagements"
)]
pub async fn create_engagement(
    State(state): State<Arc<AppState>>,
    AppJson(input): AppJson<CreateEngagementInput>,
) -> AppResult<(StatusCode, Json<CreatedResponse>)> {
    input.validate()?;

    let mut conn = state.db.acquire().await?;
    let engagement = db::engagements::create_engagement(&mut conn, &input).await?;

    tracing::info!(
        engagement_id = engagement.id,
        service_id = engagement.service_id,
        worker_id = engagement.worker_id,
        "Engagement created"
    );
    Ok((
        StatusCode::CREATED,
        Json(CreatedResponse {
            message: "Engagement created".to_string(),
            id: engagement.id,
        }),
    ))
}

/// GET /engagements
#[utoipa::path(
    get,
    path = "/engagements",
    responses(
        (status = 200, description = "All engagements in id order", body = Vec<Engagement>)
    ),
    tag = "engagements"
)]
pub async fn list_engagements(State(state): State<Arc<AppState>>) -> AppResult<Json<Vec<Engagement>>> {
    let mut conn = state.db.acquire().await?;
    let engagements = db::engagements::list_engagements(&mut conn).await?;
    Ok(Json(engagements))
}
