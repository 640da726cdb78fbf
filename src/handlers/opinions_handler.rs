use axum::{
    extract::State,
    http::StatusCode,
    Json,
};
use std::sync::Arc;

use crate::{
    db,
    extractors::{AppJson, AppPath},
    models::{CreateOpinionInput, CreatedResponse, Opinion},
    AppResult, AppState,
};

/// POST /opinions/{worker_id} - Rate a worker
#[utoipa::path(
    post,
    path = "/opinions/{worker_id}",
    params(
        ("worker_id" = i32, Path, description = "Worker ID")
    ),
    request_body = CreateOpinionInput,
    responses(
        (status = 201, description = "Opinion stored", body = CreatedResponse),
        (status = 400, description = "Blank comment or rating outside 1..5"),
        (status = 404, description = "Worker not found")
    ),
    tag = "opinions"
)]
pub async fn create_opinion(
    State(state): State<Arc<AppState>>,
    AppPath(worker_id): AppPath<i32>,
    AppJson(input): AppJson<CreateOpinionInput>,
) -> AppResult<(StatusCode, Json<CreatedResponse>)> {
    input.validate()?;

    let mut conn = state.db.acquire().await?;
    let opinion = db::opinions::insert_opinion(&mut conn, worker_id, &input).await?;

    tracing::info!(opinion_id = opinion.id, worker_id, rating = opinion.rating, "Opinion stored");
    Ok((
        StatusCode::CREATED,
        Json(CreatedResponse {
            message: "Opinion stored".to_string(),
            id: opinion.id,
        }),
    ))
}

/// GET /opinions/by-worker/{worker_id}
#[utoipa::path(
    get,
    path = "/opinions/by-worker/{worker_id}",
    params(
        ("worker_id" = i32, Path, description = "Worker ID")
    ),
    responses(
        (status = 200, description = "Opinions for the worker, newest first", body = Vec<Opinion>),
        (status = 404, description = "Worker not found")
    ),
    tag = "opinions"
)]
pub async fn get_opinions_by_worker(
    State(state): State<Arc<AppState>>,
    AppPath(worker_id): AppPath<i32>,
) -> AppResult<Json<Vec<Opinion>>> {
    let mut conn = state.db.acquire().await?;
    let opinions = db::opinions::list_opinions_for_worker(&mut conn, worker_id).await?;
    Ok(Json(opinions))
}
