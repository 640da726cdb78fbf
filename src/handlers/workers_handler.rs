use axum::{
    extract::State,
    http::StatusCode,
    Json,
};
use std::sync::Arc;

use crate::{
    db,
    extractors::{AppJson, AppPath},
    models::{CreateWorkerInput, CreatedResponse, Worker, WorkersByService},
    AppResult, AppState,
};

/// POST /workers - Worker self-registration
#[utoipa::path(
    post,
    path = "/workers",
    request_body = CreateWorkerInput,
    responses(
        (status = 201, description = "Worker registered", body = CreatedResponse),
        (status = 400, description = "Missing or invalid fields"),
        (status = 409, description = "national_id already registered")
    ),
    tag = "workers"
)]
pub async fn create_worker(
    State(state): State<Arc<AppState>>,
    AppJson(input): AppJson<CreateWorkerInput>,
) -> AppResult<(StatusCode, Json<CreatedResponse>)> {
    input.validate()?;

    let mut conn = state.db.acquire().await?;
    let id = db::workers::insert_worker(&mut conn, &input).await?;

    tracing::info!(worker_id = id, "Worker registered");
    Ok((
        StatusCode::CREATED,
        Json(CreatedResponse {
            message: "Worker registered".to_string(),
            id,
        }),
    ))
}

/// GET /workers
#[utoipa::path(
    get,
    path = "/workers",
    responses(
        (status = 200, description = "All workers in id order", body = Vec<Worker>)
    ),
    tag = "workers"
)]
pub async fn list_workers(State(state): State<Arc<AppState>>) -> AppResult<Json<Vec<Worker>>> {
    let mut conn = state.db.acquire().await?;
    let workers = db::workers::list_workers(&mut conn).await?;
    Ok(Json(workers))
}

/// GET /workers/{id}
#[utoipa::path(
    get,
    path = "/workers/{id}",
    params(
        ("id" = i32, Path, description = "Worker ID")
    ),
    responses(
        (status = 200, description = "The worker", body = Worker),
        (status = 404, description = "Worker not found")
    ),
    tag = "workers"
)]
pub async fn get_worker(
    State(state): State<Arc<AppState>>,
    AppPath(worker_id): AppPath<i32>,
) -> AppResult<Json<Worker>> {
    let mut conn = state.db.acquire().await?;
    let worker = db::workers::fetch_worker(&mut conn, worker_id).await?;
    Ok(Json(worker))
}

/// GET /workers/by-service/{title}
#[utoipa::path(
    get,
    path = "/workers/by-service/{title}",
    params(
        ("title" = String, Path, description = "Exact service title, URL-encoded")
    ),
    responses(
        (status = 200, description = "Workers offering the service; empty when none or unknown title", body = WorkersByService)
    ),
    tag = "workers"
)]
pub async fn get_workers_by_service(
    State(state): State<Arc<AppState>>,
    AppPath(title): AppPath<String>,
) -> AppResult<Json<WorkersByService>> {
    let mut conn = state.db.acquire().await?;
    let workers = db::workers::find_workers_by_service_title(&mut conn, &title).await?;
    Ok(Json(WorkersByService { workers }))
}
