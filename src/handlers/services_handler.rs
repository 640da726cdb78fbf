use axum::{extract::State, Json};
use std::sync::Arc;

use crate::{
    catalog::SERVICE_CATALOG,
    db,
    models::{SeedResponse, ServiceList},
    AppResult, AppState,
};

/// GET /services
#[utoipa::path(
    get,
    path = "/services",
    responses(
        (status = 200, description = "Every service as an id/title pair, in id order", body = ServiceList)
    ),
    tag = "services"
)]
pub async fn list_services(State(state): State<Arc<AppState>>) -> AppResult<Json<ServiceList>> {
    let mut conn = state.db.acquire().await?;
    let items = db::services::list_services(&mut conn).await?;

    Ok(Json(ServiceList { items }))
}

/// POST /services/seed - Load the fixed service catalog
#[utoipa::path(
    post,
    path = "/services/seed",
    responses(
        (status = 200, description = "Catalog seeded; count is the number of services inserted by this call", body = SeedResponse)
    ),
    tag = "services"
)]
pub async fn seed_services(State(state): State<Arc<AppState>>) -> AppResult<Json<SeedResponse>> {
    let mut conn = state.db.acquire().await?;
    let count = db::services::seed_services(&mut conn, SERVICE_CATALOG).await?;

    let skipped = SERVICE_CATALOG.len() as u64 - count;
    Ok(Json(SeedResponse {
        message: format!("Inserted {} services ({} already present)", count, skipped),
        count,
    }))
}
