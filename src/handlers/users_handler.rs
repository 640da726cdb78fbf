use axum::{
    extract::State,
    http::StatusCode,
    Json,
};
use std::sync::Arc;

use crate::{
    db,
    extractors::{AppJson, AppPath},
    models::{CreateUserInput, CreatedResponse, LinkEngagementInput, MessageResponse, User, UserEngagement},
    AppResult, AppState,
};

/// POST /users
#[utoipa::path(
    post,
    path = "/users",
    request_body = CreateUserInput,
    responses(
        (status = 201, description = "User registered", body = CreatedResponse),
        (status = 400, description = "Missing or blank fields"),
        (status = 409, description = "national_id already registered")
    ),
    tag = "users"
)]
pub async fn create_user(
    State(state): State<Arc<AppState>>,
    AppJson(input): AppJson<CreateUserInput>,
) -> AppResult<(StatusCode, Json<CreatedResponse>)> {
    input.validate()?;

    let mut conn = state.db.acquire().await?;
    let id = db::users::insert_user(&mut conn, &input).await?;

    tracing::info!(user_id = id, "User registered");
    Ok((
        StatusCode::CREATED,
        Json(CreatedResponse {
            message: "User registered".to_string(),
            id,
        }),
    ))
}

/// GET /users
#[utoipa::path(
    get,
    path = "/users",
    responses(
        (status = 200, description = "All users in id order", body = Vec<User>)
    ),
    tag = "users"
)]
pub async fn list_users(State(state): State<Arc<AppState>>) -> AppResult<Json<Vec<User>>> {
    let mut conn = state.db.acquire().await?;
    let users = db::users::list_users(&mut conn).await?;
    Ok(Json(users))
}

/// POST /users/{id}/engagements - Record that a user contacted a worker for a service
#[utoipa::path(
    post,
    path = "/users/{id}/engagements",
    params(
        ("id" = i32, Path, description = "User ID")
    ),
    request_body = LinkEngagementInput,
    responses(
        (status = 201, description = "Link created", body = MessageResponse),
        (status = 404, description = "User or engagement not found"),
        (status = 409, description = "Already linked")
    ),
    tag = "users"
)]
pub async fn link_engagement(
    State(state): State<Arc<AppState>>,
    AppPath(user_id): AppPath<i32>,
    AppJson(input): AppJson<LinkEngagementInput>,
) -> AppResult<(StatusCode, Json<MessageResponse>)> {
    let mut conn = state.db.acquire().await?;
    db::users::link_engagement(&mut conn, user_id, input.engagement_id).await?;

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse {
            message: format!("User {} linked to engagement {}", user_id, input.engagement_id),
        }),
    ))
}

/// GET /users/{id}/engagements
#[utoipa::path(
    get,
    path = "/users/{id}/engagements",
    params(
        ("id" = i32, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "Engagements the user is linked to", body = Vec<UserEngagement>),
        (status = 404, description = "User not found")
    ),
    tag = "users"
)]
pub async fn get_user_engagements(
    State(state): State<Arc<AppState>>,
    AppPath(user_id): AppPath<i32>,
) -> AppResult<Json<Vec<UserEngagement>>> {
    let mut conn = state.db.acquire().await?;
    let engagements = db::users::list_user_engagements(&mut conn, user_id).await?;
    Ok(Json(engagements))
}
