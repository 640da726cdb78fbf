use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Service {
    pub id: i32,
    pub title: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ServiceList {
    pub items: Vec<Service>,
}

/// Response for the catalog seed; `count` is the number of newly inserted services
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SeedResponse {
    pub message: String,
    pub count: u64,
}
