use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// A worker offering one service; unique per (service_id, worker_id)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Engagement {
    pub id: i32,
    pub service_id: i32,
    pub worker_id: i32,
    pub hourly_rate: Option<i32>,
}
