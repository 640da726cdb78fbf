use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct User {
    pub id: i32,
    pub name: String,
    pub national_id: String,
    pub email: String,
    pub address: String,
    pub locality: String,
    pub whatsapp_contact: String,
}

/// An engagement a user has contacted, with the joined service and worker names
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct UserEngagement {
    pub engagement_id: i32,
    pub service_id: i32,
    pub service_title: String,
    pub worker_id: i32,
    pub worker_name: String,
    pub hourly_rate: Option<i32>,
    pub linked_at: DateTime<Utc>,
}
