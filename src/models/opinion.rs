use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Opinion {
    pub id: i32,
    pub worker_id: i32,
    pub comment: String,
    pub rating: i32,
    #[serde(serialize_with = "serialize_utc_millis")]
    pub created_at: DateTime<Utc>,
}

fn serialize_utc_millis<S>(dt: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    use chrono::SecondsFormat;
    dt.to_rfc3339_opts(SecondsFormat::Millis, true).serialize(serializer)
}
