use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Worker {
    pub id: i32,
    pub name: String,
    pub national_id: String,
    pub email: String,
    pub address: String,
    pub locality: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub whatsapp_contact: String,
    pub photo_reference: String,
    pub criminal_record_status: String,
}

/// Worker row joined with the service it was matched on
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct WorkerSummary {
    pub id: i32,
    pub name: String,
    pub criminal_record_status: String,
    pub photo_reference: String,
    pub whatsapp_contact: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub service_title: String,
    pub hourly_rate: Option<i32>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct WorkersByService {
    pub workers: Vec<WorkerSummary>,
}
