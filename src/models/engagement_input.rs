use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{AppError, AppResult};

/// Input for creating an engagement
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateEngagementInput {
    pub service_id: i32,
    pub worker_id: i32,
    #[serde(default)]
    pub hourly_rate: Option<i32>,
}

impl CreateEngagementInput {
    pub fn validate(&self) -> AppResult<()> {
        if let Some(rate) = self.hourly_rate {
            if rate < 0 {
                return Err(AppError::Validation(format!(
                    "hourly_rate must not be negative, got {}",
                    rate
                )));
            }
        }
        Ok(())
    }
}
