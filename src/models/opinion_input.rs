use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::validation::{require_in_range, require_non_empty};
use crate::AppResult;

pub const MIN_RATING: i32 = 1;
pub const MAX_RATING: i32 = 5;

/// Input for rating a worker
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateOpinionInput {
    pub comment: String,
    #[schema(minimum = 1, maximum = 5)]
    pub rating: i32,
}

impl CreateOpinionInput {
    pub fn validate(&self) -> AppResult<()> {
        require_non_empty("comment", &self.comment)?;
        require_in_range("rating", self.rating, MIN_RATING, MAX_RATING)
    }
}
