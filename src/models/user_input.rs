use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::validation::require_non_empty;
use crate::AppResult;

/// Input for registering a user
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateUserInput {
    pub name: String,
    pub national_id: String,
    pub email: String,
    pub address: String,
    pub locality: String,
    pub whatsapp_contact: String,
}

impl CreateUserInput {
    pub fn validate(&self) -> AppResult<()> {
        require_non_empty("name", &self.name)?;
        require_non_empty("national_id", &self.national_id)?;
        require_non_empty("email", &self.email)?;
        require_non_empty("address", &self.address)?;
        require_non_empty("locality", &self.locality)?;
        require_non_empty("whatsapp_contact", &self.whatsapp_contact)
    }
}

/// Input for linking a user to an engagement
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct LinkEngagementInput {
    pub engagement_id: i32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_blank_contact() {
        let input = CreateUserInput {
            name: "María".to_string(),
            national_id: "28999111".to_string(),
            email: "maria@example.com".to_string(),
            address: "Belgrano 50".to_string(),
            locality: "Santa Fe".to_string(),
            whatsapp_contact: "+5493425551111".to_string(),
        };
        assert!(input.validate().is_ok());

        let input = CreateUserInput {
            whatsapp_contact: " ".to_string(),
            ..input
        };
        assert!(input.validate().is_err());
    }
}
