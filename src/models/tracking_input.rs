use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::validation::require_non_empty;
use crate::AppResult;

/// A device location report. Fields are stored as sent.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TrackingPingInput {
    pub date: String,
    pub time: String,
    pub device_identifier: String,
    pub latitude: String,
    pub longitude: String,
}

impl TrackingPingInput {
    pub fn validate(&self) -> AppResult<()> {
        require_non_empty("date", &self.date)?;
        require_non_empty("time", &self.time)?;
        require_non_empty("device_identifier", &self.device_identifier)?;
        require_non_empty("latitude", &self.latitude)?;
        require_non_empty("longitude", &self.longitude)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TrackingAck {
    pub ok: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_field_is_required() {
        let ping = TrackingPingInput {
            date: "2025-07-14".to_string(),
            time: "18:30:05".to_string(),
            device_identifier: "device-42".to_string(),
            latitude: "-32.94".to_string(),
            longitude: "-60.63".to_string(),
        };
        assert!(ping.validate().is_ok());

        let ping = TrackingPingInput {
            device_identifier: String::new(),
            ..ping
        };
        assert!(ping.validate().is_err());
    }
}
