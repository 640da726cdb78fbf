use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::validation::{require_in_range, require_non_empty};
use crate::AppResult;

/// Input for worker self-registration
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateWorkerInput {
    pub name: String,
    pub national_id: String,
    pub email: String,
    pub address: String,
    pub locality: String,
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
    pub whatsapp_contact: String,
    pub photo_reference: String,
    pub criminal_record_status: String,
}

impl CreateWorkerInput {
    pub fn validate(&self) -> AppResult<()> {
        require_non_empty("name", &self.name)?;
        require_non_empty("national_id", &self.national_id)?;
        require_non_empty("email", &self.email)?;
        require_non_empty("address", &self.address)?;
        require_non_empty("locality", &self.locality)?;
        require_non_empty("whatsapp_contact", &self.whatsapp_contact)?;
        require_non_empty("photo_reference", &self.photo_reference)?;
        require_non_empty("criminal_record_status", &self.criminal_record_status)?;

        if let Some(latitude) = self.latitude {
            require_in_range("latitude", latitude, -90.0, 90.0)?;
        }
        if let Some(longitude) = self.longitude {
            require_in_range("longitude", longitude, -180.0, 180.0)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::AppError;

    fn sample() -> CreateWorkerInput {
        CreateWorkerInput {
            name: "Juan Pérez".to_string(),
            national_id: "30111222".to_string(),
            email: "juan@example.com".to_string(),
            address: "San Martín 123".to_string(),
            locality: "Rosario".to_string(),
            latitude: Some(-32.9468),
            longitude: Some(-60.6393),
            whatsapp_contact: "+5493415550000".to_string(),
            photo_reference: "fotos/juan.jpg".to_string(),
            criminal_record_status: "Sin antecedentes".to_string(),
        }
    }

    #[test]
    fn accepts_complete_input() {
        assert!(sample().validate().is_ok());
    }

    #[test]
    fn geolocation_is_optional() {
        let input = CreateWorkerInput {
            latitude: None,
            longitude: None,
            ..sample()
        };
        assert!(input.validate().is_ok());
    }

    #[test]
    fn rejects_blank_required_field() {
        let input = CreateWorkerInput {
            national_id: "  ".to_string(),
            ..sample()
        };
        let err = input.validate().unwrap_err();
        assert!(matches!(err, AppError::Validation(ref msg) if msg.contains("national_id")));
    }

    #[test]
    fn rejects_out_of_range_coordinates() {
        let input = CreateWorkerInput {
            longitude: Some(200.0),
            ..sample()
        };
        assert!(input.validate().is_err());
    }

    #[test]
    fn missing_coordinates_deserialize_as_none() {
        let input: CreateWorkerInput = serde_json::from_value(serde_json::json!({
            "name": "Ana",
            "national_id": "1",
            "email": "ana@example.com",
            "address": "Mitre 1",
            "locality": "Córdoba",
            "whatsapp_contact": "351",
            "photo_reference": "ana.jpg",
            "criminal_record_status": "ok"
        }))
        .unwrap();
        assert!(input.latitude.is_none() && input.longitude.is_none());
    }
}
