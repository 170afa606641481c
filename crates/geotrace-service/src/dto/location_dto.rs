//! Location-related DTOs.

use geotrace_core::validation::rules::{not_blank, valid_ip_address};
use geotrace_core::{Location, LocationId, LocationUpdate};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Request to record a location for an IP address.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateLocationRequest {
    #[validate(custom(function = valid_ip_address))]
    pub ip_address: String,

    /// Username of the owning user.
    #[validate(custom(function = not_blank))]
    pub username: String,
}

/// Request to record several locations for one user.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateLocationsBulkRequest {
    pub ip_addresses: Vec<String>,

    /// Username of the owning user.
    #[validate(custom(function = not_blank))]
    pub username: String,
}

/// Request to replace the descriptive fields of a location record.
///
/// Update is a full overwrite: the address, city, and country are required,
/// and the optional geo fields are cleared when absent.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateLocationRequest {
    #[validate(custom(function = valid_ip_address))]
    pub ip_address: String,

    #[validate(custom(function = not_blank))]
    pub city: String,

    #[validate(custom(function = not_blank))]
    pub country: String,

    pub continent: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub timezone: Option<String>,
}

impl From<UpdateLocationRequest> for LocationUpdate {
    fn from(request: UpdateLocationRequest) -> Self {
        Self {
            ip_address: request.ip_address,
            city: request.city,
            country: request.country,
            continent: request.continent,
            latitude: request.latitude,
            longitude: request.longitude,
            timezone: request.timezone,
        }
    }
}

/// Location response DTO.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct LocationDto {
    pub id: LocationId,
    pub ip_address: String,
    pub city: String,
    pub country: String,
    pub continent: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub timezone: Option<String>,
}

impl From<Location> for LocationDto {
    fn from(location: Location) -> Self {
        Self {
            id: location.id,
            ip_address: location.ip_address,
            city: location.city,
            country: location.country,
            continent: location.continent,
            latitude: location.latitude,
            longitude: location.longitude,
            timezone: location.timezone,
        }
    }
}

impl From<&Location> for LocationDto {
    fn from(location: &Location) -> Self {
        Self {
            id: location.id,
            ip_address: location.ip_address.clone(),
            city: location.city.clone(),
            country: location.country.clone(),
            continent: location.continent.clone(),
            latitude: location.latitude,
            longitude: location.longitude,
            timezone: location.timezone.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use geotrace_core::ValidateExt;

    #[test]
    fn test_create_location_request_rejects_bad_ip() {
        let request = CreateLocationRequest {
            ip_address: "not-an-ip".to_string(),
            username: "alice".to_string(),
        };
        assert!(request.validate_request().is_err());
    }

    #[test]
    fn test_create_location_request_accepts_valid_ip() {
        let request = CreateLocationRequest {
            ip_address: "8.8.8.8".to_string(),
            username: "alice".to_string(),
        };
        assert!(request.validate_request().is_ok());
    }

    fn update_request() -> UpdateLocationRequest {
        UpdateLocationRequest {
            ip_address: "8.8.8.8".to_string(),
            city: "Hamburg".to_string(),
            country: "Germany".to_string(),
            continent: None,
            latitude: None,
            longitude: None,
            timezone: None,
        }
    }

    #[test]
    fn test_update_request_accepts_full_payload() {
        assert!(update_request().validate_request().is_ok());
    }

    #[test]
    fn test_update_request_rejects_bad_ip() {
        let request = UpdateLocationRequest {
            ip_address: "not-an-ip".to_string(),
            ..update_request()
        };
        assert!(request.validate_request().is_err());
    }

    #[test]
    fn test_update_request_rejects_blank_city() {
        let request = UpdateLocationRequest {
            city: "  ".to_string(),
            ..update_request()
        };
        assert!(request.validate_request().is_err());
    }
}
