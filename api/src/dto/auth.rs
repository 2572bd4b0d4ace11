//! DTOs for the registration and OTP verification endpoints.
//!
//! Wire field names are camelCase, matching the mobile client.

use serde::{Deserialize, Serialize};
use validator::Validate;

use cam_core::domain::entities::user::{Coordinates, Location};

/// Coordinates as sent by the client
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CoordinatesDto {
    pub latitude: f64,
    pub longitude: f64,
}

/// Nested location payload for registration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationDto {
    pub street: String,
    pub city: String,
    #[serde(default)]
    pub state: Option<String>,
    pub country: String,
    pub postal_code: String,
    pub coordinates: CoordinatesDto,
}

impl From<LocationDto> for Location {
    fn from(dto: LocationDto) -> Self {
        Location {
            street: dto.street,
            city: dto.city,
            state: dto.state,
            country: dto.country,
            postal_code: dto.postal_code,
            coordinates: Coordinates {
                latitude: dto.coordinates.latitude,
                longitude: dto.coordinates.longitude,
            },
        }
    }
}

/// Request body for POST /api/auth/register
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    #[validate(length(min = 1, message = "Missing required fields."))]
    pub name: String,
    #[validate(length(min = 1, message = "Missing required fields."))]
    pub phone_number: String,
    pub location: LocationDto,
}

/// Response body for a successful registration.
///
/// The one-time code is echoed for demo/test use; a production deployment
/// delivers it out-of-band instead.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterResponse {
    pub message: String,
    pub otp: String,
}

/// Request body for POST /api/auth/verify-otp
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct VerifyOtpRequest {
    #[validate(length(min = 1, message = "Missing required fields."))]
    pub phone_number: String,
    #[validate(length(min = 1, message = "Missing required fields."))]
    pub otp: String,
}

/// Response body for a successful verification
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerifyOtpResponse {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
}
