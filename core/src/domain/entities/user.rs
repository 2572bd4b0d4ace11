//! User entity representing a registrant in the Camellia onboarding flow.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Geographic point captured during registration
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    /// Latitude in degrees, must lie in [-90, 90]
    pub latitude: f64,

    /// Longitude in degrees, must lie in [-180, 180]
    pub longitude: f64,
}

impl Coordinates {
    /// Checks that the point lies within valid latitude/longitude ranges
    pub fn is_in_range(&self) -> bool {
        (-90.0..=90.0).contains(&self.latitude) && (-180.0..=180.0).contains(&self.longitude)
    }
}

/// Postal address plus coordinates captured at registration time.
///
/// This is the canonical nested shape; all fields except `state` are
/// required.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub street: String,
    pub city: String,
    pub state: Option<String>,
    pub country: String,
    pub postal_code: String,
    pub coordinates: Coordinates,
}

/// User entity representing a registered user.
///
/// A record moves through exactly two lifecycle states: Pending
/// (`is_verified` false, `otp` set) and Verified (`is_verified` true,
/// `otp` cleared). The flag is monotonic; it never goes back to false.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier for the user
    pub id: Uuid,

    /// Display name
    pub name: String,

    /// Ten-digit phone number, the natural lookup key
    pub phone_number: String,

    /// Address and coordinates captured at registration
    pub location: Location,

    /// One-time code, present only while unverified
    pub otp: Option<String>,

    /// Whether the user's phone number has been verified
    pub is_verified: bool,

    /// Timestamp when the user was created
    pub created_at: DateTime<Utc>,

    /// Timestamp when the user was last updated
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Creates a new pending user with the given one-time code
    pub fn new(name: String, phone_number: String, location: Location, otp: String) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            name,
            phone_number,
            location,
            otp: Some(otp),
            is_verified: false,
            created_at: now,
            updated_at: now,
        }
    }

    /// Marks the user as verified and clears the one-time code
    pub fn verify(&mut self) {
        self.is_verified = true;
        self.otp = None;
        self.updated_at = Utc::now();
    }

    /// Checks if the user is still awaiting verification
    pub fn is_pending(&self) -> bool {
        !self.is_verified
    }
}
