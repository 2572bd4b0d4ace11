//! Token issuance configuration module

use serde::{Deserialize, Serialize};
use std::env;

/// Configuration for access token issuance
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AuthConfig {
    /// Secret used to sign access tokens
    pub jwt_secret: String,

    /// Access token lifetime in minutes
    pub access_token_expiry_minutes: i64,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt_secret: String::from("development-secret-please-change-in-production"),
            access_token_expiry_minutes: 60,
        }
    }
}

impl AuthConfig {
    /// Load the configuration from `JWT_SECRET` / `ACCESS_TOKEN_EXPIRY_MINUTES`
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            jwt_secret: env::var("JWT_SECRET").unwrap_or(defaults.jwt_secret),
            access_token_expiry_minutes: env::var("ACCESS_TOKEN_EXPIRY_MINUTES")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.access_token_expiry_minutes),
        }
    }
}
