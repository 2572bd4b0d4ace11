//! Main token service implementation

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::domain::entities::user::User;
use crate::errors::TokenError;

use super::config::TokenServiceConfig;

/// JWT claims for an access token
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject: the user's id
    pub sub: String,
    /// Phone number the token is bound to
    pub phone: String,
    /// Issued-at, seconds since epoch
    pub iat: i64,
    /// Expiry, seconds since epoch
    pub exp: i64,
    /// Issuer
    pub iss: String,
}

/// Service issuing and verifying signed, time-bound access tokens.
///
/// Tokens are HS256 JWTs verifiable offline; the service keeps no state
/// beyond the signing keys.
pub struct TokenService {
    config: TokenServiceConfig,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
}

impl TokenService {
    /// Creates a new token service instance
    pub fn new(config: TokenServiceConfig) -> Self {
        let encoding_key = EncodingKey::from_secret(config.jwt_secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.jwt_secret.as_bytes());

        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_issuer(&[&config.issuer]);
        validation.validate_exp = true;
        validation.leeway = 0;

        Self {
            config,
            encoding_key,
            decoding_key,
            validation,
        }
    }

    /// Issues an access token bound to the user's identity
    ///
    /// # Returns
    ///
    /// * `Ok(String)` - Encoded JWT
    /// * `Err(TokenError)` - Token generation failed
    pub fn issue_access_token(&self, user: &User) -> Result<String, TokenError> {
        let now = Utc::now();
        let expires_at = now + Duration::minutes(self.config.access_token_expiry_minutes);

        let claims = Claims {
            sub: user.id.to_string(),
            phone: user.phone_number.clone(),
            iat: now.timestamp(),
            exp: expires_at.timestamp(),
            iss: self.config.issuer.clone(),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|_| TokenError::TokenGenerationFailed)
    }

    /// Verifies a token offline and returns its claims
    pub fn verify_access_token(&self, token: &str) -> Result<Claims, TokenError> {
        decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => TokenError::TokenExpired,
                _ => TokenError::InvalidToken,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::domain::entities::user::{Coordinates, Location};

    fn sample_user() -> User {
        User::new(
            "Asha".to_string(),
            "9876543210".to_string(),
            Location {
                street: "1 MG Rd".to_string(),
                city: "Chennai".to_string(),
                state: None,
                country: "India".to_string(),
                postal_code: "600001".to_string(),
                coordinates: Coordinates {
                    latitude: 13.08,
                    longitude: 80.27,
                },
            },
            "483920".to_string(),
        )
    }

    #[test]
    fn test_issue_and_verify_round_trip() {
        let service = TokenService::new(TokenServiceConfig::default());
        let user = sample_user();

        let token = service.issue_access_token(&user).unwrap();
        let claims = service.verify_access_token(&token).unwrap();

        assert_eq!(claims.sub, user.id.to_string());
        assert_eq!(claims.phone, "9876543210");
        assert_eq!(claims.iss, "camellia");
        // One-hour lifetime by default
        assert_eq!(claims.exp - claims.iat, 3600);
    }

    #[test]
    fn test_expired_token_is_rejected() {
        let config = TokenServiceConfig {
            access_token_expiry_minutes: -5,
            ..Default::default()
        };
        let service = TokenService::new(config);

        let token = service.issue_access_token(&sample_user()).unwrap();
        let err = service.verify_access_token(&token).unwrap_err();
        assert!(matches!(err, TokenError::TokenExpired));
    }

    #[test]
    fn test_wrong_secret_is_rejected() {
        let issuing = TokenService::new(TokenServiceConfig::default());
        let verifying = TokenService::new(TokenServiceConfig {
            jwt_secret: "a-different-secret".to_string(),
            ..Default::default()
        });

        let token = issuing.issue_access_token(&sample_user()).unwrap();
        let err = verifying.verify_access_token(&token).unwrap_err();
        assert!(matches!(err, TokenError::InvalidToken));
    }

    #[test]
    fn test_garbage_token_is_rejected() {
        let service = TokenService::new(TokenServiceConfig::default());
        assert!(service.verify_access_token("not-a-jwt").is_err());
    }
}
