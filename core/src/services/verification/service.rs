//! Main verification service implementation

use constant_time_eq::constant_time_eq;
use std::sync::Arc;

use cam_shared::utils::phone::mask_phone_number;

use crate::errors::{DomainError, DomainResult};
use crate::repositories::UserRepository;
use crate::services::token::TokenService;

/// Result of a successful verification
#[derive(Debug, Clone)]
pub struct VerificationOutcome {
    /// Access token, present when the service was built with a token
    /// service
    pub token: Option<String>,
}

/// Verification service driving the Pending -> Verified transition
pub struct VerificationService<U>
where
    U: UserRepository,
{
    /// User repository for lookup and the compare-and-set update
    user_repository: Arc<U>,
    /// Optional access token issuance on successful verification
    token_service: Option<Arc<TokenService>>,
}

impl<U> VerificationService<U>
where
    U: UserRepository,
{
    /// Create a verification service without token issuance
    pub fn new(user_repository: Arc<U>) -> Self {
        Self {
            user_repository,
            token_service: None,
        }
    }

    /// Create a verification service that issues an access token on success
    pub fn with_tokens(user_repository: Arc<U>, token_service: Arc<TokenService>) -> Self {
        Self {
            user_repository,
            token_service: Some(token_service),
        }
    }

    /// Verify a one-time code for a phone number.
    ///
    /// State machine per record:
    /// - no record -> `NotFound`
    /// - verified record -> `AlreadyVerified`, no state change
    /// - pending record, code mismatch -> `InvalidOtp`, no state change
    /// - pending record, code match -> compare-and-set to verified; a lost
    ///   race surfaces as `AlreadyVerified`
    ///
    /// Exactly one persisted mutation happens per successful call, and none
    /// on any failure path.
    pub async fn verify_otp(
        &self,
        phone_number: &str,
        otp: &str,
    ) -> DomainResult<VerificationOutcome> {
        if phone_number.trim().is_empty() || otp.trim().is_empty() {
            return Err(DomainError::Validation {
                message: "Missing required fields.".to_string(),
            });
        }

        let user = self
            .user_repository
            .find_by_phone(phone_number)
            .await?
            .ok_or_else(|| DomainError::NotFound {
                resource: "User".to_string(),
            })?;

        if user.is_verified {
            return Err(DomainError::AlreadyVerified);
        }

        // A pending record always carries a code; one without it cannot
        // match any submission.
        let stored = user.otp.as_deref().ok_or(DomainError::InvalidOtp)?;

        if !constant_time_eq(stored.as_bytes(), otp.as_bytes()) {
            tracing::warn!(
                phone = %mask_phone_number(phone_number),
                event = "otp_mismatch",
                "Rejected verification attempt with wrong code"
            );
            return Err(DomainError::InvalidOtp);
        }

        // Compare-and-set at the store; losing the race to a concurrent
        // verification reports zero transitioned rows.
        let transitioned = self
            .user_repository
            .mark_verified(phone_number, otp)
            .await?;
        if !transitioned {
            return Err(DomainError::AlreadyVerified);
        }

        tracing::info!(
            phone = %mask_phone_number(phone_number),
            event = "user_verified",
            user_id = %user.id,
            "User verified"
        );

        let token = match &self.token_service {
            Some(token_service) => Some(token_service.issue_access_token(&user)?),
            None => None,
        };

        Ok(VerificationOutcome { token })
    }
}
