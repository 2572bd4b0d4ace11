//! Domain-specific error types and error handling.

use thiserror::Error;

/// Token-related errors
#[derive(Error, Debug)]
pub enum TokenError {
    #[error("Token expired")]
    TokenExpired,

    #[error("Invalid token")]
    InvalidToken,

    #[error("Token generation failed")]
    TokenGenerationFailed,
}

/// Core domain errors.
///
/// Every error is terminal for the request that raised it; there are no
/// retries inside the core.
#[derive(Error, Debug)]
pub enum DomainError {
    /// Malformed or missing input, surfaced to the caller as 400
    #[error("{message}")]
    Validation { message: String },

    /// Unknown lookup key, surfaced as 404
    #[error("{resource} not found.")]
    NotFound { resource: String },

    /// Verification attempt against an already-verified record, surfaced
    /// as 400 (idempotent rejection)
    #[error("User is already verified.")]
    AlreadyVerified,

    /// Submitted one-time code does not match the stored one, surfaced as 400
    #[error("Invalid OTP.")]
    InvalidOtp,

    /// Storage failure, opaque to the caller (500), details logged
    #[error("Database error: {message}")]
    Database { message: String },

    /// Unexpected internal failure (500)
    #[error("Internal error: {message}")]
    Internal { message: String },

    #[error(transparent)]
    Token(#[from] TokenError),
}

pub type DomainResult<T> = Result<T, DomainError>;
