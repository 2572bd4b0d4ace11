//! Mapping from domain errors to HTTP responses.

use actix_web::HttpResponse;

use cam_core::errors::DomainError;
use cam_shared::types::response::ErrorResponse;

/// Convert a domain error into the appropriate HTTP response.
///
/// Validation, conflict, and credential errors carry their message to the
/// caller. Storage and internal failures are logged and surfaced as an
/// opaque 500 with `server_error_message` as the body, so callers never see
/// store internals.
pub fn handle_domain_error(error: DomainError, server_error_message: &str) -> HttpResponse {
    match error {
        DomainError::Validation { message } => {
            HttpResponse::BadRequest().json(ErrorResponse::new(message))
        }
        DomainError::NotFound { .. } => {
            HttpResponse::NotFound().json(ErrorResponse::new("User not found."))
        }
        DomainError::AlreadyVerified => {
            HttpResponse::BadRequest().json(ErrorResponse::new("User is already verified."))
        }
        DomainError::InvalidOtp => {
            HttpResponse::BadRequest().json(ErrorResponse::new("Invalid OTP."))
        }
        DomainError::Database { message } => {
            log::error!("Storage failure: {}", message);
            HttpResponse::InternalServerError().json(ErrorResponse::new(server_error_message))
        }
        DomainError::Internal { message } => {
            log::error!("Internal error: {}", message);
            HttpResponse::InternalServerError().json(ErrorResponse::new(server_error_message))
        }
        DomainError::Token(e) => {
            log::error!("Token error: {}", e);
            HttpResponse::InternalServerError().json(ErrorResponse::new(server_error_message))
        }
    }
}
