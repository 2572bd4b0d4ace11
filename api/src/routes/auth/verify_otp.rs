use actix_web::{web, HttpResponse};
use validator::Validate;

use crate::dto::auth::{VerifyOtpRequest, VerifyOtpResponse};
use crate::handlers::error::handle_domain_error;

use cam_core::repositories::UserRepository;
use cam_core::services::sms::SmsDispatcher;
use cam_shared::types::response::ErrorResponse;
use cam_shared::utils::phone::mask_phone_number;

use super::AppState;

/// Handler for POST /api/auth/verify-otp
///
/// Verifies the one-time code for a phone number and finalizes the user
/// record.
///
/// # Request Body
///
/// ```json
/// { "phoneNumber": "9876543210", "otp": "483920" }
/// ```
///
/// # Response
///
/// ## Success (200 OK)
/// ```json
/// { "message": "OTP verified successfully.", "token": "eyJhbGciOiJIUzI1..." }
/// ```
///
/// ## Errors
/// - 400 Bad Request: invalid code or already-verified user
/// - 404 Not Found: no record for the phone number
/// - 500 Internal Server Error: persistence failure
pub async fn verify_otp<U, S>(
    state: web::Data<AppState<U, S>>,
    request: web::Json<VerifyOtpRequest>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    S: SmsDispatcher + 'static,
{
    log::info!(
        "Processing verify-otp request for phone: {}",
        mask_phone_number(&request.phone_number)
    );

    if request.validate().is_err() {
        return HttpResponse::BadRequest().json(ErrorResponse::new("Missing required fields."));
    }

    match state
        .verification_service
        .verify_otp(&request.phone_number, &request.otp)
        .await
    {
        Ok(outcome) => HttpResponse::Ok().json(VerifyOtpResponse {
            message: "OTP verified successfully.".to_string(),
            token: outcome.token,
        }),
        Err(error) => handle_domain_error(error, "Server error during OTP verification."),
    }
}
