use actix_web::{web, HttpResponse};
use std::sync::Arc;
use validator::Validate;

use crate::dto::auth::{RegisterRequest, RegisterResponse};
use crate::handlers::error::handle_domain_error;

use cam_core::repositories::UserRepository;
use cam_core::services::registration::RegistrationService;
use cam_core::services::sms::SmsDispatcher;
use cam_core::services::verification::VerificationService;
use cam_shared::types::response::ErrorResponse;
use cam_shared::utils::phone::mask_phone_number;

/// Application state that holds the shared services
pub struct AppState<U, S>
where
    U: UserRepository,
    S: SmsDispatcher,
{
    pub registration_service: Arc<RegistrationService<U, S>>,
    pub verification_service: Arc<VerificationService<U>>,
}

/// Handler for POST /api/auth/register
///
/// Creates a pending user record and issues a one-time code.
///
/// # Request Body
///
/// ```json
/// {
///     "name": "Asha",
///     "phoneNumber": "9876543210",
///     "location": {
///         "street": "1 MG Rd",
///         "city": "Chennai",
///         "country": "India",
///         "postalCode": "600001",
///         "coordinates": { "latitude": 13.08, "longitude": 80.27 }
///     }
/// }
/// ```
///
/// # Response
///
/// ## Success (201 Created)
/// ```json
/// { "message": "User registered successfully.", "otp": "483920" }
/// ```
///
/// ## Errors
/// - 400 Bad Request: missing or malformed fields, invalid coordinates
/// - 500 Internal Server Error: persistence failure
pub async fn register<U, S>(
    state: web::Data<AppState<U, S>>,
    request: web::Json<RegisterRequest>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    S: SmsDispatcher + 'static,
{
    log::info!(
        "Processing register request for phone: {}",
        mask_phone_number(&request.phone_number)
    );

    if request.validate().is_err() {
        return HttpResponse::BadRequest().json(ErrorResponse::new("Missing required fields."));
    }

    let location = request.location.clone().into();
    match state
        .registration_service
        .register(&request.name, &request.phone_number, location)
        .await
    {
        Ok(outcome) => HttpResponse::Created().json(RegisterResponse {
            message: "User registered successfully.".to_string(),
            otp: outcome.otp,
        }),
        Err(error) => handle_domain_error(error, "Server error during registration."),
    }
}
