//! Application factory
//!
//! Builds the Actix-web application from an `AppState`, so the binary and
//! the integration tests share one wiring path and tests can substitute an
//! in-memory repository.

use actix_web::body::MessageBody;
use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{middleware::Logger, web, App, HttpResponse};

use crate::middleware::cors::create_cors;
use crate::routes::auth::{register::register, verify_otp::verify_otp, AppState};

use cam_core::repositories::UserRepository;
use cam_core::services::sms::SmsDispatcher;
use cam_shared::types::response::ErrorResponse;

/// Create and configure the application with all dependencies
pub fn create_app<U, S>(
    app_state: web::Data<AppState<U, S>>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
>
where
    U: UserRepository + 'static,
    S: SmsDispatcher + 'static,
{
    let cors = create_cors();

    // Malformed or incomplete JSON bodies surface as 400 with the wire
    // error shape instead of actix's plain-text default.
    let json_config = web::JsonConfig::default().error_handler(|err, _req| {
        let response = HttpResponse::BadRequest().json(ErrorResponse::new(err.to_string()));
        actix_web::error::InternalError::from_response(err, response).into()
    });

    App::new()
        .app_data(app_state)
        .app_data(json_config)
        .wrap(Logger::default())
        .wrap(cors)
        // Root banner and health check
        .route("/", web::get().to(index))
        .route("/health", web::get().to(health_check))
        // Auth routes
        .service(
            web::scope("/api/auth")
                .route("/register", web::post().to(register::<U, S>))
                .route("/verify-otp", web::post().to(verify_otp::<U, S>)),
        )
        // Default 404 handler
        .default_service(web::route().to(not_found))
}

/// Root route handler
async fn index() -> HttpResponse {
    HttpResponse::Ok().body("Camellia Backend Server")
}

/// Health check endpoint handler
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "service": "camellia-api",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

/// Default 404 handler
async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(ErrorResponse::new(
        "The requested resource was not found.",
    ))
}
