use actix_web::{web, HttpServer};
use dotenvy::dotenv;
use log::info;
use std::sync::Arc;

use cam_api::app::create_app;
use cam_api::routes::auth::AppState;
use cam_core::services::registration::RegistrationService;
use cam_core::services::token::{TokenService, TokenServiceConfig};
use cam_core::services::verification::VerificationService;
use cam_infra::database::{DatabasePool, MySqlUserRepository};
use cam_infra::sms::ConsoleSmsDispatcher;
use cam_shared::config::{AuthConfig, DatabaseConfig, ServerConfig};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load environment variables
    dotenv().ok();

    // Initialize logger
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    info!("Starting Camellia API server");

    // Load configuration
    let server_config = ServerConfig::from_env();
    let database_config = DatabaseConfig::from_env();
    let auth_config = AuthConfig::from_env();

    // The store handle is established once at startup and injected into
    // the repositories.
    let pool = DatabasePool::new(&database_config)
        .await
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e.to_string()))?;

    let user_repository = Arc::new(MySqlUserRepository::new(pool.inner().clone()));
    let sms_dispatcher = Arc::new(ConsoleSmsDispatcher);
    let token_service = Arc::new(TokenService::new(TokenServiceConfig {
        jwt_secret: auth_config.jwt_secret,
        access_token_expiry_minutes: auth_config.access_token_expiry_minutes,
        ..Default::default()
    }));

    let registration_service = Arc::new(RegistrationService::new(
        user_repository.clone(),
        sms_dispatcher,
    ));
    let verification_service = Arc::new(VerificationService::with_tokens(
        user_repository,
        token_service,
    ));

    let app_state = web::Data::new(AppState {
        registration_service,
        verification_service,
    });

    let bind_address = server_config.bind_address();
    info!("Server will bind to: {}", bind_address);

    HttpServer::new(move || create_app(app_state.clone()))
        .bind(&bind_address)?
        .run()
        .await
}
