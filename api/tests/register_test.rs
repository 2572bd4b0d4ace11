//! Integration tests for POST /api/auth/register

use actix_web::{test, web};
use serde_json::json;
use std::sync::Arc;

use cam_api::app::create_app;
use cam_api::routes::auth::AppState;
use cam_core::repositories::{MockUserRepository, UserRepository};
use cam_core::services::registration::RegistrationService;
use cam_core::services::token::{TokenService, TokenServiceConfig};
use cam_core::services::verification::VerificationService;
use cam_infra::sms::ConsoleSmsDispatcher;

type TestState = web::Data<AppState<MockUserRepository, ConsoleSmsDispatcher>>;

fn test_state() -> (Arc<MockUserRepository>, TestState) {
    let repo = Arc::new(MockUserRepository::new());
    let registration_service = Arc::new(RegistrationService::new(
        repo.clone(),
        Arc::new(ConsoleSmsDispatcher),
    ));
    let verification_service = Arc::new(VerificationService::with_tokens(
        repo.clone(),
        Arc::new(TokenService::new(TokenServiceConfig::default())),
    ));
    let state = web::Data::new(AppState {
        registration_service,
        verification_service,
    });
    (repo, state)
}

fn register_body() -> serde_json::Value {
    json!({
        "name": "Asha",
        "phoneNumber": "9876543210",
        "location": {
            "street": "1 MG Rd",
            "city": "Chennai",
            "country": "India",
            "postalCode": "600001",
            "coordinates": { "latitude": 13.08, "longitude": 80.27 }
        }
    })
}

#[actix_web::test]
async fn test_register_creates_pending_user() {
    let (repo, state) = test_state();
    let app = test::init_service(create_app(state)).await;

    let req = test::TestRequest::post()
        .uri("/api/auth/register")
        .set_json(register_body())
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), 201);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "User registered successfully.");

    let otp = body["otp"].as_str().unwrap();
    assert_eq!(otp.len(), 6);
    assert!(otp.chars().all(|c| c.is_ascii_digit()));

    let user = repo.find_by_phone("9876543210").await.unwrap().unwrap();
    assert!(!user.is_verified);
    assert_eq!(user.otp.as_deref(), Some(otp));
}

#[actix_web::test]
async fn test_register_rejects_missing_top_level_field() {
    let (repo, state) = test_state();
    let app = test::init_service(create_app(state)).await;

    let req = test::TestRequest::post()
        .uri("/api/auth/register")
        .set_json(json!({ "phoneNumber": "9876543210" }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), 400);
    assert!(repo.is_empty().await);
}

#[actix_web::test]
async fn test_register_rejects_empty_name() {
    let (repo, state) = test_state();
    let app = test::init_service(create_app(state)).await;

    let mut body = register_body();
    body["name"] = json!("");
    let req = test::TestRequest::post()
        .uri("/api/auth/register")
        .set_json(body)
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), 400);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Missing required fields.");
    assert!(repo.is_empty().await);
}

#[actix_web::test]
async fn test_register_rejects_missing_location_field() {
    let (repo, state) = test_state();
    let app = test::init_service(create_app(state)).await;

    let mut body = register_body();
    body["location"].as_object_mut().unwrap().remove("postalCode");
    let req = test::TestRequest::post()
        .uri("/api/auth/register")
        .set_json(body)
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), 400);
    assert!(repo.is_empty().await);
}

#[actix_web::test]
async fn test_register_rejects_out_of_range_coordinates() {
    let (repo, state) = test_state();
    let app = test::init_service(create_app(state)).await;

    for (latitude, longitude) in [(91.0, 80.27), (-90.5, 0.0), (13.08, 180.1), (0.0, -200.0)] {
        let mut body = register_body();
        body["location"]["coordinates"] = json!({
            "latitude": latitude,
            "longitude": longitude
        });
        let req = test::TestRequest::post()
            .uri("/api/auth/register")
            .set_json(body)
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), 400);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["message"], "Invalid coordinates.");
    }
    assert!(repo.is_empty().await);
}

#[actix_web::test]
async fn test_register_rejects_malformed_phone() {
    let (repo, state) = test_state();
    let app = test::init_service(create_app(state)).await;

    let mut body = register_body();
    body["phoneNumber"] = json!("98765");
    let req = test::TestRequest::post()
        .uri("/api/auth/register")
        .set_json(body)
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), 400);
    assert!(repo.is_empty().await);
}

#[actix_web::test]
async fn test_reregistration_replaces_pending_code() {
    let (repo, state) = test_state();
    let app = test::init_service(create_app(state)).await;

    let req = test::TestRequest::post()
        .uri("/api/auth/register")
        .set_json(register_body())
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 201);

    let req = test::TestRequest::post()
        .uri("/api/auth/register")
        .set_json(register_body())
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 201);
    let body: serde_json::Value = test::read_body_json(resp).await;

    let user = repo.find_by_phone("9876543210").await.unwrap().unwrap();
    assert_eq!(user.otp.as_deref(), body["otp"].as_str());
    assert_eq!(repo.len().await, 1);
}

#[actix_web::test]
async fn test_health_and_root_routes() {
    let (_repo, state) = test_state();
    let app = test::init_service(create_app(state)).await;

    let resp = test::call_service(&app, test::TestRequest::get().uri("/health").to_request()).await;
    assert_eq!(resp.status(), 200);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["status"], "healthy");

    let resp = test::call_service(&app, test::TestRequest::get().uri("/").to_request()).await;
    assert_eq!(resp.status(), 200);

    let resp = test::call_service(
        &app,
        test::TestRequest::get().uri("/no-such-route").to_request(),
    )
    .await;
    assert_eq!(resp.status(), 404);
}
