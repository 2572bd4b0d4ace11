//! # Camellia API
//!
//! HTTP layer for the Camellia onboarding backend: request/response DTOs,
//! route handlers, error mapping, and the application factory.

pub mod app;
pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;
