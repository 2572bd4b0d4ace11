//! # Camellia Core
//!
//! Core business logic and domain layer for the Camellia backend.
//! This crate contains domain entities, the registration and verification
//! services, repository interfaces, and error types.

pub mod domain;
pub mod errors;
pub mod repositories;
pub mod services;
