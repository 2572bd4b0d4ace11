//! # Camellia Infrastructure
//!
//! Database and external-service implementations backing the core ports.

pub mod database;
pub mod sms;

use thiserror::Error;

/// Infrastructure-level errors
#[derive(Error, Debug)]
pub enum InfrastructureError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}
