//! Configuration modules for the Camellia backend.
//!
//! Each configuration struct reads its values from environment variables
//! with sensible development defaults, so the server starts from a bare
//! `.env` file.

pub mod auth;
pub mod database;
pub mod server;

pub use auth::AuthConfig;
pub use database::DatabaseConfig;
pub use server::ServerConfig;
