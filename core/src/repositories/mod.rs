//! Repository interfaces for data persistence.

pub mod user;

pub use user::{MockUserRepository, UserRepository};
