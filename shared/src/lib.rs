//! # Camellia Shared
//!
//! Configuration, common types, and utilities shared across the
//! Camellia backend crates.

pub mod config;
pub mod types;
pub mod utils;
