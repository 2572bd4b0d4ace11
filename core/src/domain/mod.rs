//! Domain layer: entities and one-time code generation.

pub mod entities;
pub mod otp;
