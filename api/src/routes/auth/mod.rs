//! Authentication route handlers: registration and OTP verification.

pub mod register;
pub mod verify_otp;

pub use register::AppState;
