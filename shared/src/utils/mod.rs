//! Shared utility functions.

pub mod phone;
