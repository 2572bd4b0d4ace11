//! Verification service: the Pending/Verified state machine for one-time
//! codes.

mod service;

pub use service::{VerificationOutcome, VerificationService};
