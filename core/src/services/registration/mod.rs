//! Registration service: profile validation, pending record creation,
//! and one-time code issuance.

mod service;

pub use service::{RegistrationOutcome, RegistrationService};
