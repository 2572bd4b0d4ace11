//! Business services for registration, verification, and access tokens.

pub mod registration;
pub mod sms;
pub mod token;
pub mod verification;

pub use registration::{RegistrationOutcome, RegistrationService};
pub use sms::SmsDispatcher;
pub use token::{TokenService, TokenServiceConfig};
pub use verification::{VerificationOutcome, VerificationService};
