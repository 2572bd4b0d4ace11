//! Out-of-band dispatch port for one-time codes.
//!
//! Delivery of the code is kept separate from the HTTP response contract:
//! the demo deployment echoes the code to the caller and logs it through a
//! stub dispatcher, while a production deployment swaps in a real SMS
//! gateway behind this trait and drops the echo.

use async_trait::async_trait;

use crate::errors::DomainError;

/// Port for delivering one-time codes to a phone out-of-band
#[async_trait]
pub trait SmsDispatcher: Send + Sync {
    /// Deliver a one-time code to the given phone number
    async fn dispatch_code(&self, phone_number: &str, code: &str) -> Result<(), DomainError>;
}
