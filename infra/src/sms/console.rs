//! Console stand-in for an SMS gateway.

use async_trait::async_trait;

use cam_core::errors::DomainError;
use cam_core::services::sms::SmsDispatcher;
use cam_shared::utils::phone::mask_phone_number;

/// Dispatcher stub that logs one-time codes instead of sending SMS
pub struct ConsoleSmsDispatcher;

#[async_trait]
impl SmsDispatcher for ConsoleSmsDispatcher {
    async fn dispatch_code(&self, phone_number: &str, code: &str) -> Result<(), DomainError> {
        tracing::info!(
            phone = %mask_phone_number(phone_number),
            code = code,
            "SMS dispatch stub: one-time code"
        );
        Ok(())
    }
}
