//! Main registration service implementation

use std::sync::Arc;

use cam_shared::utils::phone::{is_valid_subscriber_number, mask_phone_number};

use crate::domain::entities::user::{Location, User};
use crate::domain::otp;
use crate::errors::{DomainError, DomainResult};
use crate::repositories::UserRepository;
use crate::services::sms::SmsDispatcher;

/// Result of a successful registration
#[derive(Debug, Clone)]
pub struct RegistrationOutcome {
    /// The generated one-time code, echoed to the caller as a demo/test
    /// affordance
    pub otp: String,

    /// Phone number the pending record was stored under
    pub phone_number: String,
}

/// Registration service for creating pending user records
pub struct RegistrationService<U, S>
where
    U: UserRepository,
    S: SmsDispatcher,
{
    /// User repository for persistence
    user_repository: Arc<U>,
    /// Out-of-band code delivery
    sms_dispatcher: Arc<S>,
}

impl<U, S> RegistrationService<U, S>
where
    U: UserRepository,
    S: SmsDispatcher,
{
    /// Create a new registration service
    pub fn new(user_repository: Arc<U>, sms_dispatcher: Arc<S>) -> Self {
        Self {
            user_repository,
            sms_dispatcher,
        }
    }

    /// Register a new user and issue a one-time code.
    ///
    /// Checks run in order: top-level fields, location sub-fields,
    /// coordinate ranges, then the ten-digit phone rule. The first failing
    /// check wins and nothing is persisted.
    ///
    /// # Returns
    ///
    /// * `Ok(RegistrationOutcome)` - Pending record stored, code generated
    /// * `Err(DomainError)` - Validation or storage failure
    pub async fn register(
        &self,
        name: &str,
        phone_number: &str,
        location: Location,
    ) -> DomainResult<RegistrationOutcome> {
        validate_profile(name, phone_number, &location)?;

        let code = otp::generate_code();
        let user = User::new(
            name.trim().to_string(),
            phone_number.to_string(),
            location,
            code.clone(),
        );

        tracing::info!(
            phone = %mask_phone_number(phone_number),
            event = "otp_generated",
            user_id = %user.id,
            "Generated one-time code for registration"
        );

        self.user_repository.create_pending(user).await?;

        // Delivery is best-effort here: the record is already persisted and
        // the code is echoed to the caller.
        if let Err(e) = self.sms_dispatcher.dispatch_code(phone_number, &code).await {
            tracing::warn!(
                phone = %mask_phone_number(phone_number),
                error = %e,
                "Failed to dispatch one-time code"
            );
        }

        Ok(RegistrationOutcome {
            otp: code,
            phone_number: phone_number.to_string(),
        })
    }
}

fn validate_profile(name: &str, phone_number: &str, location: &Location) -> DomainResult<()> {
    if name.trim().is_empty() || phone_number.trim().is_empty() {
        return Err(DomainError::Validation {
            message: "Missing required fields.".to_string(),
        });
    }

    let missing_location_field = location.street.trim().is_empty()
        || location.city.trim().is_empty()
        || location.country.trim().is_empty()
        || location.postal_code.trim().is_empty();
    if missing_location_field {
        return Err(DomainError::Validation {
            message: "Missing required location fields.".to_string(),
        });
    }

    if !location.coordinates.is_in_range() {
        return Err(DomainError::Validation {
            message: "Invalid coordinates.".to_string(),
        });
    }

    if !is_valid_subscriber_number(phone_number) {
        return Err(DomainError::Validation {
            message: format!("{} is not a valid 10-digit phone number.", phone_number),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    use crate::domain::entities::user::Coordinates;
    use crate::domain::otp::CODE_LENGTH;
    use crate::repositories::MockUserRepository;

    struct NoopDispatcher;

    #[async_trait]
    impl SmsDispatcher for NoopDispatcher {
        async fn dispatch_code(&self, _phone_number: &str, _code: &str) -> Result<(), DomainError> {
            Ok(())
        }
    }

    struct FailingDispatcher;

    #[async_trait]
    impl SmsDispatcher for FailingDispatcher {
        async fn dispatch_code(&self, _phone_number: &str, _code: &str) -> Result<(), DomainError> {
            Err(DomainError::Internal {
                message: "gateway unreachable".to_string(),
            })
        }
    }

    fn service(
        repo: Arc<MockUserRepository>,
    ) -> RegistrationService<MockUserRepository, NoopDispatcher> {
        RegistrationService::new(repo, Arc::new(NoopDispatcher))
    }

    fn sample_location() -> Location {
        Location {
            street: "1 MG Rd".to_string(),
            city: "Chennai".to_string(),
            state: None,
            country: "India".to_string(),
            postal_code: "600001".to_string(),
            coordinates: Coordinates {
                latitude: 13.08,
                longitude: 80.27,
            },
        }
    }

    #[tokio::test]
    async fn test_register_creates_pending_record() {
        let repo = Arc::new(MockUserRepository::new());
        let outcome = service(repo.clone())
            .register("Asha", "9876543210", sample_location())
            .await
            .unwrap();

        assert_eq!(outcome.otp.len(), CODE_LENGTH);
        assert!(outcome.otp.chars().all(|c| c.is_ascii_digit()));

        // The returned code matches the persisted one byte-for-byte
        let user = repo.find_by_phone("9876543210").await.unwrap().unwrap();
        assert!(user.is_pending());
        assert_eq!(user.otp.as_deref(), Some(outcome.otp.as_str()));
        assert_eq!(user.name, "Asha");
    }

    #[tokio::test]
    async fn test_register_rejects_missing_fields() {
        let repo = Arc::new(MockUserRepository::new());
        let svc = service(repo.clone());

        let err = svc.register("", "9876543210", sample_location()).await;
        assert!(matches!(err, Err(DomainError::Validation { .. })));

        let err = svc.register("Asha", "  ", sample_location()).await;
        assert!(matches!(err, Err(DomainError::Validation { .. })));

        let mut location = sample_location();
        location.city = String::new();
        let err = svc.register("Asha", "9876543210", location).await;
        assert!(matches!(err, Err(DomainError::Validation { .. })));

        // Nothing persisted on any failing path
        assert!(repo.is_empty().await);
    }

    #[tokio::test]
    async fn test_register_rejects_out_of_range_coordinates() {
        let repo = Arc::new(MockUserRepository::new());
        let svc = service(repo.clone());

        let mut location = sample_location();
        location.coordinates.latitude = 90.5;
        let err = svc
            .register("Asha", "9876543210", location)
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::Validation { ref message } if message == "Invalid coordinates."));

        let mut location = sample_location();
        location.coordinates.longitude = -200.0;
        assert!(svc.register("Asha", "9876543210", location).await.is_err());

        assert!(repo.is_empty().await);
    }

    #[tokio::test]
    async fn test_register_rejects_malformed_phone() {
        let repo = Arc::new(MockUserRepository::new());
        let svc = service(repo.clone());

        for phone in ["98765", "98765432101", "98765a3210"] {
            let err = svc.register("Asha", phone, sample_location()).await;
            assert!(matches!(err, Err(DomainError::Validation { .. })));
        }
        assert!(repo.is_empty().await);
    }

    #[tokio::test]
    async fn test_reregistration_overwrites_pending_record() {
        let repo = Arc::new(MockUserRepository::new());
        let svc = service(repo.clone());

        svc.register("Asha", "9876543210", sample_location())
            .await
            .unwrap();
        let second = svc
            .register("Asha", "9876543210", sample_location())
            .await
            .unwrap();

        // The stored code is the latest draw
        let user = repo.find_by_phone("9876543210").await.unwrap().unwrap();
        assert_eq!(user.otp.as_deref(), Some(second.otp.as_str()));
        assert_eq!(repo.len().await, 1);
    }

    #[tokio::test]
    async fn test_register_succeeds_when_dispatch_fails() {
        let repo = Arc::new(MockUserRepository::new());
        let svc = RegistrationService::new(repo.clone(), Arc::new(FailingDispatcher));

        let outcome = svc
            .register("Asha", "9876543210", sample_location())
            .await
            .unwrap();

        let user = repo.find_by_phone("9876543210").await.unwrap().unwrap();
        assert_eq!(user.otp.as_deref(), Some(outcome.otp.as_str()));
    }
}
