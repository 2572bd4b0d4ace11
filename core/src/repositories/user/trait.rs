//! User repository trait defining the interface for user persistence.
//!
//! The trait is the seam between the domain services and the durable
//! store. Implementations must serialize concurrent writes to the same
//! phone number; `mark_verified` is specified as a compare-and-set so two
//! concurrent verification attempts can never both succeed on a stale read.

use async_trait::async_trait;

use crate::domain::entities::user::User;
use crate::errors::DomainError;

/// Repository trait for User entity persistence operations
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find a user by their ten-digit phone number
    ///
    /// # Returns
    /// * `Ok(Some(User))` - User found
    /// * `Ok(None)` - No user record for the given phone number
    /// * `Err(DomainError)` - Storage error occurred
    async fn find_by_phone(&self, phone_number: &str) -> Result<Option<User>, DomainError>;

    /// Persist a pending (unverified) registration.
    ///
    /// The phone number is unique at the store. When an unverified record
    /// already exists for the number it is overwritten with the new profile
    /// and code; a verified record is never touched and the call fails with
    /// a validation error. The write is atomic: either the full record is
    /// stored or none of it.
    ///
    /// # Returns
    /// * `Ok(User)` - The persisted record
    /// * `Err(DomainError)` - Phone already verified, or storage error
    async fn create_pending(&self, user: User) -> Result<User, DomainError>;

    /// Atomically flip a pending record to verified and clear its code.
    ///
    /// The update is guarded on `is_verified = false` and the stored code
    /// matching `otp` (compare-and-set on the record).
    ///
    /// # Returns
    /// * `Ok(true)` - Exactly one record transitioned Pending -> Verified
    /// * `Ok(false)` - Guard did not match (concurrent verification, stale
    ///   read, or changed code); nothing was mutated
    /// * `Err(DomainError)` - Storage error occurred
    async fn mark_verified(&self, phone_number: &str, otp: &str) -> Result<bool, DomainError>;
}
