//! In-memory implementation of UserRepository for tests and demos.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::entities::user::User;
use crate::errors::DomainError;

use super::trait_::UserRepository;

/// In-memory user repository keyed by phone number
pub struct MockUserRepository {
    users: Arc<RwLock<HashMap<String, User>>>,
}

impl MockUserRepository {
    /// Create a new empty repository
    pub fn new() -> Self {
        Self {
            users: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Number of stored records
    pub async fn len(&self) -> usize {
        self.users.read().await.len()
    }

    /// Whether the store is empty
    pub async fn is_empty(&self) -> bool {
        self.users.read().await.is_empty()
    }
}

impl Default for MockUserRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserRepository for MockUserRepository {
    async fn find_by_phone(&self, phone_number: &str) -> Result<Option<User>, DomainError> {
        let users = self.users.read().await;
        Ok(users.get(phone_number).cloned())
    }

    async fn create_pending(&self, user: User) -> Result<User, DomainError> {
        let mut users = self.users.write().await;

        // A verified record is never overwritten
        if let Some(existing) = users.get(&user.phone_number) {
            if existing.is_verified {
                return Err(DomainError::Validation {
                    message: "Phone number already registered.".to_string(),
                });
            }
        }

        users.insert(user.phone_number.clone(), user.clone());
        Ok(user)
    }

    async fn mark_verified(&self, phone_number: &str, otp: &str) -> Result<bool, DomainError> {
        let mut users = self.users.write().await;

        match users.get_mut(phone_number) {
            Some(user) if user.is_pending() && user.otp.as_deref() == Some(otp) => {
                user.verify();
                Ok(true)
            }
            _ => Ok(false),
        }
    }
}
