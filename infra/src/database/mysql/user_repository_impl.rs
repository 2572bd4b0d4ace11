//! MySQL implementation of the UserRepository trait.
//!
//! The `users` table carries a unique key on `phone_number`; the location
//! is stored as a JSON column. `mark_verified` is a single conditional
//! UPDATE so the Pending -> Verified transition is atomic per record.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{MySqlPool, Row};
use uuid::Uuid;

use cam_core::domain::entities::user::{Location, User};
use cam_core::errors::DomainError;
use cam_core::repositories::UserRepository;

/// MySQL implementation of UserRepository
pub struct MySqlUserRepository {
    /// Database connection pool
    pool: MySqlPool,
}

impl MySqlUserRepository {
    /// Create a new MySQL user repository
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Convert a database row to a User entity
    fn row_to_user(row: &sqlx::mysql::MySqlRow) -> Result<User, DomainError> {
        let id: String = row
            .try_get("id")
            .map_err(|e| DomainError::Database {
                message: format!("Failed to get id: {}", e),
            })?;

        let location_json: serde_json::Value =
            row.try_get("location").map_err(|e| DomainError::Database {
                message: format!("Failed to get location: {}", e),
            })?;
        let location: Location =
            serde_json::from_value(location_json).map_err(|e| DomainError::Database {
                message: format!("Malformed location column: {}", e),
            })?;

        Ok(User {
            id: Uuid::parse_str(&id).map_err(|e| DomainError::Database {
                message: format!("Invalid UUID: {}", e),
            })?,
            name: row.try_get("name").map_err(|e| DomainError::Database {
                message: format!("Failed to get name: {}", e),
            })?,
            phone_number: row
                .try_get("phone_number")
                .map_err(|e| DomainError::Database {
                    message: format!("Failed to get phone_number: {}", e),
                })?,
            location,
            otp: row.try_get("otp").map_err(|e| DomainError::Database {
                message: format!("Failed to get otp: {}", e),
            })?,
            is_verified: row
                .try_get("is_verified")
                .map_err(|e| DomainError::Database {
                    message: format!("Failed to get is_verified: {}", e),
                })?,
            created_at: row
                .try_get::<DateTime<Utc>, _>("created_at")
                .map_err(|e| DomainError::Database {
                    message: format!("Failed to get created_at: {}", e),
                })?,
            updated_at: row
                .try_get::<DateTime<Utc>, _>("updated_at")
                .map_err(|e| DomainError::Database {
                    message: format!("Failed to get updated_at: {}", e),
                })?,
        })
    }

    fn location_json(location: &Location) -> Result<serde_json::Value, DomainError> {
        serde_json::to_value(location).map_err(|e| DomainError::Database {
            message: format!("Failed to serialize location: {}", e),
        })
    }
}

#[async_trait]
impl UserRepository for MySqlUserRepository {
    async fn find_by_phone(&self, phone_number: &str) -> Result<Option<User>, DomainError> {
        let query = r#"
            SELECT id, name, phone_number, location, otp, is_verified,
                   created_at, updated_at
            FROM users
            WHERE phone_number = ?
            LIMIT 1
        "#;

        let result = sqlx::query(query)
            .bind(phone_number)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::Database {
                message: format!("Database query failed: {}", e),
            })?;

        match result {
            Some(row) => Ok(Some(Self::row_to_user(&row)?)),
            None => Ok(None),
        }
    }

    async fn create_pending(&self, user: User) -> Result<User, DomainError> {
        let location = Self::location_json(&user.location)?;

        let insert = r#"
            INSERT INTO users (id, name, phone_number, location, otp,
                               is_verified, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?, FALSE, ?, ?)
        "#;

        let inserted = sqlx::query(insert)
            .bind(user.id.to_string())
            .bind(&user.name)
            .bind(&user.phone_number)
            .bind(&location)
            .bind(&user.otp)
            .bind(user.created_at)
            .bind(user.updated_at)
            .execute(&self.pool)
            .await;

        match inserted {
            Ok(_) => Ok(user),
            Err(e) if e.as_database_error().map(|d| d.is_unique_violation()) == Some(true) => {
                // The number is already registered: overwrite the pending
                // record, never a verified one.
                let update = r#"
                    UPDATE users
                    SET name = ?, location = ?, otp = ?, updated_at = ?
                    WHERE phone_number = ? AND is_verified = FALSE
                "#;

                let result = sqlx::query(update)
                    .bind(&user.name)
                    .bind(&location)
                    .bind(&user.otp)
                    .bind(Utc::now())
                    .bind(&user.phone_number)
                    .execute(&self.pool)
                    .await
                    .map_err(|e| DomainError::Database {
                        message: format!("Database update failed: {}", e),
                    })?;

                if result.rows_affected() == 0 {
                    return Err(DomainError::Validation {
                        message: "Phone number already registered.".to_string(),
                    });
                }

                self.find_by_phone(&user.phone_number)
                    .await?
                    .ok_or_else(|| DomainError::Database {
                        message: "Pending record vanished after overwrite".to_string(),
                    })
            }
            Err(e) => Err(DomainError::Database {
                message: format!("Database insert failed: {}", e),
            }),
        }
    }

    async fn mark_verified(&self, phone_number: &str, otp: &str) -> Result<bool, DomainError> {
        let query = r#"
            UPDATE users
            SET is_verified = TRUE, otp = NULL, updated_at = ?
            WHERE phone_number = ? AND otp = ? AND is_verified = FALSE
        "#;

        let result = sqlx::query(query)
            .bind(Utc::now())
            .bind(phone_number)
            .bind(otp)
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::Database {
                message: format!("Database update failed: {}", e),
            })?;

        Ok(result.rows_affected() == 1)
    }
}
