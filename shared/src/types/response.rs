//! API response types

use serde::{Deserialize, Serialize};

/// Error body returned by every non-2xx response.
///
/// The wire contract is a single human-readable `message` field.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Human-readable error message
    pub message: String,
}

impl ErrorResponse {
    /// Create a new error response
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
