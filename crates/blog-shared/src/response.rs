//! Error body returned by every failing request.

use serde::{Deserialize, Serialize};

/// JSON error body: a human-readable `message`, plus the underlying error
/// text for server-side failures.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub message: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            error: None,
        }
    }

    pub fn with_error(mut self, error: impl Into<String>) -> Self {
        self.error = Some(error.into());
        self
    }

    // Common error constructors
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(message)
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(message)
    }

    pub fn internal_error(error: impl Into<String>) -> Self {
        Self::new("Internal server error").with_error(error)
    }
}
