//! Request-level error response shape for the HTTP/CLI boundary.

use serde::{Deserialize, Serialize};

/// Machine-readable request-level error codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Input failed the acceptance window; recoverable by user edit
    ValidationError,
    /// All generation calls failed, or one failed unrecoverably
    AiApiError,
    /// The image client's internal fallback itself was unreachable
    ImageApiError,
    /// The global deadline elapsed before generation resolved
    TimeoutError,
    /// Upstream 429-class signal across the whole request
    RateLimitError,
    /// Unexpected defect, e.g. malformed internal state
    InternalError,
}

/// The failure response shape: a code, a human-readable message, and
/// optional structured details.
///
/// # Examples
///
/// ```
/// use crier_core::{ErrorCode, ErrorResponse};
///
/// let response = ErrorResponse::new(ErrorCode::TimeoutError, "deadline exceeded");
/// let json = serde_json::to_value(&response).unwrap();
/// assert_eq!(json["error"], "TIMEOUT_ERROR");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, derive_getters::Getters)]
pub struct ErrorResponse {
    /// Machine-readable error code
    error: ErrorCode,
    /// Human-readable message
    message: String,
    /// Optional structured details
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<serde_json::Value>,
}

impl ErrorResponse {
    /// Create an error response without details.
    pub fn new(error: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            error,
            message: message.into(),
            details: None,
        }
    }

    /// Attach structured details.
    pub fn with_details(mut self, details: serde_json::Value) -> Self {
        self.details = Some(details);
        self
    }
}
