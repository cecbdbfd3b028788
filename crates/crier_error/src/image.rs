//! Image lookup errors.
//!
//! These never cross the image client's boundary: every variant is caught
//! internally and converted into a placeholder result. They exist so the
//! fallback path can log what actually went wrong.

/// Internal failure modes of one image search call.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum ImageErrorKind {
    /// Transport failure before a status was received
    #[display("HTTP error: {}", _0)]
    Http(String),

    /// Upstream returned a non-success status
    #[display("API error {}: {}", status, message)]
    Api {
        /// HTTP status code
        status: u16,
        /// Upstream error body (credential-redacted)
        message: String,
    },

    /// The search succeeded but matched no photos
    #[display("empty result set for query")]
    EmptyResults,

    /// Response body could not be parsed
    #[display("parse error: {}", _0)]
    Parse(String),

    /// The per-call time budget elapsed
    #[display("image call exceeded {}ms budget", budget_ms)]
    Timeout {
        /// Per-call budget in milliseconds
        budget_ms: u64,
    },
}

/// Image lookup error with location tracking.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Image Error: {} at {}:{}", kind, file, line)]
pub struct ImageError {
    /// The specific error kind
    pub kind: ImageErrorKind,
    /// Line number where error occurred
    pub line: u32,
    /// Source file where error occurred
    pub file: &'static str,
}

impl ImageError {
    /// Create a new image error.
    #[track_caller]
    pub fn new(kind: ImageErrorKind) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            kind,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
