//! Content generation client errors.

/// Failure modes of one content generation call.
///
/// Each upstream condition maps to a distinct variant rather than being
/// coerced into a generic failure, so the orchestrator can choose a
/// per-platform recovery policy by kind.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum GenerationErrorKind {
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

    /// Upstream signalled a 429-class rate limit
    #[display("rate limited (retry after {:?}s)", retry_after_secs)]
    RateLimited {
        /// Retry-after hint in seconds, when the upstream provided one
        retry_after_secs: Option<u64>,
    },

    /// Response body could not be parsed into text + hashtags
    #[display("parse error: {}", _0)]
    Parse(String),

    /// The per-call time budget elapsed
    #[display("generation call exceeded {}ms budget", budget_ms)]
    Timeout {
        /// Per-call budget in milliseconds
        budget_ms: u64,
    },

    /// Builder error when constructing request or result types
    #[display("builder error: {}", _0)]
    Builder(String),
}

impl GenerationErrorKind {
    /// Whether a second attempt could plausibly succeed within the same
    /// request budget. Timeouts and rate limits are excluded: retrying
    /// either inside the same 60s window just burns the budget.
    pub fn retryable(&self) -> bool {
        match self {
            GenerationErrorKind::Http(_) | GenerationErrorKind::Parse(_) => true,
            GenerationErrorKind::Api { status, .. } => *status >= 500,
            GenerationErrorKind::RateLimited { .. }
            | GenerationErrorKind::Timeout { .. }
            | GenerationErrorKind::Builder(_) => false,
        }
    }
}

/// Generation error with location tracking.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Generation Error: {} at {}:{}", kind, file, line)]
pub struct GenerationError {
    /// The specific error kind
    pub kind: GenerationErrorKind,
    /// Line number where error occurred
    pub line: u32,
    /// Source file where error occurred
    pub file: &'static str,
}

impl GenerationError {
    /// Create a new generation error.
    #[track_caller]
    pub fn new(kind: GenerationErrorKind) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            kind,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

/// Result type for content generation operations.
pub type GenerationResult<T> = Result<T, GenerationError>;
