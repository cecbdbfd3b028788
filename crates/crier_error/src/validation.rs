//! Input validation errors.

/// Reasons an input document fails the acceptance window.
///
/// Each variant carries the violated bound alongside the observed length so
/// the caller can report exactly what to fix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum ValidationErrorKind {
    /// Content is shorter than the accepted minimum
    #[display("content length {} below minimum {}", observed, min)]
    TooShort {
        /// Observed character count
        observed: usize,
        /// Minimum accepted character count
        min: usize,
    },

    /// Content is longer than the accepted maximum
    #[display("content length {} above maximum {}", observed, max)]
    TooLong {
        /// Observed character count
        observed: usize,
        /// Maximum accepted character count
        max: usize,
    },
}

/// Validation error with location tracking.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Validation Error: {} at {}:{}", kind, file, line)]
pub struct ValidationError {
    /// The specific error kind
    pub kind: ValidationErrorKind,
    /// Line number where error occurred
    pub line: u32,
    /// Source file where error occurred
    pub file: &'static str,
}

impl ValidationError {
    /// Create a new validation error.
    #[track_caller]
    pub fn new(kind: ValidationErrorKind) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            kind,
            line: loc.line(),
            file: loc.file(),
        }
    }

    /// The character count that was observed.
    pub fn observed(&self) -> usize {
        match self.kind {
            ValidationErrorKind::TooShort { observed, .. } => observed,
            ValidationErrorKind::TooLong { observed, .. } => observed,
        }
    }
}
