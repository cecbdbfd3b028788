//! Top-level error wrapper types.

use crate::{GenerationError, ImageError, OrchestratorError, ValidationError};

/// The foundation error enum, aggregating every crate concern.
///
/// # Examples
///
/// ```
/// use crier_error::{CrierError, ValidationError, ValidationErrorKind};
///
/// let validation = ValidationError::new(ValidationErrorKind::TooShort {
///     observed: 5,
///     min: 300,
/// });
/// let err: CrierError = validation.into();
/// assert!(format!("{}", err).contains("Validation Error"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum CrierErrorKind {
    /// Input validation error
    #[from(ValidationError)]
    Validation(ValidationError),
    /// Content generation error
    #[from(GenerationError)]
    Generation(GenerationError),
    /// Image lookup error (internal to the image client)
    #[from(ImageError)]
    Image(ImageError),
    /// Orchestrator error
    #[from(OrchestratorError)]
    Orchestrator(OrchestratorError),
}

/// Crier error with kind discrimination.
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Crier Error: {}", _0)]
pub struct CrierError(Box<CrierErrorKind>);

impl CrierError {
    /// Create a new error from a kind.
    pub fn new(kind: CrierErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &CrierErrorKind {
        &self.0
    }
}

// Generic From implementation for any type that converts to CrierErrorKind
impl<T> From<T> for CrierError
where
    T: Into<CrierErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for Crier operations.
pub type CrierResult<T> = std::result::Result<T, CrierError>;
