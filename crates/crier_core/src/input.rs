//! Validated input content.

use crier_error::{ValidationError, ValidationErrorKind};
use tracing::debug;

/// Minimum accepted content length in characters.
pub const MIN_CONTENT_CHARS: usize = 300;

/// Maximum accepted content length in characters.
pub const MAX_CONTENT_CHARS: usize = 10_000;

/// An input document that has passed the acceptance window.
///
/// Construction is the validation step: an `InputContent` in hand proves the
/// text is within [300, 10000] characters, so no external call ever runs on
/// unvalidated input. Lengths are counted in characters, not bytes.
///
/// # Examples
///
/// ```
/// use crier_core::InputContent;
///
/// assert!(InputContent::new("short").is_err());
///
/// let text = "a".repeat(350);
/// let content = InputContent::new(&text).unwrap();
/// assert_eq!(content.char_count(), 350);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct InputContent(String);

impl InputContent {
    /// Validate raw text against the acceptance window.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] carrying the violated bound and the
    /// observed length when the text falls outside [300, 10000] characters.
    pub fn new(text: impl AsRef<str>) -> Result<Self, ValidationError> {
        let text = text.as_ref();
        let observed = text.chars().count();
        if observed < MIN_CONTENT_CHARS {
            return Err(ValidationError::new(ValidationErrorKind::TooShort {
                observed,
                min: MIN_CONTENT_CHARS,
            }));
        }
        if observed > MAX_CONTENT_CHARS {
            return Err(ValidationError::new(ValidationErrorKind::TooLong {
                observed,
                max: MAX_CONTENT_CHARS,
            }));
        }
        debug!(chars = observed, "Accepted input content");
        Ok(Self(text.to_string()))
    }

    /// The validated text.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Character count of the validated text.
    pub fn char_count(&self) -> usize {
        self.0.chars().count()
    }
}

impl AsRef<str> for InputContent {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
