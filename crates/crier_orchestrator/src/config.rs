//! Orchestrator configuration.

use crier_error::{OrchestratorError, OrchestratorErrorKind};
use std::time::Duration;

const DEFAULT_DEADLINE: Duration = Duration::from_secs(60);
const DEFAULT_GENERATION_TIMEOUT: Duration = Duration::from_secs(30);
const DEFAULT_IMAGE_TIMEOUT: Duration = Duration::from_secs(10);

/// Explicit configuration passed into the orchestrator at construction.
///
/// There is no ambient global lookup inside request-handling code: whatever
/// the orchestrator needs arrives here, once, at process start.
///
/// # Examples
///
/// ```
/// use crier_orchestrator::OrchestratorConfig;
/// use std::time::Duration;
///
/// let config = OrchestratorConfig::builder()
///     .deadline(Duration::from_secs(45))
///     .retry_once(true)
///     .build();
///
/// assert_eq!(*config.deadline(), Duration::from_secs(45));
/// assert!(*config.retry_once());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, derive_getters::Getters)]
pub struct OrchestratorConfig {
    /// Global wall-clock budget for the whole fan-out + aggregate phase
    deadline: Duration,
    /// Per-call budget for one generation call, shorter than the deadline
    generation_timeout: Duration,
    /// Per-call budget for one image lookup, shorter than the deadline
    image_timeout: Duration,
    /// Whether a failed generation call is retried once before being marked
    /// degraded (timeouts and rate limits are never retried)
    retry_once: bool,
}

impl Default for OrchestratorConfig {
    fn default() -> Self {
        Self {
            deadline: DEFAULT_DEADLINE,
            generation_timeout: DEFAULT_GENERATION_TIMEOUT,
            image_timeout: DEFAULT_IMAGE_TIMEOUT,
            retry_once: false,
        }
    }
}

impl OrchestratorConfig {
    /// Creates a new config builder.
    pub fn builder() -> OrchestratorConfigBuilder {
        OrchestratorConfigBuilder::default()
    }

    /// Create config from environment variables.
    ///
    /// Reads (all optional, falling back to defaults):
    /// - `CRIER_DEADLINE_SECS` (default: 60)
    /// - `CRIER_GENERATION_TIMEOUT_SECS` (default: 30)
    /// - `CRIER_IMAGE_TIMEOUT_SECS` (default: 10)
    /// - `CRIER_RETRY_ONCE` (default: false)
    pub fn from_env() -> Self {
        let secs = |name: &str| {
            std::env::var(name)
                .ok()
                .and_then(|v| v.parse::<u64>().ok())
                .map(Duration::from_secs)
        };
        let defaults = Self::default();
        Self {
            deadline: secs("CRIER_DEADLINE_SECS").unwrap_or(defaults.deadline),
            generation_timeout: secs("CRIER_GENERATION_TIMEOUT_SECS")
                .unwrap_or(defaults.generation_timeout),
            image_timeout: secs("CRIER_IMAGE_TIMEOUT_SECS").unwrap_or(defaults.image_timeout),
            retry_once: std::env::var("CRIER_RETRY_ONCE")
                .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
                .unwrap_or(defaults.retry_once),
        }
    }

    /// Validates the timing relationships.
    ///
    /// # Errors
    ///
    /// Returns an error if any budget is zero or a per-call budget is not
    /// shorter than the global deadline. A per-call budget equal to the
    /// deadline would let one stuck call silently consume the whole window.
    pub fn validate(&self) -> Result<(), OrchestratorError> {
        if self.deadline.is_zero() || self.generation_timeout.is_zero() || self.image_timeout.is_zero()
        {
            return Err(OrchestratorError::new(
                OrchestratorErrorKind::Configuration("budgets must be non-zero".to_string()),
            ));
        }
        if self.generation_timeout >= self.deadline {
            return Err(OrchestratorError::new(
                OrchestratorErrorKind::Configuration(
                    "generation timeout must be shorter than the global deadline".to_string(),
                ),
            ));
        }
        if self.image_timeout >= self.deadline {
            return Err(OrchestratorError::new(
                OrchestratorErrorKind::Configuration(
                    "image timeout must be shorter than the global deadline".to_string(),
                ),
            ));
        }
        Ok(())
    }
}

/// Builder for `OrchestratorConfig`.
#[derive(Debug, Default)]
pub struct OrchestratorConfigBuilder {
    deadline: Option<Duration>,
    generation_timeout: Option<Duration>,
    image_timeout: Option<Duration>,
    retry_once: Option<bool>,
}

impl OrchestratorConfigBuilder {
    /// Sets the global deadline.
    pub fn deadline(mut self, value: Duration) -> Self {
        self.deadline = Some(value);
        self
    }

    /// Sets the per-call generation timeout.
    pub fn generation_timeout(mut self, value: Duration) -> Self {
        self.generation_timeout = Some(value);
        self
    }

    /// Sets the per-call image timeout.
    pub fn image_timeout(mut self, value: Duration) -> Self {
        self.image_timeout = Some(value);
        self
    }

    /// Sets the single-retry policy for failed generation calls.
    pub fn retry_once(mut self, value: bool) -> Self {
        self.retry_once = Some(value);
        self
    }

    /// Builds the `OrchestratorConfig`.
    pub fn build(self) -> OrchestratorConfig {
        let defaults = OrchestratorConfig::default();
        OrchestratorConfig {
            deadline: self.deadline.unwrap_or(defaults.deadline),
            generation_timeout: self
                .generation_timeout
                .unwrap_or(defaults.generation_timeout),
            image_timeout: self.image_timeout.unwrap_or(defaults.image_timeout),
            retry_once: self.retry_once.unwrap_or(defaults.retry_once),
        }
    }
}
