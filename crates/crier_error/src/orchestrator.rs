//! Orchestrator errors.

/// Request-level failure conditions in the orchestrator.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum OrchestratorErrorKind {
    /// The global deadline elapsed before all generation tasks resolved
    #[display("global deadline of {}ms exceeded", budget_ms)]
    DeadlineExceeded {
        /// Global budget in milliseconds
        budget_ms: u64,
    },

    /// Every generation call failed with a definitive error
    #[display("all platforms failed: {}", _0)]
    AllPlatformsFailed(String),

    /// Invalid configuration supplied at construction
    #[display("invalid configuration: {}", _0)]
    Configuration(String),

    /// A fan-out task panicked or otherwise left the state machine broken
    #[display("internal error: {}", _0)]
    Internal(String),
}

/// Orchestrator error with location tracking.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Orchestrator Error: {} at {}:{}", kind, file, line)]
pub struct OrchestratorError {
    /// The specific error kind
    pub kind: OrchestratorErrorKind,
    /// Line number where error occurred
    pub line: u32,
    /// Source file where error occurred
    pub file: &'static str,
}

impl OrchestratorError {
    /// Create a new orchestrator error.
    #[track_caller]
    pub fn new(kind: OrchestratorErrorKind) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            kind,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
