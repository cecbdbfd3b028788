//! Orchestrator state machine.

/// Lifecycle of one request.
///
/// The machine only moves forward: terminal states are never left, and
/// `FanningOut` is never re-entered (whole-request retries are a new
/// request, initiated by the caller).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display)]
pub enum OrchestratorState {
    /// Request arrived, nothing has run yet
    Received,
    /// Input is being checked against the acceptance window
    Validating,
    /// The eight external calls are in flight
    FanningOut,
    /// All tasks resolved; results are being normalized and assembled
    Aggregating,
    /// Terminal: a response with at least one post was returned
    Complete,
    /// Terminal: the global deadline elapsed before generation resolved
    TimedOut,
    /// Terminal: validation failed or every generation call failed
    Failed,
}

impl OrchestratorState {
    /// Whether `next` is a legal successor of this state.
    pub fn can_advance_to(self, next: OrchestratorState) -> bool {
        use OrchestratorState::*;
        matches!(
            (self, next),
            (Received, Validating)
                | (Validating, FanningOut)
                | (Validating, Failed)
                | (FanningOut, Aggregating)
                | (FanningOut, TimedOut)
                | (FanningOut, Failed)
                | (Aggregating, Complete)
                | (Aggregating, TimedOut)
                | (Aggregating, Failed)
        )
    }

    /// Whether this state is terminal.
    pub fn is_terminal(self) -> bool {
        matches!(
            self,
            OrchestratorState::Complete | OrchestratorState::TimedOut | OrchestratorState::Failed
        )
    }
}
