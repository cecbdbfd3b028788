//! Request orchestrator for Crier.
//!
//! One validated request fans out into eight concurrent external calls
//! (content generation and image lookup for each platform), bounded by a
//! single global deadline, and aggregates into one atomic response. This
//! crate also owns the post normalizer that enforces per-platform policy on
//! each raw generation result.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod normalize;
mod orchestrator;
mod state;

pub use config::{OrchestratorConfig, OrchestratorConfigBuilder};
pub use normalize::normalize;
pub use orchestrator::Orchestrator;
pub use state::OrchestratorState;
