//! Crier - Social Post Fan-Out
//!
//! Crier converts one block of long-form text into four platform-tailored
//! social posts (Twitter, LinkedIn, Instagram, Facebook), each paired with an
//! image and hashtags, within a single wall-clock budget. One validated
//! request fans out into eight concurrent external calls and aggregates into
//! one atomic response, degrading gracefully when individual calls fail.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use crier::{AnthropicContentClient, Orchestrator, OrchestratorConfig, UnsplashImageClient};
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     crier::init_telemetry()?;
//!
//!     let content = Arc::new(AnthropicContentClient::from_env()?);
//!     let images = Arc::new(UnsplashImageClient::from_env()?);
//!     let orchestrator = Orchestrator::new(content, images, OrchestratorConfig::from_env())?;
//!
//!     let response = orchestrator.run(&std::fs::read_to_string("article.txt")?).await;
//!     println!("{}", serde_json::to_string_pretty(&response)?);
//!     Ok(())
//! }
//! ```
//!
//! # Architecture
//!
//! Crier is organized as a workspace with focused crates:
//!
//! - `crier_core` - Platform set, policy table, validation, post data model
//! - `crier_interface` - `ContentDriver` and `ImageDriver` trait definitions
//! - `crier_models` - Anthropic and Unsplash client implementations
//! - `crier_orchestrator` - Fan-out state machine and post normalizer
//! - `crier_error` - Kind-discriminated error types

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub use crier_core::{
    DegradedPost, ErrorCode, ErrorResponse, GeneratedPost, GenerationResponse, ImageResult,
    InputContent, LengthRule, MAX_CONTENT_CHARS, MIN_CONTENT_CHARS, Platform, PlatformOutcome,
    PlatformPolicy, PostError, PostErrorKind, PostMetadata, QualityFlag, RawGenerationResult,
    extract_keywords, init_telemetry, policy_for, prompt_for,
};
pub use crier_error::{
    CrierError, CrierErrorKind, CrierResult, GenerationError, GenerationErrorKind, ImageError,
    ImageErrorKind, OrchestratorError, OrchestratorErrorKind, ValidationError, ValidationErrorKind,
};
pub use crier_interface::{ContentDriver, ImageDriver};
pub use crier_models::{AnthropicContentClient, UnsplashImageClient};
pub use crier_orchestrator::{Orchestrator, OrchestratorConfig, OrchestratorState, normalize};
