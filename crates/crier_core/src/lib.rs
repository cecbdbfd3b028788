//! Core data types for the Crier social post fan-out library.
//!
//! This crate provides the platform set, per-platform policy table, input
//! validation, and the post/response data model shared by every other crier
//! crate.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod input;
mod keywords;
mod platform;
mod policy;
mod post;
mod telemetry;
mod wire;

pub use input::{InputContent, MAX_CONTENT_CHARS, MIN_CONTENT_CHARS};
pub use keywords::extract_keywords;
pub use platform::Platform;
pub use policy::{LengthRule, PlatformPolicy, policy_for, prompt_for};
pub use post::{
    DegradedPost, GeneratedPost, GenerationResponse, ImageResult, PlatformOutcome, PostError,
    PostErrorKind, PostMetadata, QualityFlag, RawGenerationResult,
};
pub use telemetry::init_telemetry;
pub use wire::{ErrorCode, ErrorResponse};
