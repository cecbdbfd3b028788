//! External service clients for Crier.
//!
//! Two collaborators live here, each behind a driver trait from
//! `crier_interface`:
//!
//! - **Anthropic** messages API for per-platform content generation
//! - **Unsplash** search API for per-platform image lookup
//!
//! Credentials are injected as request headers only. They never appear in
//! URLs, logs, or error messages: upstream bodies are redacted before being
//! embedded in an error.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod anthropic;
mod redact;
mod unsplash;

pub use anthropic::{
    AnthropicContentClient, AnthropicMessage, AnthropicMessageBuilder, AnthropicRequest,
    AnthropicRequestBuilder, AnthropicResponse,
};
pub use redact::redact_credential;
pub use unsplash::UnsplashImageClient;
