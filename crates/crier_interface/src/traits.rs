//! Trait definitions for the content generation and image lookup services.

use async_trait::async_trait;
use crier_core::{ImageResult, InputContent, Platform, RawGenerationResult};
use crier_error::GenerationResult;

/// One content generation call per invocation.
///
/// Implementations build the platform prompt, issue a single authenticated
/// request, and parse the completion into text plus hashtags. No batching
/// across platforms happens here: fanning out is the orchestrator's job, and
/// so is any retry policy.
#[async_trait]
pub trait ContentDriver: Send + Sync {
    /// Generate a platform-tailored post from validated input.
    async fn generate(
        &self,
        platform: Platform,
        content: &InputContent,
    ) -> GenerationResult<RawGenerationResult>;

    /// Provider name (e.g. "anthropic").
    fn provider_name(&self) -> &'static str;
}

/// One image search call per invocation.
///
/// This call cannot fail from the caller's perspective: implementations
/// convert every upstream error, timeout, or empty result set into a
/// platform-appropriate placeholder internally. The platform parameter only
/// selects an aspect-ratio hint.
#[async_trait]
pub trait ImageDriver: Send + Sync {
    /// Find an image for a search query, or a placeholder at worst.
    async fn lookup(&self, query: &str, platform: Platform) -> ImageResult;

    /// Provider name (e.g. "unsplash").
    fn provider_name(&self) -> &'static str;
}
