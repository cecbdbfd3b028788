//! Post and response data model.
//!
//! Everything here is constructed once per request, returned, and discarded.
//! Field names serialize in the camelCase wire convention consumed by the
//! UI boundary collaborator.

use crate::Platform;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Output of one content generation call before normalization.
#[derive(Debug, Clone, PartialEq, Eq, derive_new::new, derive_getters::Getters)]
pub struct RawGenerationResult {
    /// Platform the text was generated for
    platform: Platform,
    /// Generated post body
    content: String,
    /// Raw hashtag list parsed from the completion
    hashtags: Vec<String>,
}

impl RawGenerationResult {
    /// Consume the result, yielding its parts for normalization.
    pub fn into_parts(self) -> (Platform, String, Vec<String>) {
        (self.platform, self.content, self.hashtags)
    }
}

/// Output of one image lookup, real or placeholder.
///
/// The image client cannot fail: an `ImageResult` always carries a non-empty
/// URL, with `placeholder` recording whether the upstream search was
/// substituted.
#[derive(Debug, Clone, PartialEq, Eq, derive_new::new, derive_getters::Getters)]
pub struct ImageResult {
    /// Platform the image was selected for
    platform: Platform,
    /// Image URL, never empty
    url: String,
    /// Whether a placeholder was substituted for an upstream failure
    placeholder: bool,
}

impl ImageResult {
    /// Deterministic placeholder for a platform, sized to its preferred
    /// aspect ratio.
    pub fn placeholder_for(platform: Platform) -> Self {
        let (width, height) = match platform {
            Platform::Twitter => (1600, 900),
            Platform::LinkedIn => (1200, 627),
            Platform::Instagram => (1080, 1350),
            Platform::Facebook => (1200, 630),
        };
        Self {
            platform,
            url: format!("https://placehold.co/{width}x{height}?text={platform}"),
            placeholder: true,
        }
    }
}

/// Advisory quality observations recorded during normalization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum QualityFlag {
    /// Content was hard-truncated to fit the platform cap
    Truncated,
    /// Word count fell outside the platform's advisory window
    WordCountOutOfRange,
    /// Hashtags were topped up from keyword extraction
    HashtagsSynthesized,
    /// A placeholder image was substituted for an upstream failure
    PlaceholderImage,
}

/// Computed metadata attached to every normalized post.
#[derive(
    Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_new::new, derive_getters::Getters,
)]
#[serde(rename_all = "camelCase")]
pub struct PostMetadata {
    /// Character count of the normalized content
    char_count: usize,
    /// Word count of the normalized content
    word_count: usize,
    /// Heuristic audience estimate
    #[serde(default, skip_serializing_if = "Option::is_none")]
    estimated_reach: Option<u64>,
    /// Advisory quality observations, empty when the post is clean
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    quality: Vec<QualityFlag>,
}

impl PostMetadata {
    /// Whether a given quality flag was recorded.
    pub fn has_flag(&self, flag: QualityFlag) -> bool {
        self.quality.contains(&flag)
    }
}

/// The terminal artifact for one platform: a normalized, policy-conformant
/// post. Immutable once constructed.
#[derive(
    Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_new::new, derive_getters::Getters,
)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedPost {
    /// Target platform
    platform: Platform,
    /// Normalized post body
    content: String,
    /// Image URL, real or placeholder, never empty
    image_url: String,
    /// Hashtags within the platform's policy range
    hashtags: Vec<String>,
    /// Computed metadata
    metadata: PostMetadata,
}

/// Machine-readable kind for a per-platform error entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PostErrorKind {
    /// The generation service returned an error for this platform
    Upstream,
    /// The generation service rate-limited this platform's call
    RateLimited,
    /// The per-call time budget elapsed
    Timeout,
    /// The generation service response could not be parsed
    InvalidResponse,
    /// The generated text duplicated another platform's post
    DuplicateContent,
}

/// Structured error body of a degraded per-platform entry.
#[derive(
    Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_new::new, derive_getters::Getters,
)]
pub struct PostError {
    /// Machine-readable kind
    kind: PostErrorKind,
    /// Human-readable message
    message: String,
}

/// A platform whose generation degraded: an error entry stands in for the
/// post. Mirrors image-service degradation, but visibly, because substituting
/// placeholder text would corrupt content in a way a placeholder image does
/// not.
#[derive(
    Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_new::new, derive_getters::Getters,
)]
pub struct DegradedPost {
    /// Target platform
    platform: Platform,
    /// What went wrong for this platform
    error: PostError,
}

/// One entry per platform in a response: either a normalized post or a
/// structured error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PlatformOutcome {
    /// Generation and normalization succeeded
    Post(GeneratedPost),
    /// Generation failed; the error entry stands in for the post
    Degraded(DegradedPost),
}

impl PlatformOutcome {
    /// The platform this entry belongs to.
    pub fn platform(&self) -> Platform {
        match self {
            PlatformOutcome::Post(post) => *post.platform(),
            PlatformOutcome::Degraded(degraded) => *degraded.platform(),
        }
    }

    /// The post, when this entry succeeded.
    pub fn as_post(&self) -> Option<&GeneratedPost> {
        match self {
            PlatformOutcome::Post(post) => Some(post),
            PlatformOutcome::Degraded(_) => None,
        }
    }

    /// The error entry, when this platform degraded.
    pub fn as_degraded(&self) -> Option<&DegradedPost> {
        match self {
            PlatformOutcome::Post(_) => None,
            PlatformOutcome::Degraded(degraded) => Some(degraded),
        }
    }
}

/// The aggregated response: exactly one outcome per platform in canonical
/// order, stamped at construction. Never mutated afterward and never
/// persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_getters::Getters)]
#[serde(rename_all = "camelCase")]
pub struct GenerationResponse {
    /// Per-platform outcomes in canonical platform order
    posts: Vec<PlatformOutcome>,
    /// UTC timestamp taken when the response was assembled
    generated_at: DateTime<Utc>,
}

impl GenerationResponse {
    /// Assemble a response, stamping the current time.
    pub fn new(posts: Vec<PlatformOutcome>) -> Self {
        Self {
            posts,
            generated_at: Utc::now(),
        }
    }
}
