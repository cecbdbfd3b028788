//! Static per-platform policy table.
//!
//! Loaded into the binary at compile time, read-only thereafter. Safe for
//! unsynchronized concurrent reads from every fan-out task.

use crate::{InputContent, Platform};

/// Hard or advisory length rule for a platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LengthRule {
    /// Hard cap on character count, enforced by truncation
    MaxChars(usize),
    /// Advisory word-count window, violations flagged but never truncated
    WordRange {
        /// Minimum advisable word count
        min: usize,
        /// Maximum advisable word count
        max: usize,
    },
    /// No hard bound; length is whatever the generation service produces
    Unbounded,
}

/// Immutable per-platform constraints consulted by every other component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_getters::Getters)]
pub struct PlatformPolicy {
    /// Tone descriptor injected into the generation prompt
    tone: &'static str,
    /// Style descriptor injected into the generation prompt
    style: &'static str,
    /// Minimum hashtag count after normalization
    hashtag_min: usize,
    /// Maximum hashtag count after normalization
    hashtag_max: usize,
    /// Length rule applied by the normalizer
    length: LengthRule,
    /// Baseline audience estimate for the reach heuristic
    base_reach: u64,
}

static TWITTER_POLICY: PlatformPolicy = PlatformPolicy {
    tone: "punchy and conversational",
    style: "a strong hook in the first sentence, short lines, no fluff",
    hashtag_min: 2,
    hashtag_max: 4,
    length: LengthRule::MaxChars(280),
    base_reach: 1_200,
};

static LINKEDIN_POLICY: PlatformPolicy = PlatformPolicy {
    tone: "professional and insightful",
    style: "a clear narrative with a takeaway, written for industry peers",
    hashtag_min: 3,
    hashtag_max: 5,
    length: LengthRule::WordRange { min: 150, max: 300 },
    base_reach: 800,
};

static INSTAGRAM_POLICY: PlatformPolicy = PlatformPolicy {
    tone: "vivid and enthusiastic",
    style: "an evocative caption that complements a striking image",
    hashtag_min: 5,
    hashtag_max: 10,
    length: LengthRule::Unbounded,
    base_reach: 1_500,
};

static FACEBOOK_POLICY: PlatformPolicy = PlatformPolicy {
    tone: "warm and engaging",
    style: "a friendly story that invites comments and shares",
    hashtag_min: 1,
    hashtag_max: 3,
    length: LengthRule::Unbounded,
    base_reach: 1_000,
};

/// Look up the policy for a platform.
///
/// Total over the closed platform set: there is no failure case.
///
/// # Examples
///
/// ```
/// use crier_core::{LengthRule, Platform, policy_for};
///
/// let policy = policy_for(Platform::Twitter);
/// assert_eq!(*policy.length(), LengthRule::MaxChars(280));
/// ```
pub fn policy_for(platform: Platform) -> &'static PlatformPolicy {
    match platform {
        Platform::Twitter => &TWITTER_POLICY,
        Platform::LinkedIn => &LINKEDIN_POLICY,
        Platform::Instagram => &INSTAGRAM_POLICY,
        Platform::Facebook => &FACEBOOK_POLICY,
    }
}

/// Build the deterministic generation prompt for a platform.
///
/// Combines the input content with the platform's tone, style, length, and
/// hashtag instructions. The final-line hashtag instruction is load-bearing:
/// the generation client parses hashtags back out of that line.
pub fn prompt_for(platform: Platform, content: &InputContent) -> String {
    let policy = policy_for(platform);
    let length_instruction = match policy.length() {
        LengthRule::MaxChars(max) => format!("Keep the post under {max} characters."),
        LengthRule::WordRange { min, max } => {
            format!("Write between {min} and {max} words.")
        }
        LengthRule::Unbounded => "Use whatever length fits the platform.".to_string(),
    };
    format!(
        "Rewrite the following source text as a {platform} post. \
         The tone should be {tone}, with {style}. {length_instruction} \
         Respond with the post text only, ending with a single final line \
         that contains only {min} to {max} hashtags.\n\n\
         Source text:\n{content}",
        platform = platform,
        tone = policy.tone(),
        style = policy.style(),
        length_instruction = length_instruction,
        min = policy.hashtag_min(),
        max = policy.hashtag_max(),
        content = content.as_str(),
    )
}
