//! Post validation and normalization.
//!
//! Pure and total: every raw generation result becomes a policy-conformant
//! `GeneratedPost`. Hard bounds are enforced by truncation or clamping;
//! advisory bounds are recorded as quality flags and the text left alone.

use crier_core::{
    GeneratedPost, ImageResult, LengthRule, Platform, PostMetadata, QualityFlag,
    RawGenerationResult, extract_keywords, policy_for,
};
use tracing::debug;

/// Generic tags appended when keyword extraction cannot supply enough
/// fallback hashtags on its own.
const GENERIC_HASHTAGS: &[&str] = &["#update", "#news", "#today"];

/// Normalize one raw generation result against its platform policy.
///
/// - Content over a hard character cap is truncated three characters short
///   of the cap and an ellipsis appended, with `Truncated` flagged.
/// - A word count outside an advisory window is flagged, never truncated:
///   cutting at an arbitrary word boundary would corrupt meaning.
/// - The hashtag list is clamped to the policy maximum; a shortfall below
///   the minimum is topped up deterministically from keyword extraction,
///   then generic and numbered platform tags, never by re-calling the
///   generation service.
pub fn normalize(raw: RawGenerationResult, image: ImageResult) -> GeneratedPost {
    let (platform, content, hashtags) = raw.into_parts();
    debug_assert_eq!(platform, *image.platform());

    let policy = policy_for(platform);
    let mut quality = Vec::new();

    let content = match *policy.length() {
        LengthRule::MaxChars(max) => {
            if content.chars().count() > max {
                quality.push(QualityFlag::Truncated);
                let mut truncated: String = content.chars().take(max - 3).collect();
                truncated.push('…');
                truncated
            } else {
                content
            }
        }
        LengthRule::WordRange { min, max } => {
            let words = content.split_whitespace().count();
            if words < min || words > max {
                quality.push(QualityFlag::WordCountOutOfRange);
            }
            content
        }
        LengthRule::Unbounded => content,
    };

    let hashtags = normalize_hashtags(platform, &content, hashtags, &mut quality);

    if *image.placeholder() {
        quality.push(QualityFlag::PlaceholderImage);
    }

    let char_count = content.chars().count();
    let word_count = content.split_whitespace().count();
    let estimated_reach = estimate_reach(platform, hashtags.len());
    let metadata = PostMetadata::new(char_count, word_count, Some(estimated_reach), quality);

    debug!(
        platform = %platform,
        char_count,
        word_count,
        hashtags = hashtags.len(),
        "Normalized post"
    );
    GeneratedPost::new(platform, content, image.url().clone(), hashtags, metadata)
}

/// Clamp hashtags into the policy range, topping up a shortfall from
/// keyword extraction over the post content.
fn normalize_hashtags(
    platform: Platform,
    content: &str,
    raw: Vec<String>,
    quality: &mut Vec<QualityFlag>,
) -> Vec<String> {
    let policy = policy_for(platform);
    let mut hashtags: Vec<String> = Vec::new();
    for tag in raw {
        let tag = tag.trim();
        if tag.is_empty() || tag == "#" {
            continue;
        }
        let tag = if tag.starts_with('#') {
            tag.to_string()
        } else {
            format!("#{tag}")
        };
        if !contains_tag(&hashtags, &tag) {
            hashtags.push(tag);
        }
    }

    hashtags.truncate(*policy.hashtag_max());

    if hashtags.len() < *policy.hashtag_min() {
        quality.push(QualityFlag::HashtagsSynthesized);
        let needed = policy.hashtag_min() - hashtags.len();
        let candidates = extract_keywords(content, needed + hashtags.len())
            .into_iter()
            .map(|kw| format!("#{kw}"))
            .chain(GENERIC_HASHTAGS.iter().map(|t| t.to_string()));
        for tag in candidates {
            if hashtags.len() >= *policy.hashtag_min() {
                break;
            }
            if !contains_tag(&hashtags, &tag) {
                hashtags.push(tag);
            }
        }
        // Keyword-poor content can exhaust the pool above; numbered platform
        // tags always close the remaining gap.
        let mut serial = 1;
        while hashtags.len() < *policy.hashtag_min() {
            let tag = format!("#{platform}{serial}");
            serial += 1;
            if !contains_tag(&hashtags, &tag) {
                hashtags.push(tag);
            }
        }
    }

    hashtags
}

fn contains_tag(hashtags: &[String], tag: &str) -> bool {
    hashtags.iter().any(|t| t.eq_ignore_ascii_case(tag))
}

/// Heuristic audience estimate: the platform baseline scaled up slightly per
/// hashtag. Deterministic, advisory only.
fn estimate_reach(platform: Platform, hashtag_count: usize) -> u64 {
    let base = *policy_for(platform).base_reach();
    base + base * hashtag_count as u64 / 20
}

#[cfg(test)]
mod tests {
    use super::*;
    use crier_core::{MAX_CONTENT_CHARS, policy_for};
    use strum::IntoEnumIterator;

    fn raw(platform: Platform, content: &str, hashtags: &[&str]) -> RawGenerationResult {
        RawGenerationResult::new(
            platform,
            content.to_string(),
            hashtags.iter().map(|t| t.to_string()).collect(),
        )
    }

    fn image(platform: Platform) -> ImageResult {
        ImageResult::new(platform, "https://images.example/one.jpg".to_string(), false)
    }

    #[test]
    fn twitter_overflow_is_truncated_and_flagged() {
        let long = "x".repeat(400);
        let post = normalize(
            raw(Platform::Twitter, &long, &["#a", "#b"]),
            image(Platform::Twitter),
        );
        assert_eq!(*post.metadata().char_count(), 278);
        assert!(post.content().ends_with('…'));
        assert!(post.metadata().has_flag(QualityFlag::Truncated));
    }

    #[test]
    fn twitter_within_cap_is_untouched() {
        let post = normalize(
            raw(Platform::Twitter, "Short and sweet.", &["#a", "#b"]),
            image(Platform::Twitter),
        );
        assert_eq!(post.content(), "Short and sweet.");
        assert!(!post.metadata().has_flag(QualityFlag::Truncated));
    }

    #[test]
    fn linkedin_word_shortfall_is_flagged_not_truncated() {
        let content = "Only a few words here, well below the advisory window.";
        let post = normalize(
            raw(Platform::LinkedIn, content, &["#a", "#b", "#c"]),
            image(Platform::LinkedIn),
        );
        assert_eq!(post.content(), content);
        assert!(post.metadata().has_flag(QualityFlag::WordCountOutOfRange));
    }

    #[test]
    fn linkedin_in_window_carries_no_flag() {
        let content = "word ".repeat(200);
        let post = normalize(
            raw(Platform::LinkedIn, content.trim(), &["#a", "#b", "#c"]),
            image(Platform::LinkedIn),
        );
        assert!(!post.metadata().has_flag(QualityFlag::WordCountOutOfRange));
        assert_eq!(*post.metadata().word_count(), 200);
    }

    #[test]
    fn hashtags_are_clamped_to_policy_max() {
        let many: Vec<String> = (0..12).map(|i| format!("#tag{i}")).collect();
        let many_refs: Vec<&str> = many.iter().map(|s| s.as_str()).collect();
        let post = normalize(
            raw(Platform::Twitter, "Body text.", &many_refs),
            image(Platform::Twitter),
        );
        assert_eq!(post.hashtags().len(), *policy_for(Platform::Twitter).hashtag_max());
    }

    #[test]
    fn hashtag_shortfall_is_topped_up_deterministically() {
        let content = "Mountains and rivers shape the landscape. Mountains endure.";
        let first = normalize(
            raw(Platform::Instagram, content, &[]),
            image(Platform::Instagram),
        );
        let second = normalize(
            raw(Platform::Instagram, content, &[]),
            image(Platform::Instagram),
        );
        let policy = policy_for(Platform::Instagram);
        assert!(first.hashtags().len() >= *policy.hashtag_min());
        assert_eq!(first.hashtags(), second.hashtags());
        assert!(first.metadata().has_flag(QualityFlag::HashtagsSynthesized));
        assert!(first.hashtags().contains(&"#mountains".to_string()));
    }

    #[test]
    fn bare_tags_gain_a_hash_prefix_and_dupes_collapse() {
        let post = normalize(
            raw(Platform::Twitter, "Body text.", &["rust", "#rust", "#Rust"]),
            image(Platform::Twitter),
        );
        let rust_tags = post
            .hashtags()
            .iter()
            .filter(|t| t.eq_ignore_ascii_case("#rust"))
            .count();
        assert_eq!(rust_tags, 1);
    }

    #[test]
    fn keyword_poor_content_still_reaches_the_policy_minimum() {
        // No alphabetic word of four or more characters: keyword extraction
        // yields nothing, so generic and numbered tags must close the gap.
        let post = normalize(
            raw(Platform::Instagram, "Go go go! Sun up. Joy all day.", &[]),
            image(Platform::Instagram),
        );
        let policy = policy_for(Platform::Instagram);
        assert!(post.hashtags().len() >= *policy.hashtag_min());
        assert!(post.hashtags().len() <= *policy.hashtag_max());
        assert!(post.metadata().has_flag(QualityFlag::HashtagsSynthesized));
        let mut deduped: Vec<String> =
            post.hashtags().iter().map(|t| t.to_lowercase()).collect();
        deduped.sort();
        deduped.dedup();
        assert_eq!(deduped.len(), post.hashtags().len());
    }

    #[test]
    fn placeholder_image_is_flagged() {
        let post = normalize(
            raw(Platform::Facebook, "Body text.", &["#a"]),
            ImageResult::placeholder_for(Platform::Facebook),
        );
        assert!(post.metadata().has_flag(QualityFlag::PlaceholderImage));
        assert!(!post.image_url().is_empty());
    }

    #[test]
    fn every_platform_yields_policy_conformant_hashtags() {
        for platform in Platform::iter() {
            let content = "Harvest season brings orchards, markets, and long golden evenings \
                           across the valley."
                .repeat(3);
            assert!(content.chars().count() < MAX_CONTENT_CHARS);
            let post = normalize(raw(platform, &content, &[]), image(platform));
            let policy = policy_for(platform);
            assert!(post.hashtags().len() >= *policy.hashtag_min());
            assert!(post.hashtags().len() <= *policy.hashtag_max());
        }
    }
}
