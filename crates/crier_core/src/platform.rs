//! The closed platform set.

use serde::{Deserialize, Serialize};

/// Target social platforms.
///
/// This is a closed set: adding a platform is a compile-time-visible change
/// that forces the policy table and every match site to account for it.
/// Declaration order is the canonical order used when assembling a response.
///
/// # Examples
///
/// ```
/// use crier_core::Platform;
/// use strum::IntoEnumIterator;
///
/// let all: Vec<Platform> = Platform::iter().collect();
/// assert_eq!(all.len(), 4);
/// assert_eq!(all[0], Platform::Twitter);
/// assert_eq!(Platform::LinkedIn.to_string(), "linkedin");
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Platform {
    /// Twitter/X: short punchy posts, hard 280-character cap
    Twitter,
    /// LinkedIn: professional long-form, advisory 150-300 word window
    LinkedIn,
    /// Instagram: visual-first captions, hashtag-heavy
    Instagram,
    /// Facebook: conversational mid-length posts
    Facebook,
}

impl Platform {
    /// Number of platforms in the closed set.
    pub const COUNT: usize = 4;
}
