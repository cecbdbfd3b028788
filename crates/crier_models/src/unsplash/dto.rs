//! Unsplash search API data transfer objects.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// URL variants of one Unsplash photo.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub(crate) struct UnsplashUrls {
    /// Reasonably sized rendition suitable for social posts
    regular: String,
}

/// One photo in a search result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub(crate) struct UnsplashPhoto {
    urls: UnsplashUrls,
}

impl UnsplashPhoto {
    /// The photo URL used in posts.
    pub(crate) fn regular_url(&self) -> &str {
        &self.urls.regular
    }
}

/// Unsplash search response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub(crate) struct UnsplashSearchResponse {
    results: Vec<UnsplashPhoto>,
}
