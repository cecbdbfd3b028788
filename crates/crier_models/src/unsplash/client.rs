//! Unsplash image lookup client.

use crate::redact_credential;
use crate::unsplash::dto::UnsplashSearchResponse;
use async_trait::async_trait;
use crier_core::{ImageResult, Platform};
use crier_error::{ImageError, ImageErrorKind};
use crier_interface::ImageDriver;
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, instrument, warn};

const UNSPLASH_SEARCH_URL: &str = "https://api.unsplash.com/search/photos";
const DEFAULT_CALL_TIMEOUT: Duration = Duration::from_secs(10);

/// Image lookup client backed by the Unsplash search API.
///
/// Lookup cannot fail from the caller's perspective: every upstream error,
/// timeout, or empty result set collapses into a deterministic placeholder.
/// The platform selects the orientation hint passed to the search.
#[derive(Debug, Clone)]
pub struct UnsplashImageClient {
    client: Client,
    access_key: String,
    call_timeout: Duration,
}

impl UnsplashImageClient {
    /// Creates a new Unsplash image client.
    #[instrument(skip(access_key), fields(key_len = access_key.as_ref().len()))]
    pub fn new(access_key: impl AsRef<str>) -> Self {
        debug!("Creating new Unsplash image client");
        Self {
            client: Client::new(),
            access_key: access_key.as_ref().to_string(),
            call_timeout: DEFAULT_CALL_TIMEOUT,
        }
    }

    /// Create a client from the `UNSPLASH_ACCESS_KEY` environment variable.
    pub fn from_env() -> Result<Self, ImageError> {
        let access_key = std::env::var("UNSPLASH_ACCESS_KEY").map_err(|_| {
            ImageError::new(ImageErrorKind::Parse(
                "UNSPLASH_ACCESS_KEY not set".to_string(),
            ))
        })?;
        Ok(Self::new(access_key))
    }

    /// Set the per-call timeout.
    pub fn with_call_timeout(mut self, timeout: Duration) -> Self {
        self.call_timeout = timeout;
        self
    }

    /// Orientation hint the search API accepts, chosen per platform.
    fn orientation(platform: Platform) -> &'static str {
        match platform {
            Platform::Twitter | Platform::LinkedIn | Platform::Facebook => "landscape",
            Platform::Instagram => "portrait",
        }
    }

    /// The fallible inner search; the public lookup converts every error
    /// into a placeholder.
    async fn search(&self, query: &str, platform: Platform) -> Result<String, ImageError> {
        let response = self
            .client
            .get(UNSPLASH_SEARCH_URL)
            .header(
                reqwest::header::AUTHORIZATION,
                format!("Client-ID {}", self.access_key),
            )
            .timeout(self.call_timeout)
            .query(&[
                ("query", query),
                ("per_page", "1"),
                ("orientation", Self::orientation(platform)),
            ])
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    ImageError::new(ImageErrorKind::Timeout {
                        budget_ms: self.call_timeout.as_millis() as u64,
                    })
                } else {
                    ImageError::new(ImageErrorKind::Http(format!("request failed: {e}")))
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ImageError::new(ImageErrorKind::Api {
                status: status.as_u16(),
                message: redact_credential(&body, &self.access_key),
            }));
        }

        let parsed: UnsplashSearchResponse = response.json().await.map_err(|e| {
            ImageError::new(ImageErrorKind::Parse(format!(
                "failed to parse response: {e}"
            )))
        })?;

        parsed
            .results()
            .first()
            .map(|photo| photo.regular_url().to_string())
            .ok_or_else(|| ImageError::new(ImageErrorKind::EmptyResults))
    }
}

#[async_trait]
impl ImageDriver for UnsplashImageClient {
    #[instrument(skip(self), fields(platform = %platform, query_len = query.len()))]
    async fn lookup(&self, query: &str, platform: Platform) -> ImageResult {
        match self.search(query, platform).await {
            Ok(url) => {
                debug!("Found image for platform");
                ImageResult::new(platform, url, false)
            }
            Err(e) => {
                warn!(error = %e, "Image search failed, substituting placeholder");
                ImageResult::placeholder_for(platform)
            }
        }
    }

    fn provider_name(&self) -> &'static str {
        "unsplash"
    }
}
