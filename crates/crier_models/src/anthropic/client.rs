//! Anthropic content generation client.

use crate::anthropic::{AnthropicMessage, AnthropicRequest, AnthropicResponse, parse_completion};
use crate::redact_credential;
use async_trait::async_trait;
use crier_core::{InputContent, Platform, RawGenerationResult, prompt_for};
use crier_error::{GenerationError, GenerationErrorKind, GenerationResult};
use crier_interface::ContentDriver;
use reqwest::{Client, StatusCode};
use std::time::Duration;
use tracing::{debug, error, instrument, warn};

const ANTHROPIC_API_URL: &str = "https://api.anthropic.com/v1/messages";
const ANTHROPIC_VERSION: &str = "2023-06-01";
const DEFAULT_MODEL: &str = "claude-3-5-haiku-20241022";
const DEFAULT_CALL_TIMEOUT: Duration = Duration::from_secs(30);
const MAX_TOKENS: u32 = 1024;

/// Content generation client backed by the Anthropic messages API.
///
/// One platform, one call: the orchestrator owns batching and retry. The
/// API key travels in the `x-api-key` header only and is stripped from any
/// upstream body before it lands in an error message.
#[derive(Debug, Clone)]
pub struct AnthropicContentClient {
    client: Client,
    api_key: String,
    model: String,
    call_timeout: Duration,
}

impl AnthropicContentClient {
    /// Creates a new Anthropic content client.
    ///
    /// # Arguments
    ///
    /// * `api_key` - Anthropic API key
    /// * `model` - Model identifier (e.g., "claude-3-5-haiku-20241022")
    #[instrument(skip(api_key, model), fields(key_len = api_key.as_ref().len()))]
    pub fn new(api_key: impl AsRef<str>, model: impl Into<String>) -> Self {
        debug!("Creating new Anthropic content client");
        Self {
            client: Client::new(),
            api_key: api_key.as_ref().to_string(),
            model: model.into(),
            call_timeout: DEFAULT_CALL_TIMEOUT,
        }
    }

    /// Create a client from environment variables.
    ///
    /// Reads:
    /// - `ANTHROPIC_API_KEY` (required)
    /// - `CRIER_GENERATION_MODEL` (default: "claude-3-5-haiku-20241022")
    pub fn from_env() -> GenerationResult<Self> {
        let api_key = std::env::var("ANTHROPIC_API_KEY").map_err(|_| {
            GenerationError::new(GenerationErrorKind::Builder(
                "ANTHROPIC_API_KEY not set".to_string(),
            ))
        })?;
        let model =
            std::env::var("CRIER_GENERATION_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());
        Ok(Self::new(api_key, model))
    }

    /// Set the per-call timeout.
    pub fn with_call_timeout(mut self, timeout: Duration) -> Self {
        self.call_timeout = timeout;
        self
    }

    /// Sends a request to the Anthropic API.
    #[instrument(skip(self, request), fields(model = %request.model()))]
    async fn send(&self, request: &AnthropicRequest) -> GenerationResult<AnthropicResponse> {
        debug!("Sending request to Anthropic API");

        let response = self
            .client
            .post(ANTHROPIC_API_URL)
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", ANTHROPIC_VERSION)
            .header("content-type", "application/json")
            .timeout(self.call_timeout)
            .json(request)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    warn!("Anthropic call exceeded its time budget");
                    GenerationError::new(GenerationErrorKind::Timeout {
                        budget_ms: self.call_timeout.as_millis() as u64,
                    })
                } else {
                    error!(error = ?e, "Failed to send request to Anthropic API");
                    GenerationError::new(GenerationErrorKind::Http(format!(
                        "request failed: {e}"
                    )))
                }
            })?;

        let status = response.status();
        if status == StatusCode::TOO_MANY_REQUESTS {
            let retry_after_secs = response
                .headers()
                .get(reqwest::header::RETRY_AFTER)
                .and_then(|v| v.to_str().ok())
                .and_then(|v| v.parse::<u64>().ok());
            warn!(?retry_after_secs, "Anthropic API rate limited the call");
            return Err(GenerationError::new(GenerationErrorKind::RateLimited {
                retry_after_secs,
            }));
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = redact_credential(&body, &self.api_key);
            error!(status = %status, "Anthropic API returned error");
            return Err(GenerationError::new(GenerationErrorKind::Api {
                status: status.as_u16(),
                message,
            }));
        }

        let parsed: AnthropicResponse = response.json().await.map_err(|e| {
            error!(error = ?e, "Failed to parse Anthropic response");
            GenerationError::new(GenerationErrorKind::Parse(format!(
                "failed to parse response: {e}"
            )))
        })?;

        debug!(response_id = %parsed.id(), "Received response from Anthropic");
        Ok(parsed)
    }

    /// Builds the messages request for one platform.
    fn build_request(
        &self,
        platform: Platform,
        content: &InputContent,
    ) -> GenerationResult<AnthropicRequest> {
        let prompt = prompt_for(platform, content);
        let message = AnthropicMessage::builder()
            .role("user")
            .content(prompt)
            .build()
            .map_err(|e| GenerationError::new(GenerationErrorKind::Builder(e.to_string())))?;

        AnthropicRequest::builder()
            .model(&self.model)
            .max_tokens(MAX_TOKENS)
            .messages(vec![message])
            .build()
            .map_err(|e| GenerationError::new(GenerationErrorKind::Builder(e.to_string())))
    }
}

#[async_trait]
impl ContentDriver for AnthropicContentClient {
    #[instrument(skip(self, content), fields(platform = %platform))]
    async fn generate(
        &self,
        platform: Platform,
        content: &InputContent,
    ) -> GenerationResult<RawGenerationResult> {
        debug!("Generating post content with Anthropic");

        let request = self.build_request(platform, content)?;
        let response = self.send(&request).await?;
        parse_completion(platform, &response.text())
    }

    fn provider_name(&self) -> &'static str {
        "anthropic"
    }
}
