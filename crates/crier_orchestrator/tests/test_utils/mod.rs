//! Scripted driver doubles for orchestrator tests.

use async_trait::async_trait;
use crier_core::{ImageResult, InputContent, Platform, RawGenerationResult, policy_for};
use crier_error::{GenerationError, GenerationErrorKind, GenerationResult};
use crier_interface::{ContentDriver, ImageDriver};
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;
use strum::IntoEnumIterator;

/// Per-platform behavior of the scripted content driver.
#[derive(Debug, Clone)]
pub enum Script {
    /// Return a platform-distinct post within policy bounds
    Succeed,
    /// Return exactly this content (hashtags still platform-distinct)
    SucceedWith(String),
    /// Fail every call with this kind
    Fail(GenerationErrorKind),
    /// Fail the first call, succeed afterwards
    FailOnce(GenerationErrorKind),
    /// Fail the first call after a delay, hang on every later call
    FailSlowlyThenHang(Duration, GenerationErrorKind),
    /// Never resolve (until cancelled or timed out)
    Hang,
}

/// Content driver whose behavior is scripted per platform, counting every
/// call so tests can assert how many external calls were attempted.
pub struct ScriptedContentDriver {
    scripts: HashMap<Platform, Script>,
    attempts: HashMap<Platform, AtomicUsize>,
    pub calls: AtomicUsize,
}

impl ScriptedContentDriver {
    /// Same script for every platform.
    pub fn uniform(script: Script) -> Self {
        let scripts = Platform::iter().map(|p| (p, script.clone())).collect();
        Self::from_scripts(scripts)
    }

    /// Override the script for one platform.
    pub fn with(mut self, platform: Platform, script: Script) -> Self {
        self.scripts.insert(platform, script);
        self
    }

    fn from_scripts(scripts: HashMap<Platform, Script>) -> Self {
        let attempts = Platform::iter().map(|p| (p, AtomicUsize::new(0))).collect();
        Self {
            scripts,
            attempts,
            calls: AtomicUsize::new(0),
        }
    }

    /// Calls made for one platform.
    pub fn attempts_for(&self, platform: Platform) -> usize {
        self.attempts[&platform].load(Ordering::SeqCst)
    }

    fn sample(platform: Platform) -> RawGenerationResult {
        let policy = policy_for(platform);
        let content = match platform {
            Platform::Twitter => format!("Quick {platform} take: solar adoption is surging."),
            Platform::LinkedIn => {
                // Lands inside the advisory 150-300 word window.
                format!(
                    "A perspective for {platform} readers. {}",
                    "Distributed solar keeps outperforming utility forecasts. ".repeat(30)
                )
            }
            Platform::Instagram => {
                format!("Golden hour over the {platform} solar farm, panels catching the light.")
            }
            Platform::Facebook => {
                format!("We visited a community solar project today, {platform} friends.")
            }
        };
        let hashtags = (0..*policy.hashtag_min())
            .map(|i| format!("#solar{i}"))
            .collect();
        RawGenerationResult::new(platform, content, hashtags)
    }
}

#[async_trait]
impl ContentDriver for ScriptedContentDriver {
    async fn generate(
        &self,
        platform: Platform,
        _content: &InputContent,
    ) -> GenerationResult<RawGenerationResult> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let attempt = self.attempts[&platform].fetch_add(1, Ordering::SeqCst);
        match &self.scripts[&platform] {
            Script::Succeed => Ok(Self::sample(platform)),
            Script::SucceedWith(content) => Ok(RawGenerationResult::new(
                platform,
                content.clone(),
                vec!["#shared".to_string(), "#tags".to_string()],
            )),
            Script::Fail(kind) => Err(GenerationError::new(kind.clone())),
            Script::FailOnce(kind) => {
                if attempt == 0 {
                    Err(GenerationError::new(kind.clone()))
                } else {
                    Ok(Self::sample(platform))
                }
            }
            Script::FailSlowlyThenHang(delay, kind) => {
                if attempt == 0 {
                    tokio::time::sleep(*delay).await;
                    Err(GenerationError::new(kind.clone()))
                } else {
                    tokio::time::sleep(Duration::from_secs(24 * 60 * 60)).await;
                    Err(GenerationError::new(GenerationErrorKind::Http(
                        "unreachable".to_string(),
                    )))
                }
            }
            Script::Hang => {
                tokio::time::sleep(Duration::from_secs(24 * 60 * 60)).await;
                Err(GenerationError::new(GenerationErrorKind::Http(
                    "unreachable".to_string(),
                )))
            }
        }
    }

    fn provider_name(&self) -> &'static str {
        "scripted"
    }
}

/// Image driver behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageMode {
    /// Resolve with a real-looking URL
    Real,
    /// Simulate the client's internal fallback: always a placeholder
    AlwaysPlaceholder,
    /// Never resolve (until cancelled or timed out)
    Hang,
}

/// Image driver double, counting calls like the content double.
pub struct StubImageDriver {
    mode: ImageMode,
    pub calls: AtomicUsize,
}

impl StubImageDriver {
    pub fn new(mode: ImageMode) -> Self {
        Self {
            mode,
            calls: AtomicUsize::new(0),
        }
    }
}

#[async_trait]
impl ImageDriver for StubImageDriver {
    async fn lookup(&self, _query: &str, platform: Platform) -> ImageResult {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match self.mode {
            ImageMode::Real => ImageResult::new(
                platform,
                format!("https://images.example/{platform}.jpg"),
                false,
            ),
            ImageMode::AlwaysPlaceholder => ImageResult::placeholder_for(platform),
            ImageMode::Hang => {
                tokio::time::sleep(Duration::from_secs(24 * 60 * 60)).await;
                ImageResult::placeholder_for(platform)
            }
        }
    }

    fn provider_name(&self) -> &'static str {
        "stub"
    }
}

/// A valid article of exactly `chars` characters.
pub fn article(chars: usize) -> String {
    let base = "Solar adoption is accelerating across rural markets and small towns. ";
    let mut text = base.repeat(chars / base.len() + 1);
    text.truncate(chars);
    text
}
