//! The request orchestrator: validate, fan out, aggregate.

use crate::{OrchestratorConfig, OrchestratorState, normalize};
use crier_core::{
    DegradedPost, ErrorCode, ErrorResponse, GenerationResponse, ImageResult, InputContent,
    Platform, PlatformOutcome, PostError, PostErrorKind, RawGenerationResult, extract_keywords,
};
use crier_error::{CrierResult, GenerationError, GenerationErrorKind, GenerationResult};
use crier_interface::{ContentDriver, ImageDriver};
use std::collections::BTreeMap;
use std::sync::Arc;
use std::time::Duration;
use strum::IntoEnumIterator;
use tokio::task::JoinSet;
use tokio::time::{Instant, timeout, timeout_at};
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info, instrument, warn};

/// Number of keywords feeding the image search query.
const QUERY_KEYWORDS: usize = 3;

/// Result of one fan-out task, tagged by platform.
enum TaskOutput {
    Generation(Platform, GenerationResult<RawGenerationResult>),
    Image(Platform, ImageResult),
}

/// Drives one request end to end: validation, the eight-task fan-out under a
/// single global deadline, per-platform normalization, and aggregation into
/// one atomic response.
///
/// The orchestrator holds no per-request state between calls; everything a
/// request touches is owned by that invocation and dropped with it.
#[derive(Debug, Clone)]
pub struct Orchestrator<C, I> {
    content: Arc<C>,
    images: Arc<I>,
    config: OrchestratorConfig,
}

impl<C, I> Orchestrator<C, I>
where
    C: ContentDriver + 'static,
    I: ImageDriver + 'static,
{
    /// Creates a new orchestrator over the two external drivers.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration's timing relationships are
    /// invalid (zero budgets, or a per-call budget not shorter than the
    /// global deadline).
    pub fn new(content: Arc<C>, images: Arc<I>, config: OrchestratorConfig) -> CrierResult<Self> {
        config.validate()?;
        Ok(Self {
            content,
            images,
            config,
        })
    }

    /// Process one request from raw text to a response.
    ///
    /// On success, the response holds exactly one entry per platform in
    /// canonical order, each either a normalized post or a structured
    /// per-platform error. On failure, the returned [`ErrorResponse`] maps
    /// the terminal state to the wire taxonomy.
    #[instrument(skip(self, text), fields(request_id = %uuid::Uuid::new_v4()))]
    pub async fn run(&self, text: &str) -> Result<GenerationResponse, ErrorResponse> {
        let mut state = OrchestratorState::Received;
        state = self.advance(state, OrchestratorState::Validating);

        // Hard precondition: no external call runs on unvalidated input.
        let input = match InputContent::new(text) {
            Ok(input) => input,
            Err(e) => {
                self.advance(state, OrchestratorState::Failed);
                warn!(observed = e.observed(), "Input rejected by validator");
                return Err(ErrorResponse::new(
                    ErrorCode::ValidationError,
                    e.kind.to_string(),
                )
                .with_details(serde_json::json!({ "observedChars": e.observed() })));
            }
        };

        state = self.advance(state, OrchestratorState::FanningOut);
        let deadline = Instant::now() + *self.config.deadline();
        let cancel = CancellationToken::new();
        let query = Arc::new(extract_keywords(input.as_str(), QUERY_KEYWORDS).join(" "));

        let mut tasks: JoinSet<TaskOutput> = JoinSet::new();
        for platform in Platform::iter() {
            self.spawn_generation(&mut tasks, platform, &input, &cancel);
            self.spawn_image(&mut tasks, platform, &query, &cancel);
        }

        let mut generations: BTreeMap<Platform, GenerationResult<RawGenerationResult>> =
            BTreeMap::new();
        let mut images: BTreeMap<Platform, ImageResult> = BTreeMap::new();
        let mut record = |output: TaskOutput| match output {
            TaskOutput::Generation(platform, result) => {
                generations.insert(platform, result);
            }
            TaskOutput::Image(platform, result) => {
                images.insert(platform, result);
            }
        };

        let mut deadline_fired = false;
        loop {
            match timeout_at(deadline, tasks.join_next()).await {
                Ok(Some(Ok(output))) => record(output),
                Ok(Some(Err(join_err))) => {
                    if join_err.is_panic() {
                        error!(error = %join_err, "Fan-out task panicked");
                        self.advance(state, OrchestratorState::Failed);
                        return Err(ErrorResponse::new(
                            ErrorCode::InternalError,
                            "a fan-out task panicked",
                        ));
                    }
                }
                Ok(None) => break,
                Err(_) => {
                    // Deadline fired: snapshot whatever finished, signal the
                    // rest to stop, and never block on stragglers.
                    warn!("Global deadline elapsed during fan-out");
                    cancel.cancel();
                    tasks.abort_all();
                    while let Some(joined) = tasks.join_next().await {
                        if let Ok(output) = joined {
                            record(output);
                        }
                    }
                    deadline_fired = true;
                    break;
                }
            }
        }
        drop(record);

        if deadline_fired && generations.len() < Platform::COUNT {
            self.advance(state, OrchestratorState::TimedOut);
            let budget_ms = self.config.deadline().as_millis() as u64;
            return Err(ErrorResponse::new(
                ErrorCode::TimeoutError,
                format!("generation did not complete within the {budget_ms}ms budget"),
            )
            .with_details(serde_json::json!({ "budgetMs": budget_ms })));
        }

        state = self.advance(state, OrchestratorState::Aggregating);
        self.aggregate(state, generations, images)
    }

    /// Assemble the terminal response from the per-platform result slots.
    fn aggregate(
        &self,
        state: OrchestratorState,
        mut generations: BTreeMap<Platform, GenerationResult<RawGenerationResult>>,
        mut images: BTreeMap<Platform, ImageResult>,
    ) -> Result<GenerationResponse, ErrorResponse> {
        let mut outcomes = Vec::with_capacity(Platform::COUNT);
        let mut accepted: Vec<String> = Vec::new();
        let mut failures: Vec<(Platform, GenerationError)> = Vec::new();

        for platform in Platform::iter() {
            let Some(generation) = generations.remove(&platform) else {
                self.advance(state, OrchestratorState::Failed);
                error!(%platform, "Generation slot missing at aggregation");
                return Err(ErrorResponse::new(
                    ErrorCode::InternalError,
                    "internal state lost a platform slot",
                ));
            };
            // Image tasks cannot fail; one missing at the deadline snapshot
            // resolves to a placeholder rather than blocking the response.
            let image = images
                .remove(&platform)
                .unwrap_or_else(|| ImageResult::placeholder_for(platform));
            match generation {
                Ok(raw) => {
                    let post = normalize(raw, image);
                    if accepted.contains(post.content()) {
                        warn!(%platform, "Duplicate content demoted to error entry");
                        outcomes.push(degraded(
                            platform,
                            PostErrorKind::DuplicateContent,
                            "generated text duplicated another platform's post",
                        ));
                    } else {
                        accepted.push(post.content().clone());
                        outcomes.push(PlatformOutcome::Post(post));
                    }
                }
                Err(e) => {
                    debug!(%platform, error = %e, "Platform degraded");
                    outcomes.push(degraded(platform, post_error_kind(&e.kind), e.kind.to_string()));
                    failures.push((platform, e));
                }
            }
        }

        if accepted.is_empty() {
            let response = total_failure_response(&failures);
            let terminal = if *response.error() == ErrorCode::TimeoutError {
                OrchestratorState::TimedOut
            } else {
                OrchestratorState::Failed
            };
            self.advance(state, terminal);
            return Err(response);
        }

        self.advance(state, OrchestratorState::Complete);
        info!(
            posts = accepted.len(),
            degraded = Platform::COUNT - accepted.len(),
            "Request complete"
        );
        Ok(GenerationResponse::new(outcomes))
    }

    fn spawn_generation(
        &self,
        tasks: &mut JoinSet<TaskOutput>,
        platform: Platform,
        input: &InputContent,
        cancel: &CancellationToken,
    ) {
        let driver = Arc::clone(&self.content);
        let input = input.clone();
        let per_call = *self.config.generation_timeout();
        let retry_once = *self.config.retry_once();
        let token = cancel.child_token();
        tasks.spawn(async move {
            let mut result = generation_attempt(&*driver, platform, &input, per_call, &token).await;
            if retry_once
                && result
                    .as_ref()
                    .is_err_and(|e| e.kind.retryable() && !token.is_cancelled())
            {
                debug!(%platform, "Retrying failed generation call once");
                result = generation_attempt(&*driver, platform, &input, per_call, &token).await;
            }
            TaskOutput::Generation(platform, result)
        });
    }

    fn spawn_image(
        &self,
        tasks: &mut JoinSet<TaskOutput>,
        platform: Platform,
        query: &Arc<String>,
        cancel: &CancellationToken,
    ) {
        let driver = Arc::clone(&self.images);
        let query = Arc::clone(query);
        let per_call = *self.config.image_timeout();
        let token = cancel.child_token();
        tasks.spawn(async move {
            let result = tokio::select! {
                _ = token.cancelled() => ImageResult::placeholder_for(platform),
                looked_up = timeout(per_call, driver.lookup(&query, platform)) => {
                    looked_up.unwrap_or_else(|_| ImageResult::placeholder_for(platform))
                }
            };
            TaskOutput::Image(platform, result)
        });
    }

    /// Record a state transition. Illegal transitions are a defect caught in
    /// debug builds.
    fn advance(&self, from: OrchestratorState, to: OrchestratorState) -> OrchestratorState {
        debug_assert!(from.can_advance_to(to), "illegal transition {from} -> {to}");
        debug!(%from, %to, "State transition");
        to
    }
}

/// One bounded generation attempt, racing the per-call budget and the
/// request-level cancellation signal.
async fn generation_attempt<C: ContentDriver>(
    driver: &C,
    platform: Platform,
    input: &InputContent,
    per_call: Duration,
    token: &CancellationToken,
) -> GenerationResult<RawGenerationResult> {
    let budget_ms = per_call.as_millis() as u64;
    tokio::select! {
        _ = token.cancelled() => {
            Err(GenerationError::new(GenerationErrorKind::Timeout { budget_ms }))
        }
        outcome = timeout(per_call, driver.generate(platform, input)) => match outcome {
            Ok(result) => result,
            Err(_) => Err(GenerationError::new(GenerationErrorKind::Timeout { budget_ms })),
        },
    }
}

fn degraded(
    platform: Platform,
    kind: PostErrorKind,
    message: impl Into<String>,
) -> PlatformOutcome {
    PlatformOutcome::Degraded(DegradedPost::new(
        platform,
        PostError::new(kind, message.into()),
    ))
}

fn post_error_kind(kind: &GenerationErrorKind) -> PostErrorKind {
    match kind {
        GenerationErrorKind::Http(_) | GenerationErrorKind::Api { .. } => PostErrorKind::Upstream,
        GenerationErrorKind::RateLimited { .. } => PostErrorKind::RateLimited,
        GenerationErrorKind::Timeout { .. } => PostErrorKind::Timeout,
        GenerationErrorKind::Parse(_) | GenerationErrorKind::Builder(_) => {
            PostErrorKind::InvalidResponse
        }
    }
}

/// Map an all-platforms failure onto the request-level taxonomy. A uniform
/// 429-class failure surfaces as a rate-limit error with the largest
/// retry-after hint; anything else is the combined upstream summary.
fn total_failure_response(failures: &[(Platform, GenerationError)]) -> ErrorResponse {
    let all_rate_limited = !failures.is_empty()
        && failures
            .iter()
            .all(|(_, e)| matches!(e.kind, GenerationErrorKind::RateLimited { .. }));

    if all_rate_limited {
        let retry_after = failures
            .iter()
            .filter_map(|(_, e)| match e.kind {
                GenerationErrorKind::RateLimited { retry_after_secs } => retry_after_secs,
                _ => None,
            })
            .max();
        let mut response = ErrorResponse::new(
            ErrorCode::RateLimitError,
            "the generation service rate limited every platform call",
        );
        if let Some(secs) = retry_after {
            response = response.with_details(serde_json::json!({ "retryAfterSecs": secs }));
        }
        return response;
    }

    // A uniform timeout failure is the budget's fault, not the API's: the
    // per-call timers fired on every platform, which is the same outcome as
    // the global deadline elapsing.
    let all_timed_out = !failures.is_empty()
        && failures
            .iter()
            .all(|(_, e)| matches!(e.kind, GenerationErrorKind::Timeout { .. }));
    if all_timed_out {
        return ErrorResponse::new(
            ErrorCode::TimeoutError,
            "every generation call exceeded its time budget",
        );
    }

    let summary: BTreeMap<String, String> = failures
        .iter()
        .map(|(platform, e)| (platform.to_string(), e.kind.to_string()))
        .collect();
    ErrorResponse::new(
        ErrorCode::AiApiError,
        "content generation failed for all platforms",
    )
    .with_details(serde_json::json!({ "platforms": summary }))
}
