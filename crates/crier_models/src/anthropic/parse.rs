//! Completion parsing: post body + trailing hashtag line.

use crier_core::{Platform, RawGenerationResult};
use crier_error::{GenerationError, GenerationErrorKind, GenerationResult};
use regex::Regex;
use std::sync::LazyLock;

static HASHTAG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"#[A-Za-z0-9_]+").expect("hashtag pattern is valid"));

/// Split a completion into post body and hashtag list.
///
/// The prompt instructs the model to end with a single line containing only
/// hashtags. When the last non-empty line is such a line, it is stripped
/// from the body and parsed; otherwise the body is kept whole and the
/// hashtag list is empty (the normalizer tops it up downstream).
///
/// # Errors
///
/// Returns a `Parse` error when the completion is empty or whitespace.
pub fn parse_completion(platform: Platform, text: &str) -> GenerationResult<RawGenerationResult> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(GenerationError::new(GenerationErrorKind::Parse(
            "empty completion".to_string(),
        )));
    }

    let last_line = trimmed
        .lines()
        .rev()
        .find(|line| !line.trim().is_empty())
        .unwrap_or_default();

    let hashtags: Vec<String> = HASHTAG_RE
        .find_iter(last_line)
        .map(|m| m.as_str().to_string())
        .collect();

    // A hashtag line contains nothing but hashtags and whitespace.
    let residue = HASHTAG_RE.replace_all(last_line, "");
    let is_hashtag_line = !hashtags.is_empty() && residue.trim().is_empty();

    let content = if is_hashtag_line {
        match trimmed.rfind(last_line) {
            Some(idx) => trimmed[..idx].trim_end().to_string(),
            None => trimmed.to_string(),
        }
    } else {
        trimmed.to_string()
    };

    if content.is_empty() {
        return Err(GenerationError::new(GenerationErrorKind::Parse(
            "completion contained only hashtags".to_string(),
        )));
    }

    let hashtags = if is_hashtag_line { hashtags } else { Vec::new() };
    Ok(RawGenerationResult::new(platform, content, hashtags))
}
