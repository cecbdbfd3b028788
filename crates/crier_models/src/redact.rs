//! Credential redaction for error messages.

/// Replace every occurrence of a credential in text with a marker.
///
/// Upstream error bodies occasionally echo request headers back; anything
/// destined for an error message or log line passes through here first.
///
/// # Examples
///
/// ```
/// use crier_models::redact_credential;
///
/// let body = "invalid key sk-ant-12345 supplied";
/// assert_eq!(
///     redact_credential(body, "sk-ant-12345"),
///     "invalid key [REDACTED] supplied"
/// );
/// ```
pub fn redact_credential(text: &str, credential: &str) -> String {
    if credential.is_empty() {
        return text.to_string();
    }
    text.replace(credential, "[REDACTED]")
}
