//! Keyword extraction for image queries and fallback hashtags.

/// Common English words excluded from keyword candidates.
const STOPWORDS: &[&str] = &[
    "about", "after", "again", "also", "back", "because", "been", "before", "being", "between",
    "both", "could", "does", "doing", "down", "each", "even", "every", "first", "from", "have",
    "having", "here", "into", "just", "like", "made", "make", "many", "more", "most", "much",
    "need", "only", "other", "over", "really", "same", "should", "since", "some", "such", "than",
    "that", "their", "them", "then", "there", "these", "they", "things", "this", "those",
    "through", "time", "under", "very", "well", "were", "what", "when", "where", "which", "while",
    "will", "with", "would", "your",
];

/// Extract up to `limit` keywords from free text.
///
/// Keywords are lowercase alphabetic tokens of at least four characters that
/// are not stopwords, ranked by frequency with first occurrence breaking
/// ties. The ranking is fully deterministic for a given input, which matters
/// downstream: fallback hashtags synthesized from the same text must come out
/// identical on every run.
///
/// # Examples
///
/// ```
/// use crier_core::extract_keywords;
///
/// let text = "Rust makes systems programming safe. Rust ships safe binaries.";
/// let keywords = extract_keywords(text, 2);
/// assert_eq!(keywords[0], "rust");
/// assert_eq!(keywords[1], "safe");
/// ```
pub fn extract_keywords(text: &str, limit: usize) -> Vec<String> {
    let mut candidates: Vec<(String, usize, usize)> = Vec::new();
    for (position, token) in text.split_whitespace().enumerate() {
        let word: String = token
            .chars()
            .filter(|c| c.is_alphabetic())
            .flat_map(|c| c.to_lowercase())
            .collect();
        if word.len() < 4 || STOPWORDS.contains(&word.as_str()) {
            continue;
        }
        match candidates.iter_mut().find(|(w, _, _)| *w == word) {
            Some((_, count, _)) => *count += 1,
            None => candidates.push((word, 1, position)),
        }
    }
    candidates.sort_by(|a, b| b.1.cmp(&a.1).then(a.2.cmp(&b.2)));
    candidates.into_iter().take(limit).map(|(w, _, _)| w).collect()
}
