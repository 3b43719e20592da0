//! Keyword signal: whole-word, case-insensitive keyword presence

use regex::RegexBuilder;
use serde::{Deserialize, Serialize};

/// Outcome of matching a keyword list against a transcript
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeywordMatch {
    /// Keywords found in the transcript, in keyword-list order
    pub found: Vec<String>,

    /// `100 * found / expected`, or 100 when nothing is expected
    pub score: f64,
}

/// Whether `keyword` occurs in `text` as a whole word or phrase.
///
/// The keyword is matched literally and case-insensitively, bounded by
/// non-word characters or the ends of the text.
pub fn contains_keyword(text: &str, keyword: &str) -> bool {
    let keyword = keyword.trim();
    if keyword.is_empty() {
        return false;
    }

    RegexBuilder::new(&format!(r"\b{}\b", regex::escape(keyword)))
        .case_insensitive(true)
        .build()
        .map(|pattern| pattern.is_match(text))
        .unwrap_or(false)
}

/// Match every keyword against the transcript.
///
/// ```rust
/// use scorecard::scoring::match_keywords;
///
/// let keywords = vec!["hello".to_string(), "school".to_string()];
/// let result = match_keywords("Hello everyone!", &keywords);
///
/// assert_eq!(result.found, vec!["hello"]);
/// assert_eq!(result.score, 50.0);
/// ```
pub fn match_keywords(transcript: &str, keywords: &[String]) -> KeywordMatch {
    if keywords.is_empty() {
        return KeywordMatch {
            found: Vec::new(),
            score: 100.0,
        };
    }

    let found: Vec<String> = keywords
        .iter()
        .filter(|keyword| contains_keyword(transcript, keyword))
        .cloned()
        .collect();

    let score = 100.0 * found.len() as f64 / keywords.len() as f64;
    KeywordMatch { found, score }
}
