//! Actionable feedback for a scored criterion

use crate::rubric::Criterion;

/// Keyword score below which missing keywords are suggested
pub const KEYWORD_FEEDBACK_THRESHOLD: f64 = 50.0;

/// Semantic score below which content is called off-topic
pub const SEMANTIC_FEEDBACK_THRESHOLD: f64 = 30.0;

/// Length score below which the word count is called out
pub const LENGTH_FEEDBACK_THRESHOLD: f64 = 70.0;

/// Message used when no signal needs attention
pub const POSITIVE_FEEDBACK: &str = "Good, meets rubric expectations.";

/// The three signal scores of a criterion, each in `[0, 100]`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SignalScores {
    /// Keyword presence score
    pub keyword: f64,
    /// Semantic similarity score
    pub semantic: f64,
    /// Word-count score
    pub length: f64,
}

/// Build the feedback sentence for one criterion.
///
/// Every triggered hint is included, in keyword, semantic, length order,
/// joined with `"; "` and terminated with a period.
pub fn generate_feedback(
    criterion: &Criterion,
    scores: SignalScores,
    keywords_found: &[String],
    words: usize,
) -> String {
    let mut parts = Vec::new();

    if !criterion.keywords.is_empty() && scores.keyword < KEYWORD_FEEDBACK_THRESHOLD {
        let missing: Vec<&str> = criterion
            .keywords
            .iter()
            .filter(|keyword| !keywords_found.contains(keyword))
            .map(String::as_str)
            .collect();
        parts.push(format!("Include more keywords like: {}", missing.join(", ")));
    }

    if scores.semantic < SEMANTIC_FEEDBACK_THRESHOLD {
        parts.push(format!(
            "Content seems off-topic; focus more on {}",
            criterion.name.to_lowercase()
        ));
    }

    if scores.length < LENGTH_FEEDBACK_THRESHOLD
        && let Some(bounds) = describe_bounds(criterion.min_words, criterion.max_words)
    {
        let verdict = match (criterion.min_words, criterion.max_words) {
            (_, Some(max)) if words > max => "Too long",
            (None, _) if words == 0 => "No countable words",
            _ => "Too short",
        };
        parts.push(format!(
            "{} (current: {} words; rubric suggests {})",
            verdict, words, bounds
        ));
    }

    if parts.is_empty() {
        return POSITIVE_FEEDBACK.to_string();
    }

    format!("{}.", parts.join("; "))
}

/// Render word-count bounds as `min-max`, `at least min` or `at most max`
pub fn describe_bounds(min_words: Option<usize>, max_words: Option<usize>) -> Option<String> {
    match (min_words, max_words) {
        (Some(min), Some(max)) => Some(format!("{}-{}", min, max)),
        (Some(min), None) => Some(format!("at least {}", min)),
        (None, Some(max)) => Some(format!("at most {}", max)),
        (None, None) => None,
    }
}
