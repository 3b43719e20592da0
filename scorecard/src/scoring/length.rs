//! Length signal: word count against optional bounds

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref WORD_RE: Regex = Regex::new(r"\w+").unwrap();
}

/// Number of maximal runs of Unicode word characters in `text`
pub fn count_words(text: &str) -> usize {
    WORD_RE.find_iter(text).count()
}

/// Score a word count against optional bounds, in `[0, 100]`.
///
/// - no bounds: 100
/// - zero words with any bound: 0
/// - within `[min, max]`: 100
/// - below `min`: `100 * words / min`
/// - above `max`: `100 * max / words`
pub fn length_score(words: usize, min_words: Option<usize>, max_words: Option<usize>) -> f64 {
    if min_words.is_none() && max_words.is_none() {
        return 100.0;
    }
    if words == 0 {
        return 0.0;
    }

    let score = match (min_words, max_words) {
        (Some(min), _) if words < min => 100.0 * words as f64 / min as f64,
        (_, Some(max)) if words > max => 100.0 * max as f64 / words as f64,
        _ => 100.0,
    };

    score.clamp(0.0, 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_words() {
        assert_eq!(count_words(""), 0);
        assert_eq!(count_words("   ...  "), 0);
        assert_eq!(count_words("Hello, my name is Sam. I am 10 years old."), 10);
        assert_eq!(count_words("that's all"), 3);
        assert_eq!(count_words("well-structured"), 2);
        assert_eq!(count_words("naïve café"), 2);
    }

    #[test]
    fn test_no_bounds() {
        assert_eq!(length_score(0, None, None), 100.0);
        assert_eq!(length_score(500, None, None), 100.0);
    }

    #[test]
    fn test_zero_words_with_bounds() {
        assert_eq!(length_score(0, Some(5), None), 0.0);
        assert_eq!(length_score(0, None, Some(50)), 0.0);
        assert_eq!(length_score(0, Some(0), Some(50)), 0.0);
    }

    #[test]
    fn test_bounds_are_inclusive() {
        assert_eq!(length_score(80, Some(80), Some(160)), 100.0);
        assert_eq!(length_score(160, Some(80), Some(160)), 100.0);
        assert_eq!(length_score(120, Some(80), Some(160)), 100.0);
        assert_eq!(length_score(5, Some(5), None), 100.0);
        assert_eq!(length_score(50, None, Some(50)), 100.0);
    }

    #[test]
    fn test_below_min() {
        assert_eq!(length_score(40, Some(80), Some(160)), 50.0);
        assert_eq!(length_score(20, Some(80), None), 25.0);
    }

    #[test]
    fn test_above_max() {
        assert_eq!(length_score(320, Some(80), Some(160)), 50.0);
        assert_eq!(length_score(200, None, Some(50)), 25.0);
        assert_eq!(length_score(10, None, Some(0)), 0.0);
    }
}
