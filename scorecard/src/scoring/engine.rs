//! The scoring engine
//!
//! A pure function of transcript, rubric, signal weights and similarity
//! provider. All input is validated before any signal is computed, and a
//! failing provider aborts the whole call.

use chrono::Utc;

use super::feedback::{SignalScores, generate_feedback};
use super::keyword::match_keywords;
use super::length::{count_words, length_score};
use super::results::{CriterionResult, OverallResult, ScoreMetadata};
use super::semantic::semantic_score;
use super::weights::SignalWeights;
use crate::ml::SimilarityProvider;
use crate::rubric::{Criterion, Rubric};
use crate::{Result, ScorecardError};

/// Score a transcript against every criterion of a rubric.
///
/// # Errors
///
/// - [`ScorecardError::InvalidInput`] for a blank transcript or invalid weights
/// - [`ScorecardError::InvalidRubric`] when the rubric cannot be scored against
/// - [`ScorecardError::Provider`] when the similarity provider fails
///
/// # Example
///
/// ```rust
/// use scorecard::ml::{EmbeddingSimilarity, HashingEmbedder};
/// use scorecard::rubric::{CriterionBuilder, Rubric};
/// use scorecard::scoring::{SignalWeights, score};
///
/// let rubric = Rubric::new(
///     "inline",
///     vec![CriterionBuilder::new("Greeting").keywords("hello").build()],
/// )
/// .unwrap();
/// let provider = EmbeddingSimilarity::new(HashingEmbedder::default());
///
/// let result = score("Hello!", &rubric, &SignalWeights::new(0.0, 1.0, 0.0), &provider).unwrap();
/// assert_eq!(result.overall_score, 100.0);
/// ```
pub fn score(
    transcript: &str,
    rubric: &Rubric,
    weights: &SignalWeights,
    provider: &dyn SimilarityProvider,
) -> Result<OverallResult> {
    if transcript.trim().is_empty() {
        return Err(ScorecardError::InvalidInput(
            "transcript cannot be empty".to_string(),
        ));
    }
    weights.validate()?;
    rubric.validate()?;

    let total_words = count_words(transcript);

    let mut per_criterion = Vec::with_capacity(rubric.len());
    let mut sum_weighted = 0.0;
    let mut sum_weights = 0.0;

    for criterion in &rubric.criteria {
        let result = score_criterion(transcript, total_words, criterion, weights, provider)?;
        sum_weighted += result.criterion_weighted;
        sum_weights += criterion.weight;
        per_criterion.push(result);
    }

    let mean = sum_weighted / sum_weights;
    if !mean.is_finite() {
        return Err(ScorecardError::InvalidRubric(format!(
            "weighted mean over {} criteria is not finite",
            rubric.len()
        )));
    }
    let overall_score = mean.clamp(0.0, 100.0);

    Ok(OverallResult {
        overall_score,
        per_criterion,
        metadata: ScoreMetadata {
            semantic_weight: weights.semantic_weight,
            keyword_weight: weights.keyword_weight,
            length_weight: weights.length_weight,
            total_words,
            rubric_source: rubric.source.clone(),
            provider: provider.name(),
            scored_at: Utc::now(),
        },
    })
}

fn score_criterion(
    transcript: &str,
    total_words: usize,
    criterion: &Criterion,
    weights: &SignalWeights,
    provider: &dyn SimilarityProvider,
) -> Result<CriterionResult> {
    let keywords = match_keywords(transcript, &criterion.keywords);

    let semantic = semantic_score(provider, transcript, criterion.semantic_reference())
        .map_err(|e| {
            ScorecardError::Provider(format!("criterion '{}': {}", criterion.name, e))
        })?;

    let length = length_score(total_words, criterion.min_words, criterion.max_words);

    let criterion_raw = weights.semantic_weight * semantic
        + weights.keyword_weight * keywords.score
        + weights.length_weight * length;

    let scores = SignalScores {
        keyword: keywords.score,
        semantic,
        length,
    };
    let feedback = generate_feedback(criterion, scores, &keywords.found, total_words);

    Ok(CriterionResult {
        criterion: criterion.name.clone(),
        weight: criterion.weight,
        words: total_words,
        keywords_expected: criterion.keywords.clone(),
        keywords_found: keywords.found,
        kw_score: keywords.score,
        sem_score: semantic,
        len_score: length,
        criterion_raw,
        criterion_weighted: criterion_raw * criterion.weight,
        feedback,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ml::{EmbeddingSimilarity, HashingEmbedder, MLError, MockSimilarityProvider};
    use crate::rubric::CriterionBuilder;
    use mockall::predicate::{always, eq};

    fn mock_provider(similarity: f32) -> MockSimilarityProvider {
        let mut provider = MockSimilarityProvider::new();
        provider
            .expect_similarity()
            .returning(move |_, _| Ok(similarity));
        provider
            .expect_name()
            .returning(|| "mock".to_string());
        provider
    }

    fn scenario_rubric() -> Rubric {
        Rubric::new(
            "scenario",
            vec![
                CriterionBuilder::new("Introduction")
                    .description("Greets and gives a name")
                    .keyword_list(["hello", "name"])
                    .word_range(5, 50)
                    .weight(10.0)
                    .build(),
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_scenario_keyword_and_length_only() {
        let provider = mock_provider(0.42);
        let result = score(
            "Hello, my name is Sam. I am 10 years old.",
            &scenario_rubric(),
            &SignalWeights::new(0.0, 0.5, 0.5),
            &provider,
        )
        .unwrap();

        let criterion = &result.per_criterion[0];
        assert_eq!(criterion.kw_score, 100.0);
        assert_eq!(criterion.len_score, 100.0);
        assert_eq!(criterion.criterion_raw, 100.0);
        assert_eq!(criterion.criterion_weighted, 1000.0);
        assert_eq!(criterion.words, 10);
        assert_eq!(criterion.keywords_found, vec!["hello", "name"]);
        assert_eq!(result.overall_score, 100.0);
        assert_eq!(result.metadata.total_words, 10);
        assert_eq!(result.metadata.rubric_source, "scenario");
        assert_eq!(result.metadata.provider, "mock");
    }

    #[test]
    fn test_blank_transcript_rejected() {
        let provider = MockSimilarityProvider::new();
        for transcript in ["", "   \n\t"] {
            let result = score(
                transcript,
                &scenario_rubric(),
                &SignalWeights::default(),
                &provider,
            );
            assert!(matches!(result, Err(ScorecardError::InvalidInput(_))));
        }
    }

    #[test]
    fn test_invalid_weights_rejected_before_scoring() {
        let mut provider = MockSimilarityProvider::new();
        provider.expect_similarity().never();

        let result = score(
            "Hello there",
            &scenario_rubric(),
            &SignalWeights::new(0.5, 0.3, 0.3),
            &provider,
        );
        assert!(matches!(result, Err(ScorecardError::InvalidInput(_))));
    }

    #[test]
    fn test_invalid_rubric_rejected() {
        let provider = MockSimilarityProvider::new();
        let rubric = Rubric {
            source: "broken".to_string(),
            criteria: vec![CriterionBuilder::new("A").weight(0.0).build()],
        };

        let result = score("Hello there", &rubric, &SignalWeights::default(), &provider);
        assert!(matches!(result, Err(ScorecardError::InvalidRubric(_))));

        let empty = Rubric {
            source: "empty".to_string(),
            criteria: Vec::new(),
        };
        let result = score("Hello there", &empty, &SignalWeights::default(), &provider);
        assert!(matches!(result, Err(ScorecardError::InvalidRubric(_))));
    }

    #[test]
    fn test_provider_failure_aborts() {
        let mut provider = MockSimilarityProvider::new();
        provider
            .expect_similarity()
            .times(1)
            .returning(|_, _| Err(MLError::service("connection refused")));

        let result = score(
            "Hello there",
            &Rubric::builtin(),
            &SignalWeights::default(),
            &provider,
        );

        match result {
            Err(ScorecardError::Provider(message)) => {
                assert!(message.contains("Salutation Level"));
                assert!(message.contains("connection refused"));
            }
            other => panic!("expected provider error, got {:?}", other),
        }
    }

    #[test]
    fn test_non_finite_similarity_is_provider_error() {
        let provider = mock_provider(f32::INFINITY);
        let result = score(
            "Hello there",
            &scenario_rubric(),
            &SignalWeights::default(),
            &provider,
        );
        assert!(matches!(result, Err(ScorecardError::Provider(_))));
    }

    #[test]
    fn test_semantic_only_weights_give_semantic_score() {
        let provider = mock_provider(0.37);
        let result = score(
            "Some transcript about my school and hobbies",
            &Rubric::builtin(),
            &SignalWeights::new(1.0, 0.0, 0.0),
            &provider,
        )
        .unwrap();

        for criterion in &result.per_criterion {
            assert_eq!(criterion.criterion_raw, criterion.sem_score);
        }
    }

    #[test]
    fn test_negative_similarity_counts_as_zero() {
        let provider = mock_provider(-0.9);
        let result = score(
            "Hello, my name is Sam.",
            &scenario_rubric(),
            &SignalWeights::default(),
            &provider,
        )
        .unwrap();

        assert_eq!(result.per_criterion[0].sem_score, 0.0);
        assert!(
            result.per_criterion[0]
                .feedback
                .contains("Content seems off-topic; focus more on introduction")
        );
    }

    #[test]
    fn test_all_signals_perfect_give_perfect_overall() {
        let provider = mock_provider(1.0);
        let result = score(
            "Hello, my name is Sam. I am 10 years old.",
            &scenario_rubric(),
            &SignalWeights::default(),
            &provider,
        )
        .unwrap();

        assert_eq!(result.per_criterion[0].criterion_raw, 100.0);
        assert_eq!(result.overall_score, 100.0);
        assert_eq!(
            result.per_criterion[0].feedback,
            "Good, meets rubric expectations."
        );
    }

    #[test]
    fn test_overall_is_weighted_mean() {
        let rubric = Rubric::new(
            "mean",
            vec![
                CriterionBuilder::new("Greeting").keywords("hello").weight(3.0).build(),
                CriterionBuilder::new("Closing").keywords("goodbye").weight(1.0).build(),
            ],
        )
        .unwrap();
        let provider = mock_provider(0.0);

        let result = score("hello everyone", &rubric, &SignalWeights::new(0.0, 1.0, 0.0), &provider)
            .unwrap();

        assert_eq!(result.per_criterion[0].criterion_weighted, 300.0);
        assert_eq!(result.per_criterion[1].criterion_weighted, 0.0);
        assert_eq!(result.overall_score, 75.0);
    }

    #[test]
    fn test_zero_weight_criterion_is_reported_but_ignored() {
        let rubric = Rubric::new(
            "mixed",
            vec![
                CriterionBuilder::new("Counted").keywords("hello").weight(1.0).build(),
                CriterionBuilder::new("Ignored").keywords("absent").weight(0.0).build(),
            ],
        )
        .unwrap();
        let provider = mock_provider(0.0);

        let result = score("hello", &rubric, &SignalWeights::new(0.0, 1.0, 0.0), &provider).unwrap();

        assert_eq!(result.per_criterion.len(), 2);
        assert_eq!(result.overall_score, 100.0);
    }

    #[test]
    fn test_description_falls_back_to_name() {
        let mut provider = MockSimilarityProvider::new();
        provider
            .expect_similarity()
            .with(always(), eq("Clarity"))
            .times(1)
            .returning(|_, _| Ok(0.5));
        provider.expect_name().returning(|| "mock".to_string());

        let rubric = Rubric::new("fallback", vec![CriterionBuilder::new("Clarity").build()]).unwrap();
        let result = score("Some words", &rubric, &SignalWeights::default(), &provider).unwrap();

        assert_eq!(result.per_criterion[0].sem_score, 50.0);
    }

    #[test]
    fn test_scoring_is_deterministic() {
        let provider = EmbeddingSimilarity::new(HashingEmbedder::default());
        let transcript = "Good morning everyone. My name is Priya and I study in class 8. \
                          I love painting and my dream is to explore the world. Thank you.";

        let first = score(transcript, &Rubric::builtin(), &SignalWeights::default(), &provider)
            .unwrap();
        let second = score(transcript, &Rubric::builtin(), &SignalWeights::default(), &provider)
            .unwrap();

        assert_eq!(first.overall_score.to_bits(), second.overall_score.to_bits());
        assert_eq!(first.per_criterion, second.per_criterion);
        assert!((0.0..=100.0).contains(&first.overall_score));
    }

    #[test]
    fn test_overall_always_in_range() {
        let provider = mock_provider(1.0);
        for transcript in ["a", "hello", "x y z", "Hello, my name is Sam. I love my school."] {
            let result = score(
                transcript,
                &Rubric::builtin(),
                &SignalWeights::default(),
                &provider,
            )
            .unwrap();
            assert!((0.0..=100.0).contains(&result.overall_score));
            for criterion in &result.per_criterion {
                assert!((0.0..=100.0).contains(&criterion.criterion_raw));
            }
        }
    }

    #[test]
    fn test_overflowing_weights_rejected() {
        let provider = mock_provider(1.0);
        let rubric = Rubric {
            source: "huge".to_string(),
            criteria: vec![
                CriterionBuilder::new("A").weight(1e308).build(),
                CriterionBuilder::new("B").weight(1e308).build(),
            ],
        };

        let result = score("Hello there", &rubric, &SignalWeights::default(), &provider);
        assert!(matches!(result, Err(ScorecardError::InvalidRubric(_))));
    }

    #[test]
    fn test_large_finite_weights_stay_in_range() {
        let provider = mock_provider(1.0);
        let rubric = Rubric::new(
            "large",
            vec![
                CriterionBuilder::new("A").keywords("hello").weight(1e300).build(),
                CriterionBuilder::new("B").keywords("absent").weight(1e300).build(),
            ],
        )
        .unwrap();

        let result = score("hello", &rubric, &SignalWeights::default(), &provider).unwrap();
        assert!(result.overall_score.is_finite());
        assert!((0.0..=100.0).contains(&result.overall_score));
    }
}
