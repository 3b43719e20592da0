//! Transcript scorer
//!
//! [`TranscriptScorer`] owns a rubric, the default signal weights and a
//! similarity provider. It is cheap to share between threads behind an `Arc`.

use std::fmt;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info, warn};

use crate::config::ScorecardConfig;
use crate::ml::{self, SimilarityProvider};
use crate::rubric::Rubric;
use crate::scoring::{self, OverallResult, SignalWeights, WeightOverrides};
use crate::Result;

/// Scores transcripts against a fixed rubric
#[derive(Clone)]
pub struct TranscriptScorer {
    rubric: Arc<Rubric>,
    weights: SignalWeights,
    provider: Arc<dyn SimilarityProvider>,
}

impl TranscriptScorer {
    /// Create a scorer, validating the rubric and the default weights
    pub fn new(
        rubric: Rubric,
        weights: SignalWeights,
        provider: Arc<dyn SimilarityProvider>,
    ) -> Result<Self> {
        rubric.validate()?;
        weights.validate()?;

        Ok(Self {
            rubric: Arc::new(rubric),
            weights,
            provider,
        })
    }

    /// Build the rubric and provider described by the configuration.
    ///
    /// Criterion descriptions are embedded up front when the provider caches;
    /// a failure there is logged and scoring proceeds without the warm cache.
    pub fn from_config(config: &ScorecardConfig) -> Result<Self> {
        let rubric = Rubric::load(config.rubric.path.as_deref())?;
        let provider = ml::build_provider(&config.embedding)?;

        let scorer = Self::new(rubric, config.scoring, provider)?;

        info!("Pre-computing rubric description embeddings...");
        let references = scorer.rubric.semantic_references();
        match scorer.provider.warm(&references) {
            Ok(()) => info!("Pre-computed embeddings for {} criteria", references.len()),
            Err(e) => warn!("Could not pre-compute rubric embeddings: {}", e),
        }

        info!(
            rubric = %scorer.rubric.source,
            criteria = scorer.rubric.len(),
            provider = %scorer.provider_name(),
            "Transcript scorer ready"
        );

        Ok(scorer)
    }

    /// Score a transcript, optionally overriding some signal weights
    pub fn score(
        &self,
        transcript: &str,
        overrides: Option<&WeightOverrides>,
    ) -> Result<OverallResult> {
        let weights = self.effective_weights(overrides);
        debug!(
            semantic_weight = weights.semantic_weight,
            keyword_weight = weights.keyword_weight,
            length_weight = weights.length_weight,
            chars = transcript.len(),
            "Scoring transcript"
        );

        let started = Instant::now();
        let result = scoring::score(transcript, &self.rubric, &weights, self.provider.as_ref());

        match &result {
            Ok(scored) => info!(
                overall_score = scoring::round2(scored.overall_score),
                total_words = scored.metadata.total_words,
                duration_ms = started.elapsed().as_millis() as u64,
                "Transcript scored"
            ),
            Err(e) => warn!(kind = e.kind(), "Scoring failed: {}", e),
        }

        result
    }

    /// Default weights merged with the given overrides
    pub fn effective_weights(&self, overrides: Option<&WeightOverrides>) -> SignalWeights {
        overrides.map_or(self.weights, |overrides| overrides.apply(&self.weights))
    }

    /// The rubric transcripts are scored against
    pub fn rubric(&self) -> &Rubric {
        &self.rubric
    }

    /// Default signal weights
    pub fn weights(&self) -> SignalWeights {
        self.weights
    }

    /// Name of the similarity provider
    pub fn provider_name(&self) -> String {
        self.provider.name()
    }
}

impl fmt::Debug for TranscriptScorer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TranscriptScorer")
            .field("rubric", &self.rubric.source)
            .field("criteria", &self.rubric.len())
            .field("weights", &self.weights)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ScorecardError;
    use crate::config::ConfigBuilder;
    use crate::ml::{EmbeddingSimilarity, HashingEmbedder, MockSimilarityProvider};

    fn hashing_scorer() -> TranscriptScorer {
        TranscriptScorer::new(
            Rubric::builtin(),
            SignalWeights::default(),
            Arc::new(EmbeddingSimilarity::new(HashingEmbedder::default())),
        )
        .unwrap()
    }

    #[test]
    fn test_new_validates_weights() {
        let result = TranscriptScorer::new(
            Rubric::builtin(),
            SignalWeights::new(0.5, 0.3, 0.3),
            Arc::new(MockSimilarityProvider::new()),
        );
        assert!(matches!(result, Err(ScorecardError::InvalidInput(_))));
    }

    #[test]
    fn test_new_validates_rubric() {
        let rubric = Rubric {
            source: "empty".to_string(),
            criteria: Vec::new(),
        };
        let result = TranscriptScorer::new(
            rubric,
            SignalWeights::default(),
            Arc::new(MockSimilarityProvider::new()),
        );
        assert!(matches!(result, Err(ScorecardError::InvalidRubric(_))));
    }

    #[test]
    fn test_overrides_are_merged() {
        let scorer = hashing_scorer();
        let overrides = WeightOverrides {
            semantic_weight: Some(0.6),
            keyword_weight: Some(0.3),
            length_weight: None,
        };

        let result = scorer
            .score("Hello everyone, my name is Sam.", Some(&overrides))
            .unwrap();
        assert_eq!(result.metadata.semantic_weight, 0.6);
        assert_eq!(result.metadata.keyword_weight, 0.3);
        assert_eq!(result.metadata.length_weight, 0.1);

        // Defaults are untouched
        assert_eq!(scorer.weights(), SignalWeights::default());
    }

    #[test]
    fn test_invalid_override_rejected() {
        let scorer = hashing_scorer();
        let overrides = WeightOverrides {
            semantic_weight: Some(0.9),
            ..WeightOverrides::default()
        };

        let result = scorer.score("Hello everyone", Some(&overrides));
        assert!(matches!(result, Err(ScorecardError::InvalidInput(_))));
    }

    #[test]
    fn test_from_config() {
        let config = ConfigBuilder::testing().build().unwrap();
        let scorer = TranscriptScorer::from_config(&config).unwrap();

        assert_eq!(scorer.rubric().source, "builtin");
        assert_eq!(scorer.rubric().len(), 8);
        assert_eq!(scorer.provider_name(), "hashing:feature-hashing-384");

        let result = scorer
            .score("Good morning everyone, I am excited to introduce myself.", None)
            .unwrap();
        assert_eq!(result.per_criterion.len(), 8);
        assert_eq!(result.metadata.provider, "hashing:feature-hashing-384");
    }

    #[test]
    fn test_from_config_with_missing_rubric_file() {
        let config = ConfigBuilder::testing()
            .with_rubric_path("/no/such/rubric.yaml")
            .build()
            .unwrap();

        assert!(matches!(
            TranscriptScorer::from_config(&config),
            Err(ScorecardError::InvalidRubric(_))
        ));
    }

    #[test]
    fn test_scorer_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<TranscriptScorer>();
    }
}
