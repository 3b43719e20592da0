//! Semantic signal: similarity between the transcript and a criterion

use crate::ml::{MLError, SimilarityProvider};

/// Map a cosine-like similarity to a 0-100 score. Negative similarity counts
/// as no similarity.
pub fn similarity_to_score(similarity: f64) -> f64 {
    similarity.max(0.0).clamp(0.0, 1.0) * 100.0
}

/// Ask the provider how close the transcript is to `reference` and convert
/// the answer to a 0-100 score.
///
/// A non-finite similarity is reported as an embedding error.
pub fn semantic_score(
    provider: &dyn SimilarityProvider,
    transcript: &str,
    reference: &str,
) -> crate::ml::Result<f64> {
    let similarity = f64::from(provider.similarity(transcript, reference)?);

    if !similarity.is_finite() {
        return Err(MLError::embedding(format!(
            "provider returned non-finite similarity {}",
            similarity
        )));
    }

    Ok(similarity_to_score(similarity))
}
