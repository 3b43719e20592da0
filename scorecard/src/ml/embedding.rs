//! Embedding model interface and the similarity adapter the scoring engine uses

use serde::{Deserialize, Serialize};
use std::fmt::Debug;

use super::error::Result;
use super::model_manager::EmbeddingManager;

/// Type for embedding vectors
pub type EmbeddingVector = Vec<f32>;

/// A batch of embedding vectors
pub type EmbeddingBatch = Vec<EmbeddingVector>;

/// Something that can tell how close two texts are in meaning.
///
/// This is the only thing the scoring engine knows about semantics. The
/// returned value is cosine-like: `1.0` for identical meaning, `0.0` for
/// unrelated text and negative for opposed text.
#[cfg_attr(test, mockall::automock)]
pub trait SimilarityProvider: Send + Sync {
    /// Similarity of a text to a reference, expected in `[-1, 1]`.
    ///
    /// References recur across calls; the text usually does not.
    fn similarity(&self, text: &str, reference: &str) -> Result<f32>;

    /// Human-readable provider name reported in score metadata
    fn name(&self) -> String {
        "custom".to_string()
    }

    /// Precompute whatever makes later calls with these texts cheaper
    fn warm(&self, _texts: &[String]) -> Result<()> {
        Ok(())
    }
}

/// Model metadata with information about the embedding model
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelMetadata {
    /// Model name
    pub name: String,
    /// Provider family (`hashing`, `remote`, ...)
    pub provider: String,
    /// Embedding vector dimensions, when known up front
    pub dimensions: Option<usize>,
    /// Model description
    pub description: Option<String>,
}

/// Interface for embedding models that generate vector representations of text
pub trait EmbeddingModel: Send + Sync {
    /// Get model metadata
    fn metadata(&self) -> &ModelMetadata;

    /// Get the embedding dimension, when known up front
    fn dimension(&self) -> Option<usize> {
        self.metadata().dimensions
    }

    /// Generate an embedding for a single text
    fn embed_text(&self, text: &str) -> Result<EmbeddingVector>;

    /// Generate embeddings for a batch of texts
    fn embed_texts(&self, texts: &[String]) -> Result<EmbeddingBatch> {
        texts.iter().map(|text| self.embed_text(text)).collect()
    }

    /// Embed a one-off text, bypassing any cache
    fn embed_uncached(&self, text: &str) -> Result<EmbeddingVector> {
        self.embed_text(text)
    }

    /// Precompute embeddings for texts that will be requested again.
    ///
    /// A no-op for models without a cache.
    fn warm(&self, _texts: &[String]) -> Result<()> {
        Ok(())
    }
}

impl<M: EmbeddingModel + ?Sized> EmbeddingModel for Box<M> {
    fn metadata(&self) -> &ModelMetadata {
        (**self).metadata()
    }

    fn embed_text(&self, text: &str) -> Result<EmbeddingVector> {
        (**self).embed_text(text)
    }

    fn embed_texts(&self, texts: &[String]) -> Result<EmbeddingBatch> {
        (**self).embed_texts(texts)
    }

    fn embed_uncached(&self, text: &str) -> Result<EmbeddingVector> {
        (**self).embed_uncached(text)
    }

    fn warm(&self, texts: &[String]) -> Result<()> {
        (**self).warm(texts)
    }
}

/// Cosine similarity of two vectors of equal length.
///
/// Returns `0.0` when either vector has zero norm.
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
    let dot_product: f32 = a.iter().zip(b.iter()).map(|(&x, &y)| x * y).sum();
    let a_norm: f32 = a.iter().map(|&x| x * x).sum::<f32>().sqrt();
    let b_norm: f32 = b.iter().map(|&x| x * x).sum::<f32>().sqrt();

    if a_norm == 0.0 || b_norm == 0.0 {
        return 0.0;
    }

    (dot_product / (a_norm * b_norm)).clamp(-1.0, 1.0)
}

/// Adapts any [`EmbeddingModel`] into a [`SimilarityProvider`].
///
/// The text is embedded uncached and the reference through the model's cache,
/// if it has one. Both vectors are validated and compared with cosine
/// similarity.
#[derive(Debug)]
pub struct EmbeddingSimilarity<M> {
    model: M,
    manager: EmbeddingManager,
}

impl<M: EmbeddingModel> EmbeddingSimilarity<M> {
    /// Wrap a model, validating against its advertised dimensions
    pub fn new(model: M) -> Self {
        let manager = match model.dimension() {
            Some(dimensions) => EmbeddingManager::with_expected_dimensions(dimensions),
            None => EmbeddingManager::new(),
        };
        Self { model, manager }
    }

    /// Wrap a model with a custom validator
    pub fn with_manager(model: M, manager: EmbeddingManager) -> Self {
        Self { model, manager }
    }

    /// The wrapped model
    pub fn model(&self) -> &M {
        &self.model
    }
}

impl<M: EmbeddingModel> SimilarityProvider for EmbeddingSimilarity<M> {
    fn similarity(&self, text: &str, reference: &str) -> Result<f32> {
        let a = self.model.embed_uncached(text)?;
        let b = self.model.embed_text(reference)?;

        self.manager.validate_pair(&a, &b)?;

        Ok(cosine_similarity(&a, &b))
    }

    fn name(&self) -> String {
        let metadata = self.model.metadata();
        format!("{}:{}", metadata.provider, metadata.name)
    }

    fn warm(&self, texts: &[String]) -> Result<()> {
        self.model.warm(texts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ml::MLError;

    /// Embeds every text as a fixed vector looked up by content
    struct TableModel {
        metadata: ModelMetadata,
    }

    impl TableModel {
        fn new() -> Self {
            Self {
                metadata: ModelMetadata {
                    name: "table".to_string(),
                    provider: "test".to_string(),
                    dimensions: Some(2),
                    description: None,
                },
            }
        }
    }

    impl EmbeddingModel for TableModel {
        fn metadata(&self) -> &ModelMetadata {
            &self.metadata
        }

        fn embed_text(&self, text: &str) -> Result<EmbeddingVector> {
            match text {
                "north" => Ok(vec![0.0, 1.0]),
                "east" => Ok(vec![1.0, 0.0]),
                "south" => Ok(vec![0.0, -1.0]),
                "broken" => Ok(vec![f32::NAN, 0.0]),
                "short" => Ok(vec![1.0]),
                _ => Err(MLError::embedding(format!("unknown text: {}", text))),
            }
        }
    }

    #[test]
    fn test_cosine_similarity() {
        assert!((cosine_similarity(&[1.0, 0.0], &[1.0, 0.0]) - 1.0).abs() < 1e-6);
        assert!(cosine_similarity(&[1.0, 0.0], &[0.0, 1.0]).abs() < 1e-6);
        assert!((cosine_similarity(&[1.0, 0.0], &[-1.0, 0.0]) + 1.0).abs() < 1e-6);
        assert_eq!(cosine_similarity(&[0.0, 0.0], &[1.0, 0.0]), 0.0);
    }

    #[test]
    fn test_embedding_similarity() {
        let provider = EmbeddingSimilarity::new(TableModel::new());

        assert!((provider.similarity("north", "north").unwrap() - 1.0).abs() < 1e-6);
        assert!(provider.similarity("north", "east").unwrap().abs() < 1e-6);
        assert!((provider.similarity("north", "south").unwrap() + 1.0).abs() < 1e-6);
        assert_eq!(provider.name(), "test:table");
    }

    #[test]
    fn test_embedding_similarity_rejects_bad_vectors() {
        let provider = EmbeddingSimilarity::new(TableModel::new());

        assert!(provider.similarity("north", "broken").is_err());
        assert!(provider.similarity("north", "short").is_err());
        assert!(provider.similarity("north", "unknown").is_err());
    }

    #[test]
    fn test_mock_provider() {
        let mut mock = MockSimilarityProvider::new();
        mock.expect_similarity().returning(|_, _| Ok(0.25));
        mock.expect_name().returning(|| "mock".to_string());

        assert_eq!(mock.similarity("a", "b").unwrap(), 0.25);
        assert_eq!(mock.name(), "mock");
    }
}
