//! Validation and normalization of embedding vectors
//!
//! Every vector an embedding model hands to the similarity adapter passes
//! through an [`EmbeddingManager`] first, whatever produced it.
//!
//! # Examples
//!
//! ```rust
//! use scorecard::ml::EmbeddingManager;
//!
//! let manager = EmbeddingManager::with_expected_dimensions(3);
//!
//! let mut embedding = vec![3.0, 4.0, 0.0];
//! manager.validate_embedding(&embedding).unwrap();
//! manager.normalize_embedding(&mut embedding).unwrap();
//! assert!((embedding[0] - 0.6).abs() < 1e-6);
//! ```

use super::error::{MLError, Result};

/// Checks embeddings before they are compared
#[derive(Debug, Clone, Default)]
pub struct EmbeddingManager {
    /// Expected embedding dimensions (optional validation)
    expected_dimensions: Option<usize>,
}

impl EmbeddingManager {
    /// Create a new embedding manager
    pub fn new() -> Self {
        Self {
            expected_dimensions: None,
        }
    }

    /// Create an embedding manager with expected dimensions for validation
    pub fn with_expected_dimensions(expected_dimensions: usize) -> Self {
        Self {
            expected_dimensions: Some(expected_dimensions),
        }
    }

    /// Validate an embedding vector
    ///
    /// Checks for:
    /// - Non-empty vectors
    /// - Expected dimensions (if configured)
    /// - Finite values (no NaN/infinity)
    pub fn validate_embedding(&self, embedding: &[f32]) -> Result<()> {
        if embedding.is_empty() {
            return Err(MLError::embedding("Embedding cannot be empty"));
        }

        if let Some(expected_dim) = self.expected_dimensions
            && embedding.len() != expected_dim
        {
            return Err(MLError::embedding(format!(
                "Expected embedding dimension {}, got {}",
                expected_dim,
                embedding.len()
            )));
        }

        if let Some((i, value)) = embedding.iter().enumerate().find(|(_, v)| !v.is_finite()) {
            return Err(MLError::embedding(format!(
                "Invalid value at index {}: {}",
                i, value
            )));
        }

        Ok(())
    }

    /// Validate two embeddings that are about to be compared
    pub fn validate_pair(&self, a: &[f32], b: &[f32]) -> Result<()> {
        self.validate_embedding(a)?;
        self.validate_embedding(b)?;

        if a.len() != b.len() {
            return Err(MLError::embedding(format!(
                "Cannot compare embeddings of dimension {} and {}",
                a.len(),
                b.len()
            )));
        }

        Ok(())
    }

    /// Normalize an embedding vector to unit length
    pub fn normalize_embedding(&self, embedding: &mut [f32]) -> Result<()> {
        let norm: f32 = embedding.iter().map(|x| x * x).sum::<f32>().sqrt();

        if norm == 0.0 {
            return Err(MLError::embedding("Cannot normalize zero vector"));
        }

        for value in embedding.iter_mut() {
            *value /= norm;
        }

        Ok(())
    }

    /// Get expected dimensions (if set)
    pub fn expected_dimensions(&self) -> Option<usize> {
        self.expected_dimensions
    }
}

/// Builder for EmbeddingManager
#[derive(Debug, Clone, Default)]
pub struct EmbeddingManagerBuilder {
    expected_dimensions: Option<usize>,
}

impl EmbeddingManagerBuilder {
    /// Create a new builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set expected embedding dimensions for validation
    pub fn expected_dimensions(mut self, dimensions: usize) -> Self {
        self.expected_dimensions = Some(dimensions);
        self
    }

    /// Set expected dimensions only when known
    pub fn maybe_expected_dimensions(mut self, dimensions: Option<usize>) -> Self {
        self.expected_dimensions = dimensions;
        self
    }

    /// Build the embedding manager
    pub fn build(self) -> EmbeddingManager {
        EmbeddingManager {
            expected_dimensions: self.expected_dimensions,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_validation() {
        let manager = EmbeddingManager::new();

        assert!(manager.validate_embedding(&[1.0, 2.0, 3.0]).is_ok());
        assert!(manager.validate_embedding(&[]).is_err());
        assert!(manager.validate_embedding(&[1.0, f32::NAN, 3.0]).is_err());
        assert!(
            manager
                .validate_embedding(&[f32::INFINITY, 0.0])
                .is_err()
        );
    }

    #[test]
    fn test_dimension_validation() {
        let manager = EmbeddingManager::with_expected_dimensions(3);

        assert!(manager.validate_embedding(&[1.0, 2.0, 3.0]).is_ok());
        assert!(manager.validate_embedding(&[1.0, 2.0]).is_err());
    }

    #[test]
    fn test_pair_validation() {
        let manager = EmbeddingManager::new();

        assert!(manager.validate_pair(&[1.0, 0.0], &[0.0, 1.0]).is_ok());
        assert!(manager.validate_pair(&[1.0, 0.0], &[0.0, 1.0, 0.0]).is_err());
    }

    #[test]
    fn test_builder() {
        let manager = EmbeddingManagerBuilder::new().expected_dimensions(384).build();
        assert_eq!(manager.expected_dimensions(), Some(384));

        let manager = EmbeddingManagerBuilder::new()
            .maybe_expected_dimensions(None)
            .build();
        assert_eq!(manager.expected_dimensions(), None);
    }

    #[test]
    fn test_normalization() {
        let manager = EmbeddingManager::new();
        let mut embedding = vec![3.0, 4.0];

        manager.normalize_embedding(&mut embedding).unwrap();

        let norm: f32 = embedding.iter().map(|x| x * x).sum::<f32>().sqrt();
        assert!((norm - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_zero_vector_normalization() {
        let manager = EmbeddingManager::new();
        let mut embedding = vec![0.0, 0.0, 0.0];

        assert!(manager.normalize_embedding(&mut embedding).is_err());
    }
}
