//! Deterministic offline embeddings based on feature hashing
//!
//! Each lowercase word token is hashed with SHA-256 into one of a fixed number
//! of buckets, with a sign taken from the hash so that collisions tend to
//! cancel out. The bucket counts are L2-normalized. Texts sharing vocabulary
//! end up close together, texts with disjoint vocabularies are (up to hash
//! collisions) orthogonal.

use lazy_static::lazy_static;
use regex::Regex;
use sha2::{Digest, Sha256};

use super::embedding::{EmbeddingModel, EmbeddingVector, ModelMetadata};
use super::error::Result;
use super::model_manager::EmbeddingManager;

/// Default number of hash buckets, the size of the common MiniLM embeddings
pub const DEFAULT_HASHING_DIMENSIONS: usize = 384;

lazy_static! {
    static ref TOKEN_RE: Regex = Regex::new(r"\w+").unwrap();
}

/// Feature-hashing embedding model
#[derive(Debug, Clone)]
pub struct HashingEmbedder {
    metadata: ModelMetadata,
    manager: EmbeddingManager,
}

impl HashingEmbedder {
    /// Create an embedder producing vectors of the given size (at least 1)
    pub fn new(dimensions: usize) -> Self {
        let dimensions = dimensions.max(1);
        Self {
            metadata: ModelMetadata {
                name: format!("feature-hashing-{}", dimensions),
                provider: "hashing".to_string(),
                dimensions: Some(dimensions),
                description: Some(
                    "Deterministic SHA-256 feature hashing of lowercase word tokens".to_string(),
                ),
            },
            manager: EmbeddingManager::with_expected_dimensions(dimensions),
        }
    }

    fn dimensions(&self) -> usize {
        self.metadata
            .dimensions
            .unwrap_or(DEFAULT_HASHING_DIMENSIONS)
    }

    /// Bucket index and sign for a token
    fn bucket(&self, token: &str) -> (usize, f32) {
        let digest = Sha256::digest(token.as_bytes());
        let mut index_bytes = [0u8; 8];
        index_bytes.copy_from_slice(&digest[..8]);
        let index = (u64::from_le_bytes(index_bytes) % self.dimensions() as u64) as usize;
        let sign = if digest[8] & 1 == 0 { 1.0 } else { -1.0 };
        (index, sign)
    }
}

impl Default for HashingEmbedder {
    fn default() -> Self {
        Self::new(DEFAULT_HASHING_DIMENSIONS)
    }
}

impl EmbeddingModel for HashingEmbedder {
    fn metadata(&self) -> &ModelMetadata {
        &self.metadata
    }

    fn embed_text(&self, text: &str) -> Result<EmbeddingVector> {
        let mut embedding = vec![0.0f32; self.dimensions()];
        let lowered = text.to_lowercase();

        for token in TOKEN_RE.find_iter(&lowered) {
            let (index, sign) = self.bucket(token.as_str());
            embedding[index] += sign;
        }

        // Text without word tokens stays the zero vector
        if embedding.iter().any(|value| *value != 0.0) {
            self.manager.normalize_embedding(&mut embedding)?;
        }

        Ok(embedding)
    }
}
