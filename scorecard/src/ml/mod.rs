//! Embedding models and the similarity provider the scoring engine relies on
//!
//! Bring your own embeddings: anything implementing [`EmbeddingModel`] can
//! back the semantic signal through [`EmbeddingSimilarity`]. Two models ship
//! with the crate:
//! - [`HashingEmbedder`]: deterministic, offline, no downloads
//! - [`RemoteEmbedder`]: any OpenAI-compatible `/embeddings` endpoint
//!   (OpenAI, Ollama, text-embeddings-inference, ...)
//!
//! Either can be wrapped in a [`CachedEmbedder`] so rubric descriptions are
//! embedded only once.
//!
//! ## Example Usage
//!
//! ```rust
//! use scorecard::ml::{EmbeddingSimilarity, HashingEmbedder, SimilarityProvider};
//!
//! let provider = EmbeddingSimilarity::new(HashingEmbedder::default());
//! let similarity = provider.similarity("good morning", "good morning").unwrap();
//! assert!((similarity - 1.0).abs() < 1e-5);
//! ```

pub mod cache;
pub mod embedding;
pub mod error;
pub mod hashing;
pub mod model_manager;
pub mod remote;

use std::sync::Arc;
use tracing::{debug, info};

use crate::config::{EmbeddingConfig, EmbeddingProviderType};

pub use cache::{CacheStats, CachedEmbedder};
pub use embedding::{
    EmbeddingBatch, EmbeddingModel, EmbeddingSimilarity, EmbeddingVector, ModelMetadata,
    SimilarityProvider, cosine_similarity,
};
#[cfg(test)]
pub use embedding::MockSimilarityProvider;
pub use error::{MLError, Result};
pub use hashing::{DEFAULT_HASHING_DIMENSIONS, HashingEmbedder};
pub use model_manager::{EmbeddingManager, EmbeddingManagerBuilder};
pub use remote::RemoteEmbedder;

/// Build the similarity provider described by the embedding configuration
pub fn build_provider(config: &EmbeddingConfig) -> Result<Arc<dyn SimilarityProvider>> {
    let model: Box<dyn EmbeddingModel> = match config.provider {
        EmbeddingProviderType::Hashing => Box::new(HashingEmbedder::new(
            config.dimensions.unwrap_or(DEFAULT_HASHING_DIMENSIONS),
        )),
        EmbeddingProviderType::Remote => Box::new(RemoteEmbedder::from_config(config)?),
    };

    info!(
        provider = %config.provider,
        model = %model.metadata().name,
        "Embedding model configured"
    );

    let manager = EmbeddingManagerBuilder::new()
        .maybe_expected_dimensions(model.dimension())
        .build();

    if !config.cache_enabled {
        return Ok(Arc::new(EmbeddingSimilarity::with_manager(model, manager)));
    }

    let mut cached = CachedEmbedder::new(model, config.cache_capacity);
    if let Some(dir) = &config.cache_dir {
        cached = cached.with_persistence(dir);
        debug!("Embedding cache persisted under {}", dir.display());
    }

    Ok(Arc::new(EmbeddingSimilarity::with_manager(cached, manager)))
}
