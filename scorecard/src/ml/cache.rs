//! LRU cache in front of an embedding model
//!
//! Keys are the SHA-256 of the model name and the text, so one cache file can
//! never serve vectors from a different model. Only texts embedded through
//! `embed_text`/`embed_texts` are cached; `embed_uncached` goes straight to
//! the model. The cache can be persisted as
//! JSON and reloaded at start-up; failing to read or write it only costs
//! recomputation.

use lru::LruCache;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use tracing::{debug, warn};

use super::embedding::{EmbeddingBatch, EmbeddingModel, EmbeddingVector, ModelMetadata};
use super::error::{MLError, Result};

/// File name of the persisted cache inside the cache directory
pub const CACHE_FILE_NAME: &str = "embeddings.json";

#[derive(Debug, Serialize, Deserialize)]
struct CacheFile {
    model: String,
    entries: Vec<CacheEntry>,
}

#[derive(Debug, Serialize, Deserialize)]
struct CacheEntry {
    key: String,
    embedding: EmbeddingVector,
}

/// Hit and miss counters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CacheStats {
    /// Lookups answered from the cache
    pub hits: u64,
    /// Lookups that reached the model
    pub misses: u64,
    /// Entries currently held
    pub entries: usize,
}

/// Embedding model wrapper with an LRU cache
pub struct CachedEmbedder<M: EmbeddingModel> {
    inner: M,
    cache: Mutex<LruCache<String, EmbeddingVector>>,
    path: Option<PathBuf>,
    dirty: AtomicBool,
    hits: AtomicU64,
    misses: AtomicU64,
}

impl<M: EmbeddingModel> CachedEmbedder<M> {
    /// Cache up to `capacity` embeddings in memory
    pub fn new(inner: M, capacity: usize) -> Self {
        let capacity = NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN);
        Self {
            inner,
            cache: Mutex::new(LruCache::new(capacity)),
            path: None,
            dirty: AtomicBool::new(false),
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
        }
    }

    /// Persist the cache under `dir`, loading whatever is already there
    pub fn with_persistence(mut self, dir: impl AsRef<Path>) -> Self {
        let path = dir.as_ref().join(CACHE_FILE_NAME);
        if path.exists() {
            match self.load(&path) {
                Ok(count) => debug!("Loaded {} cached embeddings from {}", count, path.display()),
                Err(e) => warn!(
                    "Ignoring unreadable embedding cache {}: {}",
                    path.display(),
                    e
                ),
            }
        }
        self.path = Some(path);
        self
    }

    /// The wrapped model
    pub fn inner(&self) -> &M {
        &self.inner
    }

    /// Where the cache is persisted, if anywhere
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Current hit/miss counters
    pub fn stats(&self) -> CacheStats {
        CacheStats {
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
            entries: self.lock().len(),
        }
    }

    /// Write the cache to disk when persistence is enabled and something changed
    pub fn save(&self) -> Result<()> {
        let Some(path) = &self.path else {
            return Ok(());
        };
        if !self.dirty.swap(false, Ordering::AcqRel) {
            return Ok(());
        }

        // Least recently used first, so a reload restores the same order
        let entries: Vec<CacheEntry> = {
            let cache = self.lock();
            cache
                .iter()
                .rev()
                .map(|(key, embedding)| CacheEntry {
                    key: key.clone(),
                    embedding: embedding.clone(),
                })
                .collect()
        };

        let file = CacheFile {
            model: self.inner.metadata().name.clone(),
            entries,
        };

        let result = write_cache_file(path, &file);
        if result.is_err() {
            self.dirty.store(true, Ordering::Release);
        } else {
            debug!("Saved {} cached embeddings to {}", file.entries.len(), path.display());
        }
        result
    }

    fn load(&self, path: &Path) -> Result<usize> {
        let content = std::fs::read_to_string(path)?;
        let file: CacheFile = serde_json::from_str(&content)?;

        if file.model != self.inner.metadata().name {
            return Err(MLError::cache(format!(
                "cache was written for model '{}'",
                file.model
            )));
        }

        let mut cache = self.lock();
        let count = file.entries.len();
        for entry in file.entries {
            cache.put(entry.key, entry.embedding);
        }
        Ok(count)
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, LruCache<String, EmbeddingVector>> {
        self.cache.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn key(&self, text: &str) -> String {
        let mut hasher = Sha256::new();
        hasher.update(self.inner.metadata().name.as_bytes());
        hasher.update([0u8]);
        hasher.update(text.as_bytes());
        format!("{:x}", hasher.finalize())
    }

    fn lookup(&self, key: &str) -> Option<EmbeddingVector> {
        let found = self.lock().get(key).cloned();
        match found {
            Some(_) => self.hits.fetch_add(1, Ordering::Relaxed),
            None => self.misses.fetch_add(1, Ordering::Relaxed),
        };
        found
    }

    fn store(&self, key: String, embedding: EmbeddingVector) {
        self.lock().put(key, embedding);
        self.dirty.store(true, Ordering::Release);
    }
}

fn write_cache_file(path: &Path, file: &CacheFile) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)?;
    }

    let tmp = path.with_extension("json.tmp");
    std::fs::write(&tmp, serde_json::to_vec(file)?)?;
    std::fs::rename(&tmp, path)?;
    Ok(())
}

impl<M: EmbeddingModel> EmbeddingModel for CachedEmbedder<M> {
    fn metadata(&self) -> &ModelMetadata {
        self.inner.metadata()
    }

    fn embed_text(&self, text: &str) -> Result<EmbeddingVector> {
        let key = self.key(text);
        if let Some(embedding) = self.lookup(&key) {
            return Ok(embedding);
        }

        let embedding = self.inner.embed_text(text)?;
        self.store(key, embedding.clone());
        Ok(embedding)
    }

    fn embed_uncached(&self, text: &str) -> Result<EmbeddingVector> {
        self.inner.embed_uncached(text)
    }

    fn embed_texts(&self, texts: &[String]) -> Result<EmbeddingBatch> {
        let keys: Vec<String> = texts.iter().map(|text| self.key(text)).collect();
        let mut results: Vec<Option<EmbeddingVector>> =
            keys.iter().map(|key| self.lookup(key)).collect();

        let missing: Vec<usize> = results
            .iter()
            .enumerate()
            .filter(|(_, found)| found.is_none())
            .map(|(i, _)| i)
            .collect();

        if !missing.is_empty() {
            let to_embed: Vec<String> = missing.iter().map(|&i| texts[i].clone()).collect();
            let embedded = self.inner.embed_texts(&to_embed)?;
            if embedded.len() != missing.len() {
                return Err(MLError::embedding(format!(
                    "Expected {} embeddings, model returned {}",
                    missing.len(),
                    embedded.len()
                )));
            }

            for (i, embedding) in missing.into_iter().zip(embedded) {
                self.store(keys[i].clone(), embedding.clone());
                results[i] = Some(embedding);
            }
        }

        Ok(results.into_iter().flatten().collect())
    }

    fn warm(&self, texts: &[String]) -> Result<()> {
        self.embed_texts(texts)?;
        if let Err(e) = self.save() {
            warn!("Failed to persist embedding cache: {}", e);
        }
        Ok(())
    }
}

impl<M: EmbeddingModel> Drop for CachedEmbedder<M> {
    fn drop(&mut self) {
        if let Err(e) = self.save() {
            warn!("Failed to persist embedding cache: {}", e);
        }
    }
}

impl<M: EmbeddingModel + std::fmt::Debug> std::fmt::Debug for CachedEmbedder<M> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CachedEmbedder")
            .field("inner", &self.inner)
            .field("path", &self.path)
            .finish_non_exhaustive()
    }
}
