//! Client for OpenAI-compatible embedding services
//!
//! Sends `POST {service_url}/embeddings` with `{"model", "input"}` and reads
//! the vectors back from `data[].embedding`. Works with OpenAI, Azure-style
//! proxies, Ollama's OpenAI endpoint, text-embeddings-inference and the like.

use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;

use super::embedding::{EmbeddingBatch, EmbeddingModel, EmbeddingVector, ModelMetadata};
use super::error::{MLError, Result};
use crate::config::EmbeddingConfig;

/// Environment variable consulted when no API key is configured
pub const API_KEY_ENV: &str = "SCORECARD_EMBEDDING_API_KEY";

#[derive(Debug, Serialize)]
struct EmbeddingRequest<'a> {
    model: &'a str,
    input: &'a [String],
}

#[derive(Debug, Deserialize)]
struct EmbeddingResponse {
    data: Vec<EmbeddingData>,
}

#[derive(Debug, Deserialize)]
struct EmbeddingData {
    #[serde(default)]
    index: Option<usize>,
    embedding: Vec<f32>,
}

/// Blocking client for a remote embedding service
#[derive(Debug, Clone)]
pub struct RemoteEmbedder {
    client: reqwest::blocking::Client,
    endpoint: String,
    api_key: Option<String>,
    metadata: ModelMetadata,
}

impl RemoteEmbedder {
    /// Create a client for the service at `service_url`
    pub fn new(
        service_url: impl AsRef<str>,
        model_name: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self> {
        let base = service_url.as_ref().trim().trim_end_matches('/');
        if base.is_empty() {
            return Err(MLError::configuration(
                "Embedding service URL cannot be empty",
            ));
        }

        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("scorecard/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| MLError::configuration(format!("Failed to create HTTP client: {}", e)))?;

        let model_name = model_name.into();
        Ok(Self {
            client,
            endpoint: format!("{}/embeddings", base),
            api_key: None,
            metadata: ModelMetadata {
                name: model_name,
                provider: "remote".to_string(),
                dimensions: None,
                description: Some(format!("OpenAI-compatible embeddings at {}", base)),
            },
        })
    }

    /// Create a client from the embedding section of the configuration
    pub fn from_config(config: &EmbeddingConfig) -> Result<Self> {
        let url = config.service_url.as_deref().ok_or_else(|| {
            MLError::configuration("Service URL is required for the remote embedding provider")
        })?;

        let api_key = config
            .api_key
            .clone()
            .or_else(|| std::env::var(API_KEY_ENV).ok())
            .filter(|key| !key.trim().is_empty());

        let mut embedder = Self::new(
            url,
            config.model_name.clone(),
            Duration::from_secs(config.timeout_secs),
        )?;
        embedder.api_key = api_key;
        embedder.metadata.dimensions = config.dimensions;

        Ok(embedder)
    }

    /// Send the API key as a bearer token
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Full URL requests are sent to
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn request(&self, texts: &[String]) -> Result<EmbeddingBatch> {
        let body = EmbeddingRequest {
            model: &self.metadata.name,
            input: texts,
        };

        let mut request = self.client.post(&self.endpoint).json(&body);
        if let Some(api_key) = &self.api_key {
            request = request.bearer_auth(api_key);
        }

        let response = request
            .send()
            .map_err(|e| MLError::service(format!("HTTP request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(MLError::service(format!(
                "HTTP error: {} {}",
                status.as_u16(),
                status.canonical_reason().unwrap_or("Unknown")
            )));
        }

        let parsed: EmbeddingResponse = response
            .json()
            .map_err(|e| MLError::service(format!("Invalid embedding response: {}", e)))?;

        debug!(
            "Received {} embeddings from {}",
            parsed.data.len(),
            self.endpoint
        );

        order_embeddings(parsed, texts.len())
    }
}

/// Put the returned vectors back in input order and check nothing is missing
fn order_embeddings(response: EmbeddingResponse, expected: usize) -> Result<EmbeddingBatch> {
    if response.data.len() != expected {
        return Err(MLError::service(format!(
            "Expected {} embeddings, service returned {}",
            expected,
            response.data.len()
        )));
    }

    let mut slots: Vec<Option<EmbeddingVector>> = vec![None; expected];
    for (position, item) in response.data.into_iter().enumerate() {
        let index = item.index.unwrap_or(position);
        match slots.get_mut(index) {
            Some(slot) if slot.is_none() => *slot = Some(item.embedding),
            _ => {
                return Err(MLError::service(format!(
                    "Unexpected embedding index {} in response",
                    index
                )));
            }
        }
    }

    Ok(slots.into_iter().flatten().collect())
}

impl EmbeddingModel for RemoteEmbedder {
    fn metadata(&self) -> &ModelMetadata {
        &self.metadata
    }

    fn embed_text(&self, text: &str) -> Result<EmbeddingVector> {
        self.request(&[text.to_string()])?
            .pop()
            .ok_or_else(|| MLError::service("Service returned no embedding"))
    }

    fn embed_texts(&self, texts: &[String]) -> Result<EmbeddingBatch> {
        if texts.is_empty() {
            return Ok(Vec::new());
        }
        self.request(texts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{EmbeddingConfig, EmbeddingProviderType};

    fn response(json: serde_json::Value) -> EmbeddingResponse {
        serde_json::from_value(json).unwrap()
    }

    #[test]
    fn test_endpoint_normalization() {
        let embedder =
            RemoteEmbedder::new("http://localhost:8080/v1/", "m", Duration::from_secs(1)).unwrap();
        assert_eq!(embedder.endpoint(), "http://localhost:8080/v1/embeddings");
        assert_eq!(embedder.metadata().provider, "remote");
        assert_eq!(embedder.dimension(), None);
    }

    #[test]
    fn test_empty_url_rejected() {
        let result = RemoteEmbedder::new("   ", "m", Duration::from_secs(1));
        assert!(matches!(result, Err(MLError::Configuration(_))));

        let config = EmbeddingConfig {
            provider: EmbeddingProviderType::Remote,
            service_url: None,
            ..EmbeddingConfig::default()
        };
        assert!(RemoteEmbedder::from_config(&config).is_err());
    }

    #[test]
    fn test_from_config() {
        let config = EmbeddingConfig {
            provider: EmbeddingProviderType::Remote,
            service_url: Some("http://embeddings.internal".to_string()),
            api_key: Some("token".to_string()),
            dimensions: Some(768),
            ..EmbeddingConfig::default()
        };

        let embedder = RemoteEmbedder::from_config(&config).unwrap();
        assert_eq!(embedder.endpoint(), "http://embeddings.internal/embeddings");
        assert_eq!(embedder.metadata().name, "all-MiniLM-L6-v2");
        assert_eq!(embedder.dimension(), Some(768));
        assert_eq!(embedder.api_key.as_deref(), Some("token"));
    }

    #[test]
    fn test_order_embeddings_by_index() {
        let parsed = response(serde_json::json!({
            "data": [
                {"index": 1, "embedding": [0.0, 1.0]},
                {"index": 0, "embedding": [1.0, 0.0]}
            ]
        }));

        let batch = order_embeddings(parsed, 2).unwrap();
        assert_eq!(batch, vec![vec![1.0, 0.0], vec![0.0, 1.0]]);
    }

    #[test]
    fn test_order_embeddings_without_index() {
        let parsed = response(serde_json::json!({
            "data": [{"embedding": [0.5]}, {"embedding": [0.25]}]
        }));

        let batch = order_embeddings(parsed, 2).unwrap();
        assert_eq!(batch, vec![vec![0.5], vec![0.25]]);
    }

    #[test]
    fn test_order_embeddings_rejects_mismatch() {
        let parsed = response(serde_json::json!({"data": [{"embedding": [0.5]}]}));
        assert!(order_embeddings(parsed, 2).is_err());

        let parsed = response(serde_json::json!({
            "data": [
                {"index": 0, "embedding": [0.5]},
                {"index": 0, "embedding": [0.25]}
            ]
        }));
        assert!(order_embeddings(parsed, 2).is_err());
    }

    #[test]
    fn test_unreachable_service_is_service_error() {
        let embedder =
            RemoteEmbedder::new("http://127.0.0.1:9", "m", Duration::from_millis(500)).unwrap();
        let result = embedder.embed_text("hello");
        assert!(matches!(result, Err(MLError::Service(_))));
    }
}
