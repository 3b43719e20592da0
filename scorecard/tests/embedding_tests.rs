use scorecard::ml::{
    CachedEmbedder, EmbeddingManagerBuilder, EmbeddingModel, EmbeddingSimilarity,
    HashingEmbedder, SimilarityProvider, build_provider,
};
use scorecard::config::EmbeddingConfig;

#[test]
fn test_embedding_manager_validation() {
    let manager = EmbeddingManagerBuilder::new().expected_dimensions(384).build();

    assert!(manager.validate_embedding(&vec![1.0; 384]).is_ok());
    assert!(manager.validate_embedding(&vec![1.0; 256]).is_err());
    assert!(manager.validate_embedding(&[]).is_err());
}

#[test]
fn test_embedding_normalization() {
    let manager = EmbeddingManagerBuilder::new().build();

    let mut embedding = vec![3.0, 4.0, 0.0];
    assert!(manager.normalize_embedding(&mut embedding).is_ok());

    assert!((embedding[0] - 0.6).abs() < 1e-6);
    assert!((embedding[1] - 0.8).abs() < 1e-6);
    assert!((embedding[2] - 0.0).abs() < 1e-6);
}

#[test]
fn test_hashing_similarity_tracks_shared_vocabulary() {
    let provider = EmbeddingSimilarity::new(HashingEmbedder::default());
    let description = "Quality and appropriateness of greeting (Hello everyone, Good morning, etc.)";

    let on_topic = provider
        .similarity("Hello everyone, good morning to all of you", description)
        .unwrap();
    let off_topic = provider
        .similarity("Volcanoes erupt when magma rises", description)
        .unwrap();

    assert!(on_topic > off_topic);
}

#[test]
fn test_cached_embedder_matches_inner_model() {
    let cached = CachedEmbedder::new(HashingEmbedder::new(64), 16);
    let plain = HashingEmbedder::new(64);

    let text = "My name is Sam";
    assert_eq!(cached.embed_text(text).unwrap(), plain.embed_text(text).unwrap());
    assert_eq!(cached.embed_text(text).unwrap(), plain.embed_text(text).unwrap());
    assert_eq!(cached.stats().hits, 1);
}

#[test]
fn test_cache_survives_restart() {
    let dir = tempfile::tempdir().unwrap();
    let config = EmbeddingConfig {
        cache_dir: Some(dir.path().to_path_buf()),
        ..EmbeddingConfig::default()
    };

    {
        let provider = build_provider(&config).unwrap();
        provider
            .warm(&["Greeting description".to_string()])
            .unwrap();
    }

    let content = std::fs::read_to_string(dir.path().join("embeddings.json")).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&content).unwrap();
    assert_eq!(parsed["model"], "feature-hashing-384");
    assert_eq!(parsed["entries"].as_array().unwrap().len(), 1);
}
