//! Data transfer objects for the HTTP API

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use scorecard::rubric::{Criterion, Rubric};
use scorecard::scoring::{
    CriterionResult, OverallResult, ScoreMetadata, WeightOverrides, round2,
};

/// Request to score a transcript
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ScoreRequest {
    /// Transcript text
    #[serde(default)]
    pub transcript: String,

    /// Optional per-request signal weights
    #[serde(default)]
    pub config: Option<ScoreConfigDto>,
}

/// Per-request signal weights; omitted weights keep the server defaults
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct ScoreConfigDto {
    pub semantic_weight: Option<f64>,
    pub keyword_weight: Option<f64>,
    pub length_weight: Option<f64>,
}

impl From<ScoreConfigDto> for WeightOverrides {
    fn from(dto: ScoreConfigDto) -> Self {
        Self {
            semantic_weight: dto.semantic_weight,
            keyword_weight: dto.keyword_weight,
            length_weight: dto.length_weight,
        }
    }
}

/// Score breakdown for one criterion
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CriterionResultDto {
    pub criterion: String,
    pub weight: f64,
    pub words: usize,
    pub keywords_expected: Vec<String>,
    pub keywords_found: Vec<String>,
    pub kw_score: f64,
    pub sem_score: f64,
    pub len_score: f64,
    pub criterion_raw: f64,
    pub criterion_weighted: f64,
    pub feedback: String,
}

impl From<CriterionResult> for CriterionResultDto {
    fn from(result: CriterionResult) -> Self {
        Self {
            criterion: result.criterion,
            weight: result.weight,
            words: result.words,
            keywords_expected: result.keywords_expected,
            keywords_found: result.keywords_found,
            kw_score: round2(result.kw_score),
            sem_score: round2(result.sem_score),
            len_score: round2(result.len_score),
            criterion_raw: round2(result.criterion_raw),
            criterion_weighted: round2(result.criterion_weighted),
            feedback: result.feedback,
        }
    }
}

/// Weights and sources a score was produced with
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ScoreMetadataDto {
    pub semantic_weight: f64,
    pub keyword_weight: f64,
    pub length_weight: f64,
    pub total_words: usize,
    pub rubric_source: String,
    pub provider: String,
    pub scored_at: DateTime<Utc>,
}

impl From<ScoreMetadata> for ScoreMetadataDto {
    fn from(metadata: ScoreMetadata) -> Self {
        Self {
            semantic_weight: metadata.semantic_weight,
            keyword_weight: metadata.keyword_weight,
            length_weight: metadata.length_weight,
            total_words: metadata.total_words,
            rubric_source: metadata.rubric_source,
            provider: metadata.provider,
            scored_at: metadata.scored_at,
        }
    }
}

/// Scoring result
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ScoreResponse {
    /// Weighted overall score, 0-100
    pub overall_score: f64,
    pub per_criterion: Vec<CriterionResultDto>,
    pub metadata: ScoreMetadataDto,
}

impl From<OverallResult> for ScoreResponse {
    fn from(result: OverallResult) -> Self {
        Self {
            overall_score: round2(result.overall_score),
            per_criterion: result.per_criterion.into_iter().map(Into::into).collect(),
            metadata: result.metadata.into(),
        }
    }
}

/// Rubric criterion
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CriterionDto {
    pub name: String,
    pub description: String,
    pub keywords: Vec<String>,
    pub weight: f64,
    pub min_words: Option<usize>,
    pub max_words: Option<usize>,
}

impl From<&Criterion> for CriterionDto {
    fn from(criterion: &Criterion) -> Self {
        Self {
            name: criterion.name.clone(),
            description: criterion.description.clone(),
            keywords: criterion.keywords.clone(),
            weight: criterion.weight,
            min_words: criterion.min_words,
            max_words: criterion.max_words,
        }
    }
}

/// The rubric transcripts are scored against
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RubricDto {
    /// Rubric file path or `builtin`
    pub source: String,
    pub total_weight: f64,
    pub criteria: Vec<CriterionDto>,
}

impl From<&Rubric> for RubricDto {
    fn from(rubric: &Rubric) -> Self {
        Self {
            source: rubric.source.clone(),
            total_weight: rubric.total_weight(),
            criteria: rubric.criteria.iter().map(Into::into).collect(),
        }
    }
}

/// Service health
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    /// `healthy` when transcripts can be scored
    pub status: String,
    pub rubric_loaded: bool,
    pub model_ready: bool,
    /// Number of rubric criteria
    pub criteria: usize,
    /// Similarity provider name
    pub provider: String,
    pub version: String,
}
