//! Scoring results
//!
//! Scores are kept at full precision; serialization rounds them to two
//! decimal places.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize, Serializer};

/// Round to two decimal places
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

fn serialize_round2<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_f64(round2(*value))
}

/// Score breakdown for a single criterion
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CriterionResult {
    /// Criterion name
    pub criterion: String,

    /// Rubric weight of the criterion
    pub weight: f64,

    /// Word count of the whole transcript
    pub words: usize,

    /// Keywords the criterion looks for
    pub keywords_expected: Vec<String>,

    /// Keywords present in the transcript
    pub keywords_found: Vec<String>,

    /// Keyword signal, 0-100
    #[serde(serialize_with = "serialize_round2")]
    pub kw_score: f64,

    /// Semantic signal, 0-100
    #[serde(serialize_with = "serialize_round2")]
    pub sem_score: f64,

    /// Length signal, 0-100
    #[serde(serialize_with = "serialize_round2")]
    pub len_score: f64,

    /// Weighted blend of the three signals, 0-100
    #[serde(serialize_with = "serialize_round2")]
    pub criterion_raw: f64,

    /// `criterion_raw * weight`
    #[serde(serialize_with = "serialize_round2")]
    pub criterion_weighted: f64,

    /// What to improve
    pub feedback: String,
}

/// How a result was produced
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreMetadata {
    pub semantic_weight: f64,
    pub keyword_weight: f64,
    pub length_weight: f64,
    pub total_words: usize,
    /// Rubric file path or `builtin`
    pub rubric_source: String,
    /// Name of the similarity provider
    pub provider: String,
    pub scored_at: DateTime<Utc>,
}

/// Overall score with its per-criterion breakdown
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OverallResult {
    /// Weighted mean of the criterion scores, clamped to 0-100
    #[serde(serialize_with = "serialize_round2")]
    pub overall_score: f64,

    /// One entry per rubric criterion, in rubric order
    pub per_criterion: Vec<CriterionResult>,

    pub metadata: ScoreMetadata,
}

impl OverallResult {
    /// Look up a criterion result by name, ignoring case
    pub fn criterion(&self, name: &str) -> Option<&CriterionResult> {
        self.per_criterion
            .iter()
            .find(|result| result.criterion.eq_ignore_ascii_case(name))
    }
}
