//! Criterion and rubric types

use serde::{Deserialize, Serialize};

use super::keywords::{deserialize_keywords, normalize_keywords, parse_keywords};
use crate::{Result, ScorecardError};

fn default_weight() -> f64 {
    1.0
}

/// A single evaluated dimension of a rubric
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Criterion {
    /// Display name, e.g. "Salutation Level"
    #[serde(alias = "criterion")]
    pub name: String,

    /// What a good transcript does for this criterion; compared semantically
    #[serde(default)]
    pub description: String,

    /// Keywords and phrases looked for in the transcript, lowercase
    #[serde(default, deserialize_with = "deserialize_keywords")]
    pub keywords: Vec<String>,

    /// Relative weight of the criterion in the overall score
    #[serde(default = "default_weight")]
    pub weight: f64,

    /// Minimum expected word count
    #[serde(default, alias = "minwords", alias = "min_words_count")]
    pub min_words: Option<usize>,

    /// Maximum expected word count
    #[serde(default, alias = "maxwords", alias = "max_words_count")]
    pub max_words: Option<usize>,
}

impl Criterion {
    /// Text compared against the transcript: the description, or the name
    /// when the description is blank
    pub fn semantic_reference(&self) -> &str {
        if self.description.trim().is_empty() {
            &self.name
        } else {
            &self.description
        }
    }

    /// Whether any word-count bound is set
    pub fn has_length_bounds(&self) -> bool {
        self.min_words.is_some() || self.max_words.is_some()
    }

    fn validate(&self, position: usize) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(ScorecardError::InvalidRubric(format!(
                "criterion #{} has a blank name",
                position + 1
            )));
        }

        if !self.weight.is_finite() || self.weight < 0.0 {
            return Err(ScorecardError::InvalidRubric(format!(
                "criterion '{}' has invalid weight {}",
                self.name, self.weight
            )));
        }

        if let (Some(min), Some(max)) = (self.min_words, self.max_words)
            && min > max
        {
            return Err(ScorecardError::InvalidRubric(format!(
                "criterion '{}' has min_words {} greater than max_words {}",
                self.name, min, max
            )));
        }

        Ok(())
    }
}

/// Builder for [`Criterion`]
///
/// ```rust
/// use scorecard::rubric::CriterionBuilder;
///
/// let criterion = CriterionBuilder::new("Salutation")
///     .description("Greets the audience")
///     .keywords("hello, good morning")
///     .weight(5.0)
///     .build();
///
/// assert_eq!(criterion.keywords, vec!["hello", "good morning"]);
/// ```
#[derive(Debug, Clone)]
pub struct CriterionBuilder {
    criterion: Criterion,
}

impl CriterionBuilder {
    /// Start a criterion with the given name and weight 1.0
    pub fn new<S: Into<String>>(name: S) -> Self {
        Self {
            criterion: Criterion {
                name: name.into(),
                description: String::new(),
                keywords: Vec::new(),
                weight: default_weight(),
                min_words: None,
                max_words: None,
            },
        }
    }

    /// Set the description
    pub fn description<S: Into<String>>(mut self, description: S) -> Self {
        self.criterion.description = description.into();
        self
    }

    /// Set the keywords from a separated string (`,`, `;`, `|` or `/`)
    pub fn keywords(mut self, keywords: &str) -> Self {
        self.criterion.keywords = parse_keywords(keywords);
        self
    }

    /// Set the keywords from a list
    pub fn keyword_list<I, S>(mut self, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.criterion.keywords = normalize_keywords(keywords);
        self
    }

    /// Set the weight
    pub fn weight(mut self, weight: f64) -> Self {
        self.criterion.weight = weight;
        self
    }

    /// Set the minimum word count
    pub fn min_words(mut self, min_words: usize) -> Self {
        self.criterion.min_words = Some(min_words);
        self
    }

    /// Set the maximum word count
    pub fn max_words(mut self, max_words: usize) -> Self {
        self.criterion.max_words = Some(max_words);
        self
    }

    /// Set both word-count bounds
    pub fn word_range(self, min_words: usize, max_words: usize) -> Self {
        self.min_words(min_words).max_words(max_words)
    }

    /// Finish the criterion
    pub fn build(self) -> Criterion {
        self.criterion
    }
}

/// An ordered set of weighted criteria
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rubric {
    /// Where the rubric came from: a file path or `builtin`
    pub source: String,

    /// Criteria in evaluation order
    pub criteria: Vec<Criterion>,
}

impl Rubric {
    /// Source identifier of the builtin rubric
    pub const BUILTIN_SOURCE: &'static str = "builtin";

    /// Create a validated rubric
    pub fn new<S: Into<String>>(source: S, criteria: Vec<Criterion>) -> Result<Self> {
        let rubric = Self {
            source: source.into(),
            criteria,
        };
        rubric.validate()?;
        Ok(rubric)
    }

    /// Check that the rubric can be scored against.
    ///
    /// Requires at least one criterion, non-blank names, finite non-negative
    /// weights with a positive finite sum, and `min_words <= max_words`.
    pub fn validate(&self) -> Result<()> {
        if self.criteria.is_empty() {
            return Err(ScorecardError::InvalidRubric(
                "rubric has no criteria".to_string(),
            ));
        }

        for (position, criterion) in self.criteria.iter().enumerate() {
            criterion.validate(position)?;
        }

        let total = self.total_weight();
        if total <= 0.0 {
            return Err(ScorecardError::InvalidRubric(format!(
                "criterion weights sum to {}, expected a positive total",
                total
            )));
        }
        // Weighted criterion scores reach 100 x total and must stay finite
        if !(total * 100.0).is_finite() {
            return Err(ScorecardError::InvalidRubric(format!(
                "criterion weights sum to {}, which is too large to score",
                total
            )));
        }

        Ok(())
    }

    /// Sum of all criterion weights
    pub fn total_weight(&self) -> f64 {
        self.criteria.iter().map(|criterion| criterion.weight).sum()
    }

    /// Number of criteria
    pub fn len(&self) -> usize {
        self.criteria.len()
    }

    /// Whether the rubric has no criteria
    pub fn is_empty(&self) -> bool {
        self.criteria.is_empty()
    }

    /// Look up a criterion by name, ignoring case
    pub fn criterion(&self, name: &str) -> Option<&Criterion> {
        self.criteria
            .iter()
            .find(|criterion| criterion.name.eq_ignore_ascii_case(name))
    }

    /// Texts the semantic signal compares transcripts against, in order
    pub fn semantic_references(&self) -> Vec<String> {
        self.criteria
            .iter()
            .map(|criterion| criterion.semantic_reference().to_string())
            .collect()
    }
}
