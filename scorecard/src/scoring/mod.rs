//! Transcript scoring
//!
//! Every criterion is scored with three independent signals:
//!
//! - [`keyword`]: share of the criterion's keywords present as whole words
//! - [`semantic`]: similarity between the transcript and the criterion description
//! - [`length`]: transcript word count against the criterion's bounds
//!
//! The [`engine`] blends them with [`SignalWeights`], combines the criteria by
//! their rubric weights and adds [`feedback`].

pub mod engine;
pub mod feedback;
pub mod keyword;
pub mod length;
pub mod results;
pub mod semantic;
pub mod weights;

pub use engine::score;
pub use feedback::{SignalScores, describe_bounds, generate_feedback};
pub use keyword::{KeywordMatch, contains_keyword, match_keywords};
pub use length::{count_words, length_score};
pub use results::{CriterionResult, OverallResult, ScoreMetadata, round2};
pub use semantic::{semantic_score, similarity_to_score};
pub use weights::{SignalWeights, WEIGHT_SUM_TOLERANCE, WeightOverrides};
