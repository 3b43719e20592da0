//! Signal weights: how the keyword, semantic and length signals are blended

use serde::{Deserialize, Serialize};

use crate::{Result, ScorecardError};

/// Allowed distance of the weight sum from 1.0
pub const WEIGHT_SUM_TOLERANCE: f64 = 0.01;

/// Weights of the three signals inside every criterion score
///
/// Each weight must lie in `[0, 1]` and together they must sum to 1.0
/// (within [`WEIGHT_SUM_TOLERANCE`]). Weights that do not are rejected, never
/// silently rescaled.
///
/// # Example
///
/// ```rust
/// use scorecard::scoring::SignalWeights;
///
/// let weights = SignalWeights::new(0.6, 0.3, 0.1);
/// assert!(weights.validate().is_ok());
///
/// let broken = SignalWeights::new(0.5, 0.3, 0.3);
/// assert!(broken.validate().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SignalWeights {
    /// Weight of the embedding similarity signal. Default: 0.5
    pub semantic_weight: f64,

    /// Weight of the keyword presence signal. Default: 0.4
    pub keyword_weight: f64,

    /// Weight of the word-count signal. Default: 0.1
    pub length_weight: f64,
}

impl Default for SignalWeights {
    fn default() -> Self {
        Self {
            semantic_weight: 0.5,
            keyword_weight: 0.4,
            length_weight: 0.1,
        }
    }
}

impl SignalWeights {
    /// Create weights from their three components
    pub fn new(semantic_weight: f64, keyword_weight: f64, length_weight: f64) -> Self {
        Self {
            semantic_weight,
            keyword_weight,
            length_weight,
        }
    }

    /// Weights favouring meaning over exact wording
    pub fn semantic_focused() -> Self {
        Self::new(0.7, 0.2, 0.1)
    }

    /// Weights favouring the rubric's keywords
    pub fn keyword_focused() -> Self {
        Self::new(0.2, 0.7, 0.1)
    }

    /// Sum of the three weights
    pub fn total(&self) -> f64 {
        self.semantic_weight + self.keyword_weight + self.length_weight
    }

    /// Validate the weights
    ///
    /// Returns [`ScorecardError::InvalidInput`] if any weight is not finite,
    /// lies outside `[0, 1]`, or the sum is off 1.0 by more than the tolerance.
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("semantic_weight", self.semantic_weight),
            ("keyword_weight", self.keyword_weight),
            ("length_weight", self.length_weight),
        ] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(ScorecardError::InvalidInput(format!(
                    "{} must be a number between 0 and 1, got {}",
                    name, value
                )));
            }
        }

        let total = self.total();
        if (total - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
            return Err(ScorecardError::InvalidInput(format!(
                "signal weights must sum to 1.0, got {:.4}",
                total
            )));
        }

        Ok(())
    }
}

/// Per-request weight overrides; unset fields keep the configured weight
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WeightOverrides {
    /// Override for the semantic weight
    pub semantic_weight: Option<f64>,

    /// Override for the keyword weight
    pub keyword_weight: Option<f64>,

    /// Override for the length weight
    pub length_weight: Option<f64>,
}

impl WeightOverrides {
    /// Whether no weight is overridden
    pub fn is_empty(&self) -> bool {
        self.semantic_weight.is_none()
            && self.keyword_weight.is_none()
            && self.length_weight.is_none()
    }

    /// Merge the overrides over `base`. The result is not validated.
    pub fn apply(&self, base: &SignalWeights) -> SignalWeights {
        SignalWeights {
            semantic_weight: self.semantic_weight.unwrap_or(base.semantic_weight),
            keyword_weight: self.keyword_weight.unwrap_or(base.keyword_weight),
            length_weight: self.length_weight.unwrap_or(base.length_weight),
        }
    }
}

impl From<SignalWeights> for WeightOverrides {
    fn from(weights: SignalWeights) -> Self {
        Self {
            semantic_weight: Some(weights.semantic_weight),
            keyword_weight: Some(weights.keyword_weight),
            length_weight: Some(weights.length_weight),
        }
    }
}
