//! Evaluation configuration
//!
//! All fields are optional in JSON; missing ones take the defaults used by
//! [`calculate_edit_distance`](crate::algorithms::calculate_edit_distance)
//! and [`bag_of_words`](crate::algorithms::bag_of_words::bag_of_words).
//!
//! ```json
//! {
//!   "weights": { "insertion": 2, "deletion": 1, "substitution": 1 },
//!   "unit": "char",
//!   "normalization": ["nfc", "collapse_whitespace"],
//!   "exclude_punctuation": ["-", "'"],
//!   "f_beta": 1.0
//! }
//! ```

use crate::algorithms::normalize::{NormalizationMode, DEFAULT_EXCLUDED_PUNCTUATION};
use crate::algorithms::{BagOfWordsTokenizer, EditDistanceScorer, EditUnit, EditWeights};
use crate::error::{Result, TextMetricError};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EvaluationConfig {
    pub weights: EditWeights,
    pub unit: EditUnit,
    /// Applied in order to both strings before edit-distance scoring
    pub normalization: Vec<NormalizationMode>,
    pub exclude_punctuation: Vec<char>,
    /// Beta for the word-level F score
    pub f_beta: f64,
}

impl Default for EvaluationConfig {
    fn default() -> Self {
        Self {
            weights: EditWeights::default(),
            unit: EditUnit::default(),
            normalization: Vec::new(),
            exclude_punctuation: DEFAULT_EXCLUDED_PUNCTUATION.to_vec(),
            f_beta: 1.0,
        }
    }
}

impl EvaluationConfig {
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| TextMetricError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        log::debug!("loaded evaluation config from {}", path.display());
        Self::from_json_str(&json)
    }

    pub fn validate(&self) -> Result<()> {
        if !self.f_beta.is_finite() || self.f_beta < 0.0 {
            return Err(TextMetricError::OutOfRange {
                name: "f_beta",
                constraint: "a finite non-negative number",
                value: self.f_beta,
            });
        }
        Ok(())
    }

    pub fn scorer(&self) -> EditDistanceScorer {
        EditDistanceScorer::with_weights(self.weights).with_unit(self.unit)
    }

    pub fn tokenizer(&self) -> BagOfWordsTokenizer {
        BagOfWordsTokenizer::with_excluded_punctuation(self.exclude_punctuation.iter().copied())
    }
}
