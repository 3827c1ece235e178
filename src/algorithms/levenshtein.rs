//! Weighted Levenshtein (edit) distance and extraction accuracy score
//!
//! - Independent insertion, deletion and substitution costs
//! - Common prefix/suffix trimming before the DP pass
//! - Single-row DP, O(m*n) time and O(n) space where n is the source length
//! - Character or grapheme-cluster edit units

use super::{EditDistance, EditUnit};
use crate::error::{Result, TextMetricError};
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::str::FromStr;
use unicode_segmentation::UnicodeSegmentation;

/// Costs charged for each edit operation.
///
/// Insertion is charged for every unit of `source` missing from `output`,
/// deletion for every extra unit in `output`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct EditWeights {
    pub insertion: usize,
    pub deletion: usize,
    pub substitution: usize,
}

impl EditWeights {
    #[must_use]
    pub const fn new(insertion: usize, deletion: usize, substitution: usize) -> Self {
        Self {
            insertion,
            deletion,
            substitution,
        }
    }

    /// Classic unit-cost Levenshtein weights
    #[must_use]
    pub const fn uniform() -> Self {
        Self::new(1, 1, 1)
    }
}

/// Spurious inserted content costs twice as much as dropped content.
impl Default for EditWeights {
    fn default() -> Self {
        Self::new(2, 1, 1)
    }
}

impl From<(usize, usize, usize)> for EditWeights {
    fn from((insertion, deletion, substitution): (usize, usize, usize)) -> Self {
        Self::new(insertion, deletion, substitution)
    }
}

/// Shape of the value returned by [`calculate_edit_distance`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReturnAs {
    /// Normalized similarity in `[0.0, 1.0]`
    #[default]
    Score,
    /// Raw weighted distance
    Distance,
}

impl ReturnAs {
    pub const VARIANTS: &'static [&'static str] = &["score", "distance"];
}

impl FromStr for ReturnAs {
    type Err = TextMetricError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "score" => Ok(ReturnAs::Score),
            "distance" => Ok(ReturnAs::Distance),
            _ => Err(TextMetricError::InvalidArgument {
                value: s.to_string(),
                expected: Self::VARIANTS,
            }),
        }
    }
}

/// Result of an edit-distance evaluation
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(untagged)]
pub enum EditMeasure {
    Score(f64),
    Distance(usize),
}

impl EditMeasure {
    #[must_use]
    pub fn as_f64(self) -> f64 {
        match self {
            EditMeasure::Score(score) => score,
            EditMeasure::Distance(distance) => distance as f64,
        }
    }
}

// ============================================================================
// Weighted DP
// ============================================================================

/// Weighted edit distance over arbitrary comparable slices.
///
/// Computes the minimum cost of turning `from` into `to`.
fn weighted_dp<T: PartialEq>(from: &[T], to: &[T], weights: EditWeights) -> usize {
    let prefix = from.iter().zip(to).take_while(|(a, b)| a == b).count();
    let (from, to) = (&from[prefix..], &to[prefix..]);

    let suffix = from
        .iter()
        .rev()
        .zip(to.iter().rev())
        .take_while(|(a, b)| a == b)
        .count();
    let (from, to) = (&from[..from.len() - suffix], &to[..to.len() - suffix]);

    if from.is_empty() {
        return to.len().saturating_mul(weights.insertion);
    }
    if to.is_empty() {
        return from.len().saturating_mul(weights.deletion);
    }

    let n = to.len();
    let mut row: SmallVec<[usize; 64]> = (0..=n)
        .map(|j| j.saturating_mul(weights.insertion))
        .collect();

    for (i, a) in from.iter().enumerate() {
        let mut diag = row[0];
        row[0] = (i + 1).saturating_mul(weights.deletion);

        for (j, b) in to.iter().enumerate() {
            let substitution = if a == b {
                diag
            } else {
                diag.saturating_add(weights.substitution)
            };
            let deletion = row[j + 1].saturating_add(weights.deletion);
            let insertion = row[j].saturating_add(weights.insertion);

            diag = row[j + 1];
            row[j + 1] = substitution.min(deletion).min(insertion);
        }
    }

    row[n]
}

/// Weighted Levenshtein distance between two strings, character units.
///
/// # Example
/// ```
/// use extract_eval::algorithms::levenshtein::{weighted_levenshtein, EditWeights};
///
/// // Unit weights give the classic distance
/// assert_eq!(weighted_levenshtein("kitten", "sitting", EditWeights::uniform()), 3);
///
/// // Default weights charge 2 per missing character
/// assert_eq!(weighted_levenshtein("abc", "abcd", EditWeights::default()), 2);
/// assert_eq!(weighted_levenshtein("abcd", "abc", EditWeights::default()), 1);
/// ```
#[must_use]
pub fn weighted_levenshtein(output: &str, source: &str, weights: EditWeights) -> usize {
    if output == source {
        return 0;
    }
    let output_chars: SmallVec<[char; 64]> = output.chars().collect();
    let source_chars: SmallVec<[char; 64]> = source.chars().collect();
    weighted_dp(&output_chars, &source_chars, weights)
}

/// Weighted Levenshtein distance treating grapheme clusters as single units.
#[must_use]
pub fn weighted_levenshtein_grapheme(output: &str, source: &str, weights: EditWeights) -> usize {
    if output == source {
        return 0;
    }
    let output_graphemes: SmallVec<[&str; 64]> = output.graphemes(true).collect();
    let source_graphemes: SmallVec<[&str; 64]> = source.graphemes(true).collect();
    weighted_dp(&output_graphemes, &source_graphemes, weights)
}

/// Fraction of the source that the edits amount to, clamped to `[0.0, 1.0]`.
///
/// An empty source has no meaningful ratio: it counts as a perfect match when
/// the distance is zero and as a complete miss otherwise.
#[must_use]
pub fn bounded_percentage_distance(distance: usize, source_len: usize) -> f64 {
    if source_len == 0 {
        log::debug!("empty source, distance {distance} taken as all-or-nothing");
        return if distance == 0 { 0.0 } else { 1.0 };
    }
    (distance as f64 / source_len as f64).clamp(0.0, 1.0)
}

/// Similarity score derived from a weighted distance: `1 - bounded ratio`.
#[inline]
#[must_use]
pub fn bounded_score(distance: usize, source_len: usize) -> f64 {
    1.0 - bounded_percentage_distance(distance, source_len)
}

// ============================================================================
// Public API
// ============================================================================

/// Scores how closely an extracted string reproduces a reference string.
///
/// # Complexity
/// - Time: O(m*n) where m and n are the input lengths
/// - Space: O(n) in the source length
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditDistanceScorer {
    pub weights: EditWeights,
    pub unit: EditUnit,
}

impl EditDistanceScorer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_weights(weights: EditWeights) -> Self {
        Self {
            weights,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_unit(mut self, unit: EditUnit) -> Self {
        self.unit = unit;
        self
    }

    /// Evaluate a pair in the requested result mode.
    #[must_use]
    pub fn evaluate(&self, output: &str, source: &str, return_as: ReturnAs) -> EditMeasure {
        let distance = EditDistance::distance(self, output, source);
        match return_as {
            ReturnAs::Distance => EditMeasure::Distance(distance),
            ReturnAs::Score => {
                let source_len = self.unit_len(source);
                let score = bounded_score(distance, source_len);
                log::debug!(
                    "scored pair: output_len={} source_len={} distance={} score={:.4}",
                    self.unit_len(output),
                    source_len,
                    distance,
                    score
                );
                EditMeasure::Score(score)
            }
        }
    }
}

impl EditDistance for EditDistanceScorer {
    fn distance(&self, output: &str, source: &str) -> usize {
        match self.unit {
            EditUnit::Char => weighted_levenshtein(output, source, self.weights),
            EditUnit::Grapheme => weighted_levenshtein_grapheme(output, source, self.weights),
        }
    }

    fn unit_len(&self, text: &str) -> usize {
        self.unit.len_of(text)
    }

    fn name(&self) -> &'static str {
        "weighted_levenshtein"
    }
}

/// Edit distance or similarity score between an extraction and its reference.
///
/// `return_as` must be `"score"` or `"distance"`; anything else is rejected
/// with [`TextMetricError::InvalidArgument`].
///
/// # Example
/// ```
/// use extract_eval::algorithms::levenshtein::{calculate_edit_distance, EditMeasure, EditWeights};
///
/// let source = "I like pizza. I like bagels.";
/// let output = "I like p i z z a . I like bagles.";
///
/// let score = calculate_edit_distance(output, source, EditWeights::default(), "score").unwrap();
/// assert_eq!((score.as_f64() * 100.0).round() / 100.0, 0.75);
///
/// let distance = calculate_edit_distance(output, source, EditWeights::default(), "distance").unwrap();
/// assert_eq!(distance, EditMeasure::Distance(7));
///
/// assert!(calculate_edit_distance(output, source, EditWeights::default(), "bogus").is_err());
/// ```
pub fn calculate_edit_distance(
    output: &str,
    source: &str,
    weights: EditWeights,
    return_as: &str,
) -> Result<EditMeasure> {
    let return_as: ReturnAs = return_as.parse()?;
    Ok(EditDistanceScorer::with_weights(weights).evaluate(output, source, return_as))
}
