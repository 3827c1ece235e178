//! Core text comparison algorithms
//!
//! Each algorithm is implemented as a standalone function for composability,
//! plus a trait-based interface for extensibility.

pub mod bag_of_words;
pub mod levenshtein;
pub mod normalize;

pub use bag_of_words::*;
pub use levenshtein::*;

use crate::error::{Result, TextMetricError};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use unicode_segmentation::UnicodeSegmentation;

/// Unit that a single edit operation acts on
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EditUnit {
    /// Unicode scalar values
    #[default]
    Char,
    /// Extended grapheme clusters
    Grapheme,
}

impl EditUnit {
    pub const VARIANTS: &'static [&'static str] = &["char", "grapheme"];

    /// Length of `text` measured in this unit
    #[must_use]
    pub fn len_of(self, text: &str) -> usize {
        match self {
            EditUnit::Char => text.chars().count(),
            EditUnit::Grapheme => text.graphemes(true).count(),
        }
    }
}

impl FromStr for EditUnit {
    type Err = TextMetricError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "char" | "chars" => Ok(EditUnit::Char),
            "grapheme" | "graphemes" => Ok(EditUnit::Grapheme),
            _ => Err(TextMetricError::InvalidArgument {
                value: s.to_string(),
                expected: Self::VARIANTS,
            }),
        }
    }
}

/// Trait for weighted edit-distance scorers.
///
/// The distance is the cost of turning `output` into `source`, and the score
/// is normalized by the length of `source`, so implementations are not
/// expected to be symmetric.
pub trait EditDistance: Send + Sync {
    /// Weighted cost of transforming `output` into `source`
    fn distance(&self, output: &str, source: &str) -> usize;

    /// Length of `text` in the units the distance is computed over
    fn unit_len(&self, text: &str) -> usize;

    /// Similarity in `[0.0, 1.0]`; `1.0` means identical
    fn score(&self, output: &str, source: &str) -> f64 {
        bounded_score(self.distance(output, source), self.unit_len(source))
    }

    /// Name of the algorithm for debugging/logging
    fn name(&self) -> &'static str;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edit_unit_parse() {
        assert_eq!("char".parse::<EditUnit>().unwrap(), EditUnit::Char);
        assert_eq!("Graphemes".parse::<EditUnit>().unwrap(), EditUnit::Grapheme);
        assert!(matches!(
            "bytes".parse::<EditUnit>(),
            Err(TextMetricError::InvalidArgument { .. })
        ));
    }

    #[test]
    fn test_edit_unit_len() {
        // e + combining acute accent
        let text = "cafe\u{301}";
        assert_eq!(EditUnit::Char.len_of(text), 5);
        assert_eq!(EditUnit::Grapheme.len_of(text), 4);
        assert_eq!(EditUnit::Char.len_of(""), 0);
    }
}
