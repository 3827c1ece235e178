//! String normalization utilities
//!
//! Provides Unicode punctuation stripping for tokenization and the
//! normalization modes applied to text pairs before comparison.

use crate::error::{Result, TextMetricError};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use unicode_general_category::{get_general_category, GeneralCategory};
use unicode_normalization::UnicodeNormalization;

/// Punctuation kept intact by default so hyphenated words and
/// contractions stay single tokens.
pub const DEFAULT_EXCLUDED_PUNCTUATION: [char; 2] = ['-', '\''];

/// Normalization mode for string preprocessing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NormalizationMode {
    /// Convert to lowercase only
    Lowercase,
    /// Apply Unicode NFC normalization
    Nfc,
    /// Apply Unicode NFKC normalization
    Nfkc,
    /// Replace every whitespace run with a single space and trim the ends
    CollapseWhitespace,
}

impl NormalizationMode {
    pub const VARIANTS: &'static [&'static str] =
        &["lowercase", "nfc", "nfkc", "collapse_whitespace"];
}

impl FromStr for NormalizationMode {
    type Err = TextMetricError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "lowercase" => Ok(NormalizationMode::Lowercase),
            "nfc" | "unicode_nfc" => Ok(NormalizationMode::Nfc),
            "nfkc" | "unicode_nfkc" => Ok(NormalizationMode::Nfkc),
            "collapse_whitespace" | "whitespace" => Ok(NormalizationMode::CollapseWhitespace),
            _ => Err(TextMetricError::InvalidArgument {
                value: s.to_string(),
                expected: Self::VARIANTS,
            }),
        }
    }
}

/// True for the seven `P*` Unicode general categories.
#[inline]
#[must_use]
pub fn is_unicode_punctuation(c: char) -> bool {
    matches!(
        get_general_category(c),
        GeneralCategory::ConnectorPunctuation
            | GeneralCategory::DashPunctuation
            | GeneralCategory::OpenPunctuation
            | GeneralCategory::ClosePunctuation
            | GeneralCategory::InitialPunctuation
            | GeneralCategory::FinalPunctuation
            | GeneralCategory::OtherPunctuation
    )
}

/// Remove every Unicode punctuation character not listed in `exclude`.
///
/// # Example
/// ```
/// use extract_eval::algorithms::normalize::remove_punctuation;
///
/// assert_eq!(remove_punctuation("¿What's up?", &['\'']), "What's up");
/// assert_eq!(remove_punctuation("«state-of-the-art»", &[]), "stateoftheart");
/// ```
#[must_use]
pub fn remove_punctuation(s: &str, exclude: &[char]) -> String {
    s.chars()
        .filter(|c| !is_unicode_punctuation(*c) || exclude.contains(c))
        .collect()
}

/// Normalize a string according to the specified mode
#[must_use]
pub fn normalize_string(s: &str, mode: NormalizationMode) -> String {
    match mode {
        NormalizationMode::Lowercase => s.to_lowercase(),
        NormalizationMode::Nfc => s.nfc().collect(),
        NormalizationMode::Nfkc => s.nfkc().collect(),
        NormalizationMode::CollapseWhitespace => s.split_whitespace().collect::<Vec<_>>().join(" "),
    }
}

/// Apply each mode in order to both strings
#[must_use]
pub fn normalize_pair(a: &str, b: &str, modes: &[NormalizationMode]) -> (String, String) {
    modes.iter().fold((a.to_string(), b.to_string()), |(a, b), &mode| {
        (normalize_string(&a, mode), normalize_string(&b, mode))
    })
}
