//! extract-eval - Text-extraction accuracy metrics
//!
//! Measures how faithfully a document-extraction pipeline reproduces a known
//! reference text.
//!
//! # Features
//! - Weighted Levenshtein distance and a bounded similarity score
//! - Bag-of-words profiles that drop shredded single-character runs
//! - Word-level precision, recall and F-beta between bags
//! - Parallel batch evaluation
//! - Optional Python bindings (`python` feature)
//!
//! # Example
//! ```
//! use extract_eval::{bag_of_words, calculate_edit_distance, EditWeights};
//!
//! let score = calculate_edit_distance(
//!     "I like pizza. I like beagles.",
//!     "I like pizza. I like bagels.",
//!     EditWeights::default(),
//!     "score",
//! )
//! .unwrap();
//! assert!(score.as_f64() > 0.88 && score.as_f64() < 0.90);
//!
//! let bow = bag_of_words("I have a dog and a cat, I love my dog.");
//! assert_eq!(bow["a"], 2);
//! ```

pub mod algorithms;
pub mod config;
pub mod error;
pub mod evaluate;
pub mod metrics;

#[cfg(feature = "python")]
pub mod python;

pub use algorithms::normalize::{remove_punctuation, NormalizationMode};
pub use algorithms::{
    bag_of_words, calculate_edit_distance, merge_shredded_runs, BagOfWords, BagOfWordsTokenizer,
    EditDistance, EditDistanceScorer, EditMeasure, EditUnit, EditWeights, ReturnAs,
};
pub use config::EvaluationConfig;
pub use error::{Result, TextMetricError};
pub use evaluate::{evaluate_batch, evaluate_pair, EvaluationReport, TextPair};
pub use metrics::BagComparison;

/// Minimum batch size for parallel evaluation.
///
/// Each pair costs a full O(m*n) DP pass, so the pool pays off well before
/// the thresholds used for cheap per-item work.
pub const PARALLEL_THRESHOLD: usize = 8;
