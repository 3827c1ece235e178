//! Per-pair accuracy reports and batch evaluation
//!
//! Combines the edit-distance score and the word-level comparison for each
//! `(output, source)` pair. Batches run on the rayon pool once they are
//! large enough to amortize the scheduling cost.

use crate::algorithms::normalize::normalize_pair;
use crate::algorithms::EditDistance;
use crate::config::EvaluationConfig;
use crate::metrics::BagComparison;
use crate::PARALLEL_THRESHOLD;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

/// An extraction and the reference text it should reproduce
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextPair {
    pub output: String,
    pub source: String,
}

impl TextPair {
    pub fn new(output: impl Into<String>, source: impl Into<String>) -> Self {
        Self {
            output: output.into(),
            source: source.into(),
        }
    }
}

/// Accuracy of one extraction
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EvaluationReport {
    /// Edit-distance similarity in `[0.0, 1.0]`
    pub score: f64,
    /// Raw weighted edit distance
    pub distance: usize,
    /// Output length in edit units, after normalization
    pub output_len: usize,
    /// Source length in edit units, after normalization
    pub source_len: usize,
    pub word_precision: f64,
    pub word_recall: f64,
    pub word_f_score: f64,
    pub words: BagComparison,
}

/// Evaluate a single pair.
///
/// Normalization modes from the config only affect edit-distance scoring;
/// the bag of words does its own lower-casing and punctuation stripping.
pub fn evaluate_pair(output: &str, source: &str, config: &EvaluationConfig) -> EvaluationReport {
    let scorer = config.scorer();
    let (norm_output, norm_source) = if config.normalization.is_empty() {
        (Cow::Borrowed(output), Cow::Borrowed(source))
    } else {
        let (a, b) = normalize_pair(output, source, &config.normalization);
        (Cow::Owned(a), Cow::Owned(b))
    };

    let distance = scorer.distance(&norm_output, &norm_source);
    let source_len = scorer.unit_len(&norm_source);
    let score = crate::algorithms::bounded_score(distance, source_len);

    let tokenizer = config.tokenizer();
    let words = BagComparison::from_bags(
        &tokenizer.bag_of_words(output),
        &tokenizer.bag_of_words(source),
    );

    log::debug!(
        "evaluated pair: distance={} score={:.4} word_recall={:.4}",
        distance,
        score,
        words.recall()
    );

    EvaluationReport {
        score,
        distance,
        output_len: scorer.unit_len(&norm_output),
        source_len,
        word_precision: words.precision(),
        word_recall: words.recall(),
        word_f_score: words.f_score(config.f_beta),
        words,
    }
}

/// Evaluate many pairs, preserving input order.
pub fn evaluate_batch(pairs: &[TextPair], config: &EvaluationConfig) -> Vec<EvaluationReport> {
    if pairs.len() >= PARALLEL_THRESHOLD {
        log::info!("evaluating {} pairs in parallel", pairs.len());
        pairs
            .par_iter()
            .map(|pair| evaluate_pair(&pair.output, &pair.source, config))
            .collect()
    } else {
        log::info!("evaluating {} pairs", pairs.len());
        pairs
            .iter()
            .map(|pair| evaluate_pair(&pair.output, &pair.source, config))
            .collect()
    }
}

/// Mean edit-distance score over a batch, `None` for an empty batch.
pub fn mean_score(reports: &[EvaluationReport]) -> Option<f64> {
    if reports.is_empty() {
        return None;
    }
    Some(reports.iter().map(|r| r.score).sum::<f64>() / reports.len() as f64)
}
