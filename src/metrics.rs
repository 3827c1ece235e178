//! Word-level accuracy metrics over bags of words.
//!
//! Compares the word-frequency profile of an extraction against the profile
//! of its reference text. A word occurring `k` times in the output and `m`
//! times in the reference contributes `min(k, m)` matched occurrences.

use crate::algorithms::BagOfWords;
use serde::Serialize;

/// Count difference for a single word
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WordDelta {
    pub word: String,
    pub count: usize,
}

/// Overlap between an output bag and a source bag.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BagComparison {
    /// Occurrences present in both bags
    pub matched: usize,
    /// Total occurrences in the output bag
    pub output_total: usize,
    /// Total occurrences in the source bag
    pub source_total: usize,
    /// Source words under-represented in the output, sorted by word
    pub missing: Vec<WordDelta>,
    /// Output words over-represented relative to the source, sorted by word
    pub extra: Vec<WordDelta>,
}

impl BagComparison {
    pub fn from_bags(output: &BagOfWords, source: &BagOfWords) -> Self {
        let mut matched = 0;
        let mut missing = Vec::new();
        let mut extra = Vec::new();

        for (word, &source_count) in source.iter() {
            let output_count = output.get(word).copied().unwrap_or(0);
            matched += output_count.min(source_count);
            if source_count > output_count {
                missing.push(WordDelta {
                    word: word.clone(),
                    count: source_count - output_count,
                });
            }
        }
        for (word, &output_count) in output.iter() {
            let source_count = source.get(word).copied().unwrap_or(0);
            if output_count > source_count {
                extra.push(WordDelta {
                    word: word.clone(),
                    count: output_count - source_count,
                });
            }
        }
        missing.sort_unstable_by(|a, b| a.word.cmp(&b.word));
        extra.sort_unstable_by(|a, b| a.word.cmp(&b.word));

        Self {
            matched,
            output_total: output.values().sum(),
            source_total: source.values().sum(),
            missing,
            extra,
        }
    }

    /// Fraction of output words backed by the source.
    pub fn precision(&self) -> f64 {
        if self.output_total == 0 {
            if self.source_total == 0 {
                1.0 // nothing extracted, nothing expected
            } else {
                0.0
            }
        } else {
            self.matched as f64 / self.output_total as f64
        }
    }

    /// Fraction of source words recovered in the output.
    pub fn recall(&self) -> f64 {
        if self.source_total == 0 {
            if self.output_total == 0 {
                1.0
            } else {
                0.0
            }
        } else {
            self.matched as f64 / self.source_total as f64
        }
    }

    /// F-beta score: weighted harmonic mean of precision and recall.
    ///
    /// F1 (beta=1.0) weighs both equally, F0.5 favours precision and F2
    /// favours recall.
    pub fn f_score(&self, beta: f64) -> f64 {
        let p = self.precision();
        let r = self.recall();
        if p + r == 0.0 {
            0.0
        } else {
            let beta_sq = beta * beta;
            (1.0 + beta_sq) * p * r / (beta_sq * p + r)
        }
    }
}
