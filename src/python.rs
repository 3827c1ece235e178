//! Python bindings
//!
//! Exposes the scorer and tokenizer as the `_core` extension module with the
//! same keyword signatures as the pure-Python metrics helpers.
//!
//! ```python
//! from extract_eval._core import calculate_edit_distance, bag_of_words
//!
//! calculate_edit_distance("I like p i z z a .", "I like pizza.", return_as="distance")
//! bag_of_words("Hello my name is H a r p e r")
//! ```

use crate::algorithms::{self, EditWeights};
use crate::config::EvaluationConfig;
use crate::error::TextMetricError;
use crate::metrics::BagComparison;
use pyo3::create_exception;
use pyo3::prelude::*;
use std::collections::HashMap;

// ExtractEvalError (base, ValueError)
//   └── InvalidArgumentError - unknown enumerated argument (return_as, ...)
create_exception!(extract_eval, ExtractEvalError, pyo3::exceptions::PyValueError);
create_exception!(extract_eval, InvalidArgumentError, ExtractEvalError);

fn to_py_err(err: TextMetricError) -> PyErr {
    match err {
        TextMetricError::InvalidArgument { .. } => InvalidArgumentError::new_err(err.to_string()),
        other => ExtractEvalError::new_err(other.to_string()),
    }
}

/// Edit distance or similarity score between an extraction and its reference.
///
/// # Arguments
/// * `weights` - (insertion, deletion, substitution) costs
/// * `return_as` - "score" (similarity in [0, 1]) or "distance" (raw weighted distance)
#[pyfunction]
#[pyo3(signature = (output, source, weights=(2, 1, 1), return_as="score"))]
fn calculate_edit_distance(
    py: Python<'_>,
    output: &str,
    source: &str,
    weights: (usize, usize, usize),
    return_as: &str,
) -> PyResult<f64> {
    let weights = EditWeights::from(weights);
    let output = output.to_string();
    let source = source.to_string();
    let return_as = return_as.to_string();
    let measure = py
        .allow_threads(|| {
            algorithms::calculate_edit_distance(&output, &source, weights, &return_as)
        })
        .map_err(to_py_err)?;
    Ok(measure.as_f64())
}

/// Word -> count mapping with shredded single-character runs removed.
#[pyfunction]
#[pyo3(signature = (text, exclude_punctuation=None))]
fn bag_of_words(text: &str, exclude_punctuation: Option<Vec<char>>) -> HashMap<String, usize> {
    let tokenizer = match exclude_punctuation {
        Some(exclude) => algorithms::BagOfWordsTokenizer::with_excluded_punctuation(exclude),
        None => algorithms::BagOfWordsTokenizer::default(),
    };
    tokenizer.bag_of_words(text).into_iter().collect()
}

/// Remove Unicode punctuation, keeping the characters in `exclude_punctuation`.
#[pyfunction]
#[pyo3(signature = (text, exclude_punctuation=None))]
fn remove_punctuation(text: &str, exclude_punctuation: Option<Vec<char>>) -> String {
    algorithms::normalize::remove_punctuation(text, &exclude_punctuation.unwrap_or_default())
}

/// Word-level (precision, recall, f_score) of `output` against `source`.
#[pyfunction]
#[pyo3(signature = (output, source, beta=1.0))]
fn word_metrics(output: &str, source: &str, beta: f64) -> PyResult<(f64, f64, f64)> {
    let config = EvaluationConfig {
        f_beta: beta,
        ..EvaluationConfig::default()
    };
    config.validate().map_err(to_py_err)?;
    let cmp = BagComparison::from_bags(
        &algorithms::bag_of_words(output),
        &algorithms::bag_of_words(source),
    );
    Ok((cmp.precision(), cmp.recall(), cmp.f_score(config.f_beta)))
}

#[pymodule]
fn _core(m: &Bound<'_, PyModule>) -> PyResult<()> {
    let py = m.py();
    m.add("ExtractEvalError", py.get_type::<ExtractEvalError>())?;
    m.add("InvalidArgumentError", py.get_type::<InvalidArgumentError>())?;

    m.add_function(wrap_pyfunction!(calculate_edit_distance, m)?)?;
    m.add_function(wrap_pyfunction!(bag_of_words, m)?)?;
    m.add_function(wrap_pyfunction!(remove_punctuation, m)?)?;
    m.add_function(wrap_pyfunction!(word_metrics, m)?)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_word_metrics_rejects_negative_beta() {
        assert!(word_metrics("a cat", "a cat", -1.0).is_err());
        assert!(word_metrics("a cat", "a cat", f64::INFINITY).is_err());
    }

    #[test]
    fn test_word_metrics_matches_bag_comparison() {
        let (p, r, f) = word_metrics("one two", "one two three four", 1.0).unwrap();
        assert_eq!(p, 1.0);
        assert_eq!(r, 0.5);
        assert!((f - 2.0 / 3.0).abs() < 0.001);
    }
}
