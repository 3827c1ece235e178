//! Word-frequency profile of extracted text
//!
//! Text is lower-cased, stripped of Unicode punctuation and split on
//! whitespace. Runs of adjacent single-character fragments are treated as
//! extraction noise (letters of one word separated by spurious spaces, e.g.
//! `"H a r p e r"`) and dropped, while an isolated single-character word such
//! as `"a"` or `"I"` is still counted.
//!
//! # Complexity
//! - Time: O(n) in the text length
//! - Space: O(unique_words)

use super::normalize::{remove_punctuation, DEFAULT_EXCLUDED_PUNCTUATION};
use ahash::AHashMap;
use serde::{Deserialize, Serialize};

/// Normalized word -> occurrence count
pub type BagOfWords = AHashMap<String, usize>;

/// Tokenizer producing a [`BagOfWords`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BagOfWordsTokenizer {
    /// Punctuation characters that are never stripped
    pub exclude_punctuation: Vec<char>,
}

impl Default for BagOfWordsTokenizer {
    fn default() -> Self {
        Self {
            exclude_punctuation: DEFAULT_EXCLUDED_PUNCTUATION.to_vec(),
        }
    }
}

impl BagOfWordsTokenizer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_excluded_punctuation(exclude: impl IntoIterator<Item = char>) -> Self {
        Self {
            exclude_punctuation: exclude.into_iter().collect(),
        }
    }

    /// Lower-case, strip punctuation and split on whitespace.
    pub fn fragments(&self, text: &str) -> Vec<String> {
        remove_punctuation(&text.to_lowercase(), &self.exclude_punctuation)
            .split_whitespace()
            .map(str::to_string)
            .collect()
    }

    pub fn bag_of_words(&self, text: &str) -> BagOfWords {
        merge_shredded_runs(&self.fragments(text))
    }
}

/// Count fragments, discarding runs of two or more single-character fragments.
///
/// Fragments longer than one character are counted as-is. A maximal run of
/// single-character fragments is counted only when it holds exactly one
/// character; longer runs and empty fragments contribute nothing.
pub fn merge_shredded_runs<S: AsRef<str>>(fragments: &[S]) -> BagOfWords {
    let mut bow = BagOfWords::new();

    let mut i = 0;
    while i < fragments.len() {
        let word = fragments[i].as_ref();
        if word.chars().count() > 1 {
            *bow.entry(word.to_string()).or_insert(0) += 1;
            i += 1;
            continue;
        }

        let mut j = i;
        let mut merged = String::new();
        while j < fragments.len() && fragments[j].as_ref().chars().count() == 1 {
            merged.push_str(fragments[j].as_ref());
            j += 1;
        }

        match merged.chars().count() {
            1 => *bow.entry(merged).or_insert(0) += 1,
            0 => {}
            _ => log::trace!("discarding shredded run {merged:?}"),
        }

        // an empty fragment consumes nothing above
        i = j.max(i + 1);
    }

    bow
}

/// Bag of words using the default punctuation exclusions (`-` and `'`).
///
/// # Example
/// ```
/// use extract_eval::algorithms::bag_of_words::bag_of_words;
///
/// let bow = bag_of_words("Hello my name is H a r p e r, what's your name?");
/// assert_eq!(bow.get("name"), Some(&2));
/// assert_eq!(bow.get("what's"), Some(&1));
/// assert_eq!(bow.get("h"), None);
/// assert_eq!(bow.get("harper"), None);
/// ```
pub fn bag_of_words(text: &str) -> BagOfWords {
    BagOfWordsTokenizer::default().bag_of_words(text)
}
