//! Checker configuration knobs.

use serde::{Deserialize, Serialize};
use smol_str::SmolStr;

use crate::types::{Penalty, Probability};

/// Tuning knobs of the correction pipeline.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CheckerConfig {
    /// Acceptance floor of the disambiguator; a candidate must score strictly
    /// above this to displace the original word.
    pub threshold: Probability,
    /// Score morphological roots when true, raw surface forms when false.
    pub root_ngram: bool,
    /// Words with fewer characters than this are exempt from correction.
    pub min_word_length: usize,
    /// Enables the locative de/da split and the question-suffix split.
    pub suffix_splits: bool,
    /// Historical-variant tie-break: a sole candidate wins regardless of its
    /// score. Off by default.
    pub single_candidate_wins: bool,
    /// Minimum characters on each side of a generated split.
    pub min_split_length: usize,
    /// Edit budget of the trie-guided search.
    pub max_trie_penalty: Penalty,
    /// Domain tag selecting alternate resource files.
    pub domain: Option<SmolStr>,
}

impl CheckerConfig {
    /// The default configuration.
    pub const fn default() -> CheckerConfig {
        CheckerConfig {
            threshold: 0.0,
            root_ngram: true,
            min_word_length: 2,
            suffix_splits: true,
            single_candidate_wins: false,
            min_split_length: 4,
            max_trie_penalty: 2.0,
            domain: None,
        }
    }
}
