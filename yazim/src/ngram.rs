//! Bigram language-model contract and a flat-file backed table.

use std::path::Path;

use hashbrown::HashMap;
use smol_str::SmolStr;

use crate::resources::{read_lines, ResourceError};
use crate::types::Probability;

/// Pretrained statistical language model consulted by the disambiguator.
///
/// Both methods return values ≥ 0; a negative probability is a collaborator
/// defect, not something the pipeline defends against.
pub trait BigramModel {
    /// Unconditional P(word).
    fn unigram(&self, word: &str) -> Probability;

    /// Conditional P(right | left).
    fn bigram(&self, left: &str, right: &str) -> Probability;
}

/// Bigram probabilities estimated offline and loaded from flat text:
/// `unigrams.txt` holds `word probability` lines, `bigrams.txt` holds
/// `left right probability` lines.
#[derive(Debug, Clone, Default)]
pub struct BigramTable {
    unigrams: HashMap<SmolStr, Probability>,
    bigrams: HashMap<(SmolStr, SmolStr), Probability>,
}

impl BigramTable {
    /// An empty table; every probability is 0.
    pub fn new() -> BigramTable {
        BigramTable::default()
    }

    /// Loads `unigrams.txt` and `bigrams.txt` from `dir`.
    pub fn from_dir(dir: &Path) -> Result<BigramTable, ResourceError> {
        let mut table = BigramTable::new();

        let unigram_path = dir.join("unigrams.txt");
        for (lineno, line) in read_lines(&unigram_path)? {
            let mut parts = line.split_whitespace();
            match (parts.next(), parts.next(), parts.next()) {
                (Some(word), Some(p), None) => {
                    let p = parse_probability(p)
                        .ok_or_else(|| malformed(&unigram_path, lineno, &line))?;
                    table.set_unigram(word, p);
                }
                _ => return Err(malformed(&unigram_path, lineno, &line)),
            }
        }

        let bigram_path = dir.join("bigrams.txt");
        for (lineno, line) in read_lines(&bigram_path)? {
            let mut parts = line.split_whitespace();
            match (parts.next(), parts.next(), parts.next(), parts.next()) {
                (Some(left), Some(right), Some(p), None) => {
                    let p = parse_probability(p)
                        .ok_or_else(|| malformed(&bigram_path, lineno, &line))?;
                    table.set_bigram(left, right, p);
                }
                _ => return Err(malformed(&bigram_path, lineno, &line)),
            }
        }

        Ok(table)
    }

    /// Records an unconditional probability.
    pub fn set_unigram(&mut self, word: &str, probability: Probability) {
        self.unigrams.insert(word.into(), probability);
    }

    /// Records a conditional probability.
    pub fn set_bigram(&mut self, left: &str, right: &str, probability: Probability) {
        self.bigrams.insert((left.into(), right.into()), probability);
    }
}

impl BigramModel for BigramTable {
    fn unigram(&self, word: &str) -> Probability {
        self.unigrams.get(word).copied().unwrap_or(0.0)
    }

    fn bigram(&self, left: &str, right: &str) -> Probability {
        self.bigrams
            .get(&(SmolStr::new(left), SmolStr::new(right)))
            .copied()
            .unwrap_or(0.0)
    }
}

fn parse_probability(text: &str) -> Option<Probability> {
    text.parse::<Probability>().ok().filter(|p| *p >= 0.0)
}

fn malformed(path: &Path, line: usize, text: &str) -> ResourceError {
    ResourceError::Malformed {
        path: path.to_path_buf(),
        line,
        text: text.to_string(),
    }
}
