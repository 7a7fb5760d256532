//! Collaborator contract for morphological analysis and dictionary lookups.
//!
//! The pipeline never computes parses itself; it consumes them through this
//! trait, which mirrors the analyzer it is deployed against. Tests drive the
//! checker with in-memory implementations (see [`crate::lexicon`]).

use smol_str::SmolStr;

/// One successful morphological parse of a surface form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parse {
    /// The canonical base form of this parse.
    pub root: SmolStr,
}

impl Parse {
    /// Builds a parse from its root word.
    pub fn new(root: impl Into<SmolStr>) -> Parse {
        Parse { root: root.into() }
    }

    /// The root word of this parse.
    pub fn root(&self) -> &str {
        &self.root
    }
}

/// Dictionary flags consulted by the forced-split rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DictionaryEntry {
    /// Proper nouns take an apostrophe before a stripped suffix ("X'da").
    pub is_proper_noun: bool,
    /// Code-like entries (abbreviations, product codes) are never split.
    pub is_code: bool,
    /// Whether suffixes attach with regular vowel harmony. Loanwords like
    /// "saat" take the opposite allomorph.
    pub obeys_vowel_harmony: bool,
}

impl Default for DictionaryEntry {
    fn default() -> DictionaryEntry {
        DictionaryEntry {
            is_proper_noun: false,
            is_code: false,
            obeys_vowel_harmony: true,
        }
    }
}

/// Morphological analyzer plus its dictionary, as one collaborator.
pub trait Morphology {
    /// All parses of `surface`; empty when the form is not a valid word.
    fn analyze(&self, surface: &str) -> Vec<Parse>;

    /// Canonical replacement for a known exact misspelling, if listed.
    fn correct_form(&self, surface: &str) -> Option<SmolStr>;

    /// Dictionary flags for a root or surface form, if it is an entry.
    fn entry(&self, word: &str) -> Option<DictionaryEntry>;

    /// Whether `surface` has at least one parse.
    fn is_valid(&self, surface: &str) -> bool {
        !self.analyze(surface).is_empty()
    }

    /// Root of the parse with the longest root word, if any parse exists.
    fn longest_root(&self, surface: &str) -> Option<SmolStr> {
        self.analyze(surface)
            .into_iter()
            .max_by_key(|parse| parse.root.chars().count())
            .map(|parse| parse.root)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct TwoParses;

    impl Morphology for TwoParses {
        fn analyze(&self, surface: &str) -> Vec<Parse> {
            if surface == "durağı" {
                vec![Parse::new("dur"), Parse::new("durak")]
            } else {
                vec![]
            }
        }

        fn correct_form(&self, _surface: &str) -> Option<SmolStr> {
            None
        }

        fn entry(&self, _word: &str) -> Option<DictionaryEntry> {
            None
        }
    }

    #[test]
    fn longest_root_wins() {
        assert_eq!(TwoParses.longest_root("durağı").unwrap(), "durak");
        assert_eq!(TwoParses.longest_root("yok"), None);
        assert!(TwoParses.is_valid("durağı"));
        assert!(!TwoParses.is_valid("yok"));
    }
}
