//! Correction candidates and their splice operators.

use serde::{Deserialize, Serialize};
use smol_str::SmolStr;

use crate::types::Penalty;

/// How a candidate was produced, and therefore how the driver must splice it
/// into the output sentence. The splice step matches this exhaustively so a
/// new variant cannot be silently ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operator {
    /// The original word is kept.
    NoChange,
    /// Replacement taken from the exact-misspelling table.
    MisspelledReplace,
    /// Single character edit: deletion, insertion, substitution or an
    /// adjacent transposition.
    SpellCheck,
    /// The word is split into two output words.
    Split,
    /// The word and the next input word merge into one output word.
    ForwardMerge,
    /// The word merges into the previously emitted output word.
    BackwardMerge,
    /// Replacement proposed by the context table of a neighboring root.
    ContextBased,
    /// Replacement found by the bounded-penalty trie search.
    TrieBased,
}

/// A generated replacement for one or more input words. Transient: created
/// fresh per scan position, never shared across positions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Candidate {
    /// One- or two-word replacement text. `Split` candidates contain exactly
    /// one interior space; merge candidates contain none.
    pub text: SmolStr,
    /// Splice operator.
    pub operator: Operator,
}

impl Candidate {
    /// Builds a candidate.
    pub fn new(text: impl Into<SmolStr>, operator: Operator) -> Candidate {
        Candidate {
            text: text.into(),
            operator,
        }
    }

    /// The "leave it alone" candidate for `word`.
    pub fn no_change(word: &str) -> Candidate {
        Candidate::new(word, Operator::NoChange)
    }

    /// The replacement text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The two halves of a `Split` candidate, if this is one.
    pub(crate) fn split_halves(&self) -> Option<(&str, &str)> {
        match self.operator {
            Operator::Split => self.text.split_once(' '),
            _ => None,
        }
    }
}

/// One branch of the trie frontier search: the vocabulary prefix matched so
/// far, the cursor into the misspelled input, and the accumulated edit cost.
/// Created when the search branches, advanced one character at a time,
/// discarded when pruned or completed.
#[derive(Debug, Clone)]
pub(crate) struct TrieCandidate {
    pub(crate) text: String,
    pub(crate) current_index: usize,
    pub(crate) current_penalty: Penalty,
}

impl TrieCandidate {
    /// The search start: nothing matched, cursor at the first character.
    pub(crate) fn start() -> TrieCandidate {
        TrieCandidate {
            text: String::new(),
            current_index: 0,
            current_penalty: 0.0,
        }
    }

    /// Extends the matched prefix by `ch`, optionally consuming one input
    /// character, at the given extra cost.
    pub(crate) fn extended(&self, ch: char, consume_input: bool, cost: Penalty) -> TrieCandidate {
        let mut text = self.text.clone();
        text.push(ch);
        TrieCandidate {
            text,
            current_index: self.current_index + usize::from(consume_input),
            current_penalty: self.current_penalty + cost,
        }
    }

    /// Skips one input character (a deletion edit).
    pub(crate) fn skipped(&self) -> TrieCandidate {
        TrieCandidate {
            text: self.text.clone(),
            current_index: self.current_index + 1,
            current_penalty: self.current_penalty + 1.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_halves_only_for_split() {
        let split = Candidate::new("yeni sezon", Operator::Split);
        assert_eq!(split.split_halves(), Some(("yeni", "sezon")));
        let merge = Candidate::new("yenisezon", Operator::ForwardMerge);
        assert_eq!(merge.split_halves(), None);
    }

    #[test]
    fn trie_candidate_bookkeeping() {
        let start = TrieCandidate::start();
        let matched = start.extended('a', true, 0.0);
        let inserted = matched.extended('b', false, 1.0);
        let skipped = inserted.skipped();
        assert_eq!(skipped.text, "ab");
        assert_eq!(skipped.current_index, 2);
        assert_eq!(skipped.current_penalty, 2.0);
    }
}
