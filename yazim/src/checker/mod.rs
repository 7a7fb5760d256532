//! The correction-decision pipeline.
//!
//! A stateful left-to-right scan over the sentence: for each position the
//! forced-rule stage runs first and may fully determine the output; words
//! that analyze (or are too short to touch) pass through unchanged; anything
//! else goes through candidate generation and the sliding-window bigram
//! disambiguator. The only state carried between steps is the rolling
//! {previous, current, next} root window.

use log::debug;
use smol_str::SmolStr;

use crate::morphology::Morphology;
use crate::ngram::BigramModel;
use crate::resources::CheckerResources;
use crate::sentence::Sentence;
use crate::trie::Trie;
use crate::types::Probability;

mod candidate;
mod config;
mod forced;
mod generate;

pub use candidate::{Candidate, Operator};
pub use config::CheckerConfig;

use forced::{ForcedAction, ForcedContext};

/// Sentence-level spelling correction.
pub trait SpellChecker {
    /// Produces a corrected copy of the sentence. Never fails: a word that
    /// cannot be corrected is emitted unchanged, and an empty sentence maps
    /// to an empty sentence.
    fn spell_check(&self, sentence: &Sentence) -> Sentence;
}

/// The bigram-disambiguating checker.
///
/// Immutable after construction; may be shared across threads and sentences
/// freely (the scan keeps all per-sentence state on the stack).
pub struct NgramSpellChecker<M, B>
where
    M: Morphology,
    B: BigramModel,
{
    morphology: M,
    model: B,
    resources: CheckerResources,
    trie: Option<Trie>,
    config: CheckerConfig,
}

/// The disambiguator's verdict for one scan position.
struct Decision {
    candidate: Candidate,
    /// Root carried into the next step's left context.
    root: Option<SmolStr>,
}

impl<M, B> NgramSpellChecker<M, B>
where
    M: Morphology,
    B: BigramModel,
{
    /// Builds a checker. When the resources carry a vocabulary, the trie is
    /// built here, once; it is read-only afterwards.
    pub fn new(
        morphology: M,
        model: B,
        resources: CheckerResources,
        config: CheckerConfig,
    ) -> NgramSpellChecker<M, B> {
        let trie = resources.vocabulary.as_ref().map(|words| {
            let mut trie = Trie::new();
            for word in words {
                trie.insert(word);
            }
            trie
        });
        NgramSpellChecker {
            morphology,
            model,
            resources,
            trie,
            config,
        }
    }

    /// The active configuration.
    pub fn config(&self) -> &CheckerConfig {
        &self.config
    }

    /// Context root of the word at `index`: `None` when out of range or the
    /// word does not analyze.
    fn analysis_root(&self, sentence: &Sentence, index: usize) -> Option<SmolStr> {
        self.word_root(sentence.word(index)?)
    }

    /// Context root of a resolved word, per configuration: the longest parse
    /// root, or the surface form itself when surface scoring is selected.
    fn word_root(&self, word: &str) -> Option<SmolStr> {
        if self.config.root_ngram {
            self.morphology.longest_root(word)
        } else if self.morphology.is_valid(word) {
            Some(SmolStr::new(word))
        } else {
            None
        }
    }

    /// Scoring root of a candidate's text, falling back to the surface form
    /// when no parse exists.
    fn candidate_root(&self, text: &str) -> SmolStr {
        if self.config.root_ngram {
            self.morphology
                .longest_root(text)
                .unwrap_or_else(|| SmolStr::new(text))
        } else {
            SmolStr::new(text)
        }
    }

    fn bigram(&self, left: Option<&str>, right: &str) -> Probability {
        left.map_or(0.0, |left| self.model.bigram(left, right))
    }

    fn bigram_right(&self, left: &str, right: Option<&str>) -> Probability {
        right.map_or(0.0, |right| self.model.bigram(left, right))
    }

    /// Picks the candidate maximizing `max(left score, right score)` above
    /// the threshold, defaulting to the unchanged word. Merge candidates
    /// rescore against the context one position further out, and the two
    /// halves of a split are scored against opposite neighbors.
    fn disambiguate(
        &self,
        sentence: &Sentence,
        index: usize,
        word: &str,
        candidates: &[Candidate],
        previous_root: Option<&str>,
        next_root: Option<&str>,
    ) -> Decision {
        let mut best = Candidate::no_change(word);
        let mut best_root = Some(SmolStr::new(word));
        let mut best_score = self.config.threshold;
        let sole_wins = self.config.single_candidate_wins && candidates.len() == 1;

        for candidate in candidates {
            let (score, root) = match candidate.operator {
                Operator::BackwardMerge => {
                    // The merge consumes the previous word, so the left
                    // context moves one more position back.
                    let left = if index >= 2 {
                        self.analysis_root(sentence, index - 2)
                    } else {
                        None
                    };
                    let root = self.candidate_root(candidate.text());
                    let score = self
                        .bigram(left.as_deref(), &root)
                        .max(self.bigram_right(&root, next_root));
                    (score, root)
                }
                Operator::ForwardMerge => {
                    // Symmetrically, the right context skips the consumed
                    // next word.
                    let right = self.analysis_root(sentence, index + 2);
                    let root = self.candidate_root(candidate.text());
                    let score = self
                        .bigram(previous_root, &root)
                        .max(self.bigram_right(&root, right.as_deref()));
                    (score, root)
                }
                Operator::Split => match candidate.split_halves() {
                    Some((left_half, right_half)) => {
                        let left_root = self.candidate_root(left_half);
                        let right_root = self.candidate_root(right_half);
                        let score = self
                            .bigram(previous_root, &left_root)
                            .max(self.bigram_right(&right_root, next_root));
                        (score, right_root)
                    }
                    None => continue,
                },
                _ => {
                    let root = self.candidate_root(candidate.text());
                    let score = self
                        .bigram(previous_root, &root)
                        .max(self.bigram_right(&root, next_root));
                    (score, root)
                }
            };

            if score > best_score || sole_wins {
                best = candidate.clone();
                best_root = Some(root);
                best_score = best_score.max(score);
            }
        }

        debug!(
            "disambiguated {:?} -> {:?} ({:?})",
            word, best.text, best.operator
        );
        Decision {
            candidate: best,
            root: best_root,
        }
    }
}

impl<M, B> SpellChecker for NgramSpellChecker<M, B>
where
    M: Morphology,
    B: BigramModel,
{
    fn spell_check(&self, sentence: &Sentence) -> Sentence {
        let mut result = Sentence::new();
        let mut previous_root: Option<SmolStr> = None;
        let mut root = self.analysis_root(sentence, 0);
        let mut next_root = self.analysis_root(sentence, 1);
        let mut index = 0;

        while let Some(word) = sentence.word(index) {
            // How many input words this position consumes; forward merges
            // also swallow the next word.
            let mut consumed = 1;

            let ctx = ForcedContext {
                word,
                previous_word: index
                    .checked_sub(1)
                    .and_then(|i| sentence.word(i))
                    .map(SmolStr::as_str),
                next_word: sentence.word(index + 1).map(SmolStr::as_str),
            };

            if let Some(action) = forced::check(ctx, &self.morphology, &self.resources, &self.config)
            {
                match action {
                    ForcedAction::Emit(text) => result.push(text),
                    ForcedAction::EmitTwo(first, second) => {
                        result.push(first);
                        result.push(second);
                    }
                    ForcedAction::ReplaceLast(text) => result.replace_last(text),
                    ForcedAction::MergeNext(text) => {
                        result.push(text);
                        consumed = 2;
                    }
                    ForcedAction::ReplaceLastMergeNext(text) => {
                        result.replace_last(text);
                        consumed = 2;
                    }
                }
                previous_root = result.last().and_then(|last| self.word_root(last));
            } else if root.is_some() || word.chars().count() < self.config.min_word_length {
                // Independently valid, or too short to touch: fail open.
                result.push(word.clone());
                previous_root = root.clone();
            } else {
                let candidates = generate::candidate_list(
                    &self.morphology,
                    &self.resources,
                    self.trie.as_ref(),
                    &self.config,
                    sentence,
                    index,
                );
                let decision = self.disambiguate(
                    sentence,
                    index,
                    word,
                    &candidates,
                    previous_root.as_deref(),
                    next_root.as_deref(),
                );
                match decision.candidate.operator {
                    Operator::BackwardMerge => result.replace_last(decision.candidate.text),
                    Operator::ForwardMerge => {
                        result.push(decision.candidate.text);
                        consumed = 2;
                    }
                    Operator::Split => {
                        if let Some((first, second)) = decision.candidate.split_halves() {
                            let (first, second) = (SmolStr::new(first), SmolStr::new(second));
                            result.push(first);
                            result.push(second);
                        } else {
                            result.push(decision.candidate.text.clone());
                        }
                    }
                    _ => result.push(decision.candidate.text),
                }
                previous_root = decision.root;
            }

            index += consumed;
            if consumed == 1 {
                root = next_root.take();
            } else {
                root = self.analysis_root(sentence, index);
            }
            next_root = self.analysis_root(sentence, index + 1);
        }

        result
    }
}
