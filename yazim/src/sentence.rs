//! Tokenized sentences and the corrected output buffer.

use std::fmt;

use smol_str::SmolStr;

/// An ordered sequence of word tokens in linear reading order.
///
/// Input sentences are read positionally by the scan. The corrected output is
/// built as a brand-new `Sentence`; the only mutation ever applied to already
/// emitted output is [`Sentence::replace_last`], the backward-merge splice.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Sentence {
    words: Vec<SmolStr>,
}

impl Sentence {
    /// An empty sentence.
    pub fn new() -> Sentence {
        Sentence { words: vec![] }
    }

    /// Builds a sentence from pre-tokenized words.
    pub fn from_words<I, S>(words: I) -> Sentence
    where
        I: IntoIterator<Item = S>,
        S: Into<SmolStr>,
    {
        Sentence {
            words: words.into_iter().map(Into::into).collect(),
        }
    }

    /// Splits a line on whitespace. Proper tokenization is the caller's
    /// concern; this is only a convenience for already word-segmented text.
    pub fn from_line(line: &str) -> Sentence {
        Sentence::from_words(line.split_whitespace())
    }

    /// The word at `index`, if in range.
    pub fn word(&self, index: usize) -> Option<&SmolStr> {
        self.words.get(index)
    }

    /// All words in order.
    pub fn words(&self) -> &[SmolStr] {
        &self.words
    }

    /// Number of words.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether the sentence has no words.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// The most recently appended word.
    pub fn last(&self) -> Option<&SmolStr> {
        self.words.last()
    }

    /// Appends a word.
    pub fn push(&mut self, word: impl Into<SmolStr>) {
        self.words.push(word.into());
    }

    /// Rewrites the last appended word in place.
    ///
    /// This is the single permitted mutation of emitted output, used when a
    /// backward merge retroactively joins the previous word with the current
    /// one. Appends when the sentence is still empty.
    pub fn replace_last(&mut self, word: impl Into<SmolStr>) {
        match self.words.last_mut() {
            Some(last) => *last = word.into(),
            None => self.words.push(word.into()),
        }
    }
}

impl fmt::Display for Sentence {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for (i, word) in self.words.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            f.write_str(word)?;
        }
        Ok(())
    }
}
