//! Flat-file lexicon implementing the [`Morphology`] contract.
//!
//! One parse per surface form is enough for deployments without a full
//! analyzer, and for driving the pipeline in tests. Keys are stored
//! case-folded with Turkish lowering.

use std::path::Path;

use hashbrown::HashMap;
use smol_str::SmolStr;

use crate::case::lower_case;
use crate::morphology::{DictionaryEntry, Morphology, Parse};
use crate::resources::{read_lines, ResourceError};

/// Lexicon backed by `lexicon.txt` (`surface root [flags]`, where flags are
/// any of `p` proper noun, `c` code entry, `n` no vowel harmony) and
/// `misspellings.txt` (`misspelled corrected`).
#[derive(Debug, Clone, Default)]
pub struct FlatLexicon {
    surfaces: HashMap<SmolStr, SmolStr>,
    entries: HashMap<SmolStr, DictionaryEntry>,
    corrections: HashMap<SmolStr, SmolStr>,
}

impl FlatLexicon {
    /// An empty lexicon in which nothing analyzes.
    pub fn new() -> FlatLexicon {
        FlatLexicon::default()
    }

    /// Loads `lexicon.txt` and `misspellings.txt` from `dir`. Both files are
    /// required; a partially loaded lexicon silently miscorrects.
    pub fn from_dir(dir: &Path) -> Result<FlatLexicon, ResourceError> {
        let mut lexicon = FlatLexicon::new();

        let lexicon_path = dir.join("lexicon.txt");
        for (lineno, line) in read_lines(&lexicon_path)? {
            let mut parts = line.split_whitespace();
            match (parts.next(), parts.next(), parts.next(), parts.next()) {
                (Some(surface), Some(root), None, None) => lexicon.add_word(surface, root),
                (Some(surface), Some(root), Some(flags), None) => {
                    let mut entry = DictionaryEntry::default();
                    for flag in flags.chars() {
                        match flag {
                            'p' => entry.is_proper_noun = true,
                            'c' => entry.is_code = true,
                            'n' => entry.obeys_vowel_harmony = false,
                            _ => {
                                return Err(ResourceError::Malformed {
                                    path: lexicon_path.clone(),
                                    line: lineno,
                                    text: line.clone(),
                                })
                            }
                        }
                    }
                    lexicon.add_word_with(surface, root, entry);
                }
                _ => {
                    return Err(ResourceError::Malformed {
                        path: lexicon_path.clone(),
                        line: lineno,
                        text: line,
                    })
                }
            }
        }

        let misspellings_path = dir.join("misspellings.txt");
        for (lineno, line) in read_lines(&misspellings_path)? {
            let mut parts = line.split_whitespace();
            match (parts.next(), parts.next(), parts.next()) {
                (Some(wrong), Some(right), None) => lexicon.add_correction(wrong, right),
                _ => {
                    return Err(ResourceError::Malformed {
                        path: misspellings_path.clone(),
                        line: lineno,
                        text: line,
                    })
                }
            }
        }

        Ok(lexicon)
    }

    /// Adds a valid surface form with its root. Dictionary flags already
    /// recorded for the root are kept; a new root gets the defaults.
    pub fn add_word(&mut self, surface: &str, root: &str) {
        self.surfaces.insert(lower_case(surface), root.into());
        self.entries.entry(lower_case(root)).or_default();
    }

    /// Adds a valid surface form with explicit dictionary flags for its root.
    pub fn add_word_with(&mut self, surface: &str, root: &str, entry: DictionaryEntry) {
        self.surfaces.insert(lower_case(surface), root.into());
        self.entries.insert(lower_case(root), entry);
    }

    /// Adds an exact-misspelling correction pair.
    pub fn add_correction(&mut self, wrong: &str, right: &str) {
        self.corrections.insert(lower_case(wrong), right.into());
    }
}

impl Morphology for FlatLexicon {
    fn analyze(&self, surface: &str) -> Vec<Parse> {
        match self.surfaces.get(&lower_case(surface)) {
            Some(root) => vec![Parse::new(root.clone())],
            None => vec![],
        }
    }

    fn correct_form(&self, surface: &str) -> Option<SmolStr> {
        self.corrections.get(&lower_case(surface)).cloned()
    }

    fn entry(&self, word: &str) -> Option<DictionaryEntry> {
        self.entries.get(&lower_case(word)).copied()
    }
}
