//! Prefix tree over the correction vocabulary.
//!
//! Built once at checker construction from a fixed word list and read-only
//! afterwards. Words are stored case-folded (Turkish lowering), so lookups
//! fold their argument the same way. Absence is a normal negative result,
//! never an error.

use hashbrown::HashMap;

use crate::case::{lower_case, lower_char};

/// One node of the [`Trie`]: exclusive ownership of its children, plus a flag
/// marking the end of a complete vocabulary entry.
#[derive(Debug, Default)]
pub struct TrieNode {
    children: HashMap<char, TrieNode>,
    is_word: bool,
}

impl TrieNode {
    /// The child reached over `ch`, if any.
    pub fn child(&self, ch: char) -> Option<&TrieNode> {
        self.children.get(&ch)
    }

    /// Whether this node terminates a vocabulary entry.
    pub fn is_word(&self) -> bool {
        self.is_word
    }

    pub(crate) fn children(&self) -> impl Iterator<Item = (char, &TrieNode)> {
        self.children.iter().map(|(&ch, node)| (ch, node))
    }
}

/// Prefix tree supporting exact membership and prefix queries.
#[derive(Debug, Default)]
pub struct Trie {
    root: TrieNode,
}

impl Trie {
    /// An empty trie.
    pub fn new() -> Trie {
        Trie::default()
    }

    /// Inserts a word, creating nodes per character. Idempotent.
    pub fn insert(&mut self, word: &str) {
        let mut node = &mut self.root;
        for ch in word.chars().map(lower_char) {
            node = node.children.entry(ch).or_default();
        }
        node.is_word = true;
    }

    /// Case-folded exact membership.
    pub fn contains(&self, word: &str) -> bool {
        self.node(word).map_or(false, TrieNode::is_word)
    }

    /// Whether any vocabulary entry starts with `prefix`, terminal or not.
    pub fn has_prefix(&self, prefix: &str) -> bool {
        self.node(prefix).is_some()
    }

    pub(crate) fn root(&self) -> &TrieNode {
        &self.root
    }

    fn node(&self, word: &str) -> Option<&TrieNode> {
        let mut node = &self.root;
        for ch in lower_case(word).chars() {
            node = node.child(ch)?;
        }
        Some(node)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Trie {
        let mut trie = Trie::new();
        for word in ["antibiyotik", "anti", "durgunluk", "İstanbul"] {
            trie.insert(word);
        }
        trie
    }

    #[test]
    fn membership_and_prefixes() {
        let trie = sample();
        assert!(trie.contains("antibiyotik"));
        assert!(trie.contains("anti"));
        assert!(!trie.contains("antibiyoti"));
        assert!(trie.has_prefix("antibiyoti"));
        assert!(!trie.has_prefix("antx"));
    }

    #[test]
    fn lookups_fold_turkish_case() {
        let trie = sample();
        assert!(trie.contains("istanbul"));
        assert!(trie.contains("İSTANBUL"));
        // ASCII I folds to dotless ı, which is a different word entirely.
        assert!(!trie.contains("ISTANBUL"));
    }

    #[test]
    fn insert_is_idempotent() {
        let mut trie = sample();
        trie.insert("anti");
        trie.insert("anti");
        assert!(trie.contains("anti"));
        assert!(trie.contains("antibiyotik"));
    }
}
