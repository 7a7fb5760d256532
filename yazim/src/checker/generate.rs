//! Candidate generation for a misspelled word.
//!
//! Five sources, each filtered for morphological validity: single-character
//! edits, merges with the adjacent input words, bounded two-way splits,
//! context-table substitutions of neighboring roots, and the bounded-penalty
//! trie search. The union is deduplicated preserving first-seen order.

use std::collections::VecDeque;

use hashbrown::{HashMap, HashSet};
use itertools::Itertools;
use smol_str::SmolStr;

use crate::case::lower_case;
use crate::constants::{is_edit_eligible, LOWERCASE_LETTERS};
use crate::morphology::Morphology;
use crate::resources::CheckerResources;
use crate::sentence::Sentence;
use crate::trie::Trie;
use crate::types::Penalty;

use super::candidate::{Candidate, Operator, TrieCandidate};
use super::config::CheckerConfig;

/// All applicable candidates for the word at `index`, duplicates removed.
pub(crate) fn candidate_list<M: Morphology>(
    morphology: &M,
    resources: &CheckerResources,
    trie: Option<&Trie>,
    config: &CheckerConfig,
    sentence: &Sentence,
    index: usize,
) -> Vec<Candidate> {
    let word = match sentence.word(index) {
        Some(word) => word,
        None => return vec![],
    };

    let mut candidates = merged_candidates(morphology, sentence, index);
    candidates.extend(edit_candidates(morphology, word));
    candidates.extend(split_candidates(morphology, word, config.min_split_length));
    if let Some(table) = resources.context_list.as_ref() {
        candidates.extend(context_candidates(morphology, table, sentence, index));
    }
    if let Some(trie) = trie {
        candidates.extend(trie_candidates(trie, word, config.max_trie_penalty));
    }
    candidates.into_iter().unique().collect()
}

/// Concatenations with the previous and next input word, each kept only when
/// the merged form analyzes. A forward candidate textually identical to the
/// backward candidate is dropped to avoid scoring it twice.
fn merged_candidates<M: Morphology>(
    morphology: &M,
    sentence: &Sentence,
    index: usize,
) -> Vec<Candidate> {
    let word = match sentence.word(index) {
        Some(word) => word,
        None => return vec![],
    };
    let mut out = vec![];
    let mut backward_text: Option<SmolStr> = None;

    if index > 0 {
        if let Some(previous) = sentence.word(index - 1) {
            let joined = SmolStr::from(format!("{}{}", previous, word));
            if morphology.is_valid(&joined) {
                backward_text = Some(joined.clone());
                out.push(Candidate::new(joined, Operator::BackwardMerge));
            }
        }
    }
    if let Some(next) = sentence.word(index + 1) {
        let joined = SmolStr::from(format!("{}{}", word, next));
        if morphology.is_valid(&joined) && backward_text.as_ref() != Some(&joined) {
            out.push(Candidate::new(joined, Operator::ForwardMerge));
        }
    }
    out
}

/// Every string within one edit of `word`: adjacent transpositions at all
/// positions, and deletions, substitutions and insertions at alphabet-
/// eligible positions. Raw edits that do not analyze are rescued through the
/// exact-misspelling table or dropped.
fn edit_candidates<M: Morphology>(morphology: &M, word: &str) -> Vec<Candidate> {
    raw_edits(word)
        .into_iter()
        .filter_map(|text| {
            if morphology.is_valid(&text) {
                return Some(Candidate::new(text, Operator::SpellCheck));
            }
            let corrected = morphology.correct_form(&text)?;
            if morphology.is_valid(&corrected) {
                Some(Candidate::new(corrected, Operator::MisspelledReplace))
            } else {
                None
            }
        })
        .collect()
}

fn raw_edits(word: &str) -> Vec<String> {
    let chars: Vec<char> = word.chars().collect();
    let mut out = vec![];

    for i in 0..chars.len() {
        if i + 1 < chars.len() {
            let mut swapped = chars.clone();
            swapped.swap(i, i + 1);
            out.push(swapped.into_iter().collect());
        }
        if is_edit_eligible(chars[i]) {
            let mut deleted = chars.clone();
            deleted.remove(i);
            out.push(deleted.into_iter().collect());

            for &letter in LOWERCASE_LETTERS {
                let mut replaced = chars.clone();
                replaced[i] = letter;
                out.push(replaced.into_iter().collect());

                let mut inserted = chars.clone();
                inserted.insert(i, letter);
                out.push(inserted.into_iter().collect());
            }
        }
    }
    if chars.last().copied().map_or(false, is_edit_eligible) {
        for &letter in LOWERCASE_LETTERS {
            let mut appended = chars.clone();
            appended.push(letter);
            out.push(appended.into_iter().collect());
        }
    }
    out
}

/// Two-way splits with at least `min_length` characters on each side, kept
/// when both halves analyze.
fn split_candidates<M: Morphology>(
    morphology: &M,
    word: &str,
    min_length: usize,
) -> Vec<Candidate> {
    let chars: Vec<char> = word.chars().collect();
    let mut out = vec![];
    if chars.len() < min_length * 2 {
        return out;
    }
    for i in min_length..=chars.len() - min_length {
        let left: String = chars[..i].iter().collect();
        let right: String = chars[i..].iter().collect();
        if morphology.is_valid(&left) && morphology.is_valid(&right) {
            out.push(Candidate::new(
                format!("{} {}", left, right),
                Operator::Split,
            ));
        }
    }
    out
}

/// Neighbor words of every other root in the sentence, filtered by a
/// length-scaled Damerau–Levenshtein distance against the misspelled word:
/// 1 edit under five characters, 2 under seven, 3 otherwise.
fn context_candidates<M: Morphology>(
    morphology: &M,
    table: &HashMap<SmolStr, Vec<SmolStr>>,
    sentence: &Sentence,
    index: usize,
) -> Vec<Candidate> {
    let word = match sentence.word(index) {
        Some(word) => word,
        None => return vec![],
    };
    let mut seen: HashSet<SmolStr> = HashSet::new();
    let mut out = vec![];

    for (i, other) in sentence.words().iter().enumerate() {
        if i == index {
            continue;
        }
        let root = match morphology.longest_root(other) {
            Some(root) => root,
            None => continue,
        };
        let neighbors = match table.get(&root) {
            Some(neighbors) => neighbors,
            None => continue,
        };
        for neighbor in neighbors {
            if !seen.insert(neighbor.clone()) {
                continue;
            }
            let allowed = allowed_distance(neighbor.chars().count());
            if strsim::damerau_levenshtein(word, neighbor) <= allowed {
                out.push(Candidate::new(neighbor.clone(), Operator::ContextBased));
            }
        }
    }
    out
}

fn allowed_distance(length: usize) -> usize {
    if length < 5 {
        1
    } else if length < 7 {
        2
    } else {
        3
    }
}

/// Frontier search over the vocabulary trie bounded by `max_penalty`. Each
/// step either matches the next input character for free, or spends one
/// penalty on a substitution, an input skip (deletion) or a trie-only
/// advance (insertion). Terminal nodes reached with the input exhausted
/// yield candidates, cheapest first.
pub(crate) fn trie_candidates(trie: &Trie, word: &str, max_penalty: Penalty) -> Vec<Candidate> {
    let target: Vec<char> = lower_case(word).chars().collect();
    if target.is_empty() {
        return vec![];
    }

    let mut found: HashMap<SmolStr, Penalty> = HashMap::new();
    let mut frontier = VecDeque::new();
    frontier.push_back((trie.root(), TrieCandidate::start()));

    while let Some((node, branch)) = frontier.pop_front() {
        let budget_left = branch.current_penalty + 1.0 <= max_penalty;

        if branch.current_index == target.len() {
            if node.is_word() {
                let text = SmolStr::from(branch.text.as_str());
                let entry = found.entry(text).or_insert(branch.current_penalty);
                if *entry > branch.current_penalty {
                    *entry = branch.current_penalty;
                }
            }
            if budget_left {
                for (ch, child) in node.children() {
                    frontier.push_back((child, branch.extended(ch, false, 1.0)));
                }
            }
            continue;
        }

        let current = target[branch.current_index];
        if let Some(child) = node.child(current) {
            frontier.push_back((child, branch.extended(current, true, 0.0)));
        }
        if budget_left {
            frontier.push_back((node, branch.skipped()));
            for (ch, child) in node.children() {
                if ch != current {
                    frontier.push_back((child, branch.extended(ch, true, 1.0)));
                }
                frontier.push_back((child, branch.extended(ch, false, 1.0)));
            }
        }
    }

    found.remove(lower_case(word).as_str());
    found
        .into_iter()
        .sorted_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal).then_with(|| a.0.cmp(&b.0)))
        .map(|(text, _)| Candidate::new(text, Operator::TrieBased))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexicon::FlatLexicon;

    fn edit_distance_one(a: &str, b: &str) -> bool {
        strsim::damerau_levenshtein(a, b) == 1
    }

    #[test]
    fn damerau_levenshtein_baseline() {
        assert_eq!(strsim::damerau_levenshtein("", ""), 0);
        assert_eq!(strsim::damerau_levenshtein("durak", "durak"), 0);
        assert_eq!(strsim::damerau_levenshtein("ab", "ba"), 1);
        assert_eq!(strsim::damerau_levenshtein("çamaşır", "çamşaır"), 1);
    }

    #[test]
    fn raw_edits_are_all_single_edits() {
        for edit in raw_edits("çamşaır") {
            assert!(
                edit_distance_one("çamşaır", &edit) || edit == "çamşaır",
                "{:?} is not within one edit",
                edit
            );
        }
    }

    #[test]
    fn raw_edits_cover_the_four_operations() {
        let edits = raw_edits("minibü");
        assert!(edits.contains(&"minibüs".to_string())); // insertion at end
        assert!(edits.contains(&"inibü".to_string())); // deletion
        assert!(edits.contains(&"münibü".to_string())); // substitution
        assert!(edits.contains(&"imnibü".to_string())); // transposition
    }

    #[test]
    fn digits_are_not_edited() {
        // Only the transposition touches the numeral positions.
        for edit in raw_edits("42") {
            assert_eq!(edit, "24");
        }
    }

    #[test]
    fn edit_candidates_rescue_via_misspelling_table() {
        let mut lex = FlatLexicon::new();
        lex.add_correction("şleer", "şeyler");
        lex.add_word("şeyler", "şey");
        let candidates = edit_candidates(&lex, "şleeri");
        assert!(candidates
            .iter()
            .any(|c| c.text() == "şeyler" && c.operator == Operator::MisspelledReplace));
    }

    #[test]
    fn split_candidates_respect_minimum_halves() {
        let mut lex = FlatLexicon::new();
        lex.add_word("yalı", "yalı");
        lex.add_word("çapkını", "çapkın");
        let out = split_candidates(&lex, "yalıçapkını", 4);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].text(), "yalı çapkını");
        assert!(split_candidates(&lex, "yalıçap", 4).is_empty());
    }

    #[test]
    fn forward_merge_identical_to_backward_is_dropped() {
        let mut lex = FlatLexicon::new();
        lex.add_word("aaaa", "aaaa");
        let sentence = Sentence::from_line("aa aa aa");
        let out = merged_candidates(&lex, &sentence, 1);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].operator, Operator::BackwardMerge);
    }

    #[test]
    fn context_candidates_filter_by_scaled_distance() {
        let mut lex = FlatLexicon::new();
        lex.add_word("durağı", "durak");
        let mut table = HashMap::new();
        table.insert(
            SmolStr::new("durak"),
            vec![SmolStr::new("minibüs"), SmolStr::new("tren")],
        );
        let sentence = Sentence::from_line("minibs durağı");
        let out = context_candidates(&lex, &table, &sentence, 0);
        // "minibüs" (7 chars, distance 1 ≤ 3) passes; "tren" (4 chars,
        // distance > 1) does not.
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].text(), "minibüs");
        assert_eq!(out[0].operator, Operator::ContextBased);
    }

    #[test]
    fn trie_candidates_stay_within_budget() {
        let mut trie = Trie::new();
        trie.insert("antibiyotik");
        trie.insert("antika");
        let out = trie_candidates(&trie, "antibiodik", 2.0);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].text(), "antibiyotik");
        assert!(trie_candidates(&trie, "antibiodik", 1.0).is_empty());
    }

    #[test]
    fn trie_candidates_exclude_the_word_itself() {
        let mut trie = Trie::new();
        trie.insert("anti");
        let out = trie_candidates(&trie, "anti", 2.0);
        assert!(out.iter().all(|c| c.text() != "anti"));
    }

    #[test]
    fn trie_candidates_cheapest_first() {
        let mut trie = Trie::new();
        trie.insert("durak");
        trie.insert("dudak");
        let out = trie_candidates(&trie, "duram", 2.0);
        assert_eq!(out[0].text(), "durak"); // one substitution beats two
        assert!(out.iter().any(|c| c.text() == "dudak"));
    }
}
