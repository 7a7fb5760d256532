//! End-to-end scorer-driven corrections: candidate generation plus the
//! sliding-window bigram disambiguator, with no forced tables involved.

mod common;

use smol_str::SmolStr;

use yazim::checker::{CheckerConfig, SpellChecker};
use yazim::lexicon::FlatLexicon;
use yazim::ngram::BigramTable;
use yazim::resources::CheckerResources;
use yazim::sentence::Sentence;

use common::{base_lexicon, checker, correct};

#[test]
fn single_edit_with_surface_scoring() {
    let mut model = BigramTable::new();
    model.set_bigram("noter", "hakkında", 0.5);
    let config = CheckerConfig {
        root_ngram: false,
        ..CheckerConfig::default()
    };
    let c = checker(base_lexicon(), model, CheckerResources::new(), config);
    assert_eq!(correct(&c, "noter hakkınad"), "noter hakkında");
}

#[test]
fn single_edit_with_root_scoring() {
    let mut model = BigramTable::new();
    model.set_bigram("minibüs", "durak", 0.4);
    let c = checker(
        base_lexicon(),
        model,
        CheckerResources::new(),
        CheckerConfig::default(),
    );
    assert_eq!(correct(&c, "minibü durağı"), "minibüs durağı");
}

#[test]
fn scored_forward_merge_consumes_the_next_word() {
    let mut model = BigramTable::new();
    model.set_bigram("yeni", "sezon", 0.6);
    let c = checker(
        base_lexicon(),
        model,
        CheckerResources::new(),
        CheckerConfig::default(),
    );
    let out = c.spell_check(&Sentence::from_line("yeni se zon başladı"));
    assert_eq!(out.to_string(), "yeni sezon başladı");
    assert_eq!(out.len(), 3);
}

#[test]
fn scored_backward_merge_rewrites_the_previous_output() {
    let mut model = BigramTable::new();
    model.set_bigram("alışveriş", "için", 0.3);
    let c = checker(
        base_lexicon(),
        model,
        CheckerResources::new(),
        CheckerConfig::default(),
    );
    let out = c.spell_check(&Sentence::from_line("alış veriş için"));
    assert_eq!(out.to_string(), "alışveriş için");
    assert_eq!(out.len(), 2);
}

#[test]
fn scored_split_emits_one_extra_word() {
    let mut model = BigramTable::new();
    model.set_bigram("sezon", "başla", 0.2);
    let c = checker(
        base_lexicon(),
        model,
        CheckerResources::new(),
        CheckerConfig::default(),
    );
    let out = c.spell_check(&Sentence::from_line("yenisezon başladı"));
    assert_eq!(out.to_string(), "yeni sezon başladı");
    assert_eq!(out.len(), 3);
}

#[test]
fn context_table_reaches_beyond_single_edits() {
    // "minbs" is two edits from "minibüs"; only the context source offers it.
    let mut model = BigramTable::new();
    model.set_bigram("minibüs", "durak", 0.4);
    let mut resources = CheckerResources::new();
    let mut table = hashbrown::HashMap::new();
    table.insert(
        SmolStr::new("durak"),
        vec![SmolStr::new("minibüs")],
    );
    resources.context_list = Some(table);
    let c = checker(
        base_lexicon(),
        model.clone(),
        resources,
        CheckerConfig::default(),
    );
    assert_eq!(correct(&c, "minbs durağı"), "minibüs durağı");

    // Without the table the word is beyond reach and passes through.
    let plain = checker(
        base_lexicon(),
        model,
        CheckerResources::new(),
        CheckerConfig::default(),
    );
    assert_eq!(correct(&plain, "minbs durağı"), "minbs durağı");
}

#[test]
fn trie_vocabulary_reaches_beyond_single_edits() {
    let mut lexicon = base_lexicon();
    lexicon.add_word("antibiyotik", "antibiyotik");
    lexicon.add_word("direnci", "direnç");
    let mut model = BigramTable::new();
    model.set_bigram("antibiyotik", "direnç", 0.5);
    let mut resources = CheckerResources::new();
    resources.vocabulary = Some(vec![SmolStr::new("antibiyotik")]);
    let c = checker(lexicon, model, resources, CheckerConfig::default());
    assert_eq!(correct(&c, "antibiodik direnci"), "antibiyotik direnci");
}

#[test]
fn sole_candidate_needs_the_flag_to_win_without_evidence() {
    let mut lexicon = FlatLexicon::new();
    lexicon.add_word("kalem", "kalem");

    let strict = checker(
        lexicon.clone(),
        BigramTable::new(),
        CheckerResources::new(),
        CheckerConfig::default(),
    );
    assert_eq!(correct(&strict, "kalemm"), "kalemm");

    let lenient = checker(
        lexicon,
        BigramTable::new(),
        CheckerResources::new(),
        CheckerConfig {
            single_candidate_wins: true,
            ..CheckerConfig::default()
        },
    );
    assert_eq!(correct(&lenient, "kalemm"), "kalem");
}

#[test]
fn correct_sentences_pass_through_unchanged() {
    let c = checker(
        base_lexicon(),
        BigramTable::new(),
        CheckerResources::new(),
        CheckerConfig::default(),
    );
    for line in ["noter hakkında", "yeni sezon başladı", "minibüs durağı"] {
        assert_eq!(correct(&c, line), line);
    }
}

#[test]
fn unknown_words_fail_open() {
    let c = checker(
        base_lexicon(),
        BigramTable::new(),
        CheckerResources::new(),
        CheckerConfig::default(),
    );
    assert_eq!(correct(&c, "prkfj hakkında"), "prkfj hakkında");
}

#[test]
fn empty_sentence_maps_to_empty() {
    let c = checker(
        base_lexicon(),
        BigramTable::new(),
        CheckerResources::new(),
        CheckerConfig::default(),
    );
    assert!(c.spell_check(&Sentence::new()).is_empty());
    assert_eq!(correct(&c, ""), "");
}

#[test]
fn correction_is_deterministic_and_idempotent() {
    let mut model = BigramTable::new();
    model.set_bigram("noter", "hak", 0.5);
    let c = checker(
        base_lexicon(),
        model,
        CheckerResources::new(),
        CheckerConfig::default(),
    );
    let first = correct(&c, "noter hakkınad");
    for _ in 0..3 {
        assert_eq!(correct(&c, "noter hakkınad"), first);
    }
    assert_eq!(correct(&c, &first), first);
}
