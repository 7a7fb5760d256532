//! Shared fixtures: the pipeline driven end to end against in-memory
//! collaborators.

use yazim::checker::{CheckerConfig, NgramSpellChecker, SpellChecker};
use yazim::lexicon::FlatLexicon;
use yazim::ngram::BigramTable;
use yazim::resources::CheckerResources;
use yazim::sentence::Sentence;

pub type Checker = NgramSpellChecker<FlatLexicon, BigramTable>;

pub fn checker(
    lexicon: FlatLexicon,
    model: BigramTable,
    resources: CheckerResources,
    config: CheckerConfig,
) -> Checker {
    NgramSpellChecker::new(lexicon, model, resources, config)
}

/// Runs one line through the checker and joins the output back into a line.
pub fn correct(checker: &Checker, line: &str) -> String {
    checker.spell_check(&Sentence::from_line(line)).to_string()
}

/// Words every fixture sentence leans on, with their roots.
pub fn base_lexicon() -> FlatLexicon {
    let mut lexicon = FlatLexicon::new();
    for (surface, root) in [
        ("noter", "noter"),
        ("hakkında", "hak"),
        ("belgesi", "belge"),
        ("minibüs", "minibüs"),
        ("durağı", "durak"),
        ("yeni", "yeni"),
        ("sezon", "sezon"),
        ("başladı", "başla"),
        ("için", "için"),
        ("alış", "alış"),
        ("alışveriş", "alışveriş"),
        ("ekran", "ekran"),
        ("tahıl", "tahıl"),
        ("zirvesi", "zirve"),
    ] {
        lexicon.add_word(surface, root);
    }
    lexicon
}
