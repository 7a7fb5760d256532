//! Deterministic forced-correction rules.
//!
//! Run before any probabilistic reasoning, in a fixed order that existing
//! corpora depend on: misspell lookup, backward merges, forward merges, then
//! the split family. The first rule that fires fully determines the output
//! for the current word(s) and bypasses candidate scoring.

use log::debug;
use smol_str::SmolStr;

use crate::case::{is_all_digits, is_all_letters, lower_case};
use crate::constants::{
    BACK_VOWELS, HYPHENS, LIK_SUFFIXES, LI_SUFFIXES, QUESTION_SUFFIXES, SHORTCUTS,
};
use crate::morphology::Morphology;
use crate::resources::CheckerResources;

use super::config::CheckerConfig;

/// The words surrounding the current scan position, read from the input
/// sentence.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ForcedContext<'a> {
    pub(crate) word: &'a str,
    pub(crate) previous_word: Option<&'a str>,
    pub(crate) next_word: Option<&'a str>,
}

/// Splice instruction produced by a forced rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum ForcedAction {
    /// Emit one word in place of the current word.
    Emit(SmolStr),
    /// Emit two words in place of the current word.
    EmitTwo(SmolStr, SmolStr),
    /// Rewrite the last emitted output word; the current word is consumed.
    ReplaceLast(SmolStr),
    /// Emit one word covering the current and the next input word.
    MergeNext(SmolStr),
    /// Rewrite the last emitted output word and also consume the next input
    /// word (hyphen merge).
    ReplaceLastMergeNext(SmolStr),
}

/// Runs the battery in order; `Some` short-circuits the rest of the pipeline
/// for this position.
pub(crate) fn check<M: Morphology>(
    ctx: ForcedContext,
    morphology: &M,
    resources: &CheckerResources,
    config: &CheckerConfig,
) -> Option<ForcedAction> {
    let action = misspell(ctx, morphology)
        .or_else(|| backward_merge(ctx, resources))
        .or_else(|| suffix_merge(ctx, morphology))
        .or_else(|| forward_merge(ctx, resources))
        .or_else(|| hyphen_merge(ctx, morphology))
        .or_else(|| table_split(ctx, resources))
        .or_else(|| shortcut_split(ctx))
        .or_else(|| de_da_split(ctx, morphology, config))
        .or_else(|| question_suffix_split(ctx, morphology, config));
    if let Some(action) = &action {
        debug!("forced rule fired for {:?}: {:?}", ctx.word, action);
    }
    action
}

fn misspell<M: Morphology>(ctx: ForcedContext, morphology: &M) -> Option<ForcedAction> {
    morphology.correct_form(ctx.word).map(ForcedAction::Emit)
}

fn backward_merge(ctx: ForcedContext, resources: &CheckerResources) -> Option<ForcedAction> {
    let previous = ctx.previous_word?;
    let key = format!("{} {}", previous, ctx.word);
    resources
        .merged_words
        .get(key.as_str())
        .cloned()
        .map(ForcedAction::ReplaceLast)
}

/// Bare adjectival suffix after a numeral: "4 lı" becomes "4'lü", probing the
/// allomorph family until one joined form analyzes.
fn suffix_merge<M: Morphology>(ctx: ForcedContext, morphology: &M) -> Option<ForcedAction> {
    let lowered = lower_case(ctx.word);
    let family: &[&str] = if LI_SUFFIXES.contains(&lowered.as_str()) {
        LI_SUFFIXES
    } else if LIK_SUFFIXES.contains(&lowered.as_str()) {
        LIK_SUFFIXES
    } else {
        return None;
    };
    let previous = ctx.previous_word?;
    if !is_all_digits(previous) {
        return None;
    }
    for suffix in family {
        let joined = format!("{}'{}", previous, suffix);
        if morphology.is_valid(&joined) {
            return Some(ForcedAction::ReplaceLast(joined.into()));
        }
    }
    None
}

fn forward_merge(ctx: ForcedContext, resources: &CheckerResources) -> Option<ForcedAction> {
    let next = ctx.next_word?;
    let key = format!("{} {}", ctx.word, next);
    resources
        .merged_words
        .get(key.as_str())
        .cloned()
        .map(ForcedAction::MergeNext)
}

/// A lone hyphen (or dash) between two alphabetic words whose hyphenated
/// concatenation analyzes: "play - off" becomes "play-off".
fn hyphen_merge<M: Morphology>(ctx: ForcedContext, morphology: &M) -> Option<ForcedAction> {
    let mut chars = ctx.word.chars();
    match (chars.next(), chars.next()) {
        (Some(ch), None) if HYPHENS.contains(&ch) => {}
        _ => return None,
    }
    let previous = ctx.previous_word?;
    let next = ctx.next_word?;
    if !is_all_letters(previous) || !is_all_letters(next) {
        return None;
    }
    let joined = format!("{}-{}", previous, next);
    if morphology.is_valid(&joined) {
        Some(ForcedAction::ReplaceLastMergeNext(joined.into()))
    } else {
        None
    }
}

fn table_split(ctx: ForcedContext, resources: &CheckerResources) -> Option<ForcedAction> {
    let replacement = resources.split_words.get(ctx.word)?;
    let (first, second) = replacement.split_once(' ')?;
    Some(ForcedAction::EmitTwo(first.into(), second.into()))
}

/// A numeral glued to a unit shortcut: "24inç" becomes "24 inç".
fn shortcut_split(ctx: ForcedContext) -> Option<ForcedAction> {
    let rest = strip_leading_number(ctx.word)?;
    if SHORTCUTS.contains(lower_case(rest).as_str()) {
        let number = &ctx.word[..ctx.word.len() - rest.len()];
        Some(ForcedAction::EmitTwo(number.into(), rest.into()))
    } else {
        None
    }
}

/// Splits off a trailing "da"/"de" locative clitic when the whole word does
/// not analyze but the stem does, reattaching the allomorph demanded by the
/// stem's vowel harmony. Proper-noun stems prefer the apostrophe-joined form.
fn de_da_split<M: Morphology>(
    ctx: ForcedContext,
    morphology: &M,
    config: &CheckerConfig,
) -> Option<ForcedAction> {
    if !config.suffix_splits {
        return None;
    }
    let lowered = lower_case(ctx.word);
    if !lowered.ends_with("da") && !lowered.ends_with("de") {
        return None;
    }
    if lowered.chars().count() <= 2 || morphology.is_valid(ctx.word) {
        return None;
    }
    let stem = strip_tail_chars(ctx.word, 2)?;
    if !morphology.is_valid(stem) {
        return None;
    }
    let root = morphology.longest_root(stem)?;
    let entry = morphology.entry(&root).unwrap_or_default();
    let written = &ctx.word[stem.len()..];
    let suffix = harmonized_locative(stem, entry.obeys_vowel_harmony).unwrap_or(written);
    if entry.is_proper_noun {
        let joined = format!("{}'{}", stem, suffix);
        if morphology.is_valid(&joined) {
            return Some(ForcedAction::Emit(joined.into()));
        }
        return Some(ForcedAction::EmitTwo(stem.into(), "de".into()));
    }
    Some(ForcedAction::EmitTwo(stem.into(), suffix.into()))
}

/// Splits a glued interrogative particle ("geliyormusun" → "geliyor musun")
/// when the stem analyzes and is not a proper-noun or code entry.
fn question_suffix_split<M: Morphology>(
    ctx: ForcedContext,
    morphology: &M,
    config: &CheckerConfig,
) -> Option<ForcedAction> {
    if !config.suffix_splits || morphology.is_valid(ctx.word) {
        return None;
    }
    let lowered = lower_case(ctx.word);
    let suffix = QUESTION_SUFFIXES
        .iter()
        .find(|suffix| lowered.ends_with(*suffix) && lowered.chars().count() > suffix.chars().count())?;
    let stem = strip_tail_chars(ctx.word, suffix.chars().count())?;
    if !morphology.is_valid(stem) {
        return None;
    }
    let root = morphology.longest_root(stem)?;
    if let Some(entry) = morphology.entry(&root) {
        if entry.is_proper_noun || entry.is_code {
            return None;
        }
    }
    let written = &ctx.word[stem.len()..];
    Some(ForcedAction::EmitTwo(stem.into(), written.into()))
}

/// The locative allomorph required by the stem's last vowel, inverted for
/// entries flagged as not obeying vowel harmony. `None` for vowelless stems.
fn harmonized_locative(stem: &str, obeys_vowel_harmony: bool) -> Option<&'static str> {
    let vowel = crate::constants::last_vowel(&lower_case(stem))?;
    let back = BACK_VOWELS.contains(&vowel);
    Some(match (back, obeys_vowel_harmony) {
        (true, true) | (false, false) => "da",
        (true, false) | (false, true) => "de",
    })
}

/// Drops the last `n` characters, `None` when nothing would remain.
fn strip_tail_chars(word: &str, n: usize) -> Option<&str> {
    let cut = word.char_indices().rev().nth(n - 1).map(|(i, _)| i)?;
    if cut == 0 {
        None
    } else {
        Some(&word[..cut])
    }
}

/// The tail after a leading numeral (optionally with one decimal separator),
/// `None` when the word does not start with a digit or has no tail.
fn strip_leading_number(word: &str) -> Option<&str> {
    let mut chars = word.char_indices().peekable();
    let mut seen_digit = false;
    let mut seen_separator = false;
    while let Some(&(i, ch)) = chars.peek() {
        if ch.is_ascii_digit() {
            seen_digit = true;
            chars.next();
        } else if matches!(ch, '.' | ',') && seen_digit && !seen_separator {
            // Accept the separator only when digits follow it.
            let mut lookahead = chars.clone();
            lookahead.next();
            match lookahead.peek() {
                Some(&(_, next)) if next.is_ascii_digit() => {
                    seen_separator = true;
                    chars.next();
                }
                _ => return if i > 0 { Some(&word[i..]) } else { None },
            }
        } else {
            return if seen_digit && i > 0 && i < word.len() {
                Some(&word[i..])
            } else {
                None
            };
        }
    }
    None
}
