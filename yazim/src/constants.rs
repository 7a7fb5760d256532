//! Process-wide immutable Turkish language tables.
//!
//! Loaded once into the binary, shared by reference, never mutated.

use phf::{phf_set, Set};

/// The 29 lowercase Turkish letters, used as the substitution and insertion
/// alphabet of the edit-based candidate generator.
pub const LOWERCASE_LETTERS: &[char] = &[
    'a', 'b', 'c', 'ç', 'd', 'e', 'f', 'g', 'ğ', 'h', 'ı', 'i', 'j', 'k', 'l', 'm', 'n', 'o', 'ö',
    'p', 'r', 's', 'ş', 't', 'u', 'ü', 'v', 'y', 'z',
];

/// Back vowels, selecting the "da" locative allomorph.
pub const BACK_VOWELS: &[char] = &['a', 'ı', 'o', 'u'];

/// Front vowels, selecting the "de" locative allomorph.
pub const FRONT_VOWELS: &[char] = &['e', 'i', 'ö', 'ü'];

/// Hyphen shapes accepted by the forced hyphen-merge rule.
pub const HYPHENS: &[char] = &['-', '–', '—'];

/// Bare adjectival suffix allomorphs that merge onto a preceding numeral
/// ("4 lı" → "4'lü").
pub const LI_SUFFIXES: &[&str] = &["lı", "li", "lu", "lü"];

/// As [`LI_SUFFIXES`], for the -lık family ("10 lük" → "10'luk").
pub const LIK_SUFFIXES: &[&str] = &["lık", "lik", "luk", "lük"];

/// Interrogative particle suffixes recognized by the question-suffix split,
/// longest first so suffix stripping prefers the most specific match.
pub const QUESTION_SUFFIXES: &[&str] = &[
    "mısınız", "misiniz", "musunuz", "müsünüz", "mıydı", "miydi", "muydu", "müydü", "mıdır",
    "midir", "mudur", "müdür", "mısın", "misin", "musun", "müsün", "mıyım", "miyim", "muyum",
    "müyüm", "mıyız", "miyiz", "muyuz", "müyüz", "mı", "mi", "mu", "mü",
];

/// Unit shortcuts that may be written glued to a preceding numeral
/// ("24inç", "9kg", "10mhz").
pub static SHORTCUTS: Set<&'static str> = phf_set! {
    "cc", "cm", "cm2", "cm3", "ft", "g", "gb", "gbit", "gbps", "ghz", "gr", "gram", "hp", "hz",
    "inc", "inch", "inç", "kbit", "kcal", "kg", "kva", "kw", "kwh", "lb", "litre", "lt", "m2",
    "m3", "mah", "mb", "mbit", "mbps", "metre", "mg", "mhz", "ml", "mm", "mp", "ms", "mt", "mv",
    "ohm", "oz", "ppm", "rpm", "tb", "tl", "va", "volt", "watt",
};

/// Whether `ch` is a Turkish vowel (either harmony class).
pub fn is_vowel(ch: char) -> bool {
    BACK_VOWELS.contains(&ch) || FRONT_VOWELS.contains(&ch)
}

/// The last vowel of `word`, scanning the surface form right to left.
pub fn last_vowel(word: &str) -> Option<char> {
    word.chars().rev().find(|ch| is_vowel(crate::case::lower_char(*ch)))
}

/// Whether a character may take part in deletion, substitution and insertion
/// edits. Covers the Turkish alphabet plus q/w/x, which absorb foreign
/// spellings of loanwords.
pub fn is_edit_eligible(ch: char) -> bool {
    let lower = crate::case::lower_char(ch);
    LOWERCASE_LETTERS.contains(&lower) || matches!(lower, 'q' | 'w' | 'x')
}
