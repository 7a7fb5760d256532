//! Turkish-aware case folding and character-class helpers.
//!
//! Standard Unicode lowercasing maps `I` to `i`, which is wrong for Turkish:
//! dotless `I` lowers to `ı` and dotted `İ` lowers to `i`. Every lookup that
//! case-folds (trie membership, lexicon keys) goes through these helpers.

use smol_str::SmolStr;
use unic_ucd_category::GeneralCategory;

/// Lowers a single character with Turkish i-handling.
#[inline(always)]
pub fn lower_char(ch: char) -> char {
    match ch {
        'I' => 'ı',
        'İ' => 'i',
        _ => ch.to_lowercase().next().unwrap_or(ch),
    }
}

/// Lowers a whole surface form with Turkish i-handling.
#[inline(always)]
pub fn lower_case(s: &str) -> SmolStr {
    s.chars().map(lower_char).collect::<SmolStr>()
}

/// Whether the token is entirely ASCII digits (numeral test of the forced
/// digit-suffix merge).
pub fn is_all_digits(s: &str) -> bool {
    !s.is_empty() && s.chars().all(|c| c.is_ascii_digit())
}

/// Whether the token consists of Unicode letters only.
pub fn is_all_letters(s: &str) -> bool {
    !s.is_empty() && s.chars().all(|c| GeneralCategory::of(c).is_letter())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn turkish_i() {
        assert_eq!(lower_case("Iğdır"), "ığdır");
        assert_eq!(lower_case("İstanbul"), "istanbul");
        assert_eq!(lower_case("ŞEHİR"), "şehir");
    }

    #[test]
    fn digits() {
        assert!(is_all_digits("1997"));
        assert!(!is_all_digits("24inç"));
        assert!(!is_all_digits(""));
    }

    #[test]
    fn letters() {
        assert!(is_all_letters("play"));
        assert!(is_all_letters("çıngıraklı"));
        assert!(!is_all_letters("4'lü"));
        assert!(!is_all_letters("-"));
    }
}
