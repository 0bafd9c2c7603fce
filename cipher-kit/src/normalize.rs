//! Diacritic folding applied before any letter arithmetic.

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Strips diacritical marks: `"Příliš žluťoučký"` becomes `"Prilis zlutoucky"`.
///
/// The text is decomposed (NFD), combining marks are dropped and the rest is
/// recomposed (NFC). Characters without a decomposition pass through unchanged.
pub fn remove_diacritics(input: &str) -> String {
    input
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .nfc()
        .collect()
}

/// Reverses the character order of `input` after folding diacritics.
pub fn reverse(input: &str) -> String {
    remove_diacritics(input).chars().rev().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_czech_diacritics_folded() {
        assert_eq!(remove_diacritics("Příliš žluťoučký kůň"), "Prilis zlutoucky kun");
        assert_eq!(remove_diacritics("ÁČĎÉĚÍŇÓŘŠŤÚŮÝŽ"), "ACDEEINORSTUUYZ");
    }

    #[test]
    fn test_plain_text_untouched() {
        let text = "Hello, World! 123 @#";
        assert_eq!(remove_diacritics(text), text);
    }

    #[test]
    fn test_non_latin_passes_through() {
        assert_eq!(remove_diacritics("ß ł ø"), "ß ł ø");
    }

    #[test]
    fn test_reverse() {
        assert_eq!(reverse("ahoj"), "joha");
        assert_eq!(reverse("čau"), "uac");
        assert_eq!(reverse(""), "");
    }

    #[test]
    fn test_reverse_twice_is_identity() {
        for text in ["Hello World", "a", "abc def, ghi!", "  spaced  "] {
            assert_eq!(reverse(&reverse(text)), text);
        }
    }
}
