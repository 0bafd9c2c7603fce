//! Caesar shift

use crate::normalize::remove_diacritics;
use crate::utils::{self, ALPHABET_LEN};

use super::Ciphers;

impl Ciphers {
    /// Caesar encoding: every letter moves `shift` places forward.
    ///
    /// Diacritics are folded first, case is kept, non-letters are copied.
    pub fn caesar_encode(input: &str, shift: i32) -> String {
        let shift = i64::from(shift).rem_euclid(ALPHABET_LEN);
        log::debug!("caesar encode: {} chars, shift {}", input.len(), shift);

        remove_diacritics(input)
            .chars()
            .map(|c| utils::rotate_letter(c, shift))
            .collect()
    }

    /// Caesar decoding, i.e. encoding with `26 - shift`
    pub fn caesar_decode(input: &str, shift: i32) -> String {
        let inverse = ALPHABET_LEN - i64::from(shift).rem_euclid(ALPHABET_LEN);
        // inverse is in 1..=26, always fits
        Self::caesar_encode(input, inverse as i32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_caesar_encode() {
        assert_eq!(Ciphers::caesar_encode("abc xyz", 3), "def abc");
        assert_eq!(Ciphers::caesar_encode("Hello, World!", 13), "Uryyb, Jbeyq!");
    }

    #[test]
    fn test_caesar_decode() {
        assert_eq!(Ciphers::caesar_decode("def abc", 3), "abc xyz");
    }

    #[test]
    fn test_caesar_folds_diacritics() {
        assert_eq!(Ciphers::caesar_encode("Žluťoučký", 1), "Amvupvdlz");
    }

    #[test]
    fn test_caesar_roundtrip_any_shift() {
        let text = "The Quick Brown Fox Jumps Over The Lazy Dog";
        for shift in [-100, -27, -26, -1, 0, 1, 13, 25, 26, 27, 260, i32::MAX, i32::MIN] {
            let encoded = Ciphers::caesar_encode(text, shift);
            assert_eq!(Ciphers::caesar_decode(&encoded, shift), text, "shift {shift}");
        }
    }

    #[test]
    fn test_caesar_negative_shift() {
        assert_eq!(Ciphers::caesar_encode("a", -1), "z");
        assert_eq!(Ciphers::caesar_encode("a", 25), "z");
    }
}
