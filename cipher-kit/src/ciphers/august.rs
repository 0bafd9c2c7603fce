//! August cipher: shift by one, `z` carries into `aa`

use crate::normalize::remove_diacritics;
use crate::utils;

use super::Ciphers;

impl Ciphers {
    /// Shifts every letter by +1. `z` becomes `aa` and `Z` becomes `AA`,
    /// so the output may be longer than the input.
    pub fn august_encode(input: &str) -> String {
        log::debug!("august encode: {} chars", input.len());
        let text = remove_diacritics(input);
        let mut output = String::with_capacity(text.len() + text.len() / 8);

        for c in text.chars() {
            match c {
                'z' => output.push_str("aa"),
                'Z' => output.push_str("AA"),
                _ => output.push(utils::rotate_letter(c, 1)),
            }
        }

        output
    }

    /// Inverse of [`Ciphers::august_encode`]: `aa` collapses to `z`, `AA` to `Z`,
    /// every other letter moves back by one.
    ///
    /// Encoded text only ever contains `a`/`A` in pairs, so pairs are matched
    /// greedily from the left. A lone `a` is left as it is.
    pub fn august_decode(input: &str) -> String {
        log::debug!("august decode: {} chars", input.len());
        let text = remove_diacritics(input);
        let mut output = String::with_capacity(text.len());
        let mut chars = text.chars().peekable();

        while let Some(c) = chars.next() {
            match c {
                'a' | 'A' => {
                    if chars.peek() == Some(&c) {
                        chars.next();
                        output.push(if c == 'a' { 'z' } else { 'Z' });
                    } else {
                        output.push(c);
                    }
                }
                _ => output.push(utils::rotate_letter(c, -1)),
            }
        }

        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_august_encode() {
        assert_eq!(Ciphers::august_encode("abc"), "bcd");
        assert_eq!(Ciphers::august_encode("z"), "aa");
        assert_eq!(Ciphers::august_encode("Zoo"), "AApp");
    }

    #[test]
    fn test_august_decode() {
        assert_eq!(Ciphers::august_decode("bcd"), "abc");
        assert_eq!(Ciphers::august_decode("aa"), "z");
        assert_eq!(Ciphers::august_decode("AApp"), "Zoo");
    }

    #[test]
    fn test_august_roundtrip() {
        for text in ["z", "Hello World", "az za zz", "AZ zA", "pizza buzz", "Žížala"] {
            let expected = remove_diacritics(text);
            let encoded = Ciphers::august_encode(text);
            assert_eq!(Ciphers::august_decode(&encoded), expected, "text {text}");
        }
    }

    #[test]
    fn test_august_length_changes() {
        let encoded = Ciphers::august_encode("zz");
        assert_eq!(encoded, "aaaa");
        assert_eq!(Ciphers::august_decode(&encoded), "zz");
    }

    #[test]
    fn test_august_lone_a_kept() {
        assert_eq!(Ciphers::august_decode("a b"), "a a");
    }
}
