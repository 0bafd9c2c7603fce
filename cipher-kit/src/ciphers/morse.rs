//! Morse code codec

use std::collections::HashMap;

use once_cell::sync::Lazy;

use crate::normalize::remove_diacritics;

use super::Ciphers;

/// Token standing for a space between words.
pub const WORD_SEPARATOR: &str = "/";

/// The one canonical table; both lookup directions are derived from it.
const MORSE_TABLE: [(&str, char); 55] = [
    (".-", 'A'),
    ("-...", 'B'),
    ("-.-.", 'C'),
    ("-..", 'D'),
    (".", 'E'),
    ("..-.", 'F'),
    ("--.", 'G'),
    ("....", 'H'),
    ("..", 'I'),
    (".---", 'J'),
    ("-.-", 'K'),
    (".-..", 'L'),
    ("--", 'M'),
    ("-.", 'N'),
    ("---", 'O'),
    (".--.", 'P'),
    ("--.-", 'Q'),
    (".-.", 'R'),
    ("...", 'S'),
    ("-", 'T'),
    ("..-", 'U'),
    ("...-", 'V'),
    (".--", 'W'),
    ("-..-", 'X'),
    ("-.--", 'Y'),
    ("--..", 'Z'),
    ("-----", '0'),
    (".----", '1'),
    ("..---", '2'),
    ("...--", '3'),
    ("....-", '4'),
    (".....", '5'),
    ("-....", '6'),
    ("--...", '7'),
    ("---..", '8'),
    ("----.", '9'),
    (".-.-.-", '.'),
    ("--..--", ','),
    ("..--..", '?'),
    (".----.", '\''),
    ("-.-.--", '!'),
    ("-..-.", '/'),
    ("-.--.", '('),
    ("-.--.-", ')'),
    (".-...", '&'),
    ("---...", ':'),
    ("-.-.-.", ';'),
    ("-...-", '='),
    (".-.-.", '+'),
    ("-....-", '-'),
    ("..--.-", '_'),
    (".-..-.", '"'),
    ("...-..-", '$'),
    (".--.-.", '@'),
    (WORD_SEPARATOR, ' '),
];

static DECODE_MAP: Lazy<HashMap<&'static str, char>> =
    Lazy::new(|| MORSE_TABLE.iter().copied().collect());

static ENCODE_MAP: Lazy<HashMap<char, &'static str>> =
    Lazy::new(|| MORSE_TABLE.iter().map(|&(code, c)| (c, code)).collect());

impl Ciphers {
    /// Decodes space-separated Morse tokens.
    ///
    /// Tokens missing from the table are dropped without a placeholder, so
    /// decoding is lossy for foreign input.
    pub fn morse_decode(input: &str) -> String {
        log::debug!("morse decode: {} chars", input.len());
        let text = remove_diacritics(input);
        let mut dropped = 0usize;

        let output: String = text
            .split(' ')
            .filter(|token| !token.is_empty())
            .filter_map(|token| {
                let decoded = DECODE_MAP.get(token).copied();
                if decoded.is_none() {
                    dropped += 1;
                }
                decoded
            })
            .collect();

        if dropped > 0 {
            log::debug!("morse decode: dropped {} unknown tokens", dropped);
        }
        output
    }

    /// Encodes text as Morse, every token followed by one space.
    ///
    /// Input is upper-cased first and characters missing from the table are
    /// dropped. With `separated == false` the word separator token is left
    /// out, leaving only its trailing space between words.
    pub fn morse_encode(input: &str, separated: bool) -> String {
        log::debug!("morse encode: {} chars, separated {}", input.len(), separated);
        let text = remove_diacritics(input).to_uppercase();
        let mut output = String::with_capacity(text.len() * 5);

        for c in text.chars() {
            let Some(&code) = ENCODE_MAP.get(&c) else {
                continue;
            };
            if separated || code != WORD_SEPARATOR {
                output.push_str(code);
            }
            output.push(' ');
        }

        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_morse_encode_sos() {
        assert_eq!(Ciphers::morse_encode("SOS", true), "... --- ... ");
        assert_eq!(Ciphers::morse_encode("sos", false), "... --- ... ");
    }

    #[test]
    fn test_morse_roundtrip_sos() {
        let encoded = Ciphers::morse_encode("SOS", true);
        assert_eq!(Ciphers::morse_decode(encoded.trim()), "SOS");
    }

    #[test]
    fn test_morse_word_separator() {
        assert_eq!(Ciphers::morse_encode("A B", true), ".- / -... ");
        assert_eq!(Ciphers::morse_encode("A B", false), ".-  -... ");
        assert_eq!(Ciphers::morse_decode(".- / -..."), "A B");
    }

    #[test]
    fn test_morse_unknown_tokens_dropped() {
        assert_eq!(Ciphers::morse_decode("... ...... ---"), "SO");
        assert_eq!(Ciphers::morse_encode("a#b", true), ".- -... ");
    }

    #[test]
    fn test_morse_extra_spaces_ignored_on_decode() {
        assert_eq!(Ciphers::morse_decode("  ....   ..  "), "HI");
    }

    #[test]
    fn test_morse_lowercase_lost_on_roundtrip() {
        let encoded = Ciphers::morse_encode("Hello, World!", true);
        assert_eq!(Ciphers::morse_decode(&encoded), "HELLO, WORLD!");
    }

    #[test]
    fn test_morse_table_is_bijective() {
        assert_eq!(DECODE_MAP.len(), MORSE_TABLE.len());
        assert_eq!(ENCODE_MAP.len(), MORSE_TABLE.len());
    }

    #[test]
    fn test_morse_digits_and_diacritics() {
        assert_eq!(Ciphers::morse_encode("Čas 1", true), "-.-. .- ... / .---- ");
    }
}
