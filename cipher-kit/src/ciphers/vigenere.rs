//! Vigenère cipher with a repeating alphanumeric key

use crate::error::{CipherError, Result};
use crate::normalize::remove_diacritics;
use crate::notify::{Notifier, ERROR_TITLE};
use crate::utils;

use super::{Ciphers, Mode};

/// Message sent to the notifier when the key has non-alphanumeric characters.
pub const INVALID_KEY_MESSAGE: &str = "Klíč obsahuje nealfanumerické znaky.";

/// Checks that every key character is a letter or a digit.
pub fn validate_vigenere_key(key: &str) -> Result<()> {
    match key.chars().find(|c| !c.is_alphanumeric()) {
        Some(bad) => Err(CipherError::InvalidKey(format!(
            "character {:?} is neither a letter nor a digit",
            bad
        ))),
        None => Ok(()),
    }
}

impl Ciphers {
    /// Encrypts text using the Vigenère cipher
    pub fn vigenere_encode(input: &str, key: &str, notifier: &dyn Notifier) -> String {
        Self::vigenere(input, key, Mode::Encode, notifier)
    }

    /// Decrypts text using the Vigenère cipher
    pub fn vigenere_decode(input: &str, key: &str, notifier: &dyn Notifier) -> String {
        Self::vigenere(input, key, Mode::Decode, notifier)
    }

    /// Runs the Vigenère transform in either direction.
    ///
    /// The key cursor only advances on letters, so spaces and punctuation
    /// neither change nor consume key positions. The key character is folded
    /// to the case of the input letter before its offset is taken; for digits
    /// this yields a case-dependent shift, which still inverts exactly.
    ///
    /// A key with characters other than letters and digits is reported to
    /// `notifier` and the transform still runs. An empty key leaves the
    /// letters as they are.
    pub fn vigenere(input: &str, key: &str, mode: Mode, notifier: &dyn Notifier) -> String {
        if let Err(err) = validate_vigenere_key(key) {
            log::warn!("vigenere: {}", err);
            notifier.notify(INVALID_KEY_MESSAGE, ERROR_TITLE);
        }

        let text = remove_diacritics(input);
        let key: Vec<char> = key.chars().collect();
        if key.is_empty() {
            return text;
        }

        let mut output = String::with_capacity(text.len());
        let mut key_index: usize = 0;

        for c in text.chars() {
            let Some(base) = utils::letter_base(c) else {
                output.push(c);
                continue;
            };

            let key_char = key[key_index % key.len()];
            let cased = if c.is_ascii_uppercase() {
                key_char.to_uppercase().next().unwrap_or(key_char)
            } else {
                key_char.to_lowercase().next().unwrap_or(key_char)
            };

            let offset = i64::from(u32::from(cased)) - i64::from(base);
            let shift = match mode {
                Mode::Encode => offset,
                Mode::Decode => -offset,
            };
            output.push(utils::rotate_letter(c, shift));

            key_index += 1;
        }

        output
    }
}
