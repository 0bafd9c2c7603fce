//! Atbash mirror cipher

use crate::normalize::remove_diacritics;
use crate::utils;

use super::Ciphers;

impl Ciphers {
    /// Atbash: `a` <-> `z`, `b` <-> `y`, ... Encoding and decoding are the same function.
    pub fn atbash_code(input: &str) -> String {
        log::debug!("atbash: {} chars", input.len());
        remove_diacritics(input)
            .chars()
            .map(utils::mirror_letter)
            .collect()
    }
}
