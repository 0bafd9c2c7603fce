//! Utility functions shared by the letter ciphers

/// Alphabet size for every letter cipher.
pub const ALPHABET_LEN: i64 = 26;

/// Returns `b'A'` or `b'a'` for ASCII letters, `None` for everything else.
pub fn letter_base(c: char) -> Option<u8> {
    if c.is_ascii_uppercase() {
        Some(b'A')
    } else if c.is_ascii_lowercase() {
        Some(b'a')
    } else {
        None
    }
}

/// Rotates an ASCII letter by `shift` positions within its case's alphabet.
///
/// Any shift is accepted, negative or larger than the alphabet. Non-letters
/// are returned unchanged.
pub fn rotate_letter(c: char, shift: i64) -> char {
    match letter_base(c) {
        Some(base) => {
            let position = i64::from(c as u8 - base);
            let rotated = (position + shift).rem_euclid(ALPHABET_LEN) as u8;
            (base + rotated) as char
        }
        None => c,
    }
}

/// Mirrors an ASCII letter inside its case's alphabet (`a` <-> `z`).
pub fn mirror_letter(c: char) -> char {
    match letter_base(c) {
        Some(base) => (base + 25 - (c as u8 - base)) as char,
        None => c,
    }
}
