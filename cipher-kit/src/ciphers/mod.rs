//! Letter ciphers and the Morse codec

pub mod atbash;
pub mod august;
pub mod caesar;
pub mod morse;
pub mod vigenere;

pub use morse::WORD_SEPARATOR;
pub use vigenere::validate_vigenere_key;

/// Main struct for the text ciphers
pub struct Ciphers;

/// Selects which of a cipher's two inverse functions runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mode {
    Encode,
    Decode,
}

impl Mode {
    pub fn is_decode(self) -> bool {
        self == Mode::Decode
    }
}
