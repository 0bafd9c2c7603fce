//! Request objects: one call runs one cipher, codec or digest in one direction

use crate::base::{self, NumeralBase};
use crate::ciphers::{Ciphers, Mode};
use crate::digest::{self, HashKind};
use crate::normalize;
use crate::notify::Notifier;

/// Cipher-specific parameters
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CipherParams {
    Caesar { shift: i32 },
    August,
    Atbash,
    Vigenere { key: String },
    Morse { separated: bool },
    Ascii { base: NumeralBase },
}

impl CipherParams {
    /// Whether `reversed_input` applies to this cipher.
    pub fn supports_reversal(&self) -> bool {
        !matches!(self, CipherParams::Morse { .. } | CipherParams::Ascii { .. })
    }
}

/// Input, direction and parameters for one cipher run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CipherRequest {
    pub input: String,
    pub mode: Mode,
    /// Reverse the input before the cipher runs, in either mode.
    pub reversed_input: bool,
    pub params: CipherParams,
}

impl CipherRequest {
    pub fn new(input: impl Into<String>, mode: Mode, params: CipherParams) -> Self {
        Self {
            input: input.into(),
            mode,
            reversed_input: false,
            params,
        }
    }

    pub fn reversed(mut self, reversed: bool) -> Self {
        self.reversed_input = reversed;
        self
    }

    /// Runs the cipher. Warnings (a bad Vigenère key) go to `notifier`.
    ///
    /// Reversal always happens on the input, before the transform, so a
    /// reversed decode is not the mirror image of a reversed encode. Morse and
    /// ASCII ignore `reversed_input`; Atbash ignores `mode`.
    pub fn run(&self, notifier: &dyn Notifier) -> String {
        let reversed;
        let input = if self.reversed_input && self.params.supports_reversal() {
            reversed = normalize::reverse(&self.input);
            reversed.as_str()
        } else {
            self.input.as_str()
        };

        match (&self.params, self.mode) {
            (CipherParams::Caesar { shift }, Mode::Encode) => Ciphers::caesar_encode(input, *shift),
            (CipherParams::Caesar { shift }, Mode::Decode) => Ciphers::caesar_decode(input, *shift),
            (CipherParams::August, Mode::Encode) => Ciphers::august_encode(input),
            (CipherParams::August, Mode::Decode) => Ciphers::august_decode(input),
            (CipherParams::Atbash, _) => Ciphers::atbash_code(input),
            (CipherParams::Vigenere { key }, mode) => Ciphers::vigenere(input, key, mode, notifier),
            (CipherParams::Morse { separated }, Mode::Encode) => {
                Ciphers::morse_encode(input, *separated)
            }
            (CipherParams::Morse { .. }, Mode::Decode) => Ciphers::morse_decode(input),
            (CipherParams::Ascii { base }, Mode::Encode) => base::encode(input, *base),
            (CipherParams::Ascii { base }, Mode::Decode) => base::decode(input, *base),
        }
    }
}

/// Digest of interactive text input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DigestRequest {
    pub input: String,
    pub kind: HashKind,
}

impl DigestRequest {
    pub fn new(input: impl Into<String>, kind: HashKind) -> Self {
        Self {
            input: input.into(),
            kind,
        }
    }

    /// Lowercase hex digest, or an empty string for empty input.
    pub fn run(&self) -> String {
        if self.input.is_empty() {
            return String::new();
        }
        digest::digest_text(&self.input, self.kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notify::SilentNotifier;

    #[test]
    fn test_caesar_request() {
        let request = CipherRequest::new("abc", Mode::Encode, CipherParams::Caesar { shift: 1 });
        assert_eq!(request.run(&SilentNotifier), "bcd");
    }

    #[test]
    fn test_reversal_happens_before_transform() {
        let encode = CipherRequest::new("abc", Mode::Encode, CipherParams::Caesar { shift: 1 })
            .reversed(true);
        assert_eq!(encode.run(&SilentNotifier), "dcb");

        // Reversal is applied to the input in decode mode too
        let decode = CipherRequest::new("dcb", Mode::Decode, CipherParams::Caesar { shift: 1 })
            .reversed(true);
        assert_eq!(decode.run(&SilentNotifier), "abc");
    }

    #[test]
    fn test_atbash_ignores_mode() {
        let encode = CipherRequest::new("Hello", Mode::Encode, CipherParams::Atbash);
        let decode = CipherRequest::new("Hello", Mode::Decode, CipherParams::Atbash);
        assert_eq!(encode.run(&SilentNotifier), decode.run(&SilentNotifier));
    }

    #[test]
    fn test_morse_ignores_reversal() {
        let request = CipherRequest::new("SO", Mode::Encode, CipherParams::Morse { separated: true })
            .reversed(true);
        assert_eq!(request.run(&SilentNotifier), "... --- ");
    }

    #[test]
    fn test_vigenere_request_notifies() {
        let warnings = std::cell::Cell::new(0);
        let sink = |_: &str, _: &str| warnings.set(warnings.get() + 1);
        let request = CipherRequest::new(
            "abc",
            Mode::Encode,
            CipherParams::Vigenere {
                key: "a b".to_string(),
            },
        );
        request.run(&sink);
        assert_eq!(warnings.get(), 1);
    }

    #[test]
    fn test_ascii_request_roundtrip() {
        let encoded = CipherRequest::new(
            "Hi!",
            Mode::Encode,
            CipherParams::Ascii {
                base: NumeralBase::Octal,
            },
        )
        .run(&SilentNotifier);
        let decoded = CipherRequest::new(
            encoded,
            Mode::Decode,
            CipherParams::Ascii {
                base: NumeralBase::Octal,
            },
        )
        .run(&SilentNotifier);
        assert_eq!(decoded, "Hi!");
    }

    #[test]
    fn test_digest_request_empty_input() {
        assert_eq!(DigestRequest::new("", HashKind::Sha256).run(), "");
        assert_eq!(
            DigestRequest::new("abc", HashKind::Md5).run(),
            "900150983cd24fb0d6963f7d28e17f72"
        );
    }
}
