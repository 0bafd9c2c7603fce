//! Numeral-base codec: text bytes rendered as decimal, hex, binary or octal tokens

use std::fmt;

use crate::normalize::remove_diacritics;

/// Numeral base used to render and parse each byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumeralBase {
    Decimal,
    Hexadecimal,
    Binary,
    Octal,
}

impl NumeralBase {
    pub const ALL: [NumeralBase; 4] = [
        NumeralBase::Decimal,
        NumeralBase::Hexadecimal,
        NumeralBase::Binary,
        NumeralBase::Octal,
    ];

    pub fn radix(self) -> u32 {
        match self {
            NumeralBase::Decimal => 10,
            NumeralBase::Hexadecimal => 16,
            NumeralBase::Binary => 2,
            NumeralBase::Octal => 8,
        }
    }

    fn render(self, byte: u8) -> String {
        match self {
            NumeralBase::Decimal => byte.to_string(),
            NumeralBase::Hexadecimal => format!("{:x}", byte),
            NumeralBase::Binary => format!("{:08b}", byte),
            NumeralBase::Octal => format!("{:o}", byte),
        }
    }

    /// Parses one token as a byte. Signs, prefixes and out-of-range values are rejected.
    fn parse(self, token: &str) -> Option<u8> {
        let radix = self.radix();
        if !token.chars().all(|c| c.is_digit(radix)) {
            return None;
        }
        u8::from_str_radix(token, radix).ok()
    }
}

/// Name used in exported reports
impl fmt::Display for NumeralBase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            NumeralBase::Decimal => "Desítkově",
            NumeralBase::Hexadecimal => "Hexadecimálně",
            NumeralBase::Binary => "Binárně",
            NumeralBase::Octal => "Osmičkově",
        };
        f.write_str(name)
    }
}

/// Renders each UTF-8 byte of `input` as a space-separated token in `base`.
///
/// Binary tokens are zero-padded to 8 digits, the other bases are unpadded.
/// Diacritics are folded first.
pub fn encode(input: &str, base: NumeralBase) -> String {
    log::debug!("base encode ({}): {} chars", base, input.chars().count());
    remove_diacritics(input)
        .bytes()
        .map(|byte| base.render(byte))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Parses space-separated tokens back into text.
///
/// Decoding is lenient: a token that is not a valid byte in `base` is copied
/// into the output literally instead of failing. Runs of bytes that are not
/// valid UTF-8 keep one character per byte, read as Latin-1.
pub fn decode(input: &str, base: NumeralBase) -> String {
    log::debug!("base decode ({}): {} bytes of input", base, input.len());
    let mut output = String::with_capacity(input.len() / 2);
    let mut pending: Vec<u8> = Vec::new();
    let mut literal_tokens = 0usize;

    for token in input.split(' ').filter(|token| !token.is_empty()) {
        match base.parse(token) {
            Some(byte) => pending.push(byte),
            None => {
                flush_bytes(&mut pending, &mut output);
                output.push_str(token);
                literal_tokens += 1;
            }
        }
    }
    flush_bytes(&mut pending, &mut output);

    if literal_tokens > 0 {
        log::debug!("base decode ({}): {} tokens passed through", base, literal_tokens);
    }
    output
}

fn flush_bytes(pending: &mut Vec<u8>, output: &mut String) {
    let mut rest = pending.as_slice();
    while !rest.is_empty() {
        match std::str::from_utf8(rest) {
            Ok(text) => {
                output.push_str(text);
                break;
            }
            Err(err) => {
                let (valid, after) = rest.split_at(err.valid_up_to());
                // valid_up_to marks a verified UTF-8 prefix
                output.push_str(std::str::from_utf8(valid).unwrap_or_default());
                let bad = err.error_len().unwrap_or(after.len());
                output.extend(after[..bad].iter().map(|&byte| char::from(byte)));
                rest = &after[bad..];
            }
        }
    }
    pending.clear();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_each_base() {
        assert_eq!(encode("Hi", NumeralBase::Decimal), "72 105");
        assert_eq!(encode("Hi", NumeralBase::Hexadecimal), "48 69");
        assert_eq!(encode("Hi", NumeralBase::Binary), "01001000 01101001");
        assert_eq!(encode("Hi", NumeralBase::Octal), "110 151");
        assert_eq!(encode("\n", NumeralBase::Binary), "00001010");
    }

    #[test]
    fn test_encode_empty() {
        assert_eq!(encode("", NumeralBase::Decimal), "");
    }

    #[test]
    fn test_decode_each_base() {
        assert_eq!(decode("72 105", NumeralBase::Decimal), "Hi");
        assert_eq!(decode("48 69", NumeralBase::Hexadecimal), "Hi");
        assert_eq!(decode("48 6F", NumeralBase::Hexadecimal), "Ho");
        assert_eq!(decode("01001000 01101001", NumeralBase::Binary), "Hi");
        assert_eq!(decode("110 151", NumeralBase::Octal), "Hi");
    }

    #[test]
    fn test_roundtrip_all_bases() {
        let text = "Hello, World! 0123 ~{}";
        for base in NumeralBase::ALL {
            assert_eq!(decode(&encode(text, base), base), text, "base {base}");
        }
    }

    #[test]
    fn test_roundtrip_non_ascii_text() {
        for base in NumeralBase::ALL {
            assert_eq!(decode(&encode("ß € 日本", base), base), "ß € 日本");
        }
    }

    #[test]
    fn test_decode_is_lenient() {
        assert_eq!(decode("01001000 0102 01101001", NumeralBase::Binary), "H0102i");
        assert_eq!(decode("72 abc 105", NumeralBase::Decimal), "Habci");
        assert_eq!(decode("777", NumeralBase::Octal), "777");
        assert_eq!(decode("+72", NumeralBase::Decimal), "+72");
    }

    #[test]
    fn test_invalid_utf8_bytes_keep_their_value() {
        assert_eq!(decode("200", NumeralBase::Decimal), "È");
        assert_eq!(decode("c3 x a9", NumeralBase::Hexadecimal), "Ãx©");
        assert_eq!(decode("c3 a9", NumeralBase::Hexadecimal), "é");
        assert_eq!(decode("72 255 105", NumeralBase::Decimal), "Hÿi");
        assert_eq!(decode("e2 82 48", NumeralBase::Hexadecimal), "â\u{82}H");
    }

    #[test]
    fn test_decode_skips_repeated_spaces() {
        assert_eq!(decode("  72   105 ", NumeralBase::Decimal), "Hi");
    }

    #[test]
    fn test_report_names() {
        assert_eq!(NumeralBase::Binary.to_string(), "Binárně");
        assert_eq!(NumeralBase::Decimal.to_string(), "Desítkově");
    }
}
