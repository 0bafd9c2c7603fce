//! RSA key pairs, PKCS#1 v1.5 encryption of UTF-16 text
//!
//! Keys travel as base64 text of their PKCS#1 DER encoding (`RSAPublicKey`
//! and `RSAPrivateKey`). Encryption uses PKCS#1 v1.5 padding, not OAEP: it is
//! kept for compatibility with existing keys and ciphertexts and is weaker
//! than OAEP.

use ::rsa::pkcs1::{DecodeRsaPrivateKey, DecodeRsaPublicKey, EncodeRsaPrivateKey, EncodeRsaPublicKey};
use ::rsa::rand_core::CryptoRngCore;
use ::rsa::traits::PublicKeyParts;
use ::rsa::{Pkcs1v15Encrypt, RsaPrivateKey, RsaPublicKey};
use base64::engine::general_purpose::STANDARD;
use base64::Engine;

use crate::error::{CipherError, Result};
use crate::notify::Notifier;

/// Public exponent of every generated key, 2^16 + 1
pub const PUBLIC_EXPONENT: u32 = 65537;

/// Smallest accepted modulus size in bits
pub const MIN_KEY_BITS: usize = 384;
/// Largest accepted modulus size in bits
pub const MAX_KEY_BITS: usize = 4096;
/// Accepted sizes step by whole bytes
pub const KEY_BITS_STEP: usize = 8;
pub const DEFAULT_KEY_BITS: usize = 2048;

/// Bytes of PKCS#1 v1.5 overhead in every block
pub const PADDING_OVERHEAD: usize = 11;

/// Message sent to the notifier when key generation rejects the size.
pub const KEY_SIZE_MESSAGE: &str = "Nepodařilo se vygenerovat klíče (chybně zvolená velikost)";

/// Base64 key blobs produced by one generation call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyPair {
    pub public_key: String,
    pub private_key: String,
}

/// Checks a requested modulus size against the accepted range.
pub fn validate_key_size(bits: usize) -> Result<()> {
    if !(MIN_KEY_BITS..=MAX_KEY_BITS).contains(&bits) || bits % KEY_BITS_STEP != 0 {
        return Err(CipherError::InvalidKeySize { bits });
    }
    Ok(())
}

/// Generates a key pair with a modulus of exactly `bits` bits.
///
/// Accepted sizes are 384 to 4096 bits in steps of 8. Larger keys take
/// noticeably longer to generate.
pub fn generate_key_pair(bits: usize) -> Result<KeyPair> {
    generate_key_pair_with_rng(bits, &mut rand::thread_rng())
}

pub fn generate_key_pair_with_rng<R: CryptoRngCore + ?Sized>(bits: usize, rng: &mut R) -> Result<KeyPair> {
    if let Err(err) = validate_key_size(bits) {
        log::warn!("rsa keygen: {}", err);
        return Err(err);
    }

    log::debug!("rsa keygen: generating {}-bit key pair", bits);
    let private = RsaPrivateKey::new(rng, bits)?;
    let public = RsaPublicKey::from(&private);

    Ok(KeyPair {
        public_key: STANDARD.encode(public.to_pkcs1_der()?.as_bytes()),
        private_key: STANDARD.encode(private.to_pkcs1_der()?.as_bytes()),
    })
}

/// Generates a key pair, handing any failure to `notifier` instead of returning it.
///
/// A rejected size is reported with [`KEY_SIZE_MESSAGE`].
pub fn generate_key_pair_or_notify(bits: usize, notifier: &dyn Notifier) -> Option<KeyPair> {
    crate::notify::recover(generate_key_pair(bits), notifier)
}

/// Modulus size in bits of a base64 public or private key.
pub fn key_bits(key_b64: &str) -> Result<usize> {
    let data = STANDARD.decode(key_b64.trim())?;
    let bytes = match RsaPublicKey::from_pkcs1_der(&data) {
        Ok(key) => key.size(),
        Err(_) => RsaPrivateKey::from_pkcs1_der(&data)?.size(),
    };
    Ok(bytes * 8)
}

/// Longest plaintext in bytes a key of `bits` bits can encrypt.
pub fn max_message_len(bits: usize) -> usize {
    (bits / 8).saturating_sub(PADDING_OVERHEAD)
}

fn utf16_le_bytes(text: &str) -> Vec<u8> {
    text.encode_utf16().flat_map(u16::to_le_bytes).collect()
}

fn utf16_le_string(bytes: &[u8]) -> Result<String> {
    if bytes.len() % 2 != 0 {
        return Err(CipherError::Crypto("plaintext is not valid UTF-16".to_string()));
    }
    let units: Vec<u16> = bytes
        .chunks_exact(2)
        .map(|pair| u16::from_le_bytes([pair[0], pair[1]]))
        .collect();
    String::from_utf16(&units)
        .map_err(|_| CipherError::Crypto("plaintext is not valid UTF-16".to_string()))
}

fn logged<T>(operation: &str, result: Result<T>) -> Result<T> {
    if let Err(err) = &result {
        log::warn!("rsa {}: {}", operation, err);
    }
    result
}

/// Encrypts `text` (as UTF-16LE) with a base64 public key; returns base64 ciphertext.
///
/// Returns an empty string when `text` or the key is empty. Failures are
/// returned, and logged, rather than swallowed.
pub fn encrypt(text: &str, public_key_b64: &str) -> Result<String> {
    encrypt_with_rng(text, public_key_b64, &mut rand::thread_rng())
}

pub fn encrypt_with_rng<R: CryptoRngCore>(text: &str, public_key_b64: &str, rng: &mut R) -> Result<String> {
    if text.is_empty() || public_key_b64.is_empty() {
        return Ok(String::new());
    }

    logged("encrypt", encrypt_text(text, public_key_b64, rng))
}

fn encrypt_text<R: CryptoRngCore>(text: &str, public_key_b64: &str, rng: &mut R) -> Result<String> {
    let key = RsaPublicKey::from_pkcs1_der(&STANDARD.decode(public_key_b64.trim())?)?;
    log::debug!("rsa encrypt: {} chars, {}-bit key", text.chars().count(), key.size() * 8);

    let ciphertext = key.encrypt(rng, Pkcs1v15Encrypt, &utf16_le_bytes(text))?;
    Ok(STANDARD.encode(ciphertext))
}

/// Decrypts base64 ciphertext with a base64 private key back to text.
///
/// Returns an empty string when either input is empty.
pub fn decrypt(cipher_b64: &str, private_key_b64: &str) -> Result<String> {
    if cipher_b64.is_empty() || private_key_b64.is_empty() {
        return Ok(String::new());
    }

    logged("decrypt", decrypt_text(cipher_b64, private_key_b64))
}

fn decrypt_text(cipher_b64: &str, private_key_b64: &str) -> Result<String> {
    let key = RsaPrivateKey::from_pkcs1_der(&STANDARD.decode(private_key_b64.trim())?)?;
    let ciphertext = STANDARD.decode(cipher_b64.trim())?;
    if ciphertext.len() != key.size() {
        return Err(CipherError::Crypto(format!(
            "ciphertext is {} bytes, key expects {}",
            ciphertext.len(),
            key.size()
        )));
    }

    utf16_le_string(&key.decrypt(Pkcs1v15Encrypt, &ciphertext)?)
}
