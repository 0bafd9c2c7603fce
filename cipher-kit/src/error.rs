//! Error types for cipher kit operations

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CipherError {
    #[error("Invalid key: {0}")]
    InvalidKey(String),

    #[error("Invalid RSA key size: {bits} bits")]
    InvalidKeySize { bits: usize },

    /// Any I/O failure while reading a file collapses into this one kind.
    #[error("Failed to load file {}", path.display())]
    FileLoad {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Base64 error: {0}")]
    Base64(String),

    #[error("Cryptographic operation failed: {0}")]
    Crypto(String),

    #[error("Invalid range: min {min} is greater than max {max}")]
    InvalidRange { min: i64, max: i64 },
}

impl CipherError {
    /// Wraps an I/O error as a load failure for `path`.
    pub fn file_load(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        CipherError::FileLoad {
            path: path.into(),
            source,
        }
    }

    /// Text shown through a notifier: the fixed Czech messages for rejected
    /// keys, the error's own description otherwise.
    pub fn user_message(&self) -> String {
        match self {
            CipherError::InvalidKey(_) => crate::ciphers::vigenere::INVALID_KEY_MESSAGE.to_string(),
            CipherError::InvalidKeySize { .. } => crate::rsa::KEY_SIZE_MESSAGE.to_string(),
            other => other.to_string(),
        }
    }

    /// True for failures that come from key material or ciphertext rather than the caller's setup.
    pub fn is_crypto(&self) -> bool {
        matches!(self, CipherError::Base64(_) | CipherError::Crypto(_))
    }
}

impl From<base64::DecodeError> for CipherError {
    fn from(err: base64::DecodeError) -> Self {
        CipherError::Base64(err.to_string())
    }
}

impl From<::rsa::Error> for CipherError {
    fn from(err: ::rsa::Error) -> Self {
        CipherError::Crypto(err.to_string())
    }
}

impl From<::rsa::pkcs1::Error> for CipherError {
    fn from(err: ::rsa::pkcs1::Error) -> Self {
        CipherError::Crypto(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, CipherError>;
