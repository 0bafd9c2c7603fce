//! # Cipher Kit
//!
//! Text ciphers, encoders, digests and a small RSA toolkit shared by the
//! command-line tools of this workspace.
//!
//! ## Contents
//!
//! - **Letter ciphers**: Caesar, August, Atbash and Vigenère
//! - **Codecs**: Morse and numeral-base byte listings (decimal, hex, binary, octal)
//! - **Digests**: SHA-1/256/384/512 and MD5 over text or files, CRC-32 over files
//! - **RSA**: key generation, PKCS#1 v1.5 encryption with base64 keys
//! - **Brute force**: exhaustive fixed-length permutations of a character pool
//! - **Reports**: plain-text export of every result
//!
//! ## Usage
//!
//! ```rust
//! use cipher_kit::{CipherParams, CipherRequest, Ciphers, Mode, SilentNotifier};
//!
//! assert_eq!(Ciphers::caesar_encode("Hello", 3), "Khoor");
//!
//! let request = CipherRequest::new("Khoor", Mode::Decode, CipherParams::Caesar { shift: 3 });
//! assert_eq!(request.run(&SilentNotifier), "Hello");
//! ```
//!
//! RSA keys travel as base64 strings:
//!
//! ```rust
//! let keys = cipher_kit::rsa::generate_key_pair(512)?;
//! let sealed = cipher_kit::rsa::encrypt("ahoj", &keys.public_key)?;
//! assert_eq!(cipher_kit::rsa::decrypt(&sealed, &keys.private_key)?, "ahoj");
//! # Ok::<(), cipher_kit::CipherError>(())
//! ```

pub mod base;
pub mod ciphers;
pub mod digest;
pub mod error;
pub mod normalize;
pub mod notify;
pub mod permutation;
pub mod random;
pub mod report;
pub mod request;
pub mod rsa;
pub mod utils;

pub use base::NumeralBase;
pub use ciphers::{Ciphers, Mode};
pub use digest::{FileComparison, FileFingerprint, HashKind};
pub use error::{CipherError, Result};
pub use notify::{LogNotifier, Notifier, SilentNotifier};
pub use permutation::{brute_force, permutations, BruteForceRun, PermutationSet};
pub use random::{RandomNumber, Randomizer};
pub use request::{CipherParams, CipherRequest, DigestRequest};
pub use crate::rsa::KeyPair;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
