//! Digest engine: SHA family and MD5 over text or files, CRC-32 over files

pub mod crc32;

use std::fmt;
use std::fs::File;
use std::io::{ErrorKind, Read};
use std::path::{Path, PathBuf};

use md5::Md5;
use sha1::Sha1;
use sha2::{Digest, Sha256, Sha384, Sha512};

use crate::error::{CipherError, Result};
use crate::notify::{recover, Notifier};

pub use crc32::Crc32;

/// Read buffer used when streaming a file through a hasher.
pub const STREAM_BUFFER_SIZE: usize = 64 * 1024;

/// Digest algorithm and its output width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HashKind {
    Sha1,
    Sha256,
    Sha384,
    Sha512,
    Md5,
}

impl HashKind {
    /// The SHA variants, in the order they are offered and reported.
    pub const SHA: [HashKind; 4] = [
        HashKind::Sha1,
        HashKind::Sha256,
        HashKind::Sha384,
        HashKind::Sha512,
    ];

    /// Digest length in bytes
    pub fn output_len(self) -> usize {
        match self {
            HashKind::Sha1 => 20,
            HashKind::Sha256 => 32,
            HashKind::Sha384 => 48,
            HashKind::Sha512 => 64,
            HashKind::Md5 => 16,
        }
    }

    /// Hyphenated label, e.g. `SHA-256`
    pub fn label(self) -> &'static str {
        match self {
            HashKind::Sha1 => "SHA-1",
            HashKind::Sha256 => "SHA-256",
            HashKind::Sha384 => "SHA-384",
            HashKind::Sha512 => "SHA-512",
            HashKind::Md5 => "MD5",
        }
    }
}

/// Compact name, e.g. `SHA256`
impl fmt::Display for HashKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            HashKind::Sha1 => "SHA1",
            HashKind::Sha256 => "SHA256",
            HashKind::Sha384 => "SHA384",
            HashKind::Sha512 => "SHA512",
            HashKind::Md5 => "MD5",
        };
        f.write_str(name)
    }
}

/// Hashes the UTF-8 bytes of `text` and returns lowercase hex.
pub fn digest_text(text: &str, kind: HashKind) -> String {
    digest_bytes(text.as_bytes(), kind)
}

pub fn digest_bytes(data: &[u8], kind: HashKind) -> String {
    match kind {
        HashKind::Sha1 => hex::encode(Sha1::digest(data)),
        HashKind::Sha256 => hex::encode(Sha256::digest(data)),
        HashKind::Sha384 => hex::encode(Sha384::digest(data)),
        HashKind::Sha512 => hex::encode(Sha512::digest(data)),
        HashKind::Md5 => hex::encode(Md5::digest(data)),
    }
}

/// Streams a file through `kind` without loading it whole.
///
/// Every I/O failure, whatever its cause, is reported as [`CipherError::FileLoad`].
pub fn digest_file(path: impl AsRef<Path>, kind: HashKind) -> Result<String> {
    let path = path.as_ref();
    log::debug!("digest {} of {}", kind, path.display());

    match kind {
        HashKind::Sha1 => hash_file::<Sha1>(path),
        HashKind::Sha256 => hash_file::<Sha256>(path),
        HashKind::Sha384 => hash_file::<Sha384>(path),
        HashKind::Sha512 => hash_file::<Sha512>(path),
        HashKind::Md5 => hash_file::<Md5>(path),
    }
}

/// [`digest_file`] for interactive callers: a load failure goes to `notifier`
/// and yields `None`.
pub fn digest_file_or_notify(path: impl AsRef<Path>, kind: HashKind, notifier: &dyn Notifier) -> Option<String> {
    recover(digest_file(path, kind), notifier)
}

/// CRC-32 of a file as 8 lowercase hex characters.
pub fn crc32_file(path: impl AsRef<Path>) -> Result<String> {
    let mut crc = Crc32::new();
    stream_file(path.as_ref(), |chunk| crc.update(chunk))?;
    Ok(crc.finalize_hex())
}

/// Size of the file in bytes, or 0 when it cannot be read.
///
/// 0 means "unknown" here; it does not prove the file is empty.
pub fn file_size(path: impl AsRef<Path>) -> u64 {
    std::fs::metadata(path)
        .ok()
        .filter(|meta| meta.is_file())
        .map(|meta| meta.len())
        .unwrap_or(0)
}

fn hash_file<D: Digest>(path: &Path) -> Result<String> {
    let mut hasher = D::new();
    stream_file(path, |chunk| hasher.update(chunk))?;
    Ok(hex::encode(hasher.finalize()))
}

/// Feeds the whole file to `sink`. The handle is closed before this returns.
fn stream_file(path: &Path, mut sink: impl FnMut(&[u8])) -> Result<()> {
    let load_error = |err: std::io::Error| {
        log::warn!("cannot read {}: {}", path.display(), err);
        CipherError::file_load(path, err)
    };

    let mut file = File::open(path).map_err(load_error)?;
    let mut buffer = vec![0u8; STREAM_BUFFER_SIZE];

    loop {
        match file.read(&mut buffer) {
            Ok(0) => break,
            Ok(n) => sink(&buffer[..n]),
            Err(err) if err.kind() == ErrorKind::Interrupted => continue,
            Err(err) => return Err(load_error(err)),
        }
    }

    Ok(())
}

/// Every supported checksum of one file, computed in a single read pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileFingerprint {
    pub path: PathBuf,
    pub size: u64,
    pub sha1: String,
    pub sha256: String,
    pub sha384: String,
    pub sha512: String,
    pub md5: String,
    pub crc32: String,
}

impl FileFingerprint {
    /// Labels and hex values, in report order.
    pub fn entries(&self) -> [(&'static str, &str); 6] {
        [
            (HashKind::Sha1.label(), self.sha1.as_str()),
            (HashKind::Sha256.label(), self.sha256.as_str()),
            (HashKind::Sha384.label(), self.sha384.as_str()),
            (HashKind::Sha512.label(), self.sha512.as_str()),
            (HashKind::Md5.label(), self.md5.as_str()),
            (CRC32_LABEL, self.crc32.as_str()),
        ]
    }

    pub fn get(&self, kind: HashKind) -> &str {
        match kind {
            HashKind::Sha1 => &self.sha1,
            HashKind::Sha256 => &self.sha256,
            HashKind::Sha384 => &self.sha384,
            HashKind::Sha512 => &self.sha512,
            HashKind::Md5 => &self.md5,
        }
    }

    /// Final path component, or an empty string for paths without one.
    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default()
    }
}

pub const CRC32_LABEL: &str = "CRC-32";

/// Computes all six checksums of `path` over one read handle.
pub fn fingerprint_file(path: impl AsRef<Path>) -> Result<FileFingerprint> {
    let path = path.as_ref();
    log::debug!("fingerprint {}", path.display());

    let mut sha1 = Sha1::new();
    let mut sha256 = Sha256::new();
    let mut sha384 = Sha384::new();
    let mut sha512 = Sha512::new();
    let mut md5 = Md5::new();
    let mut crc = Crc32::new();

    stream_file(path, |chunk| {
        sha1.update(chunk);
        sha256.update(chunk);
        sha384.update(chunk);
        sha512.update(chunk);
        md5.update(chunk);
        crc.update(chunk);
    })?;

    Ok(FileFingerprint {
        path: path.to_path_buf(),
        size: file_size(path),
        sha1: hex::encode(sha1.finalize()),
        sha256: hex::encode(sha256.finalize()),
        sha384: hex::encode(sha384.finalize()),
        sha512: hex::encode(sha512.finalize()),
        md5: hex::encode(md5.finalize()),
        crc32: crc.finalize_hex(),
    })
}

/// Two fingerprints and the per-checksum verdict.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileComparison {
    pub first: FileFingerprint,
    pub second: FileFingerprint,
}

impl FileComparison {
    /// `(label, matches)` for each checksum, in report order.
    pub fn verdicts(&self) -> Vec<(&'static str, bool)> {
        self.first
            .entries()
            .iter()
            .zip(self.second.entries().iter())
            .map(|((label, a), (_, b))| (*label, a == b))
            .collect()
    }

    pub fn identical(&self) -> bool {
        self.verdicts().iter().all(|(_, same)| *same)
    }
}

/// Fingerprints `first`, then `second`. The second file is opened only after
/// the first one's handle has been released.
pub fn compare_files(first: impl AsRef<Path>, second: impl AsRef<Path>) -> Result<FileComparison> {
    let first = fingerprint_file(first)?;
    let second = fingerprint_file(second)?;
    Ok(FileComparison { first, second })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn temp_file(content: &[u8]) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn test_empty_sha256() {
        assert_eq!(
            digest_text("", HashKind::Sha256),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }

    #[test]
    fn test_abc_vectors() {
        assert_eq!(digest_text("abc", HashKind::Md5), "900150983cd24fb0d6963f7d28e17f72");
        assert_eq!(
            digest_text("abc", HashKind::Sha1),
            "a9993e364706816aba3e25717850c26c9cd0d89d"
        );
        assert_eq!(
            digest_text("abc", HashKind::Sha256),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }

    #[test]
    fn test_hex_widths() {
        for kind in [HashKind::Sha1, HashKind::Sha256, HashKind::Sha384, HashKind::Sha512, HashKind::Md5] {
            let hash = digest_text("width check", kind);
            assert_eq!(hash.len(), kind.output_len() * 2, "{kind}");
            assert!(hash.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
        }
    }

    #[test]
    fn test_utf8_text_digest() {
        assert_eq!(digest_text("čau", HashKind::Md5), digest_bytes("čau".as_bytes(), HashKind::Md5));
        assert_ne!(digest_text("čau", HashKind::Md5), digest_text("cau", HashKind::Md5));
    }

    #[test]
    fn test_file_digest_matches_text_digest() {
        let file = temp_file(b"abc");
        for kind in [HashKind::Sha1, HashKind::Sha256, HashKind::Sha384, HashKind::Sha512, HashKind::Md5] {
            assert_eq!(digest_file(file.path(), kind).unwrap(), digest_text("abc", kind));
        }
    }

    #[test]
    fn test_file_digest_larger_than_buffer() {
        let data = vec![0x5Au8; STREAM_BUFFER_SIZE * 2 + 17];
        let file = temp_file(&data);
        assert_eq!(
            digest_file(file.path(), HashKind::Sha512).unwrap(),
            digest_bytes(&data, HashKind::Sha512)
        );
        assert_eq!(crc32_file(file.path()).unwrap(), format!("{:08x}", crc32::checksum(&data)));
    }

    #[test]
    fn test_crc32_file() {
        let file = temp_file(b"123456789");
        assert_eq!(crc32_file(file.path()).unwrap(), "cbf43926");
    }

    #[test]
    fn test_missing_file_is_load_failure() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.bin");

        assert!(matches!(
            digest_file(&missing, HashKind::Sha256),
            Err(CipherError::FileLoad { .. })
        ));
        assert!(matches!(crc32_file(&missing), Err(CipherError::FileLoad { .. })));
    }

    #[test]
    fn test_load_failure_reaches_notifier() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.bin");
        let titles = std::cell::RefCell::new(Vec::new());
        let sink = |message: &str, title: &str| {
            assert!(message.contains("nope.bin"));
            titles.borrow_mut().push(title.to_string());
        };

        assert_eq!(digest_file_or_notify(&missing, HashKind::Sha1, &sink), None);
        assert_eq!(*titles.borrow(), vec!["Chyba".to_string()]);

        let file = temp_file(b"abc");
        assert_eq!(
            digest_file_or_notify(file.path(), HashKind::Md5, &sink).as_deref(),
            Some("900150983cd24fb0d6963f7d28e17f72")
        );
    }

    #[test]
    fn test_directory_is_load_failure() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            digest_file(dir.path(), HashKind::Md5),
            Err(CipherError::FileLoad { .. })
        ));
    }

    #[test]
    fn test_file_size() {
        let file = temp_file(b"twelve bytes");
        assert_eq!(file_size(file.path()), 12);

        let dir = tempfile::tempdir().unwrap();
        assert_eq!(file_size(dir.path().join("missing")), 0);
        assert_eq!(file_size(dir.path()), 0);
    }

    #[test]
    fn test_fingerprint_matches_individual_digests() {
        let file = temp_file(b"fingerprint me");
        let fingerprint = fingerprint_file(file.path()).unwrap();

        for kind in [HashKind::Sha1, HashKind::Sha256, HashKind::Sha384, HashKind::Sha512, HashKind::Md5] {
            assert_eq!(fingerprint.get(kind), digest_file(file.path(), kind).unwrap());
        }
        assert_eq!(fingerprint.crc32, crc32_file(file.path()).unwrap());
        assert_eq!(fingerprint.size, 14);
        assert_eq!(fingerprint.entries()[5].0, "CRC-32");
    }

    #[test]
    fn test_compare_files() {
        let a = temp_file(b"same content");
        let b = temp_file(b"same content");
        let c = temp_file(b"other content");

        let same = compare_files(a.path(), b.path()).unwrap();
        assert!(same.identical());
        assert_eq!(same.verdicts().len(), 6);

        let different = compare_files(a.path(), c.path()).unwrap();
        assert!(!different.identical());
        assert!(different.verdicts().iter().all(|(_, same)| !same));
    }
}
