use clap::{Parser, ValueEnum};
use std::fs::{self, File};
use std::path::{Path, PathBuf};

use cipher_kit::report::write_rsa_report;
use cipher_kit::rsa;
use cipher_kit::{KeyPair, Mode};

/// RSA encryption/decryption of text with base64 key files
///
/// SECURITY NOTE: PKCS#1 v1.5 encryption padding is legacy and weaker than
/// OAEP. It is kept for compatibility with existing keys and ciphertexts.
#[derive(Parser)]
#[command(
    name = "rsa-cipher",
    about = "RSA encryption/decryption of text using PKCS#1 v1.5 padding",
    long_about = "
Encrypts text to base64 ciphertext with a public key, or decrypts base64
ciphertext back to text with a private key.

INPUT FORMAT:
- Input file: plaintext (encrypt) or base64 ciphertext (decrypt)
- Key file: base64 of the PKCS#1 DER key, as written by rsa-keygen

The plaintext is encoded as UTF-16LE and must fit into one RSA block
(key size in bytes minus 11).
"
)]
#[command(version, author)]
struct Args {
    /// Operation: encrypt or decrypt
    #[arg(long, value_enum)]
    operation: Operation,

    /// Path to the input file
    #[arg(long, value_name = "INPUT_FILE")]
    file: PathBuf,

    /// Path to the key file (public for encrypt, private for decrypt)
    #[arg(long, value_name = "KEY_FILE")]
    key: PathBuf,

    /// Output destination (file or directory)
    ///
    /// When a directory is given, the output file is created there with
    /// the same name as the input file.
    #[arg(long, value_name = "OUTPUT_DESTINATION")]
    output: PathBuf,

    /// The other key of the pair, shown in the report
    #[arg(long, value_name = "KEY_FILE")]
    paired_key: Option<PathBuf>,

    /// Export a text report
    #[arg(long, value_name = "PATH")]
    report: Option<PathBuf>,
}

#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum)]
enum Operation {
    /// Public-key encryption
    Encrypt,
    /// Private-key decryption
    Decrypt,
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Operation::Encrypt => write!(f, "Encryption"),
            Operation::Decrypt => write!(f, "Decryption"),
        }
    }
}

impl From<Operation> for Mode {
    fn from(operation: Operation) -> Self {
        match operation {
            Operation::Encrypt => Mode::Encode,
            Operation::Decrypt => Mode::Decode,
        }
    }
}

/// Reads a text file, dropping the trailing line break
fn read_text(file_path: &Path) -> Result<String, Box<dyn std::error::Error>> {
    if !file_path.is_file() {
        return Err(format!("File not found or not readable: {}", file_path.display()).into());
    }

    let content = fs::read_to_string(file_path)
        .map_err(|e| format!("Failed to read {}: {}", file_path.display(), e))?;
    log::debug!("read {} bytes from {}", content.len(), file_path.display());
    Ok(content.trim_end_matches(['\r', '\n']).to_string())
}

/// Resolves the final output path
///
/// A directory destination gets the input file's name appended.
fn resolve_output_path(output_destination: &Path, input_path: &Path) -> Result<PathBuf, Box<dyn std::error::Error>> {
    let output_path = if output_destination.is_dir() {
        let input_filename = input_path
            .file_name()
            .ok_or("Invalid input file name")?;
        output_destination.join(input_filename)
    } else {
        output_destination.to_path_buf()
    };
    log::debug!("output path resolved to {}", output_path.display());

    if let Some(parent) = output_path.parent() {
        fs::create_dir_all(parent)
            .map_err(|e| format!("Cannot create directory {}: {}", parent.display(), e))?;
    }

    Ok(output_path)
}

fn run(operation: Operation, input: &str, key: &str) -> cipher_kit::Result<String> {
    log::info!("{} of {} characters", operation, input.chars().count());
    match operation {
        Operation::Encrypt => rsa::encrypt(input, key),
        Operation::Decrypt => rsa::decrypt(input, key),
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let args = Args::parse();

    let input = read_text(&args.file)?;
    let key = read_text(&args.key)?;
    let output_path = resolve_output_path(&args.output, &args.file)?;

    let result = run(args.operation, &input, &key)?;

    fs::write(&output_path, &result)
        .map_err(|e| format!("Failed to write {}: {}", output_path.display(), e))?;

    println!("{} finished.", args.operation);
    println!("Result written to: {}", output_path.display());

    if let Some(path) = &args.report {
        let paired = match &args.paired_key {
            Some(paired) => read_text(paired)?,
            None => String::new(),
        };
        let keys = match args.operation {
            Operation::Encrypt => KeyPair { public_key: key.clone(), private_key: paired },
            Operation::Decrypt => KeyPair { public_key: paired, private_key: key.clone() },
        };
        let bits = rsa::key_bits(&key)?;
        log::info!("writing report to {}", path.display());
        let mut file = File::create(path)?;
        write_rsa_report(&mut file, &input, &result, args.operation.into(), &keys, bits)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encrypt_decrypt_cycle() {
        let keys = rsa::generate_key_pair(512).unwrap();

        let sealed = run(Operation::Encrypt, "Ahoj světe", &keys.public_key).unwrap();
        let opened = run(Operation::Decrypt, &sealed, &keys.private_key).unwrap();
        assert_eq!(opened, "Ahoj světe");
    }

    #[test]
    fn test_output_into_directory_keeps_input_name() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("message.txt");
        fs::write(&input, "text\n").unwrap();

        let out = resolve_output_path(dir.path(), &input).unwrap();
        assert_eq!(out, dir.path().join("message.txt"));

        let nested = dir.path().join("out/result.txt");
        assert_eq!(resolve_output_path(&nested, &input).unwrap(), nested);
        assert!(dir.path().join("out").is_dir());
        assert_eq!(read_text(&input).unwrap(), "text");
    }

    #[test]
    fn test_missing_file_is_error() {
        assert!(read_text(Path::new("/nonexistent/key.txt")).is_err());
    }
}
