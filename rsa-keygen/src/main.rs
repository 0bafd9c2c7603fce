use clap::Parser;
use std::fs::{self, File};
use std::path::Path;
use std::path::PathBuf;

use cipher_kit::report::write_key_pair;
use cipher_kit::rsa::{self, DEFAULT_KEY_BITS};
use cipher_kit::{KeyPair, Notifier};

/// RSA key generation
///
/// Writes the public and the private key as base64 text of their PKCS#1 DER
/// encoding, one key per file.
#[derive(Parser)]
#[command(
    name = "rsa-keygen",
    about = "RSA key generation utility",
    long_about = "
Generates an RSA key pair with public exponent e = 65537.

OUTPUT FORMAT:
- public key: base64 of PKCS#1 RSAPublicKey (n, e)
- private key: base64 of PKCS#1 RSAPrivateKey (n, e, d, p, q, CRT values)

Accepted sizes: 384 to 4096 bits in steps of 8.
"
)]
#[command(version)]
struct Args {
    /// Modulus size in bits
    #[arg(long, value_name = "BITS", default_value_t = DEFAULT_KEY_BITS)]
    length: usize,

    /// Output file for the private key
    #[arg(long, value_name = "OUTPUT_PRIVATE")]
    private_output: PathBuf,

    /// Output file for the public key
    #[arg(long, value_name = "OUTPUT_PUBLIC")]
    public_output: PathBuf,

    /// Export both keys and the size as a text report
    #[arg(long, value_name = "PATH")]
    report: Option<PathBuf>,
}

/// Prints errors to stderr
struct StderrNotifier;

impl Notifier for StderrNotifier {
    fn notify(&self, message: &str, title: &str) {
        eprintln!("{}: {}", title, message);
    }
}

/// Writes one key, creating the parent directory when needed
fn write_key_file(file_path: &Path, key: &str) -> Result<(), Box<dyn std::error::Error>> {
    if let Some(parent) = file_path.parent() {
        fs::create_dir_all(parent)?;
    }

    fs::write(file_path, key)
        .map_err(|e| format!("Failed to write {}: {}", file_path.display(), e))?;

    Ok(())
}

fn generate(bits: usize, notifier: &dyn Notifier) -> Result<KeyPair, Box<dyn std::error::Error>> {
    log::debug!("generating {}-bit key pair", bits);
    let keys = rsa::generate_key_pair_or_notify(bits, notifier).ok_or("key generation failed")?;
    Ok(keys)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let args = Args::parse();

    let keys = generate(args.length, &StderrNotifier)?;

    write_key_file(&args.private_output, &keys.private_key)?;
    write_key_file(&args.public_output, &keys.public_key)?;
    log::info!(
        "wrote {}-bit key pair to {} and {}",
        args.length,
        args.public_output.display(),
        args.private_output.display()
    );

    if let Some(path) = &args.report {
        let mut file = File::create(path)?;
        write_key_pair(&mut file, &keys, args.length)?;
    }

    Ok(())
}
