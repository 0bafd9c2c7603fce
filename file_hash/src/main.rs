//! Text and file checksums with a CLI interface
//!
//! SHA-1/256/384/512 and MD5 of text or files, CRC-32 of files, all checksums
//! of one file at once, and a checksum-by-checksum comparison of two files.

use clap::{Parser, Subcommand, ValueEnum};
use std::fs::{self, File};
use std::path::{Path, PathBuf};

use cipher_kit::digest::{self, CRC32_LABEL};
use cipher_kit::report::{self, MD5_NAME, SHA_NAME};
use cipher_kit::{DigestRequest, HashKind};

/// CLI arguments for the checksum tool
#[derive(Parser)]
#[command(
    name = "file_hash",
    version,
    about = "SHA, MD5 and CRC-32 checksums of text and files"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Output file for the result, stdout when omitted
    #[arg(short = 'o', long = "output", value_name = "FILE", global = true)]
    pub output: Option<PathBuf>,

    /// Export a text report
    #[arg(long, value_name = "PATH", global = true)]
    pub report: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Digest of the text stored in a file (trailing line break dropped)
    Text {
        #[arg(short = 'i', long = "input", value_name = "FILE")]
        input: PathBuf,
        #[arg(short, long, value_enum, default_value = "sha256")]
        algorithm: Algorithm,
    },
    /// Digest of a file's raw bytes
    File {
        path: PathBuf,
        #[arg(short, long, value_enum, default_value = "sha256")]
        algorithm: Algorithm,
    },
    /// CRC-32 of a file's raw bytes
    Crc { path: PathBuf },
    /// Every checksum of one file
    All { path: PathBuf },
    /// Compares two files checksum by checksum
    Compare { first: PathBuf, second: PathBuf },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum Algorithm {
    Sha1,
    Sha256,
    Sha384,
    Sha512,
    Md5,
}

impl From<Algorithm> for HashKind {
    fn from(algorithm: Algorithm) -> Self {
        match algorithm {
            Algorithm::Sha1 => HashKind::Sha1,
            Algorithm::Sha256 => HashKind::Sha256,
            Algorithm::Sha384 => HashKind::Sha384,
            Algorithm::Sha512 => HashKind::Sha512,
            Algorithm::Md5 => HashKind::Md5,
        }
    }
}

/// Runs one command; returns the printable result and the report text.
fn execute(command: &Command) -> Result<(String, Vec<u8>), Box<dyn std::error::Error>> {
    let mut report = Vec::new();

    let output = match command {
        Command::Text { input, algorithm } => {
            let content = fs::read_to_string(input)
                .map_err(|e| format!("Failed to read input file '{}': {}", input.display(), e))?;
            let request = DigestRequest::new(content.trim_end_matches(['\r', '\n']), (*algorithm).into());
            log::info!("hashing text from {} with {}", input.display(), request.kind.label());
            let hash = request.run();
            if request.kind == HashKind::Md5 {
                report::write_simple_report(&mut report, MD5_NAME, &request.input, &hash, None)?;
            } else {
                report::write_simple_report(&mut report, SHA_NAME, &request.input, &hash, Some(&request.kind))?;
            }
            hash
        }
        Command::File { path, algorithm } => {
            let kind = HashKind::from(*algorithm);
            log::info!("hashing file {} with {}", path.display(), kind.label());
            let hash = digest::digest_file(path, kind)?;
            report::write_hash_result(&mut report, &hash, path, digest::file_size(path), kind.label())?;
            hash
        }
        Command::Crc { path } => {
            log::info!("computing CRC-32 of {}", path.display());
            let hash = digest::crc32_file(path)?;
            report::write_hash_result(&mut report, &hash, path, digest::file_size(path), CRC32_LABEL)?;
            hash
        }
        Command::All { path } => {
            log::info!("computing every digest of {}", path.display());
            let fingerprint = digest::fingerprint_file(path)?;
            report::write_fingerprint(&mut report, &fingerprint)?;
            fingerprint
                .entries()
                .iter()
                .map(|(label, value)| format!("{}: {}", label, value))
                .collect::<Vec<_>>()
                .join("\n")
        }
        Command::Compare { first, second } => {
            log::info!("comparing {} with {}", first.display(), second.display());
            let comparison = digest::compare_files(first, second)?;
            report::write_comparison(&mut report, &comparison)?;
            let mut lines: Vec<String> = comparison
                .verdicts()
                .iter()
                .map(|(label, same)| format!("{}: {}", label, if *same { "match" } else { "MISMATCH" }))
                .collect();
            lines.push(if comparison.identical() { "identical" } else { "different" }.to_string());
            lines.join("\n")
        }
    };

    Ok((output, report))
}

fn write_or_print(destination: Option<&Path>, content: &str) -> Result<(), Box<dyn std::error::Error>> {
    match destination {
        Some(path) => {
            log::debug!("writing result to {}", path.display());
            fs::write(path, content)
                .map_err(|e| format!("Failed to write output file '{}': {}", path.display(), e))?;
        }
        None => println!("{}", content),
    }
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();

    let (output, report) = execute(&cli.command)?;
    write_or_print(cli.output.as_deref(), &output)?;

    if let Some(path) = &cli.report {
        use std::io::Write;
        log::debug!("writing report to {}", path.display());
        File::create(path)?.write_all(&report)?;
    }

    Ok(())
}
