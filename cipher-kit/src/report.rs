//! Plain-text reports in the format the exported result files use
//!
//! Section markers and labels are fixed so that new exports line up with
//! files already on disk. Lines end with `\n`.

use std::fmt::Display;
use std::io::{self, Write};
use std::path::Path;

use crate::ciphers::Mode;
use crate::digest::{FileComparison, FileFingerprint};
use crate::permutation::BruteForceRun;
use crate::random::format_row;
use crate::request::{CipherParams, CipherRequest};
use crate::rsa::KeyPair;

pub const CAESAR_NAME: &str = "Caesarova šifra";
pub const AUGUST_NAME: &str = "Augustova šifra";
pub const ATBASH_NAME: &str = "Atbash";
pub const VIGENERE_NAME: &str = "Vigenėrova šifra";
pub const MORSE_NAME: &str = "Morseovka";
pub const ASCII_NAME: &str = "ASCII";
pub const RSA_NAME: &str = "RSA hash";
pub const SHA_NAME: &str = "SHA hash";
pub const MD5_NAME: &str = "MD5 hash";
pub const RANDOM_NAME: &str = "Generátor náhodných čísel";
pub const BRUTE_FORCE_NAME: &str = "Jednoduchý bruteforce";

fn yes_no(value: bool) -> &'static str {
    if value {
        "ano"
    } else {
        "ne"
    }
}

/// Header, input block and output block of a two-way cipher.
///
/// `reversed` is `Some` only for ciphers that offer input reversal; it adds
/// the `== Pozpátku:` line.
pub fn write_cipher_report<W: Write>(
    w: &mut W,
    name: &str,
    input: &str,
    output: &str,
    mode: Mode,
    reversed: Option<bool>,
) -> io::Result<()> {
    let decode = mode.is_decode();
    writeln!(w, "{} {}", name, if decode { "- DEKODÉR" } else { "- ENKODÉR" })?;
    writeln!(w)?;
    writeln!(
        w,
        "===== vstup {} =====",
        if decode { "(šifrovaný)" } else { "(nešifrovaný)" }
    )?;
    if let Some(reversed) = reversed {
        writeln!(w, "== Pozpátku: {}", yes_no(reversed))?;
    }
    writeln!(w)?;
    writeln!(w, "{}", input)?;
    writeln!(w)?;
    writeln!(
        w,
        "===== výstup {} =====",
        if decode { "(odšifrovaný)" } else { "(zašifrovaný)" }
    )?;
    writeln!(w)?;
    writeln!(w, "{}", output)?;
    writeln!(w)
}

/// Report name of the cipher behind `params`.
pub fn cipher_name(params: &CipherParams) -> &'static str {
    match params {
        CipherParams::Caesar { .. } => CAESAR_NAME,
        CipherParams::August => AUGUST_NAME,
        CipherParams::Atbash => ATBASH_NAME,
        CipherParams::Vigenere { .. } => VIGENERE_NAME,
        CipherParams::Morse { .. } => MORSE_NAME,
        CipherParams::Ascii { .. } => ASCII_NAME,
    }
}

/// Full report of one cipher run, metadata lines included.
pub fn write_request_report<W: Write>(
    w: &mut W,
    request: &CipherRequest,
    output: &str,
) -> io::Result<()> {
    let reversed = request
        .params
        .supports_reversal()
        .then_some(request.reversed_input);
    write_cipher_report(
        w,
        cipher_name(&request.params),
        &request.input,
        output,
        request.mode,
        reversed,
    )?;

    match &request.params {
        CipherParams::Caesar { shift } => writeln!(w, "Posun: {}", shift),
        CipherParams::Vigenere { key } => writeln!(w, "Klíč: {}", key),
        CipherParams::Ascii { base } if request.mode.is_decode() => {
            writeln!(w, "Vstupní režim: {}", base)
        }
        CipherParams::Ascii { base } => writeln!(w, "Výstupní režim: {}", base),
        _ => Ok(()),
    }
}

/// Name line, input block, output block, and an optional `Typ hashe:` line.
pub fn write_simple_report<W: Write>(
    w: &mut W,
    name: &str,
    input: &str,
    output: &str,
    hash_type: Option<&dyn Display>,
) -> io::Result<()> {
    writeln!(w, "{}", name)?;
    writeln!(w)?;
    writeln!(w, "===== vstup =====")?;
    writeln!(w)?;
    writeln!(w, "{}", input)?;
    writeln!(w)?;
    writeln!(w, "===== výstup =====")?;
    writeln!(w)?;
    writeln!(w, "{}", output)?;
    writeln!(w)?;
    if let Some(hash_type) = hash_type {
        writeln!(w, "Typ hashe: {}", hash_type)?;
    }
    Ok(())
}

fn write_block<W: Write>(w: &mut W, title: &str, body: &str) -> io::Result<()> {
    writeln!(w, "===== {} =====", title)?;
    writeln!(w)?;
    writeln!(w, "{}", body)
}

/// RSA cipher report with both keys; the key used for `mode` comes first.
pub fn write_rsa_report<W: Write>(
    w: &mut W,
    input: &str,
    output: &str,
    mode: Mode,
    keys: &KeyPair,
    bits: usize,
) -> io::Result<()> {
    write_cipher_report(w, RSA_NAME, input, output, mode, None)?;

    match mode {
        Mode::Decode => {
            write_block(w, "Soukromý klíč (podle něj bylo dešifrováno)", &keys.private_key)?;
            writeln!(w)?;
            write_block(w, "Veřejný klíč", &keys.public_key)?;
        }
        Mode::Encode => {
            write_block(w, "Veřejný klíč (podle něj bylo šifrováno)", &keys.public_key)?;
            writeln!(w)?;
            write_block(w, "Soukromý klíč", &keys.private_key)?;
        }
    }
    writeln!(w)?;
    writeln!(w, "Velikost klíčů: {} bitů", bits)
}

/// Export of a freshly generated key pair.
pub fn write_key_pair<W: Write>(w: &mut W, keys: &KeyPair, bits: usize) -> io::Result<()> {
    write_block(w, "Veřejný klíč", &keys.public_key)?;
    writeln!(w)?;
    write_block(w, "Soukromý klíč", &keys.private_key)?;
    writeln!(w)?;
    writeln!(w, "Velikost klíčů: {} bitů", bits)
}

fn write_file_lines<W: Write>(w: &mut W, path: &Path, size: u64) -> io::Result<()> {
    let name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    writeln!(w, "Název souboru: {}", name)?;
    writeln!(w, "Cesta k souboru: {}", path.display())?;
    writeln!(w, "Velikost souboru: {} B", size)
}

/// One checksum of one file.
pub fn write_hash_result<W: Write>(
    w: &mut W,
    hash: &str,
    path: &Path,
    size: u64,
    hash_type: &str,
) -> io::Result<()> {
    writeln!(w, "Hash: {}", hash)?;
    writeln!(w, "Typ hashe: {}", hash_type)?;
    write_file_lines(w, path, size)
}

/// All checksums of one file.
pub fn write_fingerprint<W: Write>(w: &mut W, fingerprint: &FileFingerprint) -> io::Result<()> {
    for (label, value) in fingerprint.entries() {
        writeln!(w, "{}: {}", label, value)?;
    }
    write_file_lines(w, &fingerprint.path, fingerprint.size)
}

/// Both fingerprints followed by a `shoda`/`NEshoda` verdict per checksum.
pub fn write_comparison<W: Write>(w: &mut W, comparison: &FileComparison) -> io::Result<()> {
    writeln!(w, "=====První soubor=====")?;
    write_fingerprint(w, &comparison.first)?;
    writeln!(w)?;
    writeln!(w, "=====Druhý soubor=====")?;
    write_fingerprint(w, &comparison.second)?;
    writeln!(w)?;
    writeln!(w, "=====Výsledek=====")?;
    for (label, same) in comparison.verdicts() {
        writeln!(w, "{}: {}", label, if same { "shoda" } else { "NEshoda" })?;
    }
    Ok(())
}

pub fn write_random_row<W: Write>(
    w: &mut W,
    min: i64,
    max: i64,
    row: &[i64],
) -> io::Result<()> {
    let input = format!("Min: {}, Max: {}, Počet: {}", min, max, row.len());
    write_simple_report(w, RANDOM_NAME, &input, &format_row(row), None)
}

pub fn write_brute_force<W: Write>(w: &mut W, run: &BruteForceRun) -> io::Result<()> {
    let input = format!("Výchozí znaky: {}, Délka slova: {}", run.pool, run.length);
    let output = format!(
        "Počet kombinací: {}\nČas : {} ms\nKombinace: {}",
        run.count(),
        run.elapsed.as_millis(),
        run.permutations.join(", ")
    );
    write_simple_report(w, BRUTE_FORCE_NAME, &input, &output, None)
}
