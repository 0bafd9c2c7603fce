use std::fs::File;
use std::path::PathBuf;

use cipher_kit::report::write_request_report;
use cipher_kit::{CipherParams, CipherRequest, Mode, Notifier};
use clap::{Parser, ValueEnum};

/// Command-line arguments for the Vigenère cipher program.
#[derive(Parser, Debug)]
#[command(version, about = "Vigenère cipher with an alphanumeric key")]
struct Cli {
    /// Path to the input file containing text to encrypt/decrypt
    #[arg(short, long, help = "Path to the input file")]
    file: PathBuf,

    /// Key string for the Vigenère cipher
    #[arg(short, long, help = "Key string for the cipher")]
    key: String,

    /// Path to the output file where result will be saved
    #[arg(short, long, help = "Path to the output file, stdout when omitted")]
    output: Option<PathBuf>,

    /// Mode of operation (encrypt or decrypt)
    #[arg(short, long, help = "Mode of operation (encrypt/decrypt)")]
    mode: OperationMode,

    /// Reverse the input before the cipher runs
    #[arg(short, long)]
    reverse: bool,

    /// Export a text report
    #[arg(long, value_name = "PATH")]
    report: Option<PathBuf>,
}

/// Enum representing the mode of operation for the cipher.
#[derive(Clone, Copy, Debug, ValueEnum)]
enum OperationMode {
    /// Encrypt mode
    Encrypt,
    /// Decrypt mode
    Decrypt,
}

impl From<OperationMode> for Mode {
    fn from(mode: OperationMode) -> Self {
        match mode {
            OperationMode::Encrypt => Mode::Encode,
            OperationMode::Decrypt => Mode::Decode,
        }
    }
}

/// Prints key warnings to stderr.
struct StderrNotifier;

impl Notifier for StderrNotifier {
    fn notify(&self, message: &str, title: &str) {
        eprintln!("{}: {}", title, message);
    }
}

/// Main entry point for the Vigenère cipher program.
fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli: Cli = Cli::parse();

    // Read input file content
    let content = std::fs::read_to_string(&cli.file)
        .map_err(|e| format!("Failed to read {}: {}", cli.file.display(), e))?;

    let request = build_request(&cli, content.trim_end_matches(['\r', '\n']));
    log::debug!("vigenere {:?}, key length {}", request.mode, cli.key.chars().count());
    let output = request.run(&StderrNotifier);

    match &cli.output {
        Some(path) => {
            std::fs::write(path, &output)
                .map_err(|e| format!("Failed to write {}: {}", path.display(), e))?;
            println!("Operation completed successfully! Output saved to: {}", path.display());
        }
        None => println!("{}", output),
    }

    if let Some(path) = &cli.report {
        let mut file = File::create(path)?;
        write_request_report(&mut file, &request, &output)?;
    }

    Ok(())
}

fn build_request(cli: &Cli, input: &str) -> CipherRequest {
    let params = CipherParams::Vigenere {
        key: cli.key.clone(),
    };
    CipherRequest::new(input, cli.mode.into(), params).reversed(cli.reverse)
}

#[cfg(test)]
mod tests {
    use super::*;
    use cipher_kit::SilentNotifier;
    use std::cell::Cell;

    fn cli(args: &[&str]) -> Cli {
        Cli::try_parse_from(args).unwrap()
    }

    #[test]
    fn test_encrypt_known_vector() {
        let cli = cli(&["vigenere", "-f", "in.txt", "-k", "LEMON", "-m", "encrypt"]);
        assert_eq!(build_request(&cli, "ATTACKATDAWN").run(&SilentNotifier), "LXFOPVEFRNHR");
    }

    #[test]
    fn test_decrypt_restores_plaintext() {
        let cli = cli(&["vigenere", "-f", "in.txt", "-k", "LEMON", "-m", "decrypt"]);
        assert_eq!(build_request(&cli, "LXFOPVEFRNHR").run(&SilentNotifier), "ATTACKATDAWN");
    }

    #[test]
    fn test_invalid_key_still_runs_and_warns() {
        let warnings = Cell::new(0);
        let notifier = |_: &str, _: &str| warnings.set(warnings.get() + 1);

        let cli = cli(&["vigenere", "-f", "in.txt", "-k", "a-b", "-m", "encrypt"]);
        let output = build_request(&cli, "hello").run(&notifier);
        assert_eq!(output.chars().count(), 5);
        assert_eq!(warnings.get(), 1);
    }
}
