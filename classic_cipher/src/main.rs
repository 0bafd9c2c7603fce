use std::fs::File;
use std::path::{Path, PathBuf};

use cipher_kit::report::write_request_report;
use cipher_kit::{CipherParams, CipherRequest, LogNotifier, Mode, NumeralBase};
use clap::{Parser, ValueEnum};

// Defining the command-line arguments.
#[derive(Parser, Debug)]
#[command(version, about = "Caesar, August, Atbash, Morse and ASCII ciphers")]
struct Cli {
    #[arg(short, long, help = "Path to the input file")]
    file: PathBuf,

    #[arg(short, long, value_enum, help = "Cipher to apply")]
    cipher: CipherKind,

    #[arg(short, long, value_enum, default_value = "encrypt", help = "Mode of operation (encrypt/decrypt)")]
    mode: OperationMode,

    #[arg(short, long, default_value_t = 3, allow_hyphen_values = true, help = "Shift for the Caesar cipher")]
    shift: i32,

    #[arg(short, long, help = "Reverse the input before the cipher runs")]
    reverse: bool,

    #[arg(long, help = "Emit '/' between words when encoding Morse")]
    separated: bool,

    #[arg(short, long, value_enum, default_value = "decimal", help = "Numeral base of the ASCII cipher")]
    base: Base,

    #[arg(short, long, help = "Path to the output file, stdout when omitted")]
    output: Option<PathBuf>,

    #[arg(long, value_name = "PATH", help = "Export a text report")]
    report: Option<PathBuf>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum CipherKind {
    Caesar,
    August,
    Atbash,
    Morse,
    Ascii,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum OperationMode {
    Encrypt,
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

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Base {
    Decimal,
    Hex,
    Binary,
    Octal,
}

impl From<Base> for NumeralBase {
    fn from(base: Base) -> Self {
        match base {
            Base::Decimal => NumeralBase::Decimal,
            Base::Hex => NumeralBase::Hexadecimal,
            Base::Binary => NumeralBase::Binary,
            Base::Octal => NumeralBase::Octal,
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli: Cli = Cli::parse();

    let content = read_input(&cli.file)?;
    let request = build_request(&cli, content);
    log::debug!("running {:?} in {:?} mode", cli.cipher, request.mode);
    let output = request.run(&LogNotifier);

    match &cli.output {
        Some(path) => std::fs::write(path, &output)
            .map_err(|e| format!("Failed to write {}: {}", path.display(), e))?,
        None => println!("{}", output),
    }

    if let Some(path) = &cli.report {
        let mut file = File::create(path)
            .map_err(|e| format!("Failed to create report {}: {}", path.display(), e))?;
        write_request_report(&mut file, &request, &output)?;
    }

    Ok(())
}

fn read_input(path: &Path) -> Result<String, Box<dyn std::error::Error>> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| format!("Failed to read {}: {}", path.display(), e))?;
    Ok(content.trim_end_matches(['\r', '\n']).to_string())
}

fn build_request(cli: &Cli, input: String) -> CipherRequest {
    let params = match cli.cipher {
        CipherKind::Caesar => CipherParams::Caesar { shift: cli.shift },
        CipherKind::August => CipherParams::August,
        CipherKind::Atbash => CipherParams::Atbash,
        CipherKind::Morse => CipherParams::Morse {
            separated: cli.separated,
        },
        CipherKind::Ascii => CipherParams::Ascii {
            base: cli.base.into(),
        },
    };
    CipherRequest::new(input, cli.mode.into(), params).reversed(cli.reverse)
}
