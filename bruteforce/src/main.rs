use clap::Parser;
use std::fs::{self, File};
use std::path::PathBuf;

use cipher_kit::permutation::MAX_BRUTE_FORCE_LENGTH;
use cipher_kit::report::write_brute_force;
use cipher_kit::{brute_force, BruteForceRun};

/// Simple brute force
///
/// Lists every word of the given length built from the pool characters,
/// repetition allowed, and reports how long the enumeration took.
#[derive(Parser, Debug)]
#[command(name = "bruteforce", version, about = "Timed enumeration of all words over a character pool")]
struct Args {
    /// Characters the words are built from
    #[arg(short, long)]
    pool: String,

    /// Word length
    #[arg(short, long, value_parser = clap::value_parser!(u8).range(1..=MAX_BRUTE_FORCE_LENGTH as i64))]
    length: u8,

    /// Output file for the word list, stdout when omitted
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Export a text report
    #[arg(long, value_name = "PATH")]
    report: Option<PathBuf>,
}

fn summary(run: &BruteForceRun) -> String {
    format!(
        "Combinations: {}\nTime: {} ms",
        run.count(),
        run.elapsed.as_millis()
    )
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let args = Args::parse();

    let run = brute_force(&args.pool, usize::from(args.length));
    log::debug!("{} words in {:?}", run.count(), run.elapsed);

    match &args.output {
        Some(path) => {
            fs::write(path, run.permutations.join("\n"))
                .map_err(|e| format!("Failed to write {}: {}", path.display(), e))?;
            println!("{}", summary(&run));
        }
        None => {
            for word in run.permutations.iter() {
                println!("{}", word);
            }
            eprintln!("{}", summary(&run));
        }
    }

    if let Some(path) = &args.report {
        let mut file = File::create(path)?;
        write_brute_force(&mut file, &run)?;
    }

    Ok(())
}
