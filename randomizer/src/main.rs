use clap::{Parser, Subcommand};
use std::fs::File;
use std::path::PathBuf;

use cipher_kit::random::format_row;
use cipher_kit::report::write_random_row;
use cipher_kit::Randomizer;

/// Random number generator
#[derive(Parser, Debug)]
#[command(name = "randomizer", version, about = "Random numbers and rows of random integers")]
struct Args {
    #[command(subcommand)]
    command: Command,

    /// Seed for a reproducible sequence
    #[arg(long, global = true)]
    seed: Option<u64>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// One number in [min, max]; decimals fall in [min, max)
    Number {
        #[arg(long, allow_hyphen_values = true)]
        min: i64,
        #[arg(long, allow_hyphen_values = true)]
        max: i64,
        /// Draw a decimal rounded to three places
        #[arg(long)]
        decimal: bool,
    },
    /// `count` integers in [min, max]
    Row {
        #[arg(long, allow_hyphen_values = true)]
        min: i64,
        #[arg(long, allow_hyphen_values = true)]
        max: i64,
        #[arg(long)]
        count: usize,
        /// Export a text report
        #[arg(long, value_name = "PATH")]
        report: Option<PathBuf>,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let args = Args::parse();

    let mut randomizer = match args.seed {
        Some(seed) => {
            log::debug!("seeding generator with {}", seed);
            Randomizer::with_seed(seed)
        }
        None => Randomizer::new(),
    };

    match args.command {
        Command::Number { min, max, decimal } => {
            println!("{}", randomizer.number(min, max, decimal)?);
        }
        Command::Row { min, max, count, report } => {
            log::info!("drawing {} numbers from [{}, {}]", count, min, max);
            let row = randomizer.row(min, max, count)?;
            println!("{}", format_row(&row));
            if let Some(path) = report {
                log::info!("writing report to {}", path.display());
                let mut file = File::create(&path)?;
                write_random_row(&mut file, min, max, &row)?;
            }
        }
    }

    Ok(())
}
