//! Random number and random row generator

use std::fmt;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::{CipherError, Result};

/// Integer or decimal draw
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RandomNumber {
    Integer(i64),
    Decimal(f64),
}

impl fmt::Display for RandomNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RandomNumber::Integer(value) => write!(f, "{}", value),
            RandomNumber::Decimal(value) => write!(f, "{}", value),
        }
    }
}

pub struct Randomizer {
    rng: StdRng,
}

impl Default for Randomizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Randomizer {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Reproducible sequence for tests and demos
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// An integer in `[min, max]`, or with `decimal` a value in `[min, max)`
    /// rounded to three decimal places.
    pub fn number(&mut self, min: i64, max: i64, decimal: bool) -> Result<RandomNumber> {
        check_range(min, max)?;

        if decimal {
            let span = max as f64 - min as f64;
            let value = self.rng.gen::<f64>() * span + min as f64;
            Ok(RandomNumber::Decimal((value * 1000.0).round() / 1000.0))
        } else {
            Ok(RandomNumber::Integer(self.rng.gen_range(min..=max)))
        }
    }

    /// `count` integers, each in `[min, max]`.
    pub fn row(&mut self, min: i64, max: i64, count: usize) -> Result<Vec<i64>> {
        check_range(min, max)?;
        Ok((0..count).map(|_| self.rng.gen_range(min..=max)).collect())
    }
}

fn check_range(min: i64, max: i64) -> Result<()> {
    if min > max {
        return Err(CipherError::InvalidRange { min, max });
    }
    Ok(())
}

/// Joins a row the way reports show it: `1, 5, 3`.
pub fn format_row(row: &[i64]) -> String {
    row.iter()
        .map(i64::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integer_within_bounds() {
        let mut rand = Randomizer::with_seed(1);
        for _ in 0..1000 {
            match rand.number(-3, 3, false).unwrap() {
                RandomNumber::Integer(value) => assert!((-3..=3).contains(&value)),
                other => panic!("expected integer, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_decimal_rounded() {
        let mut rand = Randomizer::with_seed(2);
        for _ in 0..1000 {
            let RandomNumber::Decimal(value) = rand.number(1, 2, true).unwrap() else {
                panic!("expected decimal");
            };
            assert!((1.0..=2.0).contains(&value));
            assert!(((value * 1000.0).round() - value * 1000.0).abs() < 1e-6);
        }
    }

    #[test]
    fn test_degenerate_range() {
        let mut rand = Randomizer::with_seed(3);
        assert_eq!(rand.number(5, 5, false).unwrap(), RandomNumber::Integer(5));
        assert_eq!(rand.row(7, 7, 3).unwrap(), vec![7, 7, 7]);
    }

    #[test]
    fn test_inverted_range_rejected() {
        let mut rand = Randomizer::with_seed(4);
        assert!(matches!(
            rand.number(10, 1, false),
            Err(CipherError::InvalidRange { min: 10, max: 1 })
        ));
        assert!(rand.row(10, 1, 5).is_err());
    }

    #[test]
    fn test_row_and_format() {
        let mut rand = Randomizer::with_seed(5);
        let row = rand.row(0, 9, 8).unwrap();
        assert_eq!(row.len(), 8);
        assert!(row.iter().all(|v| (0..=9).contains(v)));
        assert_eq!(format_row(&[1, 22, 3]), "1, 22, 3");
        assert!(rand.row(0, 9, 0).unwrap().is_empty());
    }

    #[test]
    fn test_seeded_is_reproducible() {
        let a = Randomizer::with_seed(99).row(0, 1000, 10).unwrap();
        let b = Randomizer::with_seed(99).row(0, 1000, 10).unwrap();
        assert_eq!(a, b);
    }
}
