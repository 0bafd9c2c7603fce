//! Brute-force permutation explorer
//!
//! Enumerates every string of a fixed length drawn, with repetition, from a
//! character pool. Cost grows as `|pool|^length`; bounding `length` is the
//! caller's job, the engine enforces no limit.

use std::collections::HashSet;
use std::time::{Duration, Instant};

/// Longest word length the command-line front end allows.
pub const MAX_BRUTE_FORCE_LENGTH: usize = 6;

/// Distinct permutations, in the order they were first generated.
///
/// Membership checks go through a hash index kept next to the ordered list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PermutationSet {
    items: Vec<String>,
    index: HashSet<String>,
}

impl PermutationSet {
    /// Appends `candidate` unless it is already present. Returns whether it was added.
    pub fn insert(&mut self, candidate: &str) -> bool {
        if self.index.contains(candidate) {
            return false;
        }
        self.index.insert(candidate.to_string());
        self.items.push(candidate.to_string());
        true
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn contains(&self, candidate: &str) -> bool {
        self.index.contains(candidate)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.items.iter().map(String::as_str)
    }

    pub fn join(&self, separator: &str) -> String {
        self.items.join(separator)
    }

    pub fn into_vec(self) -> Vec<String> {
        self.items
    }
}

/// All distinct strings of exactly `length` characters from `pool`.
///
/// Repeated characters in `pool` produce duplicate candidates, which collapse
/// in the set. `length == 0` yields the single empty string; an empty pool
/// with a positive length yields nothing.
pub fn permutations(pool: &str, length: usize) -> PermutationSet {
    let pool: Vec<char> = pool.chars().collect();
    let mut set = PermutationSet::default();
    let mut prefix = String::with_capacity(length * 4);

    permute(&pool, length, &mut prefix, &mut set);
    set
}

fn permute(pool: &[char], remaining: usize, prefix: &mut String, set: &mut PermutationSet) {
    if remaining == 0 {
        set.insert(prefix);
        return;
    }

    for &c in pool {
        prefix.push(c);
        permute(pool, remaining - 1, prefix, set);
        prefix.pop();
    }
}

/// One timed brute-force run.
#[derive(Debug, Clone)]
pub struct BruteForceRun {
    pub pool: String,
    pub length: usize,
    pub permutations: PermutationSet,
    pub elapsed: Duration,
}

impl BruteForceRun {
    pub fn count(&self) -> usize {
        self.permutations.len()
    }
}

/// Enumerates [`permutations`] and measures how long it took.
pub fn brute_force(pool: &str, length: usize) -> BruteForceRun {
    log::debug!("brute force: {} chars, length {}", pool.chars().count(), length);
    let started = Instant::now();
    let permutations = permutations(pool, length);
    let elapsed = started.elapsed();
    log::debug!("brute force: {} combinations in {:?}", permutations.len(), elapsed);

    BruteForceRun {
        pool: pool.to_string(),
        length,
        permutations,
        elapsed,
    }
}
