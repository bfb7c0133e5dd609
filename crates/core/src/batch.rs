//! Print batches - many independent boards at once
//!
//! A batch is `count` distinct seeds and one board per seed. Boards share nothing
//! but the read-only pool, so each is exactly what `generate` returns for its seed.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::board::{generate, Board};
use crate::config::GeneratorConfig;
use crate::pool::WordPool;
use crate::seed::SeedSource;
use crate::types::MAX_PRINT_BOARDS;

/// Seed draws allowed per requested board before a batch gives up
const SEED_ATTEMPTS_PER_BOARD: usize = 16;

/// Boards for one print run, `boards[i]` generated from `seeds[i]`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrintJob {
    pub seeds: Vec<String>,
    pub boards: Vec<Board>,
}

impl PrintJob {
    pub fn len(&self) -> usize {
        self.boards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.boards.is_empty()
    }

    /// Boards paired with their seeds, in print order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Board)> + '_ {
        self.seeds.iter().map(String::as_str).zip(self.boards.iter())
    }
}

/// Clamp a requested board count to `1..=MAX_PRINT_BOARDS`
pub fn clamp_count(count: usize) -> usize {
    count.clamp(1, MAX_PRINT_BOARDS)
}

/// Generate a print batch of `count` boards (clamped) with distinct seeds.
pub fn generate_batch<S: SeedSource>(
    pool: &WordPool,
    count: usize,
    config: &GeneratorConfig,
    seeds: &mut S,
) -> PrintJob {
    let wanted = clamp_count(count);
    let mut seen = HashSet::with_capacity(wanted);
    let mut picked = Vec::with_capacity(wanted);

    let mut attempts = 0usize;
    while picked.len() < wanted && attempts < wanted * SEED_ATTEMPTS_PER_BOARD {
        attempts += 1;
        let seed = seeds.next_seed();
        if seen.insert(seed.clone()) {
            picked.push(seed);
        }
    }

    if picked.len() < wanted {
        tracing::warn!(
            wanted,
            found = picked.len(),
            attempts,
            "seed source ran out of distinct seeds"
        );
    }

    let boards = picked.iter().map(|seed| generate(pool, seed, config)).collect();
    PrintJob {
        seeds: picked,
        boards,
    }
}
