//! Candidate selection
//!
//! Words are drawn in three phases that share one taken-word set:
//!
//! 1. **Jackpot**: at most one word with odds at or above the jackpot floor
//! 2. **Span**: words inside the odds span and below the jackpot floor
//! 3. **Emergency**: only when the span phase ran dry, words inside the span
//!    regardless of the jackpot floor
//!
//! Every draw shuffles the whole filtered candidate list and takes a prefix, so
//! the number of PRNG draws depends on the candidate count, not on how many
//! words are needed.

use std::collections::HashSet;

use crate::config::GeneratorConfig;
use crate::rng::BoardRng;
use crate::types::{Bucket, BoardCell, Thresholds, WordEntry};

/// Shuffle `candidates` and keep the first `count`.
pub fn draw<'a, R: BoardRng>(
    mut candidates: Vec<&'a WordEntry>,
    count: usize,
    rng: &mut R,
) -> Vec<&'a WordEntry> {
    rng.shuffle(&mut candidates);
    candidates.truncate(count);
    candidates
}

/// Selected cells for one board, in draw order (jackpot, span, emergency).
///
/// Holds at most `total` cells; fewer when the pool runs out.
pub fn select_entries<R: BoardRng>(
    pool: &[WordEntry],
    total: usize,
    config: &GeneratorConfig,
    thresholds: &Thresholds,
    rng: &mut R,
) -> Vec<BoardCell> {
    let mut taken: HashSet<&str> = HashSet::new();
    let mut selected = Vec::with_capacity(total);

    let jackpot_candidates: Vec<&WordEntry> = pool
        .iter()
        .filter(|e| e.odds >= config.jackpot_odds_min && !taken.contains(e.word.as_str()))
        .collect();
    if let Some(pick) = draw(jackpot_candidates, 1, rng).into_iter().next() {
        taken.insert(pick.word.as_str());
        selected.push(BoardCell::filled(pick, Bucket::Jackpot));
    }

    let span_candidates: Vec<&WordEntry> = pool
        .iter()
        .filter(|e| {
            config.in_span(e.odds)
                && e.odds < config.jackpot_odds_min
                && !taken.contains(e.word.as_str())
        })
        .collect();
    let remaining = total.saturating_sub(selected.len());
    for entry in draw(span_candidates, remaining, rng) {
        taken.insert(entry.word.as_str());
        selected.push(classified(entry, config, thresholds));
    }

    if selected.len() < total {
        let emergency_candidates: Vec<&WordEntry> = pool
            .iter()
            .filter(|e| config.in_span(e.odds) && !taken.contains(e.word.as_str()))
            .collect();
        let remaining = total - selected.len();
        for entry in draw(emergency_candidates, remaining, rng) {
            taken.insert(entry.word.as_str());
            selected.push(classified(entry, config, thresholds));
        }
    }

    selected
}

fn classified(
    entry: &WordEntry,
    config: &GeneratorConfig,
    thresholds: &Thresholds,
) -> BoardCell {
    let bucket = crate::bucket::classify(entry.odds, thresholds, config.jackpot_odds_min);
    BoardCell::filled(entry, bucket)
}
