//! Bucket classification
//!
//! Maps odds to the display tier printed on a cell. The medium/jackpot boundary
//! is `jackpot_odds_min` alone; `Thresholds::medium_max` is never consulted.

use crate::types::{Bucket, Thresholds, HIGH_MAX_FRACTION, MEDIUM_MAX_FRACTION};

/// Interpolate the tier boundaries at 33% and 66% of the odds span.
///
/// # Examples
///
/// ```
/// use speech_bingo_core::create_thresholds;
///
/// let t = create_thresholds(1.0, 8.0);
/// assert!((t.high_max - 3.31).abs() < 1e-9);
/// assert!((t.medium_max - 5.62).abs() < 1e-9);
/// ```
pub fn create_thresholds(odds_span_min: f64, odds_span_max: f64) -> Thresholds {
    let span = odds_span_max - odds_span_min;
    Thresholds {
        high_max: odds_span_min + span * HIGH_MAX_FRACTION,
        medium_max: odds_span_min + span * MEDIUM_MAX_FRACTION,
    }
}

/// Classify odds into a bucket.
///
/// - `odds >= jackpot_odds_min` is [`Bucket::Jackpot`]
/// - otherwise `odds <= thresholds.high_max` is [`Bucket::Low`]
/// - everything else is [`Bucket::Medium`]
pub fn classify(odds: f64, thresholds: &Thresholds, jackpot_odds_min: f64) -> Bucket {
    if odds >= jackpot_odds_min {
        return Bucket::Jackpot;
    }
    if odds <= thresholds.high_max {
        return Bucket::Low;
    }
    Bucket::Medium
}
