//! Generator configuration
//!
//! The odds span and jackpot floor that drive word selection. Defaults match
//! the printed and online boards; hosts may override them through the
//! environment.

use std::env;

use serde::{Deserialize, Serialize};

use crate::types::{Thresholds, JACKPOT_ODDS_MIN, ODDS_SPAN_MAX, ODDS_SPAN_MIN};

pub const ENV_ODDS_SPAN_MIN: &str = "BINGO_ODDS_SPAN_MIN";
pub const ENV_ODDS_SPAN_MAX: &str = "BINGO_ODDS_SPAN_MAX";
pub const ENV_JACKPOT_ODDS_MIN: &str = "BINGO_JACKPOT_ODDS_MIN";

/// Odds configuration for board generation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeneratorConfig {
    pub odds_span_min: f64,
    pub odds_span_max: f64,
    pub jackpot_odds_min: f64,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            odds_span_min: ODDS_SPAN_MIN,
            odds_span_max: ODDS_SPAN_MAX,
            jackpot_odds_min: JACKPOT_ODDS_MIN,
        }
    }
}

impl GeneratorConfig {
    /// Create from environment variables
    ///
    /// Missing or unparsable values keep their defaults. A span whose minimum
    /// exceeds its maximum falls back to the default span.
    pub fn from_env() -> Self {
        let mut odds_span_min = read_env_f64(ENV_ODDS_SPAN_MIN, ODDS_SPAN_MIN);
        let mut odds_span_max = read_env_f64(ENV_ODDS_SPAN_MAX, ODDS_SPAN_MAX);

        if odds_span_min > odds_span_max {
            tracing::warn!(
                "{} ({}) > {} ({}). Falling back to defaults.",
                ENV_ODDS_SPAN_MIN,
                odds_span_min,
                ENV_ODDS_SPAN_MAX,
                odds_span_max
            );
            odds_span_min = ODDS_SPAN_MIN;
            odds_span_max = ODDS_SPAN_MAX;
        }

        Self {
            odds_span_min,
            odds_span_max,
            jackpot_odds_min: read_env_f64(ENV_JACKPOT_ODDS_MIN, JACKPOT_ODDS_MIN),
        }
    }

    /// Bucket thresholds for this span
    pub fn thresholds(&self) -> Thresholds {
        crate::bucket::create_thresholds(self.odds_span_min, self.odds_span_max)
    }

    /// `odds_span_min <= odds <= odds_span_max`
    pub fn in_span(&self, odds: f64) -> bool {
        odds >= self.odds_span_min && odds <= self.odds_span_max
    }
}

fn read_env_f64(key: &str, default: f64) -> f64 {
    match env::var(key) {
        Ok(raw) => parse_odds(&raw).unwrap_or_else(|| {
            tracing::warn!("{} is not a finite number ({:?}), using {}", key, raw, default);
            default
        }),
        Err(_) => default,
    }
}

/// Parse odds written with either `.` or `,` as decimal separator.
///
/// Reads the longest number at the start of the field and ignores the rest,
/// so `"12 (ca.)"` is 12. A field that does not start with a number is `None`.
pub(crate) fn parse_odds(raw: &str) -> Option<f64> {
    let normalized = raw.trim().replacen(',', ".", 1);
    numeric_prefix(&normalized)
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
}

/// Longest `[sign] digits [. digits] [e [sign] digits]` prefix of `s`
fn numeric_prefix(s: &str) -> &str {
    let bytes = s.as_bytes();
    let digits_from = |start: usize| {
        bytes[start..]
            .iter()
            .take_while(|b| b.is_ascii_digit())
            .count()
    };

    let mut end = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end += 1;
    }

    let int_digits = digits_from(end);
    end += int_digits;

    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        frac_digits = digits_from(end + 1);
        if int_digits + frac_digits > 0 {
            end += 1 + frac_digits;
        }
    }
    if int_digits + frac_digits == 0 {
        return "";
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp = end + 1;
        if matches!(bytes.get(exp), Some(b'+' | b'-')) {
            exp += 1;
        }
        let exp_digits = digits_from(exp);
        if exp_digits > 0 {
            end = exp + exp_digits;
        }
    }

    &s[..end]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_matches_board_constants() {
        let config = GeneratorConfig::default();
        assert_eq!(config.odds_span_min, 1.0);
        assert_eq!(config.odds_span_max, 8.0);
        assert_eq!(config.jackpot_odds_min, 100.0);
    }

    #[test]
    fn test_in_span_is_inclusive() {
        let config = GeneratorConfig::default();
        assert!(config.in_span(1.0));
        assert!(config.in_span(8.0));
        assert!(!config.in_span(0.99));
        assert!(!config.in_span(8.01));
    }

    #[test]
    fn test_parse_odds_accepts_comma() {
        assert_eq!(parse_odds("2,5"), Some(2.5));
        assert_eq!(parse_odds(" 7.25 "), Some(7.25));
        assert_eq!(parse_odds("abc"), None);
        assert_eq!(parse_odds("inf"), None);
        assert_eq!(parse_odds(""), None);
    }

    #[test]
    fn test_parse_odds_reads_leading_number() {
        assert_eq!(parse_odds("2,5x"), Some(2.5));
        assert_eq!(parse_odds("12 (ca.)"), Some(12.0));
        assert_eq!(parse_odds("5."), Some(5.0));
        assert_eq!(parse_odds(",5"), Some(0.5));
        assert_eq!(parse_odds("1e2"), Some(100.0));
        assert_eq!(parse_odds("3e"), Some(3.0));
        assert_eq!(parse_odds("-4 odds"), Some(-4.0));
        assert_eq!(parse_odds("ca. 12"), None);
        assert_eq!(parse_odds("."), None);
        assert_eq!(parse_odds("-"), None);
        assert_eq!(parse_odds("1e999"), None);
    }

    #[test]
    fn test_thresholds_follow_span() {
        let config = GeneratorConfig {
            odds_span_min: 2.0,
            odds_span_max: 8.0,
            jackpot_odds_min: 100.0,
        };
        let t = config.thresholds();
        assert!((t.high_max - 3.98).abs() < 1e-9);
        assert!((t.medium_max - 5.96).abs() < 1e-9);
    }

    #[test]
    fn test_serde_shape() {
        let json = serde_json::to_value(GeneratorConfig::default()).unwrap();
        assert_eq!(json["odds_span_max"], 8.0);
        assert_eq!(json["jackpot_odds_min"], 100.0);
    }
}
