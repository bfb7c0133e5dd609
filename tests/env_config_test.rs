//! Environment configuration.
//!
//! Kept to a single test so no other test in this binary observes the
//! variables while they are set.

use std::io::Write;

use speech_bingo::core::config::{ENV_JACKPOT_ODDS_MIN, ENV_ODDS_SPAN_MAX, ENV_ODDS_SPAN_MIN};
use speech_bingo::core::pool::ENV_WORD_POOL;
use speech_bingo::core::{GeneratorConfig, WordPool};

#[test]
fn env_overrides_and_fallbacks() {
    std::env::set_var(ENV_ODDS_SPAN_MIN, "2");
    std::env::set_var(ENV_ODDS_SPAN_MAX, "9,5");
    std::env::set_var(ENV_JACKPOT_ODDS_MIN, "not-a-number");
    let config = GeneratorConfig::from_env();
    assert_eq!(config.odds_span_min, 2.0);
    assert_eq!(config.odds_span_max, 9.5);
    assert_eq!(config.jackpot_odds_min, 100.0);

    // Inverted span falls back to the default span.
    std::env::set_var(ENV_ODDS_SPAN_MIN, "10");
    std::env::set_var(ENV_ODDS_SPAN_MAX, "3");
    let config = GeneratorConfig::from_env();
    assert_eq!(config.odds_span_min, 1.0);
    assert_eq!(config.odds_span_max, 8.0);

    std::env::remove_var(ENV_ODDS_SPAN_MIN);
    std::env::remove_var(ENV_ODDS_SPAN_MAX);
    std::env::remove_var(ENV_JACKPOT_ODDS_MIN);
    assert_eq!(GeneratorConfig::from_env(), GeneratorConfig::default());

    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all("Ord;Odds\nTak;1,2\nKlima;5\n".as_bytes()).unwrap();
    std::env::set_var(ENV_WORD_POOL, file.path());
    let pool = WordPool::load_default().unwrap();
    assert_eq!(pool.len(), 2);

    std::env::set_var(ENV_WORD_POOL, "/definitely/not/here.csv");
    assert!(WordPool::load_default().is_err());
    std::env::remove_var(ENV_WORD_POOL);
}
