//! Word pool loading tests

use std::io::Write;

use anyhow::Result;
use speech_bingo::core::{generate, GeneratorConfig, PoolError, WordPool};

const ODDS_FILE: &str = "\u{feff}Ord;Odds\n\
    Danmark;1,5\n\
    Familie;1,8\n\
    Tak;1,2\n\
    Fremtid;2,5\n\
    Sammenhold;3\n\
    Grønland;3,5\n\
    \n\
    Ukraine;4,5\n\
    Klima;5\n\
    Forsvar;7\n\
    Skål;101\n\
    Ødelagt linje\n\
    ;4\n\
    Kryptisk;NaN\n";

#[test]
fn test_load_from_file() -> Result<()> {
    let mut file = tempfile::NamedTempFile::new()?;
    file.write_all(ODDS_FILE.as_bytes())?;

    let pool = WordPool::load(file.path())?;
    assert_eq!(pool.len(), 10);
    assert_eq!(pool.get("Skål").map(|e| e.odds), Some(101.0));
    assert!(pool.get("Kryptisk").is_none());
    assert!(pool.get("Ødelagt linje").is_none());

    let board = generate(&pool, "file", &GeneratorConfig::default());
    assert!(board.filled_count() >= 6);
    Ok(())
}

#[test]
fn test_missing_file_is_an_error() {
    let err = WordPool::load("/definitely/not/here.csv").unwrap_err();
    let pool_err = err.downcast_ref::<PoolError>().unwrap();
    assert!(matches!(pool_err, PoolError::Io { .. }));
    assert!(err.to_string().contains("/definitely/not/here.csv"));
}

#[test]
fn test_header_only_file_is_empty_pool() -> Result<()> {
    let mut file = tempfile::NamedTempFile::new()?;
    file.write_all(b"Ord;Odds\n\n")?;

    let err = WordPool::load(file.path()).unwrap_err();
    assert_eq!(err.downcast_ref::<PoolError>(), Some(&PoolError::Empty));
    assert!(format!("{:#}", err).contains("word pool has no usable entries"));
    Ok(())
}

#[test]
fn test_crlf_file() {
    let pool = WordPool::parse("Ord;Odds\r\nTak;1,2\r\nKlima;5\r\n").unwrap();
    assert_eq!(pool.len(), 2);
    assert_eq!(pool.get("Klima").map(|e| e.odds), Some(5.0));
}
