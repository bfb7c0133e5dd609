//! Word pool - the immutable list of words and odds
//!
//! The pool is loaded once at startup and passed by reference into every board
//! generation. Words are unique within a pool.
//!
//! # File Format
//!
//! ```text
//! ord;odds
//! Danmark;1,5
//! Kunstig intelligens;12
//! ```
//!
//! The first non-blank line is a header. Each following line is `word;odds`
//! with a comma or dot as decimal separator. Lines with an empty word or
//! unusable odds are skipped.

use std::collections::HashSet;
use std::fmt;
use std::ops::Deref;
use std::path::Path;

use anyhow::{Context, Result};

use crate::config::parse_odds;
use crate::types::WordEntry;

/// Environment variable naming the word pool file
pub const ENV_WORD_POOL: &str = "BINGO_WORD_POOL";

/// Word pool file used when `BINGO_WORD_POOL` is unset
pub const DEFAULT_POOL_FILE: &str = "kongens_nytaarstale_odds_sorted.csv";

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PoolError {
    /// No usable entries after parsing
    Empty,
    Io { path: String, message: String },
}

impl fmt::Display for PoolError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "word pool has no usable entries"),
            Self::Io { path, message } => write!(f, "cannot read word pool {path}: {message}"),
        }
    }
}

impl std::error::Error for PoolError {}

/// Immutable, de-duplicated list of word entries
#[derive(Debug, Clone, PartialEq)]
pub struct WordPool {
    entries: Vec<WordEntry>,
}

impl WordPool {
    /// Build a pool from entries, dropping invalid ones and repeated words.
    ///
    /// The first occurrence of a word wins.
    pub fn from_entries(entries: Vec<WordEntry>) -> Result<Self, PoolError> {
        let offered = entries.len();
        let mut seen = HashSet::new();
        let entries: Vec<WordEntry> = entries
            .into_iter()
            .filter(|e| e.is_valid() && seen.insert(e.word.clone()))
            .collect();

        if entries.is_empty() {
            return Err(PoolError::Empty);
        }

        tracing::debug!(kept = entries.len(), dropped = offered - entries.len(), "word pool built");
        Ok(Self { entries })
    }

    /// Parse the semicolon-delimited format.
    pub fn parse(raw: &str) -> Result<Self, PoolError> {
        let (entries, lines) = parse_entries(raw);
        tracing::debug!(
            lines,
            parsed = entries.len(),
            dropped = lines - entries.len(),
            "word pool lines parsed"
        );
        Self::from_entries(entries)
    }

    /// Read and parse a pool file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|e| PoolError::Io {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        let pool = Self::parse(&raw)
            .with_context(|| format!("failed to load word pool from {}", path.display()))?;
        tracing::debug!(path = %path.display(), words = pool.len(), "word pool loaded");
        Ok(pool)
    }

    /// Load from `BINGO_WORD_POOL`, or the default file in the working directory.
    pub fn load_default() -> Result<Self> {
        let path = std::env::var(ENV_WORD_POOL)
            .ok()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| DEFAULT_POOL_FILE.to_string());
        Self::load(path)
    }

    pub fn entries(&self) -> &[WordEntry] {
        &self.entries
    }

    /// Look up a word's entry
    pub fn get(&self, word: &str) -> Option<&WordEntry> {
        self.entries.iter().find(|e| e.word == word)
    }
}

impl Deref for WordPool {
    type Target = [WordEntry];

    fn deref(&self) -> &[WordEntry] {
        &self.entries
    }
}

/// Entries from every data line, plus the number of data lines seen
fn parse_entries(raw: &str) -> (Vec<WordEntry>, usize) {
    let lines: Vec<&str> = raw
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .skip(1)
        .collect();
    let entries = lines.iter().filter_map(|line| parse_line(line)).collect();
    (entries, lines.len())
}

fn parse_line(line: &str) -> Option<WordEntry> {
    let mut fields = line.split(';');
    let word = fields.next()?.trim();
    let odds = parse_odds(fields.next()?)?;
    if word.is_empty() {
        return None;
    }
    Some(WordEntry::new(word, odds))
}
