//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the workspace.
//! All types are plain data with no logic beyond string conversions, making them
//! usable in any context (board generation, win checks, UI consumers).
//!
//! # Board Dimensions
//!
//! A bingo board is a 3x4 grid stored row-major as 12 cells:
//!
//! - **Rows**: 3 (indexed 0-2)
//! - **Columns**: 4 (indexed 0-3)
//! - **Index**: `row * BOARD_COLS + col`
//! - **Filled per row**: 2 or 3 cells, the rest are empty
//!
//! # Odds Defaults
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `ODDS_SPAN_MIN` | 1 | Lowest odds drawn for normal cells |
//! | `ODDS_SPAN_MAX` | 8 | Highest odds drawn for normal cells |
//! | `JACKPOT_ODDS_MIN` | 100 | Odds at or above this are jackpot words |
//!
//! # Examples
//!
//! ```
//! use speech_bingo_types::{Bucket, BoardCell, BOARD_COLS, BOARD_ROWS, TOTAL_CELLS};
//!
//! assert_eq!(TOTAL_CELLS, BOARD_ROWS * BOARD_COLS);
//!
//! // Parse a bucket from its display label or its wire name
//! assert_eq!(Bucket::from_str("grøn"), Some(Bucket::Low));
//! assert_eq!(Bucket::from_str("jackpot"), Some(Bucket::Jackpot));
//!
//! // Empty cells are never markable
//! let cell = BoardCell::empty();
//! assert!(cell.empty);
//! assert!(!cell.marked);
//! ```

use serde::{Deserialize, Serialize};

/// Board height in cells (3 rows)
pub const BOARD_ROWS: usize = 3;

/// Board width in cells (4 columns)
pub const BOARD_COLS: usize = 4;

/// Total number of cells on a board
pub const TOTAL_CELLS: usize = BOARD_ROWS * BOARD_COLS;

/// Fewest filled cells in any row
pub const MIN_FILLED_PER_ROW: usize = 2;

/// Most filled cells in any row
pub const MAX_FILLED_PER_ROW: usize = 3;

/// Upper bound on filled cells for a whole board (9 for 3x4)
pub const MAX_FILLED_CELLS: usize = BOARD_ROWS * MAX_FILLED_PER_ROW;

/// Lower bound on filled cells for a whole board (6 for 3x4)
pub const MIN_FILLED_CELLS: usize = BOARD_ROWS * MIN_FILLED_PER_ROW;

/// Default lower edge of the odds span used for normal cells
pub const ODDS_SPAN_MIN: f64 = 1.0;

/// Default upper edge of the odds span used for normal cells
pub const ODDS_SPAN_MAX: f64 = 8.0;

/// Default odds at or above which a word counts as a jackpot
pub const JACKPOT_ODDS_MIN: f64 = 100.0;

/// Fraction of the odds span that is still "low"
pub const HIGH_MAX_FRACTION: f64 = 0.33;

/// Fraction of the odds span that is still "medium"
pub const MEDIUM_MAX_FRACTION: f64 = 0.66;

/// Word shown on empty cells
pub const EMPTY_CELL_WORD: &str = "Tomt felt";

/// Most boards a single print batch may contain
pub const MAX_PRINT_BOARDS: usize = 50;

/// A word from the odds list together with its odds value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WordEntry {
    pub word: String,
    pub odds: f64,
}

impl WordEntry {
    pub fn new(word: impl Into<String>, odds: f64) -> Self {
        Self {
            word: word.into(),
            odds,
        }
    }

    /// Non-empty word with finite, positive odds
    pub fn is_valid(&self) -> bool {
        !self.word.is_empty() && self.odds.is_finite() && self.odds > 0.0
    }
}

/// Display tier of a filled cell
///
/// - **Low**: green tier, likely words (odds up to the low threshold)
/// - **Medium**: yellow tier, everything between low and jackpot
/// - **Jackpot**: the single featured long shot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Bucket {
    Low,
    Medium,
    Jackpot,
}

impl Bucket {
    /// Parse bucket from its wire name or its display label (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use speech_bingo_types::Bucket;
    ///
    /// assert_eq!(Bucket::from_str("low"), Some(Bucket::Low));
    /// assert_eq!(Bucket::from_str("GUL"), Some(Bucket::Medium));
    /// assert_eq!(Bucket::from_str("unknown"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "low" | "grøn" => Some(Bucket::Low),
            "medium" | "gul" => Some(Bucket::Medium),
            "jackpot" => Some(Bucket::Jackpot),
            _ => None,
        }
    }

    /// Convert to lowercase wire name
    pub fn as_str(&self) -> &'static str {
        match self {
            Bucket::Low => "low",
            Bucket::Medium => "medium",
            Bucket::Jackpot => "jackpot",
        }
    }

    /// Label printed on the board
    pub fn label(&self) -> &'static str {
        match self {
            Bucket::Low => "grøn",
            Bucket::Medium => "gul",
            Bucket::Jackpot => "jackpot",
        }
    }
}

/// Bucket boundaries derived from the odds span.
///
/// `medium_max` is carried for display only; classification never reads it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Thresholds {
    pub high_max: f64,
    pub medium_max: f64,
}

/// A single cell on a board
///
/// Empty cells carry the sentinel word and zero odds and have no bucket.
/// `marked` is only ever changed by the player, never by the generator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoardCell {
    pub word: String,
    pub odds: f64,
    pub bucket: Option<Bucket>,
    pub marked: bool,
    pub empty: bool,
}

impl BoardCell {
    /// The empty sentinel cell
    pub fn empty() -> Self {
        Self {
            word: EMPTY_CELL_WORD.to_string(),
            odds: 0.0,
            bucket: None,
            marked: false,
            empty: true,
        }
    }

    /// A fresh, unmarked filled cell
    pub fn filled(entry: &WordEntry, bucket: Bucket) -> Self {
        Self {
            word: entry.word.clone(),
            odds: entry.odds,
            bucket: Some(bucket),
            marked: false,
            empty: false,
        }
    }
}

impl Default for BoardCell {
    fn default() -> Self {
        Self::empty()
    }
}
