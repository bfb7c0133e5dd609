//! Board module - assembles and holds one bingo board
//!
//! The board is a 3x4 grid where each cell is either empty or carries a word.
//! Uses a flat array, row-major (`row * BOARD_COLS + col`).
//!
//! Assembly runs on one continuous PRNG stream:
//!
//! 1. layout draws (which cells are filled)
//! 2. jackpot, span and emergency draws (which words)
//! 3. a final shuffle of the selected words
//!
//! The i-th shuffled word lands on the i-th layout position.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

use crate::config::GeneratorConfig;
use crate::draw::select_entries;
use crate::hash::hash_seed;
use crate::layout::build_layout;
use crate::pool::WordPool;
use crate::rng::{BoardRng, Mulberry32};
use crate::types::{
    Bucket, BoardCell, WordEntry, BOARD_COLS, BOARD_ROWS, MAX_FILLED_CELLS, MAX_FILLED_PER_ROW,
    TOTAL_CELLS,
};

/// A generated board - 4 columns x 3 rows using flat array storage
///
/// Deserialization rejects boards the generator and `toggle` could not have
/// produced (see [`BoardError`]).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Board {
    cells: [BoardCell; TOTAL_CELLS],
    /// Layout positions left empty because the pool ran out of candidates
    shortfall: usize,
}

/// Board as it arrives over the wire, before validation
#[derive(Deserialize)]
struct RawBoard {
    cells: [BoardCell; TOTAL_CELLS],
    shortfall: usize,
}

/// Why a restored board was rejected
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BoardError {
    /// An empty cell carries a mark
    MarkedEmptyCell { index: usize },
    /// A filled cell has no bucket
    MissingBucket { index: usize },
    /// A row holds more filled cells than a layout allows
    RowOverfilled { row: usize, filled: usize },
    /// Filled cells plus shortfall exceed the largest layout
    ShortfallTooLarge { filled: usize, shortfall: usize },
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MarkedEmptyCell { index } => write!(f, "empty cell {index} is marked"),
            Self::MissingBucket { index } => write!(f, "filled cell {index} has no bucket"),
            Self::RowOverfilled { row, filled } => write!(
                f,
                "row {row} has {filled} filled cells, at most {MAX_FILLED_PER_ROW} allowed"
            ),
            Self::ShortfallTooLarge { filled, shortfall } => write!(
                f,
                "{filled} filled cells plus shortfall {shortfall} exceed {MAX_FILLED_CELLS}"
            ),
        }
    }
}

impl std::error::Error for BoardError {}

impl<'de> Deserialize<'de> for Board {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = RawBoard::deserialize(deserializer)?;
        Board::validated(raw).map_err(serde::de::Error::custom)
    }
}

impl Board {
    fn validated(raw: RawBoard) -> Result<Self, BoardError> {
        for (index, cell) in raw.cells.iter().enumerate() {
            if cell.empty && cell.marked {
                return Err(BoardError::MarkedEmptyCell { index });
            }
            if !cell.empty && cell.bucket.is_none() {
                return Err(BoardError::MissingBucket { index });
            }
        }

        let board = Board {
            cells: raw.cells,
            shortfall: raw.shortfall,
        };
        for row in 0..BOARD_ROWS {
            let filled = board.filled_in_row(row);
            if filled > MAX_FILLED_PER_ROW {
                return Err(BoardError::RowOverfilled { row, filled });
            }
        }
        let filled = board.filled_count();
        if filled + board.shortfall > MAX_FILLED_CELLS {
            return Err(BoardError::ShortfallTooLarge {
                filled,
                shortfall: board.shortfall,
            });
        }
        Ok(board)
    }
}

/// Per-bucket cell counts shown next to a board
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BucketCounts {
    pub low: usize,
    pub medium: usize,
    pub jackpot: usize,
    pub empty: usize,
    pub filled: usize,
}

/// Generate the board for `seed`.
///
/// Same pool, seed and config always give the same board.
pub fn generate(pool: &WordPool, seed: &str, config: &GeneratorConfig) -> Board {
    let hashed = hash_seed(seed);
    let mut rng = Mulberry32::new(hashed);
    let board = generate_with_rng(pool, config, &mut rng);
    tracing::debug!(
        seed,
        hashed,
        filled = board.filled_count(),
        "board generated"
    );
    board
}

/// Generate a board from an explicit random stream.
///
/// Words in `pool` are expected to be unique; [`WordPool`] guarantees this.
pub fn generate_with_rng<R: BoardRng>(
    pool: &[WordEntry],
    config: &GeneratorConfig,
    rng: &mut R,
) -> Board {
    let thresholds = config.thresholds();
    let layout = build_layout(rng);
    let mut selected = select_entries(pool, layout.len(), config, &thresholds, rng);
    rng.shuffle(&mut selected);

    let shortfall = layout.len().saturating_sub(selected.len());
    if shortfall > 0 {
        tracing::warn!(
            wanted = layout.len(),
            placed = selected.len(),
            "word pool too small, board has empty layout positions"
        );
    }

    let mut cells: [BoardCell; TOTAL_CELLS] = std::array::from_fn(|_| BoardCell::empty());
    for (&position, cell) in layout.iter().zip(selected) {
        cells[position] = cell;
    }

    Board { cells, shortfall }
}

impl Board {
    /// Create a board from explicit cells (for consumers restoring a board, and tests)
    pub fn from_cells(cells: [BoardCell; TOTAL_CELLS]) -> Self {
        Self {
            cells,
            shortfall: 0,
        }
    }

    /// Calculate flat index from (row, col)
    /// Returns None if out of bounds
    #[inline(always)]
    pub fn index(row: usize, col: usize) -> Option<usize> {
        if row >= BOARD_ROWS || col >= BOARD_COLS {
            return None;
        }
        Some(row * BOARD_COLS + col)
    }

    /// Get cell at (row, col)
    pub fn get(&self, row: usize, col: usize) -> Option<&BoardCell> {
        Self::index(row, col).map(|idx| &self.cells[idx])
    }

    /// All cells, row-major
    pub fn cells(&self) -> &[BoardCell] {
        &self.cells
    }

    /// The cells of one row
    pub fn row(&self, row: usize) -> Option<&[BoardCell]> {
        if row >= BOARD_ROWS {
            return None;
        }
        let start = row * BOARD_COLS;
        Some(&self.cells[start..start + BOARD_COLS])
    }

    /// Number of non-empty cells in a row (0 for out-of-range rows)
    pub fn filled_in_row(&self, row: usize) -> usize {
        self.row(row)
            .map(|cells| cells.iter().filter(|c| !c.empty).count())
            .unwrap_or(0)
    }

    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|c| !c.empty).count()
    }

    /// Layout positions left empty because candidates ran out
    pub fn shortfall(&self) -> usize {
        self.shortfall
    }

    pub fn is_short(&self) -> bool {
        self.shortfall > 0
    }

    /// Flip the mark on a filled cell.
    ///
    /// Returns false (and changes nothing) for empty cells and out-of-range indices.
    pub fn toggle(&mut self, index: usize) -> bool {
        match self.cells.get_mut(index) {
            Some(cell) if !cell.empty => {
                cell.marked = !cell.marked;
                true
            }
            _ => false,
        }
    }

    /// Check for a completed row, column or diagonal
    pub fn has_bingo(&self) -> bool {
        crate::win::check_win(&self.cells)
    }

    /// Count cells per bucket.
    ///
    /// A filled cell that is neither low nor medium counts as jackpot.
    pub fn bucket_counts(&self) -> BucketCounts {
        let mut counts = BucketCounts::default();
        for cell in &self.cells {
            if cell.empty {
                counts.empty += 1;
                continue;
            }
            match cell.bucket {
                Some(Bucket::Low) => counts.low += 1,
                Some(Bucket::Medium) => counts.medium += 1,
                _ => counts.jackpot += 1,
            }
        }
        counts.filled = TOTAL_CELLS - counts.empty;
        counts
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::from_cells(std::array::from_fn(|_| BoardCell::empty()))
    }
}
