//! Win detection
//!
//! A line wins when every non-empty cell on it is marked and it has at least
//! two non-empty cells. Empty cells on a line are ignored.

use crate::types::{BoardCell, BOARD_COLS, BOARD_ROWS, TOTAL_CELLS};

/// Fewest non-empty cells a line needs before it can win
pub const MIN_CELLS_PER_LINE: usize = 2;

/// Length of the two main diagonals
const DIAGONAL_LEN: usize = if BOARD_ROWS < BOARD_COLS {
    BOARD_ROWS
} else {
    BOARD_COLS
};

/// Check rows, then columns, then both diagonals.
///
/// Anything other than exactly `TOTAL_CELLS` cells is never a win.
pub fn check_win(cells: &[BoardCell]) -> bool {
    if cells.len() != TOTAL_CELLS {
        return false;
    }

    let row_win = || {
        (0..BOARD_ROWS)
            .any(|row| is_line_complete(cells, (0..BOARD_COLS).map(|col| row * BOARD_COLS + col)))
    };
    let col_win = || {
        (0..BOARD_COLS)
            .any(|col| is_line_complete(cells, (0..BOARD_ROWS).map(|row| row * BOARD_COLS + col)))
    };
    let diag_win = || {
        is_line_complete(cells, (0..DIAGONAL_LEN).map(|i| i * BOARD_COLS + i))
            || is_line_complete(
                cells,
                (0..DIAGONAL_LEN).map(|i| i * BOARD_COLS + (BOARD_COLS - i - 1)),
            )
    };

    row_win() || col_win() || diag_win()
}

fn is_line_complete(cells: &[BoardCell], indexes: impl Iterator<Item = usize>) -> bool {
    let mut filled = 0usize;
    for idx in indexes {
        let cell = &cells[idx];
        if cell.empty {
            continue;
        }
        if !cell.marked {
            return false;
        }
        filled += 1;
    }
    filled >= MIN_CELLS_PER_LINE
}
