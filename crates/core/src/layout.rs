//! Layout builder - picks which cells of the grid are filled
//!
//! Each row draws a fill count from `MIN_FILLED_PER_ROW..=MAX_FILLED_PER_ROW`.
//! A running per-column count balances the columns across rows:
//!
//! - two cells: the two least used columns, ties broken by a fresh draw per column
//! - three cells: `{0, 2, 3}` or `{0, 1, 3}`, whichever has the lower summed
//!   count; an exact tie is a coin flip
//!
//! The two triples are the only 3-of-4 choices that keep both outer columns
//! and never fill columns 1 and 2 together. This rule is specific to a
//! four-column board.

use arrayvec::ArrayVec;

use crate::rng::BoardRng;
use crate::types::{
    BOARD_COLS, BOARD_ROWS, MAX_FILLED_CELLS, MAX_FILLED_PER_ROW, MIN_FILLED_PER_ROW,
};

/// Flat cell indices of the filled cells, in row order
pub type Layout = ArrayVec<usize, MAX_FILLED_CELLS>;

/// Three-cell row that skips column 1
const TRIPLE_WITHOUT_1: [usize; 3] = [0, 2, 3];

/// Three-cell row that skips column 2
const TRIPLE_WITHOUT_2: [usize; 3] = [0, 1, 3];

/// Build the filled positions for a whole board.
///
/// The returned indices are in the order the rows were laid out; the board
/// assembler fills them in exactly that order.
pub fn build_layout<R: BoardRng>(rng: &mut R) -> Layout {
    let mut positions = Layout::new();
    let mut col_counts = [0usize; BOARD_COLS];

    for row in 0..BOARD_ROWS {
        let fill_count =
            MIN_FILLED_PER_ROW + rng.next_index(MAX_FILLED_PER_ROW - MIN_FILLED_PER_ROW + 1);

        let columns: ArrayVec<usize, BOARD_COLS> = if fill_count == 3 {
            pick_three_non_contiguous(&col_counts, rng).into_iter().collect()
        } else {
            pick_balanced_columns(&col_counts, fill_count, rng)
        };

        for col in columns {
            col_counts[col] += 1;
            positions.push(row * BOARD_COLS + col);
        }
    }

    positions
}

/// The `fill_count` least used columns.
///
/// Draws one tiebreaker per column, left to right, before sorting.
fn pick_balanced_columns<R: BoardRng>(
    col_counts: &[usize; BOARD_COLS],
    fill_count: usize,
    rng: &mut R,
) -> ArrayVec<usize, BOARD_COLS> {
    let mut scored: ArrayVec<(usize, usize, f64), BOARD_COLS> = col_counts
        .iter()
        .enumerate()
        .map(|(col, &count)| (col, count, rng.next_f64()))
        .collect();

    scored.sort_by(|a, b| a.1.cmp(&b.1).then(a.2.total_cmp(&b.2)));

    scored
        .iter()
        .take(fill_count.min(BOARD_COLS))
        .map(|&(col, _, _)| col)
        .collect()
}

fn pick_three_non_contiguous<R: BoardRng>(
    col_counts: &[usize; BOARD_COLS],
    rng: &mut R,
) -> [usize; 3] {
    let score = |cols: &[usize; 3]| cols.iter().map(|&c| col_counts[c]).sum::<usize>();
    let without_1 = score(&TRIPLE_WITHOUT_1);
    let without_2 = score(&TRIPLE_WITHOUT_2);

    if without_1 == without_2 {
        return if rng.next_f64() < 0.5 {
            TRIPLE_WITHOUT_1
        } else {
            TRIPLE_WITHOUT_2
        };
    }

    if without_1 < without_2 {
        TRIPLE_WITHOUT_1
    } else {
        TRIPLE_WITHOUT_2
    }
}
