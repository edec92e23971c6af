//! Rotation engine - bounding-box quarter turns.
//!
//! The falling piece has no explicit orientation state. A rotation scans
//! the board for the piece's tight bounding box, lifts that sub-rectangle
//! out, turns it 90 degrees clockwise (transpose, then reverse each row),
//! clamps the origin against the bottom/right edges, and stamps the result
//! back.
//!
//! Settled geometry is not a rotation obstacle in this rule set: the
//! stamped footprint overwrites whatever occupies its target cells, locked
//! cells included. Callers that want stricter behavior must check occupancy
//! themselves.

use crate::board::Board;
use crate::types::{CellState, BOARD_COLUMNS, BOARD_ROWS};

/// Largest template bounding box in either dimension.
const SUB: usize = 4;

/// Rotate the active piece 90 degrees clockwise in place.
///
/// Returns `false` (board untouched) when no piece is on the board.
pub fn rotate(board: &mut Board) -> bool {
    let Some((min_row, max_row, min_col, max_col)) = board.active_bounds() else {
        return false;
    };

    let rows = max_row - min_row + 1;
    let cols = max_col - min_col + 1;
    debug_assert!(rows <= SUB && cols <= SUB);

    // Lift the piece's bounding submatrix off the board.
    let mut sub = [[false; SUB]; SUB];
    for r in 0..rows {
        for c in 0..cols {
            sub[r][c] = board.is_active(min_row + r, min_col + c);
        }
    }

    // Clockwise quarter turn: transpose, then reverse each row. The turned
    // box has transposed dimensions.
    let mut turned = [[false; SUB]; SUB];
    for r in 0..rows {
        for c in 0..cols {
            turned[c][rows - 1 - r] = sub[r][c];
        }
    }
    let (turned_rows, turned_cols) = (cols, rows);

    // Clamp against the bottom/right edges only; the origin never moves
    // toward the top/left.
    let origin_row = min_row.min(BOARD_ROWS - turned_rows);
    let origin_col = min_col.min(BOARD_COLUMNS - turned_cols);

    board.clear_active();
    for r in 0..turned_rows {
        for c in 0..turned_cols {
            if turned[r][c] {
                board.set(origin_row + r, origin_col + c, CellState::Active);
            }
        }
    }

    true
}
