//! Collision/movement engine - staged, collision-safe piece translation.
//!
//! Each shift runs in two phases. A dry collision scan first rejects the
//! whole move against walls and locked cells, leaving the board untouched
//! (rejected moves happen on every tick at a wall, so they must be free of
//! side effects). The surviving move is then staged cell-by-cell into a
//! scratch grid before being committed back, so a multi-cell piece never
//! collides with its own not-yet-moved cells mid-shift.

use crate::board::Board;
use crate::types::{CellState, BOARD_COLUMNS, BOARD_ROWS};

/// Outcome of a downward shift.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShiftDown {
    /// The piece descended one row.
    Moved,
    /// The piece is resting on the floor or on locked cells; the board is
    /// unchanged and the caller owns the lock transition.
    ShouldLock,
}

/// Shift the active piece one column right.
///
/// Returns `true` iff at least one cell shifted; a blocked move returns
/// `false` with the board bit-for-bit unchanged.
pub fn shift_right(board: &mut Board, staging: &mut Board) -> bool {
    // Dry scan: any active cell against the right wall or a locked
    // neighbor rejects the whole move.
    for row in 0..BOARD_ROWS {
        for col in 0..BOARD_COLUMNS {
            if board.is_active(row, col)
                && (col == BOARD_COLUMNS - 1 || board.is_locked(row, col + 1))
            {
                return false;
            }
        }
    }

    staging.reset();
    let mut moved = false;

    // Right-to-left column order is mandatory: each cell must see its right
    // neighbor already vacated, or it would stall against its own piece.
    for row in 0..BOARD_ROWS {
        for col in (0..BOARD_COLUMNS).rev() {
            if !board.is_active(row, col) {
                continue;
            }
            if col + 1 < BOARD_COLUMNS && board.is_empty(row, col + 1) {
                staging.set(row, col + 1, CellState::Active);
                moved = true;
            } else {
                // Own footprint (or the wall) in the way: hold position.
                staging.set(row, col, CellState::Active);
            }
            board.set(row, col, CellState::Empty);
        }
    }

    commit_staged(board, staging);
    moved
}

/// Shift the active piece one column left. Mirror of [`shift_right`]; the
/// staged copy is kept for symmetry even though the dry scan already
/// rejects every colliding move.
pub fn shift_left(board: &mut Board, staging: &mut Board) -> bool {
    for row in 0..BOARD_ROWS {
        for col in 0..BOARD_COLUMNS {
            if board.is_active(row, col) && (col == 0 || board.is_locked(row, col - 1)) {
                return false;
            }
        }
    }

    staging.reset();
    let mut moved = false;

    for row in 0..BOARD_ROWS {
        for col in 0..BOARD_COLUMNS {
            if !board.is_active(row, col) {
                continue;
            }
            if col > 0 && board.is_empty(row, col - 1) {
                staging.set(row, col - 1, CellState::Active);
                moved = true;
            } else {
                staging.set(row, col, CellState::Active);
            }
            board.set(row, col, CellState::Empty);
        }
    }

    commit_staged(board, staging);
    moved
}

/// Shift the active piece one row down, or report that it must lock.
///
/// The lock decision is made up front: any active cell on the bottom row or
/// directly above a locked cell means the piece has landed. In that case
/// nothing is mutated here; the state machine runs the lock transition.
pub fn shift_down(board: &mut Board, staging: &mut Board) -> ShiftDown {
    for col in 0..BOARD_COLUMNS {
        for row in 0..BOARD_ROWS {
            if board.is_active(row, col)
                && (row == BOARD_ROWS - 1 || board.is_locked(row + 1, col))
            {
                return ShiftDown::ShouldLock;
            }
        }
    }

    staging.reset();

    // Bottom row upward, so each cell sees the cell beneath it vacated.
    for col in 0..BOARD_COLUMNS {
        for row in (0..BOARD_ROWS).rev() {
            if !board.is_active(row, col) {
                continue;
            }
            if row + 1 < BOARD_ROWS && board.is_empty(row + 1, col) {
                staging.set(row + 1, col, CellState::Active);
            } else {
                staging.set(row, col, CellState::Active);
            }
            board.set(row, col, CellState::Empty);
        }
    }

    commit_staged(board, staging);
    ShiftDown::Moved
}

/// Copy every staged `Active` cell back onto the board.
fn commit_staged(board: &mut Board, staging: &Board) {
    for row in 0..BOARD_ROWS {
        for col in 0..BOARD_COLUMNS {
            if staging.is_active(row, col) {
                board.set(row, col, CellState::Active);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shapes::template;
    use crate::types::ShapeKind;

    fn boards() -> (Board, Board) {
        (Board::new(), Board::new())
    }

    #[test]
    fn test_shift_right_moves_whole_piece() {
        let (mut board, mut staging) = boards();
        board.stamp_template(template(ShapeKind::S), 5, 3);
        let before = board.count_active();

        assert!(shift_right(&mut board, &mut staging));
        assert_eq!(board.count_active(), before);
        // S footprint shifted intact: .## / ##. at columns 4..=6.
        assert!(board.is_active(5, 5));
        assert!(board.is_active(5, 6));
        assert!(board.is_active(6, 4));
        assert!(board.is_active(6, 5));
    }

    #[test]
    fn test_shift_right_rejected_at_wall() {
        let (mut board, mut staging) = boards();
        board.stamp_template(template(ShapeKind::O), 5, BOARD_COLUMNS - 2);
        let before = board.clone();

        assert!(!shift_right(&mut board, &mut staging));
        assert_eq!(board, before);
    }

    #[test]
    fn test_shift_right_rejected_by_locked_neighbor() {
        let (mut board, mut staging) = boards();
        board.stamp_template(template(ShapeKind::O), 5, 3);
        board.set(6, 5, CellState::Locked);
        let before = board.clone();

        assert!(!shift_right(&mut board, &mut staging));
        assert_eq!(board, before);
    }

    #[test]
    fn test_shift_left_rejected_at_wall_is_identity() {
        let (mut board, mut staging) = boards();
        board.stamp_template(template(ShapeKind::L), 10, 0);
        let before = board.clone();

        assert!(!shift_left(&mut board, &mut staging));
        assert_eq!(board, before);
        // Rejection is idempotent.
        assert!(!shift_left(&mut board, &mut staging));
        assert_eq!(board, before);
    }

    #[test]
    fn test_shift_left_moves_past_nonadjacent_locked() {
        let (mut board, mut staging) = boards();
        board.stamp_template(template(ShapeKind::I), 4, 5);
        // Locked column two cells away does not block a single shift.
        board.set(4, 3, CellState::Locked);

        assert!(shift_left(&mut board, &mut staging));
        for row in 4..8 {
            assert!(board.is_active(row, 4));
        }
    }

    #[test]
    fn test_shift_down_descends_one_row() {
        let (mut board, mut staging) = boards();
        board.stamp_template(template(ShapeKind::T), 0, 4);

        assert_eq!(shift_down(&mut board, &mut staging), ShiftDown::Moved);
        assert!(board.is_active(1, 4));
        assert!(board.is_active(1, 5));
        assert!(board.is_active(1, 6));
        assert!(board.is_active(2, 5));
        assert_eq!(board.count_active(), 4);
    }

    #[test]
    fn test_shift_down_reports_lock_on_floor() {
        let (mut board, mut staging) = boards();
        board.stamp_template(template(ShapeKind::O), BOARD_ROWS - 2, 4);
        let before = board.clone();

        assert_eq!(shift_down(&mut board, &mut staging), ShiftDown::ShouldLock);
        assert_eq!(board, before);
        assert_eq!(board.count_locked(), 0);
    }

    #[test]
    fn test_shift_down_reports_lock_on_locked_cell() {
        let (mut board, mut staging) = boards();
        board.stamp_template(template(ShapeKind::I), 10, 5);
        board.set(14, 5, CellState::Locked);
        let before = board.clone();

        assert_eq!(shift_down(&mut board, &mut staging), ShiftDown::ShouldLock);
        assert_eq!(board, before);
    }

    #[test]
    fn test_shifts_never_change_locked_count() {
        let (mut board, mut staging) = boards();
        board.stamp_template(template(ShapeKind::Z), 8, 4);
        for col in 0..BOARD_COLUMNS {
            board.set(19, col, CellState::Locked);
        }
        let locked_before = board.count_locked();

        shift_left(&mut board, &mut staging);
        shift_right(&mut board, &mut staging);
        shift_down(&mut board, &mut staging);
        assert_eq!(board.count_locked(), locked_before);
    }
}
