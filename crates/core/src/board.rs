//! Board module - owns the game grid and its cell states.
//!
//! The board is a 10x20 grid stored as a flat array for cache locality and
//! zero-allocation operation. Coordinates are (row, col) with row 0 at the
//! top and row 19 at the bottom. New pieces are stamped at (0, 4).

use arrayvec::ArrayVec;

use crate::shapes::Template;
use crate::types::{CellState, BOARD_COLUMNS, BOARD_ROWS};

/// Total number of cells on the board.
const BOARD_SIZE: usize = BOARD_COLUMNS * BOARD_ROWS;

/// The game grid - 10 columns x 20 rows of [`CellState`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    /// Flat array of cells, row-major order (row * BOARD_COLUMNS + col).
    cells: [CellState; BOARD_SIZE],
}

impl Board {
    /// Create a new all-empty board.
    pub fn new() -> Self {
        Self {
            cells: [CellState::Empty; BOARD_SIZE],
        }
    }

    #[inline(always)]
    fn index(row: usize, col: usize) -> Option<usize> {
        if row >= BOARD_ROWS || col >= BOARD_COLUMNS {
            return None;
        }
        Some(row * BOARD_COLUMNS + col)
    }

    pub fn rows(&self) -> usize {
        BOARD_ROWS
    }

    pub fn columns(&self) -> usize {
        BOARD_COLUMNS
    }

    /// Get the cell at (row, col), or `None` when out of bounds.
    pub fn get(&self, row: usize, col: usize) -> Option<CellState> {
        Self::index(row, col).map(|idx| self.cells[idx])
    }

    /// Set the cell at (row, col). Returns false when out of bounds.
    pub fn set(&mut self, row: usize, col: usize, cell: CellState) -> bool {
        match Self::index(row, col) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// In-bounds and empty.
    pub fn is_empty(&self, row: usize, col: usize) -> bool {
        matches!(self.get(row, col), Some(CellState::Empty))
    }

    /// In-bounds and part of the falling piece.
    pub fn is_active(&self, row: usize, col: usize) -> bool {
        matches!(self.get(row, col), Some(CellState::Active))
    }

    /// In-bounds and permanently settled.
    pub fn is_locked(&self, row: usize, col: usize) -> bool {
        matches!(self.get(row, col), Some(CellState::Locked))
    }

    /// Stamp a template's filled cells as `Active` at the given origin.
    ///
    /// Cells whose absolute position falls outside the grid are silently
    /// dropped; a template overhanging the right edge stamps its in-bounds
    /// remainder rather than failing.
    pub fn stamp_template(&mut self, template: &Template, origin_row: usize, origin_col: usize) {
        for &(dr, dc) in template.offsets() {
            self.set(origin_row + dr, origin_col + dc, CellState::Active);
        }
    }

    /// Reset the whole grid to `Empty`.
    pub fn reset(&mut self) {
        self.cells.fill(CellState::Empty);
    }

    /// Reset every `Active` cell to `Empty`.
    pub fn clear_active(&mut self) {
        for cell in &mut self.cells {
            if *cell == CellState::Active {
                *cell = CellState::Empty;
            }
        }
    }

    /// Convert every `Active` cell to `Locked`. Returns the count converted.
    pub fn lock_active(&mut self) -> usize {
        let mut locked = 0;
        for cell in &mut self.cells {
            if *cell == CellState::Active {
                *cell = CellState::Locked;
                locked += 1;
            }
        }
        locked
    }

    /// Number of `Active` cells currently on the board.
    pub fn count_active(&self) -> usize {
        self.cells.iter().filter(|c| c.is_active()).count()
    }

    /// Number of `Locked` cells currently on the board.
    pub fn count_locked(&self) -> usize {
        self.cells.iter().filter(|c| c.is_locked()).count()
    }

    /// Tight bounding box over the `Active` cells as
    /// `(min_row, max_row, min_col, max_col)`, or `None` when no piece is
    /// on the board.
    pub fn active_bounds(&self) -> Option<(usize, usize, usize, usize)> {
        let mut bounds: Option<(usize, usize, usize, usize)> = None;
        for row in 0..BOARD_ROWS {
            for col in 0..BOARD_COLUMNS {
                if !self.is_active(row, col) {
                    continue;
                }
                bounds = Some(match bounds {
                    None => (row, row, col, col),
                    Some((min_r, max_r, min_c, max_c)) => (
                        min_r.min(row),
                        max_r.max(row),
                        min_c.min(col),
                        max_c.max(col),
                    ),
                });
            }
        }
        bounds
    }

    /// A row is full iff every cell in it is `Locked`. An `Active` cell in
    /// the row disqualifies it.
    pub fn is_row_full(&self, row: usize) -> bool {
        if row >= BOARD_ROWS {
            return false;
        }
        let start = row * BOARD_COLUMNS;
        let end = start + BOARD_COLUMNS;
        self.cells[start..end].iter().all(|cell| cell.is_locked())
    }

    /// Clear all full rows with a stable compaction: non-full rows keep
    /// their top-to-bottom order and shift down by the number of full rows
    /// below them; fresh empty rows appear at the top.
    ///
    /// Returns the cleared row indices in top-to-bottom order. A single
    /// lock can complete at most 4 rows, so the result never allocates.
    pub fn clear_full_rows(&mut self) -> ArrayVec<usize, 4> {
        let mut cleared_rows = ArrayVec::new();
        let mut write_row = BOARD_ROWS;

        // Two-pointer pass from the bottom: full rows are skipped, the rest
        // slide down into the write position.
        for read_row in (0..BOARD_ROWS).rev() {
            if self.is_row_full(read_row) {
                cleared_rows.push(read_row);
            } else {
                write_row -= 1;
                if write_row != read_row {
                    let src = read_row * BOARD_COLUMNS;
                    let dst = write_row * BOARD_COLUMNS;
                    self.cells.copy_within(src..src + BOARD_COLUMNS, dst);
                }
            }
        }

        // As many fresh rows at the top as were removed.
        for cell in &mut self.cells[..write_row * BOARD_COLUMNS] {
            *cell = CellState::Empty;
        }

        cleared_rows.reverse();
        cleared_rows
    }

    /// Game-over predicate input: any `Locked` cell in the top row.
    pub fn is_top_row_occupied(&self) -> bool {
        self.cells[..BOARD_COLUMNS].iter().any(|cell| cell.is_locked())
    }

    /// Get a reference to the internal cell array (row-major).
    pub fn cells(&self) -> &[CellState] {
        &self.cells
    }

    /// Copy the grid into a rows x columns array (for snapshots).
    pub fn write_grid(&self, out: &mut [[CellState; BOARD_COLUMNS]; BOARD_ROWS]) {
        for (row, out_row) in out.iter_mut().enumerate() {
            let start = row * BOARD_COLUMNS;
            out_row.copy_from_slice(&self.cells[start..start + BOARD_COLUMNS]);
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
