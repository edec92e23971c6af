//! Game state machine - spawn, control, lock, clear, respawn or terminate.
//!
//! `Game` owns the board, the reusable staging buffer, the shape picker,
//! the score, and the status, and sequences every transition through one
//! mutation path. The gravity tick and a manual soft drop funnel into the
//! same `step_down`, so a landed piece locks, scores, and respawns exactly
//! once regardless of which trigger detected the landing.

use crate::board::Board;
use crate::movement::{shift_down, shift_left, shift_right, ShiftDown};
use crate::rng::ShapePicker;
use crate::rotation::rotate;
use crate::scoring::score_for;
use crate::shapes::template;
use crate::snapshot::GameSnapshot;
use crate::types::{Command, GameStatus, SPAWN_COL, SPAWN_ROW};

/// Complete simulation state.
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    /// Scratch grid reused by every translate; never observable between ops.
    staging: Board,
    picker: ShapePicker,
    score: u32,
    status: GameStatus,
    started: bool,
}

impl Game {
    /// Create a new game with the given RNG seed. Nothing is spawned until
    /// [`start`](Self::start).
    pub fn new(seed: u32) -> Self {
        Self {
            board: Board::new(),
            staging: Board::new(),
            picker: ShapePicker::new(seed),
            score: 0,
            status: GameStatus::Playing,
            started: false,
        }
    }

    /// Spawn the first piece. Idempotent.
    pub fn start(&mut self) {
        if self.started {
            return;
        }
        self.started = true;
        self.spawn();
    }

    pub fn started(&self) -> bool {
        self.started
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    #[cfg(test)]
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    /// Apply one player command.
    ///
    /// Returns whether the command changed the board. After `GameOver`
    /// every command is dropped without mutation; `Quit` and anything the
    /// simulation does not recognize are ignored the same way.
    pub fn apply_command(&mut self, command: Command) -> bool {
        if self.status.is_over() {
            return false;
        }
        match command {
            Command::MoveLeft => shift_left(&mut self.board, &mut self.staging),
            Command::MoveRight => shift_right(&mut self.board, &mut self.staging),
            Command::Rotate => rotate(&mut self.board),
            Command::SoftDrop => self.step_down(),
            Command::Quit => false,
        }
    }

    /// One gravity tick: a forced descent, status-checked first so an
    /// ended game is never mutated.
    pub fn gravity_step(&mut self) -> bool {
        if self.status.is_over() {
            return false;
        }
        self.step_down()
    }

    /// Shared descent path for gravity and soft drops.
    fn step_down(&mut self) -> bool {
        match shift_down(&mut self.board, &mut self.staging) {
            ShiftDown::Moved => true,
            ShiftDown::ShouldLock => {
                self.lock_and_advance();
                false
            }
        }
    }

    /// The lock transition: settle the piece, compact full rows, score,
    /// then either terminate or spawn the next piece.
    fn lock_and_advance(&mut self) {
        self.board.lock_active();

        let cleared = self.board.clear_full_rows();
        self.score += score_for(cleared.len());

        if self.board.is_top_row_occupied() {
            self.status = GameStatus::GameOver;
        } else {
            self.spawn();
        }
    }

    /// Stamp a uniformly random template at the spawn origin. Overlap with
    /// settled cells is not checked; only the post-clear top-row predicate
    /// ends the game.
    fn spawn(&mut self) {
        let kind = self.picker.draw();
        self.board
            .stamp_template(template(kind), SPAWN_ROW, SPAWN_COL);
    }

    /// Fill a caller-owned snapshot with this frame's view.
    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        self.board.write_grid(&mut out.grid);
        out.score = self.score;
        out.status = self.status;
    }

    /// Convenience helper that allocates a fresh snapshot.
    pub fn snapshot(&self) -> GameSnapshot {
        let mut snap = GameSnapshot::default();
        self.snapshot_into(&mut snap);
        snap
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new(1)
    }
}
