//! Shared game session - the single mutation boundary.

use std::sync::{Arc, Mutex};

use crate::core::{Game, GameSnapshot};
use crate::types::{Command, GameStatus};

/// A handle to a game shared between the front-end thread and the gravity
/// clock. Cloning is cheap; all clones reach the same game.
#[derive(Clone)]
pub struct Session {
    game: Arc<Mutex<Game>>,
}

impl Session {
    pub fn new(game: Game) -> Self {
        Self {
            game: Arc::new(Mutex::new(game)),
        }
    }

    fn with_game<T>(&self, f: impl FnOnce(&mut Game) -> T) -> T {
        // A poisoned mutex still holds a consistent board: every mutation
        // runs to completion once started, so recover rather than panic.
        let mut game = self.game.lock().unwrap_or_else(|e| e.into_inner());
        f(&mut game)
    }

    /// Apply one player command under the session lock.
    pub fn apply(&self, command: Command) -> bool {
        self.with_game(|game| game.apply_command(command))
    }

    /// Apply one gravity tick under the session lock.
    pub fn gravity_step(&self) -> bool {
        self.with_game(|game| game.gravity_step())
    }

    pub fn status(&self) -> GameStatus {
        self.with_game(|game| game.status())
    }

    pub fn score(&self) -> u32 {
        self.with_game(|game| game.score())
    }

    /// Fill a caller-owned snapshot for rendering. Readers never hold the
    /// lock longer than the copy.
    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        self.with_game(|game| game.snapshot_into(out));
    }

    pub fn snapshot(&self) -> GameSnapshot {
        self.with_game(|game| game.snapshot())
    }
}
