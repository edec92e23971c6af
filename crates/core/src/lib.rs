//! Core simulation engine - pure, deterministic, and testable.
//!
//! This crate contains the whole board simulation and nothing else: no UI,
//! no threads, no I/O. That keeps it:
//!
//! - **Deterministic**: the same seed replays the same game
//! - **Testable**: every rule is exercised by unit and integration tests
//! - **Portable**: it runs headless, in a terminal front-end, or in benches
//! - **Fast**: the tick path performs no allocation
//!
//! # Module Structure
//!
//! - [`board`]: the 10x20 grid, cell states, locking, and row compaction
//! - [`shapes`]: the seven immutable piece templates
//! - [`rng`]: seedable uniform shape selection
//! - [`movement`]: staged, collision-safe left/right/down translation
//! - [`rotation`]: bounding-box clockwise quarter turns
//! - [`scoring`]: the fixed line-clear score table
//! - [`game`]: the state machine sequencing spawn, control, lock, clear,
//!   and the game-over predicate
//! - [`snapshot`]: read-only frame views for the presentation layer
//!
//! # Example
//!
//! ```
//! use gridfall_core::Game;
//! use gridfall_types::Command;
//!
//! let mut game = Game::new(12345);
//! game.start();
//!
//! game.apply_command(Command::MoveRight);
//! game.apply_command(Command::Rotate);
//! game.apply_command(Command::SoftDrop);
//!
//! assert!(!game.status().is_over());
//! ```

pub mod board;
pub mod game;
pub mod movement;
pub mod rng;
pub mod rotation;
pub mod scoring;
pub mod shapes;
pub mod snapshot;

pub use gridfall_types as types;

// Re-export commonly used items for convenience
pub use board::Board;
pub use game::Game;
pub use movement::{shift_down, shift_left, shift_right, ShiftDown};
pub use rng::{ShapePicker, SimpleRng};
pub use rotation::rotate;
pub use scoring::score_for;
pub use shapes::{template, Template};
pub use snapshot::GameSnapshot;
