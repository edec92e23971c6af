//! Terminal presentation module.
//!
//! A small, game-oriented rendering layer: [`BoardView`] maps a frame
//! snapshot into a plain framebuffer (pure, unit-testable), and
//! [`TerminalRenderer`] flushes framebuffers to a real terminal through
//! crossterm. The simulation core never depends on anything in here.

pub mod fb;
pub mod renderer;
pub mod view;

pub use gridfall_core as core;
pub use gridfall_types as types;

pub use fb::{CellStyle, FrameBuffer, Rgb, TermCell};
pub use renderer::TerminalRenderer;
pub use view::{BoardView, Viewport};
