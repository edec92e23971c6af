//! Terminal input module.
//!
//! Maps `crossterm` key events into [`Command`] values. Delivery is
//! at-most-once per physical key press; there is no repeat or debounce
//! handling here.

pub mod map;

pub use gridfall_types as types;

pub use map::map_key;
