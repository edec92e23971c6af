//! RNG module - uniform shape selection.
//!
//! Piece selection is a uniform independent draw over the 7 shapes on every
//! spawn; there is no bag or history. The generator is a small LCG so tests
//! can inject a seed and replay a game deterministically.

use crate::types::{ShapeKind, ALL_SHAPES};

/// Simple LCG (Linear Congruential Generator).
/// Uses constants from Numerical Recipes.
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed.
    pub fn new(seed: u32) -> Self {
        // Avoid a 0 seed which would produce all zeros.
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate the next random u32.
    pub fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate a random value in `[0, max)`.
    pub fn next_range(&mut self, max: u32) -> u32 {
        self.next_u32() % max
    }

    /// Current generator state (usable as a seed to replay from here).
    pub fn state(&self) -> u32 {
        self.state
    }
}

/// Uniform i.i.d. shape picker backing piece spawns.
#[derive(Debug, Clone)]
pub struct ShapePicker {
    rng: SimpleRng,
}

impl ShapePicker {
    pub fn new(seed: u32) -> Self {
        Self {
            rng: SimpleRng::new(seed),
        }
    }

    /// Draw the next shape. Every draw is an independent uniform choice.
    pub fn draw(&mut self) -> ShapeKind {
        ALL_SHAPES[self.rng.next_range(ALL_SHAPES.len() as u32) as usize]
    }

    pub fn seed(&self) -> u32 {
        self.rng.state()
    }
}

impl Default for ShapePicker {
    fn default() -> Self {
        Self::new(1)
    }
}
