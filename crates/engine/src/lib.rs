//! Runtime layer - the shared game session and the gravity clock.
//!
//! Two independent triggers mutate the same board: the gravity clock
//! forces a descent on a fixed period, and the front-end dispatches player
//! commands as they arrive. Both funnel through [`Session`], which holds
//! the one mutex every mutation must cross. The critical section is
//! deliberately coarse (one lock per command or tick): operations are
//! microsecond-scale and contention is rare, and a fine-grained scheme
//! would reopen the door to a piece double-locking or double-spawning
//! across interleaved lock-and-respawn chains.

pub mod gravity;
pub mod session;

pub use gridfall_core as core;
pub use gridfall_types as types;

pub use gravity::GravityClock;
pub use session::Session;
