//! Gravity clock - the periodic forced descent.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;

use crate::session::Session;

/// A dedicated thread that forces one descent per period.
///
/// The thread's only suspension point is its periodic sleep; it never
/// holds the session lock while waiting. Once the game is over it keeps
/// running inertly (status is checked before every attempt, and again
/// inside the session lock) until [`shutdown`](Self::shutdown).
pub struct GravityClock {
    stop: Arc<AtomicBool>,
    thread: Option<JoinHandle<()>>,
}

impl GravityClock {
    /// Spawn the clock with the given period between descents.
    pub fn spawn(session: Session, period: Duration) -> Self {
        let stop = Arc::new(AtomicBool::new(false));
        let flag = Arc::clone(&stop);

        let thread = thread::spawn(move || {
            while !flag.load(Ordering::Relaxed) {
                thread::sleep(period);
                if flag.load(Ordering::Relaxed) {
                    break;
                }
                if session.status().is_over() {
                    continue;
                }
                session.gravity_step();
            }
        });

        Self {
            stop,
            thread: Some(thread),
        }
    }

    /// Stop the clock and wait for the thread to exit.
    pub fn shutdown(mut self) {
        self.stop.store(true, Ordering::Relaxed);
        if let Some(thread) = self.thread.take() {
            let _ = thread.join();
        }
    }
}

impl Drop for GravityClock {
    fn drop(&mut self) {
        // Signal without joining; the thread exits within one period.
        self.stop.store(true, Ordering::Relaxed);
    }
}
