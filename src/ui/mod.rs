//! Terminal UI: session guard, batched painter, and the screen loops.
//!
//! Everything here draws from immutable core snapshots and feeds decoded
//! events back into the core; no editing or queue logic lives on this
//! side of the boundary.

pub mod draw;
pub mod screens;
pub mod terminal;

use std::time::Instant;

/// Monotonic clock for double-click timing. Captured once per processed
/// event; nothing in the program schedules timers.
pub struct Clock {
    epoch: Instant,
}

impl Clock {
    pub fn new() -> Self {
        Self {
            epoch: Instant::now(),
        }
    }

    pub fn now_ms(&self) -> u64 {
        self.epoch.elapsed().as_millis() as u64
    }
}

impl Default for Clock {
    fn default() -> Self {
        Self::new()
    }
}
