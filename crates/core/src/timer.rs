//! High-resolution timer for frame timing.

use std::time::{Duration, Instant};

/// Upper bound on a single frame delta. A debugger pause or a suspended
/// process would otherwise feed one huge step into movement integration.
const MAX_FRAME_DELTA: Duration = Duration::from_millis(250);

/// Monotonic timer that hands out per-frame time deltas.
#[derive(Debug)]
pub struct Timer {
    start: Instant,
    last_tick: Instant,
}

impl Timer {
    /// Create a new timer, starting from now.
    pub fn new() -> Self {
        let now = Instant::now();
        Self {
            start: now,
            last_tick: now,
        }
    }

    /// Total elapsed time since the timer was created.
    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }

    /// Total elapsed seconds since the timer was created.
    pub fn elapsed_secs(&self) -> f32 {
        self.elapsed().as_secs_f32()
    }

    /// Time since the last call to `tick()`, capped at [`MAX_FRAME_DELTA`].
    pub fn tick(&mut self) -> Duration {
        let now = Instant::now();
        let delta = (now - self.last_tick).min(MAX_FRAME_DELTA);
        self.last_tick = now;
        delta
    }

    /// Delta seconds since the last tick. Always finite and non-negative.
    pub fn delta_secs(&mut self) -> f32 {
        self.tick().as_secs_f32()
    }

    /// Reset both the start epoch and the tick reference to now.
    pub fn reset(&mut self) {
        let now = Instant::now();
        self.start = now;
        self.last_tick = now;
    }
}

impl Default for Timer {
    fn default() -> Self {
        Self::new()
    }
}
