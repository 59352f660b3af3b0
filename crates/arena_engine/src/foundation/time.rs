//! Time management utilities

use std::time::Instant;

/// Fixed-step clock for frame-driven simulation.
///
/// Every call to [`FrameClock::tick`] advances simulated time by exactly one
/// step, so a run is reproducible regardless of how fast the host loops.
/// Time is derived from the frame count rather than accumulated.
#[derive(Debug, Clone)]
pub struct FrameClock {
    step: f32,
    frame_count: u64,
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new(1.0 / 60.0)
    }
}

impl FrameClock {
    /// Create a clock advancing by `step` seconds per frame
    pub fn new(step: f32) -> Self {
        Self {
            step: step.max(0.0),
            frame_count: 0,
        }
    }

    /// Advance one frame
    pub fn tick(&mut self) {
        self.frame_count += 1;
    }

    /// Seconds per frame
    pub fn step(&self) -> f32 {
        self.step
    }

    /// Simulated seconds since the clock was created
    #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
    pub fn total_time(&self) -> f32 {
        (self.frame_count as f64 * f64::from(self.step)) as f32
    }

    /// Frames ticked so far
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }
}

/// Wall-clock timer for a run
#[derive(Debug, Clone, Copy)]
pub struct Stopwatch {
    started: Instant,
}

impl Stopwatch {
    /// Start timing now
    pub fn start_new() -> Self {
        Self {
            started: Instant::now(),
        }
    }

    /// Milliseconds since the stopwatch started
    pub fn elapsed_millis(&self) -> f32 {
        self.started.elapsed().as_secs_f32() * 1000.0
    }
}
