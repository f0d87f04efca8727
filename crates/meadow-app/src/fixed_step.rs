//! Fixed-timestep accumulator.
//!
//! Frame times go in, whole simulation steps of [`FIXED_DT`] come out. The
//! remainder carries over to the next frame so the player simulation stays
//! independent of frame rate. Frame time is supplied by the caller, which
//! keeps headless runs reproducible.

use tracing::warn;

/// Simulation timestep: 60 Hz.
pub const FIXED_DT: f64 = 1.0 / 60.0;

/// Longest frame time accepted before clamping.
pub const MAX_FRAME_TIME: f64 = 0.25;

/// Accumulator state for fixed-rate updates.
#[derive(Debug, Default, Clone)]
pub struct FixedStep {
    accumulator: f64,
    total_sim_time: f64,
    frame_count: u64,
    update_count: u64,
}

impl FixedStep {
    pub fn new() -> Self {
        Self::default()
    }

    /// Consume `frame_time` seconds, calling `update_fn(FIXED_DT)` once per
    /// whole step. Returns the number of steps run.
    pub fn advance(&mut self, frame_time: f64, mut update_fn: impl FnMut(f64)) -> u32 {
        let mut frame_time = frame_time.max(0.0);
        if frame_time > MAX_FRAME_TIME {
            warn!(
                "Frame time {:.1}ms exceeds maximum, clamping to {:.1}ms",
                frame_time * 1000.0,
                MAX_FRAME_TIME * 1000.0
            );
            frame_time = MAX_FRAME_TIME;
        }

        self.accumulator += frame_time;

        let mut steps = 0;
        while self.accumulator >= FIXED_DT {
            update_fn(FIXED_DT);
            self.total_sim_time += FIXED_DT;
            self.accumulator -= FIXED_DT;
            self.update_count += 1;
            steps += 1;
        }

        self.frame_count += 1;
        steps
    }

    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    pub fn update_count(&self) -> u64 {
        self.update_count
    }

    /// Simulated seconds so far.
    pub fn total_sim_time(&self) -> f64 {
        self.total_sim_time
    }
}
