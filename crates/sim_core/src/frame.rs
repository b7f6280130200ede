//! Fixed-timestep frame clock.
//!
//! The external scheduler (animation frame, timer, or a test harness) feeds
//! monotonically increasing timestamps; every logical tick advances exactly
//! 1/60 s of simulated time regardless of render cadence, so a seeded run
//! replays identically.

use crate::input::InputSnapshot;
use crate::RunState;

/// Logical tick length in milliseconds.
pub const TIMESTEP_MS: f64 = 1000.0 / 60.0;
/// Accumulator ceiling: after a stall, at most this much simulated time is
/// caught up in one call.
pub const MAX_ACCUM_MS: f64 = 100.0;

#[derive(Debug, Default)]
pub struct FrameClock {
    last_ms: Option<f64>,
    accum_ms: f64,
    alpha: f32,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance to `now_ms`, running zero or more logical ticks. Returns the
    /// number of ticks run.
    pub fn advance(&mut self, now_ms: f64, state: &mut RunState, input: &InputSnapshot) -> u32 {
        let dt = match self.last_ms {
            Some(last) => (now_ms - last).max(0.0),
            None => 0.0,
        };
        self.last_ms = Some(now_ms);
        self.accum_ms = (self.accum_ms + dt).min(MAX_ACCUM_MS);
        let mut ran = 0u32;
        while self.accum_ms >= TIMESTEP_MS {
            state.step(input);
            self.accum_ms -= TIMESTEP_MS;
            ran += 1;
        }
        self.alpha = (self.accum_ms / TIMESTEP_MS) as f32;
        ran
    }

    /// Interpolation fraction in `[0,1)` between the last two ticks,
    /// exposed to the renderer.
    #[inline]
    pub fn alpha(&self) -> f32 {
        self.alpha
    }
}
