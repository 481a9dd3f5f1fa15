//! Tick clock handed to the engine by the host scheduler.

use serde::{Deserialize, Serialize};

/// Per-tick time deltas in seconds, on both clock sources.
///
/// The host supplies both deltas every tick; each transition reads the one
/// selected by its `unscaled_time` flag and uses it consistently across the
/// delay and interpolation phases. `scaled` is subject to the host's global
/// time-scale (pause, slow motion); `unscaled` is wall-clock time.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct TickClock {
    /// Delta on the time-scaled clock, in seconds.
    pub scaled: f32,
    /// Delta on the real-time clock, in seconds.
    pub unscaled: f32,
}

impl TickClock {
    pub const fn new(scaled: f32, unscaled: f32) -> Self {
        Self { scaled, unscaled }
    }

    /// A tick where both clocks advanced by the same delta (time-scale 1).
    pub const fn uniform(delta: f32) -> Self {
        Self { scaled: delta, unscaled: delta }
    }

    /// Build a tick from a real-time delta and the host's time-scale.
    pub fn from_real(delta: f32, time_scale: f32) -> Self {
        Self {
            scaled: delta * time_scale,
            unscaled: delta,
        }
    }

    /// The delta for the selected clock source, floored at zero so elapsed
    /// time never decreases.
    pub fn delta(&self, unscaled_time: bool) -> f32 {
        let delta = if unscaled_time { self.unscaled } else { self.scaled };
        delta.max(0.0)
    }
}
