//! Transition configuration.
//!
//! `TransitionConfig` carries the semantic start/end endpoints and all timing
//! knobs for one transition instance. `EndpointSpec` describes endpoints that
//! are not known until the host element is bound: the element's value at bind
//! time is anchored as one endpoint and the other is given either absolutely
//! or as an offset from it.

use serde::{Deserialize, Serialize};
use std::ops::Add;

use crate::easing::Easing;
use crate::error::{Result, TransitionError};

/// Configuration for a single transition instance.
///
/// Durations and delays are in seconds. `start_value` and `end_value` are the
/// semantic endpoints lifecycle rules are classified against; they change only
/// through explicit reconfiguration, never as a side effect of a run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransitionConfig<T> {
    /// Semantic start endpoint.
    pub start_value: T,
    /// Semantic end endpoint.
    pub end_value: T,
    /// Seconds a forward or reverse run takes.
    pub duration: f32,
    /// Seconds a loop iteration takes. Zero means use `duration`.
    pub loop_duration: f32,
    /// Seconds to hold at the start value before interpolating.
    pub delay: f32,
    /// Delay for loop iterations, honored only when `use_loop_delay` is set.
    pub loop_delay: f32,
    /// Whether loop iterations wait `loop_delay` before interpolating.
    pub use_loop_delay: bool,
    /// Whether a completed run reverses and runs again.
    pub looping: bool,
    /// Easing curve applied to the elapsed fraction.
    pub easing: Easing,
    /// Read the real-time clock instead of the scaled one.
    pub unscaled_time: bool,
}

impl<T: Default> Default for TransitionConfig<T> {
    fn default() -> Self {
        Self {
            start_value: T::default(),
            end_value: T::default(),
            duration: 1.0,
            loop_duration: 0.0,
            delay: 0.0,
            loop_delay: 0.0,
            use_loop_delay: false,
            looping: false,
            easing: Easing::default(),
            unscaled_time: false,
        }
    }
}

impl<T> TransitionConfig<T> {
    /// Config with explicit endpoints and default timing.
    pub fn between(start_value: T, end_value: T) -> Self
    where
        T: Default,
    {
        Self {
            start_value,
            end_value,
            ..Self::default()
        }
    }

    /// Set the run duration in seconds.
    pub fn with_duration(mut self, duration: f32) -> Self {
        self.duration = duration;
        self
    }

    /// Set the initial delay in seconds.
    pub fn with_delay(mut self, delay: f32) -> Self {
        self.delay = delay;
        self
    }

    /// Set the easing curve.
    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    /// Enable looping.
    pub fn with_looping(mut self, looping: bool) -> Self {
        self.looping = looping;
        self
    }

    /// Set the loop iteration duration (zero falls back to `duration`).
    pub fn with_loop_duration(mut self, loop_duration: f32) -> Self {
        self.loop_duration = loop_duration;
        self
    }

    /// Set the loop delay and enable its use.
    pub fn with_loop_delay(mut self, loop_delay: f32) -> Self {
        self.loop_delay = loop_delay;
        self.use_loop_delay = true;
        self
    }

    /// Read the real-time clock instead of the scaled one.
    pub fn with_unscaled_time(mut self, unscaled_time: bool) -> Self {
        self.unscaled_time = unscaled_time;
        self
    }

    /// Reject negative durations and delays.
    pub fn validate(&self) -> Result<()> {
        for duration in [self.duration, self.loop_duration] {
            if duration < 0.0 {
                return Err(TransitionError::NegativeDuration(duration));
            }
        }
        for delay in [self.delay, self.loop_delay] {
            if delay < 0.0 {
                return Err(TransitionError::NegativeDelay(delay));
            }
        }
        Ok(())
    }

    /// Effective duration for a loop iteration.
    pub fn effective_loop_duration(&self) -> f32 {
        if self.loop_duration > 0.0 {
            self.loop_duration
        } else {
            self.duration
        }
    }

    /// Effective delay for a loop iteration.
    pub fn effective_loop_delay(&self) -> f32 {
        if self.use_loop_delay { self.loop_delay } else { 0.0 }
    }
}

/// Which role the host's bind-time value plays in the endpoint pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnchorRole {
    /// The bind-time value is the start; `second` resolves to the end.
    Start,
    /// The bind-time value is the end; `second` resolves to the start.
    End,
}

impl Default for AnchorRole {
    fn default() -> Self {
        Self::Start
    }
}

/// How the non-anchored endpoint is expressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OffsetKind {
    /// `second` is the endpoint value itself.
    Absolute,
    /// `second` is an offset added to the bind-time value.
    Relative,
}

impl Default for OffsetKind {
    fn default() -> Self {
        Self::Absolute
    }
}

/// Endpoints expressed relative to the host's value at bind time.
///
/// Resolution happens exactly once, on first use against the host's current
/// value; the resolved pair then behaves like literal endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EndpointSpec<T> {
    /// Role of the bind-time value.
    pub anchor: AnchorRole,
    /// Interpretation of `second`.
    pub offset: OffsetKind,
    /// The other endpoint, absolute or relative per `offset`.
    pub second: T,
}

impl<T> EndpointSpec<T> {
    /// Anchor the bind-time value as the start endpoint.
    pub fn anchor_start(offset: OffsetKind, second: T) -> Self {
        Self {
            anchor: AnchorRole::Start,
            offset,
            second,
        }
    }

    /// Anchor the bind-time value as the end endpoint.
    pub fn anchor_end(offset: OffsetKind, second: T) -> Self {
        Self {
            anchor: AnchorRole::End,
            offset,
            second,
        }
    }

    /// Resolve against the host's current value into `(start, end)`.
    pub fn resolve(&self, current: T) -> (T, T)
    where
        T: Copy + Add<Output = T>,
    {
        let second = match self.offset {
            OffsetKind::Absolute => self.second,
            OffsetKind::Relative => current + self.second,
        };
        match self.anchor {
            AnchorRole::Start => (current, second),
            AnchorRole::End => (second, current),
        }
    }
}
