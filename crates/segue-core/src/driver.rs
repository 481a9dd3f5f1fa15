//! The generic transition driver.
//!
//! One `TransitionDriver` owns the configuration, lifecycle policy, and at
//! most one in-flight run for a single animated property. It is the state
//! machine every typed wrapper (fade, slide, size, scale, rotate, color)
//! delegates to; the wrappers differ only in value type and host adapter.
//!
//! # Run lifecycle
//!
//! `Idle -> DelayWait -> Interpolating -> settled -> (loop reversal -> DelayWait | Idle)`
//!
//! Starting a run writes the from-value through the target immediately, so
//! the property holds there through any delay window. Each `tick` advances a
//! single elapsed accumulator on the configured clock; once the delay part
//! is consumed the remainder of the same tick already counts toward
//! interpolation. A run converges by writing its exact stored to-value, then
//! applies lifecycle policy in a fixed order: pointer-gate after-state,
//! disable, destroy, loop reversal.
//!
//! Starting a new run supersedes the old one by replacing it and bumping the
//! driver's generation; a superseded run can never write again.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::clock::TickClock;
use crate::config::TransitionConfig;
use crate::error::{Result, TransitionError};
use crate::events::{EventQueue, RunId, TransitionEvent};
use crate::host::TransitionTarget;
use crate::interpolate::Interpolate;
use crate::policy::{ActivateAction, Destination, LifecyclePolicy};

/// Where a driver currently is in the run lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransitionPhase {
    /// No run in flight.
    Idle,
    /// A run is holding at its from-value until the delay elapses.
    DelayWait,
    /// A run is writing interpolated values each tick.
    Interpolating,
}

/// State of one in-flight run.
#[derive(Debug, Clone, Copy)]
struct RunState<T> {
    id: RunId,
    from: T,
    to: T,
    destination: Destination,
    duration: f32,
    delay: f32,
    elapsed: f32,
    phase: TransitionPhase,
    loop_iteration: u32,
    warned_non_finite: bool,
}

impl<T> RunState<T> {
    /// Interpolation progress in [0, 1]; delay time does not count.
    fn progress(&self) -> f32 {
        let active = (self.elapsed - self.delay).max(0.0);
        if self.duration > 0.0 {
            (active / self.duration).clamp(0.0, 1.0)
        } else {
            1.0
        }
    }
}

/// Generic time-driven value transition for one property.
#[derive(Debug)]
pub struct TransitionDriver<T> {
    config: TransitionConfig<T>,
    policy: LifecyclePolicy,
    run: Option<RunState<T>>,
    generation: u64,
    events: EventQueue,
}

impl<T> TransitionDriver<T>
where
    T: Interpolate + Copy + PartialEq,
{
    /// Create a driver from a validated config and a lifecycle policy.
    pub fn new(config: TransitionConfig<T>, policy: LifecyclePolicy) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            policy,
            run: None,
            generation: 0,
            events: EventQueue::new(),
        })
    }

    pub fn config(&self) -> &TransitionConfig<T> {
        &self.config
    }

    pub fn policy(&self) -> &LifecyclePolicy {
        &self.policy
    }

    /// Replace the whole configuration. The in-flight run, if any, keeps the
    /// endpoints and timing it started with.
    pub fn set_config(&mut self, config: TransitionConfig<T>) -> Result<()> {
        config.validate()?;
        self.config = config;
        Ok(())
    }

    pub fn set_policy(&mut self, policy: LifecyclePolicy) {
        self.policy = policy;
    }

    /// Replace the semantic endpoints, e.g. after bind-time resolution.
    pub fn set_endpoints(&mut self, start_value: T, end_value: T) {
        self.config.start_value = start_value;
        self.config.end_value = end_value;
    }

    /// Animate to the configured end endpoint with the configured timing.
    pub fn to_end<G>(&mut self, target: &mut G, start_from_current: bool) -> Result<RunId>
    where
        G: TransitionTarget<T>,
    {
        self.to_end_with(target, start_from_current, self.config.duration, self.config.delay)
    }

    /// Animate to the configured end endpoint with explicit timing.
    pub fn to_end_with<G>(
        &mut self,
        target: &mut G,
        start_from_current: bool,
        duration: f32,
        delay: f32,
    ) -> Result<RunId>
    where
        G: TransitionTarget<T>,
    {
        let from = if start_from_current {
            target.current()
        } else {
            self.config.start_value
        };
        self.begin(target, from, self.config.end_value, duration, delay)
    }

    /// Animate to the configured start endpoint with the configured timing.
    pub fn to_start<G>(&mut self, target: &mut G, start_from_current: bool) -> Result<RunId>
    where
        G: TransitionTarget<T>,
    {
        self.to_start_with(target, start_from_current, self.config.duration, self.config.delay)
    }

    /// Animate to the configured start endpoint with explicit timing.
    pub fn to_start_with<G>(
        &mut self,
        target: &mut G,
        start_from_current: bool,
        duration: f32,
        delay: f32,
    ) -> Result<RunId>
    where
        G: TransitionTarget<T>,
    {
        let from = if start_from_current {
            target.current()
        } else {
            self.config.end_value
        };
        self.begin(target, from, self.config.start_value, duration, delay)
    }

    /// Animate from the current value to an arbitrary target value.
    pub fn to_value<G>(&mut self, target: &mut G, value: T) -> Result<RunId>
    where
        G: TransitionTarget<T>,
    {
        self.to_value_with(target, value, self.config.duration, self.config.delay)
    }

    /// Animate from the current value to an arbitrary target value with
    /// explicit timing.
    pub fn to_value_with<G>(
        &mut self,
        target: &mut G,
        value: T,
        duration: f32,
        delay: f32,
    ) -> Result<RunId>
    where
        G: TransitionTarget<T>,
    {
        let from = target.current();
        self.begin(target, from, value, duration, delay)
    }

    /// Run the policy's on-activate action, superseding any in-flight run.
    pub fn activate<G>(&mut self, target: &mut G) -> Result<Option<RunId>>
    where
        G: TransitionTarget<T>,
    {
        let id = match self.policy.on_activate {
            ActivateAction::ToEnd => Some(self.to_end(target, false)?),
            ActivateAction::ToStart => Some(self.to_start(target, false)?),
            ActivateAction::JumpToEnd => Some(self.to_end_with(target, false, 0.0, 0.0)?),
            ActivateAction::JumpToStart => Some(self.to_start_with(target, false, 0.0, 0.0)?),
            ActivateAction::None => None,
        };
        Ok(id)
    }

    /// Start a run from `from` to `to`.
    ///
    /// Rejects negative timing and inactive targets synchronously. A run
    /// with zero duration and zero delay settles inside this call with no
    /// intermediate frames.
    pub fn begin<G>(&mut self, target: &mut G, from: T, to: T, duration: f32, delay: f32) -> Result<RunId>
    where
        G: TransitionTarget<T>,
    {
        if duration < 0.0 {
            return Err(TransitionError::NegativeDuration(duration));
        }
        if delay < 0.0 {
            return Err(TransitionError::NegativeDelay(delay));
        }
        if !target.is_active() {
            return Err(TransitionError::InactiveTarget);
        }

        if let Some(run) = self.run.take() {
            debug!(superseded = run.id.0, "run superseded");
            self.events.push(TransitionEvent::Superseded { id: run.id });
        }

        let id = self.spawn_run(target, from, to, duration, delay, 0);

        if duration <= 0.0 && delay <= 0.0 {
            if let Some(run) = self.run.take() {
                target.apply(run.to);
                self.events.push(TransitionEvent::Completed {
                    id: run.id,
                    destination: run.destination,
                });
                self.settle(run, target);
            }
        }

        Ok(id)
    }

    /// Advance the in-flight run by one tick.
    ///
    /// Returns `true` while a run is in flight after the tick (a settling
    /// run that loops counts as in flight), `false` when the driver is idle.
    pub fn tick<G>(&mut self, clock: TickClock, target: &mut G) -> bool
    where
        G: TransitionTarget<T>,
    {
        let Some(mut run) = self.run.take() else {
            return false;
        };
        // A run from a superseded generation never writes.
        if run.id.0 != self.generation {
            return false;
        }

        run.elapsed += clock.delta(self.config.unscaled_time);

        if run.phase == TransitionPhase::DelayWait {
            if run.elapsed < run.delay {
                self.run = Some(run);
                return true;
            }
            // Delay consumed: re-assert the from-value, then let the rest of
            // this tick's delta count toward interpolation.
            target.apply(run.from);
            run.phase = TransitionPhase::Interpolating;
        }

        let active = (run.elapsed - run.delay).max(0.0);
        if run.duration > 0.0 && active < run.duration {
            let eased = self.config.easing.evaluate(active / run.duration);
            let value = run.from.interpolate(&run.to, eased);
            if value.is_finite() {
                target.apply(value);
            } else if !run.warned_non_finite {
                warn!(run = run.id.0, "non-finite interpolated value, write skipped");
                run.warned_non_finite = true;
            }
            self.run = Some(run);
            return true;
        }

        // Converged: the exact stored to-value, never the eased result.
        target.apply(run.to);
        self.events.push(TransitionEvent::Completed {
            id: run.id,
            destination: run.destination,
        });
        self.settle(run, target)
    }

    /// Stop the in-flight run, leaving the property at its last written
    /// value. A second cancel is a no-op.
    pub fn cancel(&mut self) {
        if let Some(run) = self.run.take() {
            self.events.push(TransitionEvent::Cancelled { id: run.id });
        }
    }

    /// Whether a run is in flight.
    pub fn is_running(&self) -> bool {
        self.run.is_some()
    }

    pub fn phase(&self) -> TransitionPhase {
        self.run.as_ref().map_or(TransitionPhase::Idle, |run| run.phase)
    }

    /// Interpolation progress of the in-flight run, if any.
    pub fn progress(&self) -> Option<f32> {
        self.run.as_ref().map(RunState::progress)
    }

    /// Id of the in-flight run, if any.
    pub fn run_id(&self) -> Option<RunId> {
        self.run.as_ref().map(|run| run.id)
    }

    /// Destination classification of the in-flight run, if any.
    pub fn destination(&self) -> Option<Destination> {
        self.run.as_ref().map(|run| run.destination)
    }

    pub fn events(&self) -> &EventQueue {
        &self.events
    }

    /// Drain all pending lifecycle events.
    pub fn drain_events(&mut self) -> impl Iterator<Item = TransitionEvent> + '_ {
        self.events.drain()
    }

    /// Create the run, write its from-value, and apply the pointer-gate
    /// during-state. The caller has already emptied `self.run`.
    fn spawn_run<G>(
        &mut self,
        target: &mut G,
        from: T,
        to: T,
        duration: f32,
        delay: f32,
        loop_iteration: u32,
    ) -> RunId
    where
        G: TransitionTarget<T>,
    {
        self.generation += 1;
        let id = RunId(self.generation);
        let destination = self.classify(to);

        target.set_pointer_blocking(self.policy.raycast_block.blocks_during());
        // The property shows the from-value through the whole delay window.
        target.apply(from);

        self.run = Some(RunState {
            id,
            from,
            to,
            destination,
            duration,
            delay,
            elapsed: 0.0,
            phase: if delay > 0.0 {
                TransitionPhase::DelayWait
            } else {
                TransitionPhase::Interpolating
            },
            loop_iteration,
            warned_non_finite: false,
        });
        self.events.push(TransitionEvent::Started { id, destination });
        id
    }

    /// Apply post-completion lifecycle policy, in this order: pointer-gate
    /// after-state, disable, destroy, loop reversal. Disable and destroy
    /// terminate immediately; a matched rule means no loop.
    ///
    /// A loop reversal spawned here takes its first tick on the next
    /// scheduling pass, so zero-duration loops settle once per tick instead
    /// of spinning inside one call.
    fn settle<G>(&mut self, run: RunState<T>, target: &mut G) -> bool
    where
        G: TransitionTarget<T>,
    {
        target.set_pointer_blocking(self.policy.raycast_block.blocks_after());

        if self.policy.disable_after.matches(run.destination) {
            target.set_active(false);
            self.events.push(TransitionEvent::TargetDisabled { id: run.id });
            return false;
        }

        if self.policy.destroy_after.matches(run.destination) {
            target.request_destroy();
            self.events.push(TransitionEvent::TargetDestroyed { id: run.id });
            return false;
        }

        if self.config.looping
            && target.is_active()
            && !self.policy.stop_loop_after.matches(run.destination)
        {
            let duration = self.config.effective_loop_duration();
            let delay = self.config.effective_loop_delay();
            let iteration = run.loop_iteration + 1;
            let id = self.spawn_run(target, run.to, run.from, duration, delay, iteration);
            debug!(run = id.0, iteration, "loop reversal started");
            self.events.push(TransitionEvent::Looped { id, iteration });
            return true;
        }

        false
    }

    /// Classify a run target against the configured semantic endpoints.
    /// Exact equality on the stored values; nothing is recomputed. When the
    /// endpoints coincide, `End` wins the tie: every endpoint run on such a
    /// config counts as toward-end, and `TowardStart` rules never fire.
    fn classify(&self, to: T) -> Destination {
        if to == self.config.end_value {
            Destination::End
        } else if to == self.config.start_value {
            Destination::Start
        } else {
            Destination::Other
        }
    }
}

impl<T> Default for TransitionDriver<T>
where
    T: Interpolate + Copy + PartialEq + Default,
{
    fn default() -> Self {
        Self {
            config: TransitionConfig::default(),
            policy: LifecyclePolicy::default(),
            run: None,
            generation: 0,
            events: EventQueue::new(),
        }
    }
}

static_assertions::assert_impl_all!(TransitionDriver<f32>: Send);
static_assertions::assert_impl_all!(TransitionDriver<crate::value::Vec3>: Send);
