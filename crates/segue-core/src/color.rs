//! Tint transitions.
//!
//! `ColorTransition` animates an RGBA tint, each channel interpolated
//! independently. Like fades, the endpoints are literal values in the
//! config; there is no bind-time resolution.

use crate::clock::TickClock;
use crate::config::TransitionConfig;
use crate::driver::{TransitionDriver, TransitionPhase};
use crate::error::Result;
use crate::events::{RunId, TransitionEvent};
use crate::host::{TintTarget, TransitionTarget};
use crate::policy::LifecyclePolicy;

/// Value-typed view of a tint host for the driver.
struct TintAdapter<'a, H: TintTarget + ?Sized>(&'a mut H);

impl<H: TintTarget + ?Sized> TransitionTarget<[f32; 4]> for TintAdapter<'_, H> {
    fn current(&self) -> [f32; 4] {
        self.0.tint()
    }

    fn apply(&mut self, value: [f32; 4]) {
        self.0.set_tint(value);
    }

    fn is_active(&self) -> bool {
        self.0.is_active()
    }

    fn set_active(&mut self, active: bool) {
        self.0.set_active(active);
    }

    fn request_destroy(&mut self) {
        self.0.request_destroy();
    }

    fn set_pointer_blocking(&mut self, blocking: bool) {
        self.0.set_pointer_blocking(blocking);
    }
}

/// Tints an element between two RGBA colors.
#[derive(Debug)]
pub struct ColorTransition {
    driver: TransitionDriver<[f32; 4]>,
}

impl ColorTransition {
    pub fn new(config: TransitionConfig<[f32; 4]>) -> Result<Self> {
        Self::with_policy(config, LifecyclePolicy::default())
    }

    pub fn with_policy(config: TransitionConfig<[f32; 4]>, policy: LifecyclePolicy) -> Result<Self> {
        Ok(Self {
            driver: TransitionDriver::new(config, policy)?,
        })
    }

    /// Tint toward the configured end color.
    pub fn transition_to_end<H>(&mut self, host: &mut H, start_from_current: bool) -> Result<RunId>
    where
        H: TintTarget + ?Sized,
    {
        self.driver.to_end(&mut TintAdapter(host), start_from_current)
    }

    /// Tint toward the configured end color with explicit timing.
    pub fn transition_to_end_with<H>(
        &mut self,
        host: &mut H,
        start_from_current: bool,
        duration: f32,
        delay: f32,
    ) -> Result<RunId>
    where
        H: TintTarget + ?Sized,
    {
        self.driver
            .to_end_with(&mut TintAdapter(host), start_from_current, duration, delay)
    }

    /// Tint toward the configured start color.
    pub fn transition_to_start<H>(&mut self, host: &mut H, start_from_current: bool) -> Result<RunId>
    where
        H: TintTarget + ?Sized,
    {
        self.driver.to_start(&mut TintAdapter(host), start_from_current)
    }

    /// Tint toward the configured start color with explicit timing.
    pub fn transition_to_start_with<H>(
        &mut self,
        host: &mut H,
        start_from_current: bool,
        duration: f32,
        delay: f32,
    ) -> Result<RunId>
    where
        H: TintTarget + ?Sized,
    {
        self.driver
            .to_start_with(&mut TintAdapter(host), start_from_current, duration, delay)
    }

    /// Tint from the current color to an arbitrary one.
    pub fn tint_to<H>(&mut self, host: &mut H, color: [f32; 4]) -> Result<RunId>
    where
        H: TintTarget + ?Sized,
    {
        self.driver.to_value(&mut TintAdapter(host), color)
    }

    /// Tint from the current color to an arbitrary one with explicit
    /// timing.
    pub fn tint_to_with<H>(
        &mut self,
        host: &mut H,
        color: [f32; 4],
        duration: f32,
        delay: f32,
    ) -> Result<RunId>
    where
        H: TintTarget + ?Sized,
    {
        self.driver
            .to_value_with(&mut TintAdapter(host), color, duration, delay)
    }

    /// Run the policy's on-activate action. Call when the host element
    /// becomes active.
    pub fn activate<H>(&mut self, host: &mut H) -> Result<Option<RunId>>
    where
        H: TintTarget + ?Sized,
    {
        self.driver.activate(&mut TintAdapter(host))
    }

    /// Advance the in-flight run by one tick.
    pub fn tick<H>(&mut self, clock: TickClock, host: &mut H) -> bool
    where
        H: TintTarget + ?Sized,
    {
        self.driver.tick(clock, &mut TintAdapter(host))
    }

    /// Stop the in-flight run, leaving the tint where it is.
    pub fn cancel(&mut self) {
        self.driver.cancel();
    }

    /// Call when the host element is being torn down.
    pub fn teardown(&mut self) {
        self.driver.cancel();
    }

    pub fn is_running(&self) -> bool {
        self.driver.is_running()
    }

    pub fn phase(&self) -> TransitionPhase {
        self.driver.phase()
    }

    pub fn progress(&self) -> Option<f32> {
        self.driver.progress()
    }

    pub fn config(&self) -> &TransitionConfig<[f32; 4]> {
        self.driver.config()
    }

    pub fn set_config(&mut self, config: TransitionConfig<[f32; 4]>) -> Result<()> {
        self.driver.set_config(config)
    }

    pub fn policy(&self) -> &LifecyclePolicy {
        self.driver.policy()
    }

    pub fn set_policy(&mut self, policy: LifecyclePolicy) {
        self.driver.set_policy(policy);
    }

    pub fn drain_events(&mut self) -> impl Iterator<Item = TransitionEvent> + '_ {
        self.driver.drain_events()
    }
}

static_assertions::assert_impl_all!(ColorTransition: Send);
