//! Opacity transitions.
//!
//! `FadeTransition` drives an element's alpha between two literal opacity
//! values. Its defaults mirror the common show/hide pattern: fade from fully
//! transparent to fully opaque, start a fade-in when the element activates,
//! open the pointer gate only once a run settles, and deactivate the element
//! after it fades back out.

use crate::clock::TickClock;
use crate::config::TransitionConfig;
use crate::driver::{TransitionDriver, TransitionPhase};
use crate::error::Result;
use crate::events::{RunId, TransitionEvent};
use crate::host::{AlphaTarget, TransitionTarget};
use crate::policy::{ActivateAction, DirectionRule, LifecyclePolicy, RaycastRule};

/// Value-typed view of an alpha host for the driver.
struct AlphaAdapter<'a, H: AlphaTarget + ?Sized>(&'a mut H);

impl<H: AlphaTarget + ?Sized> TransitionTarget<f32> for AlphaAdapter<'_, H> {
    fn current(&self) -> f32 {
        self.0.alpha()
    }

    fn apply(&mut self, value: f32) {
        self.0.set_alpha(value);
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

/// Fades an element between two opacity endpoints.
#[derive(Debug)]
pub struct FadeTransition {
    driver: TransitionDriver<f32>,
}

impl FadeTransition {
    /// Build with the show/hide default policy.
    pub fn new(config: TransitionConfig<f32>) -> Result<Self> {
        Self::with_policy(config, Self::default_policy())
    }

    pub fn with_policy(config: TransitionConfig<f32>, policy: LifecyclePolicy) -> Result<Self> {
        Ok(Self {
            driver: TransitionDriver::new(config, policy)?,
        })
    }

    /// Fade in on activation, open the pointer gate once settled, and
    /// deactivate the element after a fade toward the start endpoint.
    pub fn default_policy() -> LifecyclePolicy {
        LifecyclePolicy::default()
            .with_on_activate(ActivateAction::ToEnd)
            .with_disable_after(DirectionRule::TowardStart)
            .with_raycast_block(RaycastRule::AfterTransition)
    }

    /// Fade toward the configured end opacity.
    pub fn transition_to_end<H>(&mut self, host: &mut H, start_from_current: bool) -> Result<RunId>
    where
        H: AlphaTarget + ?Sized,
    {
        self.driver.to_end(&mut AlphaAdapter(host), start_from_current)
    }

    /// Fade toward the configured end opacity with explicit timing.
    pub fn transition_to_end_with<H>(
        &mut self,
        host: &mut H,
        start_from_current: bool,
        duration: f32,
        delay: f32,
    ) -> Result<RunId>
    where
        H: AlphaTarget + ?Sized,
    {
        self.driver
            .to_end_with(&mut AlphaAdapter(host), start_from_current, duration, delay)
    }

    /// Fade toward the configured start opacity.
    pub fn transition_to_start<H>(&mut self, host: &mut H, start_from_current: bool) -> Result<RunId>
    where
        H: AlphaTarget + ?Sized,
    {
        self.driver.to_start(&mut AlphaAdapter(host), start_from_current)
    }

    /// Fade toward the configured start opacity with explicit timing.
    pub fn transition_to_start_with<H>(
        &mut self,
        host: &mut H,
        start_from_current: bool,
        duration: f32,
        delay: f32,
    ) -> Result<RunId>
    where
        H: AlphaTarget + ?Sized,
    {
        self.driver
            .to_start_with(&mut AlphaAdapter(host), start_from_current, duration, delay)
    }

    /// Fade from the current opacity to an arbitrary one.
    pub fn fade_to<H>(&mut self, host: &mut H, alpha: f32) -> Result<RunId>
    where
        H: AlphaTarget + ?Sized,
    {
        self.driver.to_value(&mut AlphaAdapter(host), alpha)
    }

    /// Fade from the current opacity to an arbitrary one with explicit
    /// timing.
    pub fn fade_to_with<H>(&mut self, host: &mut H, alpha: f32, duration: f32, delay: f32) -> Result<RunId>
    where
        H: AlphaTarget + ?Sized,
    {
        self.driver
            .to_value_with(&mut AlphaAdapter(host), alpha, duration, delay)
    }

    /// Run the policy's on-activate action. Call when the host element
    /// becomes active.
    pub fn activate<H>(&mut self, host: &mut H) -> Result<Option<RunId>>
    where
        H: AlphaTarget + ?Sized,
    {
        self.driver.activate(&mut AlphaAdapter(host))
    }

    /// Advance the in-flight run by one tick.
    pub fn tick<H>(&mut self, clock: TickClock, host: &mut H) -> bool
    where
        H: AlphaTarget + ?Sized,
    {
        self.driver.tick(clock, &mut AlphaAdapter(host))
    }

    /// Stop the in-flight run, leaving the opacity where it is.
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

    pub fn config(&self) -> &TransitionConfig<f32> {
        self.driver.config()
    }

    pub fn set_config(&mut self, config: TransitionConfig<f32>) -> Result<()> {
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

impl Default for FadeTransition {
    fn default() -> Self {
        let mut driver = TransitionDriver::default();
        driver.set_endpoints(0.0, 1.0);
        driver.set_policy(Self::default_policy());
        Self { driver }
    }
}

static_assertions::assert_impl_all!(FadeTransition: Send);
