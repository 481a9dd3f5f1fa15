//! Scale transitions.
//!
//! `ScaleTransition` animates an element's local scale factors. The rubber
//! band easing pairs naturally with scale for pop-in effects: the factors
//! overshoot the target and oscillate before settling on it exactly.

use crate::clock::TickClock;
use crate::config::{EndpointSpec, TransitionConfig};
use crate::driver::{TransitionDriver, TransitionPhase};
use crate::error::Result;
use crate::events::{RunId, TransitionEvent};
use crate::host::{ScaleTarget, TransitionTarget};
use crate::policy::LifecyclePolicy;
use crate::value::Vec3;

/// Value-typed view of a scale host for the driver.
struct ScaleAdapter<'a, H: ScaleTarget + ?Sized>(&'a mut H);

impl<H: ScaleTarget + ?Sized> TransitionTarget<Vec3> for ScaleAdapter<'_, H> {
    fn current(&self) -> Vec3 {
        self.0.scale()
    }

    fn apply(&mut self, value: Vec3) {
        self.0.set_scale(value);
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

/// Scales an element between two factor triples.
#[derive(Debug)]
pub struct ScaleTransition {
    driver: TransitionDriver<Vec3>,
    endpoints: EndpointSpec<Vec3>,
    bound: bool,
}

impl ScaleTransition {
    /// Build from an endpoint spec and a config. The config's endpoint
    /// fields are replaced at bind time by the resolved spec.
    pub fn new(endpoints: EndpointSpec<Vec3>, config: TransitionConfig<Vec3>) -> Result<Self> {
        Self::with_policy(endpoints, config, LifecyclePolicy::default())
    }

    pub fn with_policy(
        endpoints: EndpointSpec<Vec3>,
        config: TransitionConfig<Vec3>,
        policy: LifecyclePolicy,
    ) -> Result<Self> {
        Ok(Self {
            driver: TransitionDriver::new(config, policy)?,
            endpoints,
            bound: false,
        })
    }

    /// Resolve the endpoint spec against the host's current scale.
    pub fn bind<H>(&mut self, host: &H)
    where
        H: ScaleTarget + ?Sized,
    {
        let (start, end) = self.endpoints.resolve(host.scale());
        self.driver.set_endpoints(start, end);
        self.bound = true;
    }

    /// Replace the endpoint spec; the next run re-resolves it.
    pub fn set_endpoints(&mut self, endpoints: EndpointSpec<Vec3>) {
        self.endpoints = endpoints;
        self.bound = false;
    }

    pub fn endpoints(&self) -> &EndpointSpec<Vec3> {
        &self.endpoints
    }

    /// Scale toward the resolved end factors.
    pub fn transition_to_end<H>(&mut self, host: &mut H, start_from_current: bool) -> Result<RunId>
    where
        H: ScaleTarget + ?Sized,
    {
        self.ensure_bound(host);
        self.driver.to_end(&mut ScaleAdapter(host), start_from_current)
    }

    /// Scale toward the resolved end factors with explicit timing.
    pub fn transition_to_end_with<H>(
        &mut self,
        host: &mut H,
        start_from_current: bool,
        duration: f32,
        delay: f32,
    ) -> Result<RunId>
    where
        H: ScaleTarget + ?Sized,
    {
        self.ensure_bound(host);
        self.driver
            .to_end_with(&mut ScaleAdapter(host), start_from_current, duration, delay)
    }

    /// Scale toward the resolved start factors.
    pub fn transition_to_start<H>(&mut self, host: &mut H, start_from_current: bool) -> Result<RunId>
    where
        H: ScaleTarget + ?Sized,
    {
        self.ensure_bound(host);
        self.driver.to_start(&mut ScaleAdapter(host), start_from_current)
    }

    /// Scale toward the resolved start factors with explicit timing.
    pub fn transition_to_start_with<H>(
        &mut self,
        host: &mut H,
        start_from_current: bool,
        duration: f32,
        delay: f32,
    ) -> Result<RunId>
    where
        H: ScaleTarget + ?Sized,
    {
        self.ensure_bound(host);
        self.driver
            .to_start_with(&mut ScaleAdapter(host), start_from_current, duration, delay)
    }

    /// Scale from the current factors to arbitrary ones.
    pub fn scale_to<H>(&mut self, host: &mut H, scale: Vec3) -> Result<RunId>
    where
        H: ScaleTarget + ?Sized,
    {
        self.ensure_bound(host);
        self.driver.to_value(&mut ScaleAdapter(host), scale)
    }

    /// Scale from the current factors to arbitrary ones with explicit
    /// timing.
    pub fn scale_to_with<H>(
        &mut self,
        host: &mut H,
        scale: Vec3,
        duration: f32,
        delay: f32,
    ) -> Result<RunId>
    where
        H: ScaleTarget + ?Sized,
    {
        self.ensure_bound(host);
        self.driver
            .to_value_with(&mut ScaleAdapter(host), scale, duration, delay)
    }

    /// Run the policy's on-activate action. Call when the host element
    /// becomes active.
    pub fn activate<H>(&mut self, host: &mut H) -> Result<Option<RunId>>
    where
        H: ScaleTarget + ?Sized,
    {
        self.ensure_bound(host);
        self.driver.activate(&mut ScaleAdapter(host))
    }

    /// Advance the in-flight run by one tick.
    pub fn tick<H>(&mut self, clock: TickClock, host: &mut H) -> bool
    where
        H: ScaleTarget + ?Sized,
    {
        self.driver.tick(clock, &mut ScaleAdapter(host))
    }

    /// Stop the in-flight run, leaving the scale where it is.
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

    pub fn config(&self) -> &TransitionConfig<Vec3> {
        self.driver.config()
    }

    pub fn set_config(&mut self, config: TransitionConfig<Vec3>) -> Result<()> {
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

    fn ensure_bound<H>(&mut self, host: &H)
    where
        H: ScaleTarget + ?Sized,
    {
        if !self.bound {
            self.bind(host);
        }
    }
}

impl Default for ScaleTransition {
    fn default() -> Self {
        Self {
            driver: TransitionDriver::default(),
            endpoints: EndpointSpec::default(),
            bound: false,
        }
    }
}

static_assertions::assert_impl_all!(ScaleTransition: Send);
