//! Size transitions.
//!
//! `SizeTransition` animates an element's width and height. Endpoints come
//! from an [`EndpointSpec`] resolved against the host's size on first use,
//! so "grow 20 units taller" works without knowing the layout size up
//! front.

use crate::clock::TickClock;
use crate::config::{EndpointSpec, TransitionConfig};
use crate::driver::{TransitionDriver, TransitionPhase};
use crate::error::Result;
use crate::events::{RunId, TransitionEvent};
use crate::host::{SizeTarget, TransitionTarget};
use crate::policy::LifecyclePolicy;
use crate::value::Vec2;

/// Value-typed view of a size host for the driver.
struct SizeAdapter<'a, H: SizeTarget + ?Sized>(&'a mut H);

impl<H: SizeTarget + ?Sized> TransitionTarget<Vec2> for SizeAdapter<'_, H> {
    fn current(&self) -> Vec2 {
        self.0.size()
    }

    fn apply(&mut self, value: Vec2) {
        self.0.set_size(value);
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

/// Resizes an element between two sizes.
#[derive(Debug)]
pub struct SizeTransition {
    driver: TransitionDriver<Vec2>,
    endpoints: EndpointSpec<Vec2>,
    bound: bool,
}

impl SizeTransition {
    /// Build from an endpoint spec and a config. The config's endpoint
    /// fields are replaced at bind time by the resolved spec.
    pub fn new(endpoints: EndpointSpec<Vec2>, config: TransitionConfig<Vec2>) -> Result<Self> {
        Self::with_policy(endpoints, config, LifecyclePolicy::default())
    }

    pub fn with_policy(
        endpoints: EndpointSpec<Vec2>,
        config: TransitionConfig<Vec2>,
        policy: LifecyclePolicy,
    ) -> Result<Self> {
        Ok(Self {
            driver: TransitionDriver::new(config, policy)?,
            endpoints,
            bound: false,
        })
    }

    /// Resolve the endpoint spec against the host's current size.
    pub fn bind<H>(&mut self, host: &H)
    where
        H: SizeTarget + ?Sized,
    {
        let (start, end) = self.endpoints.resolve(host.size());
        self.driver.set_endpoints(start, end);
        self.bound = true;
    }

    /// Replace the endpoint spec; the next run re-resolves it.
    pub fn set_endpoints(&mut self, endpoints: EndpointSpec<Vec2>) {
        self.endpoints = endpoints;
        self.bound = false;
    }

    pub fn endpoints(&self) -> &EndpointSpec<Vec2> {
        &self.endpoints
    }

    /// Resize toward the resolved end size.
    pub fn transition_to_end<H>(&mut self, host: &mut H, start_from_current: bool) -> Result<RunId>
    where
        H: SizeTarget + ?Sized,
    {
        self.ensure_bound(host);
        self.driver.to_end(&mut SizeAdapter(host), start_from_current)
    }

    /// Resize toward the resolved end size with explicit timing.
    pub fn transition_to_end_with<H>(
        &mut self,
        host: &mut H,
        start_from_current: bool,
        duration: f32,
        delay: f32,
    ) -> Result<RunId>
    where
        H: SizeTarget + ?Sized,
    {
        self.ensure_bound(host);
        self.driver
            .to_end_with(&mut SizeAdapter(host), start_from_current, duration, delay)
    }

    /// Resize toward the resolved start size.
    pub fn transition_to_start<H>(&mut self, host: &mut H, start_from_current: bool) -> Result<RunId>
    where
        H: SizeTarget + ?Sized,
    {
        self.ensure_bound(host);
        self.driver.to_start(&mut SizeAdapter(host), start_from_current)
    }

    /// Resize toward the resolved start size with explicit timing.
    pub fn transition_to_start_with<H>(
        &mut self,
        host: &mut H,
        start_from_current: bool,
        duration: f32,
        delay: f32,
    ) -> Result<RunId>
    where
        H: SizeTarget + ?Sized,
    {
        self.ensure_bound(host);
        self.driver
            .to_start_with(&mut SizeAdapter(host), start_from_current, duration, delay)
    }

    /// Resize from the current size to an arbitrary one.
    pub fn resize_to<H>(&mut self, host: &mut H, size: Vec2) -> Result<RunId>
    where
        H: SizeTarget + ?Sized,
    {
        self.ensure_bound(host);
        self.driver.to_value(&mut SizeAdapter(host), size)
    }

    /// Resize from the current size to an arbitrary one with explicit
    /// timing.
    pub fn resize_to_with<H>(
        &mut self,
        host: &mut H,
        size: Vec2,
        duration: f32,
        delay: f32,
    ) -> Result<RunId>
    where
        H: SizeTarget + ?Sized,
    {
        self.ensure_bound(host);
        self.driver
            .to_value_with(&mut SizeAdapter(host), size, duration, delay)
    }

    /// Run the policy's on-activate action. Call when the host element
    /// becomes active.
    pub fn activate<H>(&mut self, host: &mut H) -> Result<Option<RunId>>
    where
        H: SizeTarget + ?Sized,
    {
        self.ensure_bound(host);
        self.driver.activate(&mut SizeAdapter(host))
    }

    /// Advance the in-flight run by one tick.
    pub fn tick<H>(&mut self, clock: TickClock, host: &mut H) -> bool
    where
        H: SizeTarget + ?Sized,
    {
        self.driver.tick(clock, &mut SizeAdapter(host))
    }

    /// Stop the in-flight run, leaving the size where it is.
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

    pub fn config(&self) -> &TransitionConfig<Vec2> {
        self.driver.config()
    }

    pub fn set_config(&mut self, config: TransitionConfig<Vec2>) -> Result<()> {
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
        H: SizeTarget + ?Sized,
    {
        if !self.bound {
            self.bind(host);
        }
    }
}

impl Default for SizeTransition {
    fn default() -> Self {
        Self {
            driver: TransitionDriver::default(),
            endpoints: EndpointSpec::default(),
            bound: false,
        }
    }
}

static_assertions::assert_impl_all!(SizeTransition: Send);
