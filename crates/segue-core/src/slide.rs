//! Position transitions.
//!
//! `SlideTransition` moves an element between two positions. Unlike fades,
//! the endpoints are usually not known up front: a panel slides in from one
//! screen-width left of wherever the layout put it. The endpoint spec
//! captures that intent and is resolved against the host's current position
//! exactly once, on first use; the resolved pair then behaves like literal
//! endpoints until the spec is replaced.

use crate::clock::TickClock;
use crate::config::{EndpointSpec, TransitionConfig};
use crate::driver::{TransitionDriver, TransitionPhase};
use crate::error::Result;
use crate::events::{RunId, TransitionEvent};
use crate::host::{PositionTarget, TransitionTarget};
use crate::policy::LifecyclePolicy;
use crate::value::Vec3;

/// Value-typed view of a position host for the driver.
struct PositionAdapter<'a, H: PositionTarget + ?Sized>(&'a mut H);

impl<H: PositionTarget + ?Sized> TransitionTarget<Vec3> for PositionAdapter<'_, H> {
    fn current(&self) -> Vec3 {
        self.0.position()
    }

    fn apply(&mut self, value: Vec3) {
        self.0.set_position(value);
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

/// Slides an element between two positions.
#[derive(Debug)]
pub struct SlideTransition {
    driver: TransitionDriver<Vec3>,
    endpoints: EndpointSpec<Vec3>,
    bound: bool,
}

impl SlideTransition {
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

    /// Resolve the endpoint spec against the host's current position.
    ///
    /// Happens implicitly before the first run; calling it again re-anchors
    /// the endpoints to wherever the host is now.
    pub fn bind<H>(&mut self, host: &H)
    where
        H: PositionTarget + ?Sized,
    {
        let (start, end) = self.endpoints.resolve(host.position());
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

    /// Slide toward the resolved end position.
    pub fn transition_to_end<H>(&mut self, host: &mut H, start_from_current: bool) -> Result<RunId>
    where
        H: PositionTarget + ?Sized,
    {
        self.ensure_bound(host);
        self.driver.to_end(&mut PositionAdapter(host), start_from_current)
    }

    /// Slide toward the resolved end position with explicit timing.
    pub fn transition_to_end_with<H>(
        &mut self,
        host: &mut H,
        start_from_current: bool,
        duration: f32,
        delay: f32,
    ) -> Result<RunId>
    where
        H: PositionTarget + ?Sized,
    {
        self.ensure_bound(host);
        self.driver
            .to_end_with(&mut PositionAdapter(host), start_from_current, duration, delay)
    }

    /// Slide toward the resolved start position.
    pub fn transition_to_start<H>(&mut self, host: &mut H, start_from_current: bool) -> Result<RunId>
    where
        H: PositionTarget + ?Sized,
    {
        self.ensure_bound(host);
        self.driver.to_start(&mut PositionAdapter(host), start_from_current)
    }

    /// Slide toward the resolved start position with explicit timing.
    pub fn transition_to_start_with<H>(
        &mut self,
        host: &mut H,
        start_from_current: bool,
        duration: f32,
        delay: f32,
    ) -> Result<RunId>
    where
        H: PositionTarget + ?Sized,
    {
        self.ensure_bound(host);
        self.driver
            .to_start_with(&mut PositionAdapter(host), start_from_current, duration, delay)
    }

    /// Slide from the current position to an arbitrary one.
    pub fn slide_to<H>(&mut self, host: &mut H, position: Vec3) -> Result<RunId>
    where
        H: PositionTarget + ?Sized,
    {
        self.ensure_bound(host);
        self.driver.to_value(&mut PositionAdapter(host), position)
    }

    /// Slide from the current position to an arbitrary one with explicit
    /// timing.
    pub fn slide_to_with<H>(
        &mut self,
        host: &mut H,
        position: Vec3,
        duration: f32,
        delay: f32,
    ) -> Result<RunId>
    where
        H: PositionTarget + ?Sized,
    {
        self.ensure_bound(host);
        self.driver
            .to_value_with(&mut PositionAdapter(host), position, duration, delay)
    }

    /// Run the policy's on-activate action. Call when the host element
    /// becomes active.
    pub fn activate<H>(&mut self, host: &mut H) -> Result<Option<RunId>>
    where
        H: PositionTarget + ?Sized,
    {
        self.ensure_bound(host);
        self.driver.activate(&mut PositionAdapter(host))
    }

    /// Advance the in-flight run by one tick.
    pub fn tick<H>(&mut self, clock: TickClock, host: &mut H) -> bool
    where
        H: PositionTarget + ?Sized,
    {
        self.driver.tick(clock, &mut PositionAdapter(host))
    }

    /// Stop the in-flight run, leaving the position where it is.
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
        H: PositionTarget + ?Sized,
    {
        if !self.bound {
            self.bind(host);
        }
    }
}

impl Default for SlideTransition {
    fn default() -> Self {
        Self {
            driver: TransitionDriver::default(),
            endpoints: EndpointSpec::default(),
            bound: false,
        }
    }
}

static_assertions::assert_impl_all!(SlideTransition: Send);
