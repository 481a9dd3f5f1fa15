//! Rotation transitions.
//!
//! `RotateTransition` interpolates Euler angles in degrees, one component
//! at a time, and writes the host rotation as a quaternion composed from
//! them on every tick. Composition is the fixed `X * Y * Z` chain of
//! single-axis rotations (see [`Quat::from_euler_xyz`]), so each axis
//! animates independently of the others.

use crate::clock::TickClock;
use crate::config::{EndpointSpec, TransitionConfig};
use crate::driver::{TransitionDriver, TransitionPhase};
use crate::error::Result;
use crate::events::{RunId, TransitionEvent};
use crate::host::{RotationTarget, TransitionTarget};
use crate::policy::LifecyclePolicy;
use crate::value::{Quat, Vec3};

/// Euler-angle view of a rotation host for the driver.
///
/// The driver sees plain `Vec3` angle triples; the quaternion conversion
/// happens on every write.
struct RotationAdapter<'a, H: RotationTarget + ?Sized>(&'a mut H);

impl<H: RotationTarget + ?Sized> TransitionTarget<Vec3> for RotationAdapter<'_, H> {
    fn current(&self) -> Vec3 {
        self.0.euler_angles()
    }

    fn apply(&mut self, value: Vec3) {
        self.0.set_rotation(Quat::from_euler_xyz(value));
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

/// Rotates an element between two Euler-angle triples, in degrees.
#[derive(Debug)]
pub struct RotateTransition {
    driver: TransitionDriver<Vec3>,
    endpoints: EndpointSpec<Vec3>,
    bound: bool,
}

impl RotateTransition {
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

    /// Resolve the endpoint spec against the host's current Euler angles.
    pub fn bind<H>(&mut self, host: &H)
    where
        H: RotationTarget + ?Sized,
    {
        let (start, end) = self.endpoints.resolve(host.euler_angles());
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

    /// Rotate toward the resolved end angles.
    pub fn transition_to_end<H>(&mut self, host: &mut H, start_from_current: bool) -> Result<RunId>
    where
        H: RotationTarget + ?Sized,
    {
        self.ensure_bound(host);
        self.driver.to_end(&mut RotationAdapter(host), start_from_current)
    }

    /// Rotate toward the resolved end angles with explicit timing.
    pub fn transition_to_end_with<H>(
        &mut self,
        host: &mut H,
        start_from_current: bool,
        duration: f32,
        delay: f32,
    ) -> Result<RunId>
    where
        H: RotationTarget + ?Sized,
    {
        self.ensure_bound(host);
        self.driver
            .to_end_with(&mut RotationAdapter(host), start_from_current, duration, delay)
    }

    /// Rotate toward the resolved start angles.
    pub fn transition_to_start<H>(&mut self, host: &mut H, start_from_current: bool) -> Result<RunId>
    where
        H: RotationTarget + ?Sized,
    {
        self.ensure_bound(host);
        self.driver.to_start(&mut RotationAdapter(host), start_from_current)
    }

    /// Rotate toward the resolved start angles with explicit timing.
    pub fn transition_to_start_with<H>(
        &mut self,
        host: &mut H,
        start_from_current: bool,
        duration: f32,
        delay: f32,
    ) -> Result<RunId>
    where
        H: RotationTarget + ?Sized,
    {
        self.ensure_bound(host);
        self.driver
            .to_start_with(&mut RotationAdapter(host), start_from_current, duration, delay)
    }

    /// Rotate from the current angles to arbitrary ones.
    pub fn rotate_to<H>(&mut self, host: &mut H, euler_degrees: Vec3) -> Result<RunId>
    where
        H: RotationTarget + ?Sized,
    {
        self.ensure_bound(host);
        self.driver.to_value(&mut RotationAdapter(host), euler_degrees)
    }

    /// Rotate from the current angles to arbitrary ones with explicit
    /// timing.
    pub fn rotate_to_with<H>(
        &mut self,
        host: &mut H,
        euler_degrees: Vec3,
        duration: f32,
        delay: f32,
    ) -> Result<RunId>
    where
        H: RotationTarget + ?Sized,
    {
        self.ensure_bound(host);
        self.driver
            .to_value_with(&mut RotationAdapter(host), euler_degrees, duration, delay)
    }

    /// Run the policy's on-activate action. Call when the host element
    /// becomes active.
    pub fn activate<H>(&mut self, host: &mut H) -> Result<Option<RunId>>
    where
        H: RotationTarget + ?Sized,
    {
        self.ensure_bound(host);
        self.driver.activate(&mut RotationAdapter(host))
    }

    /// Advance the in-flight run by one tick.
    pub fn tick<H>(&mut self, clock: TickClock, host: &mut H) -> bool
    where
        H: RotationTarget + ?Sized,
    {
        self.driver.tick(clock, &mut RotationAdapter(host))
    }

    /// Stop the in-flight run, leaving the rotation where it is.
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
        H: RotationTarget + ?Sized,
    {
        if !self.bound {
            self.bind(host);
        }
    }
}

impl Default for RotateTransition {
    fn default() -> Self {
        Self {
            driver: TransitionDriver::default(),
            endpoints: EndpointSpec::default(),
            bound: false,
        }
    }
}

static_assertions::assert_impl_all!(RotateTransition: Send);
