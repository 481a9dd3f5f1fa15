//! Lifecycle policy: what happens around a run, expressed as data.
//!
//! The driver's state machine takes no policy branches of its own; it asks
//! these pure decision functions at the two points where policy applies (run
//! start and settle) and performs whatever they answer. Side effects reach
//! the host through the `UiElement` trait.

use serde::{Deserialize, Serialize};

/// What a run was heading toward, classified once at run start by exact
/// equality against the configured semantic endpoints.
///
/// The comparison is against the same stored values, never a recomputed
/// result, so float drift cannot change how a run is classified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Destination {
    /// The run's target equals the configured start endpoint.
    Start,
    /// The run's target equals the configured end endpoint.
    End,
    /// The run targets an arbitrary value (started from "transition to
    /// value" or a run begun from the host's current value).
    Other,
}

/// What to do when the owning element becomes active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivateAction {
    /// Animate from the start endpoint to the end endpoint.
    ToEnd,
    /// Animate from the end endpoint to the start endpoint.
    ToStart,
    /// Snap to the start endpoint with no delay and no animation.
    JumpToStart,
    /// Snap to the end endpoint with no delay and no animation.
    JumpToEnd,
    /// Do nothing.
    None,
}

impl Default for ActivateAction {
    fn default() -> Self {
        Self::None
    }
}

/// Matches completed runs by the direction they ran in.
///
/// Used for the disable-after, destroy-after, and stop-loop-after rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DirectionRule {
    /// Match runs that ended at the start endpoint.
    TowardStart,
    /// Match runs that ended at the end endpoint.
    TowardEnd,
    /// Match every completed run, whatever it was heading toward.
    Both,
    /// Match nothing.
    None,
}

impl Default for DirectionRule {
    fn default() -> Self {
        Self::None
    }
}

impl DirectionRule {
    /// Whether a run with the given destination matches this rule.
    pub fn matches(&self, destination: Destination) -> bool {
        match self {
            Self::Both => true,
            Self::None => false,
            Self::TowardStart => destination == Destination::Start,
            Self::TowardEnd => destination == Destination::End,
        }
    }
}

/// When the element should block pointer raycasts.
///
/// Only meaningful for hosts that expose a pointer gate (opacity-style
/// elements); elsewhere the writes land on a no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RaycastRule {
    /// Block while a run is in flight, release once settled.
    DuringTransition,
    /// Release while a run is in flight, block once settled.
    AfterTransition,
    /// Block at all times.
    Always,
    /// Never block.
    Never,
}

impl Default for RaycastRule {
    fn default() -> Self {
        Self::Never
    }
}

impl RaycastRule {
    /// Pointer-gate state while a run is in flight.
    pub fn blocks_during(&self) -> bool {
        matches!(self, Self::Always | Self::DuringTransition)
    }

    /// Pointer-gate state once a run has settled.
    pub fn blocks_after(&self) -> bool {
        matches!(self, Self::Always | Self::AfterTransition)
    }
}

/// Full lifecycle policy for one transition instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LifecyclePolicy {
    /// Run triggered when the owning element becomes active.
    pub on_activate: ActivateAction,
    /// Deactivate the owning element after a matching run completes.
    pub disable_after: DirectionRule,
    /// Request destruction of the owning element after a matching run
    /// completes.
    pub destroy_after: DirectionRule,
    /// Stop looping after a matching run completes.
    pub stop_loop_after: DirectionRule,
    /// Pointer-gate schedule across the run lifecycle.
    pub raycast_block: RaycastRule,
}

impl LifecyclePolicy {
    pub fn with_on_activate(mut self, action: ActivateAction) -> Self {
        self.on_activate = action;
        self
    }

    pub fn with_disable_after(mut self, rule: DirectionRule) -> Self {
        self.disable_after = rule;
        self
    }

    pub fn with_destroy_after(mut self, rule: DirectionRule) -> Self {
        self.destroy_after = rule;
        self
    }

    pub fn with_stop_loop_after(mut self, rule: DirectionRule) -> Self {
        self.stop_loop_after = rule;
        self
    }

    pub fn with_raycast_block(mut self, rule: RaycastRule) -> Self {
        self.raycast_block = rule;
        self
    }
}
