//! Time-driven transitions for UI element properties.
//!
//! This crate provides:
//! - **Transition driver**: a generic state machine interpolating one value
//!   over time, with delay, looping, and supersede-on-start semantics
//! - **Typed wrappers**: fade, slide, size, scale, rotate, and tint
//!   transitions with per-variant defaults and host adapters
//! - **Easing curves**: linear, smoothstep, double smoothstep, and a
//!   damped-oscillation rubber band
//! - **Lifecycle policy**: declarative disable/destroy/pointer-gate/loop
//!   rules applied when a run settles
//!
//! # Architecture
//!
//! ```text
//! FadeTransition / SlideTransition / ... (typed wrappers)
//!   ├── TransitionDriver<T>  (delay -> interpolate -> settle)
//!   │     ├── TransitionConfig<T> + LifecyclePolicy
//!   │     └── EventQueue  (started/completed/looped/...)
//!   └── host adapter       (reads and writes one property of a UiElement)
//! ```
//!
//! The host environment owns the scheduling: it calls `tick` once per frame
//! with a [`TickClock`] carrying that frame's scaled and unscaled deltas.
//! Nothing here blocks or spawns threads.

pub mod clock;
pub mod color;
pub mod config;
pub mod driver;
pub mod easing;
pub mod error;
pub mod events;
pub mod fade;
pub mod host;
pub mod interpolate;
pub mod policy;
pub mod rotate;
pub mod scale;
pub mod size;
pub mod slide;
pub mod value;

pub use clock::TickClock;
pub use color::ColorTransition;
pub use config::{AnchorRole, EndpointSpec, OffsetKind, TransitionConfig};
pub use driver::{TransitionDriver, TransitionPhase};
pub use easing::Easing;
pub use error::{Result, TransitionError};
pub use events::{EventQueue, RunId, TransitionEvent};
pub use fade::FadeTransition;
pub use host::{
    AlphaTarget, PositionTarget, RotationTarget, ScaleTarget, SizeTarget, TintTarget,
    TransitionTarget, UiElement,
};
pub use interpolate::Interpolate;
pub use policy::{ActivateAction, Destination, DirectionRule, LifecyclePolicy, RaycastRule};
pub use rotate::RotateTransition;
pub use scale::ScaleTransition;
pub use size::SizeTransition;
pub use slide::SlideTransition;
pub use value::{Quat, Vec2, Vec3};
