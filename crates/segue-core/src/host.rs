//! Traits the host UI toolkit implements for the engine.
//!
//! The engine never owns UI state. Everything it touches on the host goes
//! through two layers of traits:
//!
//! - `UiElement`: element lifecycle (active flag, destruction, pointer gate).
//!   Implemented once per host element type.
//! - Per-property value access (`AlphaTarget`, `PositionTarget`, ...): one
//!   trait per animatable property, so an element can expose several
//!   properties of the same underlying type (position and scale are both 3D
//!   vectors) without ambiguity.
//!
//! `TransitionTarget` is the generic driver's view: one property plus the
//! lifecycle surface. The typed wrappers adapt a per-property host into it;
//! hosts never implement it directly.

use crate::value::{Quat, Vec2, Vec3};

/// Lifecycle surface of a host UI element.
pub trait UiElement {
    /// Whether the element is currently active (visible and participating).
    fn is_active(&self) -> bool;

    /// Activate or deactivate the element.
    fn set_active(&mut self, active: bool);

    /// Ask the host to destroy the element. The host decides when the
    /// element actually goes away; the engine only requests it.
    fn request_destroy(&mut self);

    /// Gate pointer raycasts on the element. Hosts without a pointer gate
    /// keep the default no-op.
    fn set_pointer_blocking(&mut self, _blocking: bool) {}
}

/// The driver's view of its target: one animatable property plus lifecycle.
pub trait TransitionTarget<T> {
    /// Read the property's current value.
    fn current(&self) -> T;

    /// Write a new value to the property.
    fn apply(&mut self, value: T);

    /// See [`UiElement::is_active`].
    fn is_active(&self) -> bool;

    /// See [`UiElement::set_active`].
    fn set_active(&mut self, active: bool);

    /// See [`UiElement::request_destroy`].
    fn request_destroy(&mut self);

    /// See [`UiElement::set_pointer_blocking`].
    fn set_pointer_blocking(&mut self, blocking: bool);
}

/// Opacity access for fade transitions.
pub trait AlphaTarget: UiElement {
    fn alpha(&self) -> f32;
    fn set_alpha(&mut self, alpha: f32);
}

/// Position access for slide transitions.
pub trait PositionTarget: UiElement {
    fn position(&self) -> Vec3;
    fn set_position(&mut self, position: Vec3);
}

/// 2D size access for size transitions.
pub trait SizeTarget: UiElement {
    fn size(&self) -> Vec2;
    fn set_size(&mut self, size: Vec2);
}

/// Scale access for scale transitions.
pub trait ScaleTarget: UiElement {
    fn scale(&self) -> Vec3;
    fn set_scale(&mut self, scale: Vec3);
}

/// Rotation access for rotate transitions.
///
/// The engine animates Euler angle triples in degrees and hands the host a
/// quaternion composed per write; the host never sees intermediate Euler
/// values.
pub trait RotationTarget: UiElement {
    /// The element's rotation as Euler angles in degrees, used as the
    /// bind-time anchor and as the "current value" for runs started from
    /// the element's present state.
    fn euler_angles(&self) -> Vec3;

    /// Apply a composed rotation.
    fn set_rotation(&mut self, rotation: Quat);
}

/// RGBA color access for color transitions. Components are in [0, 1].
pub trait TintTarget: UiElement {
    fn tint(&self) -> [f32; 4];
    fn set_tint(&mut self, tint: [f32; 4]);
}
