//! Error types for the transition engine.

use thiserror::Error;

/// Result type for transition operations.
pub type Result<T> = std::result::Result<T, TransitionError>;

/// Errors that can occur when configuring or starting a transition.
///
/// These surface synchronously at construction or call time. A running
/// transition has no failure mode: transient numeric problems are recovered
/// tick-locally and the run always converges to its exact end value.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum TransitionError {
    /// Duration was negative. Rejected, never clamped.
    #[error("transition duration must be non-negative, got {0}")]
    NegativeDuration(f32),

    /// Delay was negative. Rejected, never clamped.
    #[error("transition delay must be non-negative, got {0}")]
    NegativeDelay(f32),

    /// A transition was started on a deactivated element.
    #[error("target element is not active")]
    InactiveTarget,
}
