//! Lifecycle events emitted by a transition driver.
//!
//! Events accumulate in a per-driver queue during ticks and are polled by
//! the host afterwards. The queue is the only feedback channel; the driver
//! never calls back into host code beyond the target traits.
//!
//! # Usage
//!
//! ```ignore
//! let mut fade = FadeTransition::default();
//! fade.transition_to_end(&mut panel, false)?;
//!
//! fade.tick(TickClock::uniform(0.016), &mut panel);
//!
//! for event in fade.drain_events() {
//!     if event.is_completed() {
//!         println!("fade {} finished", event.run_id().0);
//!     }
//! }
//! ```

use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

use crate::policy::Destination;

/// Identity of a single run.
///
/// Wraps the owning driver's generation counter: every started run gets a
/// strictly larger id than any run before it on the same driver. Ids are
/// per-driver, not global.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RunId(pub u64);

/// Event emitted when a run changes state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TransitionEvent {
    /// A run has started (including each loop iteration's run).
    Started {
        /// The run's id.
        id: RunId,
        /// What the run is heading toward.
        destination: Destination,
    },
    /// A run reached its target and wrote the exact end value.
    Completed {
        /// The run's id.
        id: RunId,
        /// What the run was heading toward.
        destination: Destination,
    },
    /// A run was cancelled by an explicit `cancel` or teardown.
    Cancelled {
        /// The cancelled run's id.
        id: RunId,
    },
    /// A run was replaced by a newer run before completing.
    Superseded {
        /// The replaced run's id.
        id: RunId,
    },
    /// A completed run looped; a reverse run is now in flight.
    Looped {
        /// The new reverse run's id.
        id: RunId,
        /// Loop iteration count, starting at 1 for the first reversal.
        iteration: u32,
    },
    /// The lifecycle policy deactivated the owning element.
    TargetDisabled {
        /// The completing run's id.
        id: RunId,
    },
    /// The lifecycle policy requested destruction of the owning element.
    TargetDestroyed {
        /// The completing run's id.
        id: RunId,
    },
}

impl TransitionEvent {
    /// Get the run id this event refers to.
    pub fn run_id(&self) -> RunId {
        match self {
            Self::Started { id, .. }
            | Self::Completed { id, .. }
            | Self::Cancelled { id }
            | Self::Superseded { id }
            | Self::Looped { id, .. }
            | Self::TargetDisabled { id }
            | Self::TargetDestroyed { id } => *id,
        }
    }

    /// Check if this is a "started" event.
    pub fn is_started(&self) -> bool {
        matches!(self, Self::Started { .. })
    }

    /// Check if this marks a run that reached its target.
    pub fn is_completed(&self) -> bool {
        matches!(self, Self::Completed { .. })
    }

    /// Check if this marks a run that stopped short of its target, by
    /// explicit cancellation or by being superseded.
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled { .. } | Self::Superseded { .. })
    }
}

/// Queue collecting transition events during ticks.
#[derive(Debug, Default)]
pub struct EventQueue {
    events: VecDeque<TransitionEvent>,
}

impl EventQueue {
    /// Create a new empty event queue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Push an event onto the queue.
    pub fn push(&mut self, event: TransitionEvent) {
        self.events.push_back(event);
    }

    /// Check if the queue is empty.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Get the number of pending events.
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Pop the next event from the queue.
    pub fn pop(&mut self) -> Option<TransitionEvent> {
        self.events.pop_front()
    }

    /// Drain all events from the queue, returning an iterator.
    pub fn drain(&mut self) -> impl Iterator<Item = TransitionEvent> + '_ {
        self.events.drain(..)
    }

    /// Peek at the next event without removing it.
    pub fn peek(&self) -> Option<&TransitionEvent> {
        self.events.front()
    }

    /// Clear all pending events.
    pub fn clear(&mut self) {
        self.events.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_accessors() {
        let event = TransitionEvent::Completed {
            id: RunId(7),
            destination: Destination::End,
        };
        assert_eq!(event.run_id(), RunId(7));
        assert!(event.is_completed());
        assert!(!event.is_started());
        assert!(!event.is_cancelled());

        assert!(TransitionEvent::Superseded { id: RunId(1) }.is_cancelled());
        assert!(TransitionEvent::Cancelled { id: RunId(1) }.is_cancelled());
        assert!(
            TransitionEvent::Started {
                id: RunId(1),
                destination: Destination::Other
            }
            .is_started()
        );
    }

    #[test]
    fn test_event_queue_operations() {
        let mut queue = EventQueue::new();
        assert!(queue.is_empty());
        assert_eq!(queue.len(), 0);
        assert!(queue.pop().is_none());

        queue.push(TransitionEvent::Started {
            id: RunId(1),
            destination: Destination::End,
        });
        queue.push(TransitionEvent::Completed {
            id: RunId(1),
            destination: Destination::End,
        });

        assert_eq!(queue.len(), 2);
        assert!(queue.peek().is_some_and(|e| e.is_started()));

        let first = queue.pop().unwrap();
        assert!(first.is_started());
        assert_eq!(queue.len(), 1);

        queue.clear();
        assert!(queue.is_empty());
    }

    #[test]
    fn test_event_queue_drain() {
        let mut queue = EventQueue::new();
        queue.push(TransitionEvent::Cancelled { id: RunId(3) });
        queue.push(TransitionEvent::Looped {
            id: RunId(4),
            iteration: 1,
        });

        let events: Vec<_> = queue.drain().collect();
        assert_eq!(events.len(), 2);
        assert_eq!(events[0].run_id(), RunId(3));
        assert_eq!(events[1].run_id(), RunId(4));
        assert!(queue.is_empty());
    }

    #[test]
    fn test_event_serialization() {
        let event = TransitionEvent::Looped {
            id: RunId(42),
            iteration: 3,
        };

        let json = serde_json::to_string(&event).unwrap();
        assert!(json.contains("looped"));
        assert!(json.contains("42"));

        let parsed: TransitionEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(event, parsed);
    }
}
