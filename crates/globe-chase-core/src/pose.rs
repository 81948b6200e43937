//! Entity poses and the single-slot holder for the latest self pose.

use std::cell::RefCell;
use std::rc::Rc;

use glam::DVec3;
use serde::{Deserialize, Serialize};

/// Animation state carried by a pose.
///
/// Game logic owns the transitions; nothing in this crate changes it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum AnimationState {
    /// Walking (initial state).
    #[default]
    Walking,
    /// Running.
    Running,
    /// Lying down.
    Lying,
    /// Shooting.
    Shooting,
}

/// An entity's position, heading and animation state at a point in time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pose {
    /// Entity identifier.
    pub id: String,
    /// Position in Earth-fixed world coordinates.
    pub position: DVec3,
    /// Heading in degrees, clockwise from local north.
    pub heading: f64,
    /// Current animation state.
    pub animation_state: AnimationState,
}

impl Pose {
    /// Creates a pose in the [`AnimationState::Walking`] state.
    #[must_use]
    pub fn new(id: impl Into<String>, position: DVec3, heading: f64) -> Self {
        Self {
            id: id.into(),
            position,
            heading,
            animation_state: AnimationState::Walking,
        }
    }

    /// Sets the animation state.
    #[must_use]
    pub fn with_animation_state(mut self, state: AnimationState) -> Self {
        self.animation_state = state;
        self
    }
}

/// Holds the most recently published pose.
///
/// Clones share the same slot. Publishing replaces the whole pose, and
/// readers see either the last published value or nothing. The slot is
/// meant for one thread: the publisher and the render callback run on the
/// same event loop, so there is no lock.
#[derive(Debug, Clone, Default)]
pub struct PoseSlot {
    latest: Rc<RefCell<Option<Pose>>>,
}

impl PoseSlot {
    /// Creates an empty slot.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the held pose.
    pub fn publish(&self, pose: Pose) {
        log::trace!("publishing pose '{}' at {}", pose.id, pose.position);
        *self.latest.borrow_mut() = Some(pose);
    }

    /// Returns a copy of the latest pose, if any has been published.
    #[must_use]
    pub fn current(&self) -> Option<Pose> {
        self.latest.borrow().clone()
    }

    /// Calls `f` with the latest pose without cloning it.
    pub fn with_current<F, R>(&self, f: F) -> Option<R>
    where
        F: FnOnce(&Pose) -> R,
    {
        self.latest.borrow().as_ref().map(f)
    }

    /// Returns whether any pose has been published.
    #[must_use]
    pub fn is_published(&self) -> bool {
        self.latest.borrow().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_pose_is_walking() {
        let pose = Pose::new("me", DVec3::X, 10.0);
        assert_eq!(pose.animation_state, AnimationState::Walking);
        assert_eq!(pose.id, "me");
    }

    #[test]
    fn test_empty_slot() {
        let slot = PoseSlot::new();
        assert!(!slot.is_published());
        assert!(slot.current().is_none());
        assert!(slot.with_current(|p| p.heading).is_none());
    }

    #[test]
    fn test_last_write_wins() {
        let slot = PoseSlot::new();
        let reader = slot.clone();

        slot.publish(Pose::new("me", DVec3::X, 10.0));
        slot.publish(
            Pose::new("me", DVec3::Y, 20.0).with_animation_state(AnimationState::Running),
        );

        let pose = reader.current().unwrap();
        assert_eq!(pose.position, DVec3::Y);
        assert_eq!(pose.heading, 20.0);
        assert_eq!(pose.animation_state, AnimationState::Running);
        assert_eq!(reader.with_current(|p| p.heading), Some(20.0));
    }

    #[test]
    fn test_pose_json() {
        let pose = Pose::new("me", DVec3::new(1.0, 2.0, 3.0), 45.0)
            .with_animation_state(AnimationState::Lying);
        let json = serde_json::to_string(&pose).unwrap();
        let back: Pose = serde_json::from_str(&json).unwrap();
        assert_eq!(back, pose);
    }
}
