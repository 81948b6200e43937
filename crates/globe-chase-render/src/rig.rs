//! The camera interface the per-frame update drives.

use glam::{DMat4, DVec3};

/// A camera that can be pinned to a moving reference frame.
pub trait CameraRig {
    /// Attaches the camera to `transform` and places it at `offset`, given
    /// in that frame's coordinates, looking back at the frame origin.
    fn set_look_at_transform(&mut self, transform: DMat4, offset: DVec3);
}

/// A rig that only records the calls it receives.
///
/// Useful where no real camera exists, such as tests and headless runs.
#[derive(Debug, Clone, Default)]
pub struct RecordingRig {
    calls: Vec<(DMat4, DVec3)>,
}

impl RecordingRig {
    /// Creates an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Every `(transform, offset)` pair received, oldest first.
    #[must_use]
    pub fn calls(&self) -> &[(DMat4, DVec3)] {
        &self.calls
    }

    /// Number of calls received.
    #[must_use]
    pub fn call_count(&self) -> usize {
        self.calls.len()
    }

    /// The most recent call.
    #[must_use]
    pub fn last(&self) -> Option<&(DMat4, DVec3)> {
        self.calls.last()
    }
}

impl CameraRig for RecordingRig {
    fn set_look_at_transform(&mut self, transform: DMat4, offset: DVec3) {
        self.calls.push((transform, offset));
    }
}
