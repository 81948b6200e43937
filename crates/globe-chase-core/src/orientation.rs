//! Heading/pitch/roll orientations anchored to the local tangent frame.

use glam::{DMat3, DQuat, DVec3};
use serde::{Deserialize, Serialize};

use crate::ellipsoid::{Ellipsoid, TangentFrame};

/// A rotation relative to a local east-north-up frame, in radians.
///
/// Heading turns clockwise about local up, starting from local north.
/// Pitch raises the nose above the horizon and roll banks about the forward
/// axis.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct HeadingPitchRoll {
    /// Heading in radians.
    pub heading: f64,
    /// Pitch in radians.
    pub pitch: f64,
    /// Roll in radians.
    pub roll: f64,
}

impl HeadingPitchRoll {
    /// Creates a new heading/pitch/roll triple from radians.
    #[must_use]
    pub fn new(heading: f64, pitch: f64, roll: f64) -> Self {
        Self {
            heading,
            pitch,
            roll,
        }
    }

    /// Creates a new heading/pitch/roll triple from degrees.
    #[must_use]
    pub fn from_degrees(heading: f64, pitch: f64, roll: f64) -> Self {
        Self::new(heading.to_radians(), pitch.to_radians(), roll.to_radians())
    }

    /// Creates a level orientation with the given heading in degrees.
    #[must_use]
    pub fn level(heading_degrees: f64) -> Self {
        Self::from_degrees(heading_degrees, 0.0, 0.0)
    }

    /// Returns the rotation as a quaternion in local-frame coordinates.
    #[must_use]
    pub fn to_quat(&self) -> DQuat {
        let roll = DQuat::from_rotation_x(self.roll);
        let pitch = DQuat::from_rotation_y(-self.pitch);
        let heading = DQuat::from_rotation_z(-self.heading);
        heading * (pitch * roll)
    }
}

/// Builds the world orientation of an upright entity at `position` facing
/// `heading_degrees`.
///
/// Pitch and roll are held at zero. Returns `None` when `frame` cannot
/// build a tangent frame at `position`.
#[must_use]
pub fn build_orientation(
    frame: &impl TangentFrame,
    position: DVec3,
    heading_degrees: f64,
) -> Option<DQuat> {
    orientation_from_hpr(frame, position, HeadingPitchRoll::level(heading_degrees))
}

/// Builds the world orientation for an arbitrary heading/pitch/roll at
/// `position`.
#[must_use]
pub fn orientation_from_hpr(
    frame: &impl TangentFrame,
    position: DVec3,
    hpr: HeadingPitchRoll,
) -> Option<DQuat> {
    let enu = frame.east_north_up(position)?;
    let rotation = enu * DMat3::from_quat(hpr.to_quat());
    Some(DQuat::from_mat3(&rotation).normalize())
}

/// [`build_orientation`] on the WGS84 ellipsoid.
#[must_use]
pub fn build_orientation_wgs84(position: DVec3, heading_degrees: f64) -> Option<DQuat> {
    build_orientation(&Ellipsoid::WGS84, position, heading_degrees)
}
