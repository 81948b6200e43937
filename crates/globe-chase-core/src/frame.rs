//! Reference frames that follow an entity across the globe.
//!
//! [`build_frame`] produces the rigid transform a chase camera is attached
//! to: its origin sits on the entity and its axes are the entity's local
//! right, forward and up directions.

use glam::{DMat3, DMat4, DQuat, DVec3};

use crate::ellipsoid::{enu_to_fixed_frame, Ellipsoid, TangentFrame};
use crate::orientation::build_orientation;

/// Builds the reference frame for an entity at `position` facing
/// `heading_degrees`.
///
/// The translation column is always `position`. When no orientation can be
/// built there, the rotation block is the frame's unrotated fallback and the
/// heading is ignored.
#[must_use]
pub fn build_frame(frame: &impl TangentFrame, position: DVec3, heading_degrees: f64) -> DMat4 {
    match build_orientation(frame, position, heading_degrees) {
        Some(orientation) => DMat4::from_rotation_translation(orientation, position),
        None => enu_to_fixed_frame(frame, position),
    }
}

/// [`build_frame`] on the WGS84 ellipsoid.
#[must_use]
pub fn build_frame_wgs84(position: DVec3, heading_degrees: f64) -> DMat4 {
    build_frame(&Ellipsoid::WGS84, position, heading_degrees)
}

/// A rigid transform split into its rotation and translation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RigidFrame {
    /// Local axes in world coordinates, as matrix columns.
    pub rotation: DMat3,
    /// Frame origin in world coordinates.
    pub translation: DVec3,
}

impl RigidFrame {
    /// Splits a rigid 4x4 transform. Any scale or projective part is ignored.
    #[must_use]
    pub fn from_matrix(matrix: DMat4) -> Self {
        Self {
            rotation: DMat3::from_mat4(matrix),
            translation: matrix.w_axis.truncate(),
        }
    }

    /// Recombines into a 4x4 transform.
    #[must_use]
    pub fn to_matrix(&self) -> DMat4 {
        DMat4::from_cols(
            self.rotation.x_axis.extend(0.0),
            self.rotation.y_axis.extend(0.0),
            self.rotation.z_axis.extend(0.0),
            self.translation.extend(1.0),
        )
    }

    /// Returns the rotation as a quaternion.
    #[must_use]
    pub fn orientation(&self) -> DQuat {
        DQuat::from_mat3(&self.rotation)
    }

    /// Local +X (right of the entity) in world coordinates.
    #[must_use]
    pub fn right(&self) -> DVec3 {
        self.rotation.x_axis
    }

    /// Local +Y (ahead of the entity) in world coordinates.
    #[must_use]
    pub fn forward(&self) -> DVec3 {
        self.rotation.y_axis
    }

    /// Local +Z (above the entity) in world coordinates.
    #[must_use]
    pub fn up(&self) -> DVec3 {
        self.rotation.z_axis
    }

    /// Maps a point given in frame coordinates to world coordinates.
    #[must_use]
    pub fn to_world(&self, local: DVec3) -> DVec3 {
        self.translation + self.rotation * local
    }
}

impl From<DMat4> for RigidFrame {
    fn from(matrix: DMat4) -> Self {
        Self::from_matrix(matrix)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ellipsoid::DEGENERATE_ENU;
    use glam::DVec4;
    use proptest::prelude::*;

    /// A tangent-frame source that never has a frame.
    struct Singular;

    impl TangentFrame for Singular {
        fn east_north_up(&self, _position: DVec3) -> Option<DMat3> {
            None
        }
    }

    #[test]
    fn test_frame_heading_90_at_equator() {
        let position = DVec3::new(6_378_137.0, 0.0, 0.0);
        let m = build_frame_wgs84(position, 90.0);
        assert_eq!(m.w_axis.truncate(), position);

        let frame = RigidFrame::from_matrix(m);
        let enu = Ellipsoid::WGS84.east_north_up(position).unwrap();
        // Local north, rotated by the frame, points along local east.
        let rotated_north = frame.rotation * DVec3::Y;
        assert!(rotated_north.abs_diff_eq(enu.x_axis, 1e-12), "{rotated_north}");
    }

    #[test]
    fn test_frame_is_rigid() {
        let m = build_frame_wgs84(DVec3::new(4_198_944.0, 174_747.0, 4_781_042.0), 33.0);
        assert_eq!(m.row(3), DVec4::W);
        let (scale, _, _) = m.to_scale_rotation_translation();
        assert!(scale.abs_diff_eq(DVec3::ONE, 1e-12));
    }

    #[test]
    fn test_fallback_ignores_heading() {
        let position = DVec3::new(10.0, -20.0, 30.0);
        for heading in [0.0, 45.0, 90.0, 359.0, 720.0, -30.0] {
            let m = build_frame(&Singular, position, heading);
            assert_eq!(m.w_axis.truncate(), position);
            assert_eq!(RigidFrame::from_matrix(m).rotation, DEGENERATE_ENU);
        }
    }

    #[test]
    fn test_frame_at_centre_uses_fallback() {
        let m = build_frame_wgs84(DVec3::ZERO, 123.0);
        assert_eq!(m, Ellipsoid::WGS84.enu_to_fixed_frame(DVec3::ZERO));
    }

    #[test]
    fn test_rigid_frame_axes_and_to_world() {
        let position = DVec3::new(6_378_137.0, 0.0, 0.0);
        let frame = RigidFrame::from(build_frame_wgs84(position, 0.0));
        assert!(frame.right().abs_diff_eq(DVec3::Y, 1e-12));
        assert!(frame.forward().abs_diff_eq(DVec3::Z, 1e-12));
        assert!(frame.up().abs_diff_eq(DVec3::X, 1e-12));

        let eye = frame.to_world(DVec3::new(0.0, -15.0, 5.0));
        assert!(eye.abs_diff_eq(DVec3::new(6_378_142.0, 0.0, -15.0), 1e-6));
        assert_eq!(frame.to_matrix().w_axis.truncate(), position);
    }

    proptest! {
        #[test]
        fn prop_translation_is_exact(
            x in -1.0e7_f64..1.0e7,
            y in -1.0e7_f64..1.0e7,
            z in -1.0e7_f64..1.0e7,
            heading in -720.0_f64..720.0,
        ) {
            let position = DVec3::new(x, y, z);
            let m = build_frame_wgs84(position, heading);
            prop_assert_eq!(m.w_axis.truncate(), position);
            prop_assert_eq!(m.row(3), DVec4::W);
        }

        #[test]
        fn prop_frame_is_deterministic(
            x in -1.0e7_f64..1.0e7,
            y in -1.0e7_f64..1.0e7,
            z in -1.0e7_f64..1.0e7,
            heading in 0.0_f64..360.0,
        ) {
            let position = DVec3::new(x, y, z);
            prop_assert_eq!(
                build_frame_wgs84(position, heading),
                build_frame_wgs84(position, heading)
            );
        }
    }
}
