//! Reference ellipsoid and local east-north-up tangent frames.
//!
//! World positions are Earth-fixed Cartesian coordinates. A tangent frame at
//! a position is a rotation whose columns are the local east, north and up
//! axes expressed in world coordinates.

use glam::{DMat3, DMat4, DVec3};
use serde::{Deserialize, Serialize};

/// Tolerance used to detect the globe centre and the polar axis.
pub const EPSILON14: f64 = 1e-14;

/// Builds local tangent frames at world positions.
///
/// This is the seam for the geometry library: the chase camera only needs
/// an east/north/up basis at a point and a fallback basis for points where
/// no such basis exists.
pub trait TangentFrame {
    /// Returns the local east/north/up axes at `position` as matrix columns,
    /// or `None` when the frame is undefined there.
    fn east_north_up(&self, position: DVec3) -> Option<DMat3>;

    /// Returns the axes used in place of [`TangentFrame::east_north_up`]
    /// when that reports failure.
    fn degenerate_frame(&self, _position: DVec3) -> DMat3 {
        DEGENERATE_ENU
    }
}

/// Canonical axes for a position with no tangent plane: east = +Y,
/// north = -X, up = +Z.
pub const DEGENERATE_ENU: DMat3 = DMat3::from_cols(DVec3::Y, DVec3::NEG_X, DVec3::Z);

/// A triaxial ellipsoid centred at the world origin.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ellipsoid {
    /// Semi-axis lengths along X, Y and Z.
    pub radii: DVec3,
}

impl Default for Ellipsoid {
    fn default() -> Self {
        Self::WGS84
    }
}

impl Ellipsoid {
    /// The WGS84 reference ellipsoid, in meters.
    pub const WGS84: Self = Self {
        radii: DVec3::new(6_378_137.0, 6_378_137.0, 6_356_752.314_245_179),
    };

    /// A sphere of radius one.
    pub const UNIT_SPHERE: Self = Self { radii: DVec3::ONE };

    /// Creates an ellipsoid from its semi-axis lengths.
    #[must_use]
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self {
            radii: DVec3::new(x, y, z),
        }
    }

    /// Returns `1 / radius^2` per axis.
    #[must_use]
    pub fn one_over_radii_squared(&self) -> DVec3 {
        (self.radii * self.radii).recip()
    }

    /// Returns the outward surface normal of the ellipsoid surface passing
    /// through `position`.
    ///
    /// Returns `None` at the centre or for non-finite input.
    #[must_use]
    pub fn geodetic_surface_normal(&self, position: DVec3) -> Option<DVec3> {
        if !position.is_finite() {
            return None;
        }
        let scaled = position * self.one_over_radii_squared();
        let length = scaled.length();
        if length == 0.0 || !length.is_finite() {
            return None;
        }
        Some(scaled / length)
    }

    /// Returns the east/north/up frame at `position` as a world transform,
    /// falling back to [`TangentFrame::degenerate_frame`] where none exists.
    #[must_use]
    pub fn enu_to_fixed_frame(&self, position: DVec3) -> DMat4 {
        enu_to_fixed_frame(self, position)
    }
}

impl TangentFrame for Ellipsoid {
    fn east_north_up(&self, position: DVec3) -> Option<DMat3> {
        if !position.is_finite() || position.abs_diff_eq(DVec3::ZERO, EPSILON14) {
            return None;
        }

        // On the polar axis east is undefined; pick a fixed one.
        if position.x.abs() < EPSILON14 && position.y.abs() < EPSILON14 {
            let sign = position.z.signum();
            return Some(DMat3::from_cols(
                DVec3::Y,
                DVec3::NEG_X * sign,
                DVec3::Z * sign,
            ));
        }

        let up = self.geodetic_surface_normal(position)?;
        let east = DVec3::new(-position.y, position.x, 0.0).normalize();
        let north = up.cross(east);
        Some(DMat3::from_cols(east, north, up))
    }
}

/// Places the local frame at `position` in a rigid world transform.
///
/// The rotation block holds the east/north/up axes (or the degenerate frame
/// when `frame` has none at `position`) and the translation column holds
/// `position` unchanged.
#[must_use]
pub fn enu_to_fixed_frame(frame: &impl TangentFrame, position: DVec3) -> DMat4 {
    let axes = frame.east_north_up(position).unwrap_or_else(|| {
        log::debug!("no tangent frame at {position}, using degenerate axes");
        frame.degenerate_frame(position)
    });
    DMat4::from_cols(
        axes.x_axis.extend(0.0),
        axes.y_axis.extend(0.0),
        axes.z_axis.extend(0.0),
        position.extend(1.0),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_vec_near(a: DVec3, b: DVec3) {
        assert!(a.abs_diff_eq(b, 1e-12), "{a} != {b}");
    }

    #[test]
    fn test_enu_on_equator_prime_meridian() {
        let axes = Ellipsoid::WGS84
            .east_north_up(DVec3::new(6_378_137.0, 0.0, 0.0))
            .unwrap();
        assert_vec_near(axes.x_axis, DVec3::Y);
        assert_vec_near(axes.y_axis, DVec3::Z);
        assert_vec_near(axes.z_axis, DVec3::X);
    }

    #[test]
    fn test_enu_on_equator_90_east() {
        let axes = Ellipsoid::WGS84
            .east_north_up(DVec3::new(0.0, 6_378_137.0, 0.0))
            .unwrap();
        assert_vec_near(axes.x_axis, DVec3::NEG_X);
        assert_vec_near(axes.y_axis, DVec3::Z);
        assert_vec_near(axes.z_axis, DVec3::Y);
    }

    #[test]
    fn test_enu_is_orthonormal_off_axis() {
        let position = DVec3::new(4_198_944.0, 174_747.0, 4_781_042.0);
        let axes = Ellipsoid::WGS84.east_north_up(position).unwrap();
        assert!((axes.determinant() - 1.0).abs() < 1e-12);
        assert!(axes.x_axis.dot(axes.y_axis).abs() < 1e-12);
        assert!(axes.y_axis.dot(axes.z_axis).abs() < 1e-12);
        // Up leans away from the centre.
        assert!(axes.z_axis.dot(position.normalize()) > 0.99);
    }

    #[test]
    fn test_enu_at_poles() {
        let north = Ellipsoid::WGS84
            .east_north_up(DVec3::new(0.0, 0.0, 6_356_752.0))
            .unwrap();
        assert_eq!(north, DMat3::from_cols(DVec3::Y, DVec3::NEG_X, DVec3::Z));

        let south = Ellipsoid::WGS84
            .east_north_up(DVec3::new(0.0, 0.0, -6_356_752.0))
            .unwrap();
        assert_eq!(south, DMat3::from_cols(DVec3::Y, DVec3::X, DVec3::NEG_Z));
    }

    #[test]
    fn test_enu_undefined_at_centre() {
        assert!(Ellipsoid::WGS84.east_north_up(DVec3::ZERO).is_none());
        assert!(Ellipsoid::WGS84
            .east_north_up(DVec3::new(f64::NAN, 0.0, 1.0))
            .is_none());
    }

    #[test]
    fn test_fixed_frame_falls_back_at_centre() {
        let m = Ellipsoid::WGS84.enu_to_fixed_frame(DVec3::ZERO);
        assert_eq!(m.x_axis.truncate(), DVec3::Y);
        assert_eq!(m.y_axis.truncate(), DVec3::NEG_X);
        assert_eq!(m.z_axis.truncate(), DVec3::Z);
        assert_eq!(m.w_axis.truncate(), DVec3::ZERO);
    }

    #[test]
    fn test_fixed_frame_translation_is_exact() {
        let position = DVec3::new(1_234_567.891, -2_345_678.912, 5_432_109.876);
        let m = Ellipsoid::WGS84.enu_to_fixed_frame(position);
        assert_eq!(m.w_axis.truncate(), position);
        assert_eq!(m.row(3), glam::DVec4::W);
    }

    #[test]
    fn test_surface_normal_unit_sphere() {
        let n = Ellipsoid::UNIT_SPHERE
            .geodetic_surface_normal(DVec3::new(3.0, 4.0, 0.0))
            .unwrap();
        assert_vec_near(n, DVec3::new(0.6, 0.8, 0.0));
        assert!(Ellipsoid::UNIT_SPHERE
            .geodetic_surface_normal(DVec3::ZERO)
            .is_none());
    }
}
