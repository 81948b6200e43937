//! Headless chase camera.

use glam::{DMat4, DVec3, Mat4};
use globe_chase_core::RigidFrame;

use crate::rig::CameraRig;

/// Camera uniforms for GPU.
///
/// Matrices are relative to the eye so that Earth-scale coordinates survive
/// the conversion to `f32`.
#[repr(C)]
#[derive(Debug, Clone, Copy, bytemuck::Pod, bytemuck::Zeroable)]
pub struct CameraUniforms {
    pub view: [[f32; 4]; 4],
    pub proj: [[f32; 4]; 4],
    pub view_proj: [[f32; 4]; 4],
    pub camera_pos: [f32; 3],
    pub _padding: f32,
}

impl Default for CameraUniforms {
    fn default() -> Self {
        Self {
            view: Mat4::IDENTITY.to_cols_array_2d(),
            proj: Mat4::IDENTITY.to_cols_array_2d(),
            view_proj: Mat4::IDENTITY.to_cols_array_2d(),
            camera_pos: [0.0, 0.0, 0.0],
            _padding: 0.0,
        }
    }
}

/// A perspective camera that follows a reference frame.
///
/// The camera sits at a fixed offset inside the reference frame and looks at
/// the frame origin, with the frame's local +Z as its up direction.
#[derive(Debug, Clone)]
pub struct ChaseCamera {
    /// Reference frame the camera is attached to.
    pub reference: DMat4,
    /// Eye position in reference-frame coordinates.
    pub offset: DVec3,
    /// Field of view in radians.
    pub fov: f64,
    /// Aspect ratio (width / height).
    pub aspect_ratio: f64,
    /// Near clipping plane.
    pub near: f64,
    /// Far clipping plane.
    pub far: f64,
}

impl ChaseCamera {
    /// Creates a new camera attached to the world origin.
    #[must_use]
    pub fn new(aspect_ratio: f64) -> Self {
        Self {
            reference: DMat4::IDENTITY,
            offset: DVec3::new(0.0, -10.0, 5.0),
            fov: std::f64::consts::FRAC_PI_3, // 60 degrees
            aspect_ratio,
            near: 0.1,
            far: 1.0e8,
        }
    }

    /// Returns the reference frame split into rotation and translation.
    #[must_use]
    pub fn frame(&self) -> RigidFrame {
        RigidFrame::from_matrix(self.reference)
    }

    /// Returns the eye position in world space.
    #[must_use]
    pub fn position(&self) -> DVec3 {
        self.reference.transform_point3(self.offset)
    }

    /// Returns the point the camera is looking at (the frame origin).
    #[must_use]
    pub fn target(&self) -> DVec3 {
        self.reference.w_axis.truncate()
    }

    /// Returns the world-space up vector.
    ///
    /// This is the frame's local up, unless the camera looks straight along
    /// it, in which case the frame's local forward is used.
    #[must_use]
    pub fn up(&self) -> DVec3 {
        let frame = self.frame();
        let forward = self.forward();
        if forward.cross(frame.up()).length_squared() < 1e-12 {
            frame.forward().normalize()
        } else {
            frame.up().normalize()
        }
    }

    /// Returns the camera's forward direction in world space.
    #[must_use]
    pub fn forward(&self) -> DVec3 {
        (self.target() - self.position()).normalize_or_zero()
    }

    /// Returns the distance from the eye to the target.
    #[must_use]
    pub fn distance(&self) -> f64 {
        self.position().distance(self.target())
    }

    /// Returns the view matrix.
    #[must_use]
    pub fn view_matrix(&self) -> DMat4 {
        DMat4::look_at_rh(self.position(), self.target(), self.up())
    }

    /// Returns the view matrix with the eye moved to the origin.
    #[must_use]
    pub fn view_matrix_relative_to_eye(&self) -> DMat4 {
        DMat4::look_at_rh(DVec3::ZERO, self.target() - self.position(), self.up())
    }

    /// Returns the projection matrix.
    #[must_use]
    pub fn projection_matrix(&self) -> DMat4 {
        DMat4::perspective_rh(self.fov, self.aspect_ratio, self.near, self.far)
    }

    /// Returns the combined view-projection matrix.
    #[must_use]
    pub fn view_projection_matrix(&self) -> DMat4 {
        self.projection_matrix() * self.view_matrix()
    }

    /// Returns the uniforms for the current frame.
    #[must_use]
    pub fn uniforms(&self) -> CameraUniforms {
        let view = self.view_matrix_relative_to_eye().as_mat4();
        let proj = self.projection_matrix().as_mat4();
        CameraUniforms {
            view: view.to_cols_array_2d(),
            proj: proj.to_cols_array_2d(),
            view_proj: (proj * view).to_cols_array_2d(),
            camera_pos: self.position().as_vec3().to_array(),
            _padding: 0.0,
        }
    }

    /// Sets the aspect ratio.
    pub fn set_aspect_ratio(&mut self, aspect_ratio: f64) {
        self.aspect_ratio = aspect_ratio;
    }

    /// Sets the field of view in radians.
    pub fn set_fov(&mut self, fov: f64) {
        self.fov = fov.clamp(0.1, std::f64::consts::PI - 0.1);
    }

    /// Sets the near clipping plane.
    pub fn set_near(&mut self, near: f64) {
        self.near = near.max(0.001);
    }

    /// Sets the far clipping plane.
    pub fn set_far(&mut self, far: f64) {
        self.far = far.max(self.near + 0.1);
    }

    /// Returns FOV in degrees.
    #[must_use]
    pub fn fov_degrees(&self) -> f64 {
        self.fov.to_degrees()
    }

    /// Sets FOV from degrees.
    pub fn set_fov_degrees(&mut self, degrees: f64) {
        self.set_fov(degrees.to_radians());
    }
}

impl Default for ChaseCamera {
    fn default() -> Self {
        Self::new(16.0 / 9.0)
    }
}

impl CameraRig for ChaseCamera {
    fn set_look_at_transform(&mut self, transform: DMat4, offset: DVec3) {
        self.reference = transform;
        self.offset = offset;
    }
}
