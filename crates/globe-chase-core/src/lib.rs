//! Core math for globe-chase.
//!
//! This crate provides the pieces a chase camera needs to follow an entity
//! over a curved globe:
//! - [`Ellipsoid`] and the [`TangentFrame`] trait for local east-north-up frames
//! - [`build_orientation`] for heading-only orientations on the tangent plane
//! - [`build_frame`] for the rigid reference frame the camera is attached to
//! - [`Pose`] and the single-slot [`PoseSlot`] holder
//! - Configuration options and errors

// Documentation lints - internal functions don't need exhaustive panic/error docs
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::missing_errors_doc)]
// Builder patterns return Self which doesn't need must_use
#![allow(clippy::must_use_candidate)]

pub mod ellipsoid;
pub mod error;
pub mod frame;
pub mod options;
pub mod orientation;
pub mod pose;

pub use ellipsoid::{enu_to_fixed_frame, Ellipsoid, TangentFrame, DEGENERATE_ENU};
pub use error::{ChaseError, Result};
pub use frame::{build_frame, build_frame_wgs84, RigidFrame};
pub use options::{ChaseOptions, DEFAULT_CAMERA_OFFSET};
pub use orientation::{
    build_orientation, build_orientation_wgs84, orientation_from_hpr, HeadingPitchRoll,
};
pub use pose::{AnimationState, Pose, PoseSlot};

// Re-export glam types for convenience
pub use glam::{DMat3, DMat4, DQuat, DVec3};
