//! globe-chase: a chase camera that follows an avatar across a 3D globe.
//!
//! Every frame, the camera is attached to a reference frame built from the
//! avatar's position and heading, and placed at a fixed offset behind and
//! above it.
//!
//! # Quick Start
//!
//! ```no_run
//! use globe_chase::*;
//!
//! fn main() -> Result<()> {
//!     init_logging();
//!
//!     let mut hooks = FrameHooks::new(ChaseCamera::default());
//!     let mut view = ChaseView::new(ChaseOptions::default());
//!
//!     // The first snapshot from the game server places the avatar.
//!     let snapshot = GameSnapshot::new(DVec3::new(6_378_137.0, 0.0, 0.0), 90.0);
//!     view.initialize([snapshot], &mut hooks)?;
//!
//!     // The engine calls this before drawing each frame.
//!     hooks.prepare_frame();
//!     let _eye = hooks.camera().position();
//!
//!     Ok(())
//! }
//! ```
//!
//! # Architecture
//!
//! - [`build_frame`] turns a position and heading into the camera's
//!   reference frame, using the local east-north-up frame of the [`Ellipsoid`]
//! - [`PoseSlot`] holds the latest self [`Pose`]
//! - [`ChaseView`] publishes the pose and registers the per-frame
//!   [`update_camera`] step in [`FrameHooks`]

#![allow(clippy::must_use_candidate)]

mod init;
pub mod snapshot;
pub mod view;

pub use init::init_logging;

// Re-export core types
pub use globe_chase_core::{
    build_frame, build_frame_wgs84, build_orientation, build_orientation_wgs84,
    enu_to_fixed_frame, AnimationState, ChaseError, ChaseOptions, Ellipsoid, HeadingPitchRoll,
    Pose, PoseSlot, Result, RigidFrame, TangentFrame, DEFAULT_CAMERA_OFFSET, DEGENERATE_ENU,
};
pub use globe_chase_core::{DMat3, DMat4, DQuat, DVec3};

// Re-export render types
pub use globe_chase_render::{CameraRig, CameraUniforms, ChaseCamera, FrameHooks, RecordingRig};

pub use snapshot::{Cartesian, GameSnapshot, LocationSnapshot, PlayerSnapshot};
pub use view::{update_camera, ActionType, ChaseView, EntityNotification, HeightReference};
