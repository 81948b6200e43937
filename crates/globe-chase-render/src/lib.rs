//! Camera seam for globe-chase.
//!
//! This crate stands between the chase-camera math and a rendering engine:
//! - [`CameraRig`], the look-at interface the per-frame update drives
//! - [`FrameHooks`], the before-render callback registry
//! - [`ChaseCamera`], a headless camera producing view/projection matrices
//! - [`RecordingRig`], a rig that records calls for tests and headless runs

#![allow(clippy::must_use_candidate)]

pub mod camera;
pub mod hooks;
pub mod rig;

pub use camera::{CameraUniforms, ChaseCamera};
pub use hooks::{BeforeRenderHook, FrameHooks};
pub use rig::{CameraRig, RecordingRig};
