//! Before-render callbacks.

use crate::rig::CameraRig;

/// A callback run once per frame, before rendering, with the camera.
pub type BeforeRenderHook<C> = Box<dyn FnMut(&mut C)>;

/// Owns the camera and the callbacks run before each frame is rendered.
///
/// Dropping this drops every registered callback.
pub struct FrameHooks<C: CameraRig> {
    camera: C,
    hooks: Vec<BeforeRenderHook<C>>,
    frame_count: u64,
}

impl<C: CameraRig> FrameHooks<C> {
    /// Creates a hook list around `camera`.
    pub fn new(camera: C) -> Self {
        Self {
            camera,
            hooks: Vec::new(),
            frame_count: 0,
        }
    }

    /// Registers a callback to run before every frame.
    pub fn on_before_render(&mut self, hook: impl FnMut(&mut C) + 'static) {
        self.hooks.push(Box::new(hook));
        log::debug!("before-render hook registered ({} total)", self.hooks.len());
    }

    /// Runs every callback in registration order.
    ///
    /// The engine calls this once per frame, right before drawing.
    pub fn prepare_frame(&mut self) {
        self.frame_count += 1;
        for hook in &mut self.hooks {
            hook(&mut self.camera);
        }
    }

    /// Number of frames prepared so far.
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    /// Number of registered callbacks.
    pub fn hook_count(&self) -> usize {
        self.hooks.len()
    }

    /// Returns the camera.
    pub fn camera(&self) -> &C {
        &self.camera
    }

    /// Returns the camera mutably.
    pub fn camera_mut(&mut self) -> &mut C {
        &mut self.camera
    }

    /// Drops all callbacks and returns the camera.
    pub fn into_camera(self) -> C {
        self.camera
    }
}

impl<C: CameraRig + std::fmt::Debug> std::fmt::Debug for FrameHooks<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FrameHooks")
            .field("camera", &self.camera)
            .field("hooks", &self.hooks.len())
            .field("frame_count", &self.frame_count)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rig::RecordingRig;
    use glam::{DMat4, DVec3};
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn test_no_hooks_leaves_camera_alone() {
        let mut hooks = FrameHooks::new(RecordingRig::new());
        hooks.prepare_frame();
        hooks.prepare_frame();
        assert_eq!(hooks.frame_count(), 2);
        assert_eq!(hooks.camera().call_count(), 0);
    }

    #[test]
    fn test_hooks_run_every_frame_in_order() {
        let order = Rc::new(RefCell::new(Vec::new()));
        let mut hooks = FrameHooks::new(RecordingRig::new());

        let first = Rc::clone(&order);
        hooks.on_before_render(move |rig: &mut RecordingRig| {
            first.borrow_mut().push(1);
            rig.set_look_at_transform(DMat4::IDENTITY, DVec3::X);
        });
        let second = Rc::clone(&order);
        hooks.on_before_render(move |_: &mut RecordingRig| second.borrow_mut().push(2));

        hooks.prepare_frame();
        hooks.prepare_frame();

        assert_eq!(hooks.hook_count(), 2);
        assert_eq!(*order.borrow(), vec![1, 2, 1, 2]);
        assert_eq!(hooks.into_camera().call_count(), 2);
    }
}
