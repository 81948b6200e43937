//! The chase view: owns the self pose and keeps the camera behind it.

use glam::{DMat4, DVec3};
use globe_chase_core::{build_frame, ChaseOptions, Ellipsoid, Pose, PoseSlot};
use globe_chase_render::{CameraRig, FrameHooks};
use serde::{Deserialize, Serialize};

use crate::snapshot::GameSnapshot;
use crate::{ChaseError, Result};

/// Kind of change carried by an [`EntityNotification`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActionType {
    /// Add the entity, or update it if it exists.
    AddUpdate,
    /// Remove the entity.
    Delete,
}

/// How an entity's height is resolved against terrain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum HeightReference {
    /// Use the position as given.
    None,
    /// Snap to the terrain surface.
    #[default]
    ClampToGround,
    /// Treat height as relative to the terrain surface.
    RelativeToGround,
}

/// An entity-layer update describing the self pose.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntityNotification {
    pub action: ActionType,
    pub id: String,
    pub entity: Pose,
}

/// Runs one per-frame camera update.
///
/// Reads the latest pose from `slot`, builds its reference frame on
/// `ellipsoid`, and points `camera` at it from `offset`. Does nothing and
/// returns `false` when no pose has been published.
pub fn update_camera<C: CameraRig>(
    slot: &PoseSlot,
    ellipsoid: &Ellipsoid,
    offset: DVec3,
    camera: &mut C,
) -> bool {
    let Some(frame) = slot.with_current(|pose| build_frame(ellipsoid, pose.position, pose.heading))
    else {
        log::trace!("no pose published yet, camera left unchanged");
        return false;
    };
    camera.set_look_at_transform(frame, offset);
    true
}

/// A globe view with a camera locked behind and above the local player.
#[derive(Debug, Default)]
pub struct ChaseView {
    options: ChaseOptions,
    slot: PoseSlot,
    initialized: bool,
}

impl ChaseView {
    /// Creates an uninitialized view.
    #[must_use]
    pub fn new(options: ChaseOptions) -> Self {
        Self {
            options,
            slot: PoseSlot::new(),
            initialized: false,
        }
    }

    /// Initializes the view from the first snapshot of `snapshots`.
    ///
    /// Publishes the self pose, then installs the per-frame camera update in
    /// `hooks`. Later snapshots are not read.
    ///
    /// # Errors
    ///
    /// Returns an error if the view is already initialized, if the stream is
    /// empty, or if the snapshot position is not finite. No hook is
    /// installed on error.
    pub fn initialize<C, I>(&mut self, snapshots: I, hooks: &mut FrameHooks<C>) -> Result<()>
    where
        C: CameraRig + 'static,
        I: IntoIterator<Item = GameSnapshot>,
    {
        if self.initialized {
            return Err(ChaseError::AlreadyInitialized);
        }

        let snapshot = snapshots
            .into_iter()
            .next()
            .ok_or(ChaseError::MissingSnapshot)?;
        let position = snapshot.me.current_location.location.to_finite_dvec3()?;

        self.slot.publish(Pose::new(
            self.options.self_id.clone(),
            position,
            snapshot.heading(),
        ));
        self.initialized = true;

        let slot = self.slot.clone();
        let ellipsoid = self.options.ellipsoid;
        let offset = self.options.camera_offset;
        hooks.on_before_render(move |camera: &mut C| {
            update_camera(&slot, &ellipsoid, offset, camera);
        });

        log::info!(
            "chase view initialized at {position} heading {}",
            snapshot.heading()
        );
        Ok(())
    }

    /// Returns whether [`ChaseView::initialize`] has succeeded.
    #[must_use]
    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Replaces the self pose.
    ///
    /// # Errors
    ///
    /// Returns [`ChaseError::NotInitialized`] before initialization.
    pub fn publish(&self, pose: Pose) -> Result<()> {
        if !self.initialized {
            return Err(ChaseError::NotInitialized);
        }
        self.slot.publish(pose);
        Ok(())
    }

    /// Returns the latest self pose.
    #[must_use]
    pub fn current_pose(&self) -> Option<Pose> {
        self.slot.current()
    }

    /// Returns the reference frame the camera is attached to this frame.
    #[must_use]
    pub fn current_frame(&self) -> Option<DMat4> {
        self.slot.with_current(|pose| {
            build_frame(&self.options.ellipsoid, pose.position, pose.heading)
        })
    }

    /// Returns the self pose as an entity-layer notification.
    #[must_use]
    pub fn notification(&self) -> Option<EntityNotification> {
        self.slot.current().map(|pose| EntityNotification {
            action: ActionType::AddUpdate,
            id: pose.id.clone(),
            entity: pose,
        })
    }

    /// Returns the shared pose slot.
    #[must_use]
    pub fn pose_slot(&self) -> &PoseSlot {
        &self.slot
    }

    /// Returns the view options.
    #[must_use]
    pub fn options(&self) -> &ChaseOptions {
        &self.options
    }

    /// Placement of the 3D tileset: untransformed at the world origin.
    #[must_use]
    pub fn tiles_transform() -> DMat4 {
        DMat4::from_translation(DVec3::ZERO)
    }

    /// Height reference for the self entity.
    #[must_use]
    pub fn height_reference() -> HeightReference {
        HeightReference::ClampToGround
    }
}
