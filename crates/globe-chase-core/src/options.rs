//! Configuration options for the chase view.

use std::path::Path;

use glam::DVec3;
use serde::{Deserialize, Serialize};

use crate::ellipsoid::Ellipsoid;
use crate::error::Result;

/// Default camera offset in the entity's local frame: right, ahead, above.
pub const DEFAULT_CAMERA_OFFSET: DVec3 = DVec3::new(3.0, 15.0, 5.0);

/// Options for the chase camera view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChaseOptions {
    /// Camera position relative to the entity frame (x right, y forward,
    /// z up).
    pub camera_offset: DVec3,

    /// Ellipsoid the local tangent frames are built on.
    pub ellipsoid: Ellipsoid,

    /// Identifier given to the self pose.
    pub self_id: String,
}

impl Default for ChaseOptions {
    fn default() -> Self {
        Self {
            camera_offset: DEFAULT_CAMERA_OFFSET,
            ellipsoid: Ellipsoid::WGS84,
            self_id: "me".to_string(),
        }
    }
}

impl ChaseOptions {
    /// Creates options with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the camera offset.
    #[must_use]
    pub fn with_camera_offset(mut self, offset: DVec3) -> Self {
        self.camera_offset = offset;
        self
    }

    /// Sets the ellipsoid.
    #[must_use]
    pub fn with_ellipsoid(mut self, ellipsoid: Ellipsoid) -> Self {
        self.ellipsoid = ellipsoid;
        self
    }

    /// Sets the self pose identifier.
    #[must_use]
    pub fn with_self_id(mut self, id: impl Into<String>) -> Self {
        self.self_id = id.into();
        self
    }

    /// Parses options from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Loads options from a JSON file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json(&text)
    }
}
