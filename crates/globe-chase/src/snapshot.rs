//! Game-state snapshots delivered by the game server.

use glam::DVec3;
use serde::{Deserialize, Serialize};

use crate::{ChaseError, Result};

/// A Cartesian point as sent over the wire.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Cartesian {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Cartesian {
    /// Converts to a world position.
    #[must_use]
    pub fn to_dvec3(self) -> DVec3 {
        DVec3::new(self.x, self.y, self.z)
    }

    /// Converts to a world position, rejecting NaN or infinite coordinates.
    pub fn to_finite_dvec3(self) -> Result<DVec3> {
        let position = self.to_dvec3();
        if position.is_finite() {
            Ok(position)
        } else {
            Err(ChaseError::NonFinitePosition {
                x: self.x,
                y: self.y,
                z: self.z,
            })
        }
    }
}

impl From<DVec3> for Cartesian {
    fn from(v: DVec3) -> Self {
        Self {
            x: v.x,
            y: v.y,
            z: v.z,
        }
    }
}

/// Where the player is and which way they face.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LocationSnapshot {
    /// Earth-fixed position.
    pub location: Cartesian,
    /// Heading in degrees, clockwise from local north.
    pub heading: f64,
}

/// The local player's part of a snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerSnapshot {
    pub current_location: LocationSnapshot,
}

/// One game-state snapshot. Only the fields the chase view reads are kept.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub me: PlayerSnapshot,
}

impl GameSnapshot {
    /// Builds a snapshot for a player at `position` facing `heading`.
    #[must_use]
    pub fn new(position: DVec3, heading: f64) -> Self {
        Self {
            me: PlayerSnapshot {
                current_location: LocationSnapshot {
                    location: position.into(),
                    heading,
                },
            },
        }
    }

    /// Parses a snapshot from JSON. Unknown fields are ignored.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// The player's position.
    #[must_use]
    pub fn position(&self) -> DVec3 {
        self.me.current_location.location.to_dvec3()
    }

    /// The player's heading in degrees.
    #[must_use]
    pub fn heading(&self) -> f64 {
        self.me.current_location.heading
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_server_payload() {
        let json = r#"{
            "gameId": "g1",
            "me": {
                "id": "p7",
                "currentLocation": {
                    "location": { "x": 6378137.0, "y": 0.0, "z": 0.0 },
                    "heading": 90
                }
            }
        }"#;
        let snapshot = GameSnapshot::from_json(json).unwrap();
        assert_eq!(snapshot.position(), DVec3::new(6_378_137.0, 0.0, 0.0));
        assert_eq!(snapshot.heading(), 90.0);
    }

    #[test]
    fn test_missing_location_is_error() {
        let err = GameSnapshot::from_json(r#"{ "me": {} }"#).unwrap_err();
        assert!(matches!(err, ChaseError::JsonError(_)));
    }

    #[test]
    fn test_non_finite_rejected() {
        let bad = Cartesian {
            x: f64::NAN,
            y: 0.0,
            z: 0.0,
        };
        assert!(matches!(
            bad.to_finite_dvec3(),
            Err(ChaseError::NonFinitePosition { .. })
        ));
        assert!(Cartesian::from(DVec3::X).to_finite_dvec3().is_ok());
    }
}
