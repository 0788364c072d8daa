//! Level description loading.
//!
//! A level is a flat JSON file of prop placements plus a player spawn:
//!
//! ```json
//! {
//!   "props": [
//!     {"type": "crate", "x": 2.0, "y": 0.0, "z": -4.0, "scale": 1.0}
//!   ],
//!   "player_spawn": {"x": 0.0, "y": 1.6, "z": 8.0}
//! }
//! ```
//!
//! Loading returns plain prop/spawn records; the collision world is derived
//! from them once and never mutated during play. Renderers and the
//! controller both consume the loaded data, neither owns it.

use glam::Vec3;
use serde::{Deserialize, Serialize};
use std::path::Path;
use walkabout_common::{CollisionWorld, Prop, PropKind, Spawn};

/// Errors from level loading and validation.
#[derive(Debug, thiserror::Error)]
pub enum LevelError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid level: {0}")]
    Invalid(String),
}

/// On-disk prop record with flat coordinate fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct PropRecord {
    #[serde(rename = "type")]
    kind: PropKind,
    x: f32,
    y: f32,
    z: f32,
    scale: f32,
}

/// On-disk spawn record. Orientation is not stored; spawns face `-Z`.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct SpawnRecord {
    x: f32,
    y: f32,
    z: f32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct LevelRecord {
    props: Vec<PropRecord>,
    player_spawn: SpawnRecord,
}

/// A loaded level: prop placements plus the player spawn.
#[derive(Debug, Clone, PartialEq)]
pub struct LevelData {
    pub props: Vec<Prop>,
    pub spawn: Spawn,
}

impl LevelData {
    /// Read and parse a level file, then validate it.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, LevelError> {
        let data = std::fs::read_to_string(path.as_ref())?;
        Self::from_json(&data)
    }

    /// Parse a level from its JSON representation.
    pub fn from_json(data: &str) -> Result<Self, LevelError> {
        let record: LevelRecord = serde_json::from_str(data)?;
        let level = Self {
            props: record
                .props
                .iter()
                .map(|p| Prop {
                    kind: p.kind,
                    position: Vec3::new(p.x, p.y, p.z),
                    scale: p.scale,
                })
                .collect(),
            spawn: Spawn::at(Vec3::new(
                record.player_spawn.x,
                record.player_spawn.y,
                record.player_spawn.z,
            )),
        };
        level.validate()?;
        Ok(level)
    }

    /// Load a level, falling back to the built-in one on any error.
    pub fn load_or_fallback(path: impl AsRef<Path>) -> Self {
        match Self::load(path.as_ref()) {
            Ok(level) => {
                tracing::info!(
                    path = %path.as_ref().display(),
                    props = level.props.len(),
                    "level loaded"
                );
                level
            }
            Err(e) => {
                tracing::warn!(
                    path = %path.as_ref().display(),
                    error = %e,
                    "level load failed, using built-in fallback"
                );
                Self::fallback()
            }
        }
    }

    /// The built-in level used when no file is available: two crates, one
    /// tree, spawn at (0, 1.6, 8).
    pub fn fallback() -> Self {
        Self {
            props: vec![
                Prop {
                    kind: PropKind::Crate,
                    position: Vec3::new(2.0, 0.0, -4.0),
                    scale: 1.0,
                },
                Prop {
                    kind: PropKind::Crate,
                    position: Vec3::new(-2.0, 0.0, -6.0),
                    scale: 1.0,
                },
                Prop {
                    kind: PropKind::Tree,
                    position: Vec3::new(-3.0, 0.0, 6.0),
                    scale: 1.5,
                },
            ],
            spawn: Spawn::at(Vec3::new(0.0, 1.6, 8.0)),
        }
    }

    /// Derive the static collision world: one box per prop.
    pub fn collision_world(&self) -> CollisionWorld {
        CollisionWorld::new(self.props.iter().map(Prop::collision_box).collect())
    }

    /// Serialize back to the on-disk format.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), LevelError> {
        let record = LevelRecord {
            props: self
                .props
                .iter()
                .map(|p| PropRecord {
                    kind: p.kind,
                    x: p.position.x,
                    y: p.position.y,
                    z: p.position.z,
                    scale: p.scale,
                })
                .collect(),
            player_spawn: SpawnRecord {
                x: self.spawn.position.x,
                y: self.spawn.position.y,
                z: self.spawn.position.z,
            },
        };
        let file = std::fs::File::create(path)?;
        serde_json::to_writer_pretty(file, &record)?;
        Ok(())
    }

    fn validate(&self) -> Result<(), LevelError> {
        if !self.spawn.position.is_finite() {
            return Err(LevelError::Invalid("spawn position is not finite".into()));
        }
        for (i, prop) in self.props.iter().enumerate() {
            if !prop.position.is_finite() {
                return Err(LevelError::Invalid(format!(
                    "prop {i} has a non-finite position"
                )));
            }
            if !prop.scale.is_finite() || prop.scale <= 0.0 {
                return Err(LevelError::Invalid(format!(
                    "prop {i} has invalid scale {}",
                    prop.scale
                )));
            }
        }
        Ok(())
    }
}

pub fn crate_info() -> &'static str {
    "walkabout-level v0.1.0"
}
