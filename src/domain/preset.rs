//! World presets - declarative scene setup loaded from JSON.
//!
//! A preset carries the world settings plus an initial population of
//! bodies and joints. Joint entries reference bodies by index into the
//! preset's own body list; the world assigns real ids when the preset
//! is applied.

use serde::{Deserialize, Serialize};

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorldPreset {
    #[serde(default = "default_gravity")]
    pub gravity: [f32; 2],
    #[serde(default = "default_time_step")]
    pub time_step: f32,
    #[serde(default)]
    pub bodies: Vec<BodyPreset>,
    #[serde(default)]
    pub joints: Vec<JointPreset>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BodyPreset {
    /// Ordinal body-kind code (0 static, 1 dynamic, 2 kinematic).
    pub kind: u32,
    pub position: [f32; 2],
    /// Present only for spatial bodies.
    #[serde(default)]
    pub position_z: Option<f32>,
    #[serde(default)]
    pub shape: Option<ShapePreset>,
    #[serde(default)]
    pub mass: Option<f32>,
    #[serde(default)]
    pub friction: Option<f32>,
    #[serde(default)]
    pub restitution: Option<f32>,
}

#[derive(Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum ShapePreset {
    Circle { radius: f32 },
    Rectangle { width: f32, height: f32 },
    Sphere { radius: f32 },
    Box { width: f32, height: f32, depth: f32 },
}

#[derive(Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum JointPreset {
    Pin { a: usize, b: usize, anchor: [f32; 2] },
    Spring { a: usize, b: usize, stiffness: f32, damping: f32 },
    Distance { a: usize, b: usize, length: f32 },
}

/// Settings/count snapshot exported back to the host.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WorldManifest {
    pub gravity: [f32; 2],
    pub time_step: f32,
    pub bodies: usize,
    pub joints: usize,
}

impl WorldPreset {
    pub fn from_json(json: &str) -> Result<Self, String> {
        serde_json::from_str(json).map_err(|e| e.to_string())
    }
}

fn default_gravity() -> [f32; 2] {
    [0.0, 9.81]
}

fn default_time_step() -> f32 {
    1.0 / 60.0
}
