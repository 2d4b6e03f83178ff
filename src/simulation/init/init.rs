use crate::domain::preset::{JointPreset, ShapePreset, WorldManifest, WorldPreset};
use crate::systems::rigid_body::{BodyKind, Vec2};

use super::perf_stats::PerfStats;
use super::WorldCore;

pub(super) fn create_world_core() -> WorldCore {
    WorldCore {
        bodies: Vec::new(),
        joints: Vec::new(),
        gravity: Vec2::new(0.0, 9.81),
        time_step: 1.0 / 60.0,
        next_body_id: 1,
        next_joint_id: 1,
        perf_enabled: false,
        perf_stats: PerfStats::default(),
    }
}

/// Apply a parsed preset. Bodies and joints go through the normal
/// creators so ids keep their monotonic guarantee; joint entries name
/// bodies by index into the preset's body list.
pub(super) fn apply_preset(world: &mut WorldCore, preset: &WorldPreset) -> Result<(), String> {
    world.set_gravity(preset.gravity[0], preset.gravity[1]);
    if preset.time_step > 0.0 {
        world.set_time_step(preset.time_step);
    }

    let mut ids = Vec::with_capacity(preset.bodies.len());
    for (idx, body) in preset.bodies.iter().enumerate() {
        let kind = BodyKind::from_code(body.kind)
            .ok_or_else(|| format!("body {}: unknown kind code {}", idx, body.kind))?;

        let id = match body.position_z {
            Some(z) => world.create_body_3d(kind, body.position[0], body.position[1], z),
            None => world.create_body(kind, body.position[0], body.position[1]),
        };

        match &body.shape {
            Some(ShapePreset::Circle { radius }) => world.set_circle_shape(id, *radius),
            Some(ShapePreset::Rectangle { width, height }) => {
                world.set_rectangle_shape(id, *width, *height)
            }
            Some(ShapePreset::Sphere { radius }) => world.set_sphere_shape(id, *radius),
            Some(ShapePreset::Box { width, height, depth }) => {
                world.set_box_shape(id, *width, *height, *depth)
            }
            None => {}
        }

        if let Some(mass) = body.mass {
            world.set_body_mass(id, mass);
        }
        if let Some(friction) = body.friction {
            world.set_body_friction(id, friction);
        }
        if let Some(restitution) = body.restitution {
            world.set_body_restitution(id, restitution);
        }

        ids.push(id);
    }

    let resolve = |idx: usize| -> Result<u32, String> {
        ids.get(idx)
            .copied()
            .ok_or_else(|| format!("joint references body index {} out of range", idx))
    };

    for joint in preset.joints.iter() {
        match joint {
            JointPreset::Pin { a, b, anchor } => {
                world.create_pin_joint(resolve(*a)?, resolve(*b)?, anchor[0], anchor[1]);
            }
            JointPreset::Spring { a, b, stiffness, damping } => {
                world.create_spring_joint(resolve(*a)?, resolve(*b)?, *stiffness, *damping);
            }
            JointPreset::Distance { a, b, length } => {
                world.create_distance_joint(resolve(*a)?, resolve(*b)?, *length);
            }
        }
    }

    Ok(())
}

pub(super) fn manifest_json(world: &WorldCore) -> String {
    let manifest = WorldManifest {
        gravity: [world.gravity.x, world.gravity.y],
        time_step: world.time_step,
        bodies: world.bodies.len(),
        joints: world.joints.len(),
    };
    serde_json::to_string(&manifest).unwrap_or_else(|_| "{}".to_string())
}
