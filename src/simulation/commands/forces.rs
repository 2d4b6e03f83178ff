use crate::systems::rigid_body::{Vec2, Vec3};

use super::WorldCore;

// Thin id-to-body dispatch; the DYNAMIC-only rules live on RigidBody.

pub(super) fn apply_force(world: &mut WorldCore, id: u32, x: f32, y: f32) {
    if let Some(body) = world.body_mut(id) {
        body.apply_force(Vec2::new(x, y));
    }
}

pub(super) fn apply_impulse(world: &mut WorldCore, id: u32, x: f32, y: f32) {
    if let Some(body) = world.body_mut(id) {
        body.apply_impulse(Vec2::new(x, y));
    }
}

pub(super) fn apply_torque(world: &mut WorldCore, id: u32, torque: f32) {
    if let Some(body) = world.body_mut(id) {
        body.apply_torque(torque);
    }
}

pub(super) fn apply_force_at_point(
    world: &mut WorldCore,
    id: u32,
    fx: f32,
    fy: f32,
    px: f32,
    py: f32,
) {
    if let Some(body) = world.body_mut(id) {
        body.apply_force_at_point(Vec2::new(fx, fy), Vec2::new(px, py));
    }
}

pub(super) fn apply_force_3d(world: &mut WorldCore, id: u32, x: f32, y: f32, z: f32) {
    if let Some(body) = world.body_mut(id) {
        body.apply_force_3d(Vec3::new(x, y, z));
    }
}

pub(super) fn apply_impulse_3d(world: &mut WorldCore, id: u32, x: f32, y: f32, z: f32) {
    if let Some(body) = world.body_mut(id) {
        body.apply_impulse_3d(Vec3::new(x, y, z));
    }
}

pub(super) fn apply_torque_3d(world: &mut WorldCore, id: u32, x: f32, y: f32, z: f32) {
    if let Some(body) = world.body_mut(id) {
        body.apply_torque_3d(Vec3::new(x, y, z));
    }
}

#[allow(clippy::too_many_arguments)]
pub(super) fn apply_force_at_point_3d(
    world: &mut WorldCore,
    id: u32,
    fx: f32,
    fy: f32,
    fz: f32,
    px: f32,
    py: f32,
    pz: f32,
) {
    if let Some(body) = world.body_mut(id) {
        body.apply_force_at_point_3d(Vec3::new(fx, fy, fz), Vec3::new(px, py, pz));
    }
}
