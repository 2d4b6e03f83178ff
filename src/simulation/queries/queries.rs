use crate::systems::collision::{collect_contacts, detect_pair, Contact};
use crate::systems::rigid_body::{RigidBody, Vec2, Vec3};

use super::WorldCore;

// Missing ids answer with zeros / false rather than errors, so scripts
// holding stale ids keep running.

pub(super) fn body_position(world: &WorldCore, id: u32) -> Vec2 {
    world
        .body(id)
        .map(RigidBody::position_xy)
        .unwrap_or_else(Vec2::zero)
}

pub(super) fn body_velocity(world: &WorldCore, id: u32) -> Vec2 {
    world
        .body(id)
        .map(RigidBody::velocity_xy)
        .unwrap_or_else(Vec2::zero)
}

pub(super) fn body_rotation(world: &WorldCore, id: u32) -> f32 {
    world
        .body(id)
        .and_then(RigidBody::planar)
        .map(|m| m.rotation)
        .unwrap_or(0.0)
}

pub(super) fn body_position_3d(world: &WorldCore, id: u32) -> Vec3 {
    world
        .body(id)
        .and_then(RigidBody::spatial)
        .map(|m| m.position)
        .unwrap_or_else(Vec3::zero)
}

pub(super) fn body_velocity_3d(world: &WorldCore, id: u32) -> Vec3 {
    world
        .body(id)
        .and_then(RigidBody::spatial)
        .map(|m| m.velocity)
        .unwrap_or_else(Vec3::zero)
}

pub(super) fn body_rotation_3d(world: &WorldCore, id: u32) -> Vec3 {
    world
        .body(id)
        .and_then(RigidBody::spatial)
        .map(|m| m.rotation)
        .unwrap_or_else(Vec3::zero)
}

pub(super) fn check_collision(world: &WorldCore, body_a: u32, body_b: u32) -> bool {
    match (world.body(body_a), world.body(body_b)) {
        (Some(a), Some(b)) => detect_pair(a, b).is_some(),
        _ => false,
    }
}

pub(super) fn collisions(world: &WorldCore) -> Vec<Contact> {
    collect_contacts(&world.bodies)
}
