use crate::systems::rigid_body::{BodyKind, RigidBody, Vec2, Vec3};

use super::WorldCore;

pub(super) fn create_body(world: &mut WorldCore, kind: BodyKind, x: f32, y: f32) -> u32 {
    let id = world.next_body_id;
    world.next_body_id = world.next_body_id.saturating_add(1);
    world.bodies.push(RigidBody::new(id, kind, Vec2::new(x, y)));
    id
}

pub(super) fn create_body_3d(world: &mut WorldCore, kind: BodyKind, x: f32, y: f32, z: f32) -> u32 {
    let id = world.next_body_id;
    world.next_body_id = world.next_body_id.saturating_add(1);
    world
        .bodies
        .push(RigidBody::new_spatial(id, kind, Vec3::new(x, y, z)));
    id
}

pub(super) fn remove_body(world: &mut WorldCore, id: u32) {
    world.bodies.retain(|body| body.id != id);
}

pub(super) fn clear(world: &mut WorldCore) {
    world.bodies.clear();
    world.joints.clear();
    // next_body_id / next_joint_id stay put: ids are never reused.
}

// 2D property writes address planar bodies; on spatial bodies they are
// no-ops, mirroring how the _3d writes below ignore planar bodies.

pub(super) fn set_body_position(world: &mut WorldCore, id: u32, x: f32, y: f32) {
    if let Some(m) = world.body_mut(id).and_then(RigidBody::planar_mut) {
        m.position = Vec2::new(x, y);
    }
}

pub(super) fn set_body_velocity(world: &mut WorldCore, id: u32, x: f32, y: f32) {
    if let Some(m) = world.body_mut(id).and_then(RigidBody::planar_mut) {
        m.velocity = Vec2::new(x, y);
    }
}

pub(super) fn set_body_rotation(world: &mut WorldCore, id: u32, rotation: f32) {
    if let Some(m) = world.body_mut(id).and_then(RigidBody::planar_mut) {
        m.rotation = rotation;
    }
}

pub(super) fn set_body_position_3d(world: &mut WorldCore, id: u32, x: f32, y: f32, z: f32) {
    if let Some(m) = world.body_mut(id).and_then(RigidBody::spatial_mut) {
        m.position = Vec3::new(x, y, z);
    }
}

pub(super) fn set_body_velocity_3d(world: &mut WorldCore, id: u32, x: f32, y: f32, z: f32) {
    if let Some(m) = world.body_mut(id).and_then(RigidBody::spatial_mut) {
        m.velocity = Vec3::new(x, y, z);
    }
}

pub(super) fn set_body_rotation_3d(world: &mut WorldCore, id: u32, x: f32, y: f32, z: f32) {
    if let Some(m) = world.body_mut(id).and_then(RigidBody::spatial_mut) {
        m.rotation = Vec3::new(x, y, z);
    }
}

pub(super) fn set_body_angular_velocity_3d(world: &mut WorldCore, id: u32, x: f32, y: f32, z: f32) {
    if let Some(m) = world.body_mut(id).and_then(RigidBody::spatial_mut) {
        m.angular_velocity = Vec3::new(x, y, z);
    }
}

pub(super) fn set_body_mass(world: &mut WorldCore, id: u32, mass: f32) {
    if let Some(body) = world.body_mut(id) {
        if body.kind != BodyKind::Static {
            body.mass = mass;
        }
    }
}

pub(super) fn set_body_friction(world: &mut WorldCore, id: u32, friction: f32) {
    if let Some(body) = world.body_mut(id) {
        body.friction = friction;
    }
}

pub(super) fn set_body_restitution(world: &mut WorldCore, id: u32, restitution: f32) {
    if let Some(body) = world.body_mut(id) {
        body.restitution = restitution;
    }
}

pub(super) fn set_body_density(world: &mut WorldCore, id: u32, density: f32) {
    if let Some(body) = world.body_mut(id) {
        body.density = density;
    }
}
