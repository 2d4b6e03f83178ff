use crate::systems::rigid_body::{JointKind, PhysicsJoint, Vec2, Vec3};

use super::WorldCore;

fn push_joint(world: &mut WorldCore, joint: PhysicsJoint) -> u32 {
    let id = joint.id;
    world.joints.push(joint);
    id
}

fn next_joint(world: &mut WorldCore, kind: JointKind, body_a: u32, body_b: u32) -> PhysicsJoint {
    let id = world.next_joint_id;
    world.next_joint_id = world.next_joint_id.saturating_add(1);
    PhysicsJoint::new(id, kind, body_a, body_b)
}

pub(super) fn create_pin_joint(
    world: &mut WorldCore,
    body_a: u32,
    body_b: u32,
    x: f32,
    y: f32,
) -> u32 {
    let mut joint = next_joint(world, JointKind::Pin, body_a, body_b);
    joint.anchor_a = Vec2::new(x, y);
    joint.anchor_b = Vec2::new(x, y);
    push_joint(world, joint)
}

pub(super) fn create_spring_joint(
    world: &mut WorldCore,
    body_a: u32,
    body_b: u32,
    stiffness: f32,
    damping: f32,
) -> u32 {
    let mut joint = next_joint(world, JointKind::Spring, body_a, body_b);
    joint.stiffness = stiffness;
    joint.damping = damping;

    // Rest length snapshots the current separation.
    if let (Some(a), Some(b)) = (world.body(body_a), world.body(body_b)) {
        joint.rest_length = (b.position_xy() - a.position_xy()).length();
    }

    push_joint(world, joint)
}

pub(super) fn create_distance_joint(
    world: &mut WorldCore,
    body_a: u32,
    body_b: u32,
    length: f32,
) -> u32 {
    let mut joint = next_joint(world, JointKind::Distance, body_a, body_b);
    joint.rest_length = length;
    push_joint(world, joint)
}

pub(super) fn create_revolute_joint(
    world: &mut WorldCore,
    body_a: u32,
    body_b: u32,
    x: f32,
    y: f32,
) -> u32 {
    let mut joint = next_joint(world, JointKind::Revolute, body_a, body_b);
    joint.anchor_a = Vec2::new(x, y);
    joint.anchor_b = Vec2::new(x, y);
    push_joint(world, joint)
}

pub(super) fn create_prismatic_joint(
    world: &mut WorldCore,
    body_a: u32,
    body_b: u32,
    x: f32,
    y: f32,
) -> u32 {
    let mut joint = next_joint(world, JointKind::Prismatic, body_a, body_b);
    joint.axis = Vec3::new(x, y, 0.0);
    push_joint(world, joint)
}

pub(super) fn create_ball_socket_joint(
    world: &mut WorldCore,
    body_a: u32,
    body_b: u32,
    x: f32,
    y: f32,
    z: f32,
) -> u32 {
    let mut joint = next_joint(world, JointKind::BallSocket, body_a, body_b);
    joint.anchor_a3 = Vec3::new(x, y, z);
    joint.anchor_b3 = Vec3::new(x, y, z);
    push_joint(world, joint)
}

#[allow(clippy::too_many_arguments)]
pub(super) fn create_hinge_joint(
    world: &mut WorldCore,
    body_a: u32,
    body_b: u32,
    ax: f32,
    ay: f32,
    az: f32,
    axis_x: f32,
    axis_y: f32,
    axis_z: f32,
) -> u32 {
    let mut joint = next_joint(world, JointKind::Hinge, body_a, body_b);
    joint.anchor_a3 = Vec3::new(ax, ay, az);
    joint.anchor_b3 = Vec3::new(ax, ay, az);
    joint.axis = Vec3::new(axis_x, axis_y, axis_z);
    push_joint(world, joint)
}

pub(super) fn create_slider_joint(
    world: &mut WorldCore,
    body_a: u32,
    body_b: u32,
    x: f32,
    y: f32,
    z: f32,
) -> u32 {
    let mut joint = next_joint(world, JointKind::Slider, body_a, body_b);
    joint.axis = Vec3::new(x, y, z);
    push_joint(world, joint)
}

pub(super) fn create_universal_joint(
    world: &mut WorldCore,
    body_a: u32,
    body_b: u32,
    x: f32,
    y: f32,
    z: f32,
) -> u32 {
    let mut joint = next_joint(world, JointKind::Universal, body_a, body_b);
    joint.anchor_a3 = Vec3::new(x, y, z);
    joint.anchor_b3 = Vec3::new(x, y, z);
    push_joint(world, joint)
}

pub(super) fn create_fixed_joint(world: &mut WorldCore, body_a: u32, body_b: u32) -> u32 {
    let joint = next_joint(world, JointKind::Fixed, body_a, body_b);
    push_joint(world, joint)
}

pub(super) fn remove_joint(world: &mut WorldCore, id: u32) {
    world.joints.retain(|joint| joint.id != id);
}

pub(super) fn set_joint_active(world: &mut WorldCore, id: u32, active: bool) {
    if let Some(joint) = world.joint_mut(id) {
        joint.active = active;
    }
}
