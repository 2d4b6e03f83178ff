//! Joint constraint resolution.
//!
//! Runs once per step, in registration order, before collision
//! detection. PIN, SPRING and DISTANCE are solved; REVOLUTE, PRISMATIC,
//! BALL_SOCKET, HINGE, SLIDER, UNIVERSAL and FIXED store their
//! configuration but currently have no solver at all. They are inert
//! placeholders, not approximations.

use crate::systems::rigid_body::{BodyKind, JointKind, PhysicsJoint, RigidBody};

/// Resolve one joint against its two bodies.
///
/// Solvers act on planar bodies only; a joint whose bodies are spatial
/// keeps their state untouched.
pub fn resolve_joint(a: &mut RigidBody, b: &mut RigidBody, joint: &PhysicsJoint) {
    if a.is_3d() || b.is_3d() {
        return;
    }
    match joint.kind {
        JointKind::Pin => resolve_pin(a, b, joint),
        JointKind::Spring => resolve_spring(a, b, joint),
        JointKind::Distance => resolve_distance(a, b, joint),
        _ => {}
    }
}

/// Pull the two anchor world-points together, correcting half of the
/// positional error per step. Soft and non-conservative.
fn resolve_pin(a: &mut RigidBody, b: &mut RigidBody, joint: &PhysicsJoint) {
    let world_a = a.position_xy() + joint.anchor_a;
    let world_b = b.position_xy() + joint.anchor_b;
    let error = world_b - world_a;

    let correction = error * 0.5;
    if a.kind == BodyKind::Dynamic {
        a.translate_xy(correction);
    }
    if b.kind == BodyKind::Dynamic {
        b.translate_xy(-correction);
    }
}

/// Hookean spring plus damping along the separation direction. Both
/// terms feed the bodies' acceleration so the same tick's integration
/// consumes them; at exactly rest length the contribution is zero.
fn resolve_spring(a: &mut RigidBody, b: &mut RigidBody, joint: &PhysicsJoint) {
    let delta = b.position_xy() - a.position_xy();
    let length = delta.length();
    if length <= 0.0 {
        return;
    }

    let error = length - joint.rest_length;
    let dir = delta.normalize();

    let force = dir * (error * joint.stiffness);
    a.add_acceleration_xy(force * a.inv_mass());
    b.add_acceleration_xy(-(force * b.inv_mass()));

    let rel = b.velocity_xy() - a.velocity_xy();
    let damping = dir * (rel.dot(dir) * joint.damping);
    a.add_acceleration_xy(damping * a.inv_mass());
    b.add_acceleration_xy(-(damping * b.inv_mass()));
}

/// Hard positional correction toward the rest length, split 50/50
/// between the two bodies regardless of mass (collision correction is
/// mass-weighted; this one deliberately is not).
fn resolve_distance(a: &mut RigidBody, b: &mut RigidBody, joint: &PhysicsJoint) {
    let delta = b.position_xy() - a.position_xy();
    let length = delta.length();
    if length <= 0.0 {
        return;
    }

    let error = length - joint.rest_length;
    let correction = delta.normalize() * (error * 0.5);
    if a.kind == BodyKind::Dynamic {
        a.translate_xy(correction);
    }
    if b.kind == BodyKind::Dynamic {
        b.translate_xy(-correction);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::systems::rigid_body::{JointKind, Vec2};

    fn dynamic(id: u32, x: f32, y: f32) -> RigidBody {
        RigidBody::new(id, BodyKind::Dynamic, Vec2::new(x, y))
    }

    #[test]
    fn pin_joint_corrects_half_the_anchor_error() {
        let mut a = dynamic(1, 0.0, 0.0);
        let mut b = dynamic(2, 4.0, 0.0);
        let joint = PhysicsJoint::new(1, JointKind::Pin, 1, 2);

        resolve_joint(&mut a, &mut b, &joint);

        // Error is 4 along x; each body moves half of the half.
        assert_eq!(a.position_xy(), Vec2::new(2.0, 0.0));
        assert_eq!(b.position_xy(), Vec2::new(2.0, 0.0));
    }

    #[test]
    fn spring_at_rest_length_adds_no_acceleration() {
        let mut a = dynamic(1, 0.0, 0.0);
        let mut b = dynamic(2, 10.0, 0.0);
        let mut joint = PhysicsJoint::new(1, JointKind::Spring, 1, 2);
        joint.rest_length = 10.0;

        resolve_joint(&mut a, &mut b, &joint);

        assert_eq!(a.planar().unwrap().acceleration, Vec2::zero());
        assert_eq!(b.planar().unwrap().acceleration, Vec2::zero());
    }

    #[test]
    fn stretched_spring_pulls_both_bodies_inward() {
        let mut a = dynamic(1, 0.0, 0.0);
        let mut b = dynamic(2, 12.0, 0.0);
        let mut joint = PhysicsJoint::new(1, JointKind::Spring, 1, 2);
        joint.rest_length = 10.0;
        joint.stiffness = 50.0;
        joint.damping = 0.0;

        resolve_joint(&mut a, &mut b, &joint);

        // error 2 * stiffness 50 = force 100 along +x on a, -x on b.
        assert_eq!(a.planar().unwrap().acceleration, Vec2::new(100.0, 0.0));
        assert_eq!(b.planar().unwrap().acceleration, Vec2::new(-100.0, 0.0));
    }

    #[test]
    fn spring_damping_opposes_separation() {
        let mut a = dynamic(1, 0.0, 0.0);
        let mut b = dynamic(2, 10.0, 0.0);
        a.planar_mut().unwrap().velocity = Vec2::new(-1.0, 0.0);
        b.planar_mut().unwrap().velocity = Vec2::new(1.0, 0.0);
        let mut joint = PhysicsJoint::new(1, JointKind::Spring, 1, 2);
        joint.rest_length = 10.0;
        joint.stiffness = 0.0;
        joint.damping = 5.0;

        resolve_joint(&mut a, &mut b, &joint);

        // Separating at relative speed 2: a is pushed after b, b back
        // toward a.
        assert_eq!(a.planar().unwrap().acceleration, Vec2::new(10.0, 0.0));
        assert_eq!(b.planar().unwrap().acceleration, Vec2::new(-10.0, 0.0));
    }

    #[test]
    fn distance_joint_splits_evenly_regardless_of_mass() {
        let mut a = dynamic(1, 0.0, 0.0);
        let mut b = dynamic(2, 10.0, 0.0);
        a.mass = 1.0;
        b.mass = 100.0;
        let mut joint = PhysicsJoint::new(1, JointKind::Distance, 1, 2);
        joint.rest_length = 6.0;

        resolve_joint(&mut a, &mut b, &joint);

        // error 4, each side takes 2 no matter the masses.
        assert_eq!(a.position_xy(), Vec2::new(2.0, 0.0));
        assert_eq!(b.position_xy(), Vec2::new(8.0, 0.0));
    }

    #[test]
    fn non_dynamic_bodies_act_as_anchors() {
        let mut a = RigidBody::new(1, BodyKind::Static, Vec2::zero());
        let mut b = dynamic(2, 10.0, 0.0);
        let mut joint = PhysicsJoint::new(1, JointKind::Distance, 1, 2);
        joint.rest_length = 6.0;

        resolve_joint(&mut a, &mut b, &joint);

        assert_eq!(a.position_xy(), Vec2::zero());
        assert_eq!(b.position_xy(), Vec2::new(8.0, 0.0));
    }

    #[test]
    fn unsolved_kinds_leave_bodies_untouched() {
        let mut a = dynamic(1, 0.0, 0.0);
        let mut b = dynamic(2, 10.0, 0.0);
        for kind in [
            JointKind::Revolute,
            JointKind::Prismatic,
            JointKind::BallSocket,
            JointKind::Hinge,
            JointKind::Slider,
            JointKind::Universal,
            JointKind::Fixed,
        ] {
            let joint = PhysicsJoint::new(1, kind, 1, 2);
            resolve_joint(&mut a, &mut b, &joint);
        }
        assert_eq!(a.position_xy(), Vec2::zero());
        assert_eq!(b.position_xy(), Vec2::new(10.0, 0.0));
    }
}
