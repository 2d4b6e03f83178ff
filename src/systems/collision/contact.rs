use crate::systems::rigid_body::{RigidBody, Vec2};

/// Result of one narrow-phase pair test.
///
/// Contacts are rebuilt from scratch every step and never stored; the
/// body ids are the only link back into the world, so a contact stays
/// valid (as a no-op) even if a script removes a body mid-step.
#[derive(Clone, Copy, Debug)]
pub struct Contact {
    pub body_a: u32,
    pub body_b: u32,
    pub point: Vec2,
    /// Unit normal, or zero in the degenerate coincident-center case
    /// (which then carries zero impulse).
    pub normal: Vec2,
    pub penetration: f32,
    /// Combined restitution: min of the pair.
    pub restitution: f32,
    /// Combined friction: geometric mean of the pair.
    pub friction: f32,
}

impl Contact {
    /// Pair material combination shared by every shape test.
    pub(super) fn materials(a: &RigidBody, b: &RigidBody) -> (f32, f32) {
        (a.restitution.min(b.restitution), (a.friction * b.friction).sqrt())
    }
}
