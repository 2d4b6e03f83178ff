use super::vec2::Vec2;
use super::vec3::Vec3;

/// Joint kind. Ordinal codes are stable, same contract as `BodyKind`.
///
/// PIN, SPRING and DISTANCE have solvers. The remaining kinds can be
/// created and stored but are not resolved (see `systems::joints`).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum JointKind {
    Pin,
    Spring,
    Distance,
    Revolute,
    Prismatic,
    BallSocket,
    Hinge,
    Slider,
    Universal,
    Fixed,
}

impl JointKind {
    pub fn from_code(code: u32) -> Option<JointKind> {
        match code {
            0 => Some(JointKind::Pin),
            1 => Some(JointKind::Spring),
            2 => Some(JointKind::Distance),
            3 => Some(JointKind::Revolute),
            4 => Some(JointKind::Prismatic),
            5 => Some(JointKind::BallSocket),
            6 => Some(JointKind::Hinge),
            7 => Some(JointKind::Slider),
            8 => Some(JointKind::Universal),
            9 => Some(JointKind::Fixed),
            _ => None,
        }
    }

    pub fn code(self) -> u32 {
        match self {
            JointKind::Pin => 0,
            JointKind::Spring => 1,
            JointKind::Distance => 2,
            JointKind::Revolute => 3,
            JointKind::Prismatic => 4,
            JointKind::BallSocket => 5,
            JointKind::Hinge => 6,
            JointKind::Slider => 7,
            JointKind::Universal => 8,
            JointKind::Fixed => 9,
        }
    }
}

/// Constraint between two bodies, referenced by id, never by pointer.
/// A joint outlives the bodies it names: when a body is removed the
/// joint stays registered and its resolution becomes a no-op.
#[derive(Clone, Copy, Debug)]
pub struct PhysicsJoint {
    pub id: u32,
    pub kind: JointKind,
    pub body_a: u32,
    pub body_b: u32,
    pub anchor_a: Vec2,
    pub anchor_b: Vec2,
    pub anchor_a3: Vec3,
    pub anchor_b3: Vec3,
    /// Hinge/slider/prismatic axis.
    pub axis: Vec3,
    pub stiffness: f32,
    pub damping: f32,
    pub rest_length: f32,
    /// Stored but not consumed by any solver.
    pub max_force: f32,
    pub active: bool,
}

impl PhysicsJoint {
    pub fn new(id: u32, kind: JointKind, body_a: u32, body_b: u32) -> Self {
        Self {
            id,
            kind,
            body_a,
            body_b,
            anchor_a: Vec2::zero(),
            anchor_b: Vec2::zero(),
            anchor_a3: Vec3::zero(),
            anchor_b3: Vec3::zero(),
            axis: Vec3::zero(),
            stiffness: 100.0,
            damping: 10.0,
            rest_length: 0.0,
            max_force: 1000.0,
            active: true,
        }
    }
}
