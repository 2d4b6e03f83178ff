use super::vec2::Vec2;
use super::vec3::Vec3;

/// Body kind. The numeric codes are ordinal and stable: the scripting
/// host passes them as raw integers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BodyKind {
    Static,
    Dynamic,
    Kinematic,
}

impl BodyKind {
    pub fn from_code(code: u32) -> Option<BodyKind> {
        match code {
            0 => Some(BodyKind::Static),
            1 => Some(BodyKind::Dynamic),
            2 => Some(BodyKind::Kinematic),
            _ => None,
        }
    }

    pub fn code(self) -> u32 {
        match self {
            BodyKind::Static => 0,
            BodyKind::Dynamic => 1,
            BodyKind::Kinematic => 2,
        }
    }
}

/// Collision shape and its parameters.
///
/// Circle, Rectangle and Polygon are planar; Sphere, Box3, Capsule and
/// Mesh are spatial. Polygon, Capsule and Mesh can be stored on a body
/// but no narrow-phase pair is implemented for them.
#[derive(Clone, Debug)]
pub enum Shape {
    Circle { radius: f32 },
    Rectangle { size: Vec2 },
    Polygon { vertices: Vec<Vec2> },
    Sphere { radius: f32 },
    Box3 { size: Vec3 },
    Capsule { radius: f32, height: f32 },
    Mesh { vertices: Vec<Vec3> },
}

impl Shape {
    pub fn is_3d(&self) -> bool {
        matches!(
            self,
            Shape::Sphere { .. } | Shape::Box3 { .. } | Shape::Capsule { .. } | Shape::Mesh { .. }
        )
    }
}

/// Planar kinematic state.
#[derive(Clone, Copy, Debug, Default)]
pub struct Motion2 {
    pub position: Vec2,
    pub velocity: Vec2,
    pub acceleration: Vec2,
    /// Rotation angle (radians)
    pub rotation: f32,
    pub angular_velocity: f32,
}

/// Spatial kinematic state.
#[derive(Clone, Copy, Debug, Default)]
pub struct Motion3 {
    pub position: Vec3,
    pub velocity: Vec3,
    pub acceleration: Vec3,
    /// Euler rotation (radians per axis)
    pub rotation: Vec3,
    pub angular_velocity: Vec3,
}

/// Kinematic state of a body. Exactly one of the two variants is
/// authoritative for a given body; there are no shadow fields for the
/// other dimensionality.
#[derive(Clone, Copy, Debug)]
pub enum Motion {
    Planar(Motion2),
    Spatial(Motion3),
}

impl Motion {
    pub fn is_3d(&self) -> bool {
        matches!(self, Motion::Spatial(_))
    }
}

/// Rigid body - the unit of simulation.
///
/// Bodies are owned by the world and addressed by id everywhere else;
/// ids increase monotonically and are never reused.
#[derive(Clone, Debug)]
pub struct RigidBody {
    pub id: u32,
    pub kind: BodyKind,
    pub shape: Shape,
    pub motion: Motion,
    /// Total mass. Always 0 for STATIC bodies.
    pub mass: f32,
    pub friction: f32,
    /// Bounciness (0.0 = no bounce, 1.0 = full elastic)
    pub restitution: f32,
    pub density: f32,
    /// Sleeping bodies are skipped by integration until something wakes them.
    pub sleeping: bool,
    pub sleep_threshold: f32,
}

impl RigidBody {
    /// Create a planar body. STATIC bodies get mass 0 (treated as infinite).
    pub fn new(id: u32, kind: BodyKind, position: Vec2) -> Self {
        Self {
            id,
            kind,
            shape: Shape::Circle { radius: 10.0 },
            motion: Motion::Planar(Motion2 {
                position,
                ..Motion2::default()
            }),
            mass: if kind == BodyKind::Static { 0.0 } else { 1.0 },
            friction: 0.5,
            restitution: 0.3,
            density: 1.0,
            sleeping: false,
            sleep_threshold: 0.1,
        }
    }

    /// Create a spatial body. Defaults to a sphere so it can collide
    /// out of the box (a planar default shape never matches a 3D pair).
    pub fn new_spatial(id: u32, kind: BodyKind, position: Vec3) -> Self {
        Self {
            id,
            kind,
            shape: Shape::Sphere { radius: 10.0 },
            motion: Motion::Spatial(Motion3 {
                position,
                ..Motion3::default()
            }),
            mass: if kind == BodyKind::Static { 0.0 } else { 1.0 },
            friction: 0.5,
            restitution: 0.3,
            density: 1.0,
            sleeping: false,
            sleep_threshold: 0.1,
        }
    }

    pub fn is_3d(&self) -> bool {
        self.motion.is_3d()
    }

    /// Inverse mass used by every `1/mass` expression in the crate.
    ///
    /// STATIC and KINEMATIC bodies contribute exactly 0, as does a
    /// DYNAMIC body with non-positive mass, so impulse denominators and
    /// correction weights stay finite no matter which kinds collide.
    pub fn inv_mass(&self) -> f32 {
        match self.kind {
            BodyKind::Dynamic if self.mass > 0.0 => 1.0 / self.mass,
            _ => 0.0,
        }
    }

    pub fn planar(&self) -> Option<&Motion2> {
        match &self.motion {
            Motion::Planar(m) => Some(m),
            Motion::Spatial(_) => None,
        }
    }

    pub fn planar_mut(&mut self) -> Option<&mut Motion2> {
        match &mut self.motion {
            Motion::Planar(m) => Some(m),
            Motion::Spatial(_) => None,
        }
    }

    pub fn spatial(&self) -> Option<&Motion3> {
        match &self.motion {
            Motion::Planar(_) => None,
            Motion::Spatial(m) => Some(m),
        }
    }

    pub fn spatial_mut(&mut self) -> Option<&mut Motion3> {
        match &mut self.motion {
            Motion::Planar(_) => None,
            Motion::Spatial(m) => Some(m),
        }
    }

    // === X-Y PROJECTION ===
    // Collision resolution runs entirely in the x-y plane (3D contacts are
    // projected by the narrow phase). These accessors give the resolver one
    // code path over both motion variants; for spatial bodies z is untouched.

    pub fn position_xy(&self) -> Vec2 {
        match &self.motion {
            Motion::Planar(m) => m.position,
            Motion::Spatial(m) => Vec2::new(m.position.x, m.position.y),
        }
    }

    pub fn velocity_xy(&self) -> Vec2 {
        match &self.motion {
            Motion::Planar(m) => m.velocity,
            Motion::Spatial(m) => Vec2::new(m.velocity.x, m.velocity.y),
        }
    }

    pub(crate) fn translate_xy(&mut self, delta: Vec2) {
        match &mut self.motion {
            Motion::Planar(m) => m.position = m.position + delta,
            Motion::Spatial(m) => {
                m.position.x += delta.x;
                m.position.y += delta.y;
            }
        }
    }

    pub(crate) fn add_velocity_xy(&mut self, delta: Vec2) {
        match &mut self.motion {
            Motion::Planar(m) => m.velocity = m.velocity + delta,
            Motion::Spatial(m) => {
                m.velocity.x += delta.x;
                m.velocity.y += delta.y;
            }
        }
    }

    pub(crate) fn add_acceleration_xy(&mut self, delta: Vec2) {
        match &mut self.motion {
            Motion::Planar(m) => m.acceleration = m.acceleration + delta,
            Motion::Spatial(m) => {
                m.acceleration.x += delta.x;
                m.acceleration.y += delta.y;
            }
        }
    }

    // === FORCES ===
    // All of these are no-ops unless the body is DYNAMIC: inv_mass() is 0
    // for every other kind. Planar calls address planar bodies, the _3d
    // calls address spatial bodies.

    /// Accumulate a force for this tick's integration.
    pub fn apply_force(&mut self, force: Vec2) {
        let w = self.inv_mass();
        if let Motion::Planar(m) = &mut self.motion {
            m.acceleration = m.acceleration + force * w;
        }
    }

    /// Instantaneous velocity change.
    pub fn apply_impulse(&mut self, impulse: Vec2) {
        let w = self.inv_mass();
        if let Motion::Planar(m) = &mut self.motion {
            m.velocity = m.velocity + impulse * w;
        }
    }

    pub fn apply_torque(&mut self, torque: f32) {
        let w = self.inv_mass();
        if let Motion::Planar(m) = &mut self.motion {
            m.angular_velocity += torque * w;
        }
    }

    /// Force applied off-center also produces torque from the offset.
    pub fn apply_force_at_point(&mut self, force: Vec2, point: Vec2) {
        let w = self.inv_mass();
        if let Motion::Planar(m) = &mut self.motion {
            let r = point - m.position;
            m.acceleration = m.acceleration + force * w;
            let torque = r.x * force.y - r.y * force.x;
            m.angular_velocity += torque * w;
        }
    }

    pub fn apply_force_3d(&mut self, force: Vec3) {
        let w = self.inv_mass();
        if let Motion::Spatial(m) = &mut self.motion {
            m.acceleration = m.acceleration + force * w;
        }
    }

    pub fn apply_impulse_3d(&mut self, impulse: Vec3) {
        let w = self.inv_mass();
        if let Motion::Spatial(m) = &mut self.motion {
            m.velocity = m.velocity + impulse * w;
        }
    }

    pub fn apply_torque_3d(&mut self, torque: Vec3) {
        let w = self.inv_mass();
        if let Motion::Spatial(m) = &mut self.motion {
            m.angular_velocity = m.angular_velocity + torque * w;
        }
    }

    pub fn apply_force_at_point_3d(&mut self, force: Vec3, point: Vec3) {
        let w = self.inv_mass();
        if let Motion::Spatial(m) = &mut self.motion {
            let r = point - m.position;
            m.acceleration = m.acceleration + force * w;
            let torque = r.cross(force);
            m.angular_velocity = m.angular_velocity + torque * w;
        }
    }
}

/// Mutable access to two distinct bodies by id.
///
/// Returns `None` when either id is missing or both ids are equal, which
/// makes joint and contact resolution no-ops for stale references.
pub(crate) fn pair_by_id_mut(
    bodies: &mut [RigidBody],
    a: u32,
    b: u32,
) -> Option<(&mut RigidBody, &mut RigidBody)> {
    if a == b {
        return None;
    }
    let ia = bodies.iter().position(|body| body.id == a)?;
    let ib = bodies.iter().position(|body| body.id == b)?;
    if ia < ib {
        let (left, right) = bodies.split_at_mut(ib);
        Some((&mut left[ia], &mut right[0]))
    } else {
        let (left, right) = bodies.split_at_mut(ia);
        Some((&mut right[0], &mut left[ib]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn static_bodies_have_zero_mass_and_zero_inverse_mass() {
        let body = RigidBody::new(1, BodyKind::Static, Vec2::zero());
        assert_eq!(body.mass, 0.0);
        assert_eq!(body.inv_mass(), 0.0);
    }

    #[test]
    fn kinematic_bodies_have_zero_inverse_mass() {
        let body = RigidBody::new(1, BodyKind::Kinematic, Vec2::zero());
        assert_eq!(body.mass, 1.0);
        assert_eq!(body.inv_mass(), 0.0);
    }

    #[test]
    fn forces_are_noops_on_non_dynamic_bodies() {
        let mut body = RigidBody::new(1, BodyKind::Static, Vec2::new(5.0, 5.0));
        body.apply_force(Vec2::new(100.0, 0.0));
        body.apply_impulse(Vec2::new(100.0, 0.0));
        body.apply_torque(3.0);
        let m = body.planar().unwrap();
        assert_eq!(m.acceleration, Vec2::zero());
        assert_eq!(m.velocity, Vec2::zero());
        assert_eq!(m.angular_velocity, 0.0);
    }

    #[test]
    fn force_at_point_produces_torque_from_offset() {
        let mut body = RigidBody::new(1, BodyKind::Dynamic, Vec2::zero());
        body.apply_force_at_point(Vec2::new(0.0, 2.0), Vec2::new(1.0, 0.0));
        let m = body.planar().unwrap();
        // r x F with r = (1, 0), F = (0, 2) -> torque 2
        assert_eq!(m.angular_velocity, 2.0);
        assert_eq!(m.acceleration, Vec2::new(0.0, 2.0));
    }

    #[test]
    fn planar_force_does_not_touch_spatial_body() {
        let mut body = RigidBody::new_spatial(1, BodyKind::Dynamic, Vec3::zero());
        body.apply_force(Vec2::new(10.0, 0.0));
        assert_eq!(body.spatial().unwrap().acceleration, Vec3::zero());
    }

    #[test]
    fn pair_lookup_rejects_equal_and_missing_ids() {
        let mut bodies = vec![
            RigidBody::new(1, BodyKind::Dynamic, Vec2::zero()),
            RigidBody::new(2, BodyKind::Dynamic, Vec2::zero()),
        ];
        assert!(pair_by_id_mut(&mut bodies, 1, 1).is_none());
        assert!(pair_by_id_mut(&mut bodies, 1, 99).is_none());
        let (a, b) = pair_by_id_mut(&mut bodies, 2, 1).unwrap();
        assert_eq!(a.id, 2);
        assert_eq!(b.id, 1);
    }
}
