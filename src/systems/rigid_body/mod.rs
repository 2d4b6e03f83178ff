//! Rigid bodies, joints and the vector math they share.
//!
//! Bodies carry their kinematic state as a `Motion` variant (planar or
//! spatial) behind one capability surface, so the rest of the crate never
//! branches on a dimensionality flag.

mod body;
mod joint;
mod vec2;
mod vec3;

pub use body::{BodyKind, Motion, Motion2, Motion3, RigidBody, Shape};
pub use joint::{JointKind, PhysicsJoint};
pub use vec2::Vec2;
pub use vec3::Vec3;

pub(crate) use body::pair_by_id_mut;
