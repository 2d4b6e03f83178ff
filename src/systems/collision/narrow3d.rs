//! Narrow-phase tests for spatial (3D) shape pairs.
//!
//! Overlap is tested on the full 3D extents, but the resulting normal and
//! contact point are projected onto the x-y plane (z discarded) so the
//! planar resolution path is reused unchanged. A fully 3D resolver would
//! have to replace these projections wholesale.

use crate::systems::rigid_body::{RigidBody, Shape, Vec2, Vec3};

use super::contact::Contact;

pub(super) fn sphere_sphere(a: &RigidBody, b: &RigidBody) -> Option<Contact> {
    let (Shape::Sphere { radius: ra }, Shape::Sphere { radius: rb }) = (&a.shape, &b.shape) else {
        return None;
    };
    let (ma, mb) = (a.spatial()?, b.spatial()?);

    let delta = mb.position - ma.position;
    let dist = delta.length();
    let min_dist = ra + rb;
    if dist >= min_dist {
        return None;
    }

    let normal = Vec2::new(delta.x, delta.y).normalize();
    let (restitution, friction) = Contact::materials(a, b);
    Some(Contact {
        body_a: a.id,
        body_b: b.id,
        point: Vec2::new(ma.position.x, ma.position.y) + normal * *ra,
        normal,
        penetration: min_dist - dist,
        restitution,
        friction,
    })
}

pub(super) fn box_box(a: &RigidBody, b: &RigidBody) -> Option<Contact> {
    let (Shape::Box3 { size: sa }, Shape::Box3 { size: sb }) = (&a.shape, &b.shape) else {
        return None;
    };
    let (ma, mb) = (a.spatial()?, b.spatial()?);

    let a_min = ma.position - *sa * 0.5;
    let a_max = ma.position + *sa * 0.5;
    let b_min = mb.position - *sb * 0.5;
    let b_max = mb.position + *sb * 0.5;

    // Inclusive on all six faces: touching boxes count as overlapping.
    if !(a_max.x >= b_min.x
        && a_min.x <= b_max.x
        && a_max.y >= b_min.y
        && a_min.y <= b_max.y
        && a_max.z >= b_min.z
        && a_min.z <= b_max.z)
    {
        return None;
    }

    let penetration = (a_max.x - b_min.x)
        .min(b_max.x - a_min.x)
        .min(a_max.y - b_min.y)
        .min(b_max.y - a_min.y)
        .min(a_max.z - b_min.z)
        .min(b_max.z - a_min.z);

    let (restitution, friction) = Contact::materials(a, b);
    Some(Contact {
        body_a: a.id,
        body_b: b.id,
        point: Vec2::new(
            (ma.position.x + mb.position.x) / 2.0,
            (ma.position.y + mb.position.y) / 2.0,
        ),
        // No separating-axis bookkeeping for boxes; a fixed up normal
        // stands in for the projected contact direction.
        normal: Vec2::new(0.0, 1.0),
        penetration,
        restitution,
        friction,
    })
}

/// `sphere` is always body A of the contact, mirroring the circle-rect
/// convention.
pub(super) fn sphere_box(sphere: &RigidBody, boxy: &RigidBody) -> Option<Contact> {
    let (Shape::Sphere { radius }, Shape::Box3 { size }) = (&sphere.shape, &boxy.shape) else {
        return None;
    };
    let (ms, mb) = (sphere.spatial()?, boxy.spatial()?);

    let closest = Vec3::new(
        ms.position.x.clamp(mb.position.x - size.x / 2.0, mb.position.x + size.x / 2.0),
        ms.position.y.clamp(mb.position.y - size.y / 2.0, mb.position.y + size.y / 2.0),
        ms.position.z.clamp(mb.position.z - size.z / 2.0, mb.position.z + size.z / 2.0),
    );

    let delta = ms.position - closest;
    let dist = delta.length();
    if dist >= *radius {
        return None;
    }

    let (restitution, friction) = Contact::materials(sphere, boxy);
    Some(Contact {
        body_a: sphere.id,
        body_b: boxy.id,
        point: Vec2::new(closest.x, closest.y),
        normal: Vec2::new(delta.x, delta.y).normalize(),
        penetration: radius - dist,
        restitution,
        friction,
    })
}
