//! Impulse-based contact resolution.
//!
//! One sequential pass per step: positional correction first, then a
//! restitution impulse along the contact normal. Everything runs on the
//! x-y projection; spatial bodies keep their z state.

use crate::systems::rigid_body::RigidBody;

use super::contact::Contact;

/// Resolve a single contact between two bodies.
///
/// Both halves are weighted by inverse mass, so STATIC and KINEMATIC
/// bodies (inverse mass 0) never move and never absorb impulse, and a
/// pair with zero total inverse mass is left untouched.
pub fn resolve_contact(a: &mut RigidBody, b: &mut RigidBody, contact: &Contact) {
    let inv_a = a.inv_mass();
    let inv_b = b.inv_mass();
    let inv_sum = inv_a + inv_b;
    if inv_sum <= 0.0 {
        return;
    }

    // Positional correction: the heavier body moves less.
    let sep_a = contact.penetration * (inv_a / inv_sum);
    let sep_b = contact.penetration * (inv_b / inv_sum);
    a.translate_xy(-contact.normal * sep_a);
    b.translate_xy(contact.normal * sep_b);

    let rel = b.velocity_xy() - a.velocity_xy();
    let vel_along_normal = rel.dot(contact.normal);

    // Already separating: no bounce.
    if vel_along_normal > 0.0 {
        return;
    }

    let j = -(1.0 + contact.restitution) * vel_along_normal / inv_sum;
    let impulse = contact.normal * j;
    a.add_velocity_xy(-impulse * inv_a);
    b.add_velocity_xy(impulse * inv_b);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::systems::collision::narrow::detect_pair;
    use crate::systems::rigid_body::{BodyKind, Shape, Vec2};

    fn circle(id: u32, kind: BodyKind, x: f32, radius: f32) -> RigidBody {
        let mut body = RigidBody::new(id, kind, Vec2::new(x, 0.0));
        body.shape = Shape::Circle { radius };
        body
    }

    #[test]
    fn static_body_never_moves_and_impulse_stays_finite() {
        let mut wall = circle(1, BodyKind::Static, 0.0, 5.0);
        let mut ball = circle(2, BodyKind::Dynamic, 8.0, 5.0);
        ball.planar_mut().unwrap().velocity = Vec2::new(-3.0, 0.0);

        let contact = detect_pair(&wall, &ball).unwrap();
        resolve_contact(&mut wall, &mut ball, &contact);

        assert_eq!(wall.position_xy(), Vec2::zero());
        assert_eq!(wall.velocity_xy(), Vec2::zero());
        // The dynamic ball takes the entire correction and bounces.
        assert_eq!(ball.position_xy(), Vec2::new(10.0, 0.0));
        // Incoming speed 3 reflects to restitution * 3.
        let v = ball.velocity_xy();
        assert!(v.x.is_finite());
        assert!((v.x - 0.9).abs() < 1e-5);
    }

    #[test]
    fn correction_splits_by_inverse_mass() {
        let mut a = circle(1, BodyKind::Dynamic, 0.0, 5.0);
        let mut b = circle(2, BodyKind::Dynamic, 8.0, 5.0);
        a.mass = 1.0;
        b.mass = 2.0;

        let contact = detect_pair(&a, &b).unwrap();
        resolve_contact(&mut a, &mut b, &contact);

        // Penetration 2, heavier body moves less: a gets 2/3, b gets 1/3.
        assert!((a.position_xy().x - (-2.0 / 1.5)).abs() < 1e-5);
        assert!((b.position_xy().x - (8.0 + 2.0 / 3.0)).abs() < 1e-5);
    }

    #[test]
    fn separating_pair_gets_correction_but_no_impulse() {
        let mut a = circle(1, BodyKind::Dynamic, 0.0, 5.0);
        let mut b = circle(2, BodyKind::Dynamic, 8.0, 5.0);
        a.planar_mut().unwrap().velocity = Vec2::new(-1.0, 0.0);
        b.planar_mut().unwrap().velocity = Vec2::new(1.0, 0.0);

        let contact = detect_pair(&a, &b).unwrap();
        resolve_contact(&mut a, &mut b, &contact);

        assert_eq!(a.velocity_xy(), Vec2::new(-1.0, 0.0));
        assert_eq!(b.velocity_xy(), Vec2::new(1.0, 0.0));
    }

    #[test]
    fn two_static_bodies_are_left_untouched() {
        let mut a = circle(1, BodyKind::Static, 0.0, 5.0);
        let mut b = circle(2, BodyKind::Static, 8.0, 5.0);
        let contact = detect_pair(&a, &b).unwrap();
        resolve_contact(&mut a, &mut b, &contact);
        assert_eq!(a.position_xy(), Vec2::zero());
        assert_eq!(b.position_xy(), Vec2::new(8.0, 0.0));
    }
}
