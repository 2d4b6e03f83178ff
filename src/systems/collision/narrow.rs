//! Narrow-phase collision detection.
//!
//! Every unordered pair of bodies is tested once per step (all-pairs,
//! no broad phase). Dispatch is by shape combination and exactly six
//! combinations are implemented: circle-circle, rectangle-rectangle,
//! circle-rectangle, sphere-sphere, box-box and sphere-box. Bodies of
//! mismatched dimensionality never collide.

use crate::systems::rigid_body::{RigidBody, Shape, Vec2};

use super::contact::Contact;
use super::narrow3d;

/// Test a single pair. `None` means no contact (including every pair
/// combination that has no implemented test).
pub fn detect_pair(a: &RigidBody, b: &RigidBody) -> Option<Contact> {
    if a.is_3d() != b.is_3d() {
        return None;
    }
    match (&a.shape, &b.shape) {
        (Shape::Circle { .. }, Shape::Circle { .. }) => circle_circle(a, b),
        (Shape::Rectangle { .. }, Shape::Rectangle { .. }) => rect_rect(a, b),
        (Shape::Circle { .. }, Shape::Rectangle { .. }) => circle_rect(a, b),
        (Shape::Rectangle { .. }, Shape::Circle { .. }) => circle_rect(b, a),
        (Shape::Sphere { .. }, Shape::Sphere { .. }) => narrow3d::sphere_sphere(a, b),
        (Shape::Box3 { .. }, Shape::Box3 { .. }) => narrow3d::box_box(a, b),
        (Shape::Sphere { .. }, Shape::Box3 { .. }) => narrow3d::sphere_box(a, b),
        (Shape::Box3 { .. }, Shape::Sphere { .. }) => narrow3d::sphere_box(b, a),
        _ => None,
    }
}

/// All-pairs scan. O(n²) is fine at scripting-sandbox body counts; a
/// broad phase would slot in here if counts ever grow.
pub fn collect_contacts(bodies: &[RigidBody]) -> Vec<Contact> {
    let mut contacts = Vec::new();
    for i in 0..bodies.len() {
        for j in (i + 1)..bodies.len() {
            if let Some(contact) = detect_pair(&bodies[i], &bodies[j]) {
                contacts.push(contact);
            }
        }
    }
    contacts
}

fn circle_circle(a: &RigidBody, b: &RigidBody) -> Option<Contact> {
    let (Shape::Circle { radius: ra }, Shape::Circle { radius: rb }) = (&a.shape, &b.shape) else {
        return None;
    };

    let delta = b.position_xy() - a.position_xy();
    let dist = delta.length();
    let min_dist = ra + rb;
    if dist >= min_dist {
        return None;
    }

    let normal = delta.normalize();
    let (restitution, friction) = Contact::materials(a, b);
    Some(Contact {
        body_a: a.id,
        body_b: b.id,
        point: a.position_xy() + normal * *ra,
        normal,
        penetration: min_dist - dist,
        restitution,
        friction,
    })
}

fn rect_rect(a: &RigidBody, b: &RigidBody) -> Option<Contact> {
    let (Shape::Rectangle { size: sa }, Shape::Rectangle { size: sb }) = (&a.shape, &b.shape)
    else {
        return None;
    };

    let pa = a.position_xy();
    let pb = b.position_xy();

    let a_left = pa.x - sa.x / 2.0;
    let a_right = pa.x + sa.x / 2.0;
    let a_top = pa.y - sa.y / 2.0;
    let a_bottom = pa.y + sa.y / 2.0;

    let b_left = pb.x - sb.x / 2.0;
    let b_right = pb.x + sb.x / 2.0;
    let b_top = pb.y - sb.y / 2.0;
    let b_bottom = pb.y + sb.y / 2.0;

    if !(a_left < b_right && a_right > b_left && a_top < b_bottom && a_bottom > b_top) {
        return None;
    }

    let overlap_x = (a_right - b_left).min(b_right - a_left);
    let overlap_y = (a_bottom - b_top).min(b_bottom - a_top);

    // Separate along the smaller overlap; ties go to x. The normal points
    // toward body A's non-penetrating side.
    let (penetration, normal) = if overlap_x <= overlap_y {
        (overlap_x, Vec2::new(if pa.x < pb.x { -1.0 } else { 1.0 }, 0.0))
    } else {
        (overlap_y, Vec2::new(0.0, if pa.y < pb.y { -1.0 } else { 1.0 }))
    };

    let (restitution, friction) = Contact::materials(a, b);
    Some(Contact {
        body_a: a.id,
        body_b: b.id,
        point: (pa + pb) * 0.5,
        normal,
        penetration,
        restitution,
        friction,
    })
}

/// `circle` is always reported as body A of the contact; the dispatcher
/// swaps arguments for the mirrored pair.
fn circle_rect(circle: &RigidBody, rect: &RigidBody) -> Option<Contact> {
    let (Shape::Circle { radius }, Shape::Rectangle { size }) = (&circle.shape, &rect.shape)
    else {
        return None;
    };

    let pc = circle.position_xy();
    let pr = rect.position_xy();

    // Closest point on the rectangle to the circle center.
    let closest = Vec2::new(
        pc.x.clamp(pr.x - size.x / 2.0, pr.x + size.x / 2.0),
        pc.y.clamp(pr.y - size.y / 2.0, pr.y + size.y / 2.0),
    );

    let delta = pc - closest;
    let dist = delta.length();
    if dist >= *radius {
        return None;
    }

    // A center exactly on the closest point yields a zero normal and
    // therefore a zero impulse downstream; accepted degenerate case.
    let (restitution, friction) = Contact::materials(circle, rect);
    Some(Contact {
        body_a: circle.id,
        body_b: rect.id,
        point: closest,
        normal: delta.normalize(),
        penetration: radius - dist,
        restitution,
        friction,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::systems::rigid_body::BodyKind;

    fn circle(id: u32, x: f32, y: f32, radius: f32) -> RigidBody {
        let mut body = RigidBody::new(id, BodyKind::Dynamic, Vec2::new(x, y));
        body.shape = Shape::Circle { radius };
        body
    }

    fn rect(id: u32, x: f32, y: f32, w: f32, h: f32) -> RigidBody {
        let mut body = RigidBody::new(id, BodyKind::Dynamic, Vec2::new(x, y));
        body.shape = Shape::Rectangle { size: Vec2::new(w, h) };
        body
    }

    #[test]
    fn overlapping_circles_collide_with_exact_contact_data() {
        let a = circle(1, 0.0, 0.0, 5.0);
        let b = circle(2, 8.0, 0.0, 5.0);
        let contact = detect_pair(&a, &b).expect("circles overlap");
        assert!((contact.penetration - 2.0).abs() < 1e-6);
        assert_eq!(contact.normal, Vec2::new(1.0, 0.0));
        assert_eq!(contact.point, Vec2::new(5.0, 0.0));
    }

    #[test]
    fn separated_circles_do_not_collide() {
        let a = circle(1, 0.0, 0.0, 5.0);
        let b = circle(2, 11.0, 0.0, 5.0);
        assert!(detect_pair(&a, &b).is_none());
    }

    #[test]
    fn touching_circles_do_not_collide() {
        let a = circle(1, 0.0, 0.0, 5.0);
        let b = circle(2, 10.0, 0.0, 5.0);
        assert!(detect_pair(&a, &b).is_none());
    }

    #[test]
    fn combined_materials_use_min_restitution_and_sqrt_friction() {
        let mut a = circle(1, 0.0, 0.0, 5.0);
        let mut b = circle(2, 4.0, 0.0, 5.0);
        a.restitution = 0.8;
        b.restitution = 0.2;
        a.friction = 0.4;
        b.friction = 0.9;
        let contact = detect_pair(&a, &b).unwrap();
        assert!((contact.restitution - 0.2).abs() < 1e-6);
        assert!((contact.friction - (0.4f32 * 0.9).sqrt()).abs() < 1e-6);
    }

    #[test]
    fn rect_rect_picks_smaller_overlap_axis() {
        // Wide horizontal overlap, shallow vertical overlap -> y axis.
        let a = rect(1, 0.0, 0.0, 10.0, 10.0);
        let b = rect(2, 1.0, 9.0, 10.0, 10.0);
        let contact = detect_pair(&a, &b).unwrap();
        assert_eq!(contact.normal, Vec2::new(0.0, -1.0));
        assert!((contact.penetration - 1.0).abs() < 1e-6);
    }

    #[test]
    fn rect_rect_tie_goes_to_x_axis() {
        let a = rect(1, 0.0, 0.0, 10.0, 10.0);
        let b = rect(2, 9.0, 9.0, 10.0, 10.0);
        let contact = detect_pair(&a, &b).unwrap();
        assert_eq!(contact.normal, Vec2::new(-1.0, 0.0));
    }

    #[test]
    fn circle_rect_contact_is_closest_point() {
        let c = circle(1, 0.0, 0.0, 5.0);
        let r = rect(2, 7.0, 0.0, 6.0, 6.0);
        // Closest point on the rect is (4, 0), distance 4 < radius 5.
        let contact = detect_pair(&c, &r).unwrap();
        assert_eq!(contact.point, Vec2::new(4.0, 0.0));
        assert_eq!(contact.normal, Vec2::new(-1.0, 0.0));
        assert!((contact.penetration - 1.0).abs() < 1e-6);
    }

    #[test]
    fn mirrored_circle_rect_reports_circle_as_body_a() {
        let c = circle(7, 0.0, 0.0, 5.0);
        let r = rect(3, 7.0, 0.0, 6.0, 6.0);
        let contact = detect_pair(&r, &c).unwrap();
        assert_eq!(contact.body_a, 7);
        assert_eq!(contact.body_b, 3);
    }

    #[test]
    fn unimplemented_shape_pairs_never_collide() {
        let mut a = circle(1, 0.0, 0.0, 5.0);
        a.shape = Shape::Polygon {
            vertices: vec![Vec2::zero(), Vec2::new(1.0, 0.0), Vec2::new(0.0, 1.0)],
        };
        let b = circle(2, 0.0, 0.0, 5.0);
        assert!(detect_pair(&a, &b).is_none());
    }

    #[test]
    fn collect_contacts_tests_each_pair_once() {
        let bodies = vec![
            circle(1, 0.0, 0.0, 5.0),
            circle(2, 4.0, 0.0, 5.0),
            circle(3, 100.0, 0.0, 5.0),
        ];
        let contacts = collect_contacts(&bodies);
        assert_eq!(contacts.len(), 1);
        assert_eq!((contacts[0].body_a, contacts[0].body_b), (1, 2));
    }
}
