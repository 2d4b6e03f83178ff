use crate::systems::collision::{collect_contacts, resolve_contact};
use crate::systems::joints::resolve_joint;
use crate::systems::rigid_body::{pair_by_id_mut, BodyKind, Motion, Vec2, Vec3};

use super::{PerfTimer, WorldCore};

/// One fixed tick: integrate, resolve joints, detect collisions, resolve
/// collisions. Each contact is resolved exactly once; there is no
/// relaxation loop.
pub(super) fn step(world: &mut WorldCore) {
    let perf_on = world.perf_enabled;
    if perf_on {
        world.perf_stats.reset();
        world.perf_stats.body_count = world.bodies.len() as u32;
        world.perf_stats.joint_count = world.joints.len() as u32;
        let n = world.bodies.len() as u32;
        world.perf_stats.pair_tests = n.saturating_mul(n.saturating_sub(1)) / 2;
    }
    let step_start = if perf_on { Some(PerfTimer::start()) } else { None };

    // === INTEGRATION ===
    if perf_on {
        let t0 = PerfTimer::start();
        integrate(world);
        world.perf_stats.integrate_ms = t0.elapsed_ms();
    } else {
        integrate(world);
    }

    // === JOINTS ===
    if perf_on {
        let t0 = PerfTimer::start();
        resolve_joints(world);
        world.perf_stats.joints_ms = t0.elapsed_ms();
    } else {
        resolve_joints(world);
    }

    // === COLLISIONS ===
    let contacts = if perf_on {
        let t0 = PerfTimer::start();
        let contacts = collect_contacts(&world.bodies);
        world.perf_stats.detect_ms = t0.elapsed_ms();
        world.perf_stats.contacts = contacts.len() as u32;
        contacts
    } else {
        collect_contacts(&world.bodies)
    };

    if perf_on {
        let t0 = PerfTimer::start();
        resolve_contacts(world, &contacts);
        world.perf_stats.resolve_ms = t0.elapsed_ms();
    } else {
        resolve_contacts(world, &contacts);
    }

    if perf_on {
        world.perf_stats.sleeping_bodies = world
            .bodies
            .iter()
            .filter(|body| body.sleeping)
            .count() as u32;
        if let Some(start) = step_start {
            world.perf_stats.step_ms = start.elapsed_ms();
        }
    }
}

/// Semi-implicit Euler over every awake DYNAMIC body: gravity into
/// acceleration, velocity first, position from the new velocity, then
/// the sleep check.
fn integrate(world: &mut WorldCore) {
    let gravity = world.gravity;
    let dt = world.time_step;

    for body in world.bodies.iter_mut() {
        if body.kind != BodyKind::Dynamic || body.sleeping {
            continue;
        }

        match &mut body.motion {
            Motion::Planar(m) => {
                m.acceleration = m.acceleration + gravity;
                m.velocity = m.velocity + m.acceleration * dt;
                m.position = m.position + m.velocity * dt;
                m.rotation += m.angular_velocity * dt;
                m.acceleration = Vec2::zero();

                if m.velocity.length() < body.sleep_threshold {
                    body.sleeping = true;
                }
            }
            Motion::Spatial(m) => {
                // Gravity lives in the plane; z is driven by forces only.
                m.acceleration = m.acceleration + Vec3::new(gravity.x, gravity.y, 0.0);
                m.velocity = m.velocity + m.acceleration * dt;
                m.position = m.position + m.velocity * dt;
                m.rotation = m.rotation + m.angular_velocity * dt;
                m.acceleration = Vec3::zero();

                if m.velocity.length() < body.sleep_threshold {
                    body.sleeping = true;
                }
            }
        }
    }
}

/// Registration order, active joints only. Pairs with missing or equal
/// body ids resolve to nothing.
fn resolve_joints(world: &mut WorldCore) {
    for joint in world.joints.iter() {
        if !joint.active {
            continue;
        }
        if let Some((a, b)) = pair_by_id_mut(&mut world.bodies, joint.body_a, joint.body_b) {
            resolve_joint(a, b, joint);
        }
    }
}

fn resolve_contacts(world: &mut WorldCore, contacts: &[crate::systems::collision::Contact]) {
    for contact in contacts {
        if let Some((a, b)) = pair_by_id_mut(&mut world.bodies, contact.body_a, contact.body_b) {
            resolve_contact(a, b, contact);
        }
    }
}
