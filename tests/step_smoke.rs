use kinetica_engine::{body_dynamic, body_static, World};

#[test]
fn smoke_step_with_perf_metrics() {
    let mut world = World::new();
    world.enable_perf_metrics(true);

    let floor = world.create_body(body_static(), 0.0, 50.0);
    world.set_rectangle_shape(floor, 200.0, 10.0);

    for i in 0..20 {
        let id = world.create_body(body_dynamic(), i as f32 * 12.0, 0.0);
        world.set_circle_shape(id, 5.0);
    }

    for _ in 0..60 {
        world.step();
    }

    let stats = world.get_perf_stats();
    assert!(stats.step_ms() >= 0.0);
    assert_eq!(stats.body_count(), 21);
    assert_eq!(stats.pair_tests(), 21 * 20 / 2);
}

#[test]
fn position_query_exposes_x_with_separate_y_call() {
    let mut world = World::new();
    world.set_gravity(0.0, 0.0);
    let id = world.create_body(body_dynamic(), 3.5, -7.25);

    assert_eq!(world.get_body_position(id), 3.5);
    assert_eq!(world.get_body_position_y(id), -7.25);
    // Planar bodies have no z.
    assert_eq!(world.get_body_position_z(id), 0.0);
}

#[test]
fn unknown_kind_code_fails_creation_with_zero() {
    let mut world = World::new();
    assert_eq!(world.create_body(42, 0.0, 0.0), 0);
    assert_eq!(world.body_count(), 0);
}

#[test]
fn stale_ids_are_silent_noops_across_the_facade() {
    let mut world = World::new();
    let id = world.create_body(body_dynamic(), 0.0, 0.0);
    world.remove_body(id);

    // None of these should panic or create state.
    world.set_body_position(id, 1.0, 1.0);
    world.apply_impulse(id, 1.0, 1.0);
    world.set_circle_shape(id, 1.0);
    world.step();

    assert_eq!(world.get_body_position(id), 0.0);
    assert_eq!(world.body_count(), 0);
}
