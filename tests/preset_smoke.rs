use kinetica_engine::world::WorldCore;

#[test]
fn preset_smoke_parses_and_populates() {
    let json = r#"{
        "gravity": [0.0, 9.81],
        "timeStep": 0.016666668,
        "bodies": [
            {"kind": 0, "position": [0.0, 40.0], "shape": {"type": "rectangle", "width": 100.0, "height": 4.0}},
            {"kind": 1, "position": [0.0, 0.0], "shape": {"type": "circle", "radius": 3.0}, "restitution": 0.6},
            {"kind": 1, "position": [10.0, 0.0], "shape": {"type": "circle", "radius": 3.0}}
        ],
        "joints": [
            {"kind": "spring", "a": 1, "b": 2, "stiffness": 60.0, "damping": 2.0}
        ]
    }"#;

    let mut world = WorldCore::new();
    world.load_preset_json(json).expect("preset should parse and apply");

    assert_eq!(world.body_count(), 3);
    assert_eq!(world.joint_count(), 1);

    let manifest = world.manifest_json();
    assert!(manifest.contains("\"bodies\":3"));
    assert!(manifest.contains("\"joints\":1"));

    // The populated world must actually simulate.
    for _ in 0..10 {
        world.step();
    }
}

#[test]
fn malformed_preset_reports_an_error() {
    let mut world = WorldCore::new();
    assert!(world.load_preset_json("{ not json").is_err());
    assert!(world
        .load_preset_json(r#"{"bodies": [{"kind": 9, "position": [0, 0]}]}"#)
        .is_err());
    assert_eq!(world.body_count(), 0);
}
