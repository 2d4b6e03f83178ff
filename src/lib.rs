//! Kinetica Engine - rigid body physics for the scripting sandbox
//!
//! Architecture:
//! - domain/      - Presets and serialized definitions
//! - systems/     - Physics algorithms (bodies, collision, joints)
//! - simulation/  - World orchestration and the scripting facade
//!
//! The scripting language drives the engine through the `World` facade:
//! named commands with flat scalar and id arguments, one fixed `step()`
//! per tick. All state stays inside the world; scripts only ever hold
//! integer ids.

pub mod domain;
pub mod simulation;
pub mod systems;

pub mod world {
    pub use crate::simulation::*;
}

// Compatibility re-exports (keeps call sites short)
pub use systems::collision;
pub use systems::joints;
pub use systems::rigid_body;

use wasm_bindgen::prelude::*;

// Better error messages in debug mode
#[cfg(feature = "console_error_panic_hook")]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Initialize the engine
#[wasm_bindgen]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    set_panic_hook();

    web_sys::console::log_1(&"🦀 Kinetica physics engine initialized!".into());
}

/// Get engine version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

// Re-export main types
pub use simulation::{PerfStats, World, WorldCore};
pub use systems::rigid_body::{
    BodyKind, JointKind, Motion, PhysicsJoint, RigidBody, Shape, Vec2, Vec3,
};

// Export kind codes for JS. Ordinal positions are a stable contract:
// scripts pass these as raw integers.
#[wasm_bindgen]
pub fn body_static() -> u32 { BodyKind::Static.code() }
#[wasm_bindgen]
pub fn body_dynamic() -> u32 { BodyKind::Dynamic.code() }
#[wasm_bindgen]
pub fn body_kinematic() -> u32 { BodyKind::Kinematic.code() }

#[wasm_bindgen]
pub fn joint_pin() -> u32 { JointKind::Pin.code() }
#[wasm_bindgen]
pub fn joint_spring() -> u32 { JointKind::Spring.code() }
#[wasm_bindgen]
pub fn joint_distance() -> u32 { JointKind::Distance.code() }
#[wasm_bindgen]
pub fn joint_revolute() -> u32 { JointKind::Revolute.code() }
#[wasm_bindgen]
pub fn joint_prismatic() -> u32 { JointKind::Prismatic.code() }
#[wasm_bindgen]
pub fn joint_ball_socket() -> u32 { JointKind::BallSocket.code() }
#[wasm_bindgen]
pub fn joint_hinge() -> u32 { JointKind::Hinge.code() }
#[wasm_bindgen]
pub fn joint_slider() -> u32 { JointKind::Slider.code() }
#[wasm_bindgen]
pub fn joint_universal() -> u32 { JointKind::Universal.code() }
#[wasm_bindgen]
pub fn joint_fixed() -> u32 { JointKind::Fixed.code() }
