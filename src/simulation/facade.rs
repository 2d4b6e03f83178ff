use wasm_bindgen::prelude::*;

use crate::systems::rigid_body::{BodyKind, Vec2, Vec3};

use super::perf_stats::PerfStats;
use super::WorldCore;

/// Scripting-facing physics world.
///
/// Every command takes flat scalars and ids; kind arguments are the
/// ordinal codes exported from lib.rs (`body_static()` etc.), and 0 is
/// the failure sentinel for creators. Argument validation happens here,
/// at the boundary - the core itself answers bad ids with silent no-ops.
#[wasm_bindgen]
pub struct World {
    core: WorldCore,
}

impl Default for World {
    fn default() -> Self {
        Self::new()
    }
}

#[wasm_bindgen]
impl World {
    /// Create a world with default gravity (0, 9.81) and a 60 Hz timestep.
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self { core: WorldCore::new() }
    }

    pub fn set_gravity(&mut self, x: f32, y: f32) {
        self.core.set_gravity(x, y);
    }

    pub fn set_time_step(&mut self, step: f32) {
        if step > 0.0 {
            self.core.set_time_step(step);
        }
    }

    /// Enable or disable per-step perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        self.core.enable_perf_metrics(enabled);
    }

    /// Get last step perf snapshot (zeros when perf disabled)
    pub fn get_perf_stats(&self) -> PerfStats {
        self.core.get_perf_stats()
    }

    /// Load a JSON preset: gravity, timestep, initial bodies and joints.
    pub fn load_preset(&mut self, json: String) -> Result<(), JsValue> {
        self.core
            .load_preset_json(&json)
            .map_err(|e| JsValue::from_str(&e))?;
        Ok(())
    }

    /// Current settings and object counts as JSON.
    pub fn manifest_json(&self) -> String {
        self.core.manifest_json()
    }

    // === BODY LIFECYCLE ===

    /// Create a planar body. `kind` is an ordinal code; unknown codes
    /// return 0.
    pub fn create_body(&mut self, kind: u32, x: f32, y: f32) -> u32 {
        match BodyKind::from_code(kind) {
            Some(kind) => self.core.create_body(kind, x, y),
            None => 0,
        }
    }

    /// Create a spatial body. Same code contract as `create_body`.
    pub fn create_body_3d(&mut self, kind: u32, x: f32, y: f32, z: f32) -> u32 {
        match BodyKind::from_code(kind) {
            Some(kind) => self.core.create_body_3d(kind, x, y, z),
            None => 0,
        }
    }

    pub fn remove_body(&mut self, id: u32) {
        self.core.remove_body(id);
    }

    /// Remove every body and joint (ids are not recycled).
    pub fn clear(&mut self) {
        self.core.clear();
    }

    // === BODY PROPERTIES ===

    pub fn set_body_position(&mut self, id: u32, x: f32, y: f32) {
        self.core.set_body_position(id, x, y);
    }

    pub fn set_body_velocity(&mut self, id: u32, x: f32, y: f32) {
        self.core.set_body_velocity(id, x, y);
    }

    pub fn set_body_rotation(&mut self, id: u32, rotation: f32) {
        self.core.set_body_rotation(id, rotation);
    }

    pub fn set_body_position_3d(&mut self, id: u32, x: f32, y: f32, z: f32) {
        self.core.set_body_position_3d(id, x, y, z);
    }

    pub fn set_body_velocity_3d(&mut self, id: u32, x: f32, y: f32, z: f32) {
        self.core.set_body_velocity_3d(id, x, y, z);
    }

    pub fn set_body_rotation_3d(&mut self, id: u32, x: f32, y: f32, z: f32) {
        self.core.set_body_rotation_3d(id, x, y, z);
    }

    pub fn set_body_angular_velocity_3d(&mut self, id: u32, x: f32, y: f32, z: f32) {
        self.core.set_body_angular_velocity_3d(id, x, y, z);
    }

    pub fn set_body_mass(&mut self, id: u32, mass: f32) {
        self.core.set_body_mass(id, mass);
    }

    pub fn set_body_friction(&mut self, id: u32, friction: f32) {
        self.core.set_body_friction(id, friction);
    }

    pub fn set_body_restitution(&mut self, id: u32, restitution: f32) {
        self.core.set_body_restitution(id, restitution);
    }

    pub fn set_body_density(&mut self, id: u32, density: f32) {
        self.core.set_body_density(id, density);
    }

    // === SHAPES ===

    pub fn set_circle_shape(&mut self, id: u32, radius: f32) {
        self.core.set_circle_shape(id, radius);
    }

    pub fn set_rectangle_shape(&mut self, id: u32, width: f32, height: f32) {
        self.core.set_rectangle_shape(id, width, height);
    }

    /// Vertices come in as a flat [x0, y0, x1, y1, ...] buffer; a
    /// trailing odd coordinate is ignored.
    pub fn set_polygon_shape(&mut self, id: u32, vertices: &[f32]) {
        let vertices = vertices
            .chunks_exact(2)
            .map(|pair| Vec2::new(pair[0], pair[1]))
            .collect();
        self.core.set_polygon_shape(id, vertices);
    }

    pub fn set_sphere_shape(&mut self, id: u32, radius: f32) {
        self.core.set_sphere_shape(id, radius);
    }

    pub fn set_box_shape(&mut self, id: u32, width: f32, height: f32, depth: f32) {
        self.core.set_box_shape(id, width, height, depth);
    }

    pub fn set_capsule_shape(&mut self, id: u32, radius: f32, height: f32) {
        self.core.set_capsule_shape(id, radius, height);
    }

    /// Flat [x0, y0, z0, x1, ...] buffer, incomplete triples ignored.
    pub fn set_mesh_shape(&mut self, id: u32, vertices: &[f32]) {
        let vertices = vertices
            .chunks_exact(3)
            .map(|triple| Vec3::new(triple[0], triple[1], triple[2]))
            .collect();
        self.core.set_mesh_shape(id, vertices);
    }

    // === FORCES ===

    pub fn apply_force(&mut self, id: u32, x: f32, y: f32) {
        self.core.apply_force(id, x, y);
    }

    pub fn apply_impulse(&mut self, id: u32, x: f32, y: f32) {
        self.core.apply_impulse(id, x, y);
    }

    pub fn apply_torque(&mut self, id: u32, torque: f32) {
        self.core.apply_torque(id, torque);
    }

    pub fn apply_force_at_point(&mut self, id: u32, fx: f32, fy: f32, px: f32, py: f32) {
        self.core.apply_force_at_point(id, fx, fy, px, py);
    }

    pub fn apply_force_3d(&mut self, id: u32, x: f32, y: f32, z: f32) {
        self.core.apply_force_3d(id, x, y, z);
    }

    pub fn apply_impulse_3d(&mut self, id: u32, x: f32, y: f32, z: f32) {
        self.core.apply_impulse_3d(id, x, y, z);
    }

    pub fn apply_torque_3d(&mut self, id: u32, x: f32, y: f32, z: f32) {
        self.core.apply_torque_3d(id, x, y, z);
    }

    #[allow(clippy::too_many_arguments)]
    pub fn apply_force_at_point_3d(
        &mut self,
        id: u32,
        fx: f32,
        fy: f32,
        fz: f32,
        px: f32,
        py: f32,
        pz: f32,
    ) {
        self.core.apply_force_at_point_3d(id, fx, fy, fz, px, py, pz);
    }

    // === JOINTS ===

    pub fn create_pin_joint(&mut self, body_a: u32, body_b: u32, x: f32, y: f32) -> u32 {
        self.core.create_pin_joint(body_a, body_b, x, y)
    }

    pub fn create_spring_joint(
        &mut self,
        body_a: u32,
        body_b: u32,
        stiffness: f32,
        damping: f32,
    ) -> u32 {
        self.core.create_spring_joint(body_a, body_b, stiffness, damping)
    }

    pub fn create_distance_joint(&mut self, body_a: u32, body_b: u32, length: f32) -> u32 {
        self.core.create_distance_joint(body_a, body_b, length)
    }

    pub fn create_revolute_joint(&mut self, body_a: u32, body_b: u32, x: f32, y: f32) -> u32 {
        self.core.create_revolute_joint(body_a, body_b, x, y)
    }

    pub fn create_prismatic_joint(&mut self, body_a: u32, body_b: u32, x: f32, y: f32) -> u32 {
        self.core.create_prismatic_joint(body_a, body_b, x, y)
    }

    pub fn create_ball_socket_joint(
        &mut self,
        body_a: u32,
        body_b: u32,
        x: f32,
        y: f32,
        z: f32,
    ) -> u32 {
        self.core.create_ball_socket_joint(body_a, body_b, x, y, z)
    }

    #[allow(clippy::too_many_arguments)]
    pub fn create_hinge_joint(
        &mut self,
        body_a: u32,
        body_b: u32,
        ax: f32,
        ay: f32,
        az: f32,
        axis_x: f32,
        axis_y: f32,
        axis_z: f32,
    ) -> u32 {
        self.core
            .create_hinge_joint(body_a, body_b, ax, ay, az, axis_x, axis_y, axis_z)
    }

    pub fn create_slider_joint(&mut self, body_a: u32, body_b: u32, x: f32, y: f32, z: f32) -> u32 {
        self.core.create_slider_joint(body_a, body_b, x, y, z)
    }

    pub fn create_universal_joint(
        &mut self,
        body_a: u32,
        body_b: u32,
        x: f32,
        y: f32,
        z: f32,
    ) -> u32 {
        self.core.create_universal_joint(body_a, body_b, x, y, z)
    }

    pub fn create_fixed_joint(&mut self, body_a: u32, body_b: u32) -> u32 {
        self.core.create_fixed_joint(body_a, body_b)
    }

    pub fn remove_joint(&mut self, id: u32) {
        self.core.remove_joint(id);
    }

    pub fn set_joint_active(&mut self, id: u32, active: bool) {
        self.core.set_joint_active(id, active);
    }

    // === SIMULATION ===

    /// Advance one fixed tick.
    pub fn step(&mut self) {
        self.core.step();
    }

    /// Advance by a frame delta; fractional remainders below one
    /// timestep are dropped (no carry-over between calls).
    pub fn update(&mut self, delta_time: f32) {
        self.core.update(delta_time);
    }

    // === QUERIES ===

    /// X component of the body position. The y (and z) components are
    /// separate calls; this asymmetry is part of the scripting contract.
    pub fn get_body_position(&self, id: u32) -> f32 {
        self.core.body_position(id).x
    }

    pub fn get_body_position_y(&self, id: u32) -> f32 {
        self.core.body_position(id).y
    }

    /// Z component; 0 for planar bodies.
    pub fn get_body_position_z(&self, id: u32) -> f32 {
        self.core.body_position_3d(id).z
    }

    pub fn get_body_velocity_x(&self, id: u32) -> f32 {
        self.core.body_velocity(id).x
    }

    pub fn get_body_velocity_y(&self, id: u32) -> f32 {
        self.core.body_velocity(id).y
    }

    pub fn get_body_rotation(&self, id: u32) -> f32 {
        self.core.body_rotation(id)
    }

    pub fn check_collision(&self, body_a: u32, body_b: u32) -> bool {
        self.core.check_collision(body_a, body_b)
    }

    #[wasm_bindgen(getter)]
    pub fn body_count(&self) -> u32 {
        self.core.body_count() as u32
    }

    #[wasm_bindgen(getter)]
    pub fn joint_count(&self) -> u32 {
        self.core.joint_count() as u32
    }
}
