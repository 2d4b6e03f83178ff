//! PhysicsWorld - rigid body simulation core.
//!
//! The world is the single owner of every body and joint. Everything
//! outside this module addresses them by integer id, so a script holding
//! a stale id gets silent no-ops instead of dangling references.
//!
//! Orchestration only: the actual algorithms live in systems/
//! (rigid_body, collision, joints) and the command modules below are
//! thin free functions over `WorldCore`.

use crate::domain::preset::WorldPreset;
use crate::systems::collision::Contact;
use crate::systems::rigid_body::{
    BodyKind, PhysicsJoint, RigidBody, Vec2, Vec3,
};

#[path = "perf/perf_timer.rs"]
mod perf_timer;
#[path = "perf/perf_stats.rs"]
mod perf_stats;
#[path = "commands/bodies.rs"]
mod bodies;
#[path = "commands/shapes.rs"]
mod shapes;
#[path = "commands/forces.rs"]
mod forces;
#[path = "commands/joints.rs"]
mod joints;
#[path = "init/init.rs"]
mod init;
#[path = "init/settings.rs"]
mod settings;
#[path = "step/step.rs"]
mod step;
#[path = "step/update.rs"]
mod update;
#[path = "queries/queries.rs"]
mod queries;
mod facade;

pub use facade::World;
pub use perf_stats::PerfStats;

use perf_timer::PerfTimer;

/// The simulation world
pub struct WorldCore {
    bodies: Vec<RigidBody>,
    joints: Vec<PhysicsJoint>,

    // Settings
    gravity: Vec2,
    time_step: f32,

    // State. Ids only count up and are never handed out twice, not even
    // after clear(), so stale script ids can never alias a new object.
    next_body_id: u32,
    next_joint_id: u32,

    // Perf metrics
    perf_enabled: bool,
    perf_stats: PerfStats,
}

impl WorldCore {
    /// Create an empty world: gravity (0, 9.81), 60 Hz timestep.
    pub fn new() -> Self {
        init::create_world_core()
    }

    /// Apply a JSON preset (gravity, timestep, initial bodies/joints).
    pub fn load_preset_json(&mut self, json: &str) -> Result<(), String> {
        let preset = WorldPreset::from_json(json)?;
        init::apply_preset(self, &preset)
    }

    /// Current settings and object counts as JSON for the host UI.
    pub fn manifest_json(&self) -> String {
        init::manifest_json(self)
    }

    // === SETTINGS ===

    pub fn set_gravity(&mut self, x: f32, y: f32) {
        settings::set_gravity(self, x, y);
    }

    pub fn gravity(&self) -> Vec2 {
        self.gravity
    }

    pub fn set_time_step(&mut self, step: f32) {
        settings::set_time_step(self, step);
    }

    pub fn time_step(&self) -> f32 {
        self.time_step
    }

    /// Enable or disable per-step perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        settings::enable_perf_metrics(self, enabled);
    }

    /// Get last step perf snapshot (zeros when perf disabled)
    pub fn get_perf_stats(&self) -> PerfStats {
        settings::get_perf_stats(self)
    }

    // === BODY LIFECYCLE ===

    /// Create a planar body, returning its id.
    pub fn create_body(&mut self, kind: BodyKind, x: f32, y: f32) -> u32 {
        bodies::create_body(self, kind, x, y)
    }

    /// Create a spatial body, returning its id.
    pub fn create_body_3d(&mut self, kind: BodyKind, x: f32, y: f32, z: f32) -> u32 {
        bodies::create_body_3d(self, kind, x, y, z)
    }

    /// Remove a body. Joints referencing it are left in place and become
    /// inert no-ops on their next resolution pass.
    pub fn remove_body(&mut self, id: u32) {
        bodies::remove_body(self, id);
    }

    /// Drop every body and joint. Id counters keep counting.
    pub fn clear(&mut self) {
        bodies::clear(self);
    }

    // === BODY PROPERTIES ===

    pub fn set_body_position(&mut self, id: u32, x: f32, y: f32) {
        bodies::set_body_position(self, id, x, y);
    }

    pub fn set_body_velocity(&mut self, id: u32, x: f32, y: f32) {
        bodies::set_body_velocity(self, id, x, y);
    }

    pub fn set_body_rotation(&mut self, id: u32, rotation: f32) {
        bodies::set_body_rotation(self, id, rotation);
    }

    pub fn set_body_position_3d(&mut self, id: u32, x: f32, y: f32, z: f32) {
        bodies::set_body_position_3d(self, id, x, y, z);
    }

    pub fn set_body_velocity_3d(&mut self, id: u32, x: f32, y: f32, z: f32) {
        bodies::set_body_velocity_3d(self, id, x, y, z);
    }

    pub fn set_body_rotation_3d(&mut self, id: u32, x: f32, y: f32, z: f32) {
        bodies::set_body_rotation_3d(self, id, x, y, z);
    }

    pub fn set_body_angular_velocity_3d(&mut self, id: u32, x: f32, y: f32, z: f32) {
        bodies::set_body_angular_velocity_3d(self, id, x, y, z);
    }

    /// No-op on STATIC bodies, which stay at mass 0.
    pub fn set_body_mass(&mut self, id: u32, mass: f32) {
        bodies::set_body_mass(self, id, mass);
    }

    pub fn set_body_friction(&mut self, id: u32, friction: f32) {
        bodies::set_body_friction(self, id, friction);
    }

    pub fn set_body_restitution(&mut self, id: u32, restitution: f32) {
        bodies::set_body_restitution(self, id, restitution);
    }

    pub fn set_body_density(&mut self, id: u32, density: f32) {
        bodies::set_body_density(self, id, density);
    }

    // === SHAPES ===

    pub fn set_circle_shape(&mut self, id: u32, radius: f32) {
        shapes::set_circle_shape(self, id, radius);
    }

    pub fn set_rectangle_shape(&mut self, id: u32, width: f32, height: f32) {
        shapes::set_rectangle_shape(self, id, width, height);
    }

    pub fn set_polygon_shape(&mut self, id: u32, vertices: Vec<Vec2>) {
        shapes::set_polygon_shape(self, id, vertices);
    }

    /// 3D shape setters are no-ops on planar bodies.
    pub fn set_sphere_shape(&mut self, id: u32, radius: f32) {
        shapes::set_sphere_shape(self, id, radius);
    }

    pub fn set_box_shape(&mut self, id: u32, width: f32, height: f32, depth: f32) {
        shapes::set_box_shape(self, id, width, height, depth);
    }

    pub fn set_capsule_shape(&mut self, id: u32, radius: f32, height: f32) {
        shapes::set_capsule_shape(self, id, radius, height);
    }

    pub fn set_mesh_shape(&mut self, id: u32, vertices: Vec<Vec3>) {
        shapes::set_mesh_shape(self, id, vertices);
    }

    // === FORCES ===
    // All force/impulse/torque calls are no-ops unless the target body is
    // DYNAMIC (see RigidBody::inv_mass).

    pub fn apply_force(&mut self, id: u32, x: f32, y: f32) {
        forces::apply_force(self, id, x, y);
    }

    pub fn apply_impulse(&mut self, id: u32, x: f32, y: f32) {
        forces::apply_impulse(self, id, x, y);
    }

    pub fn apply_torque(&mut self, id: u32, torque: f32) {
        forces::apply_torque(self, id, torque);
    }

    pub fn apply_force_at_point(&mut self, id: u32, fx: f32, fy: f32, px: f32, py: f32) {
        forces::apply_force_at_point(self, id, fx, fy, px, py);
    }

    pub fn apply_force_3d(&mut self, id: u32, x: f32, y: f32, z: f32) {
        forces::apply_force_3d(self, id, x, y, z);
    }

    pub fn apply_impulse_3d(&mut self, id: u32, x: f32, y: f32, z: f32) {
        forces::apply_impulse_3d(self, id, x, y, z);
    }

    pub fn apply_torque_3d(&mut self, id: u32, x: f32, y: f32, z: f32) {
        forces::apply_torque_3d(self, id, x, y, z);
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
        forces::apply_force_at_point_3d(self, id, fx, fy, fz, px, py, pz);
    }

    // === JOINTS ===

    pub fn create_pin_joint(&mut self, body_a: u32, body_b: u32, x: f32, y: f32) -> u32 {
        joints::create_pin_joint(self, body_a, body_b, x, y)
    }

    /// Rest length is captured from the bodies' current separation
    /// (0 when either body is missing).
    pub fn create_spring_joint(
        &mut self,
        body_a: u32,
        body_b: u32,
        stiffness: f32,
        damping: f32,
    ) -> u32 {
        joints::create_spring_joint(self, body_a, body_b, stiffness, damping)
    }

    pub fn create_distance_joint(&mut self, body_a: u32, body_b: u32, length: f32) -> u32 {
        joints::create_distance_joint(self, body_a, body_b, length)
    }

    pub fn create_revolute_joint(&mut self, body_a: u32, body_b: u32, x: f32, y: f32) -> u32 {
        joints::create_revolute_joint(self, body_a, body_b, x, y)
    }

    pub fn create_prismatic_joint(&mut self, body_a: u32, body_b: u32, x: f32, y: f32) -> u32 {
        joints::create_prismatic_joint(self, body_a, body_b, x, y)
    }

    pub fn create_ball_socket_joint(
        &mut self,
        body_a: u32,
        body_b: u32,
        x: f32,
        y: f32,
        z: f32,
    ) -> u32 {
        joints::create_ball_socket_joint(self, body_a, body_b, x, y, z)
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
        joints::create_hinge_joint(self, body_a, body_b, ax, ay, az, axis_x, axis_y, axis_z)
    }

    pub fn create_slider_joint(&mut self, body_a: u32, body_b: u32, x: f32, y: f32, z: f32) -> u32 {
        joints::create_slider_joint(self, body_a, body_b, x, y, z)
    }

    pub fn create_universal_joint(
        &mut self,
        body_a: u32,
        body_b: u32,
        x: f32,
        y: f32,
        z: f32,
    ) -> u32 {
        joints::create_universal_joint(self, body_a, body_b, x, y, z)
    }

    pub fn create_fixed_joint(&mut self, body_a: u32, body_b: u32) -> u32 {
        joints::create_fixed_joint(self, body_a, body_b)
    }

    pub fn remove_joint(&mut self, id: u32) {
        joints::remove_joint(self, id);
    }

    pub fn set_joint_active(&mut self, id: u32, active: bool) {
        joints::set_joint_active(self, id, active);
    }

    // === SIMULATION ===

    /// One fixed tick: integrate, resolve joints, detect collisions,
    /// resolve collisions.
    pub fn step(&mut self) {
        step::step(self);
    }

    /// Advance by a variable frame delta (see step/update.rs for the
    /// accumulator semantics).
    pub fn update(&mut self, delta_time: f32) {
        update::update(self, delta_time);
    }

    // === QUERIES ===

    /// Planar position projection; zero for unknown ids.
    pub fn body_position(&self, id: u32) -> Vec2 {
        queries::body_position(self, id)
    }

    pub fn body_velocity(&self, id: u32) -> Vec2 {
        queries::body_velocity(self, id)
    }

    pub fn body_rotation(&self, id: u32) -> f32 {
        queries::body_rotation(self, id)
    }

    pub fn body_position_3d(&self, id: u32) -> Vec3 {
        queries::body_position_3d(self, id)
    }

    pub fn body_velocity_3d(&self, id: u32) -> Vec3 {
        queries::body_velocity_3d(self, id)
    }

    pub fn body_rotation_3d(&self, id: u32) -> Vec3 {
        queries::body_rotation_3d(self, id)
    }

    pub fn body_count(&self) -> usize {
        self.bodies.len()
    }

    pub fn joint_count(&self) -> usize {
        self.joints.len()
    }

    /// Narrow-phase test for one pair right now; false for unknown ids.
    pub fn check_collision(&self, body_a: u32, body_b: u32) -> bool {
        queries::check_collision(self, body_a, body_b)
    }

    /// All contacts at the current positions. Transient data: the
    /// returned records are not kept by the world.
    pub fn collisions(&self) -> Vec<Contact> {
        queries::collisions(self)
    }

    // === INTERNAL LOOKUPS ===

    pub(crate) fn body(&self, id: u32) -> Option<&RigidBody> {
        self.bodies.iter().find(|body| body.id == id)
    }

    pub(crate) fn body_mut(&mut self, id: u32) -> Option<&mut RigidBody> {
        self.bodies.iter_mut().find(|body| body.id == id)
    }

    pub(crate) fn joint_mut(&mut self, id: u32) -> Option<&mut PhysicsJoint> {
        self.joints.iter_mut().find(|joint| joint.id == id)
    }
}

impl Default for WorldCore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;
