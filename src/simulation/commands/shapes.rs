use crate::systems::rigid_body::{Shape, Vec2, Vec3};

use super::WorldCore;

// Planar shape setters are accepted on any body. Spatial setters check
// the body's dimensionality and no-op on planar bodies.

pub(super) fn set_circle_shape(world: &mut WorldCore, id: u32, radius: f32) {
    if let Some(body) = world.body_mut(id) {
        body.shape = Shape::Circle { radius };
    }
}

pub(super) fn set_rectangle_shape(world: &mut WorldCore, id: u32, width: f32, height: f32) {
    if let Some(body) = world.body_mut(id) {
        body.shape = Shape::Rectangle { size: Vec2::new(width, height) };
    }
}

pub(super) fn set_polygon_shape(world: &mut WorldCore, id: u32, vertices: Vec<Vec2>) {
    if let Some(body) = world.body_mut(id) {
        body.shape = Shape::Polygon { vertices };
    }
}

pub(super) fn set_sphere_shape(world: &mut WorldCore, id: u32, radius: f32) {
    if let Some(body) = world.body_mut(id) {
        if body.is_3d() {
            body.shape = Shape::Sphere { radius };
        }
    }
}

pub(super) fn set_box_shape(world: &mut WorldCore, id: u32, width: f32, height: f32, depth: f32) {
    if let Some(body) = world.body_mut(id) {
        if body.is_3d() {
            body.shape = Shape::Box3 { size: Vec3::new(width, height, depth) };
        }
    }
}

pub(super) fn set_capsule_shape(world: &mut WorldCore, id: u32, radius: f32, height: f32) {
    if let Some(body) = world.body_mut(id) {
        if body.is_3d() {
            body.shape = Shape::Capsule { radius, height };
        }
    }
}

pub(super) fn set_mesh_shape(world: &mut WorldCore, id: u32, vertices: Vec<Vec3>) {
    if let Some(body) = world.body_mut(id) {
        if body.is_3d() {
            body.shape = Shape::Mesh { vertices };
        }
    }
}
