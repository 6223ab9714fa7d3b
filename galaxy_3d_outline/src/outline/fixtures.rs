/// Shared scene fixtures for outline unit tests

use glam::{Mat4, Vec3};
use crate::camera::{Camera, CameraId, Viewport};
use crate::renderer::{MeshId, ProgramId, RendererId};
use crate::selection::{MeshRef, ObjectHandle, ObjectTable, RenderablePart, SelectionRegistry, AABB};
use super::OutlinePrograms;

pub const OUTLINE_PROGRAM: ProgramId = ProgramId(10);
pub const COPY_PROGRAM: ProgramId = ProgramId(20);

pub fn programs() -> OutlinePrograms {
    OutlinePrograms::new(OUTLINE_PROGRAM, COPY_PROGRAM)
}

/// 1920x1080 camera at (0, 0, 5) looking at the origin
pub fn camera(id: u64) -> Camera {
    let view = Mat4::look_at_rh(Vec3::new(0.0, 0.0, 5.0), Vec3::ZERO, Vec3::Y);
    let proj = Mat4::perspective_rh(std::f32::consts::FRAC_PI_4, 16.0 / 9.0, 0.1, 100.0);
    Camera::new(CameraId(id), view, proj, Viewport::new(1920.0, 1080.0))
}

/// Single-submesh part around the origin
pub fn visible_part(renderer: u64) -> RenderablePart {
    RenderablePart::mesh(
        RendererId(renderer),
        MeshRef::new(MeshId(renderer), 1),
        AABB::new(Vec3::splat(-0.5), Vec3::splat(0.5)),
    )
}

/// Single-submesh part far outside the camera frustum
pub fn culled_part(renderer: u64) -> RenderablePart {
    RenderablePart::mesh(
        RendererId(renderer),
        MeshRef::new(MeshId(renderer), 1),
        AABB::new(Vec3::splat(100.0), Vec3::splat(101.0)),
    )
}

/// Create an object with `parts` and select it
pub fn select(
    table: &mut ObjectTable,
    registry: &mut SelectionRegistry,
    name: &str,
    parts: Vec<RenderablePart>,
) -> ObjectHandle {
    let handle = table.create_object(name);
    table.set_parts(handle, parts);
    registry.select(handle, table);
    handle
}
