/// Frustum - six clipping planes for visibility culling.
///
/// Each plane is a Vec4 (A, B, C, D) with an inward-pointing unit normal
/// (A, B, C). A point P is inside when `dot(plane, (P, 1)) >= 0` for all
/// six planes.

use glam::{Mat4, Vec3, Vec4};
use crate::selection::AABB;

/// Frustum plane indices
pub const PLANE_LEFT: usize = 0;
pub const PLANE_RIGHT: usize = 1;
pub const PLANE_BOTTOM: usize = 2;
pub const PLANE_TOP: usize = 3;
pub const PLANE_NEAR: usize = 4;
pub const PLANE_FAR: usize = 5;

/// Six frustum planes: left, right, bottom, top, near, far.
#[derive(Debug, Clone, Copy)]
pub struct Frustum {
    pub planes: [Vec4; 6],
}

impl Frustum {
    /// Extract the planes from a view-projection matrix (Gribb & Hartmann).
    ///
    /// Works for perspective and orthographic projections.
    pub fn from_view_projection(vp: &Mat4) -> Self {
        let x = vp.row(0);
        let y = vp.row(1);
        let z = vp.row(2);
        let w = vp.row(3);

        let planes = [w + x, w - x, w + y, w - y, w + z, w - z].map(|plane| {
            let len = plane.truncate().length();
            if len > 0.0 { plane / len } else { plane }
        });

        Self { planes }
    }

    /// Conservative AABB test: `false` only when the box is fully outside.
    ///
    /// For each plane, the corner furthest along the normal (p-vertex) is
    /// tested; if it is behind the plane the whole box is.
    pub fn intersects_aabb(&self, aabb: &AABB) -> bool {
        self.planes.iter().all(|plane| {
            let normal = plane.truncate();
            let p_vertex = Vec3::select(normal.cmpge(Vec3::ZERO), aabb.max, aabb.min);
            normal.dot(p_vertex) + plane.w >= 0.0
        })
    }

    /// Point containment, used for diagnostics and tests.
    pub fn contains_point(&self, point: Vec3) -> bool {
        self.planes
            .iter()
            .all(|plane| plane.truncate().dot(point) + plane.w >= 0.0)
    }
}

#[cfg(test)]
#[path = "frustum_tests.rs"]
mod tests;
