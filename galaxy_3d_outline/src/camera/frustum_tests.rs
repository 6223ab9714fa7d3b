use glam::{Mat4, Vec3};
use crate::selection::AABB;
use super::*;

fn perspective_frustum(fov: f32, far: f32) -> Frustum {
    let projection = Mat4::perspective_rh(fov, 1.0, 0.1, far);
    let view = Mat4::look_at_rh(Vec3::new(0.0, 0.0, 5.0), Vec3::ZERO, Vec3::Y);
    Frustum::from_view_projection(&(projection * view))
}

// ============================================================================
// Frustum::from_view_projection
// ============================================================================

#[test]
fn test_planes_are_normalized() {
    let frustum = perspective_frustum(std::f32::consts::FRAC_PI_4, 100.0);
    for plane in &frustum.planes {
        assert!((plane.truncate().length() - 1.0).abs() < 1e-4);
    }
}

#[test]
fn test_orthographic_planes_are_normalized() {
    let vp = Mat4::orthographic_rh(-10.0, 10.0, -10.0, 10.0, 0.1, 100.0);
    let frustum = Frustum::from_view_projection(&vp);
    for plane in &frustum.planes {
        assert!((plane.truncate().length() - 1.0).abs() < 1e-4);
    }
}

#[test]
fn test_left_plane_faces_right() {
    let vp = Mat4::orthographic_rh(-5.0, 5.0, -5.0, 5.0, 0.1, 100.0);
    let frustum = Frustum::from_view_projection(&vp);
    assert!(frustum.planes[PLANE_LEFT].x > 0.0);
    assert!(frustum.planes[PLANE_RIGHT].x < 0.0);
    assert!(frustum.planes[PLANE_BOTTOM].y > 0.0);
    assert!(frustum.planes[PLANE_TOP].y < 0.0);
}

// ============================================================================
// Frustum::intersects_aabb
// ============================================================================

#[test]
fn test_aabb_inside_frustum() {
    let frustum = perspective_frustum(std::f32::consts::FRAC_PI_2, 100.0);
    let aabb = AABB::new(Vec3::splat(-1.0), Vec3::splat(1.0));
    assert!(frustum.intersects_aabb(&aabb));
}

#[test]
fn test_aabb_outside_frustum() {
    let frustum = perspective_frustum(std::f32::consts::FRAC_PI_4, 100.0);
    let aabb = AABB::new(Vec3::splat(100.0), Vec3::splat(101.0));
    assert!(!frustum.intersects_aabb(&aabb));
}

#[test]
fn test_aabb_behind_camera() {
    let frustum = perspective_frustum(std::f32::consts::FRAC_PI_2, 100.0);
    let aabb = AABB::new(Vec3::new(-1.0, -1.0, 10.0), Vec3::new(1.0, 1.0, 12.0));
    assert!(!frustum.intersects_aabb(&aabb));
}

#[test]
fn test_aabb_beyond_far_plane() {
    let frustum = perspective_frustum(std::f32::consts::FRAC_PI_2, 10.0);
    let aabb = AABB::new(Vec3::new(-1.0, -1.0, -20.0), Vec3::new(1.0, 1.0, -18.0));
    assert!(!frustum.intersects_aabb(&aabb));
}

#[test]
fn test_aabb_straddling_boundary_is_kept() {
    let vp = Mat4::orthographic_rh(-5.0, 5.0, -5.0, 5.0, 0.1, 100.0);
    let frustum = Frustum::from_view_projection(&vp);
    let aabb = AABB::new(Vec3::new(4.0, 0.0, -10.0), Vec3::new(6.0, 1.0, -5.0));
    assert!(frustum.intersects_aabb(&aabb));
}

// ============================================================================
// Frustum::contains_point
// ============================================================================

#[test]
fn test_contains_point() {
    let frustum = perspective_frustum(std::f32::consts::FRAC_PI_2, 100.0);
    assert!(frustum.contains_point(Vec3::ZERO));
    assert!(!frustum.contains_point(Vec3::new(0.0, 0.0, 50.0)));
}

#[test]
fn test_plane_constants() {
    assert_eq!(PLANE_LEFT, 0);
    assert_eq!(PLANE_RIGHT, 1);
    assert_eq!(PLANE_BOTTOM, 2);
    assert_eq!(PLANE_TOP, 3);
    assert_eq!(PLANE_NEAR, 4);
    assert_eq!(PLANE_FAR, 5);
}
