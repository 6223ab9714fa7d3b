//! Camera module - camera snapshot and frustum.
//!
//! The outline renderer does NOT own cameras. The host passes a camera
//! snapshot to each pre/post-render hook; the snapshot carries what the
//! outline needs (identity, matrices, resolution, depth format).

mod camera;
mod frustum;

pub use camera::{Camera, CameraId, CameraKind, Viewport, PREVIEW_CAMERA_NAME};
pub use frustum::{
    Frustum,
    PLANE_LEFT, PLANE_RIGHT, PLANE_BOTTOM, PLANE_TOP, PLANE_NEAR, PLANE_FAR,
};
