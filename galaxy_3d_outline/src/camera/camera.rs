/// Camera - passive snapshot handed to the outline hooks.
///
/// The host computes view/projection and resolution; the outline only
/// reads them. Frustum planes are derived on demand from the
/// view-projection matrix, once per rebuild.

use glam::Mat4;
use crate::renderer::TextureFormat;
use super::frustum::Frustum;

/// Name the editor gives its asset-preview camera.
pub const PREVIEW_CAMERA_NAME: &str = "Preview Scene Camera";

/// Stable camera identity, assigned by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CameraId(pub u64);

impl std::fmt::Display for CameraId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// What the camera renders for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CameraKind {
    /// In-game camera
    Game,
    /// Editor scene view
    SceneView,
    /// Editor asset-preview surface (thumbnails, inspector previews)
    Preview,
}

/// Viewport in pixels, before render scaling.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub min_depth: f32,
    pub max_depth: f32,
}

impl Viewport {
    /// Full-depth viewport at the origin.
    pub fn new(width: f32, height: f32) -> Self {
        Self { x: 0.0, y: 0.0, width, height, min_depth: 0.0, max_depth: 1.0 }
    }
}

/// Camera snapshot. Computes nothing except derived matrices and sizes.
#[derive(Debug, Clone)]
pub struct Camera {
    id: CameraId,
    name: String,
    kind: CameraKind,
    view_matrix: Mat4,
    projection_matrix: Mat4,
    viewport: Viewport,
    render_scale: f32,
    depth_stencil_format: Option<TextureFormat>,
}

impl Camera {
    /// Create a game camera with render scale 1 and the platform depth format.
    pub fn new(id: CameraId, view: Mat4, projection: Mat4, viewport: Viewport) -> Self {
        Self {
            id,
            name: String::new(),
            kind: CameraKind::Game,
            view_matrix: view,
            projection_matrix: projection,
            viewport,
            render_scale: 1.0,
            depth_stencil_format: None,
        }
    }

    // ===== GETTERS =====

    pub fn id(&self) -> CameraId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> CameraKind {
        self.kind
    }

    /// View matrix (inverse of the camera's world transform).
    pub fn view_matrix(&self) -> &Mat4 {
        &self.view_matrix
    }

    /// Projection matrix (perspective or orthographic).
    pub fn projection_matrix(&self) -> &Mat4 {
        &self.projection_matrix
    }

    /// Combined view-projection matrix (projection * view).
    pub fn view_projection_matrix(&self) -> Mat4 {
        self.projection_matrix * self.view_matrix
    }

    /// Frustum planes extracted from the view-projection matrix.
    pub fn frustum(&self) -> Frustum {
        Frustum::from_view_projection(&self.view_projection_matrix())
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    /// Dynamic-resolution factor applied to the viewport.
    pub fn render_scale(&self) -> f32 {
        self.render_scale
    }

    /// Depth/stencil format of the camera target, `None` = platform default.
    pub fn depth_stencil_format(&self) -> Option<TextureFormat> {
        self.depth_stencil_format
    }

    /// Pixel size of the camera target after render scaling.
    pub fn scaled_pixel_size(&self) -> (u32, u32) {
        let scale = |extent: f32| (extent * self.render_scale).round().max(0.0) as u32;
        (scale(self.viewport.width), scale(self.viewport.height))
    }

    /// True for editor preview surfaces, by kind or by the editor's camera name.
    pub fn is_preview(&self) -> bool {
        self.kind == CameraKind::Preview || self.name == PREVIEW_CAMERA_NAME
    }

    // ===== SETTERS - store, compute nothing =====

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn set_kind(&mut self, kind: CameraKind) {
        self.kind = kind;
    }

    pub fn set_view(&mut self, matrix: Mat4) {
        self.view_matrix = matrix;
    }

    pub fn set_projection(&mut self, matrix: Mat4) {
        self.projection_matrix = matrix;
    }

    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    /// Negative or NaN scales collapse to 0 (zero-sized target).
    pub fn set_render_scale(&mut self, scale: f32) {
        self.render_scale = scale.max(0.0);
    }

    pub fn set_depth_stencil_format(&mut self, format: Option<TextureFormat>) {
        self.depth_stencil_format = format;
    }
}

#[cfg(test)]
#[path = "camera_tests.rs"]
mod tests;
