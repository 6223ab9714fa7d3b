//! Object handles and renderable parts.

use glam::Vec3;
use crate::renderer::{MeshId, RendererId};

slotmap::new_key_type! {
    /// Opaque scene object handle, stable for the object's lifetime.
    ///
    /// `ObjectHandle::default()` is the null handle.
    pub struct ObjectHandle;
}

// ===== AABB =====

/// Axis-Aligned Bounding Box in world space
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AABB {
    /// Minimum corner (x, y, z)
    pub min: Vec3,
    /// Maximum corner (x, y, z)
    pub max: Vec3,
}

impl AABB {
    pub fn new(min: Vec3, max: Vec3) -> Self {
        Self { min, max }
    }

    pub fn from_center_half_extents(center: Vec3, half_extents: Vec3) -> Self {
        let half = half_extents.abs();
        Self { min: center - half, max: center + half }
    }
}

// ===== MESH / PART =====

/// Shared mesh referenced by a part
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MeshRef {
    pub mesh: MeshId,
    pub submesh_count: u32,
}

impl MeshRef {
    pub fn new(mesh: MeshId, submesh_count: u32) -> Self {
        Self { mesh, submesh_count }
    }
}

/// Renderer variant of a part
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PartKind {
    /// Static mesh renderer; `None` when no mesh is assigned
    Mesh { mesh: Option<MeshRef> },
    /// Skinned mesh renderer drawing its shared (bind-pose) mesh
    SkinnedMesh { shared_mesh: Option<MeshRef> },
    /// Particles, trails, UI... never outlined
    Other,
}

/// Drawable sub-component of a scene object.
///
/// Owned by the scene; the registry keeps a copy of this descriptor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderablePart {
    renderer: RendererId,
    kind: PartKind,
    bounds: AABB,
    static_batched: bool,
}

impl RenderablePart {
    pub fn new(renderer: RendererId, kind: PartKind, bounds: AABB) -> Self {
        Self { renderer, kind, bounds, static_batched: false }
    }

    /// Mesh renderer with an assigned mesh
    pub fn mesh(renderer: RendererId, mesh: MeshRef, bounds: AABB) -> Self {
        Self::new(renderer, PartKind::Mesh { mesh: Some(mesh) }, bounds)
    }

    /// Skinned renderer with an assigned shared mesh
    pub fn skinned(renderer: RendererId, mesh: MeshRef, bounds: AABB) -> Self {
        Self::new(renderer, PartKind::SkinnedMesh { shared_mesh: Some(mesh) }, bounds)
    }

    /// Mark the part as merged into a static batch
    pub fn with_static_batching(mut self, static_batched: bool) -> Self {
        self.static_batched = static_batched;
        self
    }

    pub fn renderer(&self) -> RendererId {
        self.renderer
    }

    pub fn kind(&self) -> &PartKind {
        &self.kind
    }

    /// World-space bounds
    pub fn bounds(&self) -> &AABB {
        &self.bounds
    }

    pub fn is_static_batched(&self) -> bool {
        self.static_batched
    }

    /// Mesh the part draws, whatever the renderer variant
    pub fn shared_mesh(&self) -> Option<&MeshRef> {
        match &self.kind {
            PartKind::Mesh { mesh } => mesh.as_ref(),
            PartKind::SkinnedMesh { shared_mesh } => shared_mesh.as_ref(),
            PartKind::Other => None,
        }
    }
}
