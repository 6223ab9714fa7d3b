/// Visibility culling strategies for the selection.
///
/// A VisibilityCuller decides, per camera, which selected parts emit a
/// silhouette this frame. Culled parts stay registered; they are only
/// skipped for this rebuild.

use crate::camera::Camera;
use crate::selection::{ObjectHandle, RenderablePart, SelectionRegistry};

/// Selected object with at least one visible part
#[derive(Debug, Clone)]
pub struct VisibleObject {
    registry_index: usize,
    handle: ObjectHandle,
    parts: Vec<RenderablePart>,
}

impl VisibleObject {
    pub fn new(registry_index: usize, handle: ObjectHandle, parts: Vec<RenderablePart>) -> Self {
        Self { registry_index, handle, parts }
    }

    /// Position of the object in selection order
    pub fn registry_index(&self) -> usize {
        self.registry_index
    }

    pub fn handle(&self) -> ObjectHandle {
        self.handle
    }

    /// Visible, drawable parts only
    pub fn parts(&self) -> &[RenderablePart] {
        &self.parts
    }
}

/// Result of culling the registry against one camera.
///
/// Ephemeral: built by a culler, consumed by the mask pass.
#[derive(Debug, Clone, Default)]
pub struct VisibleSelection {
    registry_len: usize,
    objects: Vec<VisibleObject>,
}

impl VisibleSelection {
    pub fn new(registry_len: usize) -> Self {
        Self { registry_len, objects: Vec::new() }
    }

    pub fn push(&mut self, object: VisibleObject) {
        if !object.parts.is_empty() {
            self.objects.push(object);
        }
    }

    /// Size of the registry the selection was culled from (culled objects included)
    pub fn registry_len(&self) -> usize {
        self.registry_len
    }

    pub fn objects(&self) -> &[VisibleObject] {
        &self.objects
    }

    pub fn part_count(&self) -> usize {
        self.objects.iter().map(|o| o.parts.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }
}

/// Strategy for determining visible selected parts from a camera.
///
/// `&mut self` allows stateful implementations (e.g. temporal
/// coherence between frames).
pub trait VisibilityCuller: Send + Sync {
    fn cull(&mut self, registry: &SelectionRegistry, camera: &Camera) -> VisibleSelection;
}

/// Brute-force culler - keeps every drawable part, no frustum test.
///
/// Useful when the host already culled the selection, and for tests.
pub struct BruteForceCuller;

impl BruteForceCuller {
    pub fn new() -> Self {
        Self
    }
}

impl Default for BruteForceCuller {
    fn default() -> Self {
        Self::new()
    }
}

impl VisibilityCuller for BruteForceCuller {
    fn cull(&mut self, registry: &SelectionRegistry, _camera: &Camera) -> VisibleSelection {
        collect_visible(registry, |_| true)
    }
}

/// Frustum culler - tests part bounds against the camera frustum.
///
/// Planes are extracted once per call from the camera view-projection.
pub struct FrustumCuller;

impl FrustumCuller {
    pub fn new() -> Self {
        Self
    }
}

impl Default for FrustumCuller {
    fn default() -> Self {
        Self::new()
    }
}

impl VisibilityCuller for FrustumCuller {
    fn cull(&mut self, registry: &SelectionRegistry, camera: &Camera) -> VisibleSelection {
        let frustum = camera.frustum();
        collect_visible(registry, |part| frustum.intersects_aabb(part.bounds()))
    }
}

/// Keep the parts accepted by `test` that have a mesh to draw
fn collect_visible(
    registry: &SelectionRegistry,
    test: impl Fn(&RenderablePart) -> bool,
) -> VisibleSelection {
    let mut visible = VisibleSelection::new(registry.len());

    for (index, entry) in registry.iter().enumerate() {
        let parts: Vec<RenderablePart> = entry.parts()
            .iter()
            .filter(|part| part.shared_mesh().is_some() && test(*part))
            .copied()
            .collect();
        visible.push(VisibleObject::new(index, entry.handle(), parts));
    }

    visible
}

#[cfg(test)]
#[path = "culler_tests.rs"]
mod tests;
