/// ObjectTable - minimal scene object hierarchy.
///
/// Uses a SlotMap for O(1) insert/remove with stable keys; removed keys
/// are never handed out again, so a stale `ObjectHandle` reads as dead.
/// Implements `RenderableSource` for hosts that have no scene graph of
/// their own, and for tests.

use slotmap::SlotMap;
use crate::error::Result;
use crate::engine_bail;
use super::object::{ObjectHandle, RenderablePart};
use super::source::RenderableSource;

struct SceneObject {
    name: String,
    parts: Vec<RenderablePart>,
    parent: Option<ObjectHandle>,
    children: Vec<ObjectHandle>,
}

/// Named objects, their parts, and a parent/child hierarchy.
pub struct ObjectTable {
    objects: SlotMap<ObjectHandle, SceneObject>,
}

impl ObjectTable {
    pub fn new() -> Self {
        Self { objects: SlotMap::with_key() }
    }

    /// Create a root object without parts
    pub fn create_object(&mut self, name: &str) -> ObjectHandle {
        self.objects.insert(SceneObject {
            name: name.to_string(),
            parts: Vec::new(),
            parent: None,
            children: Vec::new(),
        })
    }

    /// Destroy an object and all its descendants.
    ///
    /// Returns false if the handle is invalid.
    pub fn destroy_object(&mut self, handle: ObjectHandle) -> bool {
        let Some(object) = self.objects.remove(handle) else {
            return false;
        };
        if let Some(parent) = object.parent.and_then(|p| self.objects.get_mut(p)) {
            parent.children.retain(|&c| c != handle);
        }
        let mut pending = object.children;
        while let Some(child) = pending.pop() {
            if let Some(removed) = self.objects.remove(child) {
                pending.extend(removed.children);
            }
        }
        true
    }

    /// Append a part to an object. Returns false if the handle is invalid.
    pub fn add_part(&mut self, handle: ObjectHandle, part: RenderablePart) -> bool {
        match self.objects.get_mut(handle) {
            Some(object) => {
                object.parts.push(part);
                true
            }
            None => false,
        }
    }

    /// Replace all parts of an object (LOD swap, mesh change).
    pub fn set_parts(&mut self, handle: ObjectHandle, parts: Vec<RenderablePart>) -> bool {
        match self.objects.get_mut(handle) {
            Some(object) => {
                object.parts = parts;
                true
            }
            None => false,
        }
    }

    /// Parts of the object itself (children excluded)
    pub fn parts(&self, handle: ObjectHandle) -> Option<&[RenderablePart]> {
        self.objects.get(handle).map(|o| o.parts.as_slice())
    }

    /// Move `child` under `parent`, detaching it from its previous parent.
    ///
    /// # Errors
    ///
    /// - `InvalidResource` if either handle is invalid
    /// - `InvalidState` if `parent` is `child` or one of its descendants
    pub fn set_parent(&mut self, child: ObjectHandle, parent: ObjectHandle) -> Result<()> {
        if !self.objects.contains_key(child) || !self.objects.contains_key(parent) {
            engine_bail!(InvalidResource, "galaxy3d::ObjectTable",
                "set_parent: invalid handle (child {:?}, parent {:?})", child, parent);
        }

        let mut ancestor = Some(parent);
        while let Some(current) = ancestor {
            if current == child {
                engine_bail!(InvalidState, "galaxy3d::ObjectTable",
                    "set_parent: '{}' cannot become its own descendant",
                    self.objects[child].name);
            }
            ancestor = self.objects[current].parent;
        }

        if let Some(old) = self.objects[child].parent {
            self.objects[old].children.retain(|&c| c != child);
        }
        self.objects[child].parent = Some(parent);
        self.objects[parent].children.push(child);
        Ok(())
    }

    pub fn parent(&self, handle: ObjectHandle) -> Option<ObjectHandle> {
        self.objects.get(handle).and_then(|o| o.parent)
    }

    pub fn name(&self, handle: ObjectHandle) -> Option<&str> {
        self.objects.get(handle).map(|o| o.name.as_str())
    }

    pub fn contains(&self, handle: ObjectHandle) -> bool {
        self.objects.contains_key(handle)
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }
}

impl Default for ObjectTable {
    fn default() -> Self {
        Self::new()
    }
}

impl RenderableSource for ObjectTable {
    fn is_alive(&self, handle: ObjectHandle) -> bool {
        self.objects.contains_key(handle)
    }

    /// Pre-order walk: an object's parts come before its children's,
    /// children in insertion order.
    fn collect_renderable_parts(&self, handle: ObjectHandle, parts: &mut Vec<RenderablePart>) {
        let mut pending = vec![handle];
        while let Some(current) = pending.pop() {
            if let Some(object) = self.objects.get(current) {
                parts.extend_from_slice(&object.parts);
                pending.extend(object.children.iter().rev());
            }
        }
    }
}

#[cfg(test)]
#[path = "object_table_tests.rs"]
mod tests;
