/// Host scene query used when an object is selected.

use super::object::{ObjectHandle, RenderablePart};

/// Scene-side query for an object's current renderable parts.
///
/// Implemented by the host scene graph (`ObjectTable` is a reference
/// implementation). Queried on every select, so LOD swaps and
/// re-parented children are picked up by re-selecting.
pub trait RenderableSource {
    /// False once the object has been destroyed
    fn is_alive(&self, handle: ObjectHandle) -> bool;

    /// Append the parts of `handle` and of all its descendants to `parts`,
    /// parent first.
    fn collect_renderable_parts(&self, handle: ObjectHandle, parts: &mut Vec<RenderablePart>);
}
