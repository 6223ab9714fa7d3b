//! Selection module
//!
//! Object handles, renderable parts, the host query seam and the
//! insertion-ordered selection registry.

mod object;
mod source;
mod object_table;
mod selection_registry;

pub use object::{ObjectHandle, MeshRef, PartKind, RenderablePart, AABB};
pub use source::RenderableSource;
pub use object_table::ObjectTable;
pub use selection_registry::{SelectionRegistry, SelectionEntry};
