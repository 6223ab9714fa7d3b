/// Opaque GPU-side handles owned by the host engine

/// Compiled shader program (material) the backend knows how to bind.
///
/// The outline addresses programs by handle plus pass index only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ProgramId(pub u32);

/// Host renderer (draw unit) submitted by `draw_renderer`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RendererId(pub u64);

/// Host mesh asset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MeshId(pub u64);
