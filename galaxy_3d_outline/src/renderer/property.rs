/// Named shader properties and render target identifiers

use std::fmt;

/// Global shader property or temporary target name.
///
/// Names are compile-time constants shared with the shader sources,
/// e.g. `_ObjectId` or `_BlurDirection`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PropertyId(&'static str);

impl PropertyId {
    pub const fn new(name: &'static str) -> Self {
        Self(name)
    }

    pub fn name(&self) -> &'static str {
        self.0
    }
}

impl fmt::Display for PropertyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

/// Render target a command reads from or writes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RenderTargetId {
    /// The color buffer of the camera currently rendering
    CameraTarget,
    /// A temporary target acquired earlier in the same sequence
    Temporary(PropertyId),
}

impl fmt::Display for RenderTargetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderTargetId::CameraTarget => f.write_str("CameraTarget"),
            RenderTargetId::Temporary(id) => write!(f, "{}", id),
        }
    }
}

impl From<PropertyId> for RenderTargetId {
    fn from(id: PropertyId) -> Self {
        RenderTargetId::Temporary(id)
    }
}
