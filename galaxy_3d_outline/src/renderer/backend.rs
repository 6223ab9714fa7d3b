/// RenderBackend trait - attaches command sequences to camera events

use crate::camera::CameraId;
use crate::error::Result;
use crate::renderer::{CommandSequence, TextureFormat};

/// Point in a camera's render order where an attached sequence runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CameraEvent {
    BeforeForwardOpaque,
    /// After opaque geometry, before transparents and post-processing
    AfterForwardOpaque,
    BeforeImageEffects,
    AfterEverything,
}

/// Graphics backend as seen by the outline renderer.
///
/// The backend keeps what it needs from an attached sequence (usually
/// by encoding it into a native command buffer through
/// `CommandSequence::encode`) and runs it every time `camera` reaches
/// `event`, until it is detached.
pub trait RenderBackend {
    /// Attach `sequence` to `camera` at `event`.
    ///
    /// # Errors
    ///
    /// Backend-specific; the outline skips the frame on failure.
    fn attach_command_sequence(
        &mut self,
        camera: CameraId,
        event: CameraEvent,
        sequence: &CommandSequence,
    ) -> Result<()>;

    /// Detach the sequence previously attached under the same name.
    fn detach_command_sequence(
        &mut self,
        camera: CameraId,
        event: CameraEvent,
        sequence: &CommandSequence,
    ) -> Result<()>;

    /// Depth/stencil format used when a camera does not specify one
    fn default_depth_stencil_format(&self) -> TextureFormat {
        TextureFormat::D24_UNORM_S8_UINT
    }
}
