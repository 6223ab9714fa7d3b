/// CommandEncoder trait - backend side of a command sequence replay

use bitflags::bitflags;
use glam::Vec4;
use crate::error::Result;
use crate::renderer::{
    Color, PropertyId, RenderTargetId, TemporaryTargetDesc, ProgramId, RendererId,
};

bitflags! {
    /// Attachments cleared by `clear_render_target`
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct ClearFlags: u8 {
        const COLOR   = 1 << 0;
        const DEPTH   = 1 << 1;
        const STENCIL = 1 << 2;
    }
}

/// Receives the commands of a `CommandSequence`, in order.
///
/// Implemented by graphics backends (translating into native command
/// buffers) and by test recorders. Called from
/// `CommandSequence::encode()` once the sequence has been validated
/// command by command.
pub trait CommandEncoder {
    /// Acquire a temporary render target for the rest of the sequence
    fn get_temporary_target(&mut self, id: PropertyId, desc: &TemporaryTargetDesc) -> Result<()>;

    /// Return a temporary render target to the backend pool
    fn release_temporary_target(&mut self, id: PropertyId) -> Result<()>;

    /// Bind the target subsequent draws render into
    fn set_render_target(&mut self, target: RenderTargetId) -> Result<()>;

    /// Clear the bound target
    fn clear_render_target(&mut self, flags: ClearFlags, color: Color) -> Result<()>;

    /// Full-screen pass: sample `source`, render into `destination`
    /// with the given program pass
    fn blit(
        &mut self,
        source: RenderTargetId,
        destination: RenderTargetId,
        program: ProgramId,
        pass: u32,
    ) -> Result<()>;

    /// Draw one submesh of a host renderer with the given program pass
    fn draw_renderer(
        &mut self,
        renderer: RendererId,
        program: ProgramId,
        submesh: u32,
        pass: u32,
    ) -> Result<()>;

    /// Set a global float visible to every following command
    fn set_global_float(&mut self, id: PropertyId, value: f32) -> Result<()>;

    /// Set a global vector visible to every following command
    fn set_global_vector(&mut self, id: PropertyId, value: Vec4) -> Result<()>;

    /// Set a global color visible to every following command
    fn set_global_color(&mut self, id: PropertyId, value: Color) -> Result<()>;
}
