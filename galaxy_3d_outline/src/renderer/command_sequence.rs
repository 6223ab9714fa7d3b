/// CommandSequence - deferred, reusable list of render commands
///
/// A sequence is recorded on the CPU, attached to a camera event and
/// replayed by the backend through a `CommandEncoder` when that camera
/// renders. Recording never fails; `encode()` validates the temporary
/// target lifecycle while replaying.

use glam::Vec4;
use rustc_hash::FxHashSet;
use crate::error::Result;
use crate::engine_bail;
use crate::renderer::{
    ClearFlags, Color, CommandEncoder, PropertyId, RenderTargetId,
    TemporaryTargetDesc, ProgramId, RendererId,
};

/// One recorded command
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    GetTemporaryTarget { id: PropertyId, desc: TemporaryTargetDesc },
    ReleaseTemporaryTarget { id: PropertyId },
    SetRenderTarget { target: RenderTargetId },
    ClearRenderTarget { flags: ClearFlags, color: Color },
    Blit { source: RenderTargetId, destination: RenderTargetId, program: ProgramId, pass: u32 },
    DrawRenderer { renderer: RendererId, program: ProgramId, submesh: u32, pass: u32 },
    SetGlobalFloat { id: PropertyId, value: f32 },
    SetGlobalVector { id: PropertyId, value: Vec4 },
    SetGlobalColor { id: PropertyId, value: Color },
}

/// Named, ordered command list.
///
/// Reused across frames: `clear()` keeps the allocation.
#[derive(Debug, Clone)]
pub struct CommandSequence {
    name: String,
    commands: Vec<Command>,
}

impl CommandSequence {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            commands: Vec::new(),
        }
    }

    /// Label shown by backend debuggers/profilers
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn commands(&self) -> &[Command] {
        &self.commands
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Drop every command, keep the capacity
    pub fn clear(&mut self) {
        self.commands.clear();
    }

    // ===== RECORDING =====

    pub fn get_temporary_target(&mut self, id: PropertyId, desc: TemporaryTargetDesc) {
        self.commands.push(Command::GetTemporaryTarget { id, desc });
    }

    pub fn release_temporary_target(&mut self, id: PropertyId) {
        self.commands.push(Command::ReleaseTemporaryTarget { id });
    }

    pub fn set_render_target(&mut self, target: impl Into<RenderTargetId>) {
        self.commands.push(Command::SetRenderTarget { target: target.into() });
    }

    pub fn clear_render_target(&mut self, flags: ClearFlags, color: Color) {
        self.commands.push(Command::ClearRenderTarget { flags, color });
    }

    pub fn blit(
        &mut self,
        source: impl Into<RenderTargetId>,
        destination: impl Into<RenderTargetId>,
        program: ProgramId,
        pass: u32,
    ) {
        self.commands.push(Command::Blit {
            source: source.into(),
            destination: destination.into(),
            program,
            pass,
        });
    }

    pub fn draw_renderer(&mut self, renderer: RendererId, program: ProgramId, submesh: u32, pass: u32) {
        self.commands.push(Command::DrawRenderer { renderer, program, submesh, pass });
    }

    pub fn set_global_float(&mut self, id: PropertyId, value: f32) {
        self.commands.push(Command::SetGlobalFloat { id, value });
    }

    pub fn set_global_vector(&mut self, id: PropertyId, value: Vec4) {
        self.commands.push(Command::SetGlobalVector { id, value });
    }

    pub fn set_global_color(&mut self, id: PropertyId, value: Color) {
        self.commands.push(Command::SetGlobalColor { id, value });
    }

    // ===== QUERIES =====

    /// Number of `GetTemporaryTarget` commands
    pub fn temporary_allocation_count(&self) -> usize {
        self.count(|c| matches!(c, Command::GetTemporaryTarget { .. }))
    }

    /// Number of `ReleaseTemporaryTarget` commands
    pub fn temporary_release_count(&self) -> usize {
        self.count(|c| matches!(c, Command::ReleaseTemporaryTarget { .. }))
    }

    /// Number of `DrawRenderer` commands
    pub fn draw_count(&self) -> usize {
        self.count(|c| matches!(c, Command::DrawRenderer { .. }))
    }

    /// Number of `Blit` commands using `pass`
    pub fn blit_count(&self, pass: u32) -> usize {
        self.count(|c| matches!(c, Command::Blit { pass: p, .. } if *p == pass))
    }

    fn count(&self, predicate: impl Fn(&Command) -> bool) -> usize {
        self.commands.iter().filter(|c| predicate(*c)).count()
    }

    // ===== REPLAY =====

    /// Replay every command into `encoder`, in recording order.
    ///
    /// # Errors
    ///
    /// - `InvalidResource` if a temporary target is used or released
    ///   without being acquired, acquired twice, or still held at the end
    /// - any error returned by the encoder
    pub fn encode(&self, encoder: &mut dyn CommandEncoder) -> Result<()> {
        let mut live: FxHashSet<PropertyId> = FxHashSet::default();

        for (index, command) in self.commands.iter().enumerate() {
            match command {
                Command::GetTemporaryTarget { id, desc } => {
                    if !live.insert(*id) {
                        engine_bail!(InvalidResource, "galaxy3d::CommandSequence",
                            "'{}' command {}: temporary target '{}' acquired twice",
                            self.name, index, id);
                    }
                    encoder.get_temporary_target(*id, desc)?;
                }
                Command::ReleaseTemporaryTarget { id } => {
                    if !live.remove(id) {
                        engine_bail!(InvalidResource, "galaxy3d::CommandSequence",
                            "'{}' command {}: temporary target '{}' released but not held",
                            self.name, index, id);
                    }
                    encoder.release_temporary_target(*id)?;
                }
                Command::SetRenderTarget { target } => {
                    Self::check_live(&live, &self.name, index, *target)?;
                    encoder.set_render_target(*target)?;
                }
                Command::ClearRenderTarget { flags, color } => {
                    encoder.clear_render_target(*flags, *color)?;
                }
                Command::Blit { source, destination, program, pass } => {
                    Self::check_live(&live, &self.name, index, *source)?;
                    Self::check_live(&live, &self.name, index, *destination)?;
                    encoder.blit(*source, *destination, *program, *pass)?;
                }
                Command::DrawRenderer { renderer, program, submesh, pass } => {
                    encoder.draw_renderer(*renderer, *program, *submesh, *pass)?;
                }
                Command::SetGlobalFloat { id, value } => {
                    encoder.set_global_float(*id, *value)?;
                }
                Command::SetGlobalVector { id, value } => {
                    encoder.set_global_vector(*id, *value)?;
                }
                Command::SetGlobalColor { id, value } => {
                    encoder.set_global_color(*id, *value)?;
                }
            }
        }

        if let Some(leaked) = live.iter().next() {
            engine_bail!(InvalidResource, "galaxy3d::CommandSequence",
                "'{}': temporary target '{}' never released ({} leaked)",
                self.name, leaked, live.len());
        }

        Ok(())
    }

    fn check_live(
        live: &FxHashSet<PropertyId>,
        name: &str,
        index: usize,
        target: RenderTargetId,
    ) -> Result<()> {
        if let RenderTargetId::Temporary(id) = target {
            if !live.contains(&id) {
                engine_bail!(InvalidResource, "galaxy3d::CommandSequence",
                    "'{}' command {}: temporary target '{}' used but not held",
                    name, index, id);
            }
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "command_sequence_tests.rs"]
mod tests;
