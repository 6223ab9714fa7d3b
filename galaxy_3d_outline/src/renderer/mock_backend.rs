/// Mock backend for unit tests (no GPU required)
///
/// `MockBackend` records attach/detach calls as an ordered event log and
/// keeps a copy of every attached sequence; `MockCommandEncoder` records
/// replayed commands as strings.

use glam::Vec4;
use rustc_hash::FxHashMap;
use crate::camera::CameraId;
use crate::error::{Error, Result};
use crate::renderer::{
    CameraEvent, ClearFlags, Color, CommandEncoder, CommandSequence, PropertyId,
    RenderBackend, RenderTargetId, TemporaryTargetDesc, TextureFormat, ProgramId, RendererId,
};

// ============================================================================
// Mock CommandEncoder
// ============================================================================

#[derive(Debug, Default)]
pub struct MockCommandEncoder {
    pub commands: Vec<String>,
    /// Fail as soon as a command starting with this prefix is encoded
    pub fail_on: Option<&'static str>,
}

impl MockCommandEncoder {
    pub fn new() -> Self {
        Self::default()
    }

    fn push(&mut self, command: String) -> Result<()> {
        if let Some(prefix) = self.fail_on {
            if command.starts_with(prefix) {
                return Err(Error::BackendError(format!("mock encoder rejected '{}'", command)));
            }
        }
        self.commands.push(command);
        Ok(())
    }

    pub fn count_prefix(&self, prefix: &str) -> usize {
        self.commands.iter().filter(|c| c.starts_with(prefix)).count()
    }
}

impl CommandEncoder for MockCommandEncoder {
    fn get_temporary_target(&mut self, id: PropertyId, desc: &TemporaryTargetDesc) -> Result<()> {
        self.push(format!("get_temporary_target {} {}x{}", id, desc.width, desc.height))
    }

    fn release_temporary_target(&mut self, id: PropertyId) -> Result<()> {
        self.push(format!("release_temporary_target {}", id))
    }

    fn set_render_target(&mut self, target: RenderTargetId) -> Result<()> {
        self.push(format!("set_render_target {}", target))
    }

    fn clear_render_target(&mut self, flags: ClearFlags, _color: Color) -> Result<()> {
        self.push(format!("clear_render_target color={} depth={}",
            flags.contains(ClearFlags::COLOR), flags.contains(ClearFlags::DEPTH)))
    }

    fn blit(
        &mut self,
        source: RenderTargetId,
        destination: RenderTargetId,
        _program: ProgramId,
        pass: u32,
    ) -> Result<()> {
        self.push(format!("blit {}->{} pass={}", source, destination, pass))
    }

    fn draw_renderer(
        &mut self,
        renderer: RendererId,
        _program: ProgramId,
        submesh: u32,
        pass: u32,
    ) -> Result<()> {
        self.push(format!("draw_renderer {} submesh={} pass={}", renderer.0, submesh, pass))
    }

    fn set_global_float(&mut self, id: PropertyId, value: f32) -> Result<()> {
        self.push(format!("set_global_float {}={}", id, value))
    }

    fn set_global_vector(&mut self, id: PropertyId, value: Vec4) -> Result<()> {
        self.push(format!("set_global_vector {}=({},{})", id, value.x, value.y))
    }

    fn set_global_color(&mut self, id: PropertyId, _value: Color) -> Result<()> {
        self.push(format!("set_global_color {}", id))
    }
}

// ============================================================================
// Mock RenderBackend
// ============================================================================

#[derive(Debug)]
pub struct MockBackend {
    /// Ordered log: "attach #1", "detach #1", ...
    pub events: Vec<String>,
    pub attached: FxHashMap<(CameraId, CameraEvent), CommandSequence>,
    pub fail_attach: bool,
    pub fail_detach: bool,
    pub depth_stencil_format: TextureFormat,
}

impl MockBackend {
    pub fn new() -> Self {
        Self {
            events: Vec::new(),
            attached: FxHashMap::default(),
            fail_attach: false,
            fail_detach: false,
            depth_stencil_format: TextureFormat::D24_UNORM_S8_UINT,
        }
    }

    /// Sequence attached to `camera` after opaque geometry, if any
    pub fn attached_to(&self, camera: CameraId) -> Option<&CommandSequence> {
        self.attached.get(&(camera, CameraEvent::AfterForwardOpaque))
    }

    /// Replay what `camera` would execute this frame
    pub fn render_camera(&self, camera: CameraId) -> Result<MockCommandEncoder> {
        let mut encoder = MockCommandEncoder::new();
        if let Some(sequence) = self.attached_to(camera) {
            sequence.encode(&mut encoder)?;
        }
        Ok(encoder)
    }
}

impl RenderBackend for MockBackend {
    fn attach_command_sequence(
        &mut self,
        camera: CameraId,
        event: CameraEvent,
        sequence: &CommandSequence,
    ) -> Result<()> {
        if self.fail_attach {
            self.events.push(format!("attach_failed {}", camera));
            return Err(Error::BackendError("mock attach failure".to_string()));
        }
        if self.attached.contains_key(&(camera, event)) {
            return Err(Error::InvalidState(format!("camera {} already has a sequence", camera)));
        }
        self.events.push(format!("attach {}", camera));
        self.attached.insert((camera, event), sequence.clone());
        Ok(())
    }

    fn detach_command_sequence(
        &mut self,
        camera: CameraId,
        event: CameraEvent,
        _sequence: &CommandSequence,
    ) -> Result<()> {
        if self.fail_detach {
            self.events.push(format!("detach_failed {}", camera));
            return Err(Error::BackendError("mock detach failure".to_string()));
        }
        match self.attached.remove(&(camera, event)) {
            Some(_) => {
                self.events.push(format!("detach {}", camera));
                Ok(())
            }
            None => Err(Error::InvalidState(format!("camera {} has no sequence", camera))),
        }
    }

    fn default_depth_stencil_format(&self) -> TextureFormat {
        self.depth_stencil_format
    }
}
