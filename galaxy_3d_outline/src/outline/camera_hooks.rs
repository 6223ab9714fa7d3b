/// CameraHookManager - binds the outline sequence to one camera at a time.
///
/// Driven by the host's camera callbacks:
///
/// - pre-render(X): unbind any other camera, rebuild, attach to X
/// - post-render(X): detach from X
///
/// Preview cameras never get an outline. A failed attach drops the
/// outline for the frame. A failed detach keeps the binding, and no
/// other camera is bound until a later hook manages to detach it.

use crate::camera::{Camera, CameraId};
use crate::error::{Error, Result};
use crate::renderer::{CameraEvent, CommandSequence, RenderBackend};
use crate::selection::SelectionRegistry;
use crate::{engine_debug, engine_trace, engine_warn};
use super::config::{OutlineConfig, OutlinePrograms};
use super::culler::VisibilityCuller;
use super::rebuild::{OutlinePipeline, RebuildStats, SkipReason};

/// Camera event the outline runs at
pub const OUTLINE_EVENT: CameraEvent = CameraEvent::AfterForwardOpaque;

/// Camera currently carrying the outline sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CameraBinding {
    pub camera: CameraId,
    pub event: CameraEvent,
}

/// What a pre-render hook did
#[derive(Debug, Clone, PartialEq)]
pub enum HookOutcome {
    /// Hooks are not registered
    Unregistered,
    /// Shutdown has begun
    ShuttingDown,
    /// Editor preview camera
    IgnoredPreview,
    /// Camera already carries the sequence for this frame
    AlreadyBound,
    /// Nothing to draw, no binding installed
    Skipped(SkipReason),
    /// Sequence rebuilt and attached
    Bound(RebuildStats),
    /// Backend refused the sequence, no binding installed
    Failed(Error),
}

pub struct CameraHookManager {
    owner: String,
    pipeline: OutlinePipeline,
    sequence: Option<CommandSequence>,
    binding: Option<CameraBinding>,
}

impl CameraHookManager {
    /// `owner` labels the sequence: "ObjectSelectedRenderer: <owner>"
    pub fn new(owner: impl Into<String>, programs: OutlinePrograms) -> Self {
        Self {
            owner: owner.into(),
            pipeline: OutlinePipeline::new(programs),
            sequence: None,
            binding: None,
        }
    }

    pub fn binding(&self) -> Option<CameraBinding> {
        self.binding
    }

    pub fn bound_camera(&self) -> Option<CameraId> {
        self.binding.map(|b| b.camera)
    }

    /// Sequence recorded by the last successful rebuild, None before the first one
    pub fn sequence(&self) -> Option<&CommandSequence> {
        self.sequence.as_ref()
    }

    pub fn on_pre_render(
        &mut self,
        camera: &Camera,
        backend: &mut dyn RenderBackend,
        registry: &SelectionRegistry,
        config: &OutlineConfig,
        culler: &mut dyn VisibilityCuller,
    ) -> HookOutcome {
        if camera.is_preview() {
            engine_trace!("galaxy3d::CameraHooks", "Preview camera {} ignored", camera.id());
            return HookOutcome::IgnoredPreview;
        }

        match self.binding {
            Some(binding) if binding.camera == camera.id() => return HookOutcome::AlreadyBound,
            Some(_) => {
                // Never attach a second copy while the old camera still holds one
                if let Err(err) = self.unbind(backend) {
                    return HookOutcome::Failed(err);
                }
            }
            None => {}
        }

        let plan = match self.pipeline.prepare(
            registry,
            config,
            culler,
            camera,
            backend.default_depth_stencil_format(),
        ) {
            Ok(plan) => plan,
            Err(reason) => {
                engine_trace!("galaxy3d::CameraHooks",
                    "Camera {}: outline skipped ({:?})", camera.id(), reason);
                return HookOutcome::Skipped(reason);
            }
        };

        let owner = &self.owner;
        let sequence = self.sequence.get_or_insert_with(|| {
            CommandSequence::new(format!("ObjectSelectedRenderer: {}", owner))
        });
        sequence.clear();
        let stats = self.pipeline.record(&plan, sequence);

        if let Err(err) = backend.attach_command_sequence(camera.id(), OUTLINE_EVENT, sequence) {
            engine_warn!("galaxy3d::CameraHooks",
                "Camera {}: attach of '{}' failed, no outline this frame: {}",
                camera.id(), sequence.name(), err);
            return HookOutcome::Failed(err);
        }

        self.binding = Some(CameraBinding { camera: camera.id(), event: OUTLINE_EVENT });
        engine_debug!("galaxy3d::CameraHooks",
            "Camera {}: outline bound ({} objects, {} draws, {}x{})",
            camera.id(), stats.objects, stats.draws, stats.width, stats.height);
        HookOutcome::Bound(stats)
    }

    /// Detach from `camera` if it carries the sequence.
    ///
    /// Returns true if a binding was removed. A failed detach keeps the
    /// binding so the next hook retries it.
    pub fn on_post_render(&mut self, camera: &Camera, backend: &mut dyn RenderBackend) -> bool {
        match self.binding {
            Some(binding) if binding.camera == camera.id() => self.unbind(backend).is_ok(),
            _ => false,
        }
    }

    /// Detach whatever is bound.
    ///
    /// Returns false if a binding is still live afterwards.
    pub fn teardown(&mut self, backend: &mut dyn RenderBackend) -> bool {
        self.unbind(backend).is_ok()
    }

    /// Detach the current binding, if any.
    ///
    /// The binding is only cleared once the backend confirmed the detach.
    fn unbind(&mut self, backend: &mut dyn RenderBackend) -> Result<()> {
        let Some(binding) = self.binding else {
            return Ok(());
        };
        let Some(sequence) = self.sequence.as_ref() else {
            self.binding = None;
            return Ok(());
        };

        match backend.detach_command_sequence(binding.camera, binding.event, sequence) {
            Ok(()) => {
                self.binding = None;
                engine_trace!("galaxy3d::CameraHooks",
                    "Camera {}: outline detached", binding.camera);
                Ok(())
            }
            Err(err) => {
                engine_warn!("galaxy3d::CameraHooks",
                    "Camera {}: detach of '{}' failed, binding kept: {}",
                    binding.camera, sequence.name(), err);
                Err(err)
            }
        }
    }
}

#[cfg(test)]
#[path = "camera_hooks_tests.rs"]
mod tests;
