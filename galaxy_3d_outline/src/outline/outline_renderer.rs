/// OutlineRenderer - owned selection outline context.
///
/// Created and driven by the host render loop, one per editor/game
/// view that wants outlines. There is no global instance.
///
/// ```ignore
/// let mut outline = OutlineRenderer::new("main", programs);
/// outline.register();
///
/// outline.select(handle, &scene);
///
/// // per camera, every frame
/// outline.on_camera_pre_render(&camera, &mut backend);
/// // ... camera renders ...
/// outline.on_camera_post_render(&camera, &mut backend);
/// ```

use crate::camera::{Camera, CameraId};
use crate::renderer::{Color, CommandSequence, RenderBackend};
use crate::selection::{ObjectHandle, RenderableSource, SelectionRegistry};
use crate::{engine_debug, engine_info, engine_warn};
use super::camera_hooks::{CameraHookManager, HookOutcome};
use super::config::{OutlineConfig, OutlinePrograms};
use super::culler::{FrustumCuller, VisibilityCuller};

pub struct OutlineRenderer {
    name: String,
    registry: SelectionRegistry,
    config: OutlineConfig,
    culler: Box<dyn VisibilityCuller>,
    hooks: CameraHookManager,
    registered: bool,
    quitting: bool,
}

impl OutlineRenderer {
    /// Create an unregistered renderer with the default configuration
    /// and a frustum culler.
    pub fn new(name: impl Into<String>, programs: OutlinePrograms) -> Self {
        let name = name.into();
        Self {
            hooks: CameraHookManager::new(name.clone(), programs),
            name,
            registry: SelectionRegistry::new(),
            config: OutlineConfig::default(),
            culler: Box::new(FrustumCuller::new()),
            registered: false,
            quitting: false,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Replace the visibility strategy
    pub fn set_culler(&mut self, culler: Box<dyn VisibilityCuller>) {
        self.culler = culler;
    }

    // ===== REGISTRATION =====

    /// Enable the camera hooks
    pub fn register(&mut self) {
        if !self.registered {
            self.registered = true;
            engine_info!("galaxy3d::OutlineRenderer", "'{}' registered", self.name);
        }
    }

    /// Disable the camera hooks, detaching any live binding.
    ///
    /// Returns false, staying registered, if the detach failed. Calling
    /// again or letting the bound camera's post-render hook run retries it.
    pub fn unregister(&mut self, backend: &mut dyn RenderBackend) -> bool {
        if !self.registered {
            return true;
        }
        if !self.hooks.teardown(backend) {
            engine_warn!("galaxy3d::OutlineRenderer",
                "'{}' still bound after failed detach, staying registered", self.name);
            return false;
        }
        self.registered = false;
        engine_info!("galaxy3d::OutlineRenderer", "'{}' unregistered", self.name);
        true
    }

    pub fn is_registered(&self) -> bool {
        self.registered
    }

    /// Stop reacting to selection changes and pre-render hooks.
    ///
    /// Post-render still detaches a live binding so the backend is left
    /// clean.
    pub fn begin_shutdown(&mut self) {
        if !self.quitting {
            self.quitting = true;
            engine_debug!("galaxy3d::OutlineRenderer", "'{}' shutting down", self.name);
        }
    }

    pub fn is_shutting_down(&self) -> bool {
        self.quitting
    }

    // ===== SELECTION =====

    /// Select `handle`, or refresh its parts from `source`.
    ///
    /// Null and dead handles are ignored, as is everything after
    /// `begin_shutdown()`.
    pub fn select(&mut self, handle: ObjectHandle, source: &dyn RenderableSource) -> bool {
        if self.quitting {
            return false;
        }
        self.registry.select(handle, source)
    }

    pub fn deselect(&mut self, handle: ObjectHandle) -> bool {
        if self.quitting {
            return false;
        }
        self.registry.deselect(handle)
    }

    pub fn is_selected(&self, handle: ObjectHandle) -> bool {
        self.registry.contains(handle)
    }

    pub fn registry(&self) -> &SelectionRegistry {
        &self.registry
    }

    // ===== CONFIGURATION =====

    pub fn config(&self) -> &OutlineConfig {
        &self.config
    }

    pub fn set_outline_color(&mut self, color: Color) {
        self.config.set_color(color);
    }

    /// Negative widths are clamped to 0, which disables the outline
    pub fn set_outline_pixel_width(&mut self, pixel_width: f32) {
        self.config.set_pixel_width(pixel_width);
    }

    pub fn set_outline_fade(&mut self, fade: f32) {
        self.config.set_fade(fade);
    }

    // ===== CAMERA HOOKS =====

    pub fn on_camera_pre_render(
        &mut self,
        camera: &Camera,
        backend: &mut dyn RenderBackend,
    ) -> HookOutcome {
        if !self.registered {
            return HookOutcome::Unregistered;
        }
        if self.quitting {
            return HookOutcome::ShuttingDown;
        }
        self.hooks.on_pre_render(
            camera,
            backend,
            &self.registry,
            &self.config,
            self.culler.as_mut(),
        )
    }

    /// Returns true if the outline was detached from `camera`
    pub fn on_camera_post_render(
        &mut self,
        camera: &Camera,
        backend: &mut dyn RenderBackend,
    ) -> bool {
        if !self.registered {
            return false;
        }
        self.hooks.on_post_render(camera, backend)
    }

    pub fn bound_camera(&self) -> Option<CameraId> {
        self.hooks.bound_camera()
    }

    /// Last recorded outline sequence
    pub fn sequence(&self) -> Option<&CommandSequence> {
        self.hooks.sequence()
    }
}

#[cfg(test)]
#[path = "outline_renderer_tests.rs"]
mod tests;
