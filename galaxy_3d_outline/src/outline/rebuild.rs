/// OutlinePipeline - per-camera rebuild of the outline sequence.
///
/// Split in two phases so that every early exit happens before the
/// sequence is touched:
///
/// - `prepare()` checks the gates, culls and sizes the targets
/// - `record()` appends mask, blur and composite to a cleared sequence

use crate::camera::Camera;
use crate::engine_warn;
use crate::renderer::{Color, CommandSequence, TemporaryTargetDesc, TextureFormat};
use crate::selection::SelectionRegistry;
use super::blur::BlurStage;
use super::composite::CompositeStage;
use super::config::{OutlineConfig, OutlinePrograms, MIN_VISIBLE_ALPHA};
use super::culler::{VisibilityCuller, VisibleSelection};
use super::mask_pass::MaskPassBuilder;

/// Why a rebuild produced no commands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// Nothing is selected
    EmptySelection,
    /// Outline alpha at or below one 8-bit step
    TransparentColor,
    /// Outline width is 0
    ZeroWidth,
    /// Camera target has no pixels after render scaling
    ZeroSizedCamera,
    /// Every selected part was culled
    NothingVisible,
}

/// Summary of a recorded rebuild
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RebuildStats {
    /// Objects with at least one visible part
    pub objects: usize,
    /// Visible parts
    pub parts: usize,
    /// Part draws (two per submesh)
    pub draws: usize,
    /// Temporary target width
    pub width: u32,
    /// Temporary target height
    pub height: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RebuildOutcome {
    Recorded(RebuildStats),
    Skipped(SkipReason),
}

/// Everything `record()` needs, captured by `prepare()`
#[derive(Debug, Clone)]
pub struct OutlinePlan {
    visible: VisibleSelection,
    target: TemporaryTargetDesc,
    color: Color,
    pixel_width: f32,
    fade: f32,
}

impl OutlinePlan {
    pub fn visible(&self) -> &VisibleSelection {
        &self.visible
    }

    pub fn target(&self) -> &TemporaryTargetDesc {
        &self.target
    }
}

pub struct OutlinePipeline {
    mask: MaskPassBuilder,
    blur: BlurStage,
    composite: CompositeStage,
}

impl OutlinePipeline {
    pub fn new(programs: OutlinePrograms) -> Self {
        Self {
            mask: MaskPassBuilder::new(programs),
            blur: BlurStage::new(programs.outline),
            composite: CompositeStage::new(programs.outline),
        }
    }

    /// Check the early-out gates and cull the selection for `camera`.
    ///
    /// `default_depth_stencil` is used when the camera does not report
    /// its own depth/stencil format, or reports a color format.
    pub fn prepare(
        &self,
        registry: &SelectionRegistry,
        config: &OutlineConfig,
        culler: &mut dyn VisibilityCuller,
        camera: &Camera,
        default_depth_stencil: TextureFormat,
    ) -> std::result::Result<OutlinePlan, SkipReason> {
        if registry.is_empty() {
            return Err(SkipReason::EmptySelection);
        }
        if config.color().a <= MIN_VISIBLE_ALPHA {
            return Err(SkipReason::TransparentColor);
        }
        if config.pixel_width() <= 0.0 {
            return Err(SkipReason::ZeroWidth);
        }

        let (width, height) = camera.scaled_pixel_size();
        let depth_stencil = match camera.depth_stencil_format() {
            Some(format) if format.is_depth() => format,
            Some(format) => {
                engine_warn!("galaxy3d::OutlinePipeline",
                    "Camera {}: {:?} is not a depth format, using {:?}",
                    camera.id(), format, default_depth_stencil);
                default_depth_stencil
            }
            None => default_depth_stencil,
        };
        let target = TemporaryTargetDesc::silhouette(width, height, depth_stencil);
        if target.is_empty() {
            return Err(SkipReason::ZeroSizedCamera);
        }

        let visible = culler.cull(registry, camera);
        if visible.is_empty() {
            return Err(SkipReason::NothingVisible);
        }

        Ok(OutlinePlan {
            visible,
            target,
            color: config.color(),
            pixel_width: config.pixel_width(),
            fade: config.fade(),
        })
    }

    /// Append the whole outline to `sequence`.
    ///
    /// The caller clears the sequence first.
    pub fn record(&self, plan: &OutlinePlan, sequence: &mut CommandSequence) -> RebuildStats {
        let draws = self.mask.record(sequence, &plan.visible, &plan.target);
        self.blur.record(sequence, plan.pixel_width);
        self.composite.record(sequence, plan.color, plan.fade);

        RebuildStats {
            objects: plan.visible.objects().len(),
            parts: plan.visible.part_count(),
            draws,
            width: plan.target.width,
            height: plan.target.height,
        }
    }

    /// `prepare()`, then clear and `record()` into `sequence`.
    ///
    /// A skipped rebuild leaves `sequence` untouched.
    pub fn rebuild(
        &self,
        registry: &SelectionRegistry,
        config: &OutlineConfig,
        culler: &mut dyn VisibilityCuller,
        camera: &Camera,
        default_depth_stencil: TextureFormat,
        sequence: &mut CommandSequence,
    ) -> RebuildOutcome {
        match self.prepare(registry, config, culler, camera, default_depth_stencil) {
            Ok(plan) => {
                sequence.clear();
                RebuildOutcome::Recorded(self.record(&plan, sequence))
            }
            Err(reason) => RebuildOutcome::Skipped(reason),
        }
    }
}

#[cfg(test)]
#[path = "rebuild_tests.rs"]
mod tests;
