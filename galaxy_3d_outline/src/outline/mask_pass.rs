/// Silhouette mask pass.
///
/// Allocates the three temporary targets, saves the camera color buffer
/// into the mask copy, clears the camera color and draws every visible
/// part with the two mask passes. Each object writes its own ID so the
/// extract pass can find edges between touching selected objects.

use crate::renderer::{ClearFlags, Color, CommandSequence, RenderTargetId, TemporaryTargetDesc};
use super::config::OutlinePrograms;
use super::culler::VisibleSelection;
use super::passes::{
    MASK_COPY, OBJECT_ID, PASS_COPY, PASS_MASK_OCCLUDED, PASS_MASK_VISIBLE, TEMPORARY_TARGETS,
};

/// ID written by the object at `index` out of `count` selected objects.
///
/// Evenly spaced in (0, 1): `(index + 1) / (count + 1)`. 0 stays free
/// for "no object".
pub fn object_id(index: usize, count: usize) -> f32 {
    (index + 1) as f32 / (count + 1) as f32
}

pub struct MaskPassBuilder {
    programs: OutlinePrograms,
}

impl MaskPassBuilder {
    pub fn new(programs: OutlinePrograms) -> Self {
        Self { programs }
    }

    /// Record the mask pass into `sequence`, returns the number of part draws.
    pub fn record(
        &self,
        sequence: &mut CommandSequence,
        visible: &VisibleSelection,
        target: &TemporaryTargetDesc,
    ) -> usize {
        for id in TEMPORARY_TARGETS {
            sequence.get_temporary_target(id, target.clone());
        }

        sequence.blit(RenderTargetId::CameraTarget, MASK_COPY, self.programs.copy, PASS_COPY);
        sequence.set_render_target(RenderTargetId::CameraTarget);
        sequence.clear_render_target(ClearFlags::COLOR, Color::CLEAR);

        let mut draws = 0;
        for object in visible.objects() {
            sequence.set_global_float(
                OBJECT_ID,
                object_id(object.registry_index(), visible.registry_len()),
            );

            for part in object.parts() {
                let Some(mesh) = part.shared_mesh() else {
                    continue;
                };
                // Static batches are not addressable per submesh
                let submeshes = if part.is_static_batched() { 1 } else { mesh.submesh_count };
                for submesh in 0..submeshes {
                    sequence.draw_renderer(part.renderer(), self.programs.outline, submesh, PASS_MASK_VISIBLE);
                    sequence.draw_renderer(part.renderer(), self.programs.outline, submesh, PASS_MASK_OCCLUDED);
                    draws += 2;
                }
            }
        }

        draws
    }
}

#[cfg(test)]
#[path = "mask_pass_tests.rs"]
mod tests;
