/// Composite the blurred mask onto the camera and release the targets

use crate::renderer::{Color, CommandSequence, ProgramId, RenderTargetId};
use super::passes::{BLUR_PING, OUTLINE_COLOR, OUTLINE_FADE, PASS_COMPOSITE, TEMPORARY_TARGETS};

pub struct CompositeStage {
    program: ProgramId,
}

impl CompositeStage {
    pub fn new(program: ProgramId) -> Self {
        Self { program }
    }

    pub fn record(&self, sequence: &mut CommandSequence, color: Color, fade: f32) {
        sequence.set_render_target(RenderTargetId::CameraTarget);
        sequence.set_global_color(OUTLINE_COLOR, color);
        sequence.set_global_float(OUTLINE_FADE, fade);
        sequence.blit(BLUR_PING, RenderTargetId::CameraTarget, self.program, PASS_COMPOSITE);

        for id in TEMPORARY_TARGETS {
            sequence.release_temporary_target(id);
        }
    }
}
